//! Cart state: ordered line items plus the selected order type.
//!
//! All mutation rules live here as plain methods so they can be tested
//! without an actor around them. The cart actor wraps each mutation with
//! persistence and (for order-type changes) the remote mirror push.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{ExtraTopping, ItemKind, MeatTopping, MenuItem, OrderType};

/// One distinct product configuration and its quantity within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: u32,
    pub name: String,
    pub base_price: u32,
    /// Always at least 1 while the line exists; reaching 0 removes the line.
    pub quantity: u32,
    #[serde(default)]
    pub meat_topping: Option<MeatTopping>,
    #[serde(default)]
    pub extra_toppings: BTreeSet<ExtraTopping>,
    #[serde(default)]
    pub kind: ItemKind,
}

impl LineItem {
    /// A fresh line for a catalog item: quantity 1, and for customizable
    /// dishes the free default meat.
    pub fn for_item(item: &MenuItem) -> Self {
        let meat_topping = match item.kind {
            ItemKind::Customizable => Some(MeatTopping::Chicken),
            ItemKind::Standard => None,
        };
        Self {
            item_id: item.item_id,
            name: item.name.clone(),
            base_price: item.price,
            quantity: 1,
            meat_topping,
            extra_toppings: BTreeSet::new(),
            kind: item.kind,
        }
    }

    /// Derived identity key: `"{item_id}|{meat}|{extra,extra,...}"` with the
    /// extras in canonical order. Lines with equal signatures are the same
    /// configuration and merge on add.
    pub fn signature(&self) -> String {
        let meat = self.meat_topping.map(MeatTopping::as_str).unwrap_or("");
        let extras = self
            .extra_toppings
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}|{}|{}", self.item_id, meat, extras)
    }
}

/// The full cart state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: String,
    /// Insertion order is display order.
    pub items: Vec<LineItem>,
    pub order_type: OrderType,
}

/// Serialization image of a cart, written wholesale on every mutation.
///
/// Every field defaults, so a record written by an older build loads with
/// missing fields backfilled instead of being rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartRecord {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub order_type: OrderType,
}

/// Creation payload for a cart. Carts start empty; any prior state is
/// rehydrated from the backend in the `on_create` hook.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

impl Cart {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            order_type: OrderType::default(),
        }
    }

    /// Snapshot for persistence.
    pub fn record(&self) -> CartRecord {
        CartRecord {
            items: self.items.clone(),
            order_type: self.order_type,
        }
    }

    /// Replace state with a persisted record.
    pub fn restore(&mut self, record: CartRecord) {
        self.items = record.items;
        self.order_type = record.order_type;
    }

    /// Add a catalog item: merge into an existing line with the same topping
    /// signature, otherwise append a new line with quantity 1.
    pub fn add_item(&mut self, item: &MenuItem) {
        let candidate = LineItem::for_item(item);
        let signature = candidate.signature();
        match self.items.iter_mut().find(|l| l.signature() == signature) {
            Some(line) => line.quantity += 1,
            None => self.items.push(candidate),
        }
    }

    /// Adjust a line's quantity by `delta`; dropping below 1 removes the
    /// line. An out-of-range index is a no-op.
    pub fn adjust_quantity(&mut self, index: usize, delta: i64) {
        let Some(line) = self.items.get_mut(index) else {
            return;
        };
        let quantity = i64::from(line.quantity).saturating_add(delta);
        if quantity < 1 {
            self.items.remove(index);
        } else {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Replace the meat selection (radio semantics: never clears to none).
    /// No-op for standard items and for unknown topping strings.
    pub fn set_meat_topping(&mut self, index: usize, topping: &str) {
        let Some(line) = self.items.get_mut(index) else {
            return;
        };
        if line.kind != ItemKind::Customizable {
            return;
        }
        if let Some(meat) = MeatTopping::parse(topping) {
            line.meat_topping = Some(meat);
        }
    }

    /// Toggle an extra's membership; unknown strings are ignored.
    pub fn toggle_extra_topping(&mut self, index: usize, topping: &str) {
        let Some(line) = self.items.get_mut(index) else {
            return;
        };
        let Some(extra) = ExtraTopping::parse(topping) else {
            return;
        };
        if !line.extra_toppings.remove(&extra) {
            line.extra_toppings.insert(extra);
        }
    }

    /// Set the fulfillment mode. Returns `true` when the string parsed and
    /// the order type was applied; unknown values leave it unchanged.
    pub fn set_order_type(&mut self, raw: &str) -> bool {
        match OrderType::parse(raw) {
            Some(order_type) => {
                self.order_type = order_type;
                true
            }
            None => false,
        }
    }
}
