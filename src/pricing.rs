//! Pure price aggregation over cart state.
//!
//! No side effects anywhere in this module: every figure recomputes
//! deterministically from the cart, including one freshly rehydrated from
//! the persistence backend. Amounts are whole rupees.

use serde::{Deserialize, Serialize};

use crate::model::{Cart, LineItem};

/// Price of one unit of a line: base plus meat plus every selected extra.
pub fn unit_price(line: &LineItem) -> u32 {
    let meat = line.meat_topping.map_or(0, |m| m.price());
    let extras: u32 = line.extra_toppings.iter().map(|e| e.price()).sum();
    line.base_price + meat + extras
}

/// Sum of `unit_price × quantity` over all lines, before any fee.
pub fn subtotal(cart: &Cart) -> u32 {
    cart.items.iter().map(|l| unit_price(l) * l.quantity).sum()
}

/// Subtotal plus the order-type fee.
pub fn total(cart: &Cart) -> u32 {
    subtotal(cart) + cart.order_type.fee()
}

/// Total unit count across all lines.
pub fn items_count(cart: &Cart) -> u32 {
    cart.items.iter().map(|l| l.quantity).sum()
}

/// The figures the sidebar shows; returned by every cart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub items_count: u32,
    pub subtotal: u32,
    pub delivery_fee: u32,
    pub total: u32,
}

impl CartSummary {
    pub fn of(cart: &Cart) -> Self {
        Self {
            items_count: items_count(cart),
            subtotal: subtotal(cart),
            delivery_fee: cart.order_type.fee(),
            total: total(cart),
        }
    }
}
