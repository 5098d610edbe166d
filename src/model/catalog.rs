//! The product catalog boundary.
//!
//! Whether a dish can carry toppings is decided here, once, when an item
//! enters the catalog. Cart logic only ever consults the resulting
//! [`ItemKind`] tag, so the keyword matching stays confined to the
//! data-source edge of the system.

use serde::{Deserialize, Serialize};

/// Dish names containing any of these (case-insensitive) are customizable.
const CUSTOMIZABLE_KEYWORDS: &[&str] = &["rice", "noodle", "ramen", "pasta"];

/// Whether a menu item accepts meat and extra toppings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Carries a default meat topping and accepts extras.
    Customizable,
    /// Sold as-is.
    #[default]
    Standard,
}

impl ItemKind {
    /// Classify a dish by name. Called at the catalog boundary only.
    pub fn for_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        if CUSTOMIZABLE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            ItemKind::Customizable
        } else {
            ItemKind::Standard
        }
    }
}

/// A menu item as the cart sees it: identity, display name, base price in
/// whole rupees, and the customizability tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: u32,
    pub name: String,
    pub price: u32,
    pub kind: ItemKind,
}

impl MenuItem {
    /// Build a catalog entry, deriving the tag from the name.
    pub fn new(item_id: u32, name: impl Into<String>, price: u32) -> Self {
        let name = name.into();
        let kind = ItemKind::for_name(&name);
        Self { item_id, name, price, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rice_and_noodle_dishes_are_customizable() {
        assert_eq!(ItemKind::for_name("Fried Rice"), ItemKind::Customizable);
        assert_eq!(ItemKind::for_name("Garlic Noodles"), ItemKind::Customizable);
        assert_eq!(ItemKind::for_name("Tonkotsu Ramen"), ItemKind::Customizable);
    }

    #[test]
    fn drinks_and_sides_are_standard() {
        assert_eq!(ItemKind::for_name("Iced Tea"), ItemKind::Standard);
        assert_eq!(ItemKind::for_name("Spring Rolls"), ItemKind::Standard);
    }

    #[test]
    fn constructor_tags_on_entry() {
        let item = MenuItem::new(7, "Shrimp Pasta", 450);
        assert_eq!(item.kind, ItemKind::Customizable);
        let item = MenuItem::new(8, "Lemonade", 90);
        assert_eq!(item.kind, ItemKind::Standard);
    }
}
