//! Fixed topping and order-type enumerations with their price tables.
//!
//! All parsing is lenient: the UI layer hands us raw strings, and
//! an unrecognized value means "leave the selection as it is", never an
//! error. [`MeatTopping::parse`] and friends therefore return `Option`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-choice meat topping for customizable dishes (radio semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatTopping {
    Chicken,
    Pork,
    Beef,
    Shrimp,
}

impl MeatTopping {
    /// Surcharge on top of the base price, in whole rupees.
    pub fn price(self) -> u32 {
        match self {
            MeatTopping::Chicken => 0,
            MeatTopping::Pork => 50,
            MeatTopping::Beef => 75,
            MeatTopping::Shrimp => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeatTopping::Chicken => "chicken",
            MeatTopping::Pork => "pork",
            MeatTopping::Beef => "beef",
            MeatTopping::Shrimp => "shrimp",
        }
    }

    /// Lenient lookup; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "chicken" => Some(MeatTopping::Chicken),
            "pork" => Some(MeatTopping::Pork),
            "beef" => Some(MeatTopping::Beef),
            "shrimp" => Some(MeatTopping::Shrimp),
            _ => None,
        }
    }
}

impl fmt::Display for MeatTopping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independently toggleable extras (set-membership semantics).
///
/// `Ord` gives the canonical ordering used by the topping signature, so two
/// carts with the same extras always serialize them identically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExtraTopping {
    FriedGarlic,
    Vegetables,
    Eggs,
    Cheese,
}

impl ExtraTopping {
    pub fn price(self) -> u32 {
        match self {
            ExtraTopping::FriedGarlic => 15,
            ExtraTopping::Vegetables => 20,
            ExtraTopping::Eggs => 25,
            ExtraTopping::Cheese => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtraTopping::FriedGarlic => "fried_garlic",
            ExtraTopping::Vegetables => "vegetables",
            ExtraTopping::Eggs => "eggs",
            ExtraTopping::Cheese => "cheese",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "fried_garlic" => Some(ExtraTopping::FriedGarlic),
            "vegetables" => Some(ExtraTopping::Vegetables),
            "eggs" => Some(ExtraTopping::Eggs),
            "cheese" => Some(ExtraTopping::Cheese),
            _ => None,
        }
    }
}

impl fmt::Display for ExtraTopping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fulfillment mode, each carrying a fixed surcharge.
///
/// String forms match the order-type selector's data attributes:
/// `dine_in`, `pick_up`, `delivery`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    DineIn,
    #[serde(rename = "pick_up")]
    Pickup,
    Delivery,
}

impl OrderType {
    /// Flat fee added to the cart total. Only delivery carries one.
    pub fn fee(self) -> u32 {
        match self {
            OrderType::DineIn | OrderType::Pickup => 0,
            OrderType::Delivery => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::DineIn => "dine_in",
            OrderType::Pickup => "pick_up",
            OrderType::Delivery => "delivery",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dine_in" => Some(OrderType::DineIn),
            "pick_up" => Some(OrderType::Pickup),
            "delivery" => Some(OrderType::Delivery),
            _ => None,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
