//! Domain data types: toppings, catalog items, carts, and reviews.

pub mod cart;
pub mod catalog;
pub mod review;
pub mod toppings;

pub use cart::*;
pub use catalog::*;
pub use review::*;
pub use toppings::*;
