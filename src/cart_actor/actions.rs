//! Custom actions for the Cart actor.
//!
//! Every mutation a cart can undergo is an action rather than an update
//! payload, because each one carries its own addressing (a line index, a raw
//! topping string) and each one answers with the recomputed totals.

use crate::model::MenuItem;
use crate::pricing::CartSummary;

/// The cart mutations plus a read-only totals query.
///
/// Topping and order-type values travel as raw strings straight from the UI;
/// unrecognized values make the action a no-op, never an error.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge-on-add: an existing line with the same topping signature gains
    /// quantity, otherwise a new line is appended.
    AddItem(MenuItem),
    /// Adjust a line's quantity; reaching 0 removes the line.
    AdjustQuantity { index: usize, delta: i64 },
    /// Replace the meat selection on a customizable line.
    SetMeatTopping { index: usize, topping: String },
    /// Toggle an extra on or off.
    ToggleExtraTopping { index: usize, topping: String },
    /// Switch fulfillment mode; triggers the best-effort remote mirror.
    SetOrderType(String),
    /// Recompute totals without mutating.
    Totals,
}

/// Results match actions 1:1; every variant carries the totals recomputed
/// after the action, so callers always converge on actual state, including
/// after a no-op.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    AddItem(CartSummary),
    AdjustQuantity(CartSummary),
    SetMeatTopping(CartSummary),
    ToggleExtraTopping(CartSummary),
    SetOrderType(CartSummary),
    Totals(CartSummary),
}

impl CartActionResult {
    /// Collapse to the summary every variant carries.
    pub fn into_summary(self) -> CartSummary {
        match self {
            CartActionResult::AddItem(s)
            | CartActionResult::AdjustQuantity(s)
            | CartActionResult::SetMeatTopping(s)
            | CartActionResult::ToggleExtraTopping(s)
            | CartActionResult::SetOrderType(s)
            | CartActionResult::Totals(s) => s,
        }
    }
}
