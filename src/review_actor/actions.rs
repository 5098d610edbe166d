//! Custom actions for the Review actor.

/// Operations on a review beyond CRUD.
#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Register one "this review was helpful" vote.
    MarkHelpful,
}

/// Results match actions 1:1.
#[derive(Debug, Clone)]
pub enum ReviewActionResult {
    /// The vote count after the increment.
    MarkHelpful(u32),
}
