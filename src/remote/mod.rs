//! Best-effort remote integrations: cart mirroring and table availability.
//!
//! Nothing in this module is authoritative. The cart mirror is telemetry the
//! caller never waits on; availability answers gate a single UI step and are
//! fetched fresh each time. Overlapping requests are not deduplicated and
//! responses carry no ordering guarantee.

pub mod availability;
pub mod sync;

pub use availability::*;
pub use sync::*;

/// Errors from the remote endpoints. The mirror path swallows these; the
/// availability path surfaces them to gate the follow-up UI action.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}
