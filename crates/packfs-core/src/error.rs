//! Error types for packfs-core

use thiserror::Error;

/// Result type alias for packfs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the embedded virtual file system
///
/// An unmatched request path is NOT represented here: absence of content is
/// a normal outcome and travels as `Option::None` from the lookup API.
#[derive(Debug, Error)]
pub enum Error {
    /// Response buffer allocation failed
    ///
    /// The response must never be silently truncated, so reservation of the
    /// combined header + body buffer reports exhaustion to the caller.
    #[error("response buffer allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}
