//! Error types for boxpack.

use thiserror::Error;

/// Result type alias for boxpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or packing a job.
///
/// Packing outcomes themselves are never errors: an item that does not
/// fit is reported as data, not as a failure. These variants cover
/// caller contract violations only.
#[derive(Debug, Error)]
pub enum Error {
    /// Rotation index outside the valid `0..=5` range.
    #[error("Invalid rotation index {0}, expected 0..=5")]
    InvalidRotation(usize),

    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),
}
