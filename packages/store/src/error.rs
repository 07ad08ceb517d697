use folio_common::BackendError;
use thiserror::Error;

/// Errors surfaced by the persistence layer.
///
/// A missing record is not an error: `load` expresses it as `Ok(None)`,
/// distinguishable by type from both malformed data and an unreachable
/// medium.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Stored bytes fail to parse as a well-formed record
    #[error("malformed record under {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    /// The persistence medium cannot be read or written
    #[error(transparent)]
    Unavailable(#[from] BackendError),

    /// A value could not be encoded for storage
    #[error("failed to encode record: {0}")]
    Encode(serde_json::Error),
}
