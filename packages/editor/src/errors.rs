//! Error types for the editor

use folio_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("no CV stored under {0}")]
    DocumentMissing(String),

    #[error("a CV is already stored under {0}")]
    AlreadyExists(String),
}
