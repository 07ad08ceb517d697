pub mod document_store;
pub mod error;
pub mod registry;

pub use document_store::{document_key, DocumentStore, DOCUMENT_KEY_PREFIX};
pub use error::StoreError;
pub use registry::{CvMeta, Registry, REGISTRY_KEY};
