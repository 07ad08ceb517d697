use folio_common::KeyValueBackend;
use folio_model::Document;

use crate::error::StoreError;

/// Namespacing prefix for per-document records, distinct from the registry key
pub const DOCUMENT_KEY_PREFIX: &str = "cv:";

/// Derive the storage key for a document identifier
pub fn document_key(document_id: &str) -> String {
    format!("{DOCUMENT_KEY_PREFIX}{document_id}")
}

/// Durable, per-document persistence of serialized section forests.
///
/// One record per document, keyed by [`document_key`]. `save` fully
/// overwrites; `load` never invents an empty document for bytes it cannot
/// parse.
pub struct DocumentStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> DocumentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The persisted document for `document_id`, or `None` if no record
    /// exists yet (a brand-new or unknown id). Stored bytes that fail to
    /// parse surface as [`StoreError::MalformedRecord`].
    pub fn load(&self, document_id: &str) -> Result<Option<Document>, StoreError> {
        let key = document_key(document_id);
        let Some(raw) = self.backend.get(&key)? else {
            return Ok(None);
        };
        let document = serde_json::from_str(&raw).map_err(|e| StoreError::MalformedRecord {
            key,
            reason: e.to_string(),
        })?;
        Ok(Some(document))
    }

    /// Serialize and persist `document` under `document_id`, fully
    /// overwriting any prior value
    pub fn save(&self, document_id: &str, document: &Document) -> Result<(), StoreError> {
        let key = document_key(document_id);
        let raw = serde_json::to_string(document).map_err(StoreError::Encode)?;
        self.backend.put(&key, &raw)?;
        tracing::debug!(document_id, bytes = raw.len(), "saved document");
        Ok(())
    }

    /// Drop the record for `document_id`, if any
    pub fn delete(&self, document_id: &str) -> Result<(), StoreError> {
        self.backend.remove(&document_key(document_id))?;
        tracing::debug!(document_id, "deleted document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::{FileBackend, MemoryBackend};
    use folio_model::{Document, Section, SectionKind, SequentialIdGenerator};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn sample_document() -> Document {
        let ids = SequentialIdGenerator::new("doc");
        let mut root = Section::new(&ids);
        root.children.push(Arc::new(
            Section::new(&ids)
                .with_kind(SectionKind::Text)
                .with_content("experience"),
        ));
        Document::with_root(root)
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let store = DocumentStore::new(MemoryBackend::new());
        let doc = sample_document();

        store.save("abc", &doc).unwrap();
        let loaded = store.load("abc").unwrap().unwrap();

        assert_eq!(loaded, doc);
        assert_eq!(loaded.sections[0].children[0].content, "experience");
    }

    #[test]
    fn test_load_unknown_id_returns_none() {
        let store = DocumentStore::new(MemoryBackend::new());

        assert!(store.load("never-saved").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let store = DocumentStore::new(MemoryBackend::new());
        let doc = sample_document();

        store.save("abc", &doc).unwrap();
        let trimmed = doc.remove("doc-2");
        store.save("abc", &trimmed).unwrap();

        assert_eq!(store.load("abc").unwrap().unwrap(), trimmed);
    }

    #[test]
    fn test_corrupted_record_is_malformed_not_empty() {
        let backend = Arc::new(MemoryBackend::new());
        let store = DocumentStore::new(Arc::clone(&backend));

        backend.put(&document_key("abc"), "{ not json").unwrap();

        match store.load("abc") {
            Err(StoreError::MalformedRecord { key, .. }) => {
                assert_eq!(key, "cv:abc");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let backend = Arc::new(MemoryBackend::new());
        let store = DocumentStore::new(Arc::clone(&backend));

        // Valid JSON, but not a section forest.
        backend
            .put(&document_key("abc"), r#"{"sections": 3}"#)
            .unwrap();
        assert!(matches!(
            store.load("abc"),
            Err(StoreError::MalformedRecord { .. })
        ));

        // A section record missing required fields is just as malformed.
        backend
            .put(&document_key("abc"), r#"[{"id": "doc-1"}]"#)
            .unwrap();
        assert!(matches!(
            store.load("abc"),
            Err(StoreError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(FileBackend::new(dir.path()));
        let doc = sample_document();

        store.save("abc", &doc).unwrap();
        assert_eq!(store.load("abc").unwrap().unwrap(), doc);

        store.delete("abc").unwrap();
        assert!(store.load("abc").unwrap().is_none());
    }
}
