use chrono::Utc;
use folio_common::KeyValueBackend;
use folio_model::IdGenerator;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Storage key for the flat CV metadata list, separate from document records
pub const REGISTRY_KEY: &str = "cv-registry";

/// Metadata entry for one CV; document content lives in the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvMeta {
    pub id: String,
    pub name: String,
    /// RFC 3339 timestamp of the last registered change
    pub last_modified: String,
}

/// Flat registry of CVs: names and timestamps only.
///
/// Lives in the same backend as the document records, under its own key, so
/// both stores share one storage medium without overlapping.
pub struct Registry<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> Registry<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All registered CVs, in registration order. No registry record yet
    /// means no CVs, not an error.
    pub fn list(&self) -> Result<Vec<CvMeta>, StoreError> {
        let Some(raw) = self.backend.get(REGISTRY_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::MalformedRecord {
            key: REGISTRY_KEY.to_string(),
            reason: e.to_string(),
        })
    }

    /// Metadata for one CV, if registered
    pub fn get(&self, id: &str) -> Result<Option<CvMeta>, StoreError> {
        Ok(self.list()?.into_iter().find(|entry| entry.id == id))
    }

    /// Register a new CV under a freshly minted identifier
    pub fn create(&self, name: &str, ids: &dyn IdGenerator) -> Result<CvMeta, StoreError> {
        let meta = CvMeta {
            id: ids.new_id(),
            name: name.to_string(),
            last_modified: Utc::now().to_rfc3339(),
        };
        let mut entries = self.list()?;
        entries.push(meta.clone());
        self.save_entries(&entries)?;
        tracing::info!(id = %meta.id, name, "registered CV");
        Ok(meta)
    }

    /// Refresh a CV's lastModified timestamp. Unknown ids are ignored.
    pub fn touch(&self, id: &str) -> Result<(), StoreError> {
        let mut entries = self.list()?;
        let mut changed = false;
        for entry in &mut entries {
            if entry.id == id {
                entry.last_modified = Utc::now().to_rfc3339();
                changed = true;
            }
        }
        if changed {
            self.save_entries(&entries)?;
        }
        Ok(())
    }

    /// Drop a CV from the registry, returning its metadata if it was present.
    /// The caller owns deleting the document record itself.
    pub fn remove(&self, id: &str) -> Result<Option<CvMeta>, StoreError> {
        let mut entries = self.list()?;
        let Some(position) = entries.iter().position(|entry| entry.id == id) else {
            return Ok(None);
        };
        let removed = entries.remove(position);
        self.save_entries(&entries)?;
        tracing::info!(id, "removed CV from registry");
        Ok(Some(removed))
    }

    fn save_entries(&self, entries: &[CvMeta]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StoreError::Encode)?;
        self.backend.put(REGISTRY_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::MemoryBackend;
    use folio_model::SequentialIdGenerator;
    use std::sync::Arc;

    #[test]
    fn test_empty_registry_lists_nothing() {
        let registry = Registry::new(MemoryBackend::new());

        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_then_list() {
        let ids = SequentialIdGenerator::new("cv");
        let registry = Registry::new(MemoryBackend::new());

        let first = registry.create("Software CV", &ids).unwrap();
        let second = registry.create("Design CV", &ids).unwrap();

        let entries = registry.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], first);
        assert_eq!(entries[1], second);
        assert_ne!(first.id, second.id);
        assert!(!first.last_modified.is_empty());
    }

    #[test]
    fn test_touch_updates_known_entry_only() {
        let ids = SequentialIdGenerator::new("cv");
        let registry = Registry::new(MemoryBackend::new());
        let meta = registry.create("Software CV", &ids).unwrap();

        registry.touch(&meta.id).unwrap();
        registry.touch("unknown").unwrap();

        let entries = registry.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Software CV");
    }

    #[test]
    fn test_remove_entry() {
        let ids = SequentialIdGenerator::new("cv");
        let registry = Registry::new(MemoryBackend::new());
        let meta = registry.create("Software CV", &ids).unwrap();

        let removed = registry.remove(&meta.id).unwrap();
        assert_eq!(removed, Some(meta));
        assert!(registry.list().unwrap().is_empty());
        assert_eq!(registry.remove("unknown").unwrap(), None);
    }

    #[test]
    fn test_registry_and_documents_share_backend() {
        let ids = SequentialIdGenerator::new("cv");
        let backend = Arc::new(MemoryBackend::new());
        let registry = Registry::new(Arc::clone(&backend));
        let store = crate::DocumentStore::new(Arc::clone(&backend));

        let meta = registry.create("Software CV", &ids).unwrap();
        store
            .save(&meta.id, &folio_model::Document::new())
            .unwrap();

        // Distinct key spaces: the registry record is not a document record.
        assert!(backend.get(REGISTRY_KEY).unwrap().is_some());
        assert!(backend
            .get(&crate::document_key(&meta.id))
            .unwrap()
            .is_some());
        assert_eq!(registry.get(&meta.id).unwrap(), Some(meta));
    }
}
