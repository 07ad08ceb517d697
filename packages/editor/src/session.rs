//! # Edit Session Management
//!
//! The single mutation path from a UI event to a persisted tree.
//!
//! A session owns the current document value for one CV. Execution is
//! single-writer and run-to-completion: each `apply` call produces the new
//! tree, persists it, and only then advances the session, so a caller
//! holding a reference to the previous tree never observes it change and
//! the session never exposes an unpersisted value.

use std::sync::Arc;

use folio_common::KeyValueBackend;
use folio_model::{Document, IdGenerator, Section};
use folio_store::DocumentStore;

use crate::{EditorError, Mutation};

/// One open editing session over one CV document
pub struct EditSession<B: KeyValueBackend> {
    document_id: String,
    document: Document,
    store: DocumentStore<B>,
    version: u64,
}

impl<B: KeyValueBackend> EditSession<B> {
    /// Open a session over an existing CV.
    ///
    /// A missing record is [`EditorError::DocumentMissing`]; a record that
    /// fails to parse surfaces the store's malformed-record error so the
    /// caller can distinguish "new" from "damaged".
    pub fn open(store: DocumentStore<B>, document_id: &str) -> Result<Self, EditorError> {
        let document = store
            .load(document_id)?
            .ok_or_else(|| EditorError::DocumentMissing(document_id.to_string()))?;

        Ok(Self {
            document_id: document_id.to_string(),
            document,
            store,
            version: 0,
        })
    }

    /// Create and persist a new CV seeded with exactly one default root
    /// container section
    pub fn create(
        store: DocumentStore<B>,
        document_id: &str,
        ids: &dyn IdGenerator,
    ) -> Result<Self, EditorError> {
        if store.load(document_id)?.is_some() {
            return Err(EditorError::AlreadyExists(document_id.to_string()));
        }

        let document = Document::with_root(Section::new(ids));
        store.save(document_id, &document)?;
        tracing::info!(document_id, "created CV document");

        Ok(Self {
            document_id: document_id.to_string(),
            document,
            store,
            version: 0,
        })
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// The current (persisted) tree, the read model for rendering
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of mutations accepted since the session opened
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Read-only lookup in the current tree
    pub fn find(&self, section_id: &str) -> Option<&Arc<Section>> {
        self.document.find(section_id)
    }

    /// Apply one mutation and persist the result.
    ///
    /// The save is all-or-nothing: on failure the session keeps the
    /// pre-mutation tree, so callers never render a value the store does
    /// not hold.
    pub fn apply(&mut self, mutation: Mutation) -> Result<&Document, EditorError> {
        let next = mutation.apply(&self.document);
        self.store.save(&self.document_id, &next)?;
        self.document = next;
        self.version += 1;
        tracing::debug!(
            document_id = %self.document_id,
            mutation = mutation.name(),
            version = self.version,
            "applied mutation"
        );
        Ok(&self.document)
    }

    /// Re-read the persisted tree, discarding the in-memory value
    pub fn reload(&mut self) -> Result<&Document, EditorError> {
        self.document = self
            .store
            .load(&self.document_id)?
            .ok_or_else(|| EditorError::DocumentMissing(self.document_id.clone()))?;
        Ok(&self.document)
    }
}
