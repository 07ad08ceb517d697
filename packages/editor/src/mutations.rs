//! # Document Mutations
//!
//! Semantic edit operations on a CV document.
//!
//! ## Mutation Semantics
//!
//! ### UpdateSection
//! - Shallow merge: each present patch field fully replaces the node's field
//! - A supplied `style` replaces the whole style record
//!
//! ### InsertChild
//! - Appends the new section to the end of the parent's children
//! - The orientation hint travels to the renderer; placement ignores it
//!
//! ### RemoveSection
//! - Removes the section and all descendants, roots included
//!
//! All three are pure transforms over the document, and all three treat an
//! absent target as a defined no-op rather than an error: a delayed UI event
//! may race against a tree that has since changed shape, and the permissive
//! contract lets such calls land harmlessly.

use folio_model::{Document, Section, SectionPatch};
use serde::{Deserialize, Serialize};

/// Layout intent for a newly inserted child relative to its siblings.
///
/// Consumed by the renderer only; the tree model never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Merge partial fields into the section matching `section_id`
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },

    /// Append a freshly minted section to a parent's children
    InsertChild {
        parent_id: String,
        section: Section,
        orientation: Orientation,
    },

    /// Remove a section and its whole subtree
    RemoveSection { section_id: String },
}

impl Mutation {
    /// Apply this mutation to `document`, returning the rewritten tree.
    ///
    /// Pure: the input document is never modified. A target identifier
    /// absent from the tree yields a tree equal to the input.
    pub fn apply(&self, document: &Document) -> Document {
        match self {
            Mutation::UpdateSection { section_id, patch } => document.update(section_id, patch),

            Mutation::InsertChild {
                parent_id, section, ..
            } => document.insert_child(parent_id, section.clone()),

            Mutation::RemoveSection { section_id } => document.remove(section_id),
        }
    }

    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateSection { .. } => "update_section",
            Mutation::InsertChild { .. } => "insert_child",
            Mutation::RemoveSection { .. } => "remove_section",
        }
    }
}
