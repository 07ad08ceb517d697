//! # Folio Editor
//!
//! Document editing engine for Folio CVs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI collaborator: issues mutations by id     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Apply mutation → new tree value          │
//! │  - Persist immediately via DocumentStore    │
//! │  - Expose the persisted tree for re-render  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: keyed document records               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! There is no independent mutation path: every structural change goes
//! through [`Mutation`] and [`EditSession`] so identifiers and tree
//! invariants are preserved. Renderers treat every section as immutable
//! data and re-obtain it from the session after each mutation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{EditSession, Mutation, Orientation};
//!
//! let mut session = EditSession::create(store, &meta.id, &ids)?;
//! let root_id = session.document().sections[0].id.clone();
//!
//! session.apply(Mutation::InsertChild {
//!     parent_id: root_id,
//!     section: Section::new(&ids),
//!     orientation: Orientation::Vertical,
//! })?;
//! ```

mod errors;
mod mutations;
mod session;

pub use errors::EditorError;
pub use mutations::{Mutation, Orientation};
pub use session::EditSession;

// Re-export common types for convenience
pub use folio_model::{Document, Section, SectionKind, SectionPatch, SectionStyle};
