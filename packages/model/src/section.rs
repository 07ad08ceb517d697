use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::id_generator::IdGenerator;

/// How a section's `content` is interpreted by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Structural region, content is empty
    Container,
    /// Raw text content
    Text,
    /// Embeddable image reference (e.g. a data URL)
    Image,
}

/// Flat presentation attributes of a section
///
/// All values are caller-supplied strings stored verbatim; the model never
/// parses or validates them. Field names are pinned to the persisted record
/// shape and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    pub background_color: String,
    pub padding: String,
    pub margin: String,
    pub border_style: String,
    pub border_width: String,
    pub border_color: String,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            background_color: "transparent".to_string(),
            padding: "10px".to_string(),
            margin: "0".to_string(),
            border_style: "none".to_string(),
            border_width: "0".to_string(),
            border_color: "#000000".to_string(),
        }
    }
}

/// A node of the document tree: a stylable rectangular region optionally
/// holding text/image content and child sections.
///
/// `id` is assigned at creation and immutable for the node's lifetime.
/// Children sit behind `Arc` so tree rewrites can share untouched subtrees
/// instead of deep-copying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    pub content: String,
    pub style: SectionStyle,
    pub children: Vec<Arc<Section>>,
}

impl Section {
    /// Mint a fresh container section with a generated identifier,
    /// empty content and the default style.
    pub fn new(ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.new_id(),
            kind: SectionKind::Container,
            content: String::new(),
            style: SectionStyle::default(),
            children: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: SectionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, style: SectionStyle) -> Self {
        self.style = style;
        self
    }
}

/// The persisted unit: an ordered forest of root sections, nothing else.
/// Serializes as a bare array of section records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub sections: Vec<Arc<Section>>,
}

impl Document {
    /// Empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Forest holding a single root section
    pub fn with_root(root: Section) -> Self {
        Self {
            sections: vec![Arc::new(root)],
        }
    }
}
