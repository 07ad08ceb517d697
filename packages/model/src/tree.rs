//! Pure transforms over the section forest.
//!
//! Every operation returns a new [`Document`]; the input is never mutated.
//! Only the ancestor chain down to the matched node is rebuilt, untouched
//! subtrees are carried over by `Arc` clone. A caller holding an old tree
//! value never observes it change underfoot, which is what stands in for
//! locking in the single-writer execution model.
//!
//! Targeting an identifier absent from the tree is a defined no-op, not an
//! error: a delayed UI event may race against a tree that has since changed
//! shape, and the permissive contract lets such calls land harmlessly.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::section::{Document, Section, SectionKind, SectionStyle};

/// Partial section fields for [`Document::update`].
///
/// Shallow merge semantics: every present field fully replaces the node's
/// field, `style` replaces the whole style record. Identifiers are immutable
/// and structure is changed through insert/remove, so neither is patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<SectionStyle>,
}

impl SectionPatch {
    pub fn kind(kind: SectionKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn style(style: SectionStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    fn apply_to(&self, section: &Section) -> Section {
        let mut updated = section.clone();
        if let Some(kind) = self.kind {
            updated.kind = kind;
        }
        if let Some(content) = &self.content {
            updated.content = content.clone();
        }
        if let Some(style) = &self.style {
            updated.style = style.clone();
        }
        updated
    }
}

impl Document {
    /// Locate a section by identifier anywhere in the forest, depth-first.
    pub fn find(&self, id: &str) -> Option<&Arc<Section>> {
        find_in(&self.sections, id)
    }

    /// Whether any section in the forest carries `id`
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// All identifiers in the forest, depth-first order
    pub fn section_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        collect_ids(&self.sections, &mut ids);
        ids
    }

    /// Return a forest identical to `self` except the section matching `id`
    /// has `patch` merged into it. Missing `id` returns an equal forest.
    pub fn update(&self, id: &str, patch: &SectionPatch) -> Document {
        match rewrite(&self.sections, id, &mut |section| patch.apply_to(section)) {
            Some(sections) => Document { sections },
            None => self.clone(),
        }
    }

    /// Return a forest identical to `self` except `child` is appended to the
    /// end of the children of the section matching `parent_id`. Missing
    /// `parent_id` returns an equal forest.
    pub fn insert_child(&self, parent_id: &str, child: Section) -> Document {
        let mut child = Some(child);
        match rewrite(&self.sections, parent_id, &mut |parent| {
            let mut parent = parent.clone();
            if let Some(child) = child.take() {
                parent.children.push(Arc::new(child));
            }
            parent
        }) {
            Some(sections) => Document { sections },
            None => self.clone(),
        }
    }

    /// Return a forest identical to `self` except the section matching `id`
    /// (and its whole subtree) is gone, wherever it sits, roots included.
    /// Missing `id` returns an equal forest.
    pub fn remove(&self, id: &str) -> Document {
        match remove_from(&self.sections, id) {
            Some(sections) => Document { sections },
            None => self.clone(),
        }
    }
}

fn find_in<'a>(sections: &'a [Arc<Section>], id: &str) -> Option<&'a Arc<Section>> {
    for section in sections {
        if section.id == id {
            return Some(section);
        }
        if let Some(found) = find_in(&section.children, id) {
            return Some(found);
        }
    }
    None
}

fn collect_ids(sections: &[Arc<Section>], ids: &mut Vec<String>) {
    for section in sections {
        ids.push(section.id.clone());
        collect_ids(&section.children, ids);
    }
}

/// Depth-first rewrite of a sibling sequence.
///
/// Visits every sibling (a match in one subtree does not skip the others),
/// applies `apply` to the matched node without descending further into it,
/// and rebuilds exactly the spine above the match. Returns `None` when the
/// target is absent from the whole sequence, so callers can hand back the
/// input forest untouched.
fn rewrite(
    sections: &[Arc<Section>],
    target: &str,
    apply: &mut dyn FnMut(&Section) -> Section,
) -> Option<Vec<Arc<Section>>> {
    let mut changed = false;
    let rewritten: Vec<Arc<Section>> = sections
        .iter()
        .map(|section| {
            if section.id == target {
                changed = true;
                Arc::new(apply(section))
            } else if let Some(children) = rewrite(&section.children, target, apply) {
                changed = true;
                let mut parent = Section::clone(section);
                parent.children = children;
                Arc::new(parent)
            } else {
                Arc::clone(section)
            }
        })
        .collect();

    changed.then_some(rewritten)
}

fn remove_from(sections: &[Arc<Section>], target: &str) -> Option<Vec<Arc<Section>>> {
    if let Some(position) = sections.iter().position(|s| s.id == target) {
        let mut remaining = sections.to_vec();
        remaining.remove(position);
        return Some(remaining);
    }

    let mut changed = false;
    let rewritten: Vec<Arc<Section>> = sections
        .iter()
        .map(|section| match remove_from(&section.children, target) {
            Some(children) => {
                changed = true;
                let mut parent = Section::clone(section);
                parent.children = children;
                Arc::new(parent)
            }
            None => Arc::clone(section),
        })
        .collect();

    changed.then_some(rewritten)
}
