use folio_model::{Document, Section};

/// Visitor pattern for traversing section trees immutably
///
/// Default implementations walk the entire forest depth-first. Override
/// `visit_section` to act on nodes; call `walk_section` from the override to
/// keep descending.
pub trait Visitor: Sized {
    fn visit_document(&mut self, document: &Document) {
        walk_document(self, document);
    }

    fn visit_section(&mut self, section: &Section) {
        walk_section(self, section);
    }
}

pub fn walk_document<V: Visitor>(visitor: &mut V, document: &Document) {
    for section in &document.sections {
        visitor.visit_section(section);
    }
}

pub fn walk_section<V: Visitor>(visitor: &mut V, section: &Section) {
    for child in &section.children {
        visitor.visit_section(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{SectionKind, SequentialIdGenerator};
    use std::sync::Arc;

    struct KindCounter {
        containers: usize,
        texts: usize,
    }

    impl Visitor for KindCounter {
        fn visit_section(&mut self, section: &Section) {
            match section.kind {
                SectionKind::Container => self.containers += 1,
                SectionKind::Text => self.texts += 1,
                SectionKind::Image => {}
            }
            walk_section(self, section);
        }
    }

    #[test]
    fn test_visitor_walks_whole_forest() {
        let ids = SequentialIdGenerator::new("doc");
        let mut root = Section::new(&ids);
        let mut body = Section::new(&ids);
        body.children
            .push(Arc::new(Section::new(&ids).with_kind(SectionKind::Text)));
        root.children.push(Arc::new(body));
        let doc = Document::with_root(root);

        let mut counter = KindCounter {
            containers: 0,
            texts: 0,
        };
        counter.visit_document(&doc);

        assert_eq!(counter.containers, 2);
        assert_eq!(counter.texts, 1);
    }
}
