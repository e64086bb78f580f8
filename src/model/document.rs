//! Document-level types.

use super::{Element, References};

/// A finalized document: resolved references plus the root element.
///
/// Only produced by [`DocumentBuilder`](crate::DocumentBuilder), which
/// guarantees every declared reference is assigned.
#[derive(Debug, Clone)]
pub struct Document {
    references: References,
    content: Element,
}

impl Document {
    pub(crate) fn new(references: References, content: Element) -> Self {
        Self {
            references,
            content,
        }
    }

    /// Declared references.
    pub fn references(&self) -> &References {
        &self.references
    }

    /// Root element.
    pub fn content(&self) -> &Element {
        &self.content
    }

    /// Get a declared reference by name.
    pub fn reference(&self, name: &str) -> Option<&super::Reference> {
        self.references.get(name)
    }

    /// Get the element bound to a declared reference.
    pub fn element(&self, name: &str) -> Option<Element> {
        self.references.get(name).and_then(|r| r.get())
    }

    /// Split the document into its references and root element.
    pub fn into_parts(self) -> (References, Element) {
        (self.references, self.content)
    }
}
