//! Document construction.

use crate::error::{Error, Result};
use crate::model::{Document, Element, Reference, References, TagId};
use crate::tag::Tag;
use indexmap::IndexMap;
use std::panic::Location;

/// Builder composing reference declarations and a content function into a
/// finalized [`Document`].
///
/// # Example
///
/// ```
/// use prosetree::builtin::{blocks, paragraph};
/// use prosetree::{children, DocumentBuilder, Props};
///
/// let doc = DocumentBuilder::new()
///     .reference("intro", &paragraph())
///     .build(|refs| {
///         let intro = paragraph().call(Props::new().children("Hello").bind_to(&refs["intro"]))?;
///         blocks().with_children(children![&intro, &refs["intro"]])
///     })?;
///
/// assert_eq!(doc.content().children().unwrap().len(), 2);
/// # Ok::<(), prosetree::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    declarations: IndexMap<String, TagId>,
}

impl DocumentBuilder {
    /// Create a builder with no references.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a reference bound to `tag`.
    ///
    /// Declaring the same name twice keeps the latest tag.
    pub fn reference(mut self, name: impl Into<String>, tag: &Tag) -> Self {
        self.declarations.insert(name.into(), tag.id().clone());
        self
    }

    /// Declare several references at once.
    pub fn references<'a, I, N>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = (N, &'a Tag)>,
        N: Into<String>,
    {
        for (name, tag) in declarations {
            self.declarations.insert(name.into(), tag.id().clone());
        }
        self
    }

    /// Run `build` with the declared references and finalize the document.
    ///
    /// Fails with `UnassignedReference` if `build` returns without every
    /// declared reference assigned. Any error from `build` aborts the whole
    /// document.
    #[track_caller]
    pub fn build<F>(self, build: F) -> Result<Document>
    where
        F: FnOnce(&References) -> Result<Element>,
    {
        let origin = Location::caller();
        let mut references = References::new();
        for (name, tag) in self.declarations {
            let reference = Reference::declare_at(tag, Some(name.clone()), origin);
            references.insert(name, reference);
        }

        log::debug!("Building document with {} reference(s)", references.len());

        let content = build(&references)?;

        for (name, reference) in references.iter() {
            if !reference.is_assigned() {
                return Err(Error::UnassignedReference {
                    name: reference.label().unwrap_or(name).to_string(),
                });
            }
        }

        log::debug!(
            "Document finalized: root <{}>, {} reference(s) resolved",
            content.name(),
            references.len()
        );

        Ok(Document::new(references, content))
    }
}

/// Build a document from `(name, tag)` reference declarations and a content
/// function.
#[track_caller]
pub fn build_document<'a, I, N, F>(declarations: I, build: F) -> Result<Document>
where
    I: IntoIterator<Item = (N, &'a Tag)>,
    N: Into<String>,
    F: FnOnce(&References) -> Result<Element>,
{
    DocumentBuilder::new().references(declarations).build(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{blocks, paragraph, text};
    use crate::children;
    use crate::error::ErrorKind;
    use crate::tag::Props;

    #[test]
    fn test_builder_without_references() {
        let doc = DocumentBuilder::new()
            .build(|_| blocks().with_children(paragraph().with_children("only")?))
            .unwrap();

        assert!(doc.references().is_empty());
        assert_eq!(doc.content().name(), "blocks");
    }

    #[test]
    fn test_builder_declares_labeled_references() {
        let doc = DocumentBuilder::new()
            .reference("greet", &text())
            .build(|refs| {
                let greet = &refs["greet"];
                assert_eq!(greet.label(), Some("greet"));
                assert!(!greet.is_assigned());
                text().call(Props::new().children("hi").bind_to(greet))
            })
            .unwrap();

        assert_eq!(doc.element("greet").as_ref(), Some(doc.content()));
    }

    #[test]
    fn test_builder_unassigned_reference() {
        let err = DocumentBuilder::new()
            .reference("unassignedRef", &paragraph())
            .build(|_| blocks().with_children(paragraph().with_children("no binding")?))
            .unwrap_err();

        assert_eq!(
            err,
            Error::UnassignedReference {
                name: "unassignedRef".to_string()
            }
        );
    }

    #[test]
    fn test_builder_propagates_build_error() {
        let err = DocumentBuilder::new()
            .reference("intro", &paragraph())
            .build(|refs| blocks().with_children(&refs["intro"]))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnresolvedReference);
    }

    #[test]
    fn test_builder_reports_first_unassigned_in_declaration_order() {
        let err = build_document([("first", &text()), ("second", &text())], |refs| {
            let _ = &refs["second"];
            text().with_children("content")
        })
        .unwrap_err();

        assert!(matches!(err, Error::UnassignedReference { ref name } if name == "first"));
    }

    #[test]
    fn test_builder_redeclared_name_keeps_latest_tag() {
        let doc = DocumentBuilder::new()
            .reference("slot", &paragraph())
            .reference("slot", &text())
            .build(|refs| {
                assert!(refs["slot"].is_bound_to(&text()));
                let t = text().call(Props::new().children("x").bind_to(&refs["slot"]))?;
                paragraph().with_children(children![&t])
            })
            .unwrap();

        assert_eq!(doc.references().len(), 1);
    }
}
