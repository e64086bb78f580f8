//! Raw children and their normalization.

use crate::error::Result;
use crate::model::{Element, Reference};

/// A raw child as supplied to a tag invocation.
#[derive(Debug, Clone)]
pub enum Child {
    /// Literal text, wrapped into a text leaf on normalization
    Text(String),
    /// An already constructed element
    Element(Element),
    /// A reference, replaced by its assigned element on normalization
    Reference(Reference),
    /// A sequence of children, flattened on normalization
    List(Vec<Child>),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Element(element)
    }
}

impl From<&Element> for Child {
    fn from(element: &Element) -> Self {
        Child::Element(element.clone())
    }
}

impl From<Reference> for Child {
    fn from(reference: Reference) -> Self {
        Child::Reference(reference)
    }
}

impl From<&Reference> for Child {
    fn from(reference: &Reference) -> Self {
        Child::Reference(reference.clone())
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(items: Vec<T>) -> Self {
        Child::List(items.into_iter().map(Into::into).collect())
    }
}

/// Build a [`Child::List`] from heterogeneous items.
///
/// ```
/// use prosetree::{children, builtin::text};
///
/// let greeting = text().with_children("there").unwrap();
/// let list = children!["Hello ", &greeting];
/// assert_eq!(prosetree::normalize(list).unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        $crate::Child::List(vec![$($crate::Child::from($child)),*])
    };
}

/// Convert raw children into a flat, ordered sequence of resolved elements.
///
/// Strings become text leaves, references are replaced by their assigned
/// element and lists are flattened in place. Order is preserved.
pub fn normalize(children: impl Into<Child>) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    push_normalized(children.into(), &mut elements)?;
    Ok(elements)
}

fn push_normalized(child: Child, out: &mut Vec<Element>) -> Result<()> {
    match child {
        Child::Text(text) => {
            log::trace!("normalize: text leaf {:?}", text);
            out.push(Element::text_leaf(text));
        }
        Child::Element(element) => out.push(element),
        Child::Reference(reference) => {
            let element = reference.resolve()?;
            log::trace!(
                "normalize: resolved reference {} to <{}>",
                reference.label().unwrap_or("(unlabeled)"),
                element.name()
            );
            out.push(element);
        }
        Child::List(items) => {
            for item in items {
                push_normalized(item, out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{paragraph, text};
    use crate::error::{Error, ErrorKind};
    use crate::model::TagId;

    #[test]
    fn test_normalize_single_string() {
        let elements = normalize("hello").unwrap();
        assert_eq!(elements.len(), 1);
        assert!(elements[0].is(&TagId::text()));
        assert_eq!(elements[0].text(), Some("hello"));
    }

    #[test]
    fn test_normalize_single_element() {
        let el = text().with_children("x").unwrap();
        let elements = normalize(&el).unwrap();
        assert_eq!(elements, vec![el]);
    }

    #[test]
    fn test_normalize_preserves_order() {
        let a = text().with_children("a").unwrap();
        let b = text().with_children("b").unwrap();
        let elements = normalize(children!["first", &a, "middle", &b]).unwrap();

        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0].text(), Some("first"));
        assert_eq!(elements[1], a);
        assert_eq!(elements[2].text(), Some("middle"));
        assert_eq!(elements[3], b);
    }

    #[test]
    fn test_normalize_flattens_nested_lists() {
        let nested = children!["a", vec!["b", "c"], "d"];
        let texts: Vec<_> = normalize(nested)
            .unwrap()
            .iter()
            .map(|e| e.text().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_normalize_empty_list() {
        let elements = normalize(Vec::<Child>::new()).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_normalize_resolves_reference() {
        let reference = Reference::new(&paragraph());
        let p = paragraph().with_children("content").unwrap();
        reference.assign(p.clone()).unwrap();

        let elements = normalize(children![&reference, &reference]).unwrap();
        assert!(elements[0].ptr_eq(&p));
        assert!(elements[1].ptr_eq(&p));
    }

    #[test]
    fn test_normalize_unresolved_reference() {
        let reference = Reference::labeled(&paragraph(), "later");
        let err = normalize(children!["before", &reference]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnresolvedReference);
        assert_eq!(
            err,
            Error::UnresolvedReference {
                label: Some("later".to_string())
            }
        );
    }
}
