//! Element-level types.

use super::{Reference, WeakReference};
use crate::tag::Tag;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Name of the canonical text-leaf tag.
pub const TEXT_TAG: &str = "text";

/// Element category, governing nesting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Structural content (paragraphs, block containers)
    Block,
    /// Content flowing inside a block (text, links)
    Inliner,
}

impl Category {
    /// Lowercase name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Block => "block",
            Category::Inliner => "inliner",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(category, name)` pair identifying the tag that produces an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId {
    category: Category,
    name: Rc<str>,
}

impl TagId {
    /// Create a new tag identifier.
    pub fn new(category: Category, name: impl Into<Rc<str>>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    /// Identifier of the canonical text-leaf tag.
    pub fn text() -> Self {
        Self::new(Category::Inliner, TEXT_TAG)
    }

    /// Category of the tag.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Name of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

/// Tag-defined data carried by an element.
#[derive(Clone)]
pub enum Payload {
    /// No data
    Empty,

    /// Plain text
    Text(String),

    /// Ordered child elements
    Children(Vec<Element>),

    /// A link to a referenced element
    Link {
        /// Non-owning handle to the reference the link points at
        target: WeakReference,
        /// Link label text
        label: String,
    },

    /// Arbitrary tag-defined record
    Data(Rc<dyn Any>),
}

impl Payload {
    /// Wrap an arbitrary value as a payload record.
    pub fn data<T: Any>(value: T) -> Self {
        Payload::Data(Rc::new(value))
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Empty => f.write_str("Empty"),
            Payload::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Payload::Children(children) => f.debug_tuple("Children").field(children).finish(),
            Payload::Link { target, label } => f
                .debug_struct("Link")
                .field("target", target)
                .field("label", label)
                .finish(),
            Payload::Data(_) => f.write_str("Data(..)"),
        }
    }
}

struct Node {
    tag: TagId,
    payload: Payload,
}

/// An immutable element of the content tree.
///
/// Cloning an element is cheap and yields the same instance: equality is
/// identity, so two elements are equal only if they come from the same
/// construction.
#[derive(Clone)]
pub struct Element(Rc<Node>);

impl Element {
    /// Create a new element.
    pub fn new(category: Category, name: impl Into<Rc<str>>, payload: Payload) -> Self {
        Self::with_tag(TagId::new(category, name), payload)
    }

    /// Create a new element for an existing tag identifier.
    pub fn with_tag(tag: TagId, payload: Payload) -> Self {
        Self(Rc::new(Node { tag, payload }))
    }

    /// Create a canonical text leaf.
    pub fn text_leaf(text: impl Into<String>) -> Self {
        Self::with_tag(TagId::text(), Payload::Text(text.into()))
    }

    /// Identifier of the producing tag.
    pub fn tag(&self) -> &TagId {
        &self.0.tag
    }

    /// Category of the element.
    pub fn category(&self) -> Category {
        self.0.tag.category
    }

    /// Name of the producing tag.
    pub fn name(&self) -> &str {
        &self.0.tag.name
    }

    /// Tag-defined data.
    pub fn payload(&self) -> &Payload {
        &self.0.payload
    }

    /// Text payload, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.0.payload {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child elements, if the payload is a child sequence.
    pub fn children(&self) -> Option<&[Element]> {
        match &self.0.payload {
            Payload::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Link target handle and label, if the payload is a link.
    pub fn link(&self) -> Option<(&WeakReference, &str)> {
        match &self.0.payload {
            Payload::Link { target, label } => Some((target, label)),
            _ => None,
        }
    }

    /// Reference a link points at, if this is a link and the cell is alive.
    pub fn link_target(&self) -> Option<Reference> {
        self.link().and_then(|(target, _)| target.upgrade())
    }

    /// Downcast a record payload to a concrete type.
    pub fn data<T: Any>(&self) -> Option<&T> {
        match &self.0.payload {
            Payload::Data(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Check if this is a block element.
    pub fn is_block(&self) -> bool {
        self.category() == Category::Block
    }

    /// Check if this is an inliner element.
    pub fn is_inliner(&self) -> bool {
        self.category() == Category::Inliner
    }

    /// Check if this element was produced by the tag with the given identifier.
    pub fn is(&self, tag: &TagId) -> bool {
        self.0.tag == *tag
    }

    /// Check if this element was produced by `tag`.
    pub fn is_tag(&self, tag: &Tag) -> bool {
        self.is(tag.id())
    }

    /// Check if both handles point to the same element instance.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("category", &self.category())
            .field("name", &self.name())
            .field("payload", self.payload())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_new() {
        let block = Element::new(Category::Block, "section", Payload::Empty);
        assert!(block.is_block());
        assert!(!block.is_inliner());
        assert_eq!(block.name(), "section");
        assert!(matches!(block.payload(), Payload::Empty));

        let inliner = Element::new(Category::Inliner, "emphasis", Payload::Text("hi".into()));
        assert!(inliner.is_inliner());
        assert_eq!(inliner.text(), Some("hi"));
    }

    #[test]
    fn test_text_leaf_matches_text_tag() {
        let leaf = Element::text_leaf("hello");
        assert!(leaf.is(&TagId::text()));
        assert_eq!(leaf.category(), Category::Inliner);
        assert_eq!(leaf.text(), Some("hello"));
    }

    #[test]
    fn test_is_requires_category_and_name() {
        let el = Element::new(Category::Block, "test", Payload::Empty);
        assert!(el.is(&TagId::new(Category::Block, "test")));
        assert!(!el.is(&TagId::new(Category::Inliner, "test")));
        assert!(!el.is(&TagId::new(Category::Block, "other")));
    }

    #[test]
    fn test_is_tag() {
        use crate::builtin::{paragraph, text};

        let leaf = Element::text_leaf("x");
        assert!(leaf.is_tag(&text()));
        assert!(!leaf.is_tag(&paragraph()));
    }

    #[test]
    fn test_link_to_ancestor_is_freed() {
        use crate::builtin::{link, paragraph, LINK_TARGET};
        use crate::tag::Props;

        let section = Reference::labeled(&paragraph(), "section");
        let top = link()
            .call(Props::new().prop(LINK_TARGET, &section).children("top"))
            .unwrap();
        let p = paragraph()
            .call(Props::new().child(&top).bind_to(&section))
            .unwrap();

        assert_eq!(top.link_target(), Some(section.clone()));
        assert_eq!(section.get(), Some(p.clone()));

        let weak = Rc::downgrade(&p.0);
        drop(p);
        drop(top);
        drop(section);

        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_identity_equality() {
        let a = Element::text_leaf("same");
        let b = Element::text_leaf("same");
        let a2 = a.clone();

        assert_eq!(a, a2);
        assert!(a.ptr_eq(&a2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_payload() {
        #[derive(Debug, PartialEq)]
        struct Meta {
            title: &'static str,
            items: usize,
        }

        let el = Element::new(
            Category::Block,
            "meta",
            Payload::data(Meta {
                title: "Test",
                items: 3,
            }),
        );

        assert_eq!(
            el.data::<Meta>(),
            Some(&Meta {
                title: "Test",
                items: 3
            })
        );
        assert!(el.data::<String>().is_none());
        assert!(el.children().is_none());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Block.to_string(), "block");
        assert_eq!(Category::Inliner.to_string(), "inliner");
        assert_eq!(TagId::text().to_string(), "<text>");
    }
}
