//! Tag factory.
//!
//! A [`Tag`] pairs a fixed category and name with a content rule. Invoking
//! it normalizes the raw children, runs the rule to obtain the payload,
//! builds the element and, if a reference was supplied through
//! [`Props::bind_to`], assigns the new element to it before returning.
//!
//! # Example
//!
//! ```
//! use prosetree::{Category, Payload, Props, Tag};
//!
//! let count = Tag::block("count", |props| {
//!     Ok(Payload::data(props.children().len()))
//! });
//!
//! let element = count.call(Props::new().children(vec!["a", "b"])).unwrap();
//! assert_eq!(element.category(), Category::Block);
//! assert_eq!(element.data::<usize>(), Some(&2));
//! ```

mod children;
pub mod rules;

pub use children::{normalize, Child};

use crate::error::Result;
use crate::model::{Category, Element, Payload, Reference, TagId};
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A value passed as a named prop.
#[derive(Clone)]
pub enum PropValue {
    /// String value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Reference cell
    Reference(Reference),
    /// Element
    Element(Element),
    /// Structured record, downcast by the consuming tag
    Data(Rc<dyn Any>),
}

impl PropValue {
    /// Short name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Text(_) => "text",
            PropValue::Number(_) => "number",
            PropValue::Bool(_) => "bool",
            PropValue::Reference(_) => "reference",
            PropValue::Element(_) => "element",
            PropValue::Data(_) => "data",
        }
    }

    /// Wrap an arbitrary value as a record prop.
    pub fn data<T: Any>(value: T) -> Self {
        PropValue::Data(Rc::new(value))
    }

    /// Downcast a record prop to a concrete type.
    pub fn as_data<T: Any>(&self) -> Option<&T> {
        match self {
            PropValue::Data(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Get the string value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the reference, if this is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            PropValue::Reference(reference) => Some(reference),
            _ => None,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            PropValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            PropValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            PropValue::Reference(r) => f.debug_tuple("Reference").field(r).finish(),
            PropValue::Element(e) => f.debug_tuple("Element").field(e).finish(),
            PropValue::Data(_) => f.write_str("Data(..)"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<Reference> for PropValue {
    fn from(value: Reference) -> Self {
        PropValue::Reference(value)
    }
}

impl From<&Reference> for PropValue {
    fn from(value: &Reference) -> Self {
        PropValue::Reference(value.clone())
    }
}

impl From<Element> for PropValue {
    fn from(value: Element) -> Self {
        PropValue::Element(value)
    }
}

/// Raw construction arguments for a tag invocation.
#[derive(Debug, Clone, Default)]
pub struct Props {
    children: Option<Child>,
    values: IndexMap<String, PropValue>,
    bind_to: Option<Reference>,
}

impl Props {
    /// Create empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw children, replacing any set before.
    pub fn children(mut self, children: impl Into<Child>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Append one raw child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        let child = child.into();
        self.children = Some(match self.children.take() {
            None => Child::List(vec![child]),
            Some(Child::List(mut items)) => {
                items.push(child);
                Child::List(items)
            }
            Some(single) => Child::List(vec![single, child]),
        });
        self
    }

    /// Set a named prop.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Assign the constructed element to `reference`.
    pub fn bind_to(mut self, reference: &Reference) -> Self {
        self.bind_to = Some(reference.clone());
        self
    }
}

/// Construction arguments after child normalization, as seen by a tag rule.
#[derive(Debug, Clone)]
pub struct NormalizedProps {
    children: Vec<Element>,
    values: IndexMap<String, PropValue>,
    bind_to: Option<Reference>,
}

impl NormalizedProps {
    /// Normalized children (empty if none were supplied).
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Get a named prop.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    /// Reference the element will be bound to, if any.
    pub fn bind_to(&self) -> Option<&Reference> {
        self.bind_to.as_ref()
    }
}

type Rule = dyn Fn(&NormalizedProps) -> Result<Payload>;

/// A named element constructor enforcing a category and a content rule.
#[derive(Clone)]
pub struct Tag {
    id: TagId,
    rule: Rc<Rule>,
}

impl Tag {
    /// Define a tag.
    pub fn new<F>(category: Category, name: impl Into<Rc<str>>, rule: F) -> Self
    where
        F: Fn(&NormalizedProps) -> Result<Payload> + 'static,
    {
        Self {
            id: TagId::new(category, name),
            rule: Rc::new(rule),
        }
    }

    /// Define a block tag.
    pub fn block<F>(name: impl Into<Rc<str>>, rule: F) -> Self
    where
        F: Fn(&NormalizedProps) -> Result<Payload> + 'static,
    {
        Self::new(Category::Block, name, rule)
    }

    /// Define an inliner tag.
    pub fn inliner<F>(name: impl Into<Rc<str>>, rule: F) -> Self
    where
        F: Fn(&NormalizedProps) -> Result<Payload> + 'static,
    {
        Self::new(Category::Inliner, name, rule)
    }

    /// Identifier of the tag.
    pub fn id(&self) -> &TagId {
        &self.id
    }

    /// Category of the tag.
    pub fn category(&self) -> Category {
        self.id.category()
    }

    /// Name of the tag.
    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// Check if `element` was produced by this tag.
    pub fn is_instance(&self, element: &Element) -> bool {
        element.is(&self.id)
    }

    /// Invoke the tag.
    pub fn call(&self, props: Props) -> Result<Element> {
        let Props {
            children,
            values,
            bind_to,
        } = props;

        let children = match children {
            Some(children) => normalize(children)?,
            None => Vec::new(),
        };

        let props = NormalizedProps {
            children,
            values,
            bind_to,
        };

        let payload = (self.rule)(&props)?;
        let element = Element::with_tag(self.id.clone(), payload);

        if let Some(reference) = &props.bind_to {
            log::debug!(
                "<{}> binds reference {}",
                self.name(),
                reference.label().unwrap_or("(unlabeled)")
            );
            reference.assign(element.clone())?;
        }

        Ok(element)
    }

    /// Invoke the tag with children only.
    pub fn with_children(&self, children: impl Into<Child>) -> Result<Element> {
        self.call(Props::new().children(children))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag").field("id", &self.id).finish()
    }
}
