//! # prosetree
//!
//! Typed document-content trees built from validated tags.
//!
//! Documents are trees of immutable [`Element`]s, each either a block or an
//! inliner, produced by [`Tag`]s that check their children before building
//! a payload. A [`Reference`] lets one part of the tree point at an element
//! defined elsewhere: it is assigned exactly once, by the tag invocation
//! that carries it through [`Props::bind_to`], and may then be embedded
//! anywhere by value.
//!
//! ## Quick Start
//!
//! ```
//! use prosetree::builtin::{blocks, paragraph, text};
//! use prosetree::{children, DocumentBuilder, Props};
//!
//! fn main() -> prosetree::Result<()> {
//!     let doc = DocumentBuilder::new()
//!         .reference("intro", &paragraph())
//!         .reference("greet", &text())
//!         .build(|refs| {
//!             let intro = paragraph().call(Props::new().children("Hello").bind_to(&refs["intro"]))?;
//!             let greet = text().call(Props::new().children("there").bind_to(&refs["greet"]))?;
//!             let see = paragraph().with_children(children!["See: ", &greet])?;
//!             let again = paragraph().with_children(children!["Again: ", &refs["greet"]])?;
//!             blocks().with_children(children![&intro, &see, &refs["intro"], &again])
//!         })?;
//!
//!     let content = doc.content().children().unwrap();
//!     assert_eq!(content.len(), 4);
//!     assert_eq!(content[0], content[2]);
//!     Ok(())
//! }
//! ```
//!
//! ## Construction order
//!
//! Children are built before their parents, so a reference bound somewhere
//! in a subtree is already assigned when a later sibling embeds it.
//! Embedding a reference that is still unassigned fails with
//! [`Error::UnresolvedReference`] instead of producing a hole in the tree.

pub mod builder;
pub mod builtin;
pub mod error;
pub mod model;
pub mod tag;

// Re-export commonly used types
pub use builder::{build_document, DocumentBuilder};
pub use error::{Error, ErrorKind, Result};
pub use model::{
    Category, Document, Element, Payload, Reference, References, TagId, WeakReference,
};
pub use tag::{normalize, rules, Child, NormalizedProps, PropValue, Props, Tag};
