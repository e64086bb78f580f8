//! Content model types.
//!
//! This module defines the data the rest of the crate produces and
//! consumes: immutable elements, single-assignment reference cells and
//! the finalized document pairing the two.

mod document;
mod element;
mod reference;

pub use document::Document;
pub use element::{Category, Element, Payload, TagId, TEXT_TAG};
pub use reference::{Reference, References, WeakReference};
