//! Built-in tag set.
//!
//! | Tag | Category | Content |
//! |-----|----------|---------|
//! | [`text`] | inliner | strings and nested text, concatenated |
//! | [`paragraph`] | block | inliners |
//! | [`blocks`] | block | blocks |
//! | [`inliners`] | inliner | inliners |
//! | [`link`] | inliner | one text child plus a `target` reference |

mod containers;
mod link;
mod text;

pub use containers::{blocks, inliners, paragraph, BLOCKS, INLINERS, PARAGRAPH};
pub use link::{link, LINK, LINK_TARGET};
pub use text::{text, TEXT};
