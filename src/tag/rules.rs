//! Reusable content checks for tag rules.
//!
//! Built-in tags compose these instead of re-deriving nesting logic; custom
//! tags can do the same.

use super::NormalizedProps;
use crate::error::{Error, Result};
use crate::model::{Category, Element, Reference};

/// Fail with `EmptyContent` if there are no children.
pub fn require_non_empty(tag: &str, children: &[Element]) -> Result<()> {
    if children.is_empty() {
        return Err(Error::EmptyContent {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

/// Fail with `InvalidChildType` on the first child outside `category`.
pub fn require_category(tag: &str, children: &[Element], category: Category) -> Result<()> {
    match children.iter().find(|child| child.category() != category) {
        Some(child) => Err(Error::InvalidChildType {
            tag: tag.to_string(),
            child: child.name().to_string(),
            expected: format!("{} elements", category),
        }),
        None => Ok(()),
    }
}

/// Blocks-only nesting rule.
pub fn require_blocks(tag: &str, children: &[Element]) -> Result<()> {
    require_category(tag, children, Category::Block)
}

/// Inliners-only nesting rule.
pub fn require_inliners(tag: &str, children: &[Element]) -> Result<()> {
    require_category(tag, children, Category::Inliner)
}

/// Fail with `InvalidChildCount` unless there are exactly `expected` children.
pub fn require_count(tag: &str, children: &[Element], expected: usize) -> Result<()> {
    if children.len() != expected {
        return Err(Error::InvalidChildCount {
            tag: tag.to_string(),
            expected,
            found: children.len(),
        });
    }
    Ok(())
}

/// Get a required reference-valued prop.
pub fn require_reference<'a>(
    tag: &str,
    props: &'a NormalizedProps,
    prop: &str,
) -> Result<&'a Reference> {
    match props.get(prop) {
        None => Err(Error::MissingProp {
            tag: tag.to_string(),
            prop: prop.to_string(),
        }),
        Some(value) => value.as_reference().ok_or_else(|| Error::InvalidProp {
            tag: tag.to_string(),
            prop: prop.to_string(),
            reason: format!("must be a valid reference, got {}", value.kind()),
        }),
    }
}
