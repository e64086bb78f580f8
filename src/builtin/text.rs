//! The text tag.

use crate::error::{Error, Result};
use crate::model::{Payload, TagId, TEXT_TAG};
use crate::tag::{rules, NormalizedProps, Tag};

/// Name of the text tag.
pub const TEXT: &str = TEXT_TAG;

/// Inliner holding plain text.
///
/// Children must be strings or other text elements; the payload is their
/// concatenation in order.
pub fn text() -> Tag {
    Tag::inliner(TEXT, build)
}

fn build(props: &NormalizedProps) -> Result<Payload> {
    let children = props.children();
    rules::require_non_empty(TEXT, children)?;

    let tag = TagId::text();
    let mut concatenated = String::new();
    for child in children {
        match child.text() {
            Some(s) if child.is(&tag) => concatenated.push_str(s),
            _ => {
                return Err(Error::InvalidChildType {
                    tag: TEXT.to_string(),
                    child: child.name().to_string(),
                    expected: "text elements or strings".to_string(),
                })
            }
        }
    }

    Ok(Payload::Text(concatenated))
}
