//! The link tag.

use crate::error::{Error, Result};
use crate::model::{Payload, TagId};
use crate::tag::{rules, NormalizedProps, Tag};

/// Name of the link tag.
pub const LINK: &str = "link";

/// Name of the prop holding the link target.
pub const LINK_TARGET: &str = "target";

/// Inliner pointing at a referenced element, labeled by a single text child.
pub fn link() -> Tag {
    Tag::inliner(LINK, build)
}

fn build(props: &NormalizedProps) -> Result<Payload> {
    let target = rules::require_reference(LINK, props, LINK_TARGET)?.downgrade();

    let children = props.children();
    rules::require_count(LINK, children, 1)?;

    let child = &children[0];
    let label = match child.text() {
        Some(label) if child.is(&TagId::text()) => label.to_string(),
        _ => {
            return Err(Error::InvalidChildType {
                tag: LINK.to_string(),
                child: child.name().to_string(),
                expected: "a text element".to_string(),
            })
        }
    };

    Ok(Payload::Link { target, label })
}
