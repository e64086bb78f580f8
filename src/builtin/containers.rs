//! Container tags: paragraph, blocks and inliners.

use crate::error::Result;
use crate::model::Payload;
use crate::tag::{rules, NormalizedProps, Tag};

/// Name of the paragraph tag.
pub const PARAGRAPH: &str = "paragraph";

/// Name of the blocks tag.
pub const BLOCKS: &str = "blocks";

/// Name of the inliners tag.
pub const INLINERS: &str = "inliners";

/// Block holding a non-empty run of inliners.
pub fn paragraph() -> Tag {
    Tag::block(PARAGRAPH, |props| inliner_sequence(PARAGRAPH, props))
}

/// Block holding a non-empty sequence of blocks.
pub fn blocks() -> Tag {
    Tag::block(BLOCKS, |props| {
        let children = props.children();
        rules::require_non_empty(BLOCKS, children)?;
        rules::require_blocks(BLOCKS, children)?;
        Ok(Payload::Children(children.to_vec()))
    })
}

/// Inliner grouping a non-empty run of inliners.
pub fn inliners() -> Tag {
    Tag::inliner(INLINERS, |props| inliner_sequence(INLINERS, props))
}

fn inliner_sequence(tag: &str, props: &NormalizedProps) -> Result<Payload> {
    let children = props.children();
    rules::require_non_empty(tag, children)?;
    rules::require_inliners(tag, children)?;
    Ok(Payload::Children(children.to_vec()))
}
