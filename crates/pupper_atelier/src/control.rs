//! Control group building.
//!
//! A conditional branch or a loop body is a list of sibling nodes, but a Vue
//! directive sits on exactly one element. The group is therefore collapsed
//! into one node carrying the directives.

use pupper_carton::String;
use pupper_relief::{Attribute, Block, CommentNode, Node, TagNode};

use crate::directive::TEMPLATE_TAG;

/// Collapse `items` into one node carrying `directives`.
///
/// - no items: a buffered comment holding `empty_label`, so the empty branch
///   still renders and shows where it came from
/// - a single tag that does not already have the first directive: the
///   directives are appended to its attributes
/// - anything else: the items are wrapped in a `<template>` carrying the
///   directives
pub fn build_control_group(
    mut items: Vec<Node>,
    directives: Vec<Attribute>,
    empty_label: impl Into<String>,
) -> Node {
    if items.is_empty() {
        return Node::Comment(CommentNode::new(empty_label, true));
    }

    if items.len() > 1 {
        return wrap_in_template(items, directives);
    }

    match items.remove(0) {
        Node::Tag(mut tag) if !has_first_directive(&tag, &directives) => {
            tag.attrs.extend(directives);
            Node::Tag(tag)
        }
        item => wrap_in_template(vec![item], directives),
    }
}

fn has_first_directive(tag: &TagNode, directives: &[Attribute]) -> bool {
    directives
        .first()
        .is_some_and(|first| tag.attrs.iter().any(|attr| attr.name == first.name))
}

fn wrap_in_template(items: Vec<Node>, directives: Vec<Attribute>) -> Node {
    tracing::trace!(children = items.len(), "wrapping control group in <template>");
    Node::Tag(TagNode {
        name: TEMPLATE_TAG.into(),
        self_closing: false,
        attrs: directives,
        block: Block::new(items),
        is_inline: false,
        line: 0,
    })
}
