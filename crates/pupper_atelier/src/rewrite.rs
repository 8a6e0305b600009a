//! Tree rewrite.
//!
//! Depth-first walk over a Pug block producing the Vue-directive form of the
//! same document. Each input node is moved into a fresh output list, where
//! it becomes zero or more output nodes:
//!
//! - `Conditional` expands into one node per branch (`v-if`, `v-else-if`...,
//!   `v-else`), spliced in branch order
//! - `Each` collapses into one node carrying `v-for`
//! - everything else stays one node, with attributes rewritten and children
//!   rewritten recursively
//!
//! Attributes are rewritten before a node's children are visited, and before
//! any directive is attached, so directives are never themselves rewritten.

use std::mem;

use pupper_carton::String;
use pupper_relief::{
    Alternate, Attribute, Block, CodeNode, ConditionalNode, EachNode, Node, Plugin, TextNode,
};

use crate::attrs::rewrite_attributes;
use crate::control::build_control_group;
use crate::directive::{directive, KEY, V_ELSE, V_ELSE_IF, V_FOR, V_IF};
use crate::escape::escape;

/// Counters collected during one rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// `if` chains rewritten
    pub conditionals: usize,
    /// Branches emitted across all chains
    pub branches: usize,
    /// `each` loops rewritten
    pub loops: usize,
    /// Buffered code turned into `{{ }}` text
    pub interpolations: usize,
    /// Attributes turned into Vue bindings
    pub bindings: usize,
    /// Empty groups replaced by a placeholder comment
    pub placeholders: usize,
}

/// Rewrites Pug control flow and bindings into Vue directives.
#[derive(Debug, Default)]
pub struct TreeRewriter {
    stats: RewriteStats,
}

impl TreeRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RewriteStats {
        self.stats
    }

    /// Rewrite a list of sibling nodes.
    pub fn rewrite_block(&mut self, nodes: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            self.rewrite_node(node, &mut out);
        }
        out
    }

    fn rewrite_node(&mut self, node: Node, out: &mut Vec<Node>) {
        match node {
            Node::Tag(mut tag) => {
                tag.attrs = self.rewrite_attrs(mem::take(&mut tag.attrs));
                self.rewrite_children(&mut tag.block);
                out.push(Node::Tag(tag));
            }
            Node::Code(code) => out.push(self.rewrite_code(code)),
            Node::BlockComment(mut comment) => {
                self.rewrite_children(&mut comment.block);
                out.push(Node::BlockComment(comment));
            }
            Node::Block(mut block) => {
                self.rewrite_children(&mut block);
                out.push(Node::Block(block));
            }
            Node::Conditional(cond) => {
                self.stats.conditionals += 1;
                self.rewrite_conditional(cond, false, out);
            }
            Node::Each(each) => out.push(self.rewrite_each(each)),
            node @ (Node::Text(_) | Node::Comment(_) | Node::Doctype(_)) => out.push(node),
        }
    }

    fn rewrite_children(&mut self, block: &mut Block) {
        block.nodes = self.rewrite_block(mem::take(&mut block.nodes));
    }

    fn rewrite_attrs(&mut self, attrs: Vec<Attribute>) -> Vec<Attribute> {
        let pending = attrs.iter().filter(|attr| attr.must_escape).count();
        let attrs = rewrite_attributes(attrs);
        let remaining = attrs.iter().filter(|attr| attr.must_escape).count();
        self.stats.bindings += pending - remaining;
        attrs
    }

    fn rewrite_code(&mut self, mut code: CodeNode) -> Node {
        if let Some(block) = code.block.as_mut() {
            self.rewrite_children(block);
        }

        if !code.must_escape {
            return Node::Code(code);
        }

        // Buffered code never has a body, so nothing is lost here
        if code.buffer {
            self.stats.interpolations += 1;
            return Node::Text(TextNode {
                val: format!("{{{{{}}}}}", code.val).into(),
                line: code.line,
            });
        }

        code.val = escape(&code.val);
        code.must_escape = false;
        Node::Code(code)
    }

    /// Emit one node per branch of the chain starting at `cond`.
    ///
    /// `is_link` is set when `cond` is the alternate of an outer conditional.
    fn rewrite_conditional(&mut self, cond: ConditionalNode, is_link: bool, out: &mut Vec<Node>) {
        let ConditionalNode {
            test,
            consequent,
            alternate,
            line,
        } = cond;

        let name = if is_link { V_ELSE_IF } else { V_IF };
        tracing::trace!(directive = name, test = %test, line, "rewriting conditional branch");

        let consequent = self.rewrite_block(consequent.nodes);
        let label = format!("empty {}={}", name, test);
        out.push(self.group(consequent, vec![directive(name, escape(&test))], label));
        self.stats.branches += 1;

        match alternate {
            Some(Alternate::Block(block)) => {
                let alternate = self.rewrite_block(block.nodes);
                out.push(self.group(alternate, vec![Attribute::flag(V_ELSE)], "empty v-else"));
                self.stats.branches += 1;
            }
            Some(Alternate::Conditional(next)) => self.rewrite_conditional(*next, true, out),
            None => {}
        }
    }

    fn rewrite_each(&mut self, each: EachNode) -> Node {
        let EachNode {
            val,
            key,
            obj,
            block,
            line,
        } = each;

        let expression: String = match &key {
            Some(key) => format!("({}, {}) in {}", val, key, obj).into(),
            None => format!("{} in {}", val, obj).into(),
        };
        tracing::trace!(expression = %expression, line, "rewriting loop");

        let value = escape(&expression);
        let label = format!("empty v-for={}", value);
        let mut directives = vec![directive(V_FOR, value)];
        if let Some(key) = key.filter(|key| key.eq_ignore_ascii_case("key")) {
            directives.push(directive(KEY, escape(&key)));
        }

        self.stats.loops += 1;
        let body = self.rewrite_block(block.nodes);
        self.group(body, directives, label)
    }

    fn group(
        &mut self,
        items: Vec<Node>,
        directives: Vec<Attribute>,
        empty_label: impl Into<String>,
    ) -> Node {
        if items.is_empty() {
            self.stats.placeholders += 1;
        }
        build_control_group(items, directives, empty_label)
    }
}

impl Plugin for TreeRewriter {
    fn name(&self) -> &str {
        "pupper"
    }

    fn post_parse(&mut self, mut block: Block) -> Block {
        self.rewrite_children(&mut block);
        tracing::debug!(stats = ?self.stats, "rewrote template tree");
        block
    }
}

/// Rewrite a whole document with a fresh [`TreeRewriter`].
pub fn rewrite(block: Block) -> Block {
    TreeRewriter::new().post_parse(block)
}
