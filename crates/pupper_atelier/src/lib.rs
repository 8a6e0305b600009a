//! Atelier - The core workshop of pupper.
//!
//! Rewrites a Pug document tree into the equivalent Vue template tree:
//!
//! - `if` / `else if` / `else` chains become sibling nodes carrying
//!   `v-if` / `v-else-if` / `v-else`
//! - `each` loops become one node carrying `v-for` (and `:key`)
//! - expression attributes become `:name`, `v-bind:class` or `v-on:` bindings
//! - escaped buffered code (`= expr`) becomes `{{expr}}` text
//!
//! # Example
//!
//! ```
//! use pupper_atelier::rewrite;
//! use pupper_relief::{Block, ConditionalNode, Node, TagNode};
//!
//! let block = Block::new(vec![
//!     ConditionalNode::new("ok", vec![TagNode::new("p").into()]).into(),
//! ]);
//! let block = rewrite(block);
//!
//! let Node::Tag(p) = &block.nodes[0] else { unreachable!() };
//! assert_eq!(p.attr("v-if").and_then(|a| a.value_str()), Some("\"ok\""));
//! ```

pub mod attrs;
pub mod control;
pub mod directive;
pub mod escape;
pub mod rewrite;

pub use attrs::{rewrite_attribute, rewrite_attributes};
pub use control::build_control_group;
pub use escape::escape;
pub use rewrite::{rewrite, RewriteStats, TreeRewriter};
