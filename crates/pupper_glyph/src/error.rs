//! Error types for pupper_glyph renderer.

use pupper_carton::String;
use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A control node was left in the tree; the rewrite must run first
    #[error("line {line}: {kind} node cannot be rendered as markup, rewrite the tree first")]
    UnexpandedControlNode { kind: &'static str, line: u32 },

    /// A self-closing or void element was given children
    #[error("line {line}: <{name}> is self-closing and cannot have content")]
    SelfClosingWithContent { name: String, line: u32 },
}
