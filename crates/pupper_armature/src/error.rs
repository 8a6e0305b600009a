//! Parser errors.

use pupper_carton::String;
use thiserror::Error;

/// Errors that can occur while reading a template AST
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source is not a valid pug AST document
    #[error("{filename}: invalid template AST: {source}")]
    InvalidAst {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document root is some other node kind
    #[error("{filename}: expected a Block at the document root, found {found}")]
    UnexpectedRoot { filename: String, found: String },
}
