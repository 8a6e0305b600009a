//! Armature - The structural parser service for pupper.
//!
//! Reads the JSON document tree produced by `pug-parser` and hands the
//! top-level block to every installed [`Plugin`] through its `post_parse`
//! hook. Lexing Pug source text is left to `pug-lexer` / `pug-parser`
//! upstream; this crate starts from their output.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{parse, ParseOptions};

pub use pupper_relief::Plugin;
