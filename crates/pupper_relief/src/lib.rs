//! Relief - The sculptured AST surface for pupper.
//!
//! Defines the Pug document tree in the shape `pug-parser` emits it, and the
//! [`Plugin`] hook through which a transform is installed into a parser.

pub mod ast;
pub mod plugin;

pub use ast::*;
pub use plugin::Plugin;
