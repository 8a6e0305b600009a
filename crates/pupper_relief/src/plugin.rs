//! Parser plugin hooks.

use crate::ast::Block;

/// A hook set invoked by a parser service.
///
/// `post_parse` runs exactly once, after the top-level block has been built.
/// The returned block replaces the parsed one.
pub trait Plugin {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    fn post_parse(&mut self, block: Block) -> Block {
        block
    }
}
