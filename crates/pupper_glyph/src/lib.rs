//! # pupper_glyph
//!
//! Glyph - The letterforms of pupper.
//! Writes a rewritten template tree out as markup.
//!
//! ## Example
//!
//! ```
//! use pupper_glyph::{render, RenderOptions};
//! use pupper_relief::{Attribute, Block, TagNode, TextNode};
//!
//! let block = Block::new(vec![TagNode::new("p")
//!     .with_attr(Attribute::new("v-if", "\"ok\"", false))
//!     .with_children(vec![TextNode::new("{{msg}}").into()])
//!     .into()]);
//!
//! let html = render(&block, &RenderOptions::default()).unwrap();
//! assert_eq!(html, r#"<p v-if="ok">{{msg}}</p>"#);
//! ```

mod error;
mod options;
mod renderer;

pub use error::*;
pub use options::*;
pub use renderer::MarkupRenderer;

use pupper_relief::Block;

/// Render a template tree as markup.
///
/// The tree must not contain `Conditional` or `Each` nodes.
#[inline]
pub fn render(block: &Block, options: &RenderOptions) -> Result<String, RenderError> {
    MarkupRenderer::new(options).render(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pupper_relief::{Attribute, Node, TagNode};

    #[test]
    fn test_render_empty_block() {
        let html = render(&Block::default(), &RenderOptions::default()).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_render_options_from_json() {
        let options: RenderOptions = serde_json::from_str(r#"{ "terse": true }"#).unwrap();
        assert_eq!(options, RenderOptions::terse());
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.terse);
    }

    #[test]
    fn test_render_nested_block() {
        let inner = Block::new(vec![TagNode::new("hr").into()]);
        let block = Block::new(vec![
            TagNode::new("nav")
                .with_attr(Attribute::new(":class", "\"{open: isOpen}\"", false))
                .into(),
            Node::Block(inner),
        ]);
        let html = render(&block, &RenderOptions::terse()).unwrap();
        assert_eq!(html, r#"<nav :class="{open: isOpen}"></nav><hr>"#);
    }
}
