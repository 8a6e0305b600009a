//! # pupper
//!
//! Pug to Vue template transpiler.
//!
//! Takes the document tree `pug-parser` produces for a Pug template and turns
//! it into a Vue template: control flow becomes `v-if` / `v-else-if` /
//! `v-else` / `v-for`, expression attributes become bindings, and escaped
//! output becomes `{{ }}` interpolation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared string and tag table utilities
//! - [`relief`] - Template AST and the parser plugin hook
//! - [`armature`] - Parser service reading the pug AST
//! - [`atelier`] - The tree rewrite into Vue directive form
//! - [`glyph`] - Markup renderer
//!
//! ## Example
//!
//! ```
//! use pupper::{emit_module, transpile, ModuleFormat, TranspileOptions};
//!
//! let source = r#"{ "type": "Block", "nodes": [
//!     { "type": "Conditional", "test": "ok",
//!       "consequent": { "type": "Block", "nodes": [
//!         { "type": "Tag", "name": "p", "block": { "type": "Block", "nodes": [
//!           { "type": "Code", "val": "msg", "buffer": true, "mustEscape": true }
//!         ] } }
//!       ] } }
//! ] }"#;
//!
//! let markup = transpile(source, &TranspileOptions::default()).unwrap();
//! assert_eq!(markup, r#"<p v-if="ok">{{msg}}</p>"#);
//! assert_eq!(
//!     emit_module(&markup, ModuleFormat::CommonJs),
//!     r#"module.exports = "<p v-if=\"ok\">{{msg}}</p>""#
//! );
//! ```

pub mod config;
mod error;

pub use error::TranspileError;

/// Shared string and tag table utilities.
pub use pupper_carton as carton;

/// Template AST and the parser plugin hook.
pub use pupper_relief as relief;

/// Parser service reading the pug AST.
pub use pupper_armature as armature;

/// The tree rewrite into Vue directive form.
pub use pupper_atelier as atelier;

/// Markup renderer.
pub use pupper_glyph as glyph;

use pupper_armature::{parse, ParseOptions, Plugin};
use pupper_atelier::TreeRewriter;
use pupper_carton::String;
use pupper_glyph::{render, RenderOptions};
use pupper_relief::Block;
use serde::{Deserialize, Serialize};

/// Module wrapper written around the rendered markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// `module.exports = "..."`
    #[default]
    #[value(name = "commonjs")]
    CommonJs,
    /// `export default "..."`
    Esm,
}

/// Options for one transpile call
#[derive(Debug, Clone, Default)]
pub struct TranspileOptions {
    /// Parser options (filename used in error messages)
    pub parse: ParseOptions,
    /// Markup rendering options
    pub render: RenderOptions,
}

impl TranspileOptions {
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            parse: ParseOptions {
                filename: filename.into(),
            },
            ..Default::default()
        }
    }
}

/// Parse a pug AST document and rewrite it into Vue directive form.
pub fn rewrite_source(source: &str, options: &TranspileOptions) -> Result<Block, TranspileError> {
    let mut rewriter = TreeRewriter::new();
    let mut plugins: [&mut dyn Plugin; 1] = [&mut rewriter];
    let block = parse(source, &options.parse, &mut plugins)?;

    let stats = rewriter.stats();
    tracing::debug!(
        filename = %options.parse.filename,
        conditionals = stats.conditionals,
        loops = stats.loops,
        bindings = stats.bindings,
        "rewrote template"
    );
    Ok(block)
}

/// Transpile a pug AST document into Vue template markup.
pub fn transpile(source: &str, options: &TranspileOptions) -> Result<std::string::String, TranspileError> {
    let block = rewrite_source(source, options)?;
    Ok(render(&block, &options.render)?)
}

/// Wrap markup in a JavaScript module exporting it as a string.
pub fn emit_module(markup: &str, format: ModuleFormat) -> std::string::String {
    let literal = serde_json::Value::String(markup.to_owned());
    match format {
        ModuleFormat::CommonJs => format!("module.exports = {}", literal),
        ModuleFormat::Esm => format!("export default {}", literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_module_commonjs() {
        assert_eq!(
            emit_module("<p>hi</p>", ModuleFormat::CommonJs),
            r#"module.exports = "<p>hi</p>""#
        );
    }

    #[test]
    fn test_emit_module_esm_escapes_json() {
        assert_eq!(
            emit_module("<a title=\"x\">\n</a>", ModuleFormat::Esm),
            r#"export default "<a title=\"x\">\n</a>""#
        );
    }

    #[test]
    fn test_module_format_names() {
        assert_eq!(serde_json::to_string(&ModuleFormat::CommonJs).unwrap(), "\"commonjs\"");
        assert_eq!(serde_json::from_str::<ModuleFormat>("\"esm\"").unwrap(), ModuleFormat::Esm);
    }

    #[test]
    fn test_parse_error_passes_through() {
        let err = transpile("not json", &TranspileOptions::with_filename("page.pug")).unwrap_err();
        assert!(matches!(err, TranspileError::Parse(_)));
        assert!(err.to_string().starts_with("page.pug: invalid template AST"));
    }

    #[test]
    fn test_rewrite_source_returns_tree() {
        let source = r#"{ "type": "Block", "nodes": [
            { "type": "Each", "val": "item", "obj": "items", "key": null,
              "block": { "type": "Block", "nodes": [{ "type": "Tag", "name": "li" }] } }
        ] }"#;
        let block = rewrite_source(source, &TranspileOptions::default()).unwrap();
        assert_eq!(block.nodes.len(), 1);
        assert_eq!(
            block.nodes[0].attrs().and_then(|attrs| attrs[0].value_str()),
            Some("\"item in items\"")
        );
    }
}
