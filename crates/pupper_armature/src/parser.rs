//! JSON AST parser.

use pupper_carton::String;
use pupper_relief::{Block, Node, Plugin};
use serde::Deserialize;

use crate::error::ParseError;

/// Parser options
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Filename for error messages
    pub filename: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            filename: String::from("template.pug"),
        }
    }
}

/// The document root as `pug-parser` writes it.
#[derive(Deserialize)]
struct Root {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    nodes: Vec<Node>,
}

/// Parse a template AST and run the `post_parse` hook of every plugin, in order.
pub fn parse(
    source: &str,
    options: &ParseOptions,
    plugins: &mut [&mut dyn Plugin],
) -> Result<Block, ParseError> {
    let root: Root = serde_json::from_str(source).map_err(|source| ParseError::InvalidAst {
        filename: options.filename.clone(),
        source,
    })?;

    if root.kind != "Block" {
        return Err(ParseError::UnexpectedRoot {
            filename: options.filename.clone(),
            found: root.kind,
        });
    }

    let mut block = Block::new(root.nodes);
    tracing::debug!(
        filename = %options.filename,
        nodes = block.nodes.len(),
        "parsed template AST"
    );

    for plugin in plugins.iter_mut() {
        tracing::trace!(plugin = plugin.name(), "running post_parse hook");
        block = plugin.post_parse(block);
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pupper_relief::{TagNode, TextNode};

    struct Recorder {
        calls: usize,
        seen: usize,
    }

    impl Plugin for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn post_parse(&mut self, block: Block) -> Block {
            self.calls += 1;
            self.seen = block.nodes.len();
            block
        }
    }

    struct Wrap;

    impl Plugin for Wrap {
        fn name(&self) -> &str {
            "wrap"
        }

        fn post_parse(&mut self, block: Block) -> Block {
            Block::new(vec![TagNode::new("main").with_children(block.nodes).into()])
        }
    }

    const SOURCE: &str = r#"{
        "type": "Block",
        "nodes": [
            { "type": "Text", "val": "a", "line": 1 },
            { "type": "Text", "val": "b", "line": 2 }
        ],
        "line": 0,
        "declaredBlocks": {}
    }"#;

    #[test]
    fn test_parse_without_plugins() {
        let block = parse(SOURCE, &ParseOptions::default(), &mut []).unwrap();
        assert_eq!(block.nodes.len(), 2);
        assert_eq!(block.nodes[1], Node::Text(TextNode { val: "b".into(), line: 2 }));
    }

    #[test]
    fn test_post_parse_runs_once() {
        let mut recorder = Recorder { calls: 0, seen: 0 };
        parse(SOURCE, &ParseOptions::default(), &mut [&mut recorder]).unwrap();
        assert_eq!(recorder.calls, 1);
        assert_eq!(recorder.seen, 2);
    }

    #[test]
    fn test_plugins_run_in_order() {
        let mut wrap = Wrap;
        let mut recorder = Recorder { calls: 0, seen: 0 };
        let block = parse(
            SOURCE,
            &ParseOptions::default(),
            &mut [&mut wrap, &mut recorder],
        )
        .unwrap();
        // The recorder sees the block the wrapper returned
        assert_eq!(recorder.seen, 1);
        assert_eq!(block.nodes[0].kind(), "Tag");
    }

    #[test]
    fn test_invalid_json() {
        let options = ParseOptions {
            filename: "broken.pug".into(),
        };
        let err = parse("{ nope", &options, &mut []).unwrap_err();
        assert!(matches!(err, ParseError::InvalidAst { .. }));
        assert!(err.to_string().starts_with("broken.pug: invalid template AST"));
    }

    #[test]
    fn test_unexpected_root() {
        let err = parse(
            r#"{ "type": "Text", "val": "x" }"#,
            &ParseOptions::default(),
            &mut [],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "template.pug: expected a Block at the document root, found Text"
        );
    }
}
