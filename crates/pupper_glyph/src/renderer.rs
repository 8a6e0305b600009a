//! Markup renderer.
//!
//! Writes a rewritten template tree out as HTML-like markup. Expressions are
//! not evaluated: attribute values that are JavaScript string literals are
//! decoded, anything else is written as its source text. Vue evaluates the
//! directive values later.

use pupper_carton::{doctype_declaration, is_void_tag, unquote_js_string};
use pupper_relief::{AttrValue, Attribute, Block, CodeNode, Node, TagNode};

use crate::error::RenderError;
use crate::options::RenderOptions;

/// Single-pass markup writer.
pub struct MarkupRenderer {
    terse: bool,
    output: String,
}

impl MarkupRenderer {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            terse: options.terse,
            output: String::new(),
        }
    }

    pub fn render(mut self, block: &Block) -> Result<String, RenderError> {
        self.render_nodes(&block.nodes)?;
        Ok(self.output)
    }

    fn render_nodes(&mut self, nodes: &[Node]) -> Result<(), RenderError> {
        for node in nodes {
            self.render_node(node)?;
        }
        Ok(())
    }

    fn render_node(&mut self, node: &Node) -> Result<(), RenderError> {
        match node {
            Node::Tag(tag) => self.render_tag(tag)?,
            Node::Text(text) => self.output.push_str(&text.val),
            Node::Code(code) => self.render_code(code)?,
            Node::Comment(comment) => {
                if comment.buffer {
                    self.output.push_str("<!--");
                    self.output.push_str(&comment.val);
                    self.output.push_str("-->");
                }
            }
            Node::BlockComment(comment) => {
                if comment.buffer {
                    self.output.push_str("<!--");
                    self.output.push_str(&comment.val);
                    self.render_nodes(&comment.block.nodes)?;
                    self.output.push_str("-->");
                }
            }
            Node::Doctype(doctype) => self.render_doctype(doctype.val.as_deref()),
            Node::Block(block) => self.render_nodes(&block.nodes)?,
            Node::Conditional(_) | Node::Each(_) => {
                return Err(RenderError::UnexpandedControlNode {
                    kind: node.kind(),
                    line: node.line(),
                })
            }
        }
        Ok(())
    }

    fn render_tag(&mut self, tag: &TagNode) -> Result<(), RenderError> {
        let is_void = is_void_tag(&tag.name);
        if (tag.self_closing || is_void) && !tag.block.is_empty() {
            return Err(RenderError::SelfClosingWithContent {
                name: tag.name.clone(),
                line: tag.line,
            });
        }

        self.output.push('<');
        self.output.push_str(&tag.name);
        self.render_attrs(&tag.attrs);

        if tag.self_closing || is_void {
            if self.terse && !tag.self_closing {
                self.output.push('>');
            } else {
                self.output.push_str("/>");
            }
            return Ok(());
        }

        self.output.push('>');
        self.render_nodes(&tag.block.nodes)?;
        self.output.push_str("</");
        self.output.push_str(&tag.name);
        self.output.push('>');
        Ok(())
    }

    fn render_attrs(&mut self, attrs: &[Attribute]) {
        let mut class = merged_class(attrs);
        for attr in attrs {
            match &attr.val {
                AttrValue::Bool(false) => {}
                AttrValue::Bool(true) => {
                    self.output.push(' ');
                    self.output.push_str(&attr.name);
                    if !self.terse {
                        self.output.push_str("=\"");
                        self.output.push_str(&attr.name);
                        self.output.push('"');
                    }
                }
                AttrValue::Str(_) if attr.name == "class" => {
                    // Static classes collapse into one attribute at the first position.
                    if let Some(merged) = class.take() {
                        self.output.push_str(" class=\"");
                        self.output.push_str(&merged);
                        self.output.push('"');
                    }
                }
                AttrValue::Str(value) => {
                    self.output.push(' ');
                    self.output.push_str(&attr.name);
                    self.output.push_str("=\"");
                    self.output.push_str(&attr_value(value, attr.must_escape));
                    self.output.push('"');
                }
            }
        }
    }

    fn render_code(&mut self, code: &CodeNode) -> Result<(), RenderError> {
        if code.buffer {
            if code.must_escape {
                self.output.push_str(&htmlize::escape_text(code.val.as_str()));
            } else {
                self.output.push_str(&code.val);
            }
        }
        if let Some(block) = &code.block {
            self.render_nodes(&block.nodes)?;
        }
        Ok(())
    }

    fn render_doctype(&mut self, val: Option<&str>) {
        let name = val.unwrap_or("html");
        let declaration = match doctype_declaration(name) {
            Some(declaration) => declaration.to_string(),
            None => format!("<!DOCTYPE {}>", name),
        };
        if declaration.eq_ignore_ascii_case("<!doctype html>") {
            tracing::trace!("html doctype, switching to terse output");
            self.terse = true;
        }
        self.output.push_str(&declaration);
    }
}

/// Joined, encoded value of every static `class` attribute.
fn merged_class(attrs: &[Attribute]) -> Option<String> {
    let mut classes = attrs
        .iter()
        .filter(|attr| attr.name == "class")
        .filter_map(|attr| match &attr.val {
            AttrValue::Str(value) => Some(attr_value(value, attr.must_escape)),
            AttrValue::Bool(_) => None,
        })
        .peekable();
    classes.peek()?;
    let classes: Vec<String> = classes.filter(|value| !value.is_empty()).collect();
    Some(classes.join(" "))
}

/// Encode an attribute value, decoding it first when it is a string literal.
fn attr_value(value: &str, must_escape: bool) -> String {
    let value = match unquote_js_string(value) {
        Some(literal) => literal,
        None => value.into(),
    };
    if must_escape {
        htmlize::escape_attribute(value.as_str()).into_owned()
    } else {
        value.replace('"', "&quot;")
    }
}
