//! Pug template AST node types.
//!
//! The tree mirrors the JSON emitted by `pug-parser`: every node is an object
//! tagged by its `type` field, children live in a `block`, and attribute
//! values are JavaScript expressions (or the boolean `true`). Fields the
//! transpiler never reads (`column`, `filename`, `attributeBlocks`, ...) are
//! dropped on deserialization.

use pupper_carton::String;
use serde::{Deserialize, Serialize};

/// Ordered sequence of child nodes. List order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// All template node types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Tag(TagNode),
    Text(TextNode),
    Code(CodeNode),
    Comment(CommentNode),
    BlockComment(BlockCommentNode),
    Doctype(DoctypeNode),
    Conditional(ConditionalNode),
    Each(EachNode),
    Block(Block),
}

impl Node {
    /// The pug `type` name of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tag(_) => "Tag",
            Self::Text(_) => "Text",
            Self::Code(_) => "Code",
            Self::Comment(_) => "Comment",
            Self::BlockComment(_) => "BlockComment",
            Self::Doctype(_) => "Doctype",
            Self::Conditional(_) => "Conditional",
            Self::Each(_) => "Each",
            Self::Block(_) => "Block",
        }
    }

    /// Source line, 0 for synthetic nodes.
    pub fn line(&self) -> u32 {
        match self {
            Self::Tag(n) => n.line,
            Self::Text(n) => n.line,
            Self::Code(n) => n.line,
            Self::Comment(n) => n.line,
            Self::BlockComment(n) => n.line,
            Self::Doctype(n) => n.line,
            Self::Conditional(n) => n.line,
            Self::Each(n) => n.line,
            Self::Block(_) => 0,
        }
    }

    /// Attribute list, for the node kinds that carry one.
    pub fn attrs(&self) -> Option<&[Attribute]> {
        match self {
            Self::Tag(tag) => Some(&tag.attrs),
            _ => None,
        }
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagNode {
    pub name: String,
    #[serde(default)]
    pub self_closing: bool,
    #[serde(default)]
    pub attrs: Vec<Attribute>,
    #[serde(default)]
    pub block: Block,
    #[serde(default)]
    pub is_inline: bool,
    #[serde(default)]
    pub line: u32,
}

impl TagNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            self_closing: false,
            attrs: Vec::new(),
            block: Block::default(),
            is_inline: false,
            line: 0,
        }
    }

    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn with_children(mut self, nodes: Vec<Node>) -> Self {
        self.block.nodes = nodes;
        self
    }

    /// Find an attribute by exact name.
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|attr| attr.name == name)
    }
}

/// Text node (`| text`, inline text, or an interpolation produced by the rewrite)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub val: String,
    #[serde(default)]
    pub line: u32,
}

impl TextNode {
    pub fn new(val: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            line: 0,
        }
    }
}

/// Code node (`- stmt`, `= expr`, `!= expr`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeNode {
    pub val: String,
    /// Output is written at this position (`=` / `!=`)
    #[serde(default)]
    pub buffer: bool,
    /// Output must be escaped (`=` rather than `!=`)
    #[serde(default)]
    pub must_escape: bool,
    #[serde(default)]
    pub is_inline: bool,
    /// Body of an unbuffered statement such as `- for (...)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
    #[serde(default)]
    pub line: u32,
}

impl CodeNode {
    /// Unbuffered statement.
    pub fn new(val: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            buffer: false,
            must_escape: false,
            is_inline: false,
            block: None,
            line: 0,
        }
    }

    /// Buffered expression (`=` when `must_escape`, `!=` otherwise).
    pub fn buffered(val: impl Into<String>, must_escape: bool) -> Self {
        Self {
            buffer: true,
            must_escape,
            ..Self::new(val)
        }
    }
}

/// Comment node (`//` buffered, `//-` unbuffered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    pub val: String,
    #[serde(default)]
    pub buffer: bool,
    #[serde(default)]
    pub line: u32,
}

impl CommentNode {
    pub fn new(val: impl Into<String>, buffer: bool) -> Self {
        Self {
            val: val.into(),
            buffer,
            line: 0,
        }
    }
}

/// Multi-line comment with a nested block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCommentNode {
    #[serde(default)]
    pub val: String,
    #[serde(default)]
    pub buffer: bool,
    #[serde(default)]
    pub block: Block,
    #[serde(default)]
    pub line: u32,
}

/// Doctype node (`doctype html`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctypeNode {
    #[serde(default)]
    pub val: Option<String>,
    #[serde(default)]
    pub line: u32,
}

/// Conditional node (`if` / `unless` / `else if` / `else`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalNode {
    pub test: String,
    #[serde(default)]
    pub consequent: Block,
    #[serde(default)]
    pub alternate: Option<Alternate>,
    #[serde(default)]
    pub line: u32,
}

impl ConditionalNode {
    pub fn new(test: impl Into<String>, consequent: Vec<Node>) -> Self {
        Self {
            test: test.into(),
            consequent: Block::new(consequent),
            alternate: None,
            line: 0,
        }
    }

    /// Attach an `else` block.
    pub fn with_else(mut self, nodes: Vec<Node>) -> Self {
        self.alternate = Some(Alternate::Block(Block::new(nodes)));
        self
    }

    /// Attach an `else if` link.
    pub fn with_else_if(mut self, next: ConditionalNode) -> Self {
        self.alternate = Some(Alternate::Conditional(Box::new(next)));
        self
    }
}

/// The `else` side of a conditional: a plain block, or the next `else if` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Alternate {
    Block(Block),
    Conditional(Box<ConditionalNode>),
}

/// Loop node (`each value, key in collection`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EachNode {
    /// Loop variable
    pub val: String,
    /// Optional key / index variable
    #[serde(default)]
    pub key: Option<String>,
    /// Collection expression
    pub obj: String,
    #[serde(default)]
    pub block: Block,
    #[serde(default)]
    pub line: u32,
}

impl EachNode {
    pub fn new(val: impl Into<String>, obj: impl Into<String>, body: Vec<Node>) -> Self {
        Self {
            val: val.into(),
            key: None,
            obj: obj.into(),
            block: Block::new(body),
            line: 0,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Attribute value: a JavaScript expression, or a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Str(String),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Tag attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub val: AttrValue,
    /// The value is a source expression that still needs converting into a
    /// target literal.
    #[serde(default)]
    pub must_escape: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, val: impl Into<AttrValue>, must_escape: bool) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
            must_escape,
        }
    }

    /// Bare boolean attribute such as `v-else`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, true, false)
    }

    /// String value, if the attribute has one.
    pub fn value_str(&self) -> Option<&str> {
        match &self.val {
            AttrValue::Str(s) => Some(s.as_str()),
            AttrValue::Bool(_) => None,
        }
    }
}

macro_rules! impl_into_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_into_node!(
    Tag(TagNode),
    Text(TextNode),
    Code(CodeNode),
    Comment(CommentNode),
    BlockComment(BlockCommentNode),
    Doctype(DoctypeNode),
    Conditional(ConditionalNode),
    Each(EachNode),
    Block(Block),
);
