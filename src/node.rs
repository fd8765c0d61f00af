//! Node types for the layout tree.
//!
//! A tree of [`Node`]s describes the desired output: styled text leaves,
//! side-by-side column arrangements, and vertically stacked blocks. Nodes
//! are plain data: building the tree performs no layout, and rendering
//! never mutates it. Each node carries a set of default [`Options`] that
//! call-site options are layered over at render time.
//!
//! # Example
//!
//! ```
//! use weft::node::{StackNode, TextNode};
//! use weft::options::{MaxWidth, Options};
//!
//! let ui = StackNode::new()
//!     .child(TextNode::new("text 1"))
//!     .child(TextNode::new("text 2"));
//! let output = weft::render_with(&ui.into(), Options::new().width(MaxWidth::Unbounded)).unwrap();
//! assert_eq!(output, "text 1\ntext 2");
//! ```

use crate::options::{ColumnSpec, MaxWidth, Options};
use smallvec::SmallVec;

/// Child list for container nodes.
///
/// The `Box` provides the indirection the recursive `Node` type needs;
/// small trees keep their child pointers inline.
pub type NodeChildren = SmallVec<[Box<Node>; 8]>;

/// A node in the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Styled text leaf.
    Text(TextNode),
    /// Side-by-side column arrangement.
    Columns(ColumnsNode),
    /// Vertically stacked blocks.
    Stack(StackNode),
}

impl Node {
    /// The node's children. Text leaves have none.
    #[must_use]
    pub fn children(&self) -> &[Box<Node>] {
        match self {
            Node::Text(_) => &[],
            Node::Columns(n) => &n.children,
            Node::Stack(n) => &n.children,
        }
    }

    /// The node's stored default options.
    #[must_use]
    pub fn defaults(&self) -> &Options {
        match self {
            Node::Text(n) => &n.defaults,
            Node::Columns(n) => &n.defaults,
            Node::Stack(n) => &n.defaults,
        }
    }
}

// === Text node ===

/// Leaf node holding a raw styled string.
///
/// The string may contain embedded escape sequences and newlines; both are
/// interpreted at render time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    /// The raw, possibly escape-annotated text.
    pub value: String,
    /// Default options, overridden by call-site options field-wise.
    pub defaults: Options,
}

impl TextNode {
    /// Create a text node.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            defaults: Options::new(),
        }
    }

    /// Replace the default options.
    #[must_use]
    pub fn defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default the `colors` option.
    #[must_use]
    pub fn colors(mut self, colors: bool) -> Self {
        self.defaults.colors = Some(colors);
        self
    }

    /// Default the maximum width.
    #[must_use]
    pub fn width(mut self, width: impl Into<MaxWidth>) -> Self {
        self.defaults.width = Some(width.into());
        self
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(TextNode::new(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(TextNode::new(value))
    }
}

// === Columns node ===

/// Container that lays its children out in column slots.
///
/// # Example
///
/// ```
/// use weft::node::{ColumnsNode, TextNode};
/// use weft::options::ColumnSpec;
///
/// let cols = ColumnsNode::new()
///     .columns(2)
///     .template([ColumnSpec::fixed(10), ColumnSpec::AUTO])
///     .child(TextNode::new("left"))
///     .child(TextNode::new("right"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnsNode {
    /// Child nodes, one per column slot in order.
    pub children: NodeChildren,
    /// Default options, overridden by call-site options field-wise.
    pub defaults: Options,
}

impl ColumnsNode {
    /// Create an empty columns node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(Box::new(node.into()));
        self
    }

    /// Add multiple children.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children
            .extend(nodes.into_iter().map(|n| Box::new(n.into())));
        self
    }

    /// Replace the default options.
    #[must_use]
    pub fn defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default the number of column slots.
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.defaults.columns = Some(columns);
        self
    }

    /// Default the columns template.
    #[must_use]
    pub fn template(mut self, template: impl Into<Vec<ColumnSpec>>) -> Self {
        self.defaults.columns_template = Some(template.into());
        self
    }

    /// Default the gap between columns.
    #[must_use]
    pub fn gap(mut self, gap: usize) -> Self {
        self.defaults.gap = Some(gap);
        self
    }
}

impl From<ColumnsNode> for Node {
    fn from(node: ColumnsNode) -> Self {
        Node::Columns(node)
    }
}

// === Stack node ===

/// Container that stacks its children vertically in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackNode {
    /// Child nodes, top to bottom.
    pub children: NodeChildren,
    /// Default options, overridden by call-site options field-wise.
    pub defaults: Options,
}

impl StackNode {
    /// Create an empty stack node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(Box::new(node.into()));
        self
    }

    /// Add multiple children.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children
            .extend(nodes.into_iter().map(|n| Box::new(n.into())));
        self
    }

    /// Replace the default options.
    #[must_use]
    pub fn defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }
}

impl From<StackNode> for Node {
    fn from(node: StackNode) -> Self {
        Node::Stack(node)
    }
}

// === Factory ===

/// Children argument for [`create_element`].
///
/// One explicit enum replaces the original string-or-node-or-list overload:
/// callers convert via `From` and the ambiguity is resolved once, before any
/// node exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Children {
    /// No children.
    #[default]
    None,
    /// A raw text value.
    Text(String),
    /// A single child node.
    One(Box<Node>),
    /// An ordered list of child nodes.
    Many(Vec<Node>),
}

impl From<&str> for Children {
    fn from(value: &str) -> Self {
        Children::Text(value.to_owned())
    }
}

impl From<String> for Children {
    fn from(value: String) -> Self {
        Children::Text(value)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::One(Box::new(node))
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children::Many(nodes)
    }
}

fn container_children(children: Children) -> NodeChildren {
    match children {
        Children::None => NodeChildren::new(),
        Children::Text(value) => {
            let mut out = NodeChildren::new();
            out.push(Box::new(Node::Text(TextNode::new(value))));
            out
        }
        Children::One(node) => {
            let mut out = NodeChildren::new();
            out.push(node);
            out
        }
        Children::Many(nodes) => nodes.into_iter().map(Box::new).collect(),
    }
}

/// Build a node from a kind name, default options, and children.
///
/// Recognized kinds are `"text"`, `"columns"`, and `"content-division"`
/// (alias `"div"`); any other name falls back to a text node. A text value
/// handed to a container becomes a nested text child; node children handed
/// to a text node are dropped, since text is a leaf.
pub fn create_element(kind: &str, options: Options, children: impl Into<Children>) -> Node {
    let children = children.into();
    match kind {
        "columns" => Node::Columns(ColumnsNode {
            children: container_children(children),
            defaults: options,
        }),
        "content-division" | "div" => Node::Stack(StackNode {
            children: container_children(children),
            defaults: options,
        }),
        _ => {
            let value = match children {
                Children::Text(value) => value,
                _ => String::new(),
            };
            Node::Text(TextNode { value, defaults: options })
        }
    }
}
