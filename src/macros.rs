//! Declarative macros for building layout trees.
//!
//! Thin sugar over the node builders, for the common case of literal trees:
//!
//! ```
//! use weft::prelude::*;
//!
//! let ui = stack![
//!     text!("header"),
//!     columns![text!("left"), text!("right")].columns(2),
//!     text!("footer", Style::Dim),
//! ];
//! ```

/// Creates a text node, optionally wrapped in styles.
///
/// `text!("hi")` is `TextNode::new("hi")`; `text!("hi", Style::Red,
/// Style::Bold)` first wraps the value in those styles' escape sequences.
#[macro_export]
macro_rules! text {
    ($value:expr) => {
        $crate::node::TextNode::new($value)
    };
    ($value:expr, $($style:expr),+ $(,)?) => {
        $crate::node::TextNode::new($crate::style::styled([$($style),+], $value))
    };
}

/// Creates a stack node from its children, top to bottom.
#[macro_export]
macro_rules! stack {
    [] => {
        $crate::node::StackNode::new()
    };
    [$($child:expr),+ $(,)?] => {
        $crate::node::StackNode::new()$(.child($child))+
    };
}

/// Creates a columns node from its children, left to right.
///
/// Slot count and template still come from options; combine with the
/// builder, e.g. `columns![a, b].columns(2)`.
#[macro_export]
macro_rules! columns {
    [] => {
        $crate::node::ColumnsNode::new()
    };
    [$($child:expr),+ $(,)?] => {
        $crate::node::ColumnsNode::new()$(.child($child))+
    };
}
