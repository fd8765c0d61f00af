//! weft, a terminal text-layout engine.
//!
//! weft turns a tree of layout nodes (styled text leaves, side-by-side
//! columns, vertically stacked blocks) into a fixed rectangular grid of
//! display lines ready to print, honoring a maximum width, explicit or
//! auto-divided column sizing, and column gaps, while keeping embedded ANSI
//! escape sequences correct across wrap boundaries.
//!
//! The pipeline is a pure, synchronous transform. Text is tokenized into
//! style-tagged fragments ([`ansi`]), re-flowed into width-bounded lines
//! ([`wrap`]), and composed recursively into a [`matrix::VisualMatrix`]
//! ([`layout`]); [`render`](render::render) joins the root matrix into a
//! string. Rendering never mutates the tree, so a tree can be rendered any
//! number of times, concurrently if nothing else mutates it.
//!
//! # Example
//!
//! ```
//! use weft::prelude::*;
//!
//! let ui = stack![
//!     text!("Status", Style::Bold),
//!     columns![text!("left pane"), text!("right pane")].columns(2),
//! ];
//! let output = render_with(&ui.into(), Options::new().width(40)).unwrap();
//! assert_eq!(output.lines().count(), 2);
//! ```

pub mod ansi;
pub mod layout;
pub mod macros;
pub mod matrix;
pub mod node;
pub mod options;
pub mod render;
pub mod style;
pub mod wrap;

pub use layout::{compute_matrix, LayoutError};
pub use matrix::VisualMatrix;
pub use node::{create_element, Children, ColumnsNode, Node, StackNode, TextNode};
pub use options::{ColumnSpec, MaxWidth, Options};
pub use render::{render, render_with, terminal_width};
pub use style::{styled, Style, StyleSet};

/// Commonly used types and macros, for glob import.
pub mod prelude {
    pub use crate::node::{ColumnsNode, Node, StackNode, TextNode};
    pub use crate::options::{ColumnSpec, MaxWidth, Options};
    pub use crate::render::{render, render_with};
    pub use crate::style::{styled, Style, StyleSet};
    pub use crate::{columns, stack, text};
}
