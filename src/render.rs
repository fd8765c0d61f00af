//! The render entry point: node tree in, printable string out.

use crate::layout::{compute_matrix, LayoutError};
use crate::node::Node;
use crate::options::{MaxWidth, Options};

/// Resolve the default layout width from the host terminal.
///
/// Unbounded when the terminal size cannot be detected (not a tty, piped
/// output, and so on).
#[must_use]
pub fn terminal_width() -> MaxWidth {
    match crossterm::terminal::size() {
        Ok((columns, _rows)) => MaxWidth::Cells(columns as usize),
        Err(_) => MaxWidth::Unbounded,
    }
}

/// Render a node tree to a printable string with default options.
///
/// The layout width defaults to the host terminal's column count; the
/// matrix lines are joined with `\n`, escape sequences embedded.
///
/// # Errors
///
/// Propagates [`LayoutError`] from layout computation.
pub fn render(node: &Node) -> Result<String, LayoutError> {
    render_with(node, Options::new())
}

/// Render a node tree with explicit call-site options.
///
/// Caller options win over the terminal-width default; pass
/// `Options::new().width(MaxWidth::Unbounded)` to suppress terminal
/// detection entirely.
///
/// # Errors
///
/// Propagates [`LayoutError`] from layout computation.
pub fn render_with(node: &Node, options: Options) -> Result<String, LayoutError> {
    let resolved = options.or(&Options::new().width(terminal_width()));

    #[cfg(feature = "tracing")]
    tracing::trace!(width = ?resolved.width, "render");

    Ok(compute_matrix(node, &resolved)?.join())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{StackNode, TextNode};

    #[test]
    fn render_joins_matrix_lines() {
        let ui: Node = StackNode::new()
            .child(TextNode::new("text 1"))
            .child(TextNode::new("text 2"))
            .into();
        let output = render_with(&ui, Options::new().width(MaxWidth::Unbounded));
        assert_eq!(output.as_deref(), Ok("text 1\ntext 2"));
    }

    #[test]
    fn caller_width_beats_terminal_default() {
        let ui: Node = TextNode::new("abcdef").into();
        let output = render_with(&ui, Options::new().width(3));
        assert_eq!(output.as_deref(), Ok("abc\ndef"));
    }
}
