//! Layout computation: turning a node tree into a [`VisualMatrix`].
//!
//! [`compute_matrix`] is the single dispatch point over the node variants.
//! Each variant resolves its options fresh (call-site over node defaults
//! over hard-coded fallbacks), asks its children for their matrices, and
//! composes the result. Rendering is pure: the tree is never mutated and
//! every call allocates its own intermediate state.

use crate::ansi::{strip_ansi, tokenize, visible_width, Fragment};
use crate::matrix::VisualMatrix;
use crate::node::{ColumnsNode, Node, StackNode, TextNode};
use crate::options::{MaxWidth, Options, DEFAULT_COLORS, DEFAULT_COLUMNS, DEFAULT_GAP};
use crate::wrap::{render_lines, wrap_fragments};

/// Error type for layout operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A columns node resolved to zero column slots.
    #[error("columns layout needs at least one column slot")]
    NoColumns,
    /// Fixed column widths and gaps exceed the available width, leaving a
    /// negative share for the auto-sized slots.
    #[error("columns layout overflows the available width: {required} cells reserved, {available} available")]
    ColumnsOverflow {
        /// Cells reserved by fixed widths and gaps.
        required: usize,
        /// Cells the container actually has.
        available: usize,
    },
}

/// Compute the visual matrix for a node under the given call-site options.
///
/// # Errors
///
/// Returns [`LayoutError`] when a columns node is configured with zero slots
/// or with fixed widths and gaps that exceed the available width. Everything
/// else degrades silently: unknown escape codes are ignored, missing
/// template entries auto-size, and surplus children are dropped.
pub fn compute_matrix(node: &Node, options: &Options) -> Result<VisualMatrix, LayoutError> {
    match node {
        Node::Text(text) => Ok(text_matrix(text, options)),
        Node::Columns(columns) => columns_matrix(columns, options),
        Node::Stack(stack) => stack_matrix(stack, options),
    }
}

/// Tokenize, wrap, and render a text leaf.
fn text_matrix(node: &TextNode, options: &Options) -> VisualMatrix {
    let resolved = options.or(&node.defaults);
    let colors = resolved.colors.unwrap_or(DEFAULT_COLORS);
    let max = resolved.width.unwrap_or_default();

    let stripped;
    let fragments = if colors {
        tokenize(&node.value)
    } else {
        stripped = strip_ansi(&node.value);
        vec![Fragment::plain(stripped.as_ref())]
    };

    render_lines(&wrap_fragments(fragments, max))
}

/// Lay children out side by side in column slots.
///
/// Children beyond the slot count are dropped; slots beyond the last child
/// render empty. Each slot's line is padded to the slot width (measured on
/// visible characters) and followed by the gap, the last slot included.
fn columns_matrix(node: &ColumnsNode, options: &Options) -> Result<VisualMatrix, LayoutError> {
    let resolved = options.or(&node.defaults);
    let slots = resolved.columns.unwrap_or(DEFAULT_COLUMNS);
    let gap = resolved.gap.unwrap_or(DEFAULT_GAP);
    let max = resolved.width.unwrap_or_default();
    if slots == 0 {
        return Err(LayoutError::NoColumns);
    }

    // Missing template entries auto-size.
    let template = resolved.columns_template.as_deref().unwrap_or(&[]);
    let fixed: Vec<Option<usize>> = (0..slots)
        .map(|slot| template.get(slot).and_then(|spec| spec.width))
        .collect();

    let auto_slots = fixed.iter().filter(|width| width.is_none()).count();
    let auto_width = if auto_slots == 0 {
        MaxWidth::Unbounded
    } else {
        match max {
            MaxWidth::Unbounded => MaxWidth::Unbounded,
            MaxWidth::Cells(total) => {
                let reserved: usize =
                    fixed.iter().flatten().sum::<usize>() + gap * slots;
                if reserved > total {
                    return Err(LayoutError::ColumnsOverflow {
                        required: reserved,
                        available: total,
                    });
                }
                MaxWidth::Cells((total - reserved) / auto_slots)
            }
        }
    };
    let slot_width = |slot: usize| fixed[slot].map_or(auto_width, MaxWidth::Cells);

    #[cfg(feature = "tracing")]
    tracing::trace!(slots, gap, ?auto_width, "columns layout resolved");

    // Children inherit the call-site options with the slot width swapped in;
    // this node's own defaults do not leak downward.
    let mut child_matrices = Vec::with_capacity(slots.min(node.children.len()));
    for (slot, child) in node.children.iter().enumerate().take(slots) {
        let mut child_options = options.clone();
        child_options.width = Some(slot_width(slot));
        child_matrices.push(compute_matrix(child, &child_options)?);
    }

    let height = child_matrices
        .iter()
        .map(VisualMatrix::height)
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for slot in 0..slots {
            let cell = child_matrices
                .get(slot)
                .and_then(|matrix| matrix.lines().get(row))
                .map_or("", String::as_str);
            line.push_str(cell);
            if let MaxWidth::Cells(pad_to) = slot_width(slot) {
                let visible = visible_width(cell);
                if visible < pad_to {
                    line.extend(std::iter::repeat(' ').take(pad_to - visible));
                }
            }
            line.extend(std::iter::repeat(' ').take(gap));
        }
        lines.push(line);
    }

    // A columns node reports its container width, not the content width.
    let width = match max {
        MaxWidth::Cells(total) => total,
        MaxWidth::Unbounded => lines.iter().map(|line| visible_width(line)).max().unwrap_or(0),
    };
    Ok(VisualMatrix::from_lines(width, lines))
}

/// Concatenate children vertically.
///
/// Children receive the inherited options untouched; stacking redistributes
/// no width.
fn stack_matrix(node: &StackNode, options: &Options) -> Result<VisualMatrix, LayoutError> {
    let mut width = 0;
    let mut lines = Vec::new();
    for child in &node.children {
        let matrix = compute_matrix(child, options)?;
        width = width.max(matrix.width());
        lines.extend(matrix.into_lines());
    }
    Ok(VisualMatrix::from_lines(width, lines))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::options::ColumnSpec;
    use crate::style::{styled, Style};

    fn text(value: &str) -> Node {
        Node::from(value)
    }

    #[test]
    fn text_leaf_measures_content() {
        let matrix = compute_matrix(&text("hello"), &Options::new()).unwrap();
        assert_eq!(matrix.width(), 5);
        assert_eq!(matrix.height(), 1);
        assert_eq!(matrix.join(), "hello");
    }

    #[test]
    fn styled_text_width_ignores_escapes() {
        let value = format!("{}\nA/{}", styled([Style::Red, Style::Bold], "hello"), styled([Style::Red, Style::Bold], "T"));
        let matrix = compute_matrix(&text(&value), &Options::new()).unwrap();
        assert_eq!(matrix.width(), 5);
        assert_eq!(matrix.height(), 2);
    }

    #[test]
    fn colors_disabled_strips_before_layout() {
        let value = format!("{} mundo", styled([Style::Red], "hola"));
        let node = Node::Text(TextNode::new(value).colors(false));
        let matrix = compute_matrix(&node, &Options::new()).unwrap();
        assert_eq!(matrix.join(), "hola mundo");
    }

    #[test]
    fn empty_text_is_a_single_empty_line() {
        let matrix = compute_matrix(&text(""), &Options::new()).unwrap();
        assert_eq!(matrix.height(), 1);
        assert_eq!(matrix.width(), 0);
        assert_eq!(matrix.join(), "");
    }

    #[test]
    fn stack_concatenates_and_measures_max_width() {
        let stack: Node = StackNode::new().child("text 1").child("text two").into();
        let matrix = compute_matrix(&stack, &Options::new()).unwrap();
        assert_eq!(matrix.height(), 2);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.join(), "text 1\ntext two");
    }

    #[test]
    fn columns_divide_width_evenly() {
        let cols: Node = ColumnsNode::new()
            .columns(3)
            .children(["aa", "bb", "cc"])
            .into();
        let matrix = compute_matrix(&cols, &Options::new().width(30)).unwrap();
        // (30 - 3*2) / 3 = 8 per slot, each slot padded then gapped.
        assert_eq!(matrix.width(), 30);
        assert_eq!(matrix.height(), 1);
        assert_eq!(
            matrix.join(),
            "aa        bb        cc        "
        );
    }

    #[test]
    fn columns_template_fixes_slot_widths() {
        let cols: Node = ColumnsNode::new()
            .columns(2)
            .template([ColumnSpec::fixed(4), ColumnSpec::AUTO])
            .children(["ab", "cd"])
            .into();
        let matrix = compute_matrix(&cols, &Options::new().width(12).gap(1)).unwrap();
        // Auto slot gets 12 - 4 - 2*1 = 6 cells.
        assert_eq!(matrix.join(), "ab   cd     ");
        assert_eq!(matrix.width(), 12);
    }

    #[test]
    fn columns_pad_styled_cells_on_visible_width() {
        let cols: Node = ColumnsNode::new()
            .columns(2)
            .children([styled([Style::Red], "hola"), "hola".to_owned()])
            .into();
        let matrix = compute_matrix(&cols, &Options::new().width(20).gap(2)).unwrap();
        // 8 cells per slot; the styled cell must be padded with 4 spaces,
        // not shorted by its escape bytes.
        assert_eq!(
            matrix.join(),
            format!("{}      hola      ", styled([Style::Red], "hola"))
        );
    }

    #[test]
    fn surplus_slots_render_empty_and_surplus_children_drop() {
        let cols: Node = ColumnsNode::new().columns(3).children(["a"]).into();
        let matrix = compute_matrix(&cols, &Options::new().width(15).gap(1)).unwrap();
        // (15 - 3) / 3 = 4 per slot.
        assert_eq!(matrix.join(), "a              ");

        let crowded: Node = ColumnsNode::new().columns(1).children(["a", "b"]).into();
        let matrix = compute_matrix(&crowded, &Options::new().width(5).gap(1)).unwrap();
        assert_eq!(matrix.height(), 1);
        assert_eq!(matrix.join(), "a    ");
    }

    #[test]
    fn columns_with_shorter_children_pad_missing_rows() {
        let cols: Node = ColumnsNode::new()
            .columns(2)
            .children(["one\ntwo", "single"])
            .into();
        let matrix = compute_matrix(&cols, &Options::new().width(16).gap(2)).unwrap();
        // 6 cells per slot.
        assert_eq!(matrix.height(), 2);
        assert_eq!(matrix.lines()[0], "one     single  ");
        assert_eq!(matrix.lines()[1], "two             ");
    }

    #[test]
    fn zero_columns_is_an_error() {
        let cols: Node = ColumnsNode::new().columns(0).into();
        assert_eq!(
            compute_matrix(&cols, &Options::new()),
            Err(LayoutError::NoColumns)
        );
    }

    #[test]
    fn overflowing_fixed_widths_are_an_error() {
        let cols: Node = ColumnsNode::new()
            .columns(2)
            .template([ColumnSpec::fixed(30), ColumnSpec::AUTO])
            .children(["a", "b"])
            .into();
        assert_eq!(
            compute_matrix(&cols, &Options::new().width(20)),
            Err(LayoutError::ColumnsOverflow {
                required: 34,
                available: 20,
            })
        );
    }

    #[test]
    fn unbounded_columns_do_not_pad() {
        let cols: Node = ColumnsNode::new().columns(2).children(["aa", "b"]).into();
        let matrix = compute_matrix(&cols, &Options::new().gap(1)).unwrap();
        assert_eq!(matrix.join(), "aa b ");
        // No container width to report; falls back to measured content.
        assert_eq!(matrix.width(), 5);
    }

    #[test]
    fn rendering_is_pure() {
        let cols: Node = ColumnsNode::new()
            .columns(2)
            .children(["left", "right"])
            .into();
        let options = Options::new().width(20);
        let first = compute_matrix(&cols, &options).unwrap();
        let second = compute_matrix(&cols, &options).unwrap();
        assert_eq!(first, second);
    }
}
