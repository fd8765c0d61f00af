//! Property-based tests for tokenization, wrapping, and rendering.
//!
//! Randomized inputs exercise the invariants the engine promises: visible
//! text is never altered, wrap limits hold, styled round-trips are
//! byte-exact, and rendering is pure.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use weft::ansi::{strip_ansi, tokenize, visible_width};
use weft::options::{MaxWidth, Options};
use weft::style::{styled, Style};
use weft::wrap::{render_lines, wrap_fragments};
use weft::{compute_matrix, render_with, Node, TextNode};

/// Printable ASCII without escapes.
fn plain_text() -> impl Strategy<Value = String> {
    "[ -~]{0,80}"
}

/// Printable ASCII plus embedded newlines.
fn plain_text_with_newlines() -> impl Strategy<Value = String> {
    "[ -~\n]{0,80}"
}

/// A pool of styles to draw styled chunks from.
fn any_style() -> impl Strategy<Value = Style> {
    prop_oneof![
        Just(Style::Bold),
        Just(Style::Dim),
        Just(Style::Italic),
        Just(Style::Underline),
        Just(Style::Red),
        Just(Style::Blue),
        Just(Style::Green),
        Just(Style::BgYellow),
        Just(Style::BgBlue),
    ]
}

/// A styled document: chunks of text each wrapped in zero or more styles.
fn styled_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::collection::vec(any_style(), 0..3), "[ -~]{1,20}"),
        0..6,
    )
    .prop_map(|chunks| {
        chunks
            .into_iter()
            .map(|(styles, text)| styled(dedup(styles), text))
            .collect()
    })
}

/// Duplicate styles in one chunk would open twice but close once; real
/// emitters never do that, so the generator drops duplicates.
fn dedup(styles: Vec<Style>) -> Vec<Style> {
    let mut seen = Vec::new();
    for style in styles {
        if !seen.contains(&style) {
            seen.push(style);
        }
    }
    seen
}

proptest! {
    /// Plain text under no width constraint renders unchanged.
    #[test]
    fn plain_text_passes_through(input in plain_text_with_newlines()) {
        let node: Node = TextNode::new(input.clone()).into();
        let output = render_with(&node, Options::new().width(MaxWidth::Unbounded)).unwrap();
        prop_assert_eq!(output, input);
    }

    /// No wrapped line exceeds the configured width.
    #[test]
    fn wrapping_respects_the_width_limit(
        input in styled_document(),
        width in 1usize..50,
    ) {
        let node: Node = TextNode::new(input).into();
        let matrix = compute_matrix(&node, &Options::new().width(width)).unwrap();
        for line in matrix.lines() {
            prop_assert!(visible_width(line) <= width);
        }
    }

    /// Stripping styles before layout gives the same visible text as
    /// stripping after: styles never change visible characters.
    #[test]
    fn styles_never_change_visible_text(input in styled_document()) {
        let stripped_first = render_with(
            &TextNode::new(input.clone()).into(),
            Options::new().width(MaxWidth::Unbounded).colors(false),
        )
        .unwrap();
        let stripped_after = strip_ansi(
            &render_with(
                &TextNode::new(input).into(),
                Options::new().width(MaxWidth::Unbounded),
            )
            .unwrap(),
        )
        .into_owned();
        prop_assert_eq!(stripped_first, stripped_after);
    }

    /// Tokenizing and re-rendering without a width constraint is a
    /// byte-for-byte round trip.
    #[test]
    fn unbounded_round_trip_is_exact(input in styled_document()) {
        let matrix = render_lines(&wrap_fragments(tokenize(&input), MaxWidth::Unbounded));
        prop_assert_eq!(matrix.join(), input);
    }

    /// Wrapping moves characters across lines but never adds, drops, or
    /// reorders them.
    #[test]
    fn wrapping_preserves_text_content(
        input in styled_document(),
        width in 1usize..40,
    ) {
        let node: Node = TextNode::new(input.clone()).into();
        let matrix = compute_matrix(&node, &Options::new().width(width)).unwrap();
        let rejoined: String = matrix
            .lines()
            .iter()
            .map(|line| strip_ansi(line).into_owned())
            .collect();
        prop_assert_eq!(rejoined, strip_ansi(&input).into_owned());
    }

    /// Rendering is pure: the same tree and options give the same output.
    #[test]
    fn rendering_is_idempotent(input in styled_document(), width in 1usize..40) {
        let node: Node = TextNode::new(input).into();
        let options = Options::new().width(width);
        let first = compute_matrix(&node, &options).unwrap();
        let second = compute_matrix(&node, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Splitting a styled run at a wrap boundary keeps the style on both
    /// sides of the split.
    #[test]
    fn split_runs_keep_their_styles(width in 1usize..10) {
        let input = styled([Style::Red], "amet, consectetur");
        let lines = wrap_fragments(tokenize(&input), MaxWidth::Cells(width));
        for line in &lines {
            for fragment in line {
                if !fragment.text.is_empty() {
                    prop_assert!(fragment.styles.contains(Style::Red));
                }
            }
        }
    }

    /// Wrapping always terminates and yields at least one line, even at
    /// width zero.
    #[test]
    fn degenerate_widths_terminate(input in plain_text(), width in 0usize..3) {
        let lines = wrap_fragments(tokenize(&input), MaxWidth::Cells(width));
        prop_assert!(!lines.is_empty());
    }
}
