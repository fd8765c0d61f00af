//! The line wrapper: re-flowing style-tagged fragments into width-bounded
//! lines.
//!
//! Wrapping is character-exact (each line is filled to the column limit with
//! no word-boundary search) and style-safe: a fragment split at a line
//! boundary keeps its full style set on both halves, so every output line
//! re-escapes independently.
//!
//! The wrapper runs two passes. The first explodes embedded `\n` characters
//! into explicit newline markers. The second consumes a work queue of
//! fragments; a fragment that would overflow the current line is split, the
//! head emitted, and the tail pushed back onto the front of the queue to be
//! handled as if it were the next input fragment.

use crate::ansi::Fragment;
use crate::matrix::VisualMatrix;
use crate::options::MaxWidth;
use std::collections::VecDeque;

/// A line of wrapped output, still in fragment form.
pub type FragmentLine<'a> = Vec<Fragment<'a>>;

/// The newline marker text produced by the first pass.
const NEWLINE: &str = "\n";

/// Explode fragments containing `\n` into text chunks and newline markers.
///
/// Chunks inherit the fragment's styles; markers carry none. Empty chunks
/// are kept (they render to nothing) so the marker count is exact.
fn split_newlines<'a>(fragments: Vec<Fragment<'a>>) -> VecDeque<Fragment<'a>> {
    let mut queue = VecDeque::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.text.contains('\n') {
            queue.push_back(fragment);
            continue;
        }
        let styles = fragment.styles;
        let mut chunks = match fragment.text {
            std::borrow::Cow::Borrowed(text) => text
                .split('\n')
                .map(|chunk| Fragment::new(chunk, styles.clone()))
                .collect::<Vec<_>>(),
            std::borrow::Cow::Owned(text) => text
                .split('\n')
                .map(|chunk| Fragment::new(chunk.to_owned(), styles.clone()))
                .collect::<Vec<_>>(),
        };
        let last = chunks.pop();
        for chunk in chunks {
            queue.push_back(chunk);
            queue.push_back(Fragment::plain(NEWLINE));
        }
        if let Some(last) = last {
            queue.push_back(last);
        }
    }
    queue
}

/// Re-flow fragments into lines no wider than `max` visible characters.
///
/// Embedded newlines force line breaks in addition to the width limit. The
/// final line is always flushed, so the result holds at least one line,
/// possibly empty. A zero-cell width degenerates to one character per line
/// rather than looping.
#[must_use]
pub fn wrap_fragments(fragments: Vec<Fragment<'_>>, max: MaxWidth) -> Vec<FragmentLine<'_>> {
    let mut queue = split_newlines(fragments);
    let mut lines = Vec::new();
    let mut line: FragmentLine<'_> = Vec::new();
    let mut used = 0usize;

    while let Some(fragment) = queue.pop_front() {
        if fragment.text == NEWLINE {
            lines.push(std::mem::take(&mut line));
            used = 0;
            continue;
        }

        let len = fragment.char_count();
        let limit = match max.cells() {
            Some(limit) => limit,
            None => {
                line.push(fragment);
                continue;
            }
        };

        if used + len <= limit {
            line.push(fragment);
            used += len;
            continue;
        }

        let remaining = limit - used;
        if remaining == 0 {
            if line.is_empty() {
                // Zero-width line: a single character still has to go
                // somewhere, and taking it guarantees progress.
                let (head, tail) = fragment.split_at_chars(1);
                lines.push(vec![head]);
                if !tail.text.is_empty() {
                    queue.push_front(tail);
                }
            } else {
                lines.push(std::mem::take(&mut line));
                used = 0;
                queue.push_front(fragment);
            }
            continue;
        }

        let (head, tail) = fragment.split_at_chars(remaining);
        line.push(head);
        lines.push(std::mem::take(&mut line));
        used = 0;
        queue.push_front(tail);
    }

    lines.push(line);
    lines
}

/// Render wrapped fragment lines into a [`VisualMatrix`].
///
/// Each line's fragments are re-escaped and concatenated; the matrix width
/// is the widest visible line.
#[must_use]
pub fn render_lines(lines: &[FragmentLine<'_>]) -> VisualMatrix {
    let mut width = 0;
    let mut rendered = Vec::with_capacity(lines.len());
    for line in lines {
        let mut text = String::new();
        let mut visible = 0;
        for fragment in line {
            visible += fragment.char_count();
            fragment.write_styled(&mut text);
        }
        width = width.max(visible);
        rendered.push(text);
    }
    VisualMatrix::from_lines(width, rendered)
}
