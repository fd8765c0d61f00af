//! Escape tokenization: styled strings in, style-tagged fragments out.
//!
//! The tokenizer understands exactly one escape grammar, `ESC '[' <digits>
//! 'm'`. Anything else (a bare `ESC`, a sequence without digits, a sequence
//! that never reaches `m`) is literal text and passes through untouched.
//! Recognized sequences are consumed and folded into the active-style set;
//! codes the registry does not know are consumed and ignored.
//!
//! # Example
//!
//! ```
//! use weft::ansi::tokenize;
//! use weft::style::Style;
//!
//! let fragments = tokenize("\u{1b}[31mhola\u{1b}[39m mundo");
//! assert_eq!(fragments.len(), 2);
//! assert_eq!(fragments[0].text, "hola");
//! assert!(fragments[0].styles.contains(Style::Red));
//! assert!(fragments[1].styles.is_empty());
//! ```

use crate::style::{Style, StyleSet};
use std::borrow::Cow;

/// A run of plain text tagged with the styles active over it.
///
/// The text is `Cow<'a, str>` so tokenization can borrow straight from the
/// input; fragments only become owned when a wrap boundary forces a split of
/// owned text. The `styles` set holds exactly the styles open at the start of
/// the run, in activation order, and splitting a fragment keeps the set
/// unchanged on both halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The visible text of this run. Contains no escape sequences.
    pub text: Cow<'a, str>,
    /// Styles open at the start of the run, in activation order.
    pub styles: StyleSet,
}

impl<'a> Fragment<'a> {
    /// Create a fragment with the given styles.
    pub fn new(text: impl Into<Cow<'a, str>>, styles: StyleSet) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }

    /// Create an unstyled fragment.
    pub fn plain(text: impl Into<Cow<'a, str>>) -> Self {
        Self::new(text, StyleSet::new())
    }

    /// Visible length of the fragment, in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Split the fragment after `n` characters.
    ///
    /// Both halves keep the full style set. `n` past the end puts everything
    /// in the head.
    #[must_use]
    pub fn split_at_chars(self, n: usize) -> (Fragment<'a>, Fragment<'a>) {
        let at = self
            .text
            .char_indices()
            .nth(n)
            .map_or(self.text.len(), |(i, _)| i);
        match self.text {
            Cow::Borrowed(text) => (
                Fragment::new(&text[..at], self.styles.clone()),
                Fragment::new(&text[at..], self.styles),
            ),
            Cow::Owned(mut text) => {
                let tail = text.split_off(at);
                (
                    Fragment::new(text, self.styles.clone()),
                    Fragment::new(tail, self.styles),
                )
            }
        }
    }

    /// Re-escape the fragment into `out`: open sequences in activation
    /// order, the text, close sequences in reverse. Empty fragments emit
    /// nothing at all.
    pub fn write_styled(&self, out: &mut String) {
        if self.text.is_empty() {
            return;
        }
        for style in self.styles.iter() {
            out.push_str(&style.open_sequence());
        }
        out.push_str(&self.text);
        for style in self.styles.iter().rev() {
            out.push_str(&style.close_sequence());
        }
    }

    /// Detach the fragment from the source string.
    #[must_use]
    pub fn into_owned(self) -> Fragment<'static> {
        Fragment {
            text: Cow::Owned(self.text.into_owned()),
            styles: self.styles,
        }
    }
}

/// A recognized SGR sequence: its numeric code and the byte offset just past
/// the closing `m`.
fn parse_sgr(bytes: &[u8], start: usize) -> Option<(u16, usize)> {
    if bytes.get(start) != Some(&0x1b) || bytes.get(start + 1) != Some(&b'[') {
        return None;
    }
    let mut code: u16 = 0;
    let mut i = start + 2;
    let mut digits = 0;
    while let Some(&b) = bytes.get(i) {
        if b.is_ascii_digit() {
            code = code
                .saturating_mul(10)
                .saturating_add(u16::from(b - b'0'));
            digits += 1;
            i += 1;
        } else if b == b'm' && digits > 0 {
            return Some((code, i + 1));
        } else {
            return None;
        }
    }
    None
}

/// Split an escape-annotated string into style-tagged fragments.
///
/// The concatenated fragment text equals the input with every recognized
/// escape sequence removed. Text between sequences is tagged with the styles
/// open at that point; runs of zero length are dropped. Opening an already
/// open style and closing one that is not open are no-ops, so the active set
/// strictly follows code order in the input.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Fragment<'_>> {
    let bytes = input.as_bytes();
    let mut fragments = Vec::new();
    let mut active = StyleSet::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == 0x1b {
            if let Some((code, end)) = parse_sgr(bytes, i) {
                if i > run_start {
                    fragments.push(Fragment::new(&input[run_start..i], active.clone()));
                }
                if let Some(style) = Style::from_open_code(code) {
                    active.insert(style);
                } else {
                    for &style in Style::closed_by(code) {
                        active.remove(style);
                    }
                }
                i = end;
                run_start = i;
                continue;
            }
        }
        i += 1;
    }

    if run_start < input.len() {
        fragments.push(Fragment::new(&input[run_start..], active));
    }
    fragments
}

/// Remove every recognized escape sequence from a string.
///
/// Borrows the input when it contains none. Sequences that do not match the
/// `ESC '[' <digits> 'm'` grammar are kept as literal text.
#[must_use]
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut out: Option<String> = None;
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == 0x1b {
            if let Some((_, end)) = parse_sgr(bytes, i) {
                let out = out.get_or_insert_with(|| String::with_capacity(input.len()));
                out.push_str(&input[run_start..i]);
                i = end;
                run_start = i;
                continue;
            }
        }
        i += 1;
    }

    match out {
        Some(mut out) => {
            out.push_str(&input[run_start..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(input),
    }
}

/// Visible length of an escape-annotated string, in characters.
#[must_use]
pub fn visible_width(input: &str) -> usize {
    strip_ansi(input).chars().count()
}
