//! The style registry: named SGR styles and their escape codes.
//!
//! Every style the engine understands is a [`Style`] variant carrying a pair
//! of numeric SGR codes: one that opens the style and one that closes it.
//! The mapping is bidirectional: the tokenizer looks codes up to maintain its
//! active-style set, and the renderer turns style sets back into escape
//! sequences.
//!
//! Close codes are shared. Code `39` (default foreground) closes every
//! foreground color, `49` closes every background color, and `22` closes both
//! `Bold` and `Dim`. [`Style::closed_by`] returns the whole family for such
//! codes.
//!
//! # Example
//!
//! ```
//! use weft::style::{styled, Style};
//!
//! let s = styled([Style::Bold, Style::Blue], "dolor");
//! assert_eq!(s, "\u{1b}[1m\u{1b}[34mdolor\u{1b}[39m\u{1b}[22m");
//! ```

use smallvec::SmallVec;

/// A named terminal style with a dedicated SGR open code.
///
/// The set of names mirrors the classic `util.inspect`-style color table:
/// text modifiers, the sixteen foreground colors, and the sixteen background
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Bold text (`1`, closed by `22`).
    Bold,
    /// Dim/faint text (`2`, closed by `22`).
    Dim,
    /// Italic text (`3`, closed by `23`).
    Italic,
    /// Underlined text (`4`, closed by `24`).
    Underline,
    /// Blinking text (`5`, closed by `25`).
    Blink,
    /// Inverse foreground/background (`7`, closed by `27`).
    Inverse,
    /// Hidden/concealed text (`8`, closed by `28`).
    Hidden,
    /// Strikethrough text (`9`, closed by `29`).
    Strikethrough,

    /// Black foreground (`30`).
    Black,
    /// Red foreground (`31`).
    Red,
    /// Green foreground (`32`).
    Green,
    /// Yellow foreground (`33`).
    Yellow,
    /// Blue foreground (`34`).
    Blue,
    /// Magenta foreground (`35`).
    Magenta,
    /// Cyan foreground (`36`).
    Cyan,
    /// White foreground (`37`).
    White,
    /// Gray (bright black) foreground (`90`).
    Gray,
    /// Bright red foreground (`91`).
    BrightRed,
    /// Bright green foreground (`92`).
    BrightGreen,
    /// Bright yellow foreground (`93`).
    BrightYellow,
    /// Bright blue foreground (`94`).
    BrightBlue,
    /// Bright magenta foreground (`95`).
    BrightMagenta,
    /// Bright cyan foreground (`96`).
    BrightCyan,
    /// Bright white foreground (`97`).
    BrightWhite,

    /// Black background (`40`).
    BgBlack,
    /// Red background (`41`).
    BgRed,
    /// Green background (`42`).
    BgGreen,
    /// Yellow background (`43`).
    BgYellow,
    /// Blue background (`44`).
    BgBlue,
    /// Magenta background (`45`).
    BgMagenta,
    /// Cyan background (`46`).
    BgCyan,
    /// White background (`47`).
    BgWhite,
    /// Gray (bright black) background (`100`).
    BgGray,
    /// Bright red background (`101`).
    BgBrightRed,
    /// Bright green background (`102`).
    BgBrightGreen,
    /// Bright yellow background (`103`).
    BgBrightYellow,
    /// Bright blue background (`104`).
    BgBrightBlue,
    /// Bright magenta background (`105`).
    BgBrightMagenta,
    /// Bright cyan background (`106`).
    BgBrightCyan,
    /// Bright white background (`107`).
    BgBrightWhite,
}

/// All foreground colors, in code order. They share close code `39`.
const FOREGROUND: &[Style] = &[
    Style::Black,
    Style::Red,
    Style::Green,
    Style::Yellow,
    Style::Blue,
    Style::Magenta,
    Style::Cyan,
    Style::White,
    Style::Gray,
    Style::BrightRed,
    Style::BrightGreen,
    Style::BrightYellow,
    Style::BrightBlue,
    Style::BrightMagenta,
    Style::BrightCyan,
    Style::BrightWhite,
];

/// All background colors, in code order. They share close code `49`.
const BACKGROUND: &[Style] = &[
    Style::BgBlack,
    Style::BgRed,
    Style::BgGreen,
    Style::BgYellow,
    Style::BgBlue,
    Style::BgMagenta,
    Style::BgCyan,
    Style::BgWhite,
    Style::BgGray,
    Style::BgBrightRed,
    Style::BgBrightGreen,
    Style::BgBrightYellow,
    Style::BgBrightBlue,
    Style::BgBrightMagenta,
    Style::BgBrightCyan,
    Style::BgBrightWhite,
];

/// Bold and dim share close code `22`.
const BOLD_DIM: &[Style] = &[Style::Bold, Style::Dim];

impl Style {
    /// The SGR code that opens this style.
    #[must_use]
    pub const fn open_code(self) -> u16 {
        match self {
            Style::Bold => 1,
            Style::Dim => 2,
            Style::Italic => 3,
            Style::Underline => 4,
            Style::Blink => 5,
            Style::Inverse => 7,
            Style::Hidden => 8,
            Style::Strikethrough => 9,
            Style::Black => 30,
            Style::Red => 31,
            Style::Green => 32,
            Style::Yellow => 33,
            Style::Blue => 34,
            Style::Magenta => 35,
            Style::Cyan => 36,
            Style::White => 37,
            Style::Gray => 90,
            Style::BrightRed => 91,
            Style::BrightGreen => 92,
            Style::BrightYellow => 93,
            Style::BrightBlue => 94,
            Style::BrightMagenta => 95,
            Style::BrightCyan => 96,
            Style::BrightWhite => 97,
            Style::BgBlack => 40,
            Style::BgRed => 41,
            Style::BgGreen => 42,
            Style::BgYellow => 43,
            Style::BgBlue => 44,
            Style::BgMagenta => 45,
            Style::BgCyan => 46,
            Style::BgWhite => 47,
            Style::BgGray => 100,
            Style::BgBrightRed => 101,
            Style::BgBrightGreen => 102,
            Style::BgBrightYellow => 103,
            Style::BgBrightBlue => 104,
            Style::BgBrightMagenta => 105,
            Style::BgBrightCyan => 106,
            Style::BgBrightWhite => 107,
        }
    }

    /// The SGR code that closes this style.
    ///
    /// Several styles can share a close code; see [`Style::closed_by`].
    #[must_use]
    pub const fn close_code(self) -> u16 {
        match self {
            Style::Bold | Style::Dim => 22,
            Style::Italic => 23,
            Style::Underline => 24,
            Style::Blink => 25,
            Style::Inverse => 27,
            Style::Hidden => 28,
            Style::Strikethrough => 29,
            Style::Black
            | Style::Red
            | Style::Green
            | Style::Yellow
            | Style::Blue
            | Style::Magenta
            | Style::Cyan
            | Style::White
            | Style::Gray
            | Style::BrightRed
            | Style::BrightGreen
            | Style::BrightYellow
            | Style::BrightBlue
            | Style::BrightMagenta
            | Style::BrightCyan
            | Style::BrightWhite => 39,
            Style::BgBlack
            | Style::BgRed
            | Style::BgGreen
            | Style::BgYellow
            | Style::BgBlue
            | Style::BgMagenta
            | Style::BgCyan
            | Style::BgWhite
            | Style::BgGray
            | Style::BgBrightRed
            | Style::BgBrightGreen
            | Style::BgBrightYellow
            | Style::BgBrightBlue
            | Style::BgBrightMagenta
            | Style::BgBrightCyan
            | Style::BgBrightWhite => 49,
        }
    }

    /// Look up the style opened by an SGR code.
    ///
    /// Returns `None` for codes that open nothing (including close codes and
    /// codes the engine does not understand).
    #[must_use]
    pub const fn from_open_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => Style::Bold,
            2 => Style::Dim,
            3 => Style::Italic,
            4 => Style::Underline,
            5 => Style::Blink,
            7 => Style::Inverse,
            8 => Style::Hidden,
            9 => Style::Strikethrough,
            30 => Style::Black,
            31 => Style::Red,
            32 => Style::Green,
            33 => Style::Yellow,
            34 => Style::Blue,
            35 => Style::Magenta,
            36 => Style::Cyan,
            37 => Style::White,
            90 => Style::Gray,
            91 => Style::BrightRed,
            92 => Style::BrightGreen,
            93 => Style::BrightYellow,
            94 => Style::BrightBlue,
            95 => Style::BrightMagenta,
            96 => Style::BrightCyan,
            97 => Style::BrightWhite,
            40 => Style::BgBlack,
            41 => Style::BgRed,
            42 => Style::BgGreen,
            43 => Style::BgYellow,
            44 => Style::BgBlue,
            45 => Style::BgMagenta,
            46 => Style::BgCyan,
            47 => Style::BgWhite,
            100 => Style::BgGray,
            101 => Style::BgBrightRed,
            102 => Style::BgBrightGreen,
            103 => Style::BgBrightYellow,
            104 => Style::BgBrightBlue,
            105 => Style::BgBrightMagenta,
            106 => Style::BgBrightCyan,
            107 => Style::BgBrightWhite,
            _ => return None,
        })
    }

    /// Every style closed by an SGR code.
    ///
    /// `39` returns all sixteen foreground colors, `49` all sixteen
    /// background colors, and `22` returns both `Bold` and `Dim`. Codes that
    /// close nothing return an empty slice.
    #[must_use]
    pub const fn closed_by(code: u16) -> &'static [Self] {
        match code {
            22 => BOLD_DIM,
            23 => &[Style::Italic],
            24 => &[Style::Underline],
            25 => &[Style::Blink],
            27 => &[Style::Inverse],
            28 => &[Style::Hidden],
            29 => &[Style::Strikethrough],
            39 => FOREGROUND,
            49 => BACKGROUND,
            _ => &[],
        }
    }

    /// The style's registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Blink => "blink",
            Style::Inverse => "inverse",
            Style::Hidden => "hidden",
            Style::Strikethrough => "strikethrough",
            Style::Black => "black",
            Style::Red => "red",
            Style::Green => "green",
            Style::Yellow => "yellow",
            Style::Blue => "blue",
            Style::Magenta => "magenta",
            Style::Cyan => "cyan",
            Style::White => "white",
            Style::Gray => "gray",
            Style::BrightRed => "brightRed",
            Style::BrightGreen => "brightGreen",
            Style::BrightYellow => "brightYellow",
            Style::BrightBlue => "brightBlue",
            Style::BrightMagenta => "brightMagenta",
            Style::BrightCyan => "brightCyan",
            Style::BrightWhite => "brightWhite",
            Style::BgBlack => "bgBlack",
            Style::BgRed => "bgRed",
            Style::BgGreen => "bgGreen",
            Style::BgYellow => "bgYellow",
            Style::BgBlue => "bgBlue",
            Style::BgMagenta => "bgMagenta",
            Style::BgCyan => "bgCyan",
            Style::BgWhite => "bgWhite",
            Style::BgGray => "bgGray",
            Style::BgBrightRed => "bgBrightRed",
            Style::BgBrightGreen => "bgBrightGreen",
            Style::BgBrightYellow => "bgBrightYellow",
            Style::BgBrightBlue => "bgBrightBlue",
            Style::BgBrightMagenta => "bgBrightMagenta",
            Style::BgBrightCyan => "bgBrightCyan",
            Style::BgBrightWhite => "bgBrightWhite",
        }
    }

    /// Look up a style by registry name.
    ///
    /// `"grey"` is accepted as an alias for `"gray"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bold" => Style::Bold,
            "dim" => Style::Dim,
            "italic" => Style::Italic,
            "underline" => Style::Underline,
            "blink" => Style::Blink,
            "inverse" => Style::Inverse,
            "hidden" => Style::Hidden,
            "strikethrough" => Style::Strikethrough,
            "black" => Style::Black,
            "red" => Style::Red,
            "green" => Style::Green,
            "yellow" => Style::Yellow,
            "blue" => Style::Blue,
            "magenta" => Style::Magenta,
            "cyan" => Style::Cyan,
            "white" => Style::White,
            "gray" | "grey" => Style::Gray,
            "brightRed" => Style::BrightRed,
            "brightGreen" => Style::BrightGreen,
            "brightYellow" => Style::BrightYellow,
            "brightBlue" => Style::BrightBlue,
            "brightMagenta" => Style::BrightMagenta,
            "brightCyan" => Style::BrightCyan,
            "brightWhite" => Style::BrightWhite,
            "bgBlack" => Style::BgBlack,
            "bgRed" => Style::BgRed,
            "bgGreen" => Style::BgGreen,
            "bgYellow" => Style::BgYellow,
            "bgBlue" => Style::BgBlue,
            "bgMagenta" => Style::BgMagenta,
            "bgCyan" => Style::BgCyan,
            "bgWhite" => Style::BgWhite,
            "bgGray" | "bgGrey" => Style::BgGray,
            "bgBrightRed" => Style::BgBrightRed,
            "bgBrightGreen" => Style::BgBrightGreen,
            "bgBrightYellow" => Style::BgBrightYellow,
            "bgBrightBlue" => Style::BgBrightBlue,
            "bgBrightMagenta" => Style::BgBrightMagenta,
            "bgBrightCyan" => Style::BgBrightCyan,
            "bgBrightWhite" => Style::BgBrightWhite,
            _ => return None,
        })
    }

    /// The escape sequence that opens this style.
    #[must_use]
    pub fn open_sequence(self) -> String {
        format!("\u{1b}[{}m", self.open_code())
    }

    /// The escape sequence that closes this style.
    #[must_use]
    pub fn close_sequence(self) -> String {
        format!("\u{1b}[{}m", self.close_code())
    }
}

// === Style set ===

/// An ordered, duplicate-free set of styles.
///
/// Order is activation order: the order styles were inserted in, which is the
/// order their open sequences are re-emitted in. Close sequences unwind in
/// the reverse order. Inserting a present style and removing an absent one
/// are both no-ops.
///
/// Small sets (the common case is one or two styles per run) live inline
/// without a heap allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSet {
    styles: SmallVec<[Style; 4]>,
}

impl StyleSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a style at the end of the activation order.
    ///
    /// No-op if the style is already active.
    pub fn insert(&mut self, style: Style) {
        if !self.styles.contains(&style) {
            self.styles.push(style);
        }
    }

    /// Remove a style. No-op if the style is not active.
    pub fn remove(&mut self, style: Style) {
        self.styles.retain(|s| *s != style);
    }

    /// Whether the style is active.
    #[must_use]
    pub fn contains(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    /// Number of active styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no styles are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate the styles in activation order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Style> + '_ {
        self.styles.iter().copied()
    }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        let mut set = Self::new();
        for style in iter {
            set.insert(style);
        }
        set
    }
}

impl From<&[Style]> for StyleSet {
    fn from(styles: &[Style]) -> Self {
        styles.iter().copied().collect()
    }
}

impl<const N: usize> From<[Style; N]> for StyleSet {
    fn from(styles: [Style; N]) -> Self {
        styles.into_iter().collect()
    }
}

/// Wrap text in the given styles' escape sequences.
///
/// Open sequences are emitted in the given order, close sequences in the
/// reverse order, the way a well-nested emitter writes them.
///
/// # Example
///
/// ```
/// use weft::style::{styled, Style};
///
/// assert_eq!(styled([Style::Red], "hola"), "\u{1b}[31mhola\u{1b}[39m");
/// ```
#[must_use]
pub fn styled<I>(styles: I, text: impl AsRef<str>) -> String
where
    I: IntoIterator<Item = Style>,
{
    let styles: SmallVec<[Style; 4]> = styles.into_iter().collect();
    let mut out = String::new();
    for style in &styles {
        out.push_str(&style.open_sequence());
    }
    out.push_str(text.as_ref());
    for style in styles.iter().rev() {
        out.push_str(&style.close_sequence());
    }
    out
}
