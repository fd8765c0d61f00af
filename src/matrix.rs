//! The visual matrix: the rectangular output every layout node produces.

/// A fixed grid of fully-rendered display lines.
///
/// `height` always equals the number of lines, which is enforced by
/// construction: the only way to build a matrix is [`VisualMatrix::from_lines`]
/// (or [`VisualMatrix::empty`]). Lines carry their escape sequences already
/// reinserted, ready to print.
///
/// `width` is whatever the producing node reports. Text and stack nodes
/// report measured content width; a columns node reports its container
/// width, which can exceed the widest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualMatrix {
    width: usize,
    lines: Vec<String>,
}

impl VisualMatrix {
    /// A zero-by-zero matrix.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            width: 0,
            lines: Vec::new(),
        }
    }

    /// Build a matrix from rendered lines and a reported width.
    #[must_use]
    pub fn from_lines(width: usize, lines: Vec<String>) -> Self {
        Self { width, lines }
    }

    /// Reported width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The rendered display lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the matrix, yielding its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Join the lines with newlines into a printable string.
    #[must_use]
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for VisualMatrix {
    fn default() -> Self {
        Self::empty()
    }
}
