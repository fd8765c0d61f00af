//! Layout options and their resolution rules.
//!
//! [`Options`] is a partial-options value: every field is optional, and a
//! node resolves each field fresh on every render by layering call-site
//! options over its own stored defaults, then falling back to the hard-coded
//! defaults ([`DEFAULT_COLORS`], unbounded width, [`DEFAULT_COLUMNS`],
//! [`DEFAULT_GAP`]). Nothing is mutated in place; resolution always produces
//! a new value.

/// Fallback for the `colors` option.
pub const DEFAULT_COLORS: bool = true;
/// Fallback for the `columns` option.
pub const DEFAULT_COLUMNS: usize = 1;
/// Fallback for the `gap` option.
pub const DEFAULT_GAP: usize = 2;

/// A maximum line width: a cell count, or no limit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxWidth {
    /// No width constraint; lines never wrap.
    #[default]
    Unbounded,
    /// At most this many characters per line.
    Cells(usize),
}

impl MaxWidth {
    /// The cell count, or `None` when unbounded.
    #[must_use]
    pub const fn cells(self) -> Option<usize> {
        match self {
            MaxWidth::Unbounded => None,
            MaxWidth::Cells(n) => Some(n),
        }
    }
}

impl From<usize> for MaxWidth {
    fn from(cells: usize) -> Self {
        MaxWidth::Cells(cells)
    }
}

/// One slot of a columns template.
///
/// A spec either fixes the slot's width or leaves it auto-sized, in which
/// case the slot gets an even share of the width left over after fixed slots
/// and gaps are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSpec {
    /// Explicit width in cells, or `None` for auto.
    pub width: Option<usize>,
}

impl ColumnSpec {
    /// An auto-sized slot.
    pub const AUTO: Self = Self { width: None };

    /// A fixed-width slot.
    #[must_use]
    pub const fn fixed(width: usize) -> Self {
        Self {
            width: Some(width),
        }
    }
}

/// Partial layout options.
///
/// Unset fields defer to the node's stored defaults, and past those to the
/// hard-coded fallbacks.
///
/// # Example
///
/// ```
/// use weft::options::{MaxWidth, Options};
///
/// let opts = Options::new().width(25).columns(3).gap(1);
/// assert_eq!(opts.width, Some(MaxWidth::Cells(25)));
/// assert_eq!(opts.colors, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Whether escape sequences are honored (`false` strips them up front).
    pub colors: Option<bool>,
    /// Maximum layout width.
    pub width: Option<MaxWidth>,
    /// Number of column slots for a columns node.
    pub columns: Option<usize>,
    /// Per-slot width template for a columns node.
    pub columns_template: Option<Vec<ColumnSpec>>,
    /// Spacing appended after each column slot.
    pub gap: Option<usize>,
}

impl Options {
    /// Create empty options; every field defers to defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `colors` option.
    #[must_use]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Set the maximum width. Accepts a cell count or a [`MaxWidth`].
    #[must_use]
    pub fn width(mut self, width: impl Into<MaxWidth>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the number of column slots.
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the columns template.
    #[must_use]
    pub fn columns_template(mut self, template: impl Into<Vec<ColumnSpec>>) -> Self {
        self.columns_template = Some(template.into());
        self
    }

    /// Set the gap between columns.
    #[must_use]
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Layer these options over a fallback set, field-wise.
    ///
    /// Fields set here win; unset fields take the fallback's value. Neither
    /// input is modified.
    #[must_use]
    pub fn or(&self, fallback: &Options) -> Options {
        Options {
            colors: self.colors.or(fallback.colors),
            width: self.width.or(fallback.width),
            columns: self.columns.or(fallback.columns),
            columns_template: self
                .columns_template
                .clone()
                .or_else(|| fallback.columns_template.clone()),
            gap: self.gap.or(fallback.gap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_prefers_call_site() {
        let call_site = Options::new().width(25);
        let defaults = Options::new().width(80).gap(1);
        let resolved = call_site.or(&defaults);
        assert_eq!(resolved.width, Some(MaxWidth::Cells(25)));
        assert_eq!(resolved.gap, Some(1));
        assert_eq!(resolved.columns, None);
    }

    #[test]
    fn max_width_conversions() {
        assert_eq!(MaxWidth::from(10).cells(), Some(10));
        assert_eq!(MaxWidth::Unbounded.cells(), None);
    }
}
