//! Fill colors for the icon
//!
//! The icon uses exactly two colors: an accent for the background square and
//! a contrasting color shared by every foreground glyph.

/// iOS system blue
pub const ACCENT: &str = "#007AFF";

/// Foreground glyph fill
pub const FOREGROUND: &str = "white";

/// The pair of fills applied when rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Background fill
    pub accent: String,
    /// Fill shared by all checklist glyphs
    pub foreground: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: ACCENT.to_string(),
            foreground: FOREGROUND.to_string(),
        }
    }
}
