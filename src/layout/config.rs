//! Configuration for the layout engine

/// Proportions used to derive icon geometry from the canvas size
///
/// Every ratio is relative to the canvas size unless noted otherwise. The
/// defaults are the published icon proportions and must not drift: changing
/// them changes every generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Inset from the canvas edges to the first glyph
    pub margin_ratio: f64,

    /// Side length of each checkbox
    pub checkbox_ratio: f64,

    /// Height of each text line
    pub line_height_ratio: f64,

    /// Vertical distance between the tops of consecutive items
    pub item_spacing_ratio: f64,

    /// Corner radius of the background
    pub corner_radius_ratio: f64,

    /// Checkbox corner radius, relative to the checkbox size
    pub checkbox_corner_ratio: f64,

    /// Text-line corner radius, relative to the line height
    pub line_corner_ratio: f64,

    /// Gap between checkbox and text line, relative to the margin
    pub text_gap_ratio: f64,

    /// Number of checklist items
    pub item_count: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_ratio: 0.15,
            checkbox_ratio: 0.06,
            line_height_ratio: 0.03,
            item_spacing_ratio: 0.18,
            corner_radius_ratio: 0.125,
            checkbox_corner_ratio: 0.15,
            line_corner_ratio: 0.25,
            text_gap_ratio: 0.5,
            item_count: 3,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the margin ratio
    pub fn with_margin_ratio(mut self, ratio: f64) -> Self {
        self.margin_ratio = ratio;
        self
    }

    /// Set the checkbox size ratio
    pub fn with_checkbox_ratio(mut self, ratio: f64) -> Self {
        self.checkbox_ratio = ratio;
        self
    }

    /// Set the text line height ratio
    pub fn with_line_height_ratio(mut self, ratio: f64) -> Self {
        self.line_height_ratio = ratio;
        self
    }

    /// Set the item spacing ratio
    pub fn with_item_spacing_ratio(mut self, ratio: f64) -> Self {
        self.item_spacing_ratio = ratio;
        self
    }

    /// Set the background corner radius ratio
    pub fn with_corner_radius_ratio(mut self, ratio: f64) -> Self {
        self.corner_radius_ratio = ratio;
        self
    }

    /// Set the number of checklist items
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.margin_ratio, 0.15);
        assert_eq!(config.checkbox_ratio, 0.06);
        assert_eq!(config.line_height_ratio, 0.03);
        assert_eq!(config.item_spacing_ratio, 0.18);
        assert_eq!(config.corner_radius_ratio, 0.125);
        assert_eq!(config.item_count, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_margin_ratio(0.1)
            .with_checkbox_ratio(0.08)
            .with_line_height_ratio(0.04)
            .with_item_spacing_ratio(0.2)
            .with_corner_radius_ratio(0.2)
            .with_item_count(4);

        assert_eq!(config.margin_ratio, 0.1);
        assert_eq!(config.checkbox_ratio, 0.08);
        assert_eq!(config.line_height_ratio, 0.04);
        assert_eq!(config.item_spacing_ratio, 0.2);
        assert_eq!(config.corner_radius_ratio, 0.2);
        assert_eq!(config.item_count, 4);
    }
}
