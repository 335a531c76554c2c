//! Checklist Icons - SVG app icons for a to-do list
//!
//! This library lays out a checklist pictogram (three checkbox and text-line
//! pairs on a rounded blue square) at any size and renders it as SVG. The
//! [`generator`] module writes the fixed set of app icon sizes to disk.
//!
//! # Example
//!
//! ```rust
//! use checklist_icons::render_icon;
//!
//! let svg = render_icon(180.0);
//! assert!(svg.contains(r#"viewBox="0 0 180 180""#));
//! ```

pub mod error;
pub mod generator;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod settings;

pub use error::GenerateError;
pub use generator::{artifact_name, GenerationReport, Generator, REFERENCE_SIZES};
pub use layout::{IconLayout, LayoutConfig, LayoutMetrics};
pub use palette::Palette;
pub use renderer::{render_svg, SvgConfig};
pub use settings::{FailurePolicy, GeneratorSettings, SettingsError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconConfig {
    /// Layout proportions
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Fill colors
    pub palette: Palette,
}

impl IconConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render the checklist icon at `size` with default configuration
///
/// The output depends on `size` alone: the same size always yields the same
/// bytes. Sizes of zero or below are not checked and give meaningless
/// geometry.
pub fn render_icon(size: f64) -> String {
    render_icon_with_config(size, &IconConfig::default())
}

/// Render the checklist icon at `size` with custom configuration
///
/// # Example
///
/// ```rust
/// use checklist_icons::{render_icon_with_config, IconConfig, SvgConfig};
///
/// let config = IconConfig::new().with_svg(SvgConfig::new().with_comments(false));
/// let svg = render_icon_with_config(60.0, &config);
/// assert!(!svg.contains("<!--"));
/// ```
pub fn render_icon_with_config(size: f64, config: &IconConfig) -> String {
    let layout = layout::compute(size, &config.layout);
    render_svg(&layout, &config.svg, &config.palette)
}
