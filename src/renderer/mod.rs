//! SVG renderer for generating output from icon layouts
//!
//! This module takes an IconLayout and produces the SVG markup written to
//! each icon file.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
