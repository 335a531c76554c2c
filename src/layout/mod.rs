//! Layout engine for the checklist icon
//!
//! This module turns a canvas size into positioned glyphs: a rounded-square
//! background plus a column of checkbox/text-line pairs, all scaled from the
//! size by fixed ratios.

pub mod config;
pub mod engine;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use types::*;
