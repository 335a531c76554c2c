//! SVG generation from icon layouts

use crate::layout::{Glyph, IconLayout};
use crate::palette::Palette;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an XML comment, skipped when comments are disabled
    pub fn add_comment(&mut self, text: &str) {
        if !self.config.comments {
            return;
        }
        // "--" is not allowed inside XML comments
        let text = text.replace("--", "- -");
        self.elements
            .push(format!("{}<!-- {} -->", self.indent_str(), text));
    }

    /// Add a rectangle covering the whole canvas
    pub fn add_background(&mut self, background: &Glyph, fill: &str) {
        let b = &background.bounds;
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" rx="{}" fill="{}"/>"#,
            self.indent_str(),
            b.width,
            b.height,
            background.corner_radius,
            escape_xml(fill)
        ));
    }

    /// Add a rounded rectangle that inherits its fill from the enclosing group
    pub fn add_rect(&mut self, glyph: &Glyph) {
        let b = &glyph.bounds;
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
            self.indent_str(),
            b.x,
            b.y,
            b.width,
            b.height,
            glyph.corner_radius
        ));
    }

    /// Start a group element whose fill applies to every child
    pub fn start_group(&mut self, fill: &str) {
        self.elements.push(format!(
            r#"{}<g fill="{}">"#,
            self.indent_str(),
            escape_xml(fill)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string for a square canvas of `size` units
    pub fn build(self, size: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg width="{0}" height="{0}" viewBox="0 0 {0} {0}" xmlns="http://www.w3.org/2000/svg">"#,
            size
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render an icon layout to an SVG string
pub fn render_svg(layout: &IconLayout, config: &SvgConfig, palette: &Palette) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_comment("Background");
    builder.add_background(&layout.background, &palette.accent);

    builder.add_comment("Checklist items");
    builder.start_group(&palette.foreground);
    for (i, item) in layout.items.iter().enumerate() {
        builder.add_comment(&format!("Item {}", i + 1));
        builder.add_rect(&item.checkbox);
        builder.add_rect(&item.text_line);
    }
    builder.end_group();

    builder.build(layout.size)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
