//! Core types for the layout engine

/// A bounding box representing the spatial extent of a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square anchored at the origin
    pub fn square(side: f64) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check whether this box lies entirely inside another
    pub fn is_within(&self, other: &BoundingBox) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}

/// A rounded rectangle primitive placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub bounds: BoundingBox,
    /// Corner radius (SVG `rx`)
    pub corner_radius: f64,
}

impl Glyph {
    pub fn new(bounds: BoundingBox, corner_radius: f64) -> Self {
        Self {
            bounds,
            corner_radius,
        }
    }
}

/// One checklist row: a checkbox followed by a text line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChecklistItem {
    pub checkbox: Glyph,
    pub text_line: Glyph,
}

/// Proportional measurements derived from the canvas size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub margin: f64,
    pub checkbox_size: f64,
    pub line_height: f64,
    pub item_spacing: f64,
    pub corner_radius: f64,
}

/// Result of laying out one icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    /// Canvas width and height
    pub size: f64,
    pub metrics: LayoutMetrics,
    pub background: Glyph,
    pub items: Vec<ChecklistItem>,
}

impl IconLayout {
    /// Canvas extent as a bounding box
    pub fn canvas(&self) -> BoundingBox {
        BoundingBox::square(self.size)
    }

    /// All foreground glyphs in paint order
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.items
            .iter()
            .flat_map(|item| [&item.checkbox, &item.text_line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let bb = BoundingBox::new(10.0, 20.0, 30.0, 5.0);
        assert_eq!(bb.right(), 40.0);
        assert_eq!(bb.bottom(), 25.0);
    }

    #[test]
    fn test_is_within() {
        let canvas = BoundingBox::square(100.0);
        assert!(BoundingBox::new(0.0, 0.0, 100.0, 100.0).is_within(&canvas));
        assert!(BoundingBox::new(15.0, 15.0, 6.0, 6.0).is_within(&canvas));
        assert!(!BoundingBox::new(95.0, 15.0, 6.0, 6.0).is_within(&canvas));
        assert!(!BoundingBox::new(-1.0, 15.0, 6.0, 6.0).is_within(&canvas));
    }
}
