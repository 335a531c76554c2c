//! Icon layout computation

use log::debug;

use super::config::LayoutConfig;
use super::types::{BoundingBox, ChecklistItem, Glyph, IconLayout, LayoutMetrics};

impl LayoutMetrics {
    /// Scale every configured ratio by `size`
    pub fn from_size(size: f64, config: &LayoutConfig) -> Self {
        Self {
            margin: size * config.margin_ratio,
            checkbox_size: size * config.checkbox_ratio,
            line_height: size * config.line_height_ratio,
            item_spacing: size * config.item_spacing_ratio,
            corner_radius: size * config.corner_radius_ratio,
        }
    }
}

/// Compute the icon layout for a square canvas of `size` units
///
/// Items are stacked top to bottom starting at the margin. Each text line is
/// vertically centred on its checkbox and stretches to the right margin.
pub fn compute(size: f64, config: &LayoutConfig) -> IconLayout {
    let metrics = LayoutMetrics::from_size(size, config);
    debug!("layout metrics for size {}: {:?}", size, metrics);

    let background = Glyph::new(BoundingBox::square(size), metrics.corner_radius);

    let items = (0..config.item_count)
        .map(|i| layout_item(i, size, &metrics, config))
        .collect();

    IconLayout {
        size,
        metrics,
        background,
        items,
    }
}

fn layout_item(
    index: usize,
    size: f64,
    metrics: &LayoutMetrics,
    config: &LayoutConfig,
) -> ChecklistItem {
    let m = metrics;
    let y = m.margin + index as f64 * m.item_spacing;

    let checkbox = Glyph::new(
        BoundingBox::new(m.margin, y, m.checkbox_size, m.checkbox_size),
        m.checkbox_size * config.checkbox_corner_ratio,
    );

    let text_x = m.margin + m.checkbox_size + m.margin * config.text_gap_ratio;
    let text_y = y + (m.checkbox_size - m.line_height) * 0.5;
    let text_line = Glyph::new(
        BoundingBox::new(text_x, text_y, size - text_x - m.margin, m.line_height),
        m.line_height * config.line_corner_ratio,
    );

    ChecklistItem {
        checkbox,
        text_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_metrics_at_100() {
        let m = LayoutMetrics::from_size(100.0, &LayoutConfig::default());
        assert_close(m.margin, 15.0);
        assert_close(m.checkbox_size, 6.0);
        assert_close(m.line_height, 3.0);
        assert_close(m.item_spacing, 18.0);
        assert_close(m.corner_radius, 12.5);
    }

    #[test]
    fn test_three_items_by_default() {
        let layout = compute(100.0, &LayoutConfig::default());
        assert_eq!(layout.items.len(), 3);
        assert_eq!(layout.glyphs().count(), 6);
    }

    #[test]
    fn test_checkbox_positions_at_100() {
        let layout = compute(100.0, &LayoutConfig::default());
        let ys = [15.0, 33.0, 51.0];
        for (item, y) in layout.items.iter().zip(ys) {
            let cb = item.checkbox.bounds;
            assert_close(cb.x, 15.0);
            assert_close(cb.y, y);
            assert_close(cb.width, 6.0);
            assert_close(cb.height, 6.0);
            assert_close(item.checkbox.corner_radius, 0.9);
        }
    }

    #[test]
    fn test_text_line_geometry_at_100() {
        let layout = compute(100.0, &LayoutConfig::default());
        let line = layout.items[0].text_line;
        assert_close(line.bounds.x, 28.5);
        assert_close(line.bounds.y, 16.5);
        assert_close(line.bounds.width, 56.5);
        assert_close(line.bounds.height, 3.0);
        assert_close(line.corner_radius, 0.75);
        // right edge sits one margin in from the canvas edge
        assert_close(line.bounds.right(), 85.0);
    }

    #[test]
    fn test_background_covers_canvas() {
        let layout = compute(64.0, &LayoutConfig::default());
        assert_eq!(layout.background.bounds, BoundingBox::square(64.0));
        assert_close(layout.background.corner_radius, 8.0);
    }

    #[test]
    fn test_item_count_is_configurable() {
        let layout = compute(100.0, &LayoutConfig::default().with_item_count(2));
        assert_eq!(layout.items.len(), 2);
    }
}
