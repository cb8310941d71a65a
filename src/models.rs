//! Geometry and style models for the menu bar.
//!
//! Horizontal geometry is kept in fractional columns so that
//! `bar_width / tab_count` is exact; it is rounded only when drawn.
//! Indicator heights are measured in half-rows (see [`UNITS_PER_ROW`]).

use ratatui::style::Color;

/// Indicator height units per terminal row (drawn with half-block glyphs).
pub const UNITS_PER_ROW: u16 = 2;

/// Default indicator height, in half-rows.
pub const DEFAULT_INDICATOR_HEIGHT: u16 = 2;

/// Default indicator fill color.
pub const DEFAULT_INDICATOR_COLOR: Color = Color::Black;

/// Geometry of the indicator underline, relative to the bar's left edge.
///
/// The indicator is always bottom-aligned to the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorFrame {
    /// Left offset in columns.
    pub left: f32,
    /// Width in columns.
    pub width: f32,
    /// Height in half-rows.
    pub height: u16,
}

impl IndicatorFrame {
    /// Frame covering slot `index` of a grid with columns `tab_width` wide.
    pub fn for_slot(index: usize, tab_width: f32, height: u16) -> Self {
        Self {
            left: tab_width * index as f32,
            width: tab_width,
            height,
        }
    }

    /// Linear blend between `self` and `target`; height is taken from `target`.
    pub fn lerp(&self, target: &IndicatorFrame, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            left: self.left + (target.left - self.left) * alpha,
            width: self.width + (target.width - self.width) * alpha,
            height: target.height,
        }
    }

    /// Column span `[start, end)` after rounding, clipped to `max_width`.
    pub fn column_span(&self, max_width: u16) -> (u16, u16) {
        let start = self.left.round().clamp(0.0, max_width as f32) as u16;
        let end = (self.left + self.width)
            .round()
            .clamp(start as f32, max_width as f32) as u16;
        (start, end)
    }

    /// Number of terminal rows needed to draw this frame.
    pub fn rows(&self) -> u16 {
        self.height.div_ceil(UNITS_PER_ROW)
    }
}

/// Size of one list item, as reported to the slot list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSize {
    pub width: f32,
    pub height: u16,
}

/// The two exposed style parameters of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorStyle {
    /// Height in half-rows; always positive.
    pub height: u16,
    pub color: Color,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            height: DEFAULT_INDICATOR_HEIGHT,
            color: DEFAULT_INDICATOR_COLOR,
        }
    }
}
