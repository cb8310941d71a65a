//! Rendering of a [`MenuBar`] into a ratatui buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::StatefulWidget;
use unicode_truncate::UnicodeTruncateStr;

use super::list::slot_span;
use super::MenuBar;
use crate::models::UNITS_PER_ROW;

/// Fill color behind the tabs.
pub const BACKGROUND_COLOR: Color = Color::White;

const FULL_BLOCK: &str = "█";
const LOWER_HALF_BLOCK: &str = "▄";

/// Draws the tab slots and the indicator.
///
/// Rendering assigns the render area as the bar's bounds, which is where
/// lazy layout initialization and resize handling happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuBarWidget;

impl StatefulWidget for MenuBarWidget {
    type State = MenuBar;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.set_bounds(area);
        if area.is_empty() {
            return;
        }

        buf.set_style(area, Style::default().bg(BACKGROUND_COLOR));
        render_labels(area, buf, state);
        render_indicator(area, buf, state);
    }
}

fn render_labels(area: Rect, buf: &mut Buffer, bar: &MenuBar) {
    let tab_width = bar.tab_width();
    let label_y = area.y + area.height.saturating_sub(1) / 2;

    for (index, cell) in bar.cells().iter().enumerate() {
        let (start, end) = slot_span(index, tab_width);
        let end = end.min(area.width);
        let span = end.saturating_sub(start);
        if span == 0 {
            continue;
        }

        let (text, text_width) = cell.text().unicode_truncate(span as usize);
        let x = area.x + start + (span - text_width as u16) / 2;
        buf.set_string(x, label_y, text, cell.label_style());
    }
}

fn render_indicator(area: Rect, buf: &mut Buffer, bar: &MenuBar) {
    let Some(frame) = bar.indicator_frame() else {
        return;
    };
    let (start, end) = frame.column_span(area.width);
    let rows = frame.rows().min(area.height);
    let style = Style::default().fg(bar.indicator_color());

    for row in 0..rows {
        let y = area.bottom() - 1 - row;
        // An odd height leaves a half row on top
        let top_half = row + 1 == frame.rows() && frame.height % UNITS_PER_ROW != 0;
        let symbol = if top_half { LOWER_HALF_BLOCK } else { FULL_BLOCK };
        for x in start..end {
            if let Some(cell) = buf.cell_mut((area.x + x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}
