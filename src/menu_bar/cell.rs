//! A single tab slot.

use ratatui::style::{Color, Modifier, Style};

/// Label color of the selected slot.
pub const SELECTED_LABEL_COLOR: Color = Color::Black;

/// Label color of every other slot.
pub const UNSELECTED_LABEL_COLOR: Color = Color::Gray;

/// One rendered tab slot.
///
/// Cells are pooled by [`SlotList`](super::list::SlotList) and rebound to
/// different tab indices over time. `is_selected` only drives the label
/// color; the bar's `selected_index` is the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBarCell {
    display_text: Option<String>,
    is_selected: bool,
}

impl MenuBarCell {
    /// Create an empty, unselected cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind label text. `None` renders as an empty label.
    pub fn bind(&mut self, text: Option<&str>) {
        self.display_text = text.map(str::to_owned);
    }

    /// Text to draw; empty when nothing is bound.
    pub fn text(&self) -> &str {
        self.display_text.as_deref().unwrap_or("")
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Reset presentation state before the cell is bound to another slot.
    pub fn prepare_for_reuse(&mut self) {
        self.is_selected = false;
    }

    pub fn label_color(&self) -> Color {
        if self.is_selected {
            SELECTED_LABEL_COLOR
        } else {
            UNSELECTED_LABEL_COLOR
        }
    }

    /// Bold, centered label style.
    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.label_color())
            .add_modifier(Modifier::BOLD)
    }
}
