//! Header area holding the menu bar.

use ratatui::prelude::*;

use menubar_tui::menu_bar::MenuBarWidget;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    frame.render_stateful_widget(MenuBarWidget, area, &mut app.menu_bar);
}
