//! Application state management.
//!
//! `App` embeds a [`MenuBar`] over a paged content view. The pager is the
//! bar's selection listener; the bar only holds it weakly.

use std::rc::Rc;
use std::time::Duration;

use ratatui::style::Color;
use tachyonfx::{fx, Effect, Motion};
use tracing::{debug, info};

use menubar_tui::config::MenuBarConfig;
use menubar_tui::menu_bar::MenuBar;

use crate::state::{Action, ContentPager, PageTransition, INDICATOR_COLORS};

/// Main application state.
pub struct App {
    /// Flag to exit the application.
    pub should_quit: bool,

    /// The tab bar shown in the header.
    pub menu_bar: MenuBar,

    /// Content view following the bar's selection.
    pub pager: Rc<ContentPager>,

    /// Slide effect applied to the content area after a page change.
    pub page_effect: Option<Effect>,

    /// Position in `INDICATOR_COLORS`.
    color_index: usize,

    /// Dirty flag - set when UI needs to be redrawn.
    needs_redraw: bool,
}

impl App {
    pub fn new(config: &MenuBarConfig) -> Self {
        let pager = Rc::new(ContentPager::new());
        let mut menu_bar = MenuBar::from_config(config);
        menu_bar.set_listener(&pager);
        info!(tabs = menu_bar.item_count(), "menu bar created");

        let color_index = INDICATOR_COLORS
            .iter()
            .position(|c| *c == config.style.color)
            .unwrap_or(0);

        Self {
            should_quit: false,
            menu_bar,
            pager,
            page_effect: None,
            color_index,
            needs_redraw: true, // Initial draw required
        }
    }

    // ===== Dirty Flag (Rendering Optimization) =====

    /// Mark UI as needing redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Check if redraw is needed and reset the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        let bar = self.menu_bar.take_needs_redraw();
        std::mem::take(&mut self.needs_redraw) || bar
    }

    #[allow(dead_code)] // Useful for debugging/testing
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw || self.menu_bar.needs_redraw()
    }

    // ===== MVU/Reducer: Centralized State Update =====

    /// Process an action and update application state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::TabNext => self.menu_bar.select_next(),
            Action::TabPrev => self.menu_bar.select_previous(),
            Action::TabSelect(index) => self.menu_bar.activate(index),
            Action::Click { column, row } => {
                if let Some(index) = self.menu_bar.handle_click(column, row) {
                    debug!(index, column, row, "tab clicked");
                }
            }
            Action::SetTabs(labels) => self.set_tabs(labels),

            Action::IndicatorGrow => {
                let height = self.menu_bar.indicator_height().saturating_add(1);
                self.menu_bar.set_indicator_height(height);
            }
            Action::IndicatorShrink => {
                let height = self.menu_bar.indicator_height().saturating_sub(1).max(1);
                self.menu_bar.set_indicator_height(height);
            }
            Action::IndicatorColorCycle => {
                self.color_index = (self.color_index + 1) % INDICATOR_COLORS.len();
                self.menu_bar
                    .set_indicator_color(INDICATOR_COLORS[self.color_index]);
            }

            Action::Quit => self.should_quit = true,
        }
        self.start_page_transition();
    }

    /// Replace the tabs; the content view jumps back to the first page.
    pub fn set_tabs(&mut self, labels: Vec<String>) {
        self.menu_bar.set_tabs(labels);
        self.pager.reset(0);
        self.page_effect = None;
        self.mark_dirty();
    }

    /// Advance time-based state (indicator animation).
    pub fn tick(&mut self, delta: Duration) {
        if self.menu_bar.tick(delta) {
            self.mark_dirty();
        }
    }

    fn start_page_transition(&mut self) {
        let Some(PageTransition { from, to }) = self.pager.take_transition() else {
            return;
        };
        let motion = if to > from {
            Motion::RightToLeft
        } else {
            Motion::LeftToRight
        };
        self.page_effect = Some(fx::slide_in(motion, 15, 0, Color::Black, 300));
        self.mark_dirty();
    }

    /// Label of the page currently shown.
    pub fn page_title(&self) -> &str {
        self.menu_bar.item_label(self.pager.page()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menubar_tui::menu_bar::INDICATOR_ANIMATION;
    use menubar_tui::models::IndicatorStyle;
    use ratatui::layout::Rect;

    fn create_test_app() -> App {
        let config = MenuBarConfig {
            tabs: vec!["Home".into(), "Feed".into(), "Profile".into()],
            style: IndicatorStyle::default(),
        };
        let mut app = App::new(&config);
        app.menu_bar.set_bounds(Rect::new(0, 0, 30, 3));
        app
    }

    #[test]
    fn test_tab_select_pages_content() {
        let mut app = create_test_app();

        app.update(Action::TabSelect(2));
        assert_eq!(app.menu_bar.selected_index(), 2);
        assert_eq!(app.pager.page(), 2);
        assert_eq!(app.page_title(), "Profile");
        assert!(app.page_effect.is_some());
    }

    #[test]
    fn test_reselecting_tab_does_not_page() {
        let mut app = create_test_app();
        app.take_needs_redraw();

        app.update(Action::TabSelect(0));
        assert!(app.page_effect.is_none());
        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_next_prev_follow_selection() {
        let mut app = create_test_app();

        app.update(Action::TabNext);
        app.update(Action::TabNext);
        app.update(Action::TabPrev);
        assert_eq!(app.pager.page(), 1);
        assert_eq!(app.page_title(), "Feed");
    }

    #[test]
    fn test_click_selects_tab() {
        let mut app = create_test_app();

        app.update(Action::Click { column: 15, row: 1 });
        assert_eq!(app.menu_bar.selected_index(), 1);
        assert_eq!(app.pager.page(), 1);

        app.update(Action::Click { column: 15, row: 9 });
        assert_eq!(app.menu_bar.selected_index(), 1);
    }

    #[test]
    fn test_indicator_style_actions() {
        let mut app = create_test_app();

        app.update(Action::IndicatorGrow);
        assert_eq!(app.menu_bar.indicator_height(), 3);

        app.update(Action::IndicatorShrink);
        app.update(Action::IndicatorShrink);
        app.update(Action::IndicatorShrink);
        assert_eq!(app.menu_bar.indicator_height(), 1);

        app.update(Action::IndicatorColorCycle);
        assert_eq!(app.menu_bar.indicator_color(), INDICATOR_COLORS[1]);
    }

    #[test]
    fn test_set_tabs_resets_pager() {
        let mut app = create_test_app();
        app.update(Action::TabSelect(2));

        app.update(Action::SetTabs(vec!["X".into(), "Y".into()]));
        assert_eq!(app.menu_bar.selected_index(), 0);
        assert_eq!(app.pager.page(), 0);
        assert!(app.page_effect.is_none());
    }

    #[test]
    fn test_tick_drives_indicator_animation() {
        let mut app = create_test_app();
        app.update(Action::TabSelect(1));
        app.take_needs_redraw();

        app.tick(Duration::from_millis(16));
        assert!(app.needs_redraw());
        app.tick(INDICATOR_ANIMATION);
        assert!(!app.menu_bar.is_animating());
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.update(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_listener_is_weak() {
        let app = create_test_app();
        assert_eq!(Rc::strong_count(&app.pager), 1);
    }
}
