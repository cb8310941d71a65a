//! Horizontal tab bar with an animated selection indicator.
//!
//! [`MenuBar`] owns the tab labels, the selected index, the indicator
//! style and geometry, and the pooled slot cells. Selection changes coming
//! from the slot list run through [`MenuBar::item_activated`]: the index is
//! updated, the weakly held [`SelectionListener`] is told to scroll, and
//! the indicator slides to the new tab.
//!
//! Geometry is established lazily. The bar does not know its size until the
//! first non-empty [`MenuBar::set_bounds`]; until then every geometry
//! recomputation is skipped.
//!
//! ```ignore
//! use menubar_tui::menu_bar::{MenuBar, MenuBarWidget};
//!
//! let mut bar = MenuBar::new();
//! bar.set_tabs(["Home", "Feed", "Profile"]);
//! bar.set_listener(&pager);
//! frame.render_stateful_widget(MenuBarWidget, area, &mut bar);
//! ```

mod animation;
mod cell;
mod list;
mod widget;

pub use animation::{IndicatorAnimation, INDICATOR_ANIMATION, INDICATOR_EASING};
pub use cell::{MenuBarCell, SELECTED_LABEL_COLOR, UNSELECTED_LABEL_COLOR};
pub use list::SlotList;
pub use widget::{MenuBarWidget, BACKGROUND_COLOR};

use std::rc::Rc;
use std::time::Duration;

use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use tracing::{debug, warn};

use crate::config::MenuBarConfig;
use crate::listener::{ListenerHandle, SelectionListener};
use crate::models::{IndicatorFrame, IndicatorStyle, ItemSize};

/// Label shown by a freshly constructed bar.
pub const PLACEHOLDER_TAB: &str = "Custom MenuBar";

/// Tab bar state.
#[derive(Debug)]
pub struct MenuBar {
    tab_labels: Vec<String>,
    selected_index: usize,
    style: IndicatorStyle,

    /// Laid out area of the bar; empty until the host assigns one.
    bounds: Rect,

    /// Set once, on the first non-empty bounds.
    layout_initialized: bool,

    /// Settled indicator geometry for `selected_index`.
    indicator: Option<IndicatorFrame>,

    /// In-flight slide toward `indicator`.
    animation: Option<IndicatorAnimation>,

    slots: SlotList,
    listener: ListenerHandle,

    needs_redraw: bool,
    needs_layout: bool,
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBar {
    /// Create a bar showing [`PLACEHOLDER_TAB`] with the default style.
    pub fn new() -> Self {
        Self::with_style(IndicatorStyle::default())
    }

    pub fn with_style(style: IndicatorStyle) -> Self {
        let mut bar = Self {
            tab_labels: Vec::new(),
            selected_index: 0,
            style: IndicatorStyle {
                height: style.height.max(1),
                color: style.color,
            },
            bounds: Rect::default(),
            layout_initialized: false,
            indicator: None,
            animation: None,
            slots: SlotList::new(),
            listener: ListenerHandle::default(),
            needs_redraw: true,
            needs_layout: false,
        };
        bar.set_tabs([PLACEHOLDER_TAB]);
        bar
    }

    /// Create a bar from loaded configuration.
    pub fn from_config(config: &MenuBarConfig) -> Self {
        let mut bar = Self::with_style(config.style);
        bar.set_tabs(config.tabs.iter().cloned());
        bar
    }

    /// Register the listener. Only a weak handle is kept.
    pub fn set_listener<L: SelectionListener + 'static>(&mut self, listener: &Rc<L>) {
        self.listener = ListenerHandle::new(listener);
    }

    // ===== Public Operations =====

    /// Replace all tabs and reset the selection to the first one.
    ///
    /// The first slot is selected without notifying the listener.
    pub fn set_tabs<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tab_labels = labels.into_iter().map(Into::into).collect();
        self.slots.reload(&self.tab_labels);
        self.slots.select_item(0);
        self.selected_index = 0;
        self.remake_indicator();
        self.mark_dirty();
        debug!(count = self.tab_labels.len(), "menu bar tabs replaced");
    }

    /// Set the indicator height in half-rows. Zero is raised to one.
    pub fn set_indicator_height(&mut self, height: u16) {
        if height == 0 {
            warn!("indicator height must be positive, using 1");
        }
        self.style.height = height.max(1);
        self.remake_indicator();
    }

    pub fn set_indicator_color(&mut self, color: Color) {
        self.style.color = color;
        self.mark_dirty();
    }

    /// Width of one tab: bar width divided by tab count, or the full bar
    /// width when there are no tabs.
    pub fn tab_width(&self) -> f32 {
        let width = self.bounds.width as f32;
        if self.tab_labels.is_empty() {
            width
        } else {
            width / self.tab_labels.len() as f32
        }
    }

    // ===== Selection =====

    /// Activation callback from the slot list.
    ///
    /// Re-activating the selected tab does nothing. A change also moves the
    /// selected visual to the new slot.
    pub fn item_activated(&mut self, index: usize) {
        if index >= self.tab_labels.len() {
            debug!(index, "ignoring activation outside the tab range");
            return;
        }
        if index == self.selected_index {
            return;
        }

        self.selected_index = index;
        self.slots.select_item(index);
        debug!(index, "menu bar selection changed");
        if !self.listener.notify(index) {
            debug!(index, "no selection listener attached");
        }
        self.animate_indicator();
    }

    /// Select `index` the way a user tap would: the slot list records its
    /// own selection first, then the activation runs.
    pub fn activate(&mut self, index: usize) {
        if index >= self.tab_labels.len() {
            return;
        }
        self.slots.select_item(index);
        self.item_activated(index);
    }

    pub fn select_next(&mut self) {
        if self.tab_labels.is_empty() {
            return;
        }
        let next = (self.selected_index + 1).min(self.tab_labels.len() - 1);
        self.activate(next);
    }

    pub fn select_previous(&mut self) {
        self.activate(self.selected_index.saturating_sub(1));
    }

    /// Activate the tab under a mouse click. Returns the tab hit, if any.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<usize> {
        if !self.bounds.contains(Position::new(column, row)) {
            return None;
        }
        let index = self
            .slots
            .slot_at(column - self.bounds.x, self.tab_width())?;
        self.activate(index);
        Some(index)
    }

    // ===== Layout =====

    /// Assign the bar's laid out area.
    ///
    /// The first non-empty area initializes the indicator. Later size
    /// changes, and pending layout requests, recompute it.
    pub fn set_bounds(&mut self, area: Rect) {
        let resized = area.width != self.bounds.width || area.height != self.bounds.height;
        self.bounds = area;
        if area.is_empty() {
            return;
        }

        if !self.layout_initialized {
            self.layout_initialized = true;
            self.indicator = Some(self.slot_frame(self.selected_index));
            self.mark_dirty();
            debug!(width = area.width, height = area.height, "menu bar layout initialized");
        } else if resized || self.needs_layout {
            self.remake_indicator();
        }
        self.needs_layout = false;
    }

    /// Snap the indicator to the selected tab. Skipped until layout is
    /// initialized.
    fn remake_indicator(&mut self) {
        if !self.layout_initialized {
            return;
        }
        self.animation = None;
        self.indicator = Some(self.slot_frame(self.selected_index));
        self.mark_dirty();
    }

    fn animate_indicator(&mut self) {
        if !self.layout_initialized {
            return;
        }
        let target = self.slot_frame(self.selected_index);
        let from = self.indicator_frame().unwrap_or(target);
        self.animation = Some(IndicatorAnimation::new(from, target));
        self.indicator = Some(target);
        self.mark_dirty();
    }

    fn slot_frame(&self, index: usize) -> IndicatorFrame {
        IndicatorFrame::for_slot(index, self.tab_width(), self.style.height)
    }

    /// Advance the indicator animation. Returns whether it is still running.
    ///
    /// A finished animation requests a layout pass.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let done = animation.advance(delta);
        self.mark_dirty();
        if done {
            self.animation = None;
            self.set_needs_layout();
        }
        !done
    }

    /// Current visual indicator frame, including any animation progress.
    pub fn indicator_frame(&self) -> Option<IndicatorFrame> {
        match &self.animation {
            Some(animation) => Some(animation.current()),
            None => self.indicator,
        }
    }

    /// Frame the indicator settles on for the current selection.
    pub fn indicator_target(&self) -> Option<IndicatorFrame> {
        self.indicator
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // ===== List Adapter =====

    pub fn item_count(&self) -> usize {
        self.tab_labels.len()
    }

    pub fn item_label(&self, index: usize) -> Option<&str> {
        self.tab_labels.get(index).map(String::as_str)
    }

    /// Every tab is equally wide and spans the full bar height.
    pub fn item_size(&self, _index: usize) -> ItemSize {
        ItemSize {
            width: self.tab_width(),
            height: self.bounds.height,
        }
    }

    pub fn cells(&self) -> &[MenuBarCell] {
        self.slots.cells()
    }

    // ===== Accessors =====

    pub fn tab_labels(&self) -> &[String] {
        &self.tab_labels
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn indicator_height(&self) -> u16 {
        self.style.height
    }

    pub fn indicator_color(&self) -> Color {
        self.style.color
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_layout_initialized(&self) -> bool {
        self.layout_initialized
    }

    // ===== Dirty Flags =====

    /// Mark the bar as needing redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Check if redraw is needed and reset the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn set_needs_layout(&mut self) {
        self.needs_layout = true;
        self.mark_dirty();
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<usize>>,
    }

    impl SelectionListener for Recorder {
        fn scroll_to(&self, index: usize) {
            self.calls.borrow_mut().push(index);
        }
    }

    fn laid_out_bar(tabs: &[&str], width: u16) -> MenuBar {
        let mut bar = MenuBar::new();
        bar.set_tabs(tabs.iter().copied());
        bar.set_bounds(Rect::new(0, 0, width, 3));
        bar
    }

    #[test]
    fn test_new_bar_shows_placeholder() {
        let bar = MenuBar::new();
        assert_eq!(bar.tab_labels(), &[PLACEHOLDER_TAB.to_string()]);
        assert_eq!(bar.selected_index(), 0);
        assert_eq!(bar.indicator_height(), 2);
        assert_eq!(bar.indicator_color(), Color::Black);
        assert!(!bar.is_layout_initialized());
        assert_eq!(bar.indicator_frame(), None);
        assert!(bar.needs_redraw());
    }

    #[test]
    fn test_layout_initializes_once_on_first_real_size() {
        let mut bar = MenuBar::new();
        bar.set_bounds(Rect::new(0, 0, 0, 0));
        assert!(!bar.is_layout_initialized());

        bar.set_bounds(Rect::new(0, 0, 40, 3));
        assert!(bar.is_layout_initialized());
        assert_eq!(
            bar.indicator_frame(),
            Some(IndicatorFrame::for_slot(0, 40.0, 2))
        );
    }

    #[test]
    fn test_resize_recomputes_indicator() {
        let mut bar = laid_out_bar(&["A", "B"], 40);
        bar.activate(1);
        bar.tick(INDICATOR_ANIMATION);

        bar.set_bounds(Rect::new(0, 0, 80, 3));
        assert_eq!(bar.tab_width(), 40.0);
        assert_eq!(
            bar.indicator_frame(),
            Some(IndicatorFrame::for_slot(1, 40.0, 2))
        );
    }

    #[test]
    fn test_height_change_before_layout_is_noop_on_geometry() {
        let mut bar = MenuBar::new();
        bar.set_indicator_height(6);
        bar.set_indicator_color(Color::Red);

        assert_eq!(bar.indicator_height(), 6);
        assert_eq!(bar.indicator_frame(), None);

        bar.set_bounds(Rect::new(0, 0, 30, 3));
        assert_eq!(bar.indicator_frame().map(|f| f.height), Some(6));
    }

    #[test]
    fn test_height_change_preserves_selection_and_snaps() {
        let mut bar = laid_out_bar(&["A", "B", "C"], 30);
        bar.activate(2);
        assert!(bar.is_animating());

        bar.set_indicator_height(4);
        assert!(!bar.is_animating());
        assert_eq!(bar.selected_index(), 2);
        assert_eq!(
            bar.indicator_frame(),
            Some(IndicatorFrame::for_slot(2, 10.0, 4))
        );
    }

    #[test]
    fn test_zero_height_is_raised_to_one() {
        let mut bar = laid_out_bar(&["A"], 10);
        bar.set_indicator_height(0);
        assert_eq!(bar.indicator_height(), 1);
    }

    #[test]
    fn test_color_change_keeps_geometry() {
        let mut bar = laid_out_bar(&["A", "B"], 20);
        let before = bar.indicator_frame();
        bar.take_needs_redraw();

        bar.set_indicator_color(Color::Magenta);
        assert_eq!(bar.indicator_color(), Color::Magenta);
        assert_eq!(bar.indicator_frame(), before);
        assert!(bar.needs_redraw());
    }

    #[test]
    fn test_out_of_range_activation_is_ignored() {
        let recorder = Rc::new(Recorder::default());
        let mut bar = laid_out_bar(&["A", "B"], 20);
        bar.set_listener(&recorder);

        bar.item_activated(5);
        assert_eq!(bar.selected_index(), 0);
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_select_next_and_previous_clamp() {
        let recorder = Rc::new(Recorder::default());
        let mut bar = laid_out_bar(&["A", "B", "C"], 30);
        bar.set_listener(&recorder);

        bar.select_previous();
        bar.select_next();
        bar.select_next();
        bar.select_next();
        bar.select_previous();

        assert_eq!(bar.selected_index(), 1);
        assert_eq!(*recorder.calls.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_activate_updates_cell_visuals() {
        let mut bar = laid_out_bar(&["A", "B", "C"], 30);
        assert!(bar.cells()[0].is_selected());

        bar.activate(1);
        let flags: Vec<bool> = bar.cells().iter().map(MenuBarCell::is_selected).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_handle_click_hits_tab_under_column() {
        let recorder = Rc::new(Recorder::default());
        let mut bar = MenuBar::new();
        bar.set_tabs(["A", "B", "C"]);
        bar.set_bounds(Rect::new(5, 2, 30, 3));
        bar.set_listener(&recorder);

        assert_eq!(bar.handle_click(4, 3), None);
        assert_eq!(bar.handle_click(5, 10), None);
        assert_eq!(bar.handle_click(26, 3), Some(2));
        assert_eq!(bar.handle_click(34, 4), Some(2));
        assert_eq!(bar.selected_index(), 2);
        assert_eq!(*recorder.calls.borrow(), vec![2]);
    }

    #[test]
    fn test_item_activated_moves_selected_visual() {
        let mut bar = laid_out_bar(&["A", "B", "C"], 9);

        bar.item_activated(2);
        let flags: Vec<bool> = bar.cells().iter().map(MenuBarCell::is_selected).collect();
        assert_eq!(flags, vec![false, false, true]);
        assert_eq!(bar.cells()[0].label_color(), UNSELECTED_LABEL_COLOR);
        assert_eq!(bar.cells()[2].label_color(), SELECTED_LABEL_COLOR);
    }

    #[test]
    fn test_handle_click_with_fractional_tab_width() {
        // 3.5 columns per tab; tab 0 is drawn on columns 0..4
        let mut bar = laid_out_bar(&["A", "B"], 7);

        assert_eq!(bar.handle_click(3, 1), Some(0));
        assert_eq!(bar.selected_index(), 0);
        assert_eq!(bar.handle_click(4, 1), Some(1));
        assert_eq!(bar.selected_index(), 1);
    }

    #[test]
    fn test_finished_animation_requests_layout() {
        let mut bar = laid_out_bar(&["A", "B"], 20);
        bar.activate(1);

        assert!(bar.tick(Duration::from_millis(100)));
        assert!(!bar.needs_layout());
        assert!(!bar.tick(INDICATOR_ANIMATION));
        assert!(bar.needs_layout());

        bar.set_bounds(Rect::new(0, 0, 20, 3));
        assert!(!bar.needs_layout());
        assert_eq!(
            bar.indicator_frame(),
            Some(IndicatorFrame::for_slot(1, 10.0, 2))
        );
    }

    #[test]
    fn test_tick_without_animation_is_idle() {
        let mut bar = laid_out_bar(&["A", "B"], 20);
        bar.take_needs_redraw();
        assert!(!bar.tick(Duration::from_millis(16)));
        assert!(!bar.needs_redraw());
    }

    #[test]
    fn test_activation_before_layout_updates_selection_only() {
        let recorder = Rc::new(Recorder::default());
        let mut bar = MenuBar::new();
        bar.set_tabs(["A", "B"]);
        bar.set_listener(&recorder);

        bar.activate(1);
        assert_eq!(bar.selected_index(), 1);
        assert_eq!(*recorder.calls.borrow(), vec![1]);
        assert!(!bar.is_animating());

        bar.set_bounds(Rect::new(0, 0, 20, 3));
        assert_eq!(
            bar.indicator_frame(),
            Some(IndicatorFrame::for_slot(1, 10.0, 2))
        );
    }

    #[test]
    fn test_item_adapter() {
        let bar = laid_out_bar(&["A", "B", "C", "D"], 40);
        assert_eq!(bar.item_count(), 4);
        assert_eq!(bar.item_label(3), Some("D"));
        assert_eq!(bar.item_label(4), None);
        assert_eq!(
            bar.item_size(1),
            ItemSize {
                width: 10.0,
                height: 3
            }
        );
    }

    #[test]
    fn test_from_config() {
        let config = MenuBarConfig {
            tabs: vec!["One".into(), "Two".into()],
            style: IndicatorStyle {
                height: 3,
                color: Color::Blue,
            },
        };
        let bar = MenuBar::from_config(&config);
        assert_eq!(bar.tab_labels(), &["One".to_string(), "Two".to_string()]);
        assert_eq!(bar.indicator_height(), 3);
        assert_eq!(bar.indicator_color(), Color::Blue);
    }
}
