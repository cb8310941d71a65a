//! State management module.
//!
//! Contains the MVU action types and the content pager that follows the
//! menu bar selection.

use std::cell::Cell;

use ratatui::style::Color;
use tracing::debug;

use menubar_tui::listener::SelectionListener;

pub mod actions;

pub use actions::*;

/// Indicator colors offered by `Action::IndicatorColorCycle`.
pub const INDICATOR_COLORS: &[Color] = &[
    Color::Black,
    Color::Blue,
    Color::Magenta,
    Color::Red,
    Color::Green,
];

// =============================================================================
// Content Pager
// =============================================================================

/// A page transition requested by the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTransition {
    pub from: usize,
    pub to: usize,
}

/// Paged content view driven by the menu bar's selection listener.
///
/// The bar holds this weakly and calls it from inside its own `&mut self`
/// methods, so state lives in `Cell`s.
#[derive(Debug, Default)]
pub struct ContentPager {
    page: Cell<usize>,
    pending: Cell<Option<PageTransition>>,
}

impl ContentPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    /// Jump to a page without animating, e.g. after the tabs are replaced.
    pub fn reset(&self, page: usize) {
        self.page.set(page);
        self.pending.set(None);
    }

    /// Take the transition requested since the last call, if any.
    pub fn take_transition(&self) -> Option<PageTransition> {
        self.pending.take()
    }
}

impl SelectionListener for ContentPager {
    fn scroll_to(&self, index: usize) {
        let from = self.page.replace(index);
        debug!(from, to = index, "content pager scrolling");
        // Coalesce with an unconsumed transition so the slide starts from
        // the page that is actually on screen
        let from = self.pending.get().map_or(from, |t| t.from);
        self.pending.set(Some(PageTransition { from, to: index }));
    }
}
