//! Action types for MVU/Reducer pattern.
//!
//! All state mutations of the demo application are triggered via
//! `App::update(action)` to make transitions explicit and testable.

/// Actions that can modify application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ===== Tab Selection =====
    /// Select the tab to the right of the current one.
    TabNext,
    /// Select the tab to the left of the current one.
    TabPrev,
    /// Select a tab by index (as a tap on that slot would).
    TabSelect(usize),
    /// Left mouse click at a terminal position.
    Click { column: u16, row: u16 },
    /// Replace every tab; selection returns to the first one.
    SetTabs(Vec<String>),

    // ===== Indicator Style =====
    /// Make the indicator one half-row taller.
    IndicatorGrow,
    /// Make the indicator one half-row shorter (never below one).
    IndicatorShrink,
    /// Switch to the next indicator color.
    IndicatorColorCycle,

    // ===== General =====
    /// Request application quit.
    Quit,
}
