//! UI rendering module.
//!
//! This module contains all the rendering logic for the demo TUI.

mod content;
mod footer;
mod header;

use ratatui::prelude::*;
use tachyonfx::Shader;

use crate::app::App;

/// Main render function - called every frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    // Main layout: Menu bar, Content, Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Menu bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    header::render(frame, app, chunks[0]);
    content::render(frame, app, chunks[1]);
    footer::render(frame, app, chunks[2]);

    // Page slide over the content area
    if let Some(ref mut effect) = app.page_effect {
        // Assume ~60FPS (16ms per frame)
        let delta = std::time::Duration::from_millis(16);
        effect.process(delta.into(), frame.buffer_mut(), chunks[1]);

        if effect.running() {
            app.mark_dirty();
        } else {
            app.page_effect = None;
            app.mark_dirty();
        }
    }
}
