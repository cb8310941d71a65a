//! Footer bar with keybindings.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let keybindings = [
        ("←/→", "Select"),
        ("1-9", "Jump"),
        ("Click", "Select"),
        ("+/-", "Indicator"),
        ("c", "Color"),
        ("r", "Reload"),
        ("q", "Quit"),
    ];

    let mut spans: Vec<Span> = keybindings
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(
                    format!(" {} ", key),
                    Style::default().bg(Color::DarkGray).fg(Color::White),
                ),
                Span::raw(format!(" {} ", action)),
                Span::raw(" "),
            ]
        })
        .collect();

    spans.push(Span::styled(
        format!("height {}", app.menu_bar.indicator_height()),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
