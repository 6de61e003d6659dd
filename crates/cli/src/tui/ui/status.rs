//! Status bar rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode, Screen};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match (app.screen, app.mode) {
        (Screen::Editor, Mode::Simple) => {
            " [Tab] field  [F2] mode  [F5] generate  [F6] export  [^C] quit"
        }
        (Screen::Editor, Mode::Dataset) => {
            " [Tab] field  [F2] mode  [F3] load  [F5] generate  [F6] export  [^C] quit"
        }
        (Screen::Results, _) => " [j/k] navigate  [F5] again  [F6] export  [Esc] back  [q] quit",
    };

    let (right_text, right_style) = match &app.status {
        Some(status) if status.is_error => (status.text.as_str(), Style::default().fg(Color::Red)),
        Some(status) => (status.text.as_str(), Style::default().fg(Color::Green)),
        None => ("Ready", Style::default().fg(Color::DarkGray)),
    };

    // Calculate padding for right-alignment
    let used = hints.chars().count() + right_text.chars().count() + 2;
    let padding = area.width.saturating_sub(used as u16) as usize;

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, right_style),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
