//! Main layout and frame composition.

use ratatui::{prelude::*, widgets::Paragraph};

use super::{form, results, status};
use crate::tui::app::{App, Screen};

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Main layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_chunks[0], app);

    match app.screen {
        Screen::Editor => form::draw(frame, main_chunks[1], app),
        Screen::Results => results::draw(frame, main_chunks[1], app),
    }

    status::draw(frame, main_chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mode_text = format!("{} mode", app.mode.label());
    let profile_text = format!("[{}]", app.config.active_profile);
    let title = "spingen";

    // Calculate padding for right-alignment
    let used = title.len() + mode_text.len() + profile_text.len() + 5;
    let padding = area.width.saturating_sub(used as u16) as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {title}"), Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(mode_text, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(padding)),
        Span::styled(profile_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
