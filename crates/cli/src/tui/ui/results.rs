//! Results screen: variation list and the selected variation in full.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // List
            Constraint::Percentage(65), // Detail
        ])
        .split(area);

    draw_list(frame, chunks[0], app);
    draw_detail(frame, chunks[1], app);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_variations();
    let width = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let prefix = if i == app.selected { " > " } else { "   " };
            let first_line = v.text.lines().next().unwrap_or("");
            let label: String = format!("{}. {first_line}", v.index).chars().take(width).collect();
            ListItem::new(format!("{prefix}{label}")).style(style)
        })
        .collect();

    let title = if visible.len() < app.variations.len() {
        format!("Variations ({} of {})", visible.len(), app.variations.len())
    } else {
        format!("Variations ({})", app.variations.len())
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(variation) = app.selected_variation() {
        if let Some(vars) = &variation.variables {
            for (name, value) in vars.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{name}: "), Style::default().fg(Color::Cyan)),
                    Span::raw(value.to_string()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.extend(variation.text.lines().map(|l| Line::from(l.to_string())));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Variation")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
