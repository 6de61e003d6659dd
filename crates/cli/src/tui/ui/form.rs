//! Editor screen: template box plus the mode's small fields.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::app::{App, Field};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let small: Vec<Field> =
        app.mode.fields().iter().copied().filter(|f| *f != Field::Template).collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Template
            Constraint::Length(3), // Small fields
            Constraint::Length(1), // Dataset summary
        ])
        .split(area);

    draw_field(frame, chunks[0], app, Field::Template);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(small.iter().map(|f| match f {
            Field::Columns => Constraint::Percentage(40),
            Field::DataPath => Constraint::Percentage(40),
            _ => Constraint::Percentage(20),
        }))
        .split(chunks[1]);
    for (field, cell) in small.iter().zip(row.iter()) {
        draw_field(frame, *cell, app, *field);
    }

    if let Some(dataset) = &app.dataset {
        let summary = format!(
            " data: rows: {} | columns: {}",
            dataset.len(),
            dataset.columns().join(", ")
        );
        frame.render_widget(
            Paragraph::new(summary).style(Style::default().fg(Color::DarkGray)),
            chunks[2],
        );
    }
}

fn draw_field(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    let focused = app.focus == field;
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app.field_value(field);
    let mut text = Text::raw(value.to_string());
    if value.ends_with('\n') {
        text.lines.push(Line::from(""));
    }
    if focused {
        let cursor = Span::styled("_", Style::default().fg(Color::Gray).rapid_blink());
        match text.lines.last_mut() {
            Some(line) => line.push_span(cursor),
            None => text.lines.push(Line::from(cursor)),
        }
    }

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
