//! Field rendering utilities for forms

use crate::state::{FieldName, FieldStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per field: bordered input plus one feedback line
pub const FIELD_HEIGHT: u16 = 4;

/// Border colour: validation state wins over focus
fn border_color(status: FieldStatus, is_active: bool) -> Color {
    match status {
        FieldStatus::Invalid => Color::Red,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Untouched if is_active => Color::Cyan,
        FieldStatus::Untouched => Color::DarkGray,
    }
}

/// Draw a single-line input with its label, value and validation feedback
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    status: FieldStatus,
    error: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = Style::default().fg(border_color(status, is_active));
    let label_style = if is_active {
        border_style.add_modifier(Modifier::BOLD)
    } else {
        border_style
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), label_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = error {
        let feedback = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(feedback, chunks[1]);
    }
}
