//! Inline alert box

use crate::state::{Alert, AlertVariant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Alert height in rows
pub const ALERT_HEIGHT: u16 = 3;

fn variant_color(variant: AlertVariant) -> Color {
    match variant {
        AlertVariant::Success => Color::Green,
    }
}

/// Render an alert with a dismiss hint on its border
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let color = variant_color(alert.variant);

    let content = Line::from(vec![
        Span::styled("✓ ", Style::default().fg(color)),
        Span::styled(
            alert.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_bottom(Line::from(" Esc:dismiss ").right_aligned());

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
