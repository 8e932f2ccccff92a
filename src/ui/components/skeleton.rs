//! Skeleton placeholders shown while content loads

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DIM: u8 = 48;
const BRIGHT: u8 = 110;

/// Grey shade for a shimmer intensity in `0.0..=1.0`
pub fn shimmer_color(intensity: f32) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    let level = DIM as f32 + (BRIGHT - DIM) as f32 * t;
    let level = level.round() as u8;
    Color::Rgb(level, level, level)
}

/// Render one placeholder block filling `area`
pub fn render_skeleton_block(frame: &mut Frame, area: Rect, intensity: f32) {
    let color = shimmer_color(intensity);
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let fill = vec!["░".repeat(inner_width); inner_height].join("\n");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(fill)
            .style(Style::default().fg(color))
            .block(block),
        area,
    );
}
