//! Dynamic form view: skeleton while loading, then the inputs

use super::components::{
    button_width, render_alert, render_button, render_skeleton_block, ALERT_HEIGHT, BUTTON_HEIGHT,
};
use super::forms::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, FormPage, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

const SUBMIT_LABEL: &str = "Submit";
/// Form column never grows wider than this
const MAX_FORM_WIDTH: u16 = 60;

/// Draw the dynamic form page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.state.form_page.as_ref() else {
        return;
    };

    // The frame turns green once the form has been submitted successfully
    let frame_color = if page.form.validated {
        Color::Green
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(frame_color))
        .title(format!(" {} ", View::DynamicForm.title()))
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let column = centered_column(inner);
    if page.is_loading() {
        draw_skeleton(frame, column, page.skeleton.intensity());
    } else {
        draw_inputs(frame, column, page);
    }
}

fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_FORM_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1.min(area.height),
        width,
        height: area.height.saturating_sub(1),
    }
}

/// Three field placeholders and a narrow button placeholder
fn draw_skeleton(frame: &mut Frame, area: Rect, intensity: f32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    for chunk in &chunks[..3] {
        let field_area = Rect {
            height: chunk.height.saturating_sub(1),
            ..*chunk
        };
        render_skeleton_block(frame, field_area, intensity);
    }

    let button_area = Rect {
        width: button_width(SUBMIT_LABEL).min(chunks[3].width),
        ..chunks[3]
    };
    render_skeleton_block(frame, button_area, intensity);
}

fn draw_inputs(frame: &mut Frame, area: Rect, page: &FormPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(ALERT_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    for (field, chunk) in FieldName::ALL.into_iter().zip(chunks.iter()) {
        draw_field(
            frame,
            *chunk,
            field,
            page.form.values.get(field),
            page.form.field_status(field),
            page.form.visible_error(field),
            page.is_focused(field),
        );
    }

    let button_area = Rect {
        width: button_width(SUBMIT_LABEL).min(chunks[3].width),
        ..chunks[3]
    };
    render_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        page.focus.is_submit_button(),
    );

    if let Some(alert) = page.transient.visible_alert() {
        render_alert(frame, chunks[4], alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PageSettings, TransientKind, SUCCESS_MESSAGE};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn render(page: &FormPage) -> String {
        render_with(|frame| draw_inputs(frame, frame.area(), page))
    }

    fn render_with(draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(70, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_page() -> FormPage {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut page = FormPage::mount(1, PageSettings::default(), tx);
        let generation = page.transient.loading.generation();
        page.on_timer(TransientKind::Loading, generation);
        page
    }

    #[tokio::test]
    async fn test_renders_skeleton_while_loading() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let page = FormPage::mount(1, PageSettings::default(), tx);
        assert!(page.is_loading());

        let screen = render_with(|frame| draw_skeleton(frame, frame.area(), page.skeleton.intensity()));
        let filled_rows = screen.lines().filter(|row| row.contains('░')).count();
        // One inner row per field block plus one for the button block
        assert_eq!(filled_rows, 4);
        assert!(!screen.contains("Email address"));
        assert!(!screen.contains(SUBMIT_LABEL));
    }

    #[tokio::test]
    async fn test_renders_labels_and_placeholders() {
        let page = loaded_page();
        let screen = render(&page);
        assert!(screen.contains("Name"));
        assert!(screen.contains("Email address"));
        assert!(screen.contains("Enter Your Email ..."));
        assert!(screen.contains(SUBMIT_LABEL));
        assert!(!screen.contains(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_renders_visible_error_and_alert() {
        let mut page = loaded_page();
        page.focus_next();
        let screen = render(&page);
        assert!(screen.contains("Enter your name"));

        page.focus = Default::default();
        for c in "Al".chars() {
            page.input_char(c);
        }
        page.focus_next();
        for c in "al@example.com".chars() {
            page.input_char(c);
        }
        page.focus_next();
        for c in "1234567890".chars() {
            page.input_char(c);
        }
        assert!(page.submit().is_some());
        assert!(render(&page).contains(SUCCESS_MESSAGE));
    }
}
