//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, FormPage, PageSettings, TransientKind, View};
use crate::submission::{Submission, SubmissionSink};
use crate::timer::{PageId, TimerEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Modifiers that turn a character key into a command instead of text
const COMMAND_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receiver of successful submissions
    sink: Box<dyn SubmissionSink>,
    /// Settings for newly mounted form pages
    page_settings: PageSettings,
    /// Sender handed to each page's timers
    timer_tx: mpsc::UnboundedSender<TimerEvent>,
    /// Identity for the next mounted page
    next_page_id: PageId,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance showing the configured start route
    pub fn new(
        config: &TuiConfig,
        sink: Box<dyn SubmissionSink>,
        timer_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Result<Self> {
        let start_view = config.start_view()?;
        let mut app = Self {
            state: AppState::default(),
            sink,
            page_settings: config.page_settings(),
            timer_tx,
            next_page_id: 1,
            quit: false,
        };
        if start_view != View::Home {
            app.enter(start_view);
        }
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the current frame is animating and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state
            .form_page
            .as_ref()
            .is_some_and(|page| page.is_loading())
    }

    /// Navigate to a view, remembering the current one
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.enter(view);
    }

    /// Return to the previous view, or the landing page
    pub fn go_back(&mut self) {
        let view = self.state.view_history.pop().unwrap_or(View::Home);
        self.enter(view);
    }

    fn enter(&mut self, view: View) {
        info!("Navigating {} -> {}", self.state.current_view, view);
        // Tear down before mounting so a page never outlives its route
        if let Some(page) = self.state.form_page.take() {
            debug!(
                "Unmounting page {} with {} pending timer(s)",
                page.id,
                page.pending_timers()
            );
        }
        self.state.current_view = view;
        self.state.status_message = None;

        if view == View::DynamicForm {
            let id = self.next_page_id;
            self.next_page_id += 1;
            self.state.form_page = Some(FormPage::mount(
                id,
                self.page_settings,
                self.timer_tx.clone(),
            ));
        }
    }

    /// Unmount everything before exit
    pub fn shutdown(&mut self) {
        self.state.form_page = None;
    }

    /// Apply a timer expiry from the main loop
    pub fn handle_timer(&mut self, event: TimerEvent) {
        match self.state.form_page.as_mut() {
            Some(page) if page.id == event.page => {
                let lowered = page.on_timer(event.kind, event.generation);
                if lowered && event.kind == TransientKind::Alert {
                    self.state.status_message = None;
                }
            }
            _ => debug!(
                "Dropping {:?} expiry for unmounted page {}",
                event.kind, event.page
            ),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::DynamicForm => self.handle_form_key(key),
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('f') => self.navigate(View::DynamicForm),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(page) = self.state.form_page.as_mut() else {
            return;
        };

        // Only Esc is live while the skeleton is showing
        if page.is_loading() {
            if key.code == KeyCode::Esc {
                self.go_back();
            }
            return;
        }

        match key.code {
            KeyCode::Esc if page.is_alert_visible() => {
                page.dismiss_alert();
                self.state.status_message = None;
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                page.reset();
                self.state.status_message = None;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => page.focus_next(),
            KeyCode::BackTab | KeyCode::Up => page.focus_prev(),
            KeyCode::Backspace => page.backspace(),
            KeyCode::Char(c) if !key.modifiers.intersects(COMMAND_MODIFIERS) => page.input_char(c),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let Some(page) = self.state.form_page.as_mut() else {
            return;
        };
        // A rejected submit stays silent; field feedback comes from touched flags
        if let Some(values) = page.submit() {
            let submission = Submission::new(values);
            self.sink.record(&submission);
            self.state.status_message = Some(format!("Submitted {}", submission.id));
        }
    }
}
