//! Mounted dynamic form page
//!
//! A `FormPage` exists exactly while the router shows `/dynamicform`. It owns
//! the form record, the transient flags and the timers that lower them.
//! Dropping the page cancels its pending timers.

use super::forms::{
    reduce, FieldName, FormEvent, FormFocus, FormOptions, FormOutcome, FormState, FormValues,
};
use super::skeleton_state::SkeletonState;
use super::transient::{Alert, TransientKind, TransientUiState};
use crate::timer::{PageId, TimerEvent, TimerScheduler};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub const SUCCESS_MESSAGE: &str = "Form is submitted Successfully";

/// Timing and reducer settings for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub loading_delay: Duration,
    pub alert_duration: Duration,
    pub form: FormOptions,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            loading_delay: Duration::from_millis(3000),
            alert_duration: Duration::from_millis(3000),
            form: FormOptions::default(),
        }
    }
}

pub struct FormPage {
    pub id: PageId,
    pub form: FormState,
    pub focus: FormFocus,
    pub transient: TransientUiState,
    pub skeleton: SkeletonState,
    settings: PageSettings,
    timers: TimerScheduler,
}

impl FormPage {
    /// Mount a page: start loading and schedule the loading timer
    pub fn mount(
        id: PageId,
        settings: PageSettings,
        timer_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        let transient = TransientUiState::default();
        let mut timers = TimerScheduler::new(id, timer_tx);
        timers.schedule(
            TransientKind::Loading,
            transient.loading.generation(),
            settings.loading_delay,
        );
        info!("Mounted form page {id}");

        Self {
            id,
            form: FormState::new(settings.form),
            focus: FormFocus::default(),
            transient,
            skeleton: SkeletonState::new(),
            settings,
            timers,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.transient.is_loading()
    }

    /// Run an event through the reducer, applying side effects of the outcome.
    ///
    /// Returns the submitted values on a successful submit.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<FormValues> {
        let transition = reduce(&self.form, event);
        self.form = transition.state;

        match transition.outcome {
            Some(FormOutcome::Submitted(values)) => {
                let generation = self.transient.show_alert(Alert::success(SUCCESS_MESSAGE));
                self.timers.schedule(
                    TransientKind::Alert,
                    generation,
                    self.settings.alert_duration,
                );
                self.focus = FormFocus::default();
                Some(values)
            }
            Some(FormOutcome::Rejected(fields)) => {
                debug!("Submit rejected on page {}: invalid {:?}", self.id, fields);
                None
            }
            None => None,
        }
    }

    /// Move focus forward, blurring the field being left
    pub fn focus_next(&mut self) {
        self.blur_current();
        self.focus = self.focus.next();
    }

    /// Move focus backward, blurring the field being left
    pub fn focus_prev(&mut self) {
        self.blur_current();
        self.focus = self.focus.prev();
    }

    fn blur_current(&mut self) {
        if let Some(field) = self.focus.field() {
            self.dispatch(FormEvent::MarkTouched(field));
        }
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            let mut value = self.form.values.get(field).to_string();
            value.push(c);
            self.dispatch(FormEvent::SetFieldValue(field, value));
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            let mut value = self.form.values.get(field).to_string();
            if value.pop().is_some() {
                self.dispatch(FormEvent::SetFieldValue(field, value));
            }
        }
    }

    pub fn submit(&mut self) -> Option<FormValues> {
        self.dispatch(FormEvent::Submit)
    }

    /// Clear values and touched flags without submitting
    pub fn reset(&mut self) {
        self.dispatch(FormEvent::Reset);
        self.focus = FormFocus::default();
    }

    pub fn is_alert_visible(&self) -> bool {
        self.transient.visible_alert().is_some()
    }

    /// Hide the alert now and cancel its dismiss timer
    pub fn dismiss_alert(&mut self) {
        self.transient.dismiss_alert();
        self.timers.cancel(TransientKind::Alert);
    }

    /// Apply a timer expiry addressed to this page; returns whether state changed
    pub fn on_timer(&mut self, kind: TransientKind, generation: u64) -> bool {
        let changed = self.transient.expire(kind, generation);
        if changed {
            debug!("Page {}: {kind:?} flag lowered", self.id);
        } else {
            debug!(
                "Page {}: ignored stale {kind:?} expiry (generation {generation})",
                self.id
            );
        }
        changed
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn is_focused(&self, field: FieldName) -> bool {
        self.focus == FormFocus::Field(field)
    }
}

impl Drop for FormPage {
    fn drop(&mut self) {
        self.timers.cancel_all();
        info!("Unmounted form page {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::advance;

    fn settings() -> PageSettings {
        PageSettings::default()
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn type_str(page: &mut FormPage, text: &str) {
        for c in text.chars() {
            page.input_char(c);
        }
    }

    fn fill_valid(page: &mut FormPage) {
        type_str(page, "Al");
        page.focus_next();
        type_str(page, "al@example.com");
        page.focus_next();
        type_str(page, "1234567890");
    }

    fn drain(page: &mut FormPage, rx: &mut mpsc::UnboundedReceiver<TimerEvent>) {
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event.page, page.id);
            page.on_timer(event.kind, event.generation);
        }
    }

    mod loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_loading_clears_after_delay() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            settle().await;
            assert!(page.is_loading());

            advance(Duration::from_millis(2999)).await;
            settle().await;
            drain(&mut page, &mut rx);
            assert!(page.is_loading());

            advance(Duration::from_millis(1)).await;
            settle().await;
            drain(&mut page, &mut rx);
            assert!(!page.is_loading());
        }

        #[tokio::test(start_paused = true)]
        async fn test_loading_never_retriggers() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            settle().await;
            advance(Duration::from_millis(3000)).await;
            settle().await;
            drain(&mut page, &mut rx);

            let generation = page.transient.loading.generation();
            assert!(!page.on_timer(TransientKind::Loading, generation));
            assert!(!page.is_loading());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_updates_focused_field() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            type_str(&mut page, "Bob");
            assert_eq!(page.form.values.name, "Bob");
            page.backspace();
            assert_eq!(page.form.values.name, "Bo");
        }

        #[tokio::test]
        async fn test_backspace_on_empty_is_noop() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            page.backspace();
            assert_eq!(page.form.values.name, "");
        }

        #[tokio::test]
        async fn test_focus_next_blurs_field() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            assert!(!page.form.touched.name);
            page.focus_next();
            assert!(page.form.touched.name);
            assert!(page.is_focused(FieldName::Email));
            assert_eq!(page.form.visible_error(FieldName::Name), Some("Enter your name"));
        }

        #[tokio::test]
        async fn test_reset_clears_values_and_focus() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            type_str(&mut page, "Bob");
            page.focus_next();
            page.reset();
            assert_eq!(page.form.values, FormValues::default());
            assert!(!page.form.touched.name);
            assert_eq!(page.focus, FormFocus::default());
            assert!(!page.is_alert_visible());
        }

        #[tokio::test]
        async fn test_input_on_button_is_ignored() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            page.focus = FormFocus::SubmitButton;
            page.input_char('x');
            assert_eq!(page.form.values, FormValues::default());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_successful_submit_shows_alert_then_hides() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            settle().await;
            advance(Duration::from_millis(3000)).await;
            settle().await;
            drain(&mut page, &mut rx);

            fill_valid(&mut page);
            let submitted = page.submit();
            assert_eq!(
                submitted,
                Some(FormValues {
                    name: "Al".to_string(),
                    email: "al@example.com".to_string(),
                    number: "1234567890".to_string(),
                })
            );
            assert_eq!(page.form.values, FormValues::default());
            assert!(page.form.validated);
            assert_eq!(page.focus, FormFocus::default());
            assert_eq!(
                page.transient.visible_alert().map(|a| a.message.as_str()),
                Some(SUCCESS_MESSAGE)
            );
            settle().await;

            advance(Duration::from_millis(2999)).await;
            settle().await;
            drain(&mut page, &mut rx);
            assert!(page.is_alert_visible());

            advance(Duration::from_millis(1)).await;
            settle().await;
            drain(&mut page, &mut rx);
            assert!(!page.is_alert_visible());
        }

        #[tokio::test(start_paused = true)]
        async fn test_resubmit_restarts_alert_timer() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            fill_valid(&mut page);
            page.submit();
            settle().await;

            advance(Duration::from_millis(2000)).await;
            settle().await;
            page.focus = FormFocus::default();
            fill_valid(&mut page);
            page.submit();
            settle().await;

            advance(Duration::from_millis(1500)).await;
            settle().await;
            drain(&mut page, &mut rx);
            assert!(page.is_alert_visible());

            advance(Duration::from_millis(1500)).await;
            settle().await;
            drain(&mut page, &mut rx);
            assert!(!page.is_alert_visible());
        }

        #[tokio::test]
        async fn test_invalid_submit_has_no_alert() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            type_str(&mut page, "A");
            page.focus_next();
            type_str(&mut page, "bad");
            page.focus_next();
            type_str(&mut page, "123");

            assert_eq!(page.submit(), None);
            assert!(!page.is_alert_visible());
            assert_eq!(page.form.values.name, "A");

            let errors = page.form.errors();
            assert_eq!(errors.name, Some("Name must be at least 2 characters"));
            assert_eq!(errors.email, Some("Please enter a valid email address"));
            assert_eq!(errors.number, Some("Number must be 10 digits"));
        }

        #[tokio::test(start_paused = true)]
        async fn test_dismiss_cancels_alert_timer() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            settle().await;
            advance(Duration::from_millis(3000)).await;
            settle().await;
            drain(&mut page, &mut rx);

            fill_valid(&mut page);
            page.submit();
            settle().await;
            page.dismiss_alert();
            assert!(!page.is_alert_visible());

            advance(Duration::from_millis(5000)).await;
            settle().await;
            assert!(rx.try_recv().is_err());
            assert_eq!(page.pending_timers(), 0);
        }
    }

    mod teardown {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_drop_while_loading_sends_nothing() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let page = FormPage::mount(1, settings(), tx);
            settle().await;
            assert_eq!(page.pending_timers(), 1);
            drop(page);

            advance(Duration::from_millis(10_000)).await;
            settle().await;
            assert!(rx.try_recv().is_err());
        }

        #[tokio::test(start_paused = true)]
        async fn test_drop_with_alert_pending_sends_nothing() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut page = FormPage::mount(1, settings(), tx);
            fill_valid(&mut page);
            page.submit();
            settle().await;
            assert_eq!(page.pending_timers(), 2);
            drop(page);

            advance(Duration::from_millis(10_000)).await;
            settle().await;
            assert!(rx.try_recv().is_err());
        }
    }
}
