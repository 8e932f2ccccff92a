//! Time-boxed UI flags (loading skeleton, success alert)

/// A boolean that is raised by an event and lowered by a timer expiry.
///
/// Every raise bumps the generation. An expiry only lowers the flag when it
/// carries the current generation, so expiries from superseded or cancelled
/// timers are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransientFlag {
    visible: bool,
    generation: u64,
}

impl TransientFlag {
    /// A flag that starts raised at generation 1
    pub fn raised() -> Self {
        Self {
            visible: true,
            generation: 1,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raise the flag and return the generation its expiry must carry
    pub fn raise(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    /// Lower the flag if `generation` is current; returns whether it changed
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    /// Lower immediately, invalidating any pending expiry
    pub fn clear(&mut self) {
        self.generation += 1;
        self.visible = false;
    }
}

/// Visual style of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
}

/// Alert message and style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub variant: AlertVariant,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: AlertVariant::Success,
        }
    }
}

/// Which transient flag a timer drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransientKind {
    Loading,
    Alert,
}

/// Transient state owned by one mounted form page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientUiState {
    pub loading: TransientFlag,
    pub alert_visible: TransientFlag,
    /// Last alert content; kept after hiding so a re-raise can reuse it
    pub alert: Option<Alert>,
}

impl Default for TransientUiState {
    fn default() -> Self {
        Self {
            loading: TransientFlag::raised(),
            alert_visible: TransientFlag::default(),
            alert: None,
        }
    }
}

impl TransientUiState {
    pub fn is_loading(&self) -> bool {
        self.loading.is_visible()
    }

    /// The alert to render, if it is currently visible
    pub fn visible_alert(&self) -> Option<&Alert> {
        if self.alert_visible.is_visible() {
            self.alert.as_ref()
        } else {
            None
        }
    }

    /// Show an alert and return the generation for its dismiss timer
    pub fn show_alert(&mut self, alert: Alert) -> u64 {
        self.alert = Some(alert);
        self.alert_visible.raise()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_visible.clear();
    }

    /// Apply a timer expiry; returns whether anything changed
    pub fn expire(&mut self, kind: TransientKind, generation: u64) -> bool {
        match kind {
            TransientKind::Loading => self.loading.expire(generation),
            TransientKind::Alert => self.alert_visible.expire(generation),
        }
    }
}
