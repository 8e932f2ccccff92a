//! Configuration handling for the TUI

use crate::state::{FormOptions, PageSettings, RouteError, View};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default loading skeleton duration
pub const DEFAULT_LOADING_DELAY_MS: u64 = 3000;
/// Default success alert duration
pub const DEFAULT_ALERT_DURATION_MS: u64 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{0}` must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("invalid `start_route`: {0}")]
    StartRoute(#[from] RouteError),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How long the loading skeleton is shown after the form mounts
    pub loading_delay_ms: Option<u64>,
    /// How long the success alert stays visible
    pub alert_duration_ms: Option<u64>,
    /// Mark all fields touched when a submit attempt fails
    pub touch_all_on_submit: Option<bool>,
    /// Route shown at startup (`/` or `/dynamicform`)
    pub start_route: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "dynform", "dynform-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for log files
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                config.validate()?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Reject values the app cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loading_delay_ms == Some(0) {
            return Err(ConfigError::ZeroDuration("loading_delay_ms"));
        }
        if self.alert_duration_ms == Some(0) {
            return Err(ConfigError::ZeroDuration("alert_duration_ms"));
        }
        self.start_view()?;
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms.unwrap_or(DEFAULT_LOADING_DELAY_MS))
    }

    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms.unwrap_or(DEFAULT_ALERT_DURATION_MS))
    }

    pub fn start_view(&self) -> Result<View, RouteError> {
        match &self.start_route {
            Some(route) => route.parse(),
            None => Ok(View::Home),
        }
    }

    /// Settings applied to every mounted form page
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            loading_delay: self.loading_delay(),
            alert_duration: self.alert_duration(),
            form: FormOptions {
                touch_all_on_submit: self.touch_all_on_submit.unwrap_or(false),
            },
        }
    }
}
