//! Application state definitions

use super::form_page::FormPage;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page (`/`)
    #[default]
    Home,
    /// The dynamic form (`/dynamicform`)
    DynamicForm,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::DynamicForm => "/dynamicform",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::DynamicForm => "Dynamic form with validation",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route `{0}`")]
    Unknown(String),
}

impl FromStr for View {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Trailing slashes are tolerated, as a browser router would
        let trimmed = s.trim();
        let path = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        match path {
            "/" => Ok(View::Home),
            "/dynamicform" => Ok(View::DynamicForm),
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    /// Mounted form page; `Some` exactly while `current_view` is `DynamicForm`
    pub form_page: Option<FormPage>,

    // UI state
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod routes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_known_routes() {
            assert_eq!("/".parse::<View>(), Ok(View::Home));
            assert_eq!("/dynamicform".parse::<View>(), Ok(View::DynamicForm));
        }

        #[test]
        fn test_parse_tolerates_trailing_slash() {
            assert_eq!("/dynamicform/".parse::<View>(), Ok(View::DynamicForm));
            assert_eq!("//".parse::<View>(), Ok(View::Home));
        }

        #[test]
        fn test_parse_unknown_route() {
            assert_eq!(
                "/settings".parse::<View>(),
                Err(RouteError::Unknown("/settings".to_string()))
            );
            assert!("dynamicform".parse::<View>().is_err());
            assert!("".parse::<View>().is_err());
        }

        #[test]
        fn test_path_round_trips() {
            for view in [View::Home, View::DynamicForm] {
                assert_eq!(view.path().parse::<View>(), Ok(view));
            }
        }

        #[test]
        fn test_route_error_message() {
            let err = RouteError::Unknown("/x".to_string());
            assert_eq!(err.to_string(), "unknown route `/x`");
        }
    }

    #[test]
    fn test_default_state_is_home_without_page() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(state.form_page.is_none());
        assert!(state.view_history.is_empty());
    }
}
