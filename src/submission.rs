//! Diagnostic output for successful form submissions

use crate::state::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Record of one successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }
}

/// Receiver of submission records, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send {
    fn record(&mut self, submission: &Submission);
}

/// Logs each submission as a JSON payload through `tracing`
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&mut self, submission: &Submission) {
        match serde_json::to_string(&submission.values) {
            Ok(payload) => info!(
                submission_id = %submission.id,
                submitted_at = %submission.submitted_at,
                "Form Submitted: {payload}"
            ),
            Err(err) => warn!("Failed to serialize submission {}: {err}", submission.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values() -> FormValues {
        FormValues {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
            number: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_new_submissions_get_distinct_ids() {
        let a = Submission::new(values());
        let b = Submission::new(values());
        assert_ne!(a.id, b.id);
        assert_eq!(a.values, b.values);
    }

    #[test]
    fn test_values_serialize_with_field_keys() {
        let json = serde_json::to_value(values()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Al",
                "email": "al@example.com",
                "number": "1234567890",
            })
        );
    }

    #[test]
    fn test_submission_round_trips_through_json() {
        let submission = Submission::new(values());
        let json = serde_json::to_string(&submission).unwrap();
        let parsed: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, submission);
    }

    #[test]
    fn test_tracing_sink_accepts_records() {
        let mut sink = TracingSink;
        sink.record(&Submission::new(values()));
    }

    #[test]
    fn test_mock_sink_sees_values() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record()
            .withf(|s| s.values.name == "Al")
            .times(1)
            .return_const(());
        sink.record(&Submission::new(values()));
    }
}
