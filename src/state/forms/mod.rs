//! Form domain layer
//!
//! Field metadata, ordered validation rules, the form record with its
//! reducer, and keyboard focus.

mod field;
mod focus;
mod form_state;
mod rules;

pub use field::{FieldName, FieldStatus};
pub use focus::FormFocus;
pub use form_state::{reduce, FormEvent, FormOptions, FormOutcome, FormState, FormValues};
