//! Form state record and reducer
//!
//! `FormState` is replaced wholesale on every update: `reduce` takes the
//! current record and an event and returns the next record plus an optional
//! outcome. Validation errors are never stored; they are derived from the
//! current values whenever they are queried.

use super::field::{FieldName, FieldStatus};
use super::rules::validate;
use serde::{Deserialize, Serialize};

/// Current raw value of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub number: String,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Number => &self.number,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Number => self.number = value,
        }
    }
}

/// Per-field touched flags; a flag only goes back to false on reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFlags {
    pub name: bool,
    pub email: bool,
    pub number: bool,
}

impl TouchedFlags {
    pub fn get(&self, field: FieldName) -> bool {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Number => self.number,
        }
    }

    fn touch(&mut self, field: FieldName) {
        match field {
            FieldName::Name => self.name = true,
            FieldName::Email => self.email = true,
            FieldName::Number => self.number = true,
        }
    }

    fn all() -> Self {
        Self {
            name: true,
            email: true,
            number: true,
        }
    }
}

/// Derived error messages, one optional message per field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub number: Option<&'static str>,
}

impl ValidationErrors {
    pub fn of(values: &FormValues) -> Self {
        Self {
            name: validate(FieldName::Name, &values.name),
            email: validate(FieldName::Email, &values.email),
            number: validate(FieldName::Number, &values.number),
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Number => self.number,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.number.is_none()
    }

    /// Fields that currently fail validation, in display order
    pub fn failing_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }
}

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetFieldValue(FieldName, String),
    MarkTouched(FieldName),
    Submit,
    Reset,
}

/// Side-effect requests produced by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// All fields passed; carries the values as they were when submitted
    Submitted(FormValues),
    /// At least one field failed; nothing else happens at the state level
    Rejected(Vec<FieldName>),
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub outcome: Option<FormOutcome>,
}

/// Reducer behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormOptions {
    /// Mark every field touched when a submit attempt fails
    pub touch_all_on_submit: bool,
}

/// Immutable-per-update form record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub touched: TouchedFlags,
    /// Set after the first successful submit
    pub validated: bool,
    pub options: FormOptions,
}

impl FormState {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Errors for the whole form, recomputed from the current values
    pub fn errors(&self) -> ValidationErrors {
        ValidationErrors::of(&self.values)
    }

    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        validate(field, self.values.get(field))
    }

    /// Message to show inline, only once the field has been touched
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        if self.touched.get(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn field_status(&self, field: FieldName) -> FieldStatus {
        if !self.touched.get(field) {
            FieldStatus::Untouched
        } else if self.error(field).is_some() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        }
    }
}

/// Apply one event to a form record
pub fn reduce(state: &FormState, event: FormEvent) -> Transition {
    let mut next = state.clone();
    let outcome = match event {
        FormEvent::SetFieldValue(field, value) => {
            next.values.set(field, value);
            None
        }
        FormEvent::MarkTouched(field) => {
            next.touched.touch(field);
            None
        }
        FormEvent::Submit => {
            let errors = state.errors();
            if errors.is_empty() {
                let submitted = std::mem::take(&mut next.values);
                next.touched = TouchedFlags::default();
                next.validated = true;
                Some(FormOutcome::Submitted(submitted))
            } else {
                if state.options.touch_all_on_submit {
                    next.touched = TouchedFlags::all();
                }
                Some(FormOutcome::Rejected(errors.failing_fields()))
            }
        }
        FormEvent::Reset => {
            next.values = FormValues::default();
            next.touched = TouchedFlags::default();
            None
        }
    };
    Transition {
        state: next,
        outcome,
    }
}
