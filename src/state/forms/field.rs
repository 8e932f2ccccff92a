//! Form field identifiers and display metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named scalar input of the dynamic form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Number,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Number];

    /// Key used in submission records and logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Number => "number",
        }
    }

    /// Label rendered in the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email address",
            Self::Number => "Number",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter Your Name ...",
            Self::Email => "Enter Your Email ...",
            Self::Number => "Enter Your Number...",
        }
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Number => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Visual validity of a field, derived from touched flag and error presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not yet blurred
    Untouched,
    Valid,
    Invalid,
}
