//! Keyboard focus within the dynamic form

use super::field::FieldName;

/// Number of focus stops: three fields plus the submit button
const FOCUS_STOPS: usize = 4;

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FieldName::Name)
    }
}

impl FormFocus {
    fn index(&self) -> usize {
        match self {
            Self::Field(field) => field.index(),
            Self::SubmitButton => FOCUS_STOPS - 1,
        }
    }

    fn from_index(index: usize) -> Self {
        FieldName::from_index(index)
            .map(Self::Field)
            .unwrap_or(Self::SubmitButton)
    }

    /// Next focus stop, wrapping from the button back to the first field
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % FOCUS_STOPS)
    }

    /// Previous focus stop, wrapping from the first field to the button
    pub fn prev(&self) -> Self {
        if self.index() == 0 {
            Self::from_index(FOCUS_STOPS - 1)
        } else {
            Self::from_index(self.index() - 1)
        }
    }

    /// The field being edited, if focus is on a field
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Field(field) => Some(*field),
            Self::SubmitButton => None,
        }
    }

    pub fn is_submit_button(&self) -> bool {
        matches!(self, Self::SubmitButton)
    }
}
