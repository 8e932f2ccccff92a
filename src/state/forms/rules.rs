//! Field validation rules
//!
//! Each field owns an ordered list of rules. Rules are evaluated top to bottom
//! and the first failing rule's message is reported. The leading `required`
//! rule only fails on an empty value, so an empty field always reports its
//! required message and a non-empty field reports its first failing shape rule.

use super::field::FieldName;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("valid email regex")
});

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid number regex"));

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 10;

/// A predicate plus the message reported when it fails
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl Rule {
    const fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }

    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_name_len(value: &str) -> bool {
    value.chars().count() >= NAME_MIN_LEN
}

fn has_max_name_len(value: &str) -> bool {
    value.chars().count() <= NAME_MAX_LEN
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn is_ten_digits(value: &str) -> bool {
    NUMBER_PATTERN.is_match(value)
}

const NAME_RULES: &[Rule] = &[
    Rule::new(is_present, "Enter your name"),
    Rule::new(has_min_name_len, "Name must be at least 2 characters"),
    Rule::new(has_max_name_len, "Name can be up to 10 characters"),
];

const EMAIL_RULES: &[Rule] = &[
    Rule::new(is_present, "Email is required"),
    Rule::new(is_email, "Please enter a valid email address"),
];

const NUMBER_RULES: &[Rule] = &[
    Rule::new(is_present, "Number is required"),
    Rule::new(is_ten_digits, "Number must be 10 digits"),
];

/// Ordered rules for a field
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::Name => NAME_RULES,
        FieldName::Email => EMAIL_RULES,
        FieldName::Number => NUMBER_RULES,
    }
}

/// Validate a raw value, returning the first failing rule's message
pub fn validate(field: FieldName, value: &str) -> Option<&'static str> {
    rules_for(field)
        .iter()
        .find(|rule| !rule.passes(value))
        .map(|rule| rule.message)
}
