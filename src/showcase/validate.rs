// SPDX-License-Identifier: MPL-2.0
//! Pure field predicates for the consultation form.
//!
//! Each rule set is evaluated against the raw field text and reports the
//! first violated rule, in the same order the page checked them: required,
//! then shape (email/phone), then minimum length. Shape checks only apply
//! to non-empty values so optional fields stay valid while blank.

use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("literal regex compiles"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d\s+()-]{10,15}$").expect("literal regex compiles"))
}

/// Shape constraint of a field beyond emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
}

/// Validation rules attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
}

/// The first rule a value violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    EmailShape,
    PhoneShape,
    MinLength(usize),
}

impl FieldError {
    /// i18n key for the inline error message.
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::Required => "form-error-required",
            FieldError::EmailShape => "form-error-email",
            FieldError::PhoneShape => "form-error-phone",
            FieldError::MinLength(_) => "form-error-min-length",
        }
    }
}

/// Validates a raw field value against its rules.
pub fn validate(value: &str, rules: FieldRules) -> Result<(), FieldError> {
    let trimmed = value.trim();

    if rules.required && trimmed.is_empty() {
        return Err(FieldError::Required);
    }

    if !value.is_empty() {
        match rules.kind {
            FieldKind::Email if !email_regex().is_match(value) => {
                return Err(FieldError::EmailShape);
            }
            FieldKind::Phone if !phone_regex().is_match(value) => {
                return Err(FieldError::PhoneShape);
            }
            _ => {}
        }
    }

    if let Some(min) = rules.min_length {
        if !trimmed.is_empty() && value.chars().count() < min {
            return Err(FieldError::MinLength(min));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: FieldRules = FieldRules {
        required: true,
        kind: FieldKind::Text,
        min_length: None,
    };

    const EMAIL: FieldRules = FieldRules {
        required: true,
        kind: FieldKind::Email,
        min_length: None,
    };

    const OPTIONAL_PHONE: FieldRules = FieldRules {
        required: false,
        kind: FieldKind::Phone,
        min_length: None,
    };

    const MESSAGE: FieldRules = FieldRules {
        required: true,
        kind: FieldKind::Text,
        min_length: Some(10),
    };

    #[test]
    fn required_rejects_empty_and_whitespace() {
        assert_eq!(validate("", REQUIRED), Err(FieldError::Required));
        assert_eq!(validate("   ", REQUIRED), Err(FieldError::Required));
        assert_eq!(validate("Nadia", REQUIRED), Ok(()));
    }

    #[test]
    fn email_shape_needs_user_host_and_tld() {
        assert_eq!(validate("a@b", EMAIL), Err(FieldError::EmailShape));
        assert_eq!(validate("a@b.com", EMAIL), Ok(()));
        assert_eq!(validate("a b@c.com", EMAIL), Err(FieldError::EmailShape));
        assert_eq!(validate("a@b@c.com", EMAIL), Err(FieldError::EmailShape));
    }

    #[test]
    fn empty_optional_phone_is_valid() {
        assert_eq!(validate("", OPTIONAL_PHONE), Ok(()));
    }

    #[test]
    fn phone_shape_accepts_digits_and_punctuation() {
        assert_eq!(validate("+33 142685300", OPTIONAL_PHONE), Ok(()));
        assert_eq!(validate("(555) 867-5309", OPTIONAL_PHONE), Ok(()));
    }

    #[test]
    fn phone_shape_rejects_letters_and_bad_lengths() {
        assert_eq!(
            validate("call me", OPTIONAL_PHONE),
            Err(FieldError::PhoneShape)
        );
        assert_eq!(
            validate("123", OPTIONAL_PHONE),
            Err(FieldError::PhoneShape)
        );
        assert_eq!(
            validate("1234567890123456", OPTIONAL_PHONE),
            Err(FieldError::PhoneShape)
        );
    }

    #[test]
    fn min_length_counts_characters() {
        assert_eq!(validate("too short", MESSAGE), Err(FieldError::MinLength(10)));
        assert_eq!(validate("just long enough", MESSAGE), Ok(()));
    }

    #[test]
    fn required_wins_over_min_length() {
        assert_eq!(validate("", MESSAGE), Err(FieldError::Required));
    }

    #[test]
    fn error_message_keys_are_stable() {
        assert_eq!(FieldError::Required.message_key(), "form-error-required");
        assert_eq!(
            FieldError::MinLength(10).message_key(),
            "form-error-min-length"
        );
    }
}
