//! Form model: controls with declarative validation rules.
//!
//! A [`Control`] holds one field's value, its touched flag, and the rules it
//! must satisfy. Validity is always recomputed from the current value, so
//! there is no stored "valid" flag to drift.
//!
//! Format rules (`Email`, `MinLength`) accept an empty value; emptiness is
//! reported only by `Required`. A required-but-empty email therefore reports
//! a single error rather than two.

pub mod composer;
pub mod sign_up;

pub use composer::compose_birth_date;
pub use sign_up::{CalendarCheck, Field, Listener, SignUpForm};

use shopfront_core::is_valid_email;

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must be a syntactically valid email address.
    Email,
    /// Value must have at least this many characters.
    MinLength(usize),
}

/// A rule a control's value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    Email,
    MinLength { required: usize, actual: usize },
}

impl ValidationError {
    /// Human-readable message for display next to the field.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Required => "This field is required".to_string(),
            Self::Email => "Enter a valid email address".to_string(),
            Self::MinLength { required, .. } => {
                format!("Must be at least {required} characters")
            }
        }
    }
}

impl Rule {
    /// Check `value` against this rule.
    #[must_use]
    pub fn check(self, value: &str) -> Option<ValidationError> {
        match self {
            Self::Required => value.is_empty().then_some(ValidationError::Required),
            Self::Email => {
                (!value.is_empty() && !is_valid_email(value)).then_some(ValidationError::Email)
            }
            Self::MinLength(required) => {
                let actual = value.chars().count();
                (actual > 0 && actual < required)
                    .then_some(ValidationError::MinLength { required, actual })
            }
        }
    }
}

/// A single editable field.
#[derive(Debug, Clone)]
pub struct Control {
    value: String,
    touched: bool,
    rules: &'static [Rule],
}

impl Control {
    /// Create an empty, untouched control.
    #[must_use]
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self {
            value: String::new(),
            touched: false,
            rules,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value without notifying anyone.
    ///
    /// Form-level changes go through [`SignUpForm::set_value`] so listeners run.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub const fn touched(&self) -> bool {
        self.touched
    }

    pub const fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub const fn mark_as_untouched(&mut self) {
        self.touched = false;
    }

    /// Every rule the current value fails, in rule order.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(&self.value))
            .collect()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(|rule| rule.check(&self.value).is_none())
    }

    /// Empty the value and clear the touched flag.
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
    const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(8)];

    #[test]
    fn test_required() {
        assert_eq!(Rule::Required.check(""), Some(ValidationError::Required));
        assert_eq!(Rule::Required.check("x"), None);
    }

    #[test]
    fn test_empty_email_reports_only_required() {
        let control = Control::new(EMAIL_RULES);
        assert_eq!(control.errors(), vec![ValidationError::Required]);
        assert!(!control.is_valid());
    }

    #[test]
    fn test_email_format() {
        let mut control = Control::new(EMAIL_RULES);
        control.set_value("not-an-email");
        assert_eq!(control.errors(), vec![ValidationError::Email]);

        control.set_value("ada@example.com");
        assert!(control.is_valid());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let mut control = Control::new(PASSWORD_RULES);
        control.set_value("short");
        assert_eq!(
            control.errors(),
            vec![ValidationError::MinLength {
                required: 8,
                actual: 5
            }]
        );

        // 8 characters, more than 8 bytes.
        control.set_value("pässwörd");
        assert!(control.is_valid());
    }

    #[test]
    fn test_touched_flag_and_reset() {
        let mut control = Control::new(PASSWORD_RULES);
        assert!(!control.touched());

        control.set_value("long enough");
        control.mark_as_touched();
        assert!(control.touched());

        control.reset();
        assert_eq!(control.value(), "");
        assert!(!control.touched());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MinLength {
                required: 8,
                actual: 3
            }
            .message(),
            "Must be at least 8 characters"
        );
        assert_eq!(ValidationError::Required.message(), "This field is required");
    }
}
