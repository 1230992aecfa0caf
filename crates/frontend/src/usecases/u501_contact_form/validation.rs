//! Contact form rules: input filtering, message counter, submit-time checks.

use chrono::{DateTime, Utc};
use contracts::shared::form_errors::FieldError;

pub const NAME_INPUT_ERROR: &str = "Illegal character: letters and spaces only.";
pub const SUBMIT_ERROR: &str = "The form has errors. Please fix them.";

const REQUIRED: &str = "Please fill out this field.";

/// Name accepts ASCII letters and whitespace only
pub fn is_allowed_name_input(data: &str) -> bool {
    data.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

// ============================================================================
// Message counter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStatus {
    Normal,
    Warn,
    Error,
}

impl CounterStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            CounterStatus::Normal => "counter",
            CounterStatus::Warn => "counter counter--warn",
            CounterStatus::Error => "counter counter--error",
        }
    }
}

/// Characters left; counted in chars, not bytes
pub fn remaining_chars(max_len: usize, message: &str) -> i64 {
    max_len as i64 - message.chars().count() as i64
}

pub fn counter_status(remaining: i64, warn_at: usize) -> CounterStatus {
    if remaining <= 0 {
        CounterStatus::Error
    } else if remaining <= warn_at as i64 {
        CounterStatus::Warn
    } else {
        CounterStatus::Normal
    }
}

pub fn counter_text(remaining: i64) -> String {
    format!("{} characters remaining", remaining)
}

// ============================================================================
// Purpose
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Feedback,
    Question,
    Request,
    Other,
}

impl Purpose {
    pub fn all() -> [Purpose; 4] {
        [
            Purpose::Feedback,
            Purpose::Question,
            Purpose::Request,
            Purpose::Other,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            Purpose::Feedback => "feedback",
            Purpose::Question => "question",
            Purpose::Request => "request",
            Purpose::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Feedback => "Feedback",
            Purpose::Question => "Question",
            Purpose::Request => "Feature Request",
            Purpose::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Purpose::Feedback => {
                "Feedback — Tell me what you think of the site or offer suggestions."
            }
            Purpose::Question => "Question — Ask me something specific. I’ll get back to you soon.",
            Purpose::Request => "Feature Request — Suggest new site sections, tools, or content.",
            Purpose::Other => "Other — Anything that doesn't fit the above categories.",
        }
    }
}

// ============================================================================
// Submit-time validation
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    /// Selected purpose value, empty when nothing is picked
    pub purpose: String,
    pub message: String,
}

/// Check every field in form order. The first error is the field to focus.
pub fn validate_contact(
    values: &ContactValues,
    message_max_len: usize,
    now: DateTime<Utc>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut fail = |field: &str, value: &str, error: String| {
        errors.push(FieldError::new(field, value, error, now));
    };

    if values.name.trim().is_empty() {
        fail("name", &values.name, REQUIRED.to_string());
    } else if !is_allowed_name_input(&values.name) {
        fail("name", &values.name, "Please match the requested format.".to_string());
    }

    if values.email.is_empty() {
        fail("email", &values.email, REQUIRED.to_string());
    } else if !looks_like_email(&values.email) {
        fail(
            "email",
            &values.email,
            format!("Please include a valid email address. '{}' is invalid.", values.email),
        );
    }

    if Purpose::from_value(&values.purpose).is_none() {
        fail("purpose", &values.purpose, "Please select one of these options.".to_string());
    }

    let length = values.message.chars().count();
    if values.message.trim().is_empty() {
        fail("message", &values.message, REQUIRED.to_string());
    } else if length > message_max_len {
        fail(
            "message",
            &values.message,
            format!(
                "Please shorten this text to {} characters or less (you are currently using {} characters).",
                message_max_len, length
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactValues {
        ContactValues {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            purpose: "question".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn test_name_input_filter() {
        assert!(is_allowed_name_input("Ada "));
        assert!(!is_allowed_name_input("4"));
        assert!(!is_allowed_name_input("é"));
        assert!(!is_allowed_name_input("-"));
    }

    #[test]
    fn test_counter_thresholds() {
        assert_eq!(remaining_chars(500, "héllo"), 495);
        assert_eq!(counter_status(51, 50), CounterStatus::Normal);
        assert_eq!(counter_status(50, 50), CounterStatus::Warn);
        assert_eq!(counter_status(1, 50), CounterStatus::Warn);
        assert_eq!(counter_status(0, 50), CounterStatus::Error);
        assert_eq!(counter_text(12), "12 characters remaining");
    }

    #[test]
    fn test_purpose_lookup() {
        assert_eq!(Purpose::from_value("request"), Some(Purpose::Request));
        assert_eq!(Purpose::from_value(""), None);
        assert!(Purpose::Feedback.description().starts_with("Feedback"));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_contact(&valid(), 500, Utc::now()).is_empty());
    }

    #[test]
    fn test_errors_in_form_order() {
        let values = ContactValues {
            name: "R2D2".into(),
            email: "nobody".into(),
            purpose: String::new(),
            message: "x".repeat(11),
        };
        let errors = validate_contact(&values, 10, Utc::now());
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "purpose", "message"]);
        assert_eq!(errors[0].value, "R2D2");
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_contact(&ContactValues::default(), 500, Utc::now());
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.field == "message" && e.error == REQUIRED));
    }
}
