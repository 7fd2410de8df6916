//! Declarative field rules applied to raw JSON request bodies.
//!
//! Rules run in order; a field keeps only its first failing message.

use crate::constants::{EMAIL_EMPTY, EMAIL_INVALID, NAME_EMPTY, ROLE_INVALID, TITLE_EMPTY, USER_UUID_EMPTY};
use crate::core::errors::{FieldErrors, PostboardError};
use crate::core::models::Role;
use serde_json::Value;
use validator::ValidateEmail;

#[derive(Clone, Copy, Debug)]
pub enum Check {
    /// Present, a string, and at least one character long
    NotEmpty,
    /// Syntactically valid email address
    Email,
    /// Absent/null, or a string from the allowed set
    OneOfIfPresent(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, check: Check, message: &'static str) -> Self {
        FieldRule { field, check, message }
    }

    fn passes(&self, value: Option<&Value>) -> bool {
        // Missing and non-string values are treated like an empty string.
        let text = value.and_then(Value::as_str).unwrap_or("");
        match self.check {
            Check::NotEmpty => !text.is_empty(),
            Check::Email => is_email(text),
            Check::OneOfIfPresent(allowed) => match value {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => allowed.contains(&s.as_str()),
                Some(_) => false,
            },
        }
    }
}

pub const USER_RULES: &[FieldRule] = &[
    FieldRule::new("email", Check::NotEmpty, EMAIL_EMPTY),
    FieldRule::new("email", Check::Email, EMAIL_INVALID),
    FieldRule::new("name", Check::NotEmpty, NAME_EMPTY),
    FieldRule::new("role", Check::OneOfIfPresent(&Role::NAMES), ROLE_INVALID),
];

pub const POST_RULES: &[FieldRule] = &[
    FieldRule::new("title", Check::NotEmpty, TITLE_EMPTY),
    FieldRule::new("userUuid", Check::NotEmpty, USER_UUID_EMPTY),
];

/// Runs `rules` against `body`, collecting the first failure per field.
pub fn validate(body: &Value, rules: &[FieldRule]) -> Result<(), PostboardError> {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if errors.contains_key(rule.field) {
            continue;
        }
        if !rule.passes(body.get(rule.field)) {
            errors.insert(rule.field.to_string(), rule.message.to_string());
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(PostboardError::Validation(errors))
    }
}

/// Email syntax as `validator` checks it, plus UTF-8 letters before the `@`
/// and a mandatory top-level domain (`ann@localhost` is rejected).
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let ascii_local: String = local
        .chars()
        .map(|c| if !c.is_ascii() && c.is_alphanumeric() { 'a' } else { c })
        .collect();
    format!("{}@{}", ascii_local, domain).validate_email() && has_top_level_domain(domain)
}

fn has_top_level_domain(domain: &str) -> bool {
    domain.rsplit_once('.').is_some_and(|(_, tld)| {
        let tld = tld.to_ascii_lowercase();
        tld.starts_with("xn--") || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
    })
}
