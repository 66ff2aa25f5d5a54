use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

use crate::config;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The `name` attribute of the input.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    NameRequired,
    #[error("Please keep your name within 50 characters.")]
    NameTooLong,
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please enter a message.")]
    MessageRequired,
    #[error("Please keep your message within 1000 characters.")]
    MessageTooLong,
}

impl ValidationError {
    pub fn field(self) -> FormField {
        match self {
            ValidationError::NameRequired | ValidationError::NameTooLong => FormField::Name,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => FormField::Email,
            ValidationError::MessageRequired | ValidationError::MessageTooLong => FormField::Message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

// Browsers also strip the byte order mark when trimming input.
fn trim_input(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

impl ContactFields {
    pub fn new(name: &str, email: &str, company: &str, message: &str) -> Self {
        Self {
            name: trim_input(name),
            email: trim_input(email),
            company: trim_input(company),
            message: trim_input(message),
        }
    }

    pub fn from_form(data: &FormData) -> Self {
        let field = |key: &str| data.get(key).as_string().unwrap_or_default();
        Self::new(&field("name"), &field("email"), &field("company"), &field("message"))
    }
}

// Lengths are measured the way the browser measures input length.
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Checks the fields in display order and reports the first problem found.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if fields.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if input_len(&fields.name) > config::NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if fields.email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(&fields.email) {
        return Err(ValidationError::EmailInvalid);
    }
    if fields.message.is_empty() {
        return Err(ValidationError::MessageRequired);
    }
    if input_len(&fields.message) > config::MESSAGE_MAX_LEN {
        return Err(ValidationError::MessageTooLong);
    }
    Ok(())
}
