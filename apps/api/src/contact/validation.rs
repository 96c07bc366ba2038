use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{AppError, FieldErrors};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// local-part@label(.label)*.tld, with a 2+ letter TLD.
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
        )
        .unwrap()
    })
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.ends_with('.') || email.contains("..") {
        return false;
    }
    email_pattern().is_match(email)
}

/// Body of `POST /api/contact` as received. Fields are type-checked in `validate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// Checks every field and reports all failures at once.
    pub fn validate(self) -> Result<ContactSubmission, AppError> {
        let mut errors = FieldErrors::new();
        let name = errors.string("name", self.name).map(|s| s.trim().to_string());
        let email = errors.string("email", self.email).map(|s| s.trim().to_string());
        let message = errors
            .string("message", self.message)
            .map(|s| s.trim().to_string());

        if name
            .as_ref()
            .is_some_and(|n| n.chars().count() < MIN_NAME_CHARS)
        {
            errors.push(
                "name",
                format!("Name must contain at least {MIN_NAME_CHARS} character(s)"),
            );
        }
        if email.as_ref().is_some_and(|e| !is_valid_email(e)) {
            errors.push("email", "Invalid email");
        }
        if message
            .as_ref()
            .is_some_and(|m| m.chars().count() < MIN_MESSAGE_CHARS)
        {
            errors.push(
                "message",
                format!("Message must contain at least {MIN_MESSAGE_CHARS} character(s)"),
            );
        }

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => errors.into_result(ContactSubmission {
                name,
                email,
                message,
            }),
            _ => Err(AppError::InvalidFields(errors)),
        }
    }
}
