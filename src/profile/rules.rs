//! Field rules for the profile form.
//!
//! Every rule is evaluated on every submission; a field keeps the message of
//! its first failing rule in [`RULES`] order.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::form::ProfileFormData;
use super::messages::Messages;

pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    OldPassword,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::OldPassword => "old_password",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message, in form order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn record(&mut self, field: Field, message: &str) {
        self.0
            .entry(field)
            .or_insert_with(|| message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A form that passed every rule. `name` and `email` are trimmed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidProfile {
    form: ProfileFormData,
}

impl ValidProfile {
    pub fn name(&self) -> &str {
        &self.form.name
    }

    pub fn email(&self) -> &str {
        &self.form.email
    }

    pub fn old_password(&self) -> &str {
        &self.form.old_password
    }

    pub fn password(&self) -> &str {
        &self.form.password
    }

    pub fn password_confirmation(&self) -> &str {
        &self.form.password_confirmation
    }

    pub fn changes_password(&self) -> bool {
        self.form.changes_password()
    }
}

type Check = fn(&ProfileFormData, &Messages) -> Option<&'static str>;

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    check: Check,
}

impl FieldRule {
    pub fn evaluate(&self, form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
        (self.check)(form, messages)
    }
}

pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        check: name_required,
    },
    FieldRule {
        field: Field::Email,
        check: email_required,
    },
    FieldRule {
        field: Field::Email,
        check: email_format,
    },
    FieldRule {
        field: Field::Password,
        check: password_required,
    },
    FieldRule {
        field: Field::Password,
        check: password_min_length,
    },
    FieldRule {
        field: Field::PasswordConfirmation,
        check: confirmation_required,
    },
    FieldRule {
        field: Field::PasswordConfirmation,
        check: confirmation_min_length,
    },
    FieldRule {
        field: Field::PasswordConfirmation,
        check: confirmation_matches,
    },
];

pub fn validate(
    form: &ProfileFormData,
    messages: &Messages,
) -> Result<ValidProfile, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for rule in RULES {
        if let Some(message) = rule.evaluate(form, messages) {
            errors.record(rule.field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidProfile {
        form: ProfileFormData {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            ..form.clone()
        },
    })
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email)
}

fn name_required(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    form.name
        .trim()
        .is_empty()
        .then_some(messages.name_required)
}

fn email_required(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    form.email
        .trim()
        .is_empty()
        .then_some(messages.email_required)
}

fn email_format(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    let email = form.email.trim();
    if email.is_empty() || is_valid_email(email) {
        return None;
    }

    Some(messages.email_invalid)
}

fn password_required(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    required_when_changing(form, &form.password, messages)
}

fn password_min_length(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    min_length_when_changing(form, &form.password, messages)
}

fn confirmation_required(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    required_when_changing(form, &form.password_confirmation, messages)
}

fn confirmation_min_length(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    min_length_when_changing(form, &form.password_confirmation, messages)
}

fn confirmation_matches(form: &ProfileFormData, messages: &Messages) -> Option<&'static str> {
    (form.password_confirmation != form.password).then_some(messages.confirmation_mismatch)
}

fn required_when_changing(
    form: &ProfileFormData,
    value: &str,
    messages: &Messages,
) -> Option<&'static str> {
    (form.changes_password() && value.is_empty()).then_some(messages.field_required)
}

fn min_length_when_changing(
    form: &ProfileFormData,
    value: &str,
    messages: &Messages,
) -> Option<&'static str> {
    if !form.changes_password() || value.is_empty() {
        return None;
    }

    (value.chars().count() < PASSWORD_MIN_CHARS).then_some(messages.password_too_short)
}
