use serde::{Deserialize, Serialize};

use crate::session::User;

/// Raw field values as entered, before any validation.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfileFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}

impl ProfileFormData {
    /// Starts a form from the user currently held in the session. Password
    /// fields are always left blank.
    pub fn prefilled(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    pub fn changes_password(&self) -> bool {
        !self.old_password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefill_copies_identity_and_blanks_passwords() {
        let user: User = serde_json::from_str(
            r#"{"id":"f1","name":"Ana","email":"ana@example.com","avatar_url":null}"#,
        )
        .expect("user should parse");

        let form = ProfileFormData::prefilled(&user);
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@example.com");
        assert!(form.old_password.is_empty());
        assert!(!form.changes_password());
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let form: ProfileFormData =
            serde_json::from_str(r#"{"name":"Ana"}"#).expect("form should parse");
        assert_eq!(form.name, "Ana");
        assert!(form.email.is_empty());
        assert!(form.password_confirmation.is_empty());
    }
}
