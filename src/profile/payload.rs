use serde::Serialize;

use super::rules::ValidProfile;

/// Body of the profile update request. Password fields travel together or
/// not at all.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdatePayload {
    Basic {
        name: String,
        email: String,
    },
    WithPasswordChange {
        name: String,
        email: String,
        old_password: String,
        password: String,
        password_confirmation: String,
    },
}

impl UpdatePayload {
    pub fn from_valid(profile: &ValidProfile) -> Self {
        let name = profile.name().to_string();
        let email = profile.email().to_string();

        if !profile.changes_password() {
            return UpdatePayload::Basic { name, email };
        }

        UpdatePayload::WithPasswordChange {
            name,
            email,
            old_password: profile.old_password().to_string(),
            password: profile.password().to_string(),
            password_confirmation: profile.password_confirmation().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UpdatePayload::Basic { name, .. } | UpdatePayload::WithPasswordChange { name, .. } => {
                name
            }
        }
    }

    pub fn email(&self) -> &str {
        match self {
            UpdatePayload::Basic { email, .. }
            | UpdatePayload::WithPasswordChange { email, .. } => email,
        }
    }

    pub fn changes_password(&self) -> bool {
        matches!(self, UpdatePayload::WithPasswordChange { .. })
    }
}
