use std::fs;

use serde::{Deserialize, Serialize};

use crate::config::AppPaths;
use crate::error::{AppError, AppResult};

use super::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub token: String,
    pub user: User,
}

pub trait SessionStore {
    fn load(&self, account: &str) -> AppResult<Option<UserSession>>;
    fn save(&self, account: &str, session: &UserSession) -> AppResult<()>;
    fn clear(&self, account: &str) -> AppResult<()>;

    /// Swaps the stored user, keeping the token.
    fn replace_user(&self, account: &str, user: User) -> AppResult<()> {
        let mut session = self.load(account)?.ok_or_else(|| {
            AppError::Session(format!(
                "no session stored for account `{account}`. run `profilectl session import`"
            ))
        })?;
        session.user = user;
        self.save(account, &session)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn load(&self, account: &str) -> AppResult<Option<UserSession>> {
        (**self).load(account)
    }

    fn save(&self, account: &str, session: &UserSession) -> AppResult<()> {
        (**self).save(account, session)
    }

    fn clear(&self, account: &str) -> AppResult<()> {
        (**self).clear(account)
    }

    fn replace_user(&self, account: &str, user: User) -> AppResult<()> {
        (**self).replace_user(account, user)
    }
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    paths: AppPaths,
}

impl FileSessionStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, account: &str) -> AppResult<Option<UserSession>> {
        let path = self.paths.session_file(account);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    fn save(&self, account: &str, session: &UserSession) -> AppResult<()> {
        let path = self.paths.session_file(account);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write then rename so readers never see a half-written session.
        let staging = path.with_extension("json.tmp");
        let payload = serde_json::to_string_pretty(session)?;
        fs::write(&staging, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&staging)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&staging, perms)?;
        }

        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn clear(&self, account: &str) -> AppResult<()> {
        let path = self.paths.session_file(account);
        if path.exists() {
            fs::remove_file(path)?;
        }

        Ok(())
    }
}
