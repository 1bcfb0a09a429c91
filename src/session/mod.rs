pub mod store;
pub mod user;

pub use store::{FileSessionStore, SessionStore, UserSession};
pub use user::{User, UserId};

use crate::error::AppResult;
use crate::profile::Session;

/// A session store bound to one account.
#[derive(Debug, Clone)]
pub struct AccountSession<S> {
    store: S,
    account: String,
}

impl<S: SessionStore> AccountSession<S> {
    pub fn new(store: S, account: impl Into<String>) -> Self {
        Self {
            store,
            account: account.into(),
        }
    }

    pub fn load(&self) -> AppResult<Option<UserSession>> {
        self.store.load(&self.account)
    }
}

impl<S: SessionStore> Session for AccountSession<S> {
    fn current_user(&self) -> AppResult<Option<User>> {
        Ok(self.load()?.map(|session| session.user))
    }

    fn replace_user(&self, user: User) -> AppResult<()> {
        self.store.replace_user(&self.account, user)
    }
}
