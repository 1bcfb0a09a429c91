use tracing::debug;

use crate::api::ProfileClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::{AppError, AppResult};
use crate::output::Output;
use crate::session::{AccountSession, FileSessionStore, SessionStore};

#[derive(Debug)]
pub struct AppContext {
    pub account: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub session_store: FileSessionStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(account: String, json: bool, api_url: Option<String>) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        Self::with_paths(paths, account, json, api_url)
    }

    /// Builds the context over explicit paths. The api url is not checked
    /// here; see [`AppContext::profile_client`].
    pub fn with_paths(
        paths: AppPaths,
        account: String,
        json: bool,
        api_url: Option<String>,
    ) -> AppResult<Self> {
        let account = config::resolve_account(&account);
        let mut settings = config::load_settings(&paths, &account)?;
        if let Some(api_url) = api_url {
            settings.api_base_url = Some(api_url);
        }

        let session_store = FileSessionStore::new(paths.clone());
        let output = Output::new(json);

        debug!(
            %account,
            config_dir = %paths.config_dir().display(),
            data_dir = %paths.data_dir().display(),
            "context ready"
        );

        Ok(Self {
            account,
            paths,
            settings,
            session_store,
            output,
        })
    }

    pub fn profile_client(&self) -> AppResult<ProfileClient> {
        let base_url = self.settings.api_base_url()?;
        debug!(api = %base_url, "profile client ready");
        Ok(ProfileClient::new(base_url))
    }

    pub fn session(&self) -> AccountSession<&FileSessionStore> {
        AccountSession::new(&self.session_store, self.account.clone())
    }

    pub fn access_token(&self) -> AppResult<String> {
        let session = self.session_store.load(&self.account)?.ok_or_else(|| {
            AppError::Session("not signed in. run `profilectl session import <file>`".to_string())
        })?;

        Ok(session.token)
    }
}
