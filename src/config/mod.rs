pub mod account;
pub mod paths;
pub mod settings;

pub use account::resolve_account;
pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, account: &str) -> AppResult<Settings> {
    settings::load(paths.settings_file(account))
}

pub fn save_settings(paths: &AppPaths, account: &str, settings: &Settings) -> AppResult<()> {
    settings::save(paths.settings_file(account), settings)
}
