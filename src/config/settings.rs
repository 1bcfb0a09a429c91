use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::profile::Locale;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl Settings {
    pub fn api_base_url(&self) -> AppResult<String> {
        let raw = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        url::Url::parse(raw).map_err(|err| {
            AppError::Config(format!("invalid api_base_url `{raw}`: {err}"))
        })?;

        Ok(raw.trim_end_matches('/').to_string())
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_backend_and_portuguese() {
        let settings = Settings::default();
        assert_eq!(
            settings.api_base_url().expect("default url"),
            "http://localhost:3333"
        );
        assert_eq!(settings.locale(), Locale::PtBr);
    }

    #[test]
    fn rejects_malformed_base_url() {
        let settings = Settings {
            api_base_url: Some("not a url".to_string()),
            locale: None,
        };
        match settings.api_base_url() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("`not a url`"));
                assert!(!message.contains("account settings"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn parses_locale_from_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_base_url":"https://api.example.com/","locale":"en"}"#)
                .expect("settings parse");
        assert_eq!(settings.locale(), Locale::En);
        assert_eq!(
            settings.api_base_url().expect("url"),
            "https://api.example.com"
        );
    }
}
