use std::path::PathBuf;

use env_helpers::get_env_default;

use crate::application::use_cases::state_store::DEFAULT_STORAGE_KEY;

pub struct AppConfig {
    /// JSON file standing in for the browser profile. Empty means in-memory only.
    pub storage_path: Option<PathBuf>,
    pub storage_key: String,
    /// Where the guard sends signed-out visitors.
    pub login_page: String,
    /// Where sign-out lands.
    pub entry_page: String,
    /// Optional file for structured JSON logs.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            login_page: "index.html".to_string(),
            entry_page: "index.html".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let storage_path: String = get_env_default(
            "MOCKFLIX_STORAGE_PATH",
            ".mockflix/local_storage.json".to_string(),
        );
        let storage_key: String =
            get_env_default("MOCKFLIX_STORAGE_KEY", DEFAULT_STORAGE_KEY.to_string());
        let login_page: String = get_env_default("MOCKFLIX_LOGIN_PAGE", "index.html".to_string());
        let entry_page: String = get_env_default("MOCKFLIX_ENTRY_PAGE", "index.html".to_string());
        let log_file: String = get_env_default("LOG_FILE", String::new());

        Self {
            storage_path: non_empty_path(storage_path),
            storage_key,
            login_page,
            entry_page,
            log_file: non_empty_path(log_file),
        }
    }

    pub fn with_storage_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.storage_path = path;
        }
        self
    }
}

fn non_empty_path(raw: String) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "mockflix_state");
        assert_eq!(config.login_page, "index.html");
        assert_eq!(config.entry_page, "index.html");
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_blank_storage_path_means_memory() {
        assert_eq!(non_empty_path("  ".into()), None);
        assert_eq!(
            non_empty_path("profile.json".into()),
            Some(PathBuf::from("profile.json"))
        );
    }

    #[test]
    fn test_blank_log_file_disables_file_layer() {
        assert_eq!(non_empty_path(String::new()), None);
        assert_eq!(
            non_empty_path(" logs/mockflix.json ".into()),
            Some(PathBuf::from("logs/mockflix.json"))
        );
    }

    #[test]
    fn test_storage_path_override() {
        let config = AppConfig::default().with_storage_path(Some("custom.json".into()));
        assert_eq!(config.storage_path, Some(PathBuf::from("custom.json")));

        let kept = config.with_storage_path(None);
        assert_eq!(kept.storage_path, Some(PathBuf::from("custom.json")));
    }
}
