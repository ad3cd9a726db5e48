use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::storage::{FileStorage, InMemoryStorage},
    application::{ports::key_value_store::KeyValueStore, use_cases::state_store::StateStore},
    infra::config::AppConfig,
};

/// Process-wide services shared by every page load.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<StateStore>,
}

pub fn init_app_state(config: AppConfig) -> AppState {
    let storage: Arc<dyn KeyValueStore> = match &config.storage_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using file-backed storage");
            Arc::new(FileStorage::new(path))
        }
        None => Arc::new(InMemoryStorage::new()),
    };

    let store = Arc::new(StateStore::new(storage, config.storage_key.clone()));

    AppState {
        config: Arc::new(config),
        store,
    }
}

pub fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "mockflix=info".into());

    // Console logs go to stderr so rendered pages on stdout stay clean.
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    // File (structured JSON logs)
    let json_layer = match &config.log_file {
        Some(path) => Some(
            fmt::layer()
                .json()
                .with_writer(File::create(path)?)
                .with_current_span(true)
                .with_span_list(true),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account_record::AccountPatch;

    #[test]
    fn test_memory_state_without_path() {
        let state = init_app_state(AppConfig::default());
        state.store.set(AccountPatch::logged_in(true)).unwrap();
        assert!(state.store.load().logged_in);
        assert_eq!(state.store.key(), "mockflix_state");
    }

    #[test]
    fn test_file_state_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let config = || AppConfig::default().with_storage_path(Some(dir.path().join("profile.json")));

        init_app_state(config())
            .store
            .set(AccountPatch::logged_in(true))
            .unwrap();

        assert!(init_app_state(config()).store.load().logged_in);
    }
}
