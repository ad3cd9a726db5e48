use std::sync::Arc;

use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::key_value_store::KeyValueStore,
    domain::entities::account_record::{AccountPatch, AccountRecord},
};

pub const DEFAULT_STORAGE_KEY: &str = "mockflix_state";

/// Load/merge/save access to the one persisted account record.
#[derive(Clone)]
pub struct StateStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    defaults: AccountRecord,
}

impl StateStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            defaults: AccountRecord::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current record, repaired over the defaults. Never fails.
    pub fn load(&self) -> AccountRecord {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return self.defaults.clone();
        };

        match AccountPatch::from_stored(&raw) {
            Some(stored) => self.defaults.clone().merged(stored),
            None => {
                tracing::warn!(key = %self.key, "Discarding unparsable account state");
                self.defaults.clone()
            }
        }
    }

    /// Replace the persisted record with `record`.
    pub fn save(&self, record: &AccountRecord) -> AppResult<()> {
        let raw = serde_json::to_string(record).map_err(|e| AppError::Internal(e.to_string()))?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Merge `patch` over the current record, persist, and return the result.
    #[instrument(skip(self))]
    pub fn set(&self, patch: AccountPatch) -> AppResult<AccountRecord> {
        let next = self.load().merged(patch);
        self.save(&next)?;
        tracing::debug!(logged_in = next.logged_in, "Account state saved");
        Ok(next)
    }
}
