use tracing::instrument;

use crate::{
    app_error::AppResult,
    application::use_cases::state_store::StateStore,
    domain::entities::{account_record::AccountPatch, billing_provider::BillingProvider},
};

pub const PROVIDER_PARAM: &str = "provider";

/// Seed the billing provider from a `provider` query value, if allow-listed.
///
/// Returns the provider that was applied. Absent or unknown values leave the
/// store untouched.
#[instrument(skip(store))]
pub fn apply_provider_param(
    store: &StateStore,
    value: Option<&str>,
) -> AppResult<Option<BillingProvider>> {
    let Some(provider) = value.and_then(BillingProvider::parse_allowed) else {
        if let Some(ignored) = value {
            tracing::debug!(ignored, "Ignoring provider outside the allow-list");
        }
        return Ok(None);
    };

    store.set(AccountPatch::billing_provider(provider.clone()))?;
    Ok(Some(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::storage::InMemoryStorage,
        application::{
            ports::key_value_store::KeyValueStore, use_cases::state_store::DEFAULT_STORAGE_KEY,
        },
    };
    use std::sync::Arc;

    fn store() -> StateStore {
        StateStore::new(Arc::new(InMemoryStorage::new()), DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_applies_allowed_provider() {
        let store = store();
        let applied = apply_provider_param(&store, Some("google")).unwrap();
        assert_eq!(applied, Some(BillingProvider::Google));
        assert_eq!(store.load().billing_provider, BillingProvider::Google);
    }

    #[test]
    fn test_ignores_unknown_provider() {
        let store = store();
        store.set(AccountPatch::billing_provider(BillingProvider::Apple)).unwrap();

        let applied = apply_provider_param(&store, Some("bogus")).unwrap();

        assert_eq!(applied, None);
        assert_eq!(store.load().billing_provider, BillingProvider::Apple);
    }

    #[test]
    fn test_missing_param_does_not_write() {
        let storage = Arc::new(InMemoryStorage::new());
        let store = StateStore::new(storage.clone(), DEFAULT_STORAGE_KEY);

        assert_eq!(apply_provider_param(&store, None).unwrap(), None);
        assert!(storage.get_item(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_empty_and_cased_values_are_ignored() {
        let store = store();
        assert_eq!(apply_provider_param(&store, Some("")).unwrap(), None);
        assert_eq!(apply_provider_param(&store, Some("APPLE")).unwrap(), None);
        assert_eq!(store.load().billing_provider, BillingProvider::Direct);
    }
}
