use crate::app_error::AppResult;

/// Browser-local persistent storage: string keys to string values.
///
/// Reads never fail; a backend that cannot read its medium reports the key
/// as absent.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
}
