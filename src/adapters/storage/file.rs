use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::key_value_store::KeyValueStore,
};

/// Key/value storage in a single JSON file, standing in for a browser profile.
///
/// The file holds one JSON object mapping keys to string values. Writes go to a
/// sibling temp file first and are renamed into place.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Cannot read storage file");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "Storage file is not a string map");
            BTreeMap::new()
        })
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let mut items = self.read_all();
        items.insert(key.to_string(), value.to_string());
        let serialized =
            serde_json::to_string_pretty(&items).map_err(|e| AppError::Internal(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
