//! JSON-file preference store.
//!
//! The file holds one JSON object mapping preference keys to their raw JSON values. Writes
//! rewrite the whole file; a missing file reads as empty.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use platform_host::{PrefKey, PrefsStore, PrefsStoreFuture};
use tracing::debug;

#[derive(Debug, Clone)]
/// Preference store persisted to a single JSON file.
pub struct FilePrefsStore {
    path: PathBuf,
}

impl FilePrefsStore {
    /// Creates a store backed by `path`. Parent directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(format!("read {}: {err}", self.path.display())),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|err| format!("parse {}: {err}", self.path.display()))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| format!("create {}: {err}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|err| err.to_string())?;
        fs::write(&self.path, raw).map_err(|err| format!("write {}: {err}", self.path.display()))
    }
}

impl PrefsStore for FilePrefsStore {
    fn load_raw(&self, key: PrefKey) -> PrefsStoreFuture<'_, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.read_all()?.remove(key.as_str())) })
    }

    fn save_raw<'a>(
        &'a self,
        key: PrefKey,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            // A corrupt file is replaced rather than blocking every later write.
            let mut entries = self.read_all().unwrap_or_else(|err| {
                debug!(error = %err, "discarding unreadable preference file");
                BTreeMap::new()
            });
            entries.insert(key.as_str().to_string(), raw_json.to_string());
            self.write_all(&entries)
        })
    }
}
