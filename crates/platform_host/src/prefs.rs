//! Terminal preference contract: a closed key set, raw JSON per key, and typed accessors.

use std::{cell::RefCell, collections::BTreeMap, fmt, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Preferences the terminal remembers between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefKey {
    /// Interface language.
    Lang,
    /// Terminal theme.
    Theme,
    /// Submitted command history.
    History,
}

impl PrefKey {
    /// Storage name, shared with earlier deployments of the portfolio.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lang => "portfolio-lang",
            Self::Theme => "portfolio-theme",
            Self::History => "portfolio-history",
        }
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object-safe boxed future returned by [`PrefsStore`].
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host storage for terminal preferences, one JSON document per [`PrefKey`].
///
/// Stores deal in raw JSON text; [`load_typed`] and [`save_typed`] add the encoding.
pub trait PrefsStore {
    /// Raw JSON stored under `key`, if any.
    fn load_raw(&self, key: PrefKey) -> PrefsStoreFuture<'_, Result<Option<String>, String>>;

    /// Replaces the raw JSON stored under `key`.
    fn save_raw<'a>(
        &'a self,
        key: PrefKey,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

/// Typed preference access failures.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The backing store failed.
    #[error("{key}: store error: {message}")]
    Store {
        /// Preference involved.
        key: PrefKey,
        /// Store-provided description.
        message: String,
    },
    /// The stored text is not a valid value.
    #[error("{key}: unreadable value: {source}")]
    Decode {
        /// Preference involved.
        key: PrefKey,
        /// JSON error.
        source: serde_json::Error,
    },
    /// The value could not be encoded.
    #[error("{key}: unencodable value: {source}")]
    Encode {
        /// Preference involved.
        key: PrefKey,
        /// JSON error.
        source: serde_json::Error,
    },
}

/// Loads and decodes the preference under `key`.
///
/// # Errors
///
/// Returns [`PrefsError::Store`] or [`PrefsError::Decode`].
pub async fn load_typed<T, S>(store: &S, key: PrefKey) -> Result<Option<T>, PrefsError>
where
    T: DeserializeOwned,
    S: PrefsStore + ?Sized,
{
    let raw = store
        .load_raw(key)
        .await
        .map_err(|message| PrefsError::Store { key, message })?;
    raw.map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(|source| PrefsError::Decode { key, source })
}

/// Encodes and stores `value` under `key`.
///
/// # Errors
///
/// Returns [`PrefsError::Encode`] or [`PrefsError::Store`].
pub async fn save_typed<T, S>(store: &S, key: PrefKey, value: &T) -> Result<(), PrefsError>
where
    T: Serialize + ?Sized,
    S: PrefsStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| PrefsError::Encode { key, source })?;
    store
        .save_raw(key, &raw)
        .await
        .map_err(|message| PrefsError::Store { key, message })
}

/// In-memory preference store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<BTreeMap<PrefKey, String>>>,
}

impl MemoryPrefsStore {
    /// Seeds raw text for `key`, valid JSON or not.
    pub fn insert_raw(&self, key: PrefKey, raw_json: &str) {
        self.entries.borrow_mut().insert(key, raw_json.to_string());
    }

    /// Raw text stored under `key`.
    pub fn raw(&self, key: PrefKey) -> Option<String> {
        self.entries.borrow().get(&key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_raw(&self, key: PrefKey) -> PrefsStoreFuture<'_, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_raw<'a>(
        &'a self,
        key: PrefKey,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.insert_raw(key, raw_json);
            Ok(())
        })
    }
}
