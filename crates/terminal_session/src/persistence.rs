//! Preference hydration and persistence through the host [`PrefsStore`].

use platform_host::{load_typed, save_typed, PrefKey, PrefsError, PrefsStore};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{
    model::{PrefsSnapshot, TerminalState},
    reducer::RuntimeEffect,
};

async fn load_or_default<T: DeserializeOwned + Default>(store: &dyn PrefsStore, key: PrefKey) -> T {
    match load_typed::<T, _>(store, key).await {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            warn!(key = key.as_str(), error = %err, "ignoring unreadable preference");
            T::default()
        }
    }
}

/// Loads language, theme, and history. Missing or corrupt values fall back to defaults.
pub async fn load_prefs(store: &dyn PrefsStore) -> PrefsSnapshot {
    PrefsSnapshot {
        lang: load_or_default(store, PrefKey::Lang).await,
        theme: load_or_default(store, PrefKey::Theme).await,
        history: load_or_default(store, PrefKey::History).await,
    }
}

/// Writes the preference named by a persist effect. Other effects are ignored.
///
/// # Errors
///
/// Returns [`PrefsError`] when the value cannot be encoded or the store rejects the write.
pub async fn persist_effect(
    store: &dyn PrefsStore,
    state: &TerminalState,
    effect: &RuntimeEffect,
) -> Result<(), PrefsError> {
    match effect {
        RuntimeEffect::PersistLang => save_typed(store, PrefKey::Lang, &state.lang).await,
        RuntimeEffect::PersistTheme => save_typed(store, PrefKey::Theme, &state.theme).await,
        RuntimeEffect::PersistHistory => save_typed(store, PrefKey::History, &state.history).await,
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;
    use shell_contract::{Lang, ThemeName};

    use super::*;

    #[test]
    fn corrupt_and_missing_values_fall_back_to_defaults() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(PrefKey::Lang, "\"de\"");
        store.insert_raw(PrefKey::History, "{broken");

        assert_eq!(block_on(load_prefs(&store)), PrefsSnapshot::default());
    }

    #[test]
    fn persisted_values_hydrate_back() {
        let store = MemoryPrefsStore::default();
        let state = TerminalState {
            lang: Lang::En,
            theme: ThemeName::Amber,
            history: vec!["help".to_string()],
            ..TerminalState::default()
        };

        for effect in [
            RuntimeEffect::PersistLang,
            RuntimeEffect::PersistTheme,
            RuntimeEffect::PersistHistory,
        ] {
            block_on(persist_effect(&store, &state, &effect)).expect("persist");
        }

        assert_eq!(store.raw(PrefKey::Lang).as_deref(), Some("\"en\""));
        assert_eq!(store.raw(PrefKey::Theme).as_deref(), Some("\"amber\""));
        assert_eq!(
            block_on(load_prefs(&store)),
            PrefsSnapshot {
                lang: Lang::En,
                theme: ThemeName::Amber,
                history: vec!["help".to_string()],
            }
        );
    }
}
