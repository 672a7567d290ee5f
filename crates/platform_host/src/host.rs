//! Host service bundle injected into the terminal session.

use std::rc::Rc;

use crate::{
    ContactChannel, MemoryContactChannel, MemoryPrefsStore, MemoryRepositorySource, PrefsStore,
    RepositorySource,
};

/// Runtime-selected host services.
///
/// All environment-specific adapter selection happens before this bundle reaches the session, so
/// the session and engine crates stay free of network and filesystem details.
#[derive(Clone)]
pub struct HostServices {
    /// Preference store for language, theme, and history.
    pub prefs: Rc<dyn PrefsStore>,
    /// Remote repository listing.
    pub repositories: Rc<dyn RepositorySource>,
    /// Contact delivery channel.
    pub contact: Rc<dyn ContactChannel>,
}

impl HostServices {
    /// In-memory services with no remote repositories. Used by tests and offline runs.
    pub fn in_memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            repositories: Rc::new(MemoryRepositorySource::default()),
            contact: Rc::new(MemoryContactChannel::default()),
        }
    }
}
