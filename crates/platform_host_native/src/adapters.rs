//! Native adapter selection.

use std::{path::PathBuf, rc::Rc, time::Duration};

use platform_host::{
    HostServices, MemoryPrefsStore, MemoryRepositorySource, PrefsStore, RepositorySource,
};
use thiserror::Error;
use tracing::info;

use crate::{FilePrefsStore, FormPostContactChannel, GitHubRepositorySource};

/// Settings used to build the native [`HostServices`] bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeHostConfig {
    /// Repository API base URL; `None` disables the remote listing.
    pub github_api_base: Option<String>,
    /// Preference file; `None` keeps preferences in memory for this run.
    pub prefs_path: Option<PathBuf>,
    /// Form endpoint receiving contact messages.
    pub contact_endpoint: Option<String>,
    /// Recipient used by the mail-client fallback.
    pub contact_email: String,
    /// Timeout applied to every HTTP request.
    pub request_timeout: Duration,
}

impl Default for NativeHostConfig {
    fn default() -> Self {
        Self {
            github_api_base: Some(crate::DEFAULT_GITHUB_API_BASE.to_string()),
            prefs_path: None,
            contact_endpoint: None,
            contact_email: "dyingkasy@outlook.com".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Failures while wiring native adapters.
#[derive(Debug, Error)]
pub enum NativeHostError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Builds host services from `config`.
///
/// # Errors
///
/// Returns [`NativeHostError::HttpClient`] when an HTTP client cannot be constructed.
pub fn build_host_services(config: &NativeHostConfig) -> Result<HostServices, NativeHostError> {
    let prefs: Rc<dyn PrefsStore> = match &config.prefs_path {
        Some(path) => {
            info!(path = %path.display(), "using file preference store");
            Rc::new(FilePrefsStore::new(path.clone()))
        }
        None => Rc::new(MemoryPrefsStore::default()),
    };

    let repositories: Rc<dyn RepositorySource> = match &config.github_api_base {
        Some(base) => Rc::new(GitHubRepositorySource::new(base, config.request_timeout)?),
        None => Rc::new(MemoryRepositorySource::default()),
    };

    let contact = FormPostContactChannel::new(
        config.contact_endpoint.clone(),
        config.contact_email.clone(),
        config.request_timeout,
    )?;

    Ok(HostServices {
        prefs,
        repositories,
        contact: Rc::new(contact),
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{ContactChannel, ContactDelivery, ContactPayload, PrefKey};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn offline_config_builds_local_services() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = NativeHostConfig {
            github_api_base: None,
            prefs_path: Some(dir.path().join("prefs.json")),
            ..NativeHostConfig::default()
        };
        let services = build_host_services(&config).expect("services");

        block_on(services.prefs.save_raw(PrefKey::Lang, "\"en\"")).expect("save");
        assert!(dir.path().join("prefs.json").exists());

        let listed = block_on(services.repositories.list_repositories("dyingkasy"))
            .expect("list");
        assert!(listed.is_empty());

        let payload = ContactPayload {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Oi".to_string(),
        };
        let delivery = block_on(services.contact.submit(&payload, "Name")).expect("submit");
        assert!(matches!(delivery, ContactDelivery::MailClient { .. }));
    }

    #[test]
    fn default_config_targets_public_api() {
        let config = NativeHostConfig::default();
        assert_eq!(
            config.github_api_base.as_deref(),
            Some("https://api.github.com")
        );
        assert_eq!(config.prefs_path, None);
    }
}
