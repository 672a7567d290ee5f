//! Best-effort remote project loading and normalization.
//!
//! Failures never reach command handlers: a failed listing is an empty list and a failed lookup
//! is `None`. Nothing is cached, so every call hits the [`RepositorySource`] again.

use platform_host::{RemoteRepository, RepositorySource};
use shell_contract::{ProjectSource, ProjectView};
use tracing::{debug, warn};

/// Repository names featured when no allow-list is configured.
pub const DEFAULT_FEATURED_REPOSITORIES: &[&str] = &["app.menufaz", "qualifaz-entragas", "fichamovel"];

/// Number of listing entries kept when the allow-list matches nothing.
pub const FEATURED_FALLBACK_LIMIT: usize = 6;

const FALLBACK_DESCRIPTION: &str = "No description provided.";
const MAX_TOPICS: usize = 3;

/// Which account to list and which repositories to feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProjectsConfig {
    /// Account owning the repositories. Blank disables remote loading.
    pub owner: String,
    /// Lowercased allow-list of featured repository names.
    pub featured: Vec<String>,
}

impl RemoteProjectsConfig {
    /// Builds a config, lowercasing the allow-list and dropping blank entries.
    pub fn new<I, S>(owner: impl Into<String>, featured: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            owner: owner.into().trim().to_string(),
            featured: featured
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    /// Config with no owner; remote loading is skipped.
    pub fn disabled() -> Self {
        Self::new("", DEFAULT_FEATURED_REPOSITORIES.iter().copied())
    }

    fn is_enabled(&self) -> bool {
        !self.owner.is_empty()
    }
}

impl Default for RemoteProjectsConfig {
    fn default() -> Self {
        Self::new("dyingkasy", DEFAULT_FEATURED_REPOSITORIES.iter().copied())
    }
}

/// Maps a remote record into a [`ProjectView`].
pub fn normalize_repository(record: &RemoteRepository) -> ProjectView {
    let description = record
        .description
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(FALLBACK_DESCRIPTION)
        .to_string();

    let stack = record
        .language
        .iter()
        .chain(record.topics.iter().take(MAX_TOPICS))
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();

    ProjectView {
        id: record.name.to_lowercase(),
        name: record.name.clone(),
        description,
        stack,
        url: record.html_url.clone(),
        source: ProjectSource::Remote,
        stars: Some(record.stargazers_count),
        updated_at: record.updated_at,
        highlights: Vec::new(),
        live_url: None,
    }
}

/// Drops forks, normalizes, and applies the featured allow-list.
///
/// An empty allow-list, or one matching nothing, yields the first
/// [`FEATURED_FALLBACK_LIMIT`] non-fork entries in listing order.
pub fn select_featured(records: &[RemoteRepository], featured: &[String]) -> Vec<ProjectView> {
    let valid = records
        .iter()
        .filter(|record| !record.fork)
        .map(normalize_repository)
        .collect::<Vec<_>>();

    if !featured.is_empty() {
        let selected = valid
            .iter()
            .filter(|project| {
                featured
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(&project.name))
            })
            .cloned()
            .collect::<Vec<_>>();
        if !selected.is_empty() {
            return selected;
        }
    }

    valid.into_iter().take(FEATURED_FALLBACK_LIMIT).collect()
}

/// Collapses a failed host call into the default value, logging the failure.
pub fn best_effort<T: Default>(operation: &str, result: Result<T, String>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(operation, error = %err, "remote request failed; continuing without remote data");
            T::default()
        }
    }
}

/// Lists featured remote projects for the configured owner.
pub async fn load_remote_projects(
    source: &dyn RepositorySource,
    config: &RemoteProjectsConfig,
) -> Vec<ProjectView> {
    if !config.is_enabled() {
        debug!("remote owner not configured; skipping repository listing");
        return Vec::new();
    }
    let records = best_effort(
        "list_repositories",
        source.list_repositories(&config.owner).await,
    );
    select_featured(&records, &config.featured)
}

/// Looks up one remote repository by exact name. Forks resolve to `None`.
pub async fn load_remote_repository(
    source: &dyn RepositorySource,
    config: &RemoteProjectsConfig,
    name: &str,
) -> Option<ProjectView> {
    let name = name.trim();
    if !config.is_enabled() || name.is_empty() {
        return None;
    }
    best_effort(
        "get_repository",
        source.get_repository(&config.owner, name).await,
    )
    .filter(|record| !record.fork)
    .map(|record| normalize_repository(&record))
}
