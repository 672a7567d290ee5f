//! GitHub REST repository source.

use std::time::Duration;

use platform_host::{RemoteRepository, RepositoryFuture, RepositorySource};
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Public GitHub REST endpoint.
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("portfolio-terminal/", env!("CARGO_PKG_VERSION"));
const LISTING_PAGE_SIZE: u32 = 100;

/// Repository source backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubRepositorySource {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubRepositorySource {
    /// Creates a source for `api_base` (trailing slashes are ignored).
    ///
    /// # Errors
    ///
    /// Returns the client construction error from `reqwest`.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the owner's repository listing, most recently updated first.
    pub fn listing_url(&self, owner: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={LISTING_PAGE_SIZE}",
            self.api_base,
            urlencoding::encode(owner)
        )
    }

    /// URL of one repository.
    pub fn repository_url(&self, owner: &str, name: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base,
            urlencoding::encode(owner),
            urlencoding::encode(name)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, String> {
        debug!(url, "github request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| format!("request to {url} failed: {err}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!(url, %status, "github request returned non-success status");
            return Err(format!("{url} returned HTTP {status}"));
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|err| format!("invalid response from {url}: {err}"))
    }
}

impl RepositorySource for GitHubRepositorySource {
    fn list_repositories<'a>(
        &'a self,
        owner: &'a str,
    ) -> RepositoryFuture<'a, Result<Vec<RemoteRepository>, String>> {
        Box::pin(async move {
            let url = self.listing_url(owner);
            // A missing account lists nothing rather than failing.
            Ok(self.get_json(&url).await?.unwrap_or_default())
        })
    }

    fn get_repository<'a>(
        &'a self,
        owner: &'a str,
        name: &'a str,
    ) -> RepositoryFuture<'a, Result<Option<RemoteRepository>, String>> {
        Box::pin(async move {
            let url = self.repository_url(owner, name);
            self.get_json(&url).await
        })
    }
}
