//! Typed configuration for the `portfolio-terminal` binary.
//!
//! Values come from three layers, later ones winning: built-in defaults, an optional TOML file,
//! and `PORTFOLIO_*` environment variables. Blank environment values count as unset.

use std::{
    fs,
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
    time::Duration,
};

use platform_host_native::{NativeHostConfig, DEFAULT_GITHUB_API_BASE};
use serde::{de::DeserializeOwned, Deserialize};
use shell_engine::{RemoteProjectsConfig, DEFAULT_FEATURED_REPOSITORIES};
use terminal_session::{SessionConfig, DEFAULT_TOUR_STEP_DELAY};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "portfolio-terminal.toml";
/// Preference file used when none is configured.
pub const DEFAULT_PREFS_PATH: &str = ".portfolio-terminal/prefs.json";
/// Repository owner used when none is configured.
pub const DEFAULT_GITHUB_USERNAME: &str = "dyingkasy";
/// Mail-client fallback recipient used when none is configured.
pub const DEFAULT_CONTACT_EMAIL: &str = "dyingkasy@outlook.com";

pub const ENV_GITHUB_USERNAME: &str = "PORTFOLIO_GITHUB_USERNAME";
pub const ENV_GITHUB_FEATURED: &str = "PORTFOLIO_GITHUB_FEATURED";
pub const ENV_CONTACT_ENDPOINT: &str = "PORTFOLIO_CONTACT_ENDPOINT";
pub const ENV_CONTACT_EMAIL: &str = "PORTFOLIO_CONTACT_EMAIL";
pub const ENV_PREFS_PATH: &str = "PORTFOLIO_PREFS_PATH";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid TOML for the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// A value is present but unusable.
    #[error("invalid configuration value `{key}`: {reason}")]
    Invalid {
        /// Setting name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Generic TOML-backed config loader.
///
/// Handles filesystem access and deserialization only; callers validate semantics afterwards.
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Creates a loader for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Loads and deserializes the file. A missing file is an error.
    pub fn load(&self) -> Result<T, ConfigError> {
        let body = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&body).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`ConfigLoader::load`], but a missing file yields `None`.
    pub fn load_optional(&self) -> Result<Option<T>, ConfigError> {
        match self.load() {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// On-disk shape of `portfolio-terminal.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub github: GitHubSection,
    pub contact: ContactSection,
    pub prefs: PrefsSection,
    pub tour: TourSection,
    /// Timeout for every HTTP request, in seconds.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubSection {
    /// Repository owner. An empty string disables remote lookups.
    pub username: Option<String>,
    pub featured: Option<Vec<String>>,
    pub api_base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactSection {
    pub endpoint: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrefsSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourSection {
    pub step_delay_ms: Option<u64>,
}

/// Fully resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub github_username: String,
    pub github_featured: Vec<String>,
    pub github_api_base: String,
    pub contact_endpoint: Option<String>,
    pub contact_email: String,
    pub prefs_path: PathBuf,
    pub tour_step_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            github_featured: default_featured(),
            github_api_base: DEFAULT_GITHUB_API_BASE.to_string(),
            contact_endpoint: None,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            tour_step_delay: DEFAULT_TOUR_STEP_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl CliConfig {
    /// Layers `file` and then the variables visible through `env` over the defaults.
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(username) = file.github.username {
            config.github_username = username.trim().to_string();
        }
        if let Some(featured) = file.github.featured {
            config.github_featured = featured_list(featured.iter().map(String::as_str));
        }
        if let Some(api_base) = file.github.api_base {
            config.github_api_base = api_base.trim().to_string();
        }
        if let Some(endpoint) = file.contact.endpoint {
            config.contact_endpoint = non_blank(&endpoint);
        }
        if let Some(email) = file.contact.email {
            config.contact_email = email.trim().to_string();
        }
        if let Some(path) = file.prefs.path {
            config.prefs_path = path;
        }
        if let Some(ms) = file.tour.step_delay_ms {
            config.tour_step_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = file.request_timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }

        let env = |key: &str| env(key).as_deref().and_then(non_blank);
        if let Some(username) = env(ENV_GITHUB_USERNAME) {
            config.github_username = username;
        }
        if let Some(featured) = env(ENV_GITHUB_FEATURED) {
            config.github_featured = featured_list(featured.split(','));
        }
        if let Some(endpoint) = env(ENV_CONTACT_ENDPOINT) {
            config.contact_endpoint = Some(endpoint);
        }
        if let Some(email) = env(ENV_CONTACT_EMAIL) {
            config.contact_email = email;
        }
        if let Some(path) = env(ENV_PREFS_PATH) {
            config.prefs_path = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.github_api_base.is_empty() {
            return Err(ConfigError::Invalid {
                key: "github.api_base",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.github_api_base.starts_with("http://")
            && !self.github_api_base.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                key: "github.api_base",
                reason: format!("`{}` is not an http(s) URL", self.github_api_base),
            });
        }
        if self.contact_email.is_empty() {
            return Err(ConfigError::Invalid {
                key: "contact.email",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Whether remote repository lookups are enabled.
    pub fn remote_enabled(&self) -> bool {
        !self.github_username.is_empty()
    }

    /// Native adapter settings.
    pub fn native_host(&self) -> NativeHostConfig {
        NativeHostConfig {
            github_api_base: self
                .remote_enabled()
                .then(|| self.github_api_base.clone()),
            prefs_path: Some(self.prefs_path.clone()),
            contact_endpoint: self.contact_endpoint.clone(),
            contact_email: self.contact_email.clone(),
            request_timeout: self.request_timeout,
        }
    }

    /// Session wiring. The line-oriented front end has no project browser.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            remote: RemoteProjectsConfig::new(
                self.github_username.clone(),
                self.github_featured.iter(),
            ),
            project_browser: false,
            tour_step_delay: self.tour_step_delay,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn default_featured() -> Vec<String> {
    DEFAULT_FEATURED_REPOSITORIES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Trims, lowercases, and drops blanks; an empty result means the default list.
fn featured_list<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let featured: Vec<String> = items
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
    if featured.is_empty() {
        default_featured()
    } else {
        featured
    }
}
