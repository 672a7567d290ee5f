//! Remote repository listing contracts.

use std::{cell::Cell, cell::RefCell, future::Future, pin::Pin, rc::Rc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`RepositorySource`].
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Repository record as returned by the remote listing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    /// Repository name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical browser URL.
    pub html_url: String,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u32,
    /// Primary language.
    #[serde(default)]
    pub language: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Whether this repository is a fork.
    #[serde(default)]
    pub fork: bool,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Host service listing repositories owned by an account.
///
/// Implementations report transport problems and non-success responses as `Err`; a missing
/// single repository is `Ok(None)`.
pub trait RepositorySource {
    /// Lists repositories owned by `owner`, most recently updated first.
    fn list_repositories<'a>(
        &'a self,
        owner: &'a str,
    ) -> RepositoryFuture<'a, Result<Vec<RemoteRepository>, String>>;

    /// Fetches one repository by exact name.
    fn get_repository<'a>(
        &'a self,
        owner: &'a str,
        name: &'a str,
    ) -> RepositoryFuture<'a, Result<Option<RemoteRepository>, String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory repository source. Clones share records and the request counter.
pub struct MemoryRepositorySource {
    repositories: Rc<RefCell<Vec<RemoteRepository>>>,
    requests: Rc<Cell<usize>>,
}

impl MemoryRepositorySource {
    /// Creates a source serving `repositories` for any owner.
    pub fn new(repositories: Vec<RemoteRepository>) -> Self {
        Self {
            repositories: Rc::new(RefCell::new(repositories)),
            requests: Rc::new(Cell::new(0)),
        }
    }

    /// Number of list/get requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    fn count_request(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

impl RepositorySource for MemoryRepositorySource {
    fn list_repositories<'a>(
        &'a self,
        _owner: &'a str,
    ) -> RepositoryFuture<'a, Result<Vec<RemoteRepository>, String>> {
        Box::pin(async move {
            self.count_request();
            Ok(self.repositories.borrow().clone())
        })
    }

    fn get_repository<'a>(
        &'a self,
        _owner: &'a str,
        name: &'a str,
    ) -> RepositoryFuture<'a, Result<Option<RemoteRepository>, String>> {
        Box::pin(async move {
            self.count_request();
            Ok(self
                .repositories
                .borrow()
                .iter()
                .find(|repo| repo.name == name)
                .cloned())
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Repository source whose every request fails with the configured message.
pub struct FailingRepositorySource {
    message: String,
}

impl FailingRepositorySource {
    /// Creates a source failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RepositorySource for FailingRepositorySource {
    fn list_repositories<'a>(
        &'a self,
        _owner: &'a str,
    ) -> RepositoryFuture<'a, Result<Vec<RemoteRepository>, String>> {
        Box::pin(async move { Err(self.message.clone()) })
    }

    fn get_repository<'a>(
        &'a self,
        _owner: &'a str,
        _name: &'a str,
    ) -> RepositoryFuture<'a, Result<Option<RemoteRepository>, String>> {
        Box::pin(async move { Err(self.message.clone()) })
    }
}
