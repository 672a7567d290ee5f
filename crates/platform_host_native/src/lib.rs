//! Native adapters for the portfolio terminal host services.
//!
//! [`build_host_services`] is the single place where concrete implementations are selected: the
//! GitHub REST listing, a JSON preference file, and a form-post contact channel that falls back to
//! a `mailto:` link.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod contact_form;
pub mod github;
pub mod prefs_file;

pub use adapters::{build_host_services, NativeHostConfig, NativeHostError};
pub use contact_form::FormPostContactChannel;
pub use github::{GitHubRepositorySource, DEFAULT_GITHUB_API_BASE};
pub use prefs_file::FilePrefsStore;
