//! Command interpreter core for the portfolio terminal.
//!
//! The engine resolves parsed input against a static command registry and runs the matching
//! handler against an injected [`RuntimeContext`]. It owns no mutable state: language, theme,
//! panels, and the output log live with the caller and are changed only through
//! [`RuntimeHooks`] intents.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod autocomplete;
mod commands;
pub mod context;
pub mod dispatch;
pub mod merge;
pub mod registry;
pub mod remote;

pub use autocomplete::{complete, longest_common_prefix, Completion, MAX_SUGGESTIONS};
pub use context::{RuntimeContext, RuntimeHooks};
pub use dispatch::execute_command;
pub use merge::merge_projects;
pub use registry::{autocomplete_targets, resolve_command_name, COMMANDS};
pub use remote::{
    best_effort, load_remote_projects, load_remote_repository, normalize_repository,
    select_featured, RemoteProjectsConfig, DEFAULT_FEATURED_REPOSITORIES, FEATURED_FALLBACK_LIMIT,
};

#[cfg(test)]
pub(crate) mod testing;
