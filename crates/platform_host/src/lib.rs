//! Typed host-service contracts shared by the terminal session and the native adapters.
//!
//! This crate is the API-first boundary for everything the interpreter treats as an external
//! collaborator: preference persistence, the remote repository listing, and the contact side
//! channel. Concrete network and filesystem adapters live in `platform_host_native`; the in-memory
//! adapters here back the test suites of every other crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod contact;
pub mod host;
pub mod prefs;
pub mod repos;

pub use contact::{
    mailto_url, ContactChannel, ContactDelivery, ContactError, ContactFuture, ContactPayload,
    MemoryContactChannel,
};
pub use host::HostServices;
pub use prefs::{
    load_typed, save_typed, MemoryPrefsStore, PrefKey, PrefsError, PrefsStore, PrefsStoreFuture,
};
pub use repos::{
    FailingRepositorySource, MemoryRepositorySource, RemoteRepository, RepositoryFuture,
    RepositorySource,
};
