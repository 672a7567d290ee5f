//! Portfolio content bundle and the localized string dictionary used by the terminal.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod i18n;

pub use content::{
    ExperienceEntry, FeaturedProject, PortfolioContent, Profile, SocialLink, Story,
};
pub use i18n::{lookup, resolve_lang, MessageKey};
