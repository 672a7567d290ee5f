//! Per-call runtime context and caller-owned intent hooks.

use std::rc::Rc;

use platform_host::RepositorySource;
use portfolio_content::{lookup, MessageKey, PortfolioContent};
use shell_contract::{EffectId, Lang, ProjectView, ThemeName};

use crate::remote::RemoteProjectsConfig;

/// Intents the interpreter may raise against caller-owned state.
///
/// Hooks record intent only. The interpreter never observes their effect within the same call:
/// it keeps reading the snapshot in [`RuntimeContext`].
pub trait RuntimeHooks {
    /// Switches the interface language.
    fn set_lang(&self, lang: Lang);
    /// Advances to the next theme in the cycle.
    fn cycle_theme(&self);
    /// Sets an explicit theme.
    fn set_theme(&self, theme: ThemeName);
    /// Clears the visible output log.
    fn clear_output(&self);
    /// Opens the contact surface.
    fn open_contact(&self);
    /// Opens the project browser with an optional filter.
    ///
    /// Returns `false` when the host has no project browser; the interpreter then prints the
    /// listing itself.
    fn open_projects(&self, filter: Option<&str>) -> bool;
    /// Plays a transient visual effect.
    fn trigger_effect(&self, effect: EffectId);
    /// Starts the guided tour. Returns `false` when a tour is already running.
    fn run_tour(&self) -> bool;
}

/// Read-only snapshot handed to [`crate::execute_command`] for one call.
#[derive(Clone)]
pub struct RuntimeContext {
    /// Language used for every string this call produces.
    pub lang: Lang,
    /// Current theme.
    pub theme: ThemeName,
    /// Portfolio content bundle.
    pub content: Rc<PortfolioContent>,
    /// Local project catalog rendered in `lang`.
    pub local_projects: Vec<ProjectView>,
    /// Remote repository listing service.
    pub repositories: Rc<dyn RepositorySource>,
    /// Remote owner and featured allow-list.
    pub remote: RemoteProjectsConfig,
    /// Caller intent hooks.
    pub hooks: Rc<dyn RuntimeHooks>,
}

impl RuntimeContext {
    /// Dictionary lookup in the snapshot language.
    pub fn t(&self, key: MessageKey) -> &'static str {
        lookup(self.lang, key)
    }
}
