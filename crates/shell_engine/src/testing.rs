//! Fixtures shared by the engine unit tests.

use std::{cell::RefCell, rc::Rc};

use platform_host::{MemoryRepositorySource, RemoteRepository, RepositorySource};
use portfolio_content::PortfolioContent;
use shell_contract::{EffectId, Lang, ProjectSource, ProjectView, ThemeName};

use crate::{RemoteProjectsConfig, RuntimeContext, RuntimeHooks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HookCall {
    SetLang(Lang),
    CycleTheme,
    SetTheme(ThemeName),
    ClearOutput,
    OpenContact,
    OpenProjects(Option<String>),
    TriggerEffect(EffectId),
    RunTour,
}

/// Hooks that record every call. The browser/tour answers are configurable.
#[derive(Default)]
pub(crate) struct RecordingHooks {
    pub(crate) calls: RefCell<Vec<HookCall>>,
    pub(crate) has_project_browser: bool,
    pub(crate) tour_running: bool,
}

impl RecordingHooks {
    pub(crate) fn calls(&self) -> Vec<HookCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: HookCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl RuntimeHooks for RecordingHooks {
    fn set_lang(&self, lang: Lang) {
        self.record(HookCall::SetLang(lang));
    }

    fn cycle_theme(&self) {
        self.record(HookCall::CycleTheme);
    }

    fn set_theme(&self, theme: ThemeName) {
        self.record(HookCall::SetTheme(theme));
    }

    fn clear_output(&self) {
        self.record(HookCall::ClearOutput);
    }

    fn open_contact(&self) {
        self.record(HookCall::OpenContact);
    }

    fn open_projects(&self, filter: Option<&str>) -> bool {
        self.record(HookCall::OpenProjects(filter.map(str::to_string)));
        self.has_project_browser
    }

    fn trigger_effect(&self, effect: EffectId) {
        self.record(HookCall::TriggerEffect(effect));
    }

    fn run_tour(&self) -> bool {
        self.record(HookCall::RunTour);
        !self.tour_running
    }
}

pub(crate) fn repository(name: &str, fork: bool) -> RemoteRepository {
    RemoteRepository {
        name: name.to_string(),
        description: Some(format!("{name} from the listing")),
        html_url: format!("https://github.com/dyingkasy/{name}"),
        stargazers_count: 7,
        language: Some("Rust".to_string()),
        topics: Vec::new(),
        fork,
        updated_at: None,
    }
}

pub(crate) fn project(id: &str, description: &str, source: ProjectSource) -> ProjectView {
    ProjectView {
        id: id.to_string(),
        name: id.to_string(),
        description: description.to_string(),
        stack: Vec::new(),
        url: format!("https://github.com/dyingkasy/{id}"),
        source,
        stars: None,
        updated_at: None,
        highlights: Vec::new(),
        live_url: None,
    }
}

pub(crate) fn context(
    lang: Lang,
    hooks: Rc<RecordingHooks>,
    repositories: Rc<dyn RepositorySource>,
) -> RuntimeContext {
    let content = Rc::new(PortfolioContent::default());
    RuntimeContext {
        lang,
        theme: ThemeName::Green,
        local_projects: content.local_projects(lang),
        content,
        repositories,
        remote: RemoteProjectsConfig::default(),
        hooks,
    }
}

pub(crate) fn offline_context(lang: Lang, hooks: Rc<RecordingHooks>) -> RuntimeContext {
    context(lang, hooks, Rc::new(MemoryRepositorySource::default()))
}
