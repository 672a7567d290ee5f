//! Caller-side state container driving the command engine.

use std::{cell::RefCell, future::Future, mem, rc::Rc, time::Duration};

use platform_host::{ContactDelivery, ContactError, ContactPayload, HostServices};
use portfolio_content::{lookup, MessageKey, PortfolioContent};
use shell_contract::{EffectId, Lang, OutputLine, ThemeName};
use shell_engine::{
    autocomplete_targets, complete, execute_command, Completion, RemoteProjectsConfig,
    RuntimeContext, RuntimeHooks,
};
use tracing::{debug, info, warn};

use crate::{
    model::{PrefsSnapshot, TerminalLine, TerminalState},
    persistence::{load_prefs, persist_effect},
    reducer::{boot_lines, reduce_terminal, ReducerError, RuntimeEffect, TerminalAction},
};

/// Commands replayed by the guided tour, in order.
pub const TOUR_SCRIPT: [&str; 5] = ["banner", "whoami", "skills", "projects", "story"];

/// Default pause before each tour step.
pub const DEFAULT_TOUR_STEP_DELAY: Duration = Duration::from_millis(900);

/// Session wiring chosen by the host.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Remote repository owner and featured allow-list.
    pub remote: RemoteProjectsConfig,
    /// Whether the host renders a project browser for `projects`/`project`.
    pub project_browser: bool,
    /// Pause before each tour step.
    pub tour_step_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            remote: RemoteProjectsConfig::default(),
            project_browser: false,
            tour_step_delay: DEFAULT_TOUR_STEP_DELAY,
        }
    }
}

/// Rendering notification delivered to output listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEvent<'a> {
    /// Lines appended to the log.
    Lines(&'a [TerminalLine]),
    /// The log was cleared.
    Cleared,
}

type OutputListener = Box<dyn Fn(OutputEvent<'_>)>;

struct SessionInner {
    state: RefCell<TerminalState>,
    effects: RefCell<Vec<RuntimeEffect>>,
    listeners: RefCell<Vec<OutputListener>>,
    services: HostServices,
    content: Rc<PortfolioContent>,
    config: SessionConfig,
}

/// Shared handle to one terminal session. Clones refer to the same state.
#[derive(Clone)]
pub struct TerminalSession {
    inner: Rc<SessionInner>,
}

impl TerminalSession {
    /// Creates a session with default preferences and the boot transcript.
    pub fn new(
        services: HostServices,
        content: Rc<PortfolioContent>,
        config: SessionConfig,
    ) -> Self {
        Self::assemble(services, content, config, PrefsSnapshot::default())
    }

    /// Creates a session hydrated from the preference store.
    pub async fn boot(
        services: HostServices,
        content: Rc<PortfolioContent>,
        config: SessionConfig,
    ) -> Self {
        let prefs = load_prefs(services.prefs.as_ref()).await;
        Self::assemble(services, content, config, prefs)
    }

    fn assemble(
        services: HostServices,
        content: Rc<PortfolioContent>,
        config: SessionConfig,
        prefs: PrefsSnapshot,
    ) -> Self {
        let session = Self {
            inner: Rc::new(SessionInner {
                state: RefCell::new(TerminalState::default()),
                effects: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
                services,
                content,
                config,
            }),
        };
        session.enqueue(TerminalAction::Hydrate { prefs });
        let lang = session.lang();
        session.enqueue(TerminalAction::AppendLines {
            lines: boot_lines(lang),
        });
        // Nobody is listening yet; the boot transcript is read through `lines()`.
        session.inner.effects.borrow_mut().clear();
        session
    }

    /// Snapshot of the full session state.
    pub fn state(&self) -> TerminalState {
        self.inner.state.borrow().clone()
    }

    /// Current interface language.
    pub fn lang(&self) -> Lang {
        self.inner.state.borrow().lang
    }

    /// Current theme.
    pub fn theme(&self) -> ThemeName {
        self.inner.state.borrow().theme
    }

    /// Visible output log.
    pub fn lines(&self) -> Vec<TerminalLine> {
        self.inner.state.borrow().lines.clone()
    }

    /// Dictionary lookup in the current language.
    pub fn t(&self, key: MessageKey) -> &'static str {
        lookup(self.lang(), key)
    }

    /// Registers a rendering listener for appended lines and clears.
    pub fn on_output(&self, listener: impl Fn(OutputEvent<'_>) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    fn reduce(&self, action: TerminalAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        let mut state = self.inner.state.borrow_mut();
        reduce_terminal(&mut state, action)
    }

    fn enqueue(&self, action: TerminalAction) -> bool {
        match self.reduce(action) {
            Ok(effects) => {
                self.inner.effects.borrow_mut().extend(effects);
                true
            }
            Err(err) => {
                debug!(error = %err, "terminal action ignored");
                false
            }
        }
    }

    /// Drains queued effects in order.
    ///
    /// Rendering and persistence effects are handled here; everything else is returned for the
    /// host to execute.
    pub async fn drain_effects(&self) -> Vec<RuntimeEffect> {
        let mut host_effects = Vec::new();
        loop {
            let queued = mem::take(&mut *self.inner.effects.borrow_mut());
            if queued.is_empty() {
                return host_effects;
            }
            for effect in queued {
                match effect {
                    RuntimeEffect::RenderLines(lines) => self.notify(OutputEvent::Lines(&lines)),
                    RuntimeEffect::ClearScreen => self.notify(OutputEvent::Cleared),
                    RuntimeEffect::PersistLang
                    | RuntimeEffect::PersistTheme
                    | RuntimeEffect::PersistHistory => {
                        let state = self.state();
                        let store = self.inner.services.prefs.as_ref();
                        if let Err(err) = persist_effect(store, &state, &effect).await {
                            warn!(?effect, error = %err, "preference write failed");
                        }
                    }
                    other => host_effects.push(other),
                }
            }
        }
    }

    fn notify(&self, event: OutputEvent<'_>) {
        for listener in self.inner.listeners.borrow().iter() {
            listener(event);
        }
    }

    fn runtime_context(&self) -> RuntimeContext {
        let (lang, theme) = {
            let state = self.inner.state.borrow();
            (state.lang, state.theme)
        };
        RuntimeContext {
            lang,
            theme,
            content: Rc::clone(&self.inner.content),
            local_projects: self.inner.content.local_projects(lang),
            repositories: Rc::clone(&self.inner.services.repositories),
            remote: self.inner.config.remote.clone(),
            hooks: Rc::new(self.clone()),
        }
    }

    /// Echoes, records, and executes one prompt line.
    ///
    /// Blank input is ignored. Returns the effects the host must execute (effect timers, tour
    /// start, panels).
    pub async fn submit(&self, input: &str) -> Vec<RuntimeEffect> {
        let input = input.trim();
        if !self.enqueue(TerminalAction::SubmitInput {
            input: input.to_string(),
        }) {
            return Vec::new();
        }

        let ctx = self.runtime_context();
        let lines = execute_command(input, &ctx).await;
        drop(ctx);

        self.enqueue(TerminalAction::AppendLines { lines });
        self.drain_effects().await
    }

    /// Completes the prompt against the command registry.
    pub fn autocomplete(&self, input: &str) -> Completion {
        complete(input, &autocomplete_targets())
    }

    fn navigate(&self, action: TerminalAction) -> Option<String> {
        self.reduce(action)
            .ok()?
            .into_iter()
            .find_map(|effect| match effect {
                RuntimeEffect::ReplaceInput(value) => Some(value),
                _ => None,
            })
    }

    /// Up arrow: returns the prompt text to show, if it changes.
    pub fn history_previous(&self) -> Option<String> {
        self.navigate(TerminalAction::HistoryPrevious)
    }

    /// Down arrow: returns the prompt text to show, if it changes.
    pub fn history_next(&self) -> Option<String> {
        self.navigate(TerminalAction::HistoryNext)
    }

    /// Ends an effect whose display duration elapsed.
    pub fn end_effect(&self, effect: EffectId) {
        self.enqueue(TerminalAction::EndEffect { effect });
    }

    /// Hides the contact panel.
    pub fn close_contact(&self) {
        self.enqueue(TerminalAction::CloseContact);
    }

    /// Hides the project browser.
    pub fn close_projects(&self) {
        self.enqueue(TerminalAction::CloseProjects);
    }

    /// Stops the running tour before its next step.
    pub fn cancel_tour(&self) {
        if self.enqueue(TerminalAction::EndTour) {
            info!("tour cancelled");
        }
    }

    async fn append(&self, lines: Vec<OutputLine>) -> Vec<RuntimeEffect> {
        self.enqueue(TerminalAction::AppendLines { lines });
        self.drain_effects().await
    }

    /// Validates and delivers a contact message, reporting the outcome in the log.
    ///
    /// The contact panel closes once the message is delivered or handed to the mail client.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or [`ContactError::Delivery`] when the channel fails.
    pub async fn send_contact(
        &self,
        payload: &ContactPayload,
    ) -> Result<ContactDelivery, ContactError> {
        if let Err(err) = payload.validate() {
            self.append(vec![OutputLine::error(self.t(MessageKey::ContactInvalid))])
                .await;
            return Err(err);
        }

        let channel = Rc::clone(&self.inner.services.contact);
        match channel.submit(payload, self.t(MessageKey::ContactName)).await {
            Ok(delivery) => {
                let lines = match &delivery {
                    ContactDelivery::Delivered => {
                        vec![OutputLine::system(self.t(MessageKey::ContactSent))]
                    }
                    ContactDelivery::MailClient { url } => vec![
                        OutputLine::text(self.t(MessageKey::ContactRedirected)),
                        OutputLine::text(url.as_str()),
                    ],
                };
                self.enqueue(TerminalAction::CloseContact);
                self.append(lines).await;
                Ok(delivery)
            }
            Err(err) => {
                warn!(error = %err, "contact delivery failed");
                self.append(vec![OutputLine::error(self.t(MessageKey::ContactFailed))])
                    .await;
                Err(ContactError::Delivery(err))
            }
        }
    }

    /// Replays [`TOUR_SCRIPT`] after a `tour` command started it.
    ///
    /// `sleep` provides the per-step pause. The run stops early when its tour is cancelled, even if
    /// another tour started in the meantime, and does nothing when no tour was started. Returns
    /// host effects raised by the steps.
    pub async fn run_tour<S, F>(&self, sleep: S) -> Vec<RuntimeEffect>
    where
        S: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        let mut host_effects = Vec::new();
        let Some(generation) = self.current_tour() else {
            debug!("tour run requested without an active tour");
            return host_effects;
        };

        info!(generation, steps = TOUR_SCRIPT.len(), "tour started");
        for step in TOUR_SCRIPT {
            sleep(self.inner.config.tour_step_delay).await;
            if self.current_tour() != Some(generation) {
                debug!(generation, "tour superseded");
                return host_effects;
            }
            host_effects.extend(self.submit(step).await);
        }
        if self.current_tour() != Some(generation) {
            return host_effects;
        }
        self.enqueue(TerminalAction::EndTour);
        host_effects.extend(self.drain_effects().await);
        info!("tour finished");
        host_effects
    }

    /// Whether the guided tour is running.
    pub fn is_tour_running(&self) -> bool {
        self.inner.state.borrow().tour_running
    }

    fn current_tour(&self) -> Option<u64> {
        let state = self.inner.state.borrow();
        state.tour_running.then_some(state.tour_generation)
    }
}

impl RuntimeHooks for TerminalSession {
    fn set_lang(&self, lang: Lang) {
        self.enqueue(TerminalAction::SetLang { lang });
    }

    fn cycle_theme(&self) {
        self.enqueue(TerminalAction::CycleTheme);
    }

    fn set_theme(&self, theme: ThemeName) {
        self.enqueue(TerminalAction::SetTheme { theme });
    }

    fn clear_output(&self) {
        self.enqueue(TerminalAction::ClearOutput);
    }

    fn open_contact(&self) {
        self.enqueue(TerminalAction::OpenContact);
    }

    fn open_projects(&self, filter: Option<&str>) -> bool {
        if !self.inner.config.project_browser {
            return false;
        }
        self.enqueue(TerminalAction::OpenProjects {
            filter: filter.map(str::to_string),
        })
    }

    fn trigger_effect(&self, effect: EffectId) {
        self.enqueue(TerminalAction::StartEffect { effect });
    }

    fn run_tour(&self) -> bool {
        self.enqueue(TerminalAction::BeginTour)
    }
}
