//! Reducer actions, side-effect intents, and transition logic for the terminal session.

use portfolio_content::{lookup, MessageKey};
use shell_contract::{EffectId, Lang, OutputLine, ThemeName};
use thiserror::Error;

use crate::model::{
    LineId, PrefsSnapshot, ProjectsPanel, TerminalLine, TerminalState, HISTORY_LIMIT,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_terminal`] to mutate [`TerminalState`].
pub enum TerminalAction {
    /// Restore persisted preferences.
    Hydrate {
        /// Snapshot read from the preference store.
        prefs: PrefsSnapshot,
    },
    /// Echo a submitted line and record it in history.
    SubmitInput {
        /// Raw prompt text.
        input: String,
    },
    /// Append interpreter output.
    AppendLines {
        /// Lines in display order.
        lines: Vec<OutputLine>,
    },
    /// Drop every visible line.
    ClearOutput,
    /// Switch the interface language.
    SetLang {
        /// New language.
        lang: Lang,
    },
    /// Set an explicit theme.
    SetTheme {
        /// New theme.
        theme: ThemeName,
    },
    /// Advance to the next theme.
    CycleTheme,
    /// Show the contact panel.
    OpenContact,
    /// Hide the contact panel.
    CloseContact,
    /// Show the project browser.
    OpenProjects {
        /// Optional name filter.
        filter: Option<String>,
    },
    /// Hide the project browser.
    CloseProjects,
    /// Activate a transient effect.
    StartEffect {
        /// Effect to activate.
        effect: EffectId,
    },
    /// Deactivate a transient effect once its duration elapsed.
    EndEffect {
        /// Effect to deactivate.
        effect: EffectId,
    },
    /// Mark the guided tour as running.
    BeginTour,
    /// Mark the guided tour as finished.
    EndTour,
    /// Recall an older history entry (Up).
    HistoryPrevious,
    /// Recall a newer history entry (Down).
    HistoryNext,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_terminal`].
pub enum RuntimeEffect {
    /// Persist the current language.
    PersistLang,
    /// Persist the current theme.
    PersistTheme,
    /// Persist command history.
    PersistHistory,
    /// Render newly appended lines.
    RenderLines(Vec<TerminalLine>),
    /// Clear the rendered output.
    ClearScreen,
    /// End `effect` after `after_ms` milliseconds.
    ScheduleEffectEnd {
        /// Active effect.
        effect: EffectId,
        /// Delay before [`TerminalAction::EndEffect`] should be dispatched.
        after_ms: u64,
    },
    /// Run the guided tour script.
    StartTour,
    /// Present the contact form.
    OpenContactPanel,
    /// Present the project browser.
    OpenProjectsPanel {
        /// Optional name filter.
        filter: Option<String>,
    },
    /// Replace the prompt text.
    ReplaceInput(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current state.
pub enum ReducerError {
    /// Submitted input was blank after trimming.
    #[error("submitted input is blank")]
    BlankInput,
    /// The effect to end is not active.
    #[error("effect `{}` is not active", .0.as_str())]
    EffectNotActive(EffectId),
    /// A tour was requested while another one runs.
    #[error("a tour is already running")]
    TourAlreadyRunning,
    /// A tour end was requested with no tour running.
    #[error("no tour is running")]
    TourNotRunning,
}

/// Applies a [`TerminalAction`] to the session state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action does not apply: blank submissions, ending an
/// inactive effect, or starting/ending the tour out of order.
pub fn reduce_terminal(
    state: &mut TerminalState,
    action: TerminalAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        TerminalAction::Hydrate { prefs } => {
            state.lang = prefs.lang;
            state.theme = prefs.theme;
            state.history = prefs.history;
            trim_history(&mut state.history);
            state.history_cursor = None;
        }
        TerminalAction::SubmitInput { input } => {
            let input = input.trim();
            if input.is_empty() {
                return Err(ReducerError::BlankInput);
            }
            let echo = push_lines(state, [OutputLine::command(format!("$ {input}"))]);
            state.history.push(input.to_string());
            trim_history(&mut state.history);
            state.history_cursor = None;
            effects.push(RuntimeEffect::RenderLines(echo));
            effects.push(RuntimeEffect::PersistHistory);
        }
        TerminalAction::AppendLines { lines } => {
            if !lines.is_empty() {
                effects.push(RuntimeEffect::RenderLines(push_lines(state, lines)));
            }
        }
        TerminalAction::ClearOutput => {
            state.lines.clear();
            effects.push(RuntimeEffect::ClearScreen);
        }
        TerminalAction::SetLang { lang } => {
            if state.lang != lang {
                state.lang = lang;
                effects.push(RuntimeEffect::PersistLang);
            }
        }
        TerminalAction::SetTheme { theme } => {
            if state.theme != theme {
                state.theme = theme;
                effects.push(RuntimeEffect::PersistTheme);
            }
        }
        TerminalAction::CycleTheme => {
            state.theme = state.theme.next();
            effects.push(RuntimeEffect::PersistTheme);
        }
        TerminalAction::OpenContact => {
            state.contact_open = true;
            effects.push(RuntimeEffect::OpenContactPanel);
        }
        TerminalAction::CloseContact => {
            state.contact_open = false;
        }
        TerminalAction::OpenProjects { filter } => {
            state.projects_panel = Some(ProjectsPanel {
                filter: filter.clone(),
            });
            effects.push(RuntimeEffect::OpenProjectsPanel { filter });
        }
        TerminalAction::CloseProjects => {
            state.projects_panel = None;
        }
        TerminalAction::StartEffect { effect } => {
            let after_ms = effect.display_duration_ms();
            state.active_effects.insert(effect, after_ms);
            effects.push(RuntimeEffect::ScheduleEffectEnd { effect, after_ms });
        }
        TerminalAction::EndEffect { effect } => {
            if state.active_effects.remove(&effect).is_none() {
                return Err(ReducerError::EffectNotActive(effect));
            }
        }
        TerminalAction::BeginTour => {
            if state.tour_running {
                return Err(ReducerError::TourAlreadyRunning);
            }
            state.tour_running = true;
            state.tour_generation += 1;
            effects.push(RuntimeEffect::StartTour);
        }
        TerminalAction::EndTour => {
            if !state.tour_running {
                return Err(ReducerError::TourNotRunning);
            }
            state.tour_running = false;
            state.tour_generation += 1;
        }
        TerminalAction::HistoryPrevious => {
            if let Some(last) = state.history.len().checked_sub(1) {
                let index = match state.history_cursor {
                    None => last,
                    Some(index) => index.saturating_sub(1),
                };
                state.history_cursor = Some(index);
                effects.push(RuntimeEffect::ReplaceInput(state.history[index].clone()));
            }
        }
        TerminalAction::HistoryNext => {
            if let Some(index) = state.history_cursor {
                let next = index + 1;
                if next >= state.history.len() {
                    state.history_cursor = None;
                    effects.push(RuntimeEffect::ReplaceInput(String::new()));
                } else {
                    state.history_cursor = Some(next);
                    effects.push(RuntimeEffect::ReplaceInput(state.history[next].clone()));
                }
            }
        }
    }
    Ok(effects)
}

fn push_lines(
    state: &mut TerminalState,
    lines: impl IntoIterator<Item = OutputLine>,
) -> Vec<TerminalLine> {
    let start = state.lines.len();
    for line in lines {
        let id = LineId(state.next_line_id);
        state.next_line_id += 1;
        state.lines.push(TerminalLine {
            id,
            kind: line.kind,
            text: line.text,
        });
    }
    state.lines[start..].to_vec()
}

fn trim_history(history: &mut Vec<String>) {
    if history.len() > HISTORY_LIMIT {
        let overflow = history.len() - HISTORY_LIMIT;
        history.drain(0..overflow);
    }
}

/// Boot transcript shown before any input, in `lang`.
pub fn boot_lines(lang: Lang) -> Vec<OutputLine> {
    vec![
        OutputLine::system(lookup(lang, MessageKey::Welcome)),
        OutputLine::text(lookup(lang, MessageKey::Hint)),
    ]
}
