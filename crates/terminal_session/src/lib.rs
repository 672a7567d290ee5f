//! Caller-side terminal session for the portfolio command engine.
//!
//! The session owns every piece of mutable terminal state (language, theme, output log, history,
//! open panels, active effects, and the tour flag) behind a reducer, and implements the
//! [`shell_engine::RuntimeHooks`] intents the stateless engine raises. Reducer transitions emit
//! [`RuntimeEffect`]s; rendering and preference writes are drained by the session, while timers,
//! panels, and the tour are handed back to the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[allow(missing_docs)]
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod session;

pub use model::{
    LineId, PrefsSnapshot, ProjectsPanel, TerminalLine, TerminalState, HISTORY_LIMIT,
};
pub use persistence::{load_prefs, persist_effect};
pub use reducer::{boot_lines, reduce_terminal, ReducerError, RuntimeEffect, TerminalAction};
pub use session::{
    OutputEvent, SessionConfig, TerminalSession, DEFAULT_TOUR_STEP_DELAY, TOUR_SCRIPT,
};
