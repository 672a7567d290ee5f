use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shell_contract::{EffectId, Lang, LineKind, ThemeName};

pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);

/// Output line with the identity assigned by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub id: LineId,
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectsPanel {
    pub filter: Option<String>,
}

/// Preferences restored at boot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrefsSnapshot {
    pub lang: Lang,
    pub theme: ThemeName,
    pub history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalState {
    pub lang: Lang,
    pub theme: ThemeName,
    pub lines: Vec<TerminalLine>,
    pub history: Vec<String>,
    /// Index into `history` while browsing with Up/Down. `None` means editing a fresh line.
    pub history_cursor: Option<usize>,
    pub contact_open: bool,
    pub projects_panel: Option<ProjectsPanel>,
    /// Active effects keyed by id, with their display duration in milliseconds.
    pub active_effects: BTreeMap<EffectId, u64>,
    pub tour_running: bool,
    /// Bumped whenever a tour starts or ends; a runner only acts while its generation is current.
    pub tour_generation: u64,
    pub next_line_id: u64,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            theme: ThemeName::default(),
            lines: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            contact_open: false,
            projects_panel: None,
            active_effects: BTreeMap::new(),
            tour_running: false,
            tour_generation: 0,
            next_line_id: 1,
        }
    }
}

impl TerminalState {
    pub fn is_effect_active(&self, effect: EffectId) -> bool {
        self.active_effects.contains_key(&effect)
    }
}
