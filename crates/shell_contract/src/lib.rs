//! Shared terminal contracts used by the command engine, the caller-side session, and hosts.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable language/theme tokens,
//! output lines, parsed commands, command metadata, and the merged project view without depending
//! on network clients, storage backends, or presentation code.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Brazilian Portuguese. Default language of the portfolio.
    #[default]
    Pt,
    /// English.
    En,
}

impl Lang {
    /// Returns the stable short code (`pt` or `en`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }
}

/// Terminal color themes. Cycling walks this set in declaration order and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Classic green phosphor.
    #[default]
    Green,
    /// Amber monochrome.
    Amber,
    /// Scanline CRT.
    Crt,
}

impl ThemeName {
    /// Fixed cycle order.
    pub const ALL: [ThemeName; 3] = [ThemeName::Green, ThemeName::Amber, ThemeName::Crt];

    /// Returns the user-facing theme token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Crt => "crt",
        }
    }

    /// Parses a theme token, ignoring surrounding whitespace and ASCII case.
    pub fn from_name(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == normalized)
    }

    /// Returns the theme following `self` in the cycle.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|theme| *theme == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Display kind of one interpreter output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Regular body text.
    Text,
    /// Failure reported to the user.
    Error,
    /// Headers, confirmations, and banners.
    System,
    /// Echo of a submitted command line.
    Command,
}

/// One unit of interpreter output. Identity is assigned by whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Display kind.
    pub kind: LineKind,
    /// Line text.
    pub text: String,
}

impl OutputLine {
    /// Creates a line of the given kind.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Body text line.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(LineKind::Text, text)
    }

    /// Error line.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    /// System line.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, text)
    }

    /// Command echo line.
    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }
}

/// Tokenized input line. An empty `name` means the input was blank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Lowercased first token.
    pub name: String,
    /// Remaining tokens with their original case.
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Returns whether the input carried no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Joins the arguments with single spaces and trims the result.
    pub fn joined_args(&self) -> String {
        self.args.join(" ").trim().to_string()
    }
}

/// Canonical command names. One variant per registered command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandName {
    /// `help`
    Help,
    /// `clear`
    Clear,
    /// `whoami`
    Whoami,
    /// `skills`
    Skills,
    /// `experience`
    Experience,
    /// `projects`
    Projects,
    /// `project <query>`
    Project,
    /// `repo <name>`
    Repo,
    /// `contact`
    Contact,
    /// `social`
    Social,
    /// `lang <code>`
    Lang,
    /// `theme [name]`
    Theme,
    /// `matrix`
    Matrix,
    /// `hack`
    Hack,
    /// `coffee`
    Coffee,
    /// `banner`
    Banner,
    /// `story`
    Story,
    /// `tour`
    Tour,
}

impl CommandName {
    /// Returns the canonical lowercase command token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Whoami => "whoami",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Project => "project",
            Self::Repo => "repo",
            Self::Contact => "contact",
            Self::Social => "social",
            Self::Lang => "lang",
            Self::Theme => "theme",
            Self::Matrix => "matrix",
            Self::Hack => "hack",
            Self::Coffee => "coffee",
            Self::Banner => "banner",
            Self::Story => "story",
            Self::Tour => "tour",
        }
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value available in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    /// Portuguese value.
    pub pt: T,
    /// English value.
    pub en: T,
}

impl<T> Localized<T> {
    /// Creates a localized pair.
    pub const fn new(pt: T, en: T) -> Self {
        Self { pt, en }
    }

    /// Returns the value for `lang`.
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Pt => &self.pt,
            Lang::En => &self.en,
        }
    }
}

/// Static registry metadata for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    /// Canonical command name.
    pub name: CommandName,
    /// Alternate tokens resolving to the same command.
    pub aliases: &'static [&'static str],
    /// Help text per language.
    pub description: Localized<&'static str>,
}

/// Provenance of a project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSource {
    /// Curated local catalog.
    Local,
    /// Remote repository listing.
    Remote,
}

impl ProjectSource {
    /// Returns the display token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// Unified project record merged from the local catalog and the remote listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// Stable lowercase identity key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-paragraph description.
    pub description: String,
    /// Ordered technology list.
    pub stack: Vec<String>,
    /// Repository URL.
    pub url: String,
    /// Record provenance.
    pub source: ProjectSource,
    /// Star count when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    /// Last remote update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Curated highlight bullets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    /// Deployed application URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// Transient visual effects the host can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectId {
    /// Falling glyph rain.
    Matrix,
    /// Glitch flash.
    Hack,
}

impl EffectId {
    /// Returns the stable effect token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Hack => "hack",
        }
    }

    /// How long the host keeps the effect active.
    pub const fn display_duration_ms(self) -> u64 {
        match self {
            Self::Matrix => 2600,
            Self::Hack => 1800,
        }
    }
}
