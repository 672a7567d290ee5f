//! Command handlers grouped by family.

mod fun;
mod prefs;
mod profile;
mod projects;
mod session;

use portfolio_content::MessageKey;
use shell_contract::{CommandName, OutputLine, ParsedCommand};

use crate::context::RuntimeContext;

/// User-facing failure detected by a handler. Rendered as a single error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandFailure {
    /// Missing or malformed argument; carries the usage string key.
    Usage(MessageKey),
    /// Well-formed lookup that matched nothing remotely.
    NotFound(MessageKey),
    /// Project query or listing came back empty.
    EmptyProjects,
}

impl CommandFailure {
    fn message_key(self) -> MessageKey {
        match self {
            Self::Usage(key) | Self::NotFound(key) => key,
            Self::EmptyProjects => MessageKey::EmptyProjects,
        }
    }

    pub(crate) fn into_line(self, ctx: &RuntimeContext) -> OutputLine {
        OutputLine::error(ctx.t(self.message_key()))
    }
}

pub(crate) type CommandResult = Result<Vec<OutputLine>, CommandFailure>;

pub(crate) async fn run(
    name: CommandName,
    parsed: &ParsedCommand,
    ctx: &RuntimeContext,
) -> CommandResult {
    match name {
        CommandName::Help => Ok(session::help(ctx)),
        CommandName::Clear => Ok(session::clear(ctx)),
        CommandName::Contact => Ok(session::contact(ctx)),
        CommandName::Tour => Ok(session::tour(ctx)),
        CommandName::Whoami => Ok(profile::whoami(ctx)),
        CommandName::Skills => Ok(profile::skills(ctx)),
        CommandName::Experience => Ok(profile::experience(ctx)),
        CommandName::Social => Ok(profile::social(ctx)),
        CommandName::Story => Ok(profile::story(ctx)),
        CommandName::Projects => projects::list(ctx).await,
        CommandName::Project => projects::detail(parsed, ctx).await,
        CommandName::Repo => projects::repo(parsed, ctx).await,
        CommandName::Lang => prefs::lang(parsed, ctx),
        CommandName::Theme => prefs::theme(parsed, ctx),
        CommandName::Matrix => Ok(fun::matrix(ctx)),
        CommandName::Hack => Ok(fun::hack(ctx)),
        CommandName::Coffee => Ok(fun::coffee(ctx)),
        CommandName::Banner => Ok(fun::banner()),
    }
}
