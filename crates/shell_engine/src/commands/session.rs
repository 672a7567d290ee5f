//! Session commands: `help`, `clear`, `contact`, `tour`.

use portfolio_content::MessageKey;
use shell_contract::OutputLine;

use crate::{context::RuntimeContext, registry::COMMANDS};

pub(super) fn help(ctx: &RuntimeContext) -> Vec<OutputLine> {
    let mut lines = Vec::with_capacity(COMMANDS.len() + 1);
    lines.push(OutputLine::system(ctx.t(MessageKey::HelpTitle)));
    for command in COMMANDS {
        let aliases = if command.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", command.aliases.join(", "))
        };
        lines.push(OutputLine::text(format!(
            "- {}{aliases}: {}",
            command.name,
            command.description.get(ctx.lang)
        )));
    }
    lines
}

pub(super) fn clear(ctx: &RuntimeContext) -> Vec<OutputLine> {
    ctx.hooks.clear_output();
    Vec::new()
}

pub(super) fn contact(ctx: &RuntimeContext) -> Vec<OutputLine> {
    ctx.hooks.open_contact();
    vec![
        OutputLine::system(ctx.t(MessageKey::ContactOpened)),
        OutputLine::text(ctx.t(MessageKey::ContactHint)),
    ]
}

pub(super) fn tour(ctx: &RuntimeContext) -> Vec<OutputLine> {
    let key = if ctx.hooks.run_tour() {
        MessageKey::TourStarted
    } else {
        MessageKey::TourBusy
    };
    vec![OutputLine::system(ctx.t(key))]
}
