//! `lang` and `theme`.

use portfolio_content::{lookup, resolve_lang, MessageKey};
use shell_contract::{OutputLine, ParsedCommand, ThemeName};

use super::{CommandFailure, CommandResult};
use crate::context::RuntimeContext;

pub(super) fn lang(parsed: &ParsedCommand, ctx: &RuntimeContext) -> CommandResult {
    let target = parsed
        .args
        .first()
        .and_then(|code| resolve_lang(code))
        .ok_or(CommandFailure::Usage(MessageKey::UsageLang))?;

    ctx.hooks.set_lang(target);
    // Confirmation is rendered in the language being switched to.
    Ok(vec![OutputLine::system(lookup(
        target,
        MessageKey::LanguageChanged,
    ))])
}

pub(super) fn theme(parsed: &ParsedCommand, ctx: &RuntimeContext) -> CommandResult {
    let theme = match parsed.args.first() {
        None => {
            ctx.hooks.cycle_theme();
            ctx.theme.next()
        }
        Some(raw) => {
            let theme = ThemeName::from_name(raw)
                .ok_or(CommandFailure::Usage(MessageKey::UsageTheme))?;
            ctx.hooks.set_theme(theme);
            theme
        }
    };
    Ok(vec![OutputLine::system(format!(
        "{} {}",
        ctx.t(MessageKey::ThemeChanged),
        theme.as_str()
    ))])
}
