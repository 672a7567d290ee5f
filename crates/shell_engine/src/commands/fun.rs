//! Easter eggs and visual effects.

use portfolio_content::MessageKey;
use shell_contract::{EffectId, OutputLine};

use crate::context::RuntimeContext;

const BANNER: &[&str] = &[
    " ____            _    __       _ _       ",
    "|  _ \\ ___  _ __| |_ / _| ___ | (_) ___  ",
    "| |_) / _ \\| '__| __| |_ / _ \\| | |/ _ \\ ",
    "|  __/ (_) | |  | |_|  _| (_) | | | (_) |",
    "|_|   \\___/|_|   \\__|_|  \\___/|_|_|\\___/ ",
];

const HACK_SCRIPT: [&str; 3] = [
    "Initializing handshake...",
    "Bypassing firewall...",
    "Access denied. Just kidding.",
];

pub(super) fn matrix(ctx: &RuntimeContext) -> Vec<OutputLine> {
    ctx.hooks.trigger_effect(EffectId::Matrix);
    vec![OutputLine::system("[effect] matrix enabled")]
}

pub(super) fn hack(ctx: &RuntimeContext) -> Vec<OutputLine> {
    ctx.hooks.trigger_effect(EffectId::Hack);
    let [first, rest @ ..] = HACK_SCRIPT;
    std::iter::once(OutputLine::system(first))
        .chain(rest.into_iter().map(OutputLine::text))
        .collect()
}

pub(super) fn coffee(ctx: &RuntimeContext) -> Vec<OutputLine> {
    vec![OutputLine::text(ctx.t(MessageKey::Coffee))]
}

pub(super) fn banner() -> Vec<OutputLine> {
    BANNER.iter().copied().map(OutputLine::system).collect()
}
