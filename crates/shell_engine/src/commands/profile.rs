//! Static content commands: `whoami`, `skills`, `experience`, `social`, `story`.

use portfolio_content::MessageKey;
use shell_contract::OutputLine;

use crate::context::RuntimeContext;

pub(super) fn whoami(ctx: &RuntimeContext) -> Vec<OutputLine> {
    let profile = &ctx.content.profile;
    vec![
        OutputLine::system(ctx.t(MessageKey::WhoamiTitle)),
        OutputLine::text(format!("{} | {}", profile.name, profile.role.get(ctx.lang))),
        OutputLine::text(profile.summary.get(ctx.lang).as_str()),
        OutputLine::text(format!("Location: {}", profile.location)),
    ]
}

pub(super) fn skills(ctx: &RuntimeContext) -> Vec<OutputLine> {
    std::iter::once(OutputLine::system(ctx.t(MessageKey::SkillsTitle)))
        .chain(
            ctx.content
                .skills
                .iter()
                .map(|skill| OutputLine::text(format!("- {skill}"))),
        )
        .collect()
}

pub(super) fn experience(ctx: &RuntimeContext) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::system(ctx.t(MessageKey::ExperienceTitle))];
    for entry in &ctx.content.experience {
        lines.push(OutputLine::text(format!(
            "{} | {} | {}",
            entry.company,
            entry.role.get(ctx.lang),
            entry.period
        )));
        lines.extend(
            entry
                .bullets
                .get(ctx.lang)
                .iter()
                .map(|bullet| OutputLine::text(format!("  - {bullet}"))),
        );
    }
    lines
}

pub(super) fn social(ctx: &RuntimeContext) -> Vec<OutputLine> {
    std::iter::once(OutputLine::system(ctx.t(MessageKey::SocialTitle)))
        .chain(
            ctx.content
                .social
                .iter()
                .map(|link| OutputLine::text(format!("- {}: {}", link.label, link.url))),
        )
        .collect()
}

pub(super) fn story(ctx: &RuntimeContext) -> Vec<OutputLine> {
    let story = &ctx.content.story;
    std::iter::once(OutputLine::system(story.title.get(ctx.lang).as_str()))
        .chain(
            story
                .milestones
                .get(ctx.lang)
                .iter()
                .map(|milestone| OutputLine::text(milestone.as_str())),
        )
        .collect()
}
