//! Project commands backed by the local catalog and the remote listing.

use portfolio_content::MessageKey;
use shell_contract::{OutputLine, ParsedCommand, ProjectView};

use super::{CommandFailure, CommandResult};
use crate::{
    context::RuntimeContext,
    merge::merge_projects,
    remote::{load_remote_projects, load_remote_repository},
};

async fn merged_projects(ctx: &RuntimeContext) -> Vec<ProjectView> {
    let remote = load_remote_projects(ctx.repositories.as_ref(), &ctx.remote).await;
    merge_projects(&ctx.local_projects, &remote)
}

pub(super) async fn list(ctx: &RuntimeContext) -> CommandResult {
    let projects = merged_projects(ctx).await;
    if ctx.hooks.open_projects(None) {
        return Ok(vec![OutputLine::system(ctx.t(MessageKey::ProjectsOpened))]);
    }
    if projects.is_empty() {
        return Err(CommandFailure::EmptyProjects);
    }

    let mut lines = Vec::with_capacity(projects.len() + 1);
    lines.push(OutputLine::system(ctx.t(MessageKey::ProjectsTitle)));
    lines.extend(projects.iter().enumerate().map(|(index, project)| {
        OutputLine::text(format!(
            "{}. {} ({}) - {}",
            index + 1,
            project.name,
            project.source.as_str(),
            project.description
        ))
    }));
    Ok(lines)
}

pub(super) async fn detail(parsed: &ParsedCommand, ctx: &RuntimeContext) -> CommandResult {
    let query = parsed.joined_args();
    if query.is_empty() {
        return Err(CommandFailure::Usage(MessageKey::UsageProject));
    }

    let needle = query.to_lowercase();
    let project = merged_projects(ctx)
        .await
        .into_iter()
        .find(|project| project.id.to_lowercase() == needle || project.name.to_lowercase() == needle)
        .ok_or(CommandFailure::EmptyProjects)?;

    ctx.hooks.open_projects(Some(query.as_str()));
    Ok(detail_lines(&project, ctx))
}

fn detail_lines(project: &ProjectView, ctx: &RuntimeContext) -> Vec<OutputLine> {
    let stack = if project.stack.is_empty() {
        "N/A".to_string()
    } else {
        project.stack.join(", ")
    };

    let mut lines = vec![
        OutputLine::system(project.name.as_str()),
        OutputLine::text(project.description.as_str()),
        OutputLine::text(format!("Stack: {stack}")),
        OutputLine::text(format!("URL: {}", project.url)),
    ];
    if let Some(stars) = project.stars {
        lines.push(OutputLine::text(format!("Stars: {stars}")));
    }
    if let Some(live_url) = &project.live_url {
        lines.push(OutputLine::text(format!("Live: {live_url}")));
    }
    if !project.highlights.is_empty() {
        lines.push(OutputLine::text(ctx.t(MessageKey::HighlightsLabel)));
        lines.extend(
            project
                .highlights
                .iter()
                .map(|highlight| OutputLine::text(format!("  - {highlight}"))),
        );
    }
    lines
}

pub(super) async fn repo(parsed: &ParsedCommand, ctx: &RuntimeContext) -> CommandResult {
    let name = parsed.joined_args();
    if name.is_empty() {
        return Err(CommandFailure::Usage(MessageKey::UsageRepo));
    }

    let repo = load_remote_repository(ctx.repositories.as_ref(), &ctx.remote, &name)
        .await
        .ok_or(CommandFailure::NotFound(MessageKey::NoRepoFound))?;

    Ok(vec![
        OutputLine::system(repo.name.as_str()),
        OutputLine::text(repo.description.as_str()),
        OutputLine::text(format!("URL: {}", repo.url)),
        OutputLine::text(format!("Stars: {}", repo.stars.unwrap_or(0))),
    ])
}
