//! Command dispatcher entry point.

use portfolio_content::MessageKey;
use shell_contract::OutputLine;
use shell_parser::parse_command;
use tracing::debug;

use crate::{commands, context::RuntimeContext, registry::resolve_command_name};

/// Parses, resolves, and runs one input line against `ctx`.
///
/// Blank input yields no lines and raises no hooks. Unknown tokens yield an error line followed
/// by the help hint. User-facing failures come back as error lines, never as `Err`.
pub async fn execute_command(raw: &str, ctx: &RuntimeContext) -> Vec<OutputLine> {
    let parsed = parse_command(raw);
    if parsed.is_empty() {
        return Vec::new();
    }

    let Some(name) = resolve_command_name(&parsed.name) else {
        debug!(token = %parsed.name, "unknown command");
        return vec![
            OutputLine::error(format!(
                "{} '{}'",
                ctx.t(MessageKey::CommandNotFound),
                parsed.name
            )),
            OutputLine::system(ctx.t(MessageKey::Hint)),
        ];
    };

    debug!(command = %name, args = parsed.args.len(), lang = ctx.lang.code(), "dispatching command");
    match commands::run(name, &parsed, ctx).await {
        Ok(lines) => lines,
        Err(failure) => {
            debug!(command = %name, ?failure, "command failed");
            vec![failure.into_line(ctx)]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{FailingRepositorySource, MemoryRepositorySource};
    use pretty_assertions::assert_eq;
    use shell_contract::{EffectId, Lang, LineKind, ProjectSource, ThemeName};

    use super::*;
    use crate::{
        registry::autocomplete_targets,
        testing::{context, offline_context, repository, HookCall, RecordingHooks},
    };

    fn run(raw: &str, ctx: &RuntimeContext) -> Vec<OutputLine> {
        block_on(execute_command(raw, ctx))
    }

    fn texts(lines: &[OutputLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn unknown_tokens_yield_error_and_hint() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = offline_context(Lang::En, hooks.clone());
        let targets = autocomplete_targets();

        for token in ["sudo", "rm", "HELPME", "\"quoted\""] {
            let lowered = token.to_lowercase();
            assert!(!targets.iter().any(|target| *target == lowered));
            let lines = run(token, &ctx);
            assert_eq!(lines.len(), 2, "{token}");
            assert_eq!(lines[0].kind, LineKind::Error);
            assert_eq!(lines[1].kind, LineKind::System);
        }
        assert_eq!(
            run("sudo make", &ctx)[0].text,
            "Command not found: 'sudo'"
        );
        assert!(hooks.calls().is_empty());
    }

    #[test]
    fn blank_input_is_a_silent_no_op() {
        let hooks = Rc::new(RecordingHooks::default());
        let repositories = MemoryRepositorySource::default();
        let ctx = context(Lang::Pt, hooks.clone(), Rc::new(repositories.clone()));

        assert!(run("", &ctx).is_empty());
        assert!(run("   \t ", &ctx).is_empty());
        assert!(hooks.calls().is_empty());
        assert_eq!(repositories.request_count(), 0);
    }

    #[test]
    fn aliases_and_case_dispatch_to_the_same_handler() {
        let ctx = offline_context(Lang::Pt, Rc::new(RecordingHooks::default()));
        assert_eq!(run("SOBRE", &ctx), run("whoami", &ctx));
        assert_eq!(run("ajuda", &ctx), run("help", &ctx));
    }

    #[test]
    fn help_lists_every_command_with_aliases() {
        let ctx = offline_context(Lang::En, Rc::new(RecordingHooks::default()));
        let lines = run("help", &ctx);

        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], OutputLine::system("Available commands:"));
        assert_eq!(lines[1].text, "- help (ajuda): List available commands");
        assert_eq!(lines[8].text, "- repo: Find GitHub repository by name");
    }

    #[test]
    fn language_switch_confirms_in_the_target_language() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = offline_context(Lang::Pt, hooks.clone());

        let lines = run("lang en", &ctx);
        assert_eq!(lines, vec![OutputLine::system("Language switched to English.")]);
        assert_eq!(hooks.calls(), vec![HookCall::SetLang(Lang::En)]);

        let lines = run("idioma PT-BR", &offline_context(Lang::En, hooks.clone()));
        assert_eq!(lines, vec![OutputLine::system("Idioma alterado para Português.")]);
    }

    #[test]
    fn usage_errors_are_localized_and_raise_no_hooks() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = offline_context(Lang::En, hooks.clone());

        assert_eq!(run("lang de", &ctx), vec![OutputLine::error("Usage: lang <pt|en>")]);
        assert_eq!(run("lang", &ctx), vec![OutputLine::error("Usage: lang <pt|en>")]);
        assert_eq!(
            run("project", &ctx),
            vec![OutputLine::error("Usage: project <slug|name>")]
        );
        assert_eq!(run("repo   ", &ctx), vec![OutputLine::error("Usage: repo <repo-name>")]);
        assert_eq!(
            run("theme purple", &ctx),
            vec![OutputLine::error("Usage: theme [green|amber|crt]")]
        );
        assert!(hooks.calls().is_empty());
    }

    #[test]
    fn theme_cycles_without_argument_and_sets_explicit_names() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = offline_context(Lang::En, hooks.clone());

        assert_eq!(run("theme", &ctx), vec![OutputLine::system("Theme changed: amber")]);
        assert_eq!(run("tema CRT", &ctx), vec![OutputLine::system("Theme changed: crt")]);
        assert_eq!(
            hooks.calls(),
            vec![HookCall::CycleTheme, HookCall::SetTheme(ThemeName::Crt)]
        );
    }

    #[test]
    fn projects_prints_merged_listing_without_a_browser() {
        let hooks = Rc::new(RecordingHooks::default());
        let repositories = MemoryRepositorySource::new(vec![
            repository("FichaMovel", false),
            repository("app.menufaz", false),
        ]);
        let ctx = context(Lang::En, hooks.clone(), Rc::new(repositories));

        let lines = run("projects", &ctx);
        assert_eq!(lines[0], OutputLine::system("Projects"));
        assert_eq!(lines.len(), 5);
        assert!(lines[1].text.starts_with("1. FichaMovel (local) - A Flutter operations app"));
        assert!(lines[2].text.starts_with("2. app.menufaz (remote) - app.menufaz from the listing"));
        assert!(lines[3].text.starts_with("3. app.menufaz (local)"));
        assert!(lines[4].text.starts_with("4. Qualifaz-Entragas (local)"));
        assert_eq!(hooks.calls(), vec![HookCall::OpenProjects(None)]);
    }

    #[test]
    fn projects_defers_to_the_project_browser_when_available() {
        let hooks = Rc::new(RecordingHooks {
            has_project_browser: true,
            ..RecordingHooks::default()
        });
        let ctx = offline_context(Lang::En, hooks.clone());

        assert_eq!(run("projetos", &ctx), vec![OutputLine::system("Project browser opened.")]);
        assert_eq!(hooks.calls(), vec![HookCall::OpenProjects(None)]);
    }

    #[test]
    fn fetch_failure_falls_back_to_local_projects() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = context(
            Lang::En,
            hooks,
            Rc::new(FailingRepositorySource::new("connection reset")),
        );

        let lines = run("projects", &ctx);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().skip(1).all(|line| line.text.contains("(local)")));
        assert_eq!(run("repo fichamovel", &ctx), vec![OutputLine::error("Repository not found.")]);
    }

    #[test]
    fn remote_data_is_fetched_again_on_every_command() {
        let repositories = MemoryRepositorySource::new(vec![repository("FichaMovel", false)]);
        let ctx = context(
            Lang::En,
            Rc::new(RecordingHooks::default()),
            Rc::new(repositories.clone()),
        );

        run("projects", &ctx);
        run("projects", &ctx);
        run("project fichamovel", &ctx);
        assert_eq!(repositories.request_count(), 3);
    }

    #[test]
    fn project_details_prefer_local_records_and_list_highlights() {
        let hooks = Rc::new(RecordingHooks::default());
        let repositories = MemoryRepositorySource::new(vec![repository("app-menufaz", false)]);
        let ctx = context(Lang::En, hooks.clone(), Rc::new(repositories));

        let lines = run("project \"APP.MENUFAZ\"", &ctx);
        assert_eq!(lines[0], OutputLine::system("app.menufaz"));
        assert!(lines[1].text.starts_with("A full delivery application"));
        assert_eq!(
            lines[2].text,
            "Stack: React, Vite, TypeScript, Node.js, Express, PostgreSQL, Docker"
        );
        assert_eq!(lines[3].text, "URL: https://github.com/dyingkasy/app.menufaz");
        assert_eq!(lines[4].text, "Live: https://app.menufaz.com");
        assert_eq!(lines[5].text, "Highlights:");
        assert_eq!(lines.len(), 11);
        assert!(lines[6].text.starts_with("  - Full-stack architecture"));
        assert_eq!(
            hooks.calls(),
            vec![HookCall::OpenProjects(Some("APP.MENUFAZ".to_string()))]
        );
    }

    #[test]
    fn project_details_for_remote_records_include_stars() {
        let repositories = MemoryRepositorySource::new(vec![repository("terminal", false)]);
        let ctx = context(
            Lang::En,
            Rc::new(RecordingHooks::default()),
            Rc::new(repositories),
        );

        // "terminal" is not on the featured allow-list, so the listing falls back to it.
        assert_eq!(
            texts(&run("project terminal", &ctx)),
            vec![
                "terminal",
                "terminal from the listing",
                "Stack: Rust",
                "URL: https://github.com/dyingkasy/terminal",
                "Stars: 7",
            ]
        );
    }

    #[test]
    fn missing_project_reports_empty_projects() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = offline_context(Lang::Pt, hooks.clone());

        assert_eq!(
            run("projeto inexistente", &ctx),
            vec![OutputLine::error("Nenhum projeto encontrado no momento.")]
        );
        assert!(hooks.calls().is_empty());
    }

    #[test]
    fn repo_lookup_uses_exact_name_and_defaults_stars() {
        let mut record = repository("portif-lio", false);
        record.stargazers_count = 0;
        record.description = None;
        let ctx = context(
            Lang::En,
            Rc::new(RecordingHooks::default()),
            Rc::new(MemoryRepositorySource::new(vec![record])),
        );

        assert_eq!(
            texts(&run("repo portif-lio", &ctx)),
            vec![
                "portif-lio",
                "No description provided.",
                "URL: https://github.com/dyingkasy/portif-lio",
                "Stars: 0",
            ]
        );
        assert_eq!(run("repo Portif-Lio", &ctx), vec![OutputLine::error("Repository not found.")]);
    }

    #[test]
    fn side_effect_commands_raise_their_hooks() {
        let hooks = Rc::new(RecordingHooks::default());
        let ctx = offline_context(Lang::En, hooks.clone());

        assert!(run("clear", &ctx).is_empty());
        assert_eq!(
            run("contact", &ctx),
            vec![
                OutputLine::system("Contact form opened."),
                OutputLine::text("Fill in the form and send a message."),
            ]
        );
        assert_eq!(run("matrix", &ctx), vec![OutputLine::system("[effect] matrix enabled")]);
        assert_eq!(run("hack", &ctx).len(), 3);
        assert_eq!(
            hooks.calls(),
            vec![
                HookCall::ClearOutput,
                HookCall::OpenContact,
                HookCall::TriggerEffect(EffectId::Matrix),
                HookCall::TriggerEffect(EffectId::Hack),
            ]
        );
    }

    #[test]
    fn tour_reports_busy_when_already_running() {
        let idle = Rc::new(RecordingHooks::default());
        assert_eq!(
            run("demo", &offline_context(Lang::En, idle.clone())),
            vec![OutputLine::system("Starting guided tour...")]
        );

        let busy = Rc::new(RecordingHooks {
            tour_running: true,
            ..RecordingHooks::default()
        });
        assert_eq!(
            run("tour", &offline_context(Lang::En, busy.clone())),
            vec![OutputLine::system("A tour is already running.")]
        );
        assert_eq!(busy.calls(), vec![HookCall::RunTour]);
    }

    #[test]
    fn story_prints_title_and_three_milestones() {
        let ctx = offline_context(Lang::Pt, Rc::new(RecordingHooks::default()));
        let lines = run("historia", &ctx);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], OutputLine::system("Jornada"));
        assert_eq!(
            lines[3],
            OutputLine::text("2026: construindo experiencias interativas e unicas para web.")
        );
    }

    #[test]
    fn static_content_commands_render_in_context_language() {
        let ctx = offline_context(Lang::En, Rc::new(RecordingHooks::default()));

        assert_eq!(
            texts(&run("whoami", &ctx))[..2],
            ["Profile", "Igor | Full-Stack Developer"]
        );
        assert_eq!(run("skills", &ctx).len(), 8);
        assert_eq!(
            texts(&run("exp", &ctx))[1],
            "Independent Projects | Software Developer | 2024 - Atual"
        );
        assert_eq!(
            run("redes", &ctx)[1],
            OutputLine::text("- GitHub: https://github.com/dyingkasy")
        );
        assert_eq!(
            run("cafe", &ctx),
            vec![OutputLine::text("Coffee detected. Productivity +25%.")]
        );
        let banner = run("logo", &ctx);
        assert!(!banner.is_empty());
        assert!(banner.iter().all(|line| line.kind == LineKind::System));
    }

    #[test]
    fn merged_projects_keep_local_source_tag() {
        let repositories = MemoryRepositorySource::new(vec![repository("fichamovel", false)]);
        let ctx = context(
            Lang::En,
            Rc::new(RecordingHooks::default()),
            Rc::new(repositories),
        );
        let lines = run("projects", &ctx);
        assert!(lines[1].text.contains(ProjectSource::Local.as_str()));
    }
}
