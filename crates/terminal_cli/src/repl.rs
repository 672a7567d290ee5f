//! Line-oriented front end over [`TerminalSession`].

use std::{
    collections::VecDeque,
    io::{self, IsTerminal, Write},
    rc::Rc,
    time::Duration,
};

use anyhow::{Context, Result};
use platform_host::ContactPayload;
use platform_host_native::build_host_services;
use portfolio_content::{MessageKey, PortfolioContent};
use shell_contract::LineKind;
use terminal_session::{OutputEvent, RuntimeEffect, TerminalLine, TerminalSession};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

use crate::config::CliConfig;

const PROMPT: &str = "$ ";
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

type InputLines = Lines<BufReader<Stdin>>;

/// How output lines are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styling {
    ansi: bool,
}

impl Styling {
    /// ANSI colors when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            ansi: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Undecorated output.
    pub const fn plain() -> Self {
        Self { ansi: false }
    }

    /// Renders one log line for the terminal.
    pub fn render(self, kind: LineKind, text: &str) -> String {
        if !self.ansi {
            return match kind {
                LineKind::Error => format!("! {text}"),
                _ => text.to_string(),
            };
        }
        let code = match kind {
            LineKind::Text => "0",
            LineKind::Error => "31",
            LineKind::System => "1;32",
            LineKind::Command => "2",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn print_lines(styling: Styling, lines: &[TerminalLine]) {
    let mut out = io::stdout().lock();
    for line in lines {
        // A closed stdout only loses output; the session keeps the log.
        let _ = writeln!(out, "{}", styling.render(line.kind, &line.text));
    }
}

fn print_prompt(label: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{label}").context("write prompt")?;
    out.flush().context("flush prompt")
}

/// Runs the session. With `commands`, those lines are submitted in order and the loop exits;
/// otherwise lines are read from stdin until EOF or `exit`.
pub async fn run(config: CliConfig, commands: Vec<String>) -> Result<()> {
    let services = build_host_services(&config.native_host()).context("wire host services")?;
    let session = TerminalSession::boot(
        services,
        Rc::new(PortfolioContent::default()),
        config.session_config(),
    )
    .await;
    info!(
        lang = ?session.lang(),
        remote = config.remote_enabled(),
        "portfolio terminal ready"
    );

    let styling = Styling::detect();
    print_lines(styling, &session.lines());
    session.on_output(move |event| match event {
        OutputEvent::Lines(lines) => print_lines(styling, lines),
        OutputEvent::Cleared => {
            if styling.ansi {
                print!("{CLEAR_SCREEN}");
            }
        }
    });

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    if !commands.is_empty() {
        for command in commands {
            let effects = session.submit(&command).await;
            run_host_effects(&session, effects, &mut input).await?;
        }
        return Ok(());
    }

    loop {
        print_prompt(PROMPT)?;
        let Some(line) = input.next_line().await.context("read stdin")? else {
            break;
        };

        if let Some(prefix) = line.strip_suffix('\t') {
            show_completion(&session, styling, prefix);
            continue;
        }
        if EXIT_WORDS.iter().any(|word| *word == line.trim()) {
            break;
        }

        let effects = session.submit(&line).await;
        run_host_effects(&session, effects, &mut input).await?;
    }
    Ok(())
}

/// Prints the completion for a line submitted with a trailing tab.
fn show_completion(session: &TerminalSession, styling: Styling, prefix: &str) {
    let completion = session.autocomplete(prefix);
    if !completion.suggestions.is_empty() {
        println!(
            "{}",
            styling.render(LineKind::System, &completion.suggestions.join("  "))
        );
    }
    println!("{}", styling.render(LineKind::Text, &completion.value));
}

/// Executes host effects, including any raised while executing them.
async fn run_host_effects(
    session: &TerminalSession,
    effects: Vec<RuntimeEffect>,
    input: &mut InputLines,
) -> Result<()> {
    let mut queue = VecDeque::from(effects);
    while let Some(effect) = queue.pop_front() {
        match effect {
            RuntimeEffect::ScheduleEffectEnd { effect, after_ms } => {
                let session = session.clone();
                tokio::task::spawn_local(async move {
                    tokio::time::sleep(Duration::from_millis(after_ms)).await;
                    session.end_effect(effect);
                });
            }
            RuntimeEffect::StartTour => {
                queue.extend(session.run_tour(tokio::time::sleep).await);
            }
            RuntimeEffect::OpenContactPanel => collect_contact(session, input).await?,
            RuntimeEffect::OpenProjectsPanel { filter } => {
                debug!(?filter, "no project browser; closing panel");
                session.close_projects();
            }
            other => debug!(?other, "effect needs no host action"),
        }
    }
    Ok(())
}

/// Prompts for the contact fields and submits them. EOF abandons the form.
async fn collect_contact(session: &TerminalSession, input: &mut InputLines) -> Result<()> {
    println!("{} - {}", session.t(MessageKey::ContactTitle), session.t(MessageKey::ContactHint));

    let mut fields = Vec::with_capacity(3);
    for key in [
        MessageKey::ContactName,
        MessageKey::ContactEmail,
        MessageKey::ContactMessage,
    ] {
        print_prompt(&format!("{}: ", session.t(key)))?;
        match input.next_line().await.context("read contact field")? {
            Some(value) => fields.push(value),
            None => {
                session.close_contact();
                return Ok(());
            }
        }
    }

    let mut fields = fields.into_iter();
    let payload = ContactPayload {
        name: fields.next().unwrap_or_default(),
        email: fields.next().unwrap_or_default(),
        message: fields.next().unwrap_or_default(),
    };
    if let Err(err) = session.send_contact(&payload).await {
        debug!(error = %err, "contact form not sent");
        session.close_contact();
    }
    Ok(())
}
