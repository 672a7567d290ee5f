use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
    task::Poll,
    time::Duration,
};

use futures::{
    executor::block_on,
    future::{join, poll_fn, ready},
};
use platform_host::{
    ContactDelivery, ContactError, ContactPayload, FailingRepositorySource, HostServices,
    MemoryContactChannel, MemoryPrefsStore, MemoryRepositorySource, PrefKey, RemoteRepository,
};
use portfolio_content::PortfolioContent;
use pretty_assertions::assert_eq;
use shell_contract::{Lang, LineKind};
use shell_engine::RemoteProjectsConfig;
use terminal_session::{
    ProjectsPanel, RuntimeEffect, SessionConfig, TerminalSession, TOUR_SCRIPT,
};

fn offline_config() -> SessionConfig {
    SessionConfig {
        remote: RemoteProjectsConfig::disabled(),
        ..SessionConfig::default()
    }
}

fn session(services: HostServices, config: SessionConfig) -> TerminalSession {
    TerminalSession::new(services, Rc::new(PortfolioContent::default()), config)
}

fn last_text(session: &TerminalSession) -> String {
    session
        .lines()
        .last()
        .map(|line| line.text.clone())
        .unwrap_or_default()
}

fn echoed_commands(session: &TerminalSession) -> Vec<String> {
    session
        .lines()
        .into_iter()
        .filter(|line| line.kind == LineKind::Command)
        .map(|line| line.text)
        .collect()
}

#[test]
fn language_switch_confirms_in_english_and_persists() {
    let prefs = MemoryPrefsStore::default();
    let services = HostServices {
        prefs: Rc::new(prefs.clone()),
        ..HostServices::in_memory()
    };
    let terminal = session(services.clone(), offline_config());

    block_on(terminal.submit("lang en"));
    assert_eq!(last_text(&terminal), "Language switched to English.");
    assert_eq!(terminal.lang(), Lang::En);
    assert_eq!(prefs.raw(PrefKey::Lang).as_deref(), Some("\"en\""));

    block_on(terminal.submit("help"));
    assert!(terminal
        .lines()
        .iter()
        .any(|line| line.text == "Available commands:"));

    let restored = block_on(TerminalSession::boot(
        services,
        Rc::new(PortfolioContent::default()),
        offline_config(),
    ));
    assert_eq!(restored.lang(), Lang::En);
    assert_eq!(
        restored.state().history,
        vec!["lang en".to_string(), "help".to_string()]
    );
    assert_eq!(
        prefs.raw(PrefKey::History).as_deref(),
        Some("[\"lang en\",\"help\"]")
    );
}

#[test]
fn tour_replays_the_script_and_clears_its_flag() {
    let terminal = session(HostServices::in_memory(), offline_config());

    assert_eq!(block_on(terminal.submit("tour")), vec![RuntimeEffect::StartTour]);
    assert!(terminal.is_tour_running());

    let pauses = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pauses);
    block_on(terminal.run_tour(move |delay| {
        assert_eq!(delay, Duration::from_millis(900));
        counter.set(counter.get() + 1);
        ready(())
    }));

    assert_eq!(pauses.get(), TOUR_SCRIPT.len());
    assert!(!terminal.is_tour_running());
    let mut expected = vec!["$ tour".to_string()];
    expected.extend(TOUR_SCRIPT.iter().map(|step| format!("$ {step}")));
    assert_eq!(echoed_commands(&terminal), expected);
    assert_eq!(last_text(&terminal), "2026: construindo experiencias interativas e unicas para web.");
}

#[test]
fn tour_requests_while_running_are_ignored() {
    let terminal = session(HostServices::in_memory(), offline_config());
    block_on(terminal.submit("tour"));

    assert!(block_on(terminal.submit("demo")).is_empty());
    assert_eq!(last_text(&terminal), "O tour já está em andamento.");

    let reentrant = terminal.clone();
    let raised = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&raised);
    let effects = block_on(terminal.run_tour(move |_| {
        let reentrant = reentrant.clone();
        let sink = Rc::clone(&sink);
        async move {
            let effects = reentrant.submit("tour").await;
            sink.borrow_mut().extend(effects);
        }
    }));

    assert!(effects.is_empty());
    assert!(raised.borrow().is_empty());
    assert!(!terminal.is_tour_running());
    let script_runs = echoed_commands(&terminal)
        .iter()
        .filter(|line| *line == "$ story")
        .count();
    assert_eq!(script_runs, 1);
}

#[test]
fn cancelled_tour_stops_before_the_next_step() {
    let terminal = session(HostServices::in_memory(), offline_config());
    block_on(terminal.submit("tour"));

    let canceller = terminal.clone();
    let pauses = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pauses);
    block_on(terminal.run_tour(move |_| {
        counter.set(counter.get() + 1);
        if counter.get() == 3 {
            canceller.cancel_tour();
        }
        ready(())
    }));

    assert_eq!(
        echoed_commands(&terminal),
        vec!["$ tour", "$ banner", "$ whoami"]
    );
    assert!(!terminal.is_tour_running());
}

fn yield_once() -> impl Future<Output = ()> {
    let mut yielded = false;
    poll_fn(move |cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
}

#[test]
fn restarted_tour_retires_the_cancelled_runner() {
    let terminal = session(HostServices::in_memory(), offline_config());
    block_on(terminal.submit("tour"));

    let first = terminal.run_tour(|_| yield_once());
    let restart = async {
        while !echoed_commands(&terminal)
            .iter()
            .any(|line| line == "$ whoami")
        {
            yield_once().await;
        }
        terminal.cancel_tour();
        assert_eq!(
            terminal.submit("tour").await,
            vec![RuntimeEffect::StartTour]
        );
        terminal.run_tour(|_| yield_once()).await
    };
    block_on(join(first, restart));

    let expected = vec![
        "$ tour", "$ banner", "$ whoami", "$ tour", "$ banner", "$ whoami", "$ skills",
        "$ projects", "$ story",
    ];
    assert_eq!(echoed_commands(&terminal), expected);
    assert!(!terminal.is_tour_running());
}

#[test]
fn run_tour_without_a_started_tour_does_nothing() {
    let terminal = session(HostServices::in_memory(), offline_config());
    let effects = block_on(terminal.run_tour(|_| ready(())));
    assert!(effects.is_empty());
    assert_eq!(terminal.lines().len(), 2);
}

#[test]
fn contact_flow_validates_then_delivers() {
    let channel = MemoryContactChannel::default();
    let services = HostServices {
        contact: Rc::new(channel.clone()),
        ..HostServices::in_memory()
    };
    let terminal = session(services, offline_config());

    assert_eq!(
        block_on(terminal.submit("contato")),
        vec![RuntimeEffect::OpenContactPanel]
    );
    assert!(terminal.state().contact_open);

    let mut payload = ContactPayload {
        name: "Ana".to_string(),
        email: "ana".to_string(),
        message: "Oi!".to_string(),
    };
    assert_eq!(
        block_on(terminal.send_contact(&payload)),
        Err(ContactError::InvalidEmail)
    );
    assert_eq!(
        terminal.lines().last().map(|line| line.kind),
        Some(LineKind::Error)
    );
    assert!(terminal.state().contact_open);

    payload.email = "ana@example.com".to_string();
    assert_eq!(
        block_on(terminal.send_contact(&payload)),
        Ok(ContactDelivery::Delivered)
    );
    assert_eq!(last_text(&terminal), "Mensagem enviada. Obrigado!");
    assert!(!terminal.state().contact_open);
    assert_eq!(channel.sent(), vec![payload]);
}

#[test]
fn project_browser_receives_the_query_filter() {
    let terminal = session(
        HostServices::in_memory(),
        SessionConfig {
            project_browser: true,
            ..offline_config()
        },
    );

    let effects = block_on(terminal.submit("project FichaMovel"));
    assert_eq!(
        effects,
        vec![RuntimeEffect::OpenProjectsPanel {
            filter: Some("FichaMovel".to_string())
        }]
    );
    assert_eq!(
        terminal.state().projects_panel,
        Some(ProjectsPanel {
            filter: Some("FichaMovel".to_string())
        })
    );

    terminal.close_projects();
    block_on(terminal.submit("projects"));
    assert_eq!(last_text(&terminal), "Navegador de projetos aberto.");
}

#[test]
fn remote_listing_merges_and_failures_fall_back_to_local() {
    let remote = MemoryRepositorySource::new(vec![RemoteRepository {
        name: "qualifaz-entragas".to_string(),
        description: Some("remote copy".to_string()),
        html_url: "https://github.com/dyingkasy/qualifaz-entragas".to_string(),
        stargazers_count: 3,
        language: Some("TypeScript".to_string()),
        topics: Vec::new(),
        fork: false,
        updated_at: None,
    }]);
    let online = session(
        HostServices {
            repositories: Rc::new(remote),
            ..HostServices::in_memory()
        },
        SessionConfig::default(),
    );
    block_on(online.submit("projects"));
    let listing = online
        .lines()
        .into_iter()
        .skip_while(|line| line.text != "Projetos")
        .skip(1)
        .map(|line| line.text)
        .collect::<Vec<_>>();
    assert_eq!(listing.len(), 3);
    assert!(listing[0].starts_with("1. Qualifaz-Entragas (local)"));

    let offline = session(
        HostServices {
            repositories: Rc::new(FailingRepositorySource::new("HTTP 500")),
            ..HostServices::in_memory()
        },
        SessionConfig::default(),
    );
    block_on(offline.submit("repo qualifaz-entragas"));
    assert_eq!(last_text(&offline), "Repositório não encontrado.");
}

#[test]
fn history_navigation_recalls_submitted_commands() {
    let terminal = session(HostServices::in_memory(), offline_config());
    block_on(terminal.submit("help"));
    block_on(terminal.submit("skills"));

    assert_eq!(terminal.history_next(), None);
    assert_eq!(terminal.history_previous().as_deref(), Some("skills"));
    assert_eq!(terminal.history_previous().as_deref(), Some("help"));
    assert_eq!(terminal.history_next().as_deref(), Some("skills"));
    assert_eq!(terminal.history_next().as_deref(), Some(""));
}
