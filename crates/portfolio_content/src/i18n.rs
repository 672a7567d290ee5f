//! Closed-key string dictionary and language alias resolution.
//!
//! Every [`MessageKey`] is matched exhaustively per language, so a missing translation is a
//! compile error rather than a runtime fallback.

use serde::{Deserialize, Serialize};
use shell_contract::Lang;

/// Keys of the localized dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    /// Boot banner line.
    Welcome,
    /// Pointer to `help`.
    Hint,
    /// Prefix of the unknown-command error.
    CommandNotFound,
    /// Project lookup or listing came back empty.
    EmptyProjects,
    /// `repo` lookup found nothing.
    NoRepoFound,
    /// Confirmation after `lang`.
    LanguageChanged,
    /// Confirmation after `theme`.
    ThemeChanged,
    /// Contact panel opened.
    ContactOpened,
    /// Contact panel title.
    ContactTitle,
    /// Contact panel instructions.
    ContactHint,
    /// Contact field label: name.
    ContactName,
    /// Contact field label: email.
    ContactEmail,
    /// Contact field label: message.
    ContactMessage,
    /// Contact form rejected its input.
    ContactInvalid,
    /// Contact message delivered.
    ContactSent,
    /// Contact handed off to the mail client.
    ContactRedirected,
    /// Contact delivery failed outright.
    ContactFailed,
    /// `help` header.
    HelpTitle,
    /// `whoami` header.
    WhoamiTitle,
    /// `skills` header.
    SkillsTitle,
    /// `experience` header.
    ExperienceTitle,
    /// `projects` header.
    ProjectsTitle,
    /// Project browser opened.
    ProjectsOpened,
    /// Label above project highlights.
    HighlightsLabel,
    /// `social` header.
    SocialTitle,
    /// `project` usage.
    UsageProject,
    /// `lang` usage.
    UsageLang,
    /// `repo` usage.
    UsageRepo,
    /// `theme` usage.
    UsageTheme,
    /// `coffee` easter egg.
    Coffee,
    /// Tour accepted.
    TourStarted,
    /// Tour already in progress.
    TourBusy,
}

/// Returns the dictionary string for `key` in `lang`.
pub fn lookup(lang: Lang, key: MessageKey) -> &'static str {
    match lang {
        Lang::Pt => pt(key),
        Lang::En => en(key),
    }
}

fn pt(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        Welcome => "Booting portfolio terminal... pronto.",
        Hint => "Digite 'help' para ver os comandos disponíveis.",
        CommandNotFound => "Comando não encontrado:",
        EmptyProjects => "Nenhum projeto encontrado no momento.",
        NoRepoFound => "Repositório não encontrado.",
        LanguageChanged => "Idioma alterado para Português.",
        ThemeChanged => "Tema alterado:",
        ContactOpened => "Formulário de contato aberto.",
        ContactTitle => "Contato",
        ContactHint => "Preencha e envie uma mensagem.",
        ContactName => "Nome",
        ContactEmail => "Email",
        ContactMessage => "Mensagem",
        ContactInvalid => "Preencha nome, email válido e mensagem.",
        ContactSent => "Mensagem enviada. Obrigado!",
        ContactRedirected => "Abra este link no seu cliente de email:",
        ContactFailed => "Não foi possível enviar a mensagem agora.",
        HelpTitle => "Comandos disponíveis:",
        WhoamiTitle => "Perfil",
        SkillsTitle => "Habilidades",
        ExperienceTitle => "Experiência",
        ProjectsTitle => "Projetos",
        ProjectsOpened => "Navegador de projetos aberto.",
        HighlightsLabel => "Destaques:",
        SocialTitle => "Redes",
        UsageProject => "Uso: project <slug|nome>",
        UsageLang => "Uso: lang <pt|en>",
        UsageRepo => "Uso: repo <nome-do-repo>",
        UsageTheme => "Uso: theme [green|amber|crt]",
        Coffee => "Cafe detectado. Produtividade +25%.",
        TourStarted => "Iniciando tour guiado...",
        TourBusy => "O tour já está em andamento.",
    }
}

fn en(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        Welcome => "Booting portfolio terminal... ready.",
        Hint => "Type 'help' to list available commands.",
        CommandNotFound => "Command not found:",
        EmptyProjects => "No projects found right now.",
        NoRepoFound => "Repository not found.",
        LanguageChanged => "Language switched to English.",
        ThemeChanged => "Theme changed:",
        ContactOpened => "Contact form opened.",
        ContactTitle => "Contact",
        ContactHint => "Fill in the form and send a message.",
        ContactName => "Name",
        ContactEmail => "Email",
        ContactMessage => "Message",
        ContactInvalid => "Please provide a name, a valid email and a message.",
        ContactSent => "Message sent. Thank you!",
        ContactRedirected => "Open this link in your mail client:",
        ContactFailed => "The message could not be sent right now.",
        HelpTitle => "Available commands:",
        WhoamiTitle => "Profile",
        SkillsTitle => "Skills",
        ExperienceTitle => "Experience",
        ProjectsTitle => "Projects",
        ProjectsOpened => "Project browser opened.",
        HighlightsLabel => "Highlights:",
        SocialTitle => "Social",
        UsageProject => "Usage: project <slug|name>",
        UsageLang => "Usage: lang <pt|en>",
        UsageRepo => "Usage: repo <repo-name>",
        UsageTheme => "Usage: theme [green|amber|crt]",
        Coffee => "Coffee detected. Productivity +25%.",
        TourStarted => "Starting guided tour...",
        TourBusy => "A tour is already running.",
    }
}

/// Resolves a user-supplied language code or alias.
pub fn resolve_lang(value: &str) -> Option<Lang> {
    match value.trim().to_lowercase().as_str() {
        "pt" | "pt-br" | "br" | "portugues" | "portuguese" => Some(Lang::Pt),
        "en" | "en-us" | "english" => Some(Lang::En),
        _ => None,
    }
}
