//! Static command catalog and name resolution.
//!
//! Names and aliases are disjoint across descriptors. Nothing checks this at runtime; the
//! registry tests do.

use shell_contract::{CommandDescriptor, CommandName, Localized};

const fn command(
    name: CommandName,
    aliases: &'static [&'static str],
    pt: &'static str,
    en: &'static str,
) -> CommandDescriptor {
    CommandDescriptor {
        name,
        aliases,
        description: Localized::new(pt, en),
    }
}

/// Every registered command, in help/autocomplete order.
pub const COMMANDS: &[CommandDescriptor] = &[
    command(
        CommandName::Help,
        &["ajuda"],
        "Lista comandos disponíveis",
        "List available commands",
    ),
    command(
        CommandName::Clear,
        &["cls", "limpar"],
        "Limpa o terminal",
        "Clear terminal output",
    ),
    command(
        CommandName::Whoami,
        &["sobre", "about"],
        "Mostra perfil profissional",
        "Show professional profile",
    ),
    command(
        CommandName::Skills,
        &["habilidades"],
        "Lista principais tecnologias",
        "List key technologies",
    ),
    command(
        CommandName::Experience,
        &["exp", "experiencia"],
        "Mostra experiências",
        "Show experience history",
    ),
    command(
        CommandName::Projects,
        &["projetos"],
        "Lista projetos em destaque",
        "List featured projects",
    ),
    command(
        CommandName::Project,
        &["projeto"],
        "Detalha um projeto específico",
        "Show project details",
    ),
    command(
        CommandName::Repo,
        &[],
        "Busca repositório do GitHub por nome",
        "Find GitHub repository by name",
    ),
    command(
        CommandName::Contact,
        &["contato"],
        "Abre formulário de contato",
        "Open contact form",
    ),
    command(
        CommandName::Social,
        &["redes"],
        "Mostra links sociais",
        "Show social links",
    ),
    command(
        CommandName::Lang,
        &["idioma"],
        "Alterna idioma pt/en",
        "Switch language pt/en",
    ),
    command(
        CommandName::Theme,
        &["tema"],
        "Alterna ou define o tema (green/amber/crt)",
        "Cycle or set the theme (green/amber/crt)",
    ),
    command(
        CommandName::Matrix,
        &[],
        "Ativa efeito Matrix",
        "Enable Matrix effect",
    ),
    command(
        CommandName::Hack,
        &[],
        "Simula sequência de hacking",
        "Run fake hacking sequence",
    ),
    command(
        CommandName::Coffee,
        &["cafe"],
        "Mostra mensagem easter egg",
        "Show easter egg message",
    ),
    command(
        CommandName::Banner,
        &["logo"],
        "Exibe o banner ASCII",
        "Print the ASCII banner",
    ),
    command(
        CommandName::Story,
        &["historia", "jornada"],
        "Conta a jornada até aqui",
        "Tell the journey so far",
    ),
    command(
        CommandName::Tour,
        &["demo"],
        "Executa um tour guiado pelos comandos",
        "Run a guided tour of the commands",
    ),
];

/// Resolves a lowercased token to its canonical command. First matching descriptor wins.
pub fn resolve_command_name(token: &str) -> Option<CommandName> {
    COMMANDS
        .iter()
        .find(|descriptor| {
            descriptor.name.as_str() == token
                || descriptor.aliases.iter().any(|alias| *alias == token)
        })
        .map(|descriptor| descriptor.name)
}

/// Flat list of every name and alias, in registry order.
pub fn autocomplete_targets() -> Vec<&'static str> {
    COMMANDS
        .iter()
        .flat_map(|descriptor| {
            std::iter::once(descriptor.name.as_str()).chain(descriptor.aliases.iter().copied())
        })
        .collect()
}
