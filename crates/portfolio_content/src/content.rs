//! Static portfolio content: profile, skills, experience, social links, curated projects, story.

use serde::{Deserialize, Serialize};
use shell_contract::{Lang, Localized, ProjectSource, ProjectView};

/// Professional profile shown by `whoami`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Job title.
    pub role: Localized<String>,
    /// Short bio.
    pub summary: Localized<String>,
    /// Free-form location.
    pub location: String,
}

/// One experience entry with nested bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Company or context.
    pub company: String,
    /// Role held.
    pub role: Localized<String>,
    /// Human-readable period.
    pub period: String,
    /// Achievement bullets.
    pub bullets: Localized<Vec<String>>,
}

/// Labeled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Link label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// Curated project record from the local catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProject {
    /// Stable identity key.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Description per language.
    pub description: Localized<String>,
    /// Highlight bullets per language.
    pub highlights: Localized<Vec<String>>,
    /// Technology list.
    pub stack: Vec<String>,
    /// Repository URL.
    pub url: String,
    /// Deployed application URL.
    #[serde(default)]
    pub live_url: Option<String>,
}

impl FeaturedProject {
    /// Projects this record into a [`ProjectView`] for `lang`.
    pub fn to_view(&self, lang: Lang) -> ProjectView {
        ProjectView {
            id: self.slug.to_lowercase(),
            name: self.name.clone(),
            description: self.description.get(lang).clone(),
            stack: self.stack.clone(),
            url: self.url.clone(),
            source: ProjectSource::Local,
            stars: None,
            updated_at: None,
            highlights: self.highlights.get(lang).clone(),
            live_url: self.live_url.clone(),
        }
    }
}

/// Short narrative printed by `story`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Header line.
    pub title: Localized<String>,
    /// Exactly three milestone lines.
    pub milestones: Localized<[String; 3]>,
}

/// Everything the interpreter can show about the portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    /// Profile card.
    pub profile: Profile,
    /// Skill list.
    pub skills: Vec<String>,
    /// Experience history.
    pub experience: Vec<ExperienceEntry>,
    /// Social links.
    pub social: Vec<SocialLink>,
    /// Curated local projects.
    pub featured_projects: Vec<FeaturedProject>,
    /// Journey narrative.
    pub story: Story,
}

impl PortfolioContent {
    /// Local project catalog rendered for `lang`.
    pub fn local_projects(&self, lang: Lang) -> Vec<ProjectView> {
        self.featured_projects
            .iter()
            .map(|project| project.to_view(lang))
            .collect()
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

fn l(pt: &str, en: &str) -> Localized<String> {
    Localized::new(s(pt), s(en))
}

fn lv(pt: &[&str], en: &[&str]) -> Localized<Vec<String>> {
    Localized::new(
        pt.iter().copied().map(s).collect(),
        en.iter().copied().map(s).collect(),
    )
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: s("Igor"),
                role: l("Desenvolvedor Full-Stack", "Full-Stack Developer"),
                summary: l(
                    "Tenho 18 anos e transformo ideias em produtos web completos, conectando frontend, backend e automações com foco em performance, usabilidade e resultado real.",
                    "I am 18 years old and I turn ideas into complete web products, connecting frontend, backend and automation with focus on performance, usability and real impact.",
                ),
                location: s("Brazil"),
            },
            skills: [
                "TypeScript",
                "React",
                "Node.js",
                "Pascal",
                "APIs",
                "Automation",
                "GitHub Actions",
            ]
            .into_iter()
            .map(s)
            .collect(),
            experience: vec![ExperienceEntry {
                company: s("Independent Projects"),
                role: l("Desenvolvedor de Software", "Software Developer"),
                period: s("2024 - Atual"),
                bullets: lv(
                    &[
                        "Desenvolvimento de aplicações e integrações orientadas a negócios.",
                        "Construção de APIs e fluxos automatizados para operações internas.",
                        "Criação de interfaces interativas com deploy contínuo.",
                    ],
                    &[
                        "Built business-oriented applications and integrations.",
                        "Created APIs and automated workflows for internal operations.",
                        "Delivered interactive interfaces with continuous deployment.",
                    ],
                ),
            }],
            social: vec![
                SocialLink {
                    label: s("GitHub"),
                    url: s("https://github.com/dyingkasy"),
                },
                SocialLink {
                    label: s("Instagram"),
                    url: s("https://instagram.com/lg0r_n"),
                },
                SocialLink {
                    label: s("Email"),
                    url: s("mailto:dyingkasy@outlook.com"),
                },
                SocialLink {
                    label: s("Portfolio Repo"),
                    url: s("https://github.com/dyingkasy/portif-lio"),
                },
            ],
            featured_projects: default_featured_projects(),
            story: Story {
                title: l("Jornada", "Journey"),
                milestones: Localized::new(
                    [
                        s("2022: primeiras linhas de código com Pascal e muita curiosidade."),
                        s("2024: projetos reais com APIs, automações e deploy contínuo."),
                        s("2026: construindo experiencias interativas e unicas para web."),
                    ],
                    [
                        s("2022: first lines of code with Pascal and a lot of curiosity."),
                        s("2024: real projects with APIs, automation and continuous deployment."),
                        s("2026: building interactive and unique web experiences."),
                    ],
                ),
            },
        }
    }
}

fn default_featured_projects() -> Vec<FeaturedProject> {
    vec![
        FeaturedProject {
            slug: s("app-menufaz"),
            name: s("app.menufaz"),
            description: l(
                "Aplicativo completo de delivery com painel administrativo, fluxo de pedidos e infraestrutura de deploy em Docker, combinando frontend React/Vite e backend Node/Express com PostgreSQL.",
                "A full delivery application with admin workflow and Docker-based deployment, combining a React/Vite frontend and a Node/Express backend backed by PostgreSQL.",
            ),
            highlights: lv(
                &[
                    "Arquitetura full-stack: React/Vite no frontend + API Express no backend.",
                    "Banco PostgreSQL com schema inicial e evolucao via migrations/ensure tables.",
                    "Autenticacao via JWT, controle de roles e validacao de UUID em rotas.",
                    "Deploy em producao com Docker Compose e proxy (Caddy) com SSL automatico.",
                    "Camadas de dominio usando JSONB para dados flexiveis por loja/produto/pedido.",
                ],
                &[
                    "Full-stack architecture: React/Vite frontend + Express API backend.",
                    "PostgreSQL with initial schema and ongoing schema hardening (ensure tables).",
                    "JWT authentication, role-based behavior, and UUID validation in routes.",
                    "Production deployment via Docker Compose + reverse proxy (Caddy) with auto SSL.",
                    "JSONB-based domain storage for flexible store/product/order data.",
                ],
            ),
            stack: ["React", "Vite", "TypeScript", "Node.js", "Express", "PostgreSQL", "Docker"]
                .into_iter()
                .map(s)
                .collect(),
            url: s("https://github.com/dyingkasy/app.menufaz"),
            live_url: Some(s("https://app.menufaz.com")),
        },
        FeaturedProject {
            slug: s("qualifaz-entragas"),
            name: s("Qualifaz-Entragas"),
            description: l(
                "Hub operacional para pedidos e entregas: dashboard React com modulos (cozinha, kanban, financeiro, usuarios) e backend Node/Express + Postgres com eventos em tempo real (SSE).",
                "An operations hub for orders and deliveries: a React dashboard with modules (kitchen, kanban, finance, users) plus a Node/Express + Postgres backend with real-time updates (SSE).",
            ),
            highlights: lv(
                &[
                    "Frontend com dashboard e graficos (Recharts) e varios modulos operacionais.",
                    "Backend Express com endpoints de saude, downloads e fluxo de pedidos.",
                    "Atualizacoes em tempo real via SSE para acompanhar pedidos por empresa.",
                    "Infra Docker Compose com web + api + Postgres para ambiente reproduzivel.",
                    "Camada de autenticacao por token e separacao por companyId.",
                ],
                &[
                    "Dashboard frontend with charts (Recharts) and multiple operations modules.",
                    "Express backend with health, downloads, and order workflow endpoints.",
                    "Real-time updates via SSE to track orders per company.",
                    "Docker Compose stack (web + api + Postgres) for reproducible environments.",
                    "Token-based authentication layer and company-bound access.",
                ],
            ),
            stack: [
                "React",
                "Vite",
                "TypeScript",
                "Node.js",
                "Express",
                "PostgreSQL",
                "Docker",
                "SSE",
            ]
            .into_iter()
            .map(s)
            .collect(),
            url: s("https://github.com/dyingkasy/Qualifaz-Entragas"),
            live_url: None,
        },
        FeaturedProject {
            slug: s("fichamovel"),
            name: s("FichaMovel"),
            description: l(
                "Aplicativo Flutter para operacao (venda, resgate, fechamento e relatorios) com estado via Provider e persistencia local com Hive, organizado por camadas (data/domain/screens/widgets).",
                "A Flutter operations app (sell, redeem, close, reports) using Provider for state and Hive for local persistence, organized into layers (data/domain/screens/widgets).",
            ),
            highlights: lv(
                &[
                    "Flutter + Provider para gerenciamento de estado e navegacao por perfis (roles).",
                    "Persistencia offline com Hive/Hive Flutter e inicializacao no bootstrap.",
                    "Tela por modulos: Sell, Redeem (scanner), Close, Reports e Live.",
                    "Camada de tema e design system (colors/typography/spacing/widgets).",
                    "Export/compartilhamento com CSV/PDF/Printing e integracoes de utilidade.",
                ],
                &[
                    "Flutter + Provider for state management and role-based navigation.",
                    "Offline persistence with Hive/Hive Flutter initialized at app bootstrap.",
                    "Module-based screens: Sell, Redeem (scanner), Close, Reports and Live.",
                    "Theme layer and design system (colors/typography/spacing/widgets).",
                    "Export/sharing via CSV/PDF/Printing and utility integrations.",
                ],
            ),
            stack: ["Flutter", "Dart", "Provider", "Hive", "Mobile Scanner", "PDF/Printing"]
                .into_iter()
                .map(s)
                .collect(),
            url: s("https://github.com/dyingkasy/FichaMovel"),
            live_url: None,
        },
    ]
}
