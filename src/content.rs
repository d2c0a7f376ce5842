//! Portfolio content model.
//!
//! The data half of the page: who the developer is, what they built, who
//! vouches for them. Presentation copy (section headings, key hints) lives in
//! the renderer; this module only carries data.
//!
//! A profile can be loaded from a TOML file with `Profile::load`, or the
//! built-in sample (`Profile::builtin`) is used. Loaded profiles are
//! normalized: strings trimmed, skill levels clamped to 100, a zero type
//! delay corrected back to the default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::state::sections::Section;

/// Default typewriter delay in milliseconds when a profile leaves it unset.
pub const DEFAULT_TYPE_DELAY_MS: u64 = 100;

fn default_type_delay() -> u64 {
    DEFAULT_TYPE_DELAY_MS
}

// =============================================================================
// MODEL
// =============================================================================

/// Everything the page renders, minus the styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    /// Hero line above the typed text ("Olá, eu sou").
    pub greeting: String,
    /// The text the typewriter reveals.
    pub typewriter_text: String,
    #[serde(default = "default_type_delay")]
    pub type_delay_ms: u64,
    /// Intro paragraph under the typed line.
    pub tagline: String,
    pub about: About,
    pub skill_groups: Vec<SkillGroup>,
    /// Short tech names shown as a badge row under the skill bars.
    pub badges: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
    pub social: Vec<SocialLink>,
    /// Optional accent color override ("#RRGGBB"), applied over the preset.
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct About {
    pub subheading: String,
    pub paragraphs: Vec<String>,
    pub facts: Vec<Fact>,
}

/// A label/value pair in the about grid ("Localização: São Paulo, Brasil").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0-100. Values above 100 are clamped on load.
    pub level: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExperienceEntry {
    pub period: String,
    pub company: String,
    pub role: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.phone.is_empty() && self.email.is_empty() && self.location.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

// =============================================================================
// LOADING
// =============================================================================

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Profile {
    /// Load a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let mut profile: Self = toml::from_str(&contents)?;
        profile.normalize();
        Ok(profile)
    }

    /// Load from `path` when given, otherwise fall back to the built-in
    /// sample portfolio.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ProfileError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Whether a section has any content to render.
    ///
    /// Empty sections are left off the page entirely, so the section tracker
    /// never sees them.
    pub fn has_section(&self, section: Section) -> bool {
        match section {
            Section::Home => true,
            Section::About => !self.about.paragraphs.is_empty() || !self.about.facts.is_empty(),
            Section::Skills => !self.skill_groups.is_empty(),
            Section::Projects => !self.projects.is_empty(),
            Section::Experience => !self.experience.is_empty(),
            Section::Services => !self.services.is_empty(),
            Section::Testimonials => !self.testimonials.is_empty(),
            Section::Contact => !self.contact.is_empty() || !self.social.is_empty(),
        }
    }

    /// Sections present in this profile, in declared viewing order.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.has_section(*s))
            .collect()
    }

    fn normalize(&mut self) {
        if self.type_delay_ms == 0 {
            self.type_delay_ms = DEFAULT_TYPE_DELAY_MS;
        }
        for group in &mut self.skill_groups {
            for skill in &mut group.skills {
                skill.level = skill.level.min(100);
            }
        }
        for badge in &mut self.badges {
            *badge = badge.trim().to_string();
        }
        self.badges.retain(|b| !b.is_empty());
        if let Some(accent) = &self.accent {
            if accent.trim().is_empty() {
                self.accent = None;
            }
        }
    }
}

// =============================================================================
// BUILT-IN SAMPLE
// =============================================================================

impl Profile {
    /// The sample portfolio shown when no profile file is given.
    pub fn builtin() -> Self {
        Self {
            name: "João Silva".into(),
            brand: "DevPortfolio".into(),
            greeting: "Olá, eu sou".into(),
            typewriter_text: "Desenvolvedor Full Stack Senior".into(),
            type_delay_ms: 80,
            tagline: "Especialista em criar soluções web e mobile de alta performance, \
                      com mais de 10 anos de experiência em desenvolvimento de software."
                .into(),
            about: About {
                subheading: "Desenvolvedor Full Stack com foco em soluções escaláveis".into(),
                paragraphs: vec![
                    "Com mais de uma década de experiência no desenvolvimento de software, \
                     tenho trabalhado com diversas tecnologias e frameworks para criar \
                     aplicações web e mobile de alta performance. Minha especialidade está \
                     em arquitetar soluções escaláveis e resilientes que atendam às \
                     necessidades de negócios em constante evolução."
                        .into(),
                    "Ao longo da minha carreira, tive a oportunidade de liderar equipes \
                     técnicas e colaborar em projetos desafiadores para empresas de \
                     diversos segmentos, desde startups até grandes corporações."
                        .into(),
                ],
                facts: vec![
                    Fact { label: "Nome".into(), value: "João Silva".into() },
                    Fact { label: "Email".into(), value: "contato@joaosilva.dev".into() },
                    Fact { label: "Localização".into(), value: "São Paulo, Brasil".into() },
                    Fact { label: "Disponibilidade".into(), value: "Freelance / Contrato".into() },
                ],
            },
            skill_groups: vec![
                SkillGroup {
                    title: "Desenvolvimento Frontend".into(),
                    skills: vec![
                        Skill { name: "React / React Native".into(), level: 95 },
                        Skill { name: "Vue.js".into(), level: 90 },
                        Skill { name: "JavaScript / TypeScript".into(), level: 98 },
                        Skill { name: "HTML5 / CSS3".into(), level: 95 },
                        Skill { name: "Tailwind CSS / SASS".into(), level: 92 },
                        Skill { name: "Redux / Zustand".into(), level: 88 },
                    ],
                },
                SkillGroup {
                    title: "Desenvolvimento Backend".into(),
                    skills: vec![
                        Skill { name: "Node.js / Express".into(), level: 96 },
                        Skill { name: "Python / Django / FastAPI".into(), level: 85 },
                        Skill { name: "PHP / Laravel".into(), level: 80 },
                        Skill { name: "MongoDB / PostgreSQL".into(), level: 92 },
                        Skill { name: "GraphQL / REST API".into(), level: 94 },
                        Skill { name: "AWS / Docker / CI/CD".into(), level: 88 },
                    ],
                },
            ],
            badges: vec![
                "React".into(),
                "Vue".into(),
                "Node".into(),
                "Python".into(),
                "AWS".into(),
                "Docker".into(),
                "TypeScript".into(),
                "MongoDB".into(),
                "GraphQL".into(),
                "Laravel".into(),
                "Tailwind".into(),
                "Git".into(),
            ],
            projects: vec![
                Project {
                    title: "E-commerce Platform".into(),
                    description: "Plataforma completa de e-commerce com painel administrativo, \
                                  pagamentos e análises em tempo real."
                        .into(),
                    tags: vec!["React".into(), "Node.js".into(), "MongoDB".into(), "AWS".into()],
                },
                Project {
                    title: "Banking Dashboard".into(),
                    description: "Dashboard financeiro com visualização de dados complexos e \
                                  sistema de autenticação avançado."
                        .into(),
                    tags: vec!["Vue.js".into(), "TypeScript".into(), "GraphQL".into(), "Docker".into()],
                },
                Project {
                    title: "Healthcare App".into(),
                    description: "Aplicativo móvel para monitoramento de saúde com integração a \
                                  dispositivos IoT e alertas em tempo real."
                        .into(),
                    tags: vec!["React Native".into(), "Firebase".into(), "Redux".into(), "Jest".into()],
                },
                Project {
                    title: "AI Content Generator".into(),
                    description: "Ferramenta de geração de conteúdo baseada em IA com \
                                  processamento de linguagem natural avançado."
                        .into(),
                    tags: vec!["Python".into(), "TensorFlow".into(), "FastAPI".into(), "Next.js".into()],
                },
            ],
            experience: vec![
                ExperienceEntry {
                    period: "2020 - Presente".into(),
                    company: "TechInnovate Solutions".into(),
                    role: "Tech Lead / Arquiteto de Software".into(),
                    summary: "Lidero uma equipe de 8 desenvolvedores em projetos de grande \
                              escala para clientes internacionais. Responsável pela arquitetura \
                              de sistemas, definição de padrões técnicos e mentoria da equipe. \
                              Implementei práticas de CI/CD que reduziram o tempo de deploy em 70%."
                        .into(),
                },
                ExperienceEntry {
                    period: "2017 - 2020".into(),
                    company: "Global Software Inc.".into(),
                    role: "Desenvolvedor Full Stack Senior".into(),
                    summary: "Desenvolvi e mantive aplicações web e mobile para o setor \
                              financeiro, utilizando React, Node.js e AWS. Implementei uma \
                              arquitetura de microserviços que melhorou a escalabilidade e \
                              reduziu custos de infraestrutura em 40%."
                        .into(),
                },
                ExperienceEntry {
                    period: "2014 - 2017".into(),
                    company: "Digital Solutions".into(),
                    role: "Desenvolvedor Frontend".into(),
                    summary: "Trabalhei no desenvolvimento de interfaces para aplicações web \
                              utilizando Angular e Vue.js. Colaborei com designers e \
                              stakeholders para criar experiências de usuário intuitivas e \
                              responsivas."
                        .into(),
                },
                ExperienceEntry {
                    period: "2012 - 2014".into(),
                    company: "StartupX".into(),
                    role: "Desenvolvedor Web".into(),
                    summary: "Participei do desenvolvimento de uma plataforma SaaS para gestão \
                              de projetos, utilizando PHP/Laravel e jQuery. Implementei \
                              funcionalidades que ajudaram a empresa a crescer sua base de \
                              usuários em 200% em 18 meses."
                        .into(),
                },
            ],
            services: vec![
                Service {
                    icon: "💻".into(),
                    title: "Desenvolvimento Web".into(),
                    description: "Criação de sites e aplicações web responsivas, modernas e de \
                                  alta performance utilizando as tecnologias mais recentes do \
                                  mercado."
                        .into(),
                },
                Service {
                    icon: "📱".into(),
                    title: "Desenvolvimento Mobile".into(),
                    description: "Desenvolvimento de aplicativos nativos e híbridos para iOS e \
                                  Android, com foco em experiência do usuário e performance."
                        .into(),
                },
                Service {
                    icon: "🔧".into(),
                    title: "Arquitetura de Software".into(),
                    description: "Planejamento e implementação de arquiteturas escaláveis, \
                                  seguras e de fácil manutenção para sistemas complexos."
                        .into(),
                },
                Service {
                    icon: "☁️".into(),
                    title: "DevOps & Cloud".into(),
                    description: "Configuração e otimização de infraestrutura em nuvem, \
                                  pipelines de CI/CD e automação de processos de \
                                  desenvolvimento."
                        .into(),
                },
                Service {
                    icon: "🔍".into(),
                    title: "Consultoria Técnica".into(),
                    description: "Análise e otimização de sistemas existentes, recomendações de \
                                  tecnologias e estratégias para melhorar a eficiência e \
                                  reduzir custos."
                        .into(),
                },
                Service {
                    icon: "🛠️".into(),
                    title: "Manutenção & Suporte".into(),
                    description: "Serviços contínuos de manutenção, atualizações de segurança e \
                                  suporte técnico para garantir o funcionamento ideal das \
                                  aplicações."
                        .into(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "João transformou completamente nossa plataforma digital. Sua \
                            expertise técnica e capacidade de entender nosso negócio foram \
                            fundamentais para o sucesso do projeto."
                        .into(),
                    author: "Ana Martins".into(),
                    role: "CEO, TechStart".into(),
                },
                Testimonial {
                    quote: "Trabalhei com João em vários projetos e sempre fiquei impressionado \
                            com sua capacidade técnica e profissionalismo. Ele entrega \
                            consistentemente soluções de alta qualidade dentro do prazo."
                        .into(),
                    author: "Carlos Mendes".into(),
                    role: "CTO, FinTech Solutions".into(),
                },
                Testimonial {
                    quote: "A capacidade do João de transformar requisitos complexos em \
                            soluções elegantes é impressionante. Ele não apenas resolveu nossos \
                            problemas técnicos, mas também trouxe ideias inovadoras que \
                            melhoraram nosso produto."
                        .into(),
                    author: "Mariana Costa".into(),
                    role: "Product Manager, E-commerce Global".into(),
                },
            ],
            contact: Contact {
                phone: "+55 (11) 98765-4321".into(),
                email: "contato@joaosilva.dev".into(),
                location: "São Paulo, SP - Brasil".into(),
            },
            social: vec![
                SocialLink { label: "GitHub".into(), url: "github.com/joaosilva".into() },
                SocialLink { label: "LinkedIn".into(), url: "linkedin.com/in/joaosilva".into() },
                SocialLink { label: "Twitter".into(), url: "twitter.com/joaosilva".into() },
                SocialLink { label: "Instagram".into(), url: "instagram.com/joaosilva.dev".into() },
            ],
            accent: None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
