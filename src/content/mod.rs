//! Portfolio content: the built-in dataset and TOML file loading.
//!
//! Content is static reference data. A compiled-in dataset is used by
//! default; a TOML file with the same shape can replace it entirely.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{
    Profile, Project, ProjectCategory, Skill, SkillCategory, SocialLink, WorkExperience,
};

/// Everything the page displays, defined once at startup and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Hero and contact identity
    pub profile: Profile,
    /// Skill tabs in display order
    pub skill_categories: Vec<SkillCategory>,
    /// Project gallery entries
    pub projects: Vec<Project>,
    /// Work history, most recent first
    pub work_experiences: Vec<WorkExperience>,
}

impl PortfolioContent {
    /// Loads content from a TOML file and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        let content: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse content file: {}", path.display()))?;
        content
            .validate()
            .with_context(|| format!("Invalid content file: {}", path.display()))?;
        Ok(content)
    }

    /// Validates the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns an error on empty required fields, duplicate project ids,
    /// out-of-range skill levels, or an empty work history (the carousel
    /// requires a non-empty list).
    pub fn validate(&self) -> Result<()> {
        self.profile.validate()?;

        for category in &self.skill_categories {
            category.validate()?;
        }

        let mut seen_ids = Vec::with_capacity(self.projects.len());
        for project in &self.projects {
            project.validate()?;
            if seen_ids.contains(&project.id) {
                anyhow::bail!("Duplicate project id: {}", project.id);
            }
            seen_ids.push(project.id);
        }

        if self.work_experiences.is_empty() {
            anyhow::bail!("Work history cannot be empty");
        }
        for entry in &self.work_experiences {
            entry.validate()?;
        }

        Ok(())
    }

    /// The compiled-in portfolio dataset.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Robin Vasquez".to_string(),
                headline: "Software Engineer".to_string(),
                summary: "I build reliable backend services and the tooling \
                          around them, with a soft spot for developer \
                          experience and terminal interfaces."
                    .to_string(),
                email: "robin@vasquez.dev".to_string(),
                phone: "+1 (555) 013-7429".to_string(),
                location: "Portland, OR".to_string(),
                resume_ref: "/resume.pdf".to_string(),
                links: vec![
                    SocialLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/rvasquez".to_string(),
                    },
                    SocialLink {
                        label: "LinkedIn".to_string(),
                        url: "https://linkedin.com/in/rvasquez".to_string(),
                    },
                ],
            },
            skill_categories: vec![
                SkillCategory {
                    name: "Frontend".to_string(),
                    skills: vec![
                        Skill { name: "TypeScript".to_string(), level: 90 },
                        Skill { name: "React".to_string(), level: 85 },
                        Skill { name: "HTML/CSS".to_string(), level: 90 },
                        Skill { name: "Svelte".to_string(), level: 70 },
                    ],
                },
                SkillCategory {
                    name: "Backend".to_string(),
                    skills: vec![
                        Skill { name: "Rust".to_string(), level: 95 },
                        Skill { name: "Python".to_string(), level: 90 },
                        Skill { name: "Go".to_string(), level: 75 },
                        Skill { name: "Node.js".to_string(), level: 80 },
                    ],
                },
                SkillCategory {
                    name: "Database".to_string(),
                    skills: vec![
                        Skill { name: "PostgreSQL".to_string(), level: 95 },
                        Skill { name: "SQLite".to_string(), level: 90 },
                        Skill { name: "Redis".to_string(), level: 80 },
                    ],
                },
                SkillCategory {
                    name: "Tools".to_string(),
                    skills: vec![
                        Skill { name: "Git".to_string(), level: 100 },
                        Skill { name: "Docker".to_string(), level: 95 },
                        Skill { name: "Linux".to_string(), level: 95 },
                        Skill { name: "AWS".to_string(), level: 80 },
                        Skill { name: "CI/CD".to_string(), level: 90 },
                    ],
                },
                SkillCategory {
                    name: "Other".to_string(),
                    skills: vec![
                        Skill { name: "Data Structures".to_string(), level: 90 },
                        Skill { name: "Distributed Systems".to_string(), level: 85 },
                        Skill { name: "Operating Systems".to_string(), level: 80 },
                    ],
                },
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "Warehouse Pulse".to_string(),
                    short_description:
                        "Full-stack inventory tracking with live stock alerts".to_string(),
                    full_description:
                        "An inventory management platform with role-based access \
                         control, live stock-level tracking, and a reporting \
                         dashboard. Warehouse staff record movements from handheld \
                         scanners; managers get automated low-stock alerts and \
                         custom reports."
                            .to_string(),
                    image_ref: "images/warehouse-pulse.png".to_string(),
                    live_url: Some("https://demo.warehousepulse.dev".to_string()),
                    github_url: "https://github.com/rvasquez/warehouse-pulse".to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "FastAPI".to_string(),
                        "PostgreSQL".to_string(),
                        "Docker".to_string(),
                    ],
                    category: ProjectCategory::Fullstack,
                    features: vec![
                        "Role-based access control".to_string(),
                        "Live inventory tracking".to_string(),
                        "Automated low-stock alerts".to_string(),
                        "Custom reporting dashboard".to_string(),
                        "Audit trail for every movement".to_string(),
                    ],
                    color: "#3f51b5".to_string(),
                },
                Project {
                    id: 2,
                    title: "Shelf Life".to_string(),
                    short_description:
                        "Rental catalog tracker for a neighborhood library".to_string(),
                    full_description:
                        "A rental tracking system for small libraries: catalog \
                         search, member management, due-date tracking, and \
                         automated fee calculation. Built as a single-page app \
                         against a thin REST backend."
                            .to_string(),
                    image_ref: "images/shelf-life.png".to_string(),
                    live_url: None,
                    github_url: "https://github.com/rvasquez/shelf-life".to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "TypeScript".to_string(),
                        "Express".to_string(),
                        "SQLite".to_string(),
                    ],
                    category: ProjectCategory::Frontend,
                    features: vec![
                        "Catalog search and filtering".to_string(),
                        "Member management".to_string(),
                        "Due-date tracking with reminders".to_string(),
                        "Automated fee calculation".to_string(),
                    ],
                    color: "#00897b".to_string(),
                },
                Project {
                    id: 3,
                    title: "Assort".to_string(),
                    short_description:
                        "Drag-and-drop product assortment planner".to_string(),
                    full_description:
                        "A planning surface for merchandisers managing product \
                         assortments across store clusters. Supports concurrent \
                         editing with conflict resolution and stays responsive on \
                         catalogs with tens of thousands of items."
                            .to_string(),
                    image_ref: "images/assort.png".to_string(),
                    live_url: Some("https://assort.example.dev".to_string()),
                    github_url: "https://github.com/rvasquez/assort".to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "GraphQL".to_string(),
                        "Django".to_string(),
                        "PostgreSQL".to_string(),
                        "Redis".to_string(),
                    ],
                    category: ProjectCategory::Fullstack,
                    features: vec![
                        "Drag-and-drop planning board".to_string(),
                        "Concurrent editing with conflict resolution".to_string(),
                        "Change history and versioning".to_string(),
                        "Fast filtering over large catalogs".to_string(),
                    ],
                    color: "#f44336".to_string(),
                },
                Project {
                    id: 4,
                    title: "Cirrus".to_string(),
                    short_description:
                        "Weather app with severe-condition alerts".to_string(),
                    full_description:
                        "A cross-platform weather app with hourly and 7-day \
                         forecasts, severe weather alerts, and offline caching of \
                         the last known forecast. Uses device location for \
                         current conditions."
                            .to_string(),
                    image_ref: "images/cirrus.png".to_string(),
                    live_url: None,
                    github_url: "https://github.com/rvasquez/cirrus".to_string(),
                    technologies: vec![
                        "React Native".to_string(),
                        "TypeScript".to_string(),
                        "Express".to_string(),
                    ],
                    category: ProjectCategory::Mobile,
                    features: vec![
                        "Hourly and 7-day forecasts".to_string(),
                        "Severe weather alerts".to_string(),
                        "Offline mode with cached data".to_string(),
                    ],
                    color: "#ff9800".to_string(),
                },
                Project {
                    id: 5,
                    title: "Checkout API".to_string(),
                    short_description:
                        "Order and payment backend for a storefront".to_string(),
                    full_description:
                        "A REST API handling product catalog, cart, order \
                         processing, and payment-gateway integration for a small \
                         storefront. Includes rate limiting, request validation, \
                         and response caching."
                            .to_string(),
                    image_ref: "images/checkout-api.png".to_string(),
                    live_url: None,
                    github_url: "https://github.com/rvasquez/checkout-api".to_string(),
                    technologies: vec![
                        "Rust".to_string(),
                        "Axum".to_string(),
                        "PostgreSQL".to_string(),
                        "Redis".to_string(),
                    ],
                    category: ProjectCategory::Backend,
                    features: vec![
                        "Cart and order processing".to_string(),
                        "Payment gateway integration".to_string(),
                        "Rate limiting and request validation".to_string(),
                        "Response caching".to_string(),
                    ],
                    color: "#2196f3".to_string(),
                },
                Project {
                    id: 6,
                    title: "Folio".to_string(),
                    short_description:
                        "This portfolio, as a terminal application".to_string(),
                    full_description:
                        "A single-page portfolio rendered in the terminal: \
                         scroll-spy navigation, tabbed skills, a filterable \
                         project gallery, a work-history carousel, and a contact \
                         form, all driven by local UI state."
                            .to_string(),
                    image_ref: "images/folio.png".to_string(),
                    live_url: None,
                    github_url: "https://github.com/rvasquez/folio".to_string(),
                    technologies: vec![
                        "Rust".to_string(),
                        "Ratatui".to_string(),
                    ],
                    category: ProjectCategory::Frontend,
                    features: vec![
                        "Scroll-spy section highlighting".to_string(),
                        "Dark/light theme detection".to_string(),
                        "Keyboard-first navigation".to_string(),
                    ],
                    color: "#673ab7".to_string(),
                },
            ],
            work_experiences: vec![
                WorkExperience {
                    title: "Software Engineer".to_string(),
                    company: "Meridian Labs".to_string(),
                    location: "Portland, OR".to_string(),
                    duration: "August 2022 - Present".to_string(),
                    period: "2 years".to_string(),
                    description:
                        "Meridian Labs builds monitoring and compliance tooling \
                         for clinical research organizations."
                            .to_string(),
                    achievements: vec![
                        "Led the rewrite of the ingest pipeline, cutting p99 \
                         processing latency from 2 hours to 45 minutes."
                            .to_string(),
                        "Introduced contract tests between the ingest and \
                         reporting services, eliminating a class of schema-drift \
                         incidents."
                            .to_string(),
                        "Maintained the team's test plans and runbooks, keeping \
                         onboarding time for new engineers under a week."
                            .to_string(),
                    ],
                    skills: vec![
                        "Rust".to_string(),
                        "Python".to_string(),
                        "PostgreSQL".to_string(),
                        "Docker".to_string(),
                        "Grafana".to_string(),
                    ],
                    logo_ref: "logos/meridian.png".to_string(),
                    color: "#0856a2".to_string(),
                },
                WorkExperience {
                    title: "Junior Software Engineer".to_string(),
                    company: "Northbeam Systems".to_string(),
                    location: "Seattle, WA".to_string(),
                    duration: "February 2021 - August 2022".to_string(),
                    period: "18 months".to_string(),
                    description:
                        "Northbeam Systems provides accessibility and compliance \
                         audits for enterprise web platforms."
                            .to_string(),
                    achievements: vec![
                        "Rebuilt the audit script suite for a fintech client, \
                         raising automated coverage of WCAG checkpoints to 70%."
                            .to_string(),
                        "Worked with design teams to land accessible component \
                         variants, improving audit scores by 40%."
                            .to_string(),
                    ],
                    skills: vec![
                        "TypeScript".to_string(),
                        "Playwright".to_string(),
                        "axe-core".to_string(),
                        "Git".to_string(),
                    ],
                    logo_ref: "logos/northbeam.png".to_string(),
                    color: "#231f20".to_string(),
                },
                WorkExperience {
                    title: "Software Engineer Intern".to_string(),
                    company: "Northbeam Systems".to_string(),
                    location: "Seattle, WA".to_string(),
                    duration: "January 2020 - February 2021".to_string(),
                    period: "1 year".to_string(),
                    description:
                        "Northbeam Systems provides accessibility and compliance \
                         audits for enterprise web platforms."
                            .to_string(),
                    achievements: vec![
                        "Built a regression harness that cut manual verification \
                         time for release candidates by 80%."
                            .to_string(),
                        "Set up the team's first CI pipeline, used by three \
                         project teams within a quarter."
                            .to_string(),
                    ],
                    skills: vec![
                        "Python".to_string(),
                        "Jenkins".to_string(),
                        "Docker".to_string(),
                        "Selenium".to_string(),
                    ],
                    logo_ref: "logos/northbeam.png".to_string(),
                    color: "#ff6b00".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        PortfolioContent::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_project_ids_are_unique() {
        let content = PortfolioContent::builtin();
        let mut ids: Vec<u32> = content.projects.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.projects.len());
    }

    #[test]
    fn duplicate_project_id_is_rejected() {
        let mut content = PortfolioContent::builtin();
        let duplicate = content.projects[0].clone();
        content.projects.push(duplicate);
        assert!(content.validate().is_err());
    }

    #[test]
    fn empty_work_history_is_rejected() {
        let mut content = PortfolioContent::builtin();
        content.work_experiences.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn toml_round_trip_preserves_content() {
        let content = PortfolioContent::builtin();
        let raw = toml::to_string_pretty(&content).unwrap();
        let parsed: PortfolioContent = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, content);
    }
}
