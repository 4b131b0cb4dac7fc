//! Projects and the category filter driving the gallery tabs.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Project category, used both as metadata and as a filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    /// Client-side work
    Frontend,
    /// Server-side work
    Backend,
    /// Both ends
    Fullstack,
    /// Mobile applications
    Mobile,
}

impl ProjectCategory {
    /// All categories in tab order.
    pub const ALL: [Self; 4] = [
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::Mobile,
    ];

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Full Stack",
            Self::Mobile => "Mobile",
        }
    }
}

/// The gallery filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show the full project list unchanged
    #[default]
    All,
    /// Show only projects in the given category
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Whether a project passes the filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    /// The next filter in tab order, wrapping back to `All`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(ProjectCategory::Frontend),
            Self::Only(ProjectCategory::Frontend) => Self::Only(ProjectCategory::Backend),
            Self::Only(ProjectCategory::Backend) => Self::Only(ProjectCategory::Fullstack),
            Self::Only(ProjectCategory::Fullstack) => Self::Only(ProjectCategory::Mobile),
            Self::Only(ProjectCategory::Mobile) => Self::All,
        }
    }

    /// Tab label for the filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique numeric id
    pub id: u32,
    /// Project title
    pub title: String,
    /// One-line description shown on the card
    pub short_description: String,
    /// Long description shown in the detail view
    pub full_description: String,
    /// Opaque reference to a preview image
    #[serde(default)]
    pub image_ref: String,
    /// Live deployment URL, if any
    #[serde(default)]
    pub live_url: Option<String>,
    /// Source repository URL
    pub github_url: String,
    /// Technologies in display order
    pub technologies: Vec<String>,
    /// Category the project belongs to
    pub category: ProjectCategory,
    /// Feature bullet points for the detail view
    pub features: Vec<String>,
    /// Accent color token (hex string, display-only)
    #[serde(default)]
    pub color: String,
}

impl Project {
    /// Validates the project.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("Project {} has an empty title", self.id);
        }
        if self.github_url.trim().is_empty() {
            anyhow::bail!("Project '{}' has no repository URL", self.title);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: ProjectCategory) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            short_description: String::new(),
            full_description: String::new(),
            image_ref: String::new(),
            live_url: None,
            github_url: "https://example.com/repo".to_string(),
            technologies: vec![],
            category,
            features: vec![],
            color: String::new(),
        }
    }

    #[test]
    fn all_filter_matches_everything() {
        for category in ProjectCategory::ALL {
            assert!(CategoryFilter::All.matches(&project(1, category)));
        }
    }

    #[test]
    fn only_filter_matches_exact_category() {
        let filter = CategoryFilter::Only(ProjectCategory::Frontend);
        assert!(filter.matches(&project(1, ProjectCategory::Frontend)));
        assert!(!filter.matches(&project(2, ProjectCategory::Backend)));
    }

    #[test]
    fn filter_cycle_returns_to_all() {
        let mut filter = CategoryFilter::All;
        for _ in 0..=ProjectCategory::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
    }

    #[test]
    fn missing_repository_url_is_rejected() {
        let mut p = project(1, ProjectCategory::Frontend);
        p.github_url = String::new();
        assert!(p.validate().is_err());
    }
}
