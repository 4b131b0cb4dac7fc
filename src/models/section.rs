//! Page sections and their fixed declaration order.

use serde::{Deserialize, Serialize};

/// One top-level region of the portfolio page.
///
/// Sections are declared once, in page order, and are identified by a stable
/// lowercase anchor used for navigation. The declaration order matters: the
/// scroll spy resolves overlapping activation bands in favor of the
/// later-declared section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing/hero section
    Home,
    /// Skill categories with proficiency bars
    Skills,
    /// Project gallery with category filter
    Projects,
    /// Work history carousel
    Work,
    /// Contact channels and message form
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Skills,
        Self::Projects,
        Self::Work,
        Self::Contact,
    ];

    /// Stable lowercase anchor for navigation.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    /// Display title shown in the navigation bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Work => "Work",
            Self::Contact => "Contact",
        }
    }

    /// Position in the declaration order.
    #[must_use]
    pub fn order(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Look up a section by its anchor.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}
