//! Work history entries shown by the experience carousel.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One job in the work history, ordered most-recent-first in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    /// Role title (e.g., "Systems Engineer")
    pub title: String,
    /// Employer name
    pub company: String,
    /// Office location
    pub location: String,
    /// Date range (e.g., "March 2022 - July 2024")
    pub duration: String,
    /// Compact length (e.g., "2 years")
    pub period: String,
    /// What the company does
    pub description: String,
    /// Achievement bullet points
    pub achievements: Vec<String>,
    /// Technologies used in the role
    pub skills: Vec<String>,
    /// Opaque reference to the company logo
    #[serde(default)]
    pub logo_ref: String,
    /// Accent color token (hex string, display-only)
    #[serde(default)]
    pub color: String,
}

impl WorkExperience {
    /// Validates the entry.
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            anyhow::bail!("Work entry has an empty company name");
        }
        if self.title.trim().is_empty() {
            anyhow::bail!("Work entry for '{}' has an empty title", self.company);
        }
        Ok(())
    }
}
