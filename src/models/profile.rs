//! Profile data shown in the hero and contact sections.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A link to an external profile (repository host, social network, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label (e.g., "GitHub")
    pub label: String,
    /// Target URL
    pub url: String,
}

/// The person the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name shown as the navbar brand and hero heading
    pub name: String,
    /// One-line role headline (e.g., "Software Engineer")
    pub headline: String,
    /// Short introduction paragraph for the hero section
    pub summary: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: String,
    /// Current location
    #[serde(default)]
    pub location: String,
    /// Opaque reference to the downloadable resume
    #[serde(default)]
    pub resume_ref: String,
    /// External profile links in display order
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl Profile {
    /// Validates the profile.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Profile name cannot be empty");
        }
        if self.email.trim().is_empty() {
            anyhow::bail!("Profile email cannot be empty");
        }
        Ok(())
    }
}
