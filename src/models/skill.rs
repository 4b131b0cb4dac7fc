//! Skill categories and proficiency levels.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name (e.g., "Rust", "PostgreSQL")
    pub name: String,
    /// Proficiency from 0 to 100, rendered as a gauge fill
    pub level: u8,
}

impl Skill {
    /// Validates the skill.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the level exceeds 100.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Skill name cannot be empty");
        }
        if self.level > 100 {
            anyhow::bail!(
                "Skill '{}' has level {} (must be 0-100)",
                self.name,
                self.level
            );
        }
        Ok(())
    }
}

/// A named group of skills shown as one tab in the skills section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Tab label (e.g., "Frontend", "Tools")
    pub name: String,
    /// Skills in display order
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    /// Validates the category and every skill in it.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Skill category name cannot be empty");
        }
        if self.skills.is_empty() {
            anyhow::bail!("Skill category '{}' has no skills", self.name);
        }
        for skill in &self.skills {
            skill.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_above_100_is_rejected() {
        let skill = Skill {
            name: "Rust".to_string(),
            level: 101,
        };
        assert!(skill.validate().is_err());
    }

    #[test]
    fn empty_category_is_rejected() {
        let category = SkillCategory {
            name: "Tools".to_string(),
            skills: vec![],
        };
        assert!(category.validate().is_err());
    }

    #[test]
    fn valid_category_passes() {
        let category = SkillCategory {
            name: "Backend".to_string(),
            skills: vec![Skill {
                name: "Rust".to_string(),
                level: 90,
            }],
        };
        assert!(category.validate().is_ok());
    }
}
