//! Content-file validation for the `--check` flag.

use serde::Serialize;
use std::path::Path;

use crate::content::PortfolioContent;

/// Machine-readable result of a content check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Checked file path
    pub path: String,
    /// Whether the file parsed and validated
    pub valid: bool,
    /// Parse or validation error, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of projects in the file
    pub projects: usize,
    /// Number of skill categories in the file
    pub skill_categories: usize,
    /// Number of work entries in the file
    pub work_experiences: usize,
}

impl CheckReport {
    /// Checks one content file.
    #[must_use]
    pub fn for_file(path: &Path) -> Self {
        match PortfolioContent::load(path) {
            Ok(content) => Self {
                path: path.display().to_string(),
                valid: true,
                error: None,
                projects: content.projects.len(),
                skill_categories: content.skill_categories.len(),
                work_experiences: content.work_experiences.len(),
            },
            Err(e) => Self {
                path: path.display().to_string(),
                valid: false,
                error: Some(format!("{e:#}")),
                projects: 0,
                skill_categories: 0,
                work_experiences: 0,
            },
        }
    }

    /// Prints the report, human-readable or as JSON.
    pub fn print(&self, json: bool) {
        if json {
            match serde_json::to_string_pretty(self) {
                Ok(out) => println!("{out}"),
                Err(e) => eprintln!("Failed to serialize report: {e}"),
            }
            return;
        }

        if self.valid {
            println!("{}: OK", self.path);
            println!(
                "  {} projects, {} skill categories, {} work entries",
                self.projects, self.skill_categories, self.work_experiences
            );
        } else {
            println!("{}: INVALID", self.path);
            if let Some(error) = &self.error {
                println!("  {error}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn valid_file_reports_counts() {
        let content = PortfolioContent::builtin();
        let raw = toml::to_string_pretty(&content).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let report = CheckReport::for_file(file.path());
        assert!(report.valid);
        assert_eq!(report.projects, content.projects.len());
    }

    #[test]
    fn broken_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not toml [").unwrap();

        let report = CheckReport::for_file(file.path());
        assert!(!report.valid);
        assert!(report.error.is_some());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = CheckReport {
            path: "content.toml".to_string(),
            valid: true,
            error: None,
            projects: 6,
            skill_categories: 5,
            work_experiences: 3,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"valid\":true"));
        assert!(!json.contains("error"));
    }
}
