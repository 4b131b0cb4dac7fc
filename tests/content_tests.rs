//! Tests for content loading and validation against real files.

use std::fs;

use folio::content::PortfolioContent;
use folio::models::{CategoryFilter, ProjectCategory};

#[test]
fn builtin_dataset_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    let content = PortfolioContent::builtin();
    fs::write(&path, toml::to_string_pretty(&content).unwrap()).unwrap();

    let loaded = PortfolioContent::load(&path).unwrap();
    assert_eq!(loaded, content);
}

#[test]
fn load_rejects_out_of_range_skill_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    let mut content = PortfolioContent::builtin();
    content.skill_categories[0].skills[0].level = 250;
    fs::write(&path, toml::to_string_pretty(&content).unwrap()).unwrap();

    let err = PortfolioContent::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("0-100"), "error was: {err:#}");
}

#[test]
fn load_reports_the_offending_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = PortfolioContent::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn builtin_covers_every_project_category() {
    let content = PortfolioContent::builtin();
    for category in ProjectCategory::ALL {
        let filter = CategoryFilter::Only(category);
        assert!(
            content.projects.iter().any(|p| filter.matches(p)),
            "no project in category {category:?}"
        );
    }
}

#[test]
fn optional_fields_may_be_omitted_from_content_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");

    // Minimal file: no image refs, colors, phone, or links anywhere.
    let raw = r#"
[profile]
name = "Robin Vasquez"
headline = "Engineer"
summary = "Hello."
email = "robin@example.com"

[[skill_categories]]
name = "Tools"
skills = [{ name = "Git", level = 90 }]

[[projects]]
id = 1
title = "Thing"
short_description = "A thing"
full_description = "A longer thing"
github_url = "https://example.com/thing"
technologies = ["Rust"]
category = "backend"
features = ["works"]

[[work_experiences]]
title = "Engineer"
company = "Example Co"
location = "Remote"
duration = "2020 - 2021"
period = "1 year"
description = "Did things."
achievements = ["shipped"]
skills = ["Rust"]
"#;
    fs::write(&path, raw).unwrap();

    let loaded = PortfolioContent::load(&path).unwrap();
    assert_eq!(loaded.projects[0].category, ProjectCategory::Backend);
    assert!(loaded.projects[0].live_url.is_none());
    assert!(loaded.profile.links.is_empty());
}
