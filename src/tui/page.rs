//! The scrollable page: section blocks stitched into one column of lines.
//!
//! Sections render to owned `Line` blocks; the page view stacks them (with
//! a fixed gap), records each section's extent for the scroll spy, and
//! hands the visible slice to the terminal.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::constants::{SECTION_GAP, SECTION_MIN_HEIGHT};
use crate::content::PortfolioContent;
use crate::models::SectionId;
use crate::tui::contact::ContactState;
use crate::tui::projects::ProjectsState;
use crate::tui::scroll::PageLayout;
use crate::tui::skills::SkillsState;
use crate::tui::theme::Theme;
use crate::tui::work::WorkState;
use crate::tui::{contact, home, projects, skills, work};

/// One rendered frame's worth of page content and geometry.
#[derive(Debug, Default)]
pub struct PageView {
    /// All page lines, top to bottom
    pub lines: Vec<Line<'static>>,
    /// Section extents matching `lines`
    pub layout: PageLayout,
    /// `(bar id, absolute row)` for every skill bar in the active tab
    pub skill_bar_rows: Vec<(String, usize)>,
}

/// Builds the full page for the current state and width.
pub fn build(
    content: &PortfolioContent,
    skills_state: &SkillsState,
    projects_state: &ProjectsState,
    work_state: &WorkState,
    contact_state: &ContactState,
    theme: &Theme,
    width: u16,
    now: Instant,
) -> PageView {
    let home_lines = home::lines(&content.profile, theme, width);
    let (skills_lines, bar_rows) =
        skills::lines(&content.skill_categories, skills_state, theme, width);
    let projects_lines = projects::lines(&content.projects, projects_state, theme, width);
    let work_lines = work::lines(&content.work_experiences, work_state, theme, width, now);
    let contact_lines = contact::lines(&content.profile, contact_state, theme, width);

    let mut blocks = [
        (SectionId::Home, home_lines),
        (SectionId::Skills, skills_lines),
        (SectionId::Projects, projects_lines),
        (SectionId::Work, work_lines),
        (SectionId::Contact, contact_lines),
    ];
    for (_, block) in &mut blocks {
        while block.len() < SECTION_MIN_HEIGHT {
            block.push(Line::default());
        }
    }

    let heights: Vec<(SectionId, usize)> =
        blocks.iter().map(|(id, lines)| (*id, lines.len())).collect();
    let layout = PageLayout::stack(&heights, SECTION_GAP);

    let skills_top = layout.section_top(SectionId::Skills).unwrap_or(0);
    let skill_bar_rows = bar_rows
        .into_iter()
        .map(|(id, row)| (id, skills_top + row))
        .collect();

    let mut lines = Vec::with_capacity(layout.total_height());
    for (i, (_, block)) in blocks.into_iter().enumerate() {
        if i > 0 {
            for _ in 0..SECTION_GAP {
                lines.push(Line::default());
            }
        }
        lines.extend(block);
    }

    PageView {
        lines,
        layout,
        skill_bar_rows,
    }
}

impl PageView {
    /// Renders the rows `[scroll, scroll + area.height)` into `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, scroll: usize) {
        let end = (scroll + area.height as usize).min(self.lines.len());
        let visible: Vec<Line<'static>> = self
            .lines
            .get(scroll..end)
            .unwrap_or_default()
            .to_vec();
        f.render_widget(Paragraph::new(visible), area);
    }
}

/// Standard section header: eyebrow, title, subtitle, trailing blank.
pub fn section_header(
    eyebrow: &str,
    title: &str,
    subtitle: &str,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::default(),
        Line::from(Span::styled(
            eyebrow.to_string(),
            Style::default().fg(theme.text_muted),
        ))
        .centered(),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    ];
    for part in wrap_text(subtitle, usize::from(width).saturating_sub(4).max(20)) {
        out.push(
            Line::from(Span::styled(
                part,
                Style::default().fg(theme.text_secondary),
            ))
            .centered(),
        );
    }
    out.push(Line::default());
    out
}

/// Greedy word wrap. Words longer than the width get a line of their own.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Lays out `[item]` chips across as many lines as the width requires.
pub fn chip_lines(items: &[String], theme: &Theme, width: u16, indent: &str) -> Vec<Line<'static>> {
    let width = usize::from(width).saturating_sub(2).max(20);
    let mut out = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::raw(indent.to_string())];
    let mut used = indent.len();

    for item in items {
        let cell = format!("[{item}] ");
        if used + cell.len() > width && spans.len() > 1 {
            out.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw(indent.to_string()));
            used = indent.len();
        }
        used += cell.len();
        spans.push(Span::styled(cell, Style::default().fg(theme.accent)));
    }
    if spans.len() > 1 {
        out.push(Line::from(spans));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap_text("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let wrapped = wrap_text("a extraordinarily b", 5);
        assert_eq!(wrapped, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn chips_flow_onto_new_lines() {
        let theme = Theme::dark();
        let items: Vec<String> = ["React", "Rust", "PostgreSQL", "Docker", "Redis"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let lines = chip_lines(&items, &theme, 24, "  ");
        assert!(lines.len() > 1);
    }
}
