//! Projects section: category filter tabs and the project gallery.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{CategoryFilter, Project, ProjectCategory};
use crate::tui::page::{chip_lines, section_header, wrap_text};
use crate::tui::theme::Theme;

/// Projects view state.
#[derive(Debug, Default)]
pub struct ProjectsState {
    /// Current category filter
    pub filter: CategoryFilter,
    /// Card cursor within the filtered list
    pub cursor: usize,
    /// Id of the project open in the detail modal, if any
    pub inspected: Option<u32>,
}

impl ProjectsState {
    /// Creates the state showing all projects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The projects passing the current filter, in dataset order.
    ///
    /// Evaluated fresh on every call; the list is small and fixed.
    #[must_use]
    pub fn filtered<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.filter.matches(p)).collect()
    }

    /// Advances to the next filter tab and resets the card cursor.
    /// Selection is synchronous and unguarded.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.cursor = 0;
    }

    /// Moves the card cursor by one within the filtered list.
    pub fn move_cursor(&mut self, forward: bool, visible_len: usize) {
        if visible_len == 0 {
            self.cursor = 0;
            return;
        }
        if forward {
            self.cursor = (self.cursor + 1) % visible_len;
        } else {
            self.cursor = (self.cursor + visible_len - 1) % visible_len;
        }
    }

    /// Opens the detail modal for the project under the cursor.
    pub fn open_selected(&mut self, projects: &[Project]) {
        if let Some(project) = self.filtered(projects).get(self.cursor) {
            self.open(project.id);
        }
    }

    /// Opens the detail modal for a project. Opening while another project
    /// is inspected simply replaces it.
    pub fn open(&mut self, id: u32) {
        self.inspected = Some(id);
    }

    /// Closes the detail modal.
    pub fn close(&mut self) {
        self.inspected = None;
    }

    /// The inspected project, resolved against the dataset.
    #[must_use]
    pub fn inspected_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.inspected?;
        projects.iter().find(|p| p.id == id)
    }
}

/// Renders the projects section.
pub fn lines(
    projects: &[Project],
    state: &ProjectsState,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = section_header(
        "MY WORK",
        "Featured Projects",
        "A selection of recent work across the stack.",
        theme,
        width,
    );

    // Filter tab bar
    let mut tabs: Vec<Span<'static>> = Vec::new();
    let mut filter = CategoryFilter::All;
    for i in 0..=ProjectCategory::ALL.len() {
        let style = if filter == state.filter {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        tabs.push(Span::styled(format!(" {} ", filter.label()), style));
        if i < ProjectCategory::ALL.len() {
            tabs.push(Span::styled("|", Style::default().fg(theme.text_muted)));
        }
        filter = filter.next();
    }
    out.push(Line::from(tabs).centered());
    out.push(Line::default());

    let visible = state.filtered(projects);
    if visible.is_empty() {
        out.push(
            Line::from(Span::styled(
                "No projects in this category.".to_string(),
                Style::default().fg(theme.text_muted),
            ))
            .centered(),
        );
        out.push(Line::default());
        return out;
    }

    let wrap_width = usize::from(width).saturating_sub(8).max(20);
    for (i, project) in visible.iter().enumerate() {
        let selected = i == state.cursor;
        let marker = if selected { "► " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        out.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.active)),
            Span::styled(project.title.clone(), title_style),
            Span::styled(
                format!("  ({})", project.category.label()),
                Style::default().fg(theme.text_muted),
            ),
        ]));
        for part in wrap_text(&project.short_description, wrap_width) {
            out.push(Line::from(Span::styled(
                format!("    {part}"),
                Style::default().fg(theme.text_secondary),
            )));
        }
        out.extend(chip_lines(&project.technologies, theme, width, "    "));
        out.push(Line::default());
    }

    out.push(
        Line::from(Span::styled(
            "Enter opens project details".to_string(),
            Style::default().fg(theme.text_muted),
        ))
        .centered(),
    );
    out.push(Line::default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PortfolioContent;

    #[test]
    fn all_filter_returns_full_list_in_order() {
        let content = PortfolioContent::builtin();
        let state = ProjectsState::new();
        let visible = state.filtered(&content.projects);
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = content.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn category_filter_returns_exact_subset() {
        let content = PortfolioContent::builtin();
        let state = ProjectsState {
            filter: CategoryFilter::Only(ProjectCategory::Frontend),
            ..ProjectsState::new()
        };
        let visible = state.filtered(&content.projects);
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|p| p.category == ProjectCategory::Frontend));
        let expected: Vec<u32> = content
            .projects
            .iter()
            .filter(|p| p.category == ProjectCategory::Frontend)
            .map(|p| p.id)
            .collect();
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn opening_a_second_project_replaces_the_first() {
        let mut state = ProjectsState::new();
        state.open(1);
        state.open(2);
        assert_eq!(state.inspected, Some(2));
        state.close();
        assert_eq!(state.inspected, None);
    }

    #[test]
    fn open_then_close_leaves_nothing_inspected() {
        let mut state = ProjectsState::new();
        state.open(5);
        state.close();
        assert!(state.inspected.is_none());
    }

    #[test]
    fn cycling_filter_resets_cursor() {
        let mut state = ProjectsState::new();
        state.cursor = 3;
        state.cycle_filter();
        assert_eq!(state.cursor, 0);
        assert_eq!(
            state.filter,
            CategoryFilter::Only(ProjectCategory::Frontend)
        );
    }

    #[test]
    fn cursor_wraps_within_filtered_list() {
        let mut state = ProjectsState::new();
        state.move_cursor(false, 4);
        assert_eq!(state.cursor, 3);
        state.move_cursor(true, 4);
        assert_eq!(state.cursor, 0);
    }
}
