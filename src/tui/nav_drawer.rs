//! Slide-out navigation drawer for narrow terminals.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::models::{Profile, SectionId};
use crate::tui::theme::Theme;

/// State for the navigation drawer.
#[derive(Debug, Clone)]
pub struct NavDrawerState {
    /// Index of the highlighted section
    pub selected: usize,
    /// List state for the Ratatui list widget
    pub list_state: ListState,
}

impl NavDrawerState {
    /// Opens the drawer with the given section highlighted.
    #[must_use]
    pub fn new(active: SectionId) -> Self {
        let selected = active.order();
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    /// Move selection up with wraparound.
    pub fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = SectionId::ALL.len() - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down with wraparound.
    pub fn next(&mut self) {
        if self.selected + 1 < SectionId::ALL.len() {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
        self.list_state.select(Some(self.selected));
    }

    /// The highlighted section.
    #[must_use]
    pub fn selected_section(&self) -> SectionId {
        SectionId::ALL[self.selected.min(SectionId::ALL.len() - 1)]
    }
}

/// Event emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDrawerEvent {
    /// Navigate to the section and close the drawer
    Navigate(SectionId),
    /// Close without navigating
    Close,
}

/// Handle input for the drawer.
pub fn handle_input(state: &mut NavDrawerState, key: KeyEvent) -> Option<NavDrawerEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m' | 'q') => Some(NavDrawerEvent::Close),
        KeyCode::Enter => Some(NavDrawerEvent::Navigate(state.selected_section())),
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next();
            None
        }
        _ => None,
    }
}

/// Render the drawer over the page.
pub fn render(
    f: &mut Frame,
    state: &NavDrawerState,
    profile: &Profile,
    active: SectionId,
    theme: &Theme,
) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let items: Vec<ListItem> = SectionId::ALL
        .into_iter()
        .map(|section| {
            let style = if section == active {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(section.title().to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", profile.name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = state.list_state.clone();
    f.render_stateful_widget(list, area, &mut list_state);

    let instructions_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let instructions = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Navigate  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Go  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Close"),
    ]));
    f.render_widget(instructions, instructions_area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_directions() {
        let mut state = NavDrawerState::new(SectionId::Home);
        state.previous();
        assert_eq!(state.selected_section(), SectionId::Contact);
        state.next();
        assert_eq!(state.selected_section(), SectionId::Home);
    }

    #[test]
    fn opens_on_the_active_section() {
        let state = NavDrawerState::new(SectionId::Work);
        assert_eq!(state.selected_section(), SectionId::Work);
    }
}
