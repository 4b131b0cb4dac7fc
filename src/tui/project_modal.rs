//! Project detail modal.
//!
//! Shows the full description, features, technologies, and links for the
//! inspected project. Open iff a project is inspected; opening another
//! project replaces the current one.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::models::Project;
use crate::tui::page::{chip_lines, wrap_text};
use crate::tui::theme::Theme;

/// Scroll state of the modal body.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectModalState {
    /// First visible body row
    pub scroll: u16,
}

/// Event emitted by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectModalEvent {
    /// Close the modal
    Close,
}

/// Handle input for the modal.
pub fn handle_input(state: &mut ProjectModalState, key: KeyEvent) -> Option<ProjectModalEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(ProjectModalEvent::Close),
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll = state.scroll.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll = state.scroll.saturating_add(1);
            None
        }
        _ => None,
    }
}

/// Render the modal over the page.
pub fn render(f: &mut Frame, state: &ProjectModalState, project: &Project, theme: &Theme) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let block = Block::default()
        .title(format!(" {} ", project.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let wrap_width = usize::from(inner.width).saturating_sub(4).max(20);
    let mut body: Vec<Line<'static>> = vec![Line::from(Span::styled(
        format!(" {}", project.category.label()),
        Style::default().fg(theme.text_muted),
    ))];
    body.push(Line::default());
    for part in wrap_text(&project.full_description, wrap_width) {
        body.push(Line::from(Span::styled(
            format!(" {part}"),
            Style::default().fg(theme.text),
        )));
    }
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        " Key Features".to_string(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    for feature in &project.features {
        let mut first = true;
        for part in wrap_text(feature, wrap_width.saturating_sub(3)) {
            let prefix = if first { " • " } else { "   " };
            first = false;
            body.push(Line::from(vec![
                Span::styled(prefix.to_string(), Style::default().fg(theme.accent)),
                Span::styled(part, Style::default().fg(theme.text)),
            ]));
        }
    }
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        " Technologies".to_string(),
        Style::default().fg(theme.text_secondary),
    )));
    body.extend(chip_lines(&project.technologies, theme, inner.width, " "));
    body.push(Line::default());
    body.push(Line::from(vec![
        Span::styled(" Source: ".to_string(), Style::default().fg(theme.text_secondary)),
        Span::styled(
            project.github_url.clone(),
            Style::default().fg(theme.accent),
        ),
    ]));
    if let Some(live) = &project.live_url {
        body.push(Line::from(vec![
            Span::styled(" Live:   ".to_string(), Style::default().fg(theme.text_secondary)),
            Span::styled(live.clone(), Style::default().fg(theme.accent)),
        ]));
    }

    let max_scroll = body.len().saturating_sub(usize::from(chunks[0].height)) as u16;
    let scroll = state.scroll.min(max_scroll);
    f.render_widget(
        Paragraph::new(body).scroll((scroll, 0)),
        chunks[0],
    );

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Scroll  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Close"),
    ]))
    .style(Style::default().fg(theme.text_muted));
    f.render_widget(instructions, chunks[1]);
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
