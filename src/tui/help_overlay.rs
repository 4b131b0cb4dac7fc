//! Help overlay listing all key bindings, opened with '?'.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::theme::Theme;

/// One keybinding row.
struct Binding {
    keys: &'static str,
    action: &'static str,
}

/// A titled group of bindings.
struct Group {
    title: &'static str,
    bindings: &'static [Binding],
}

const GROUPS: &[Group] = &[
    Group {
        title: "Page",
        bindings: &[
            Binding { keys: "↑/↓, PgUp/PgDn", action: "Scroll" },
            Binding { keys: "Home / End", action: "Jump to top / bottom" },
            Binding { keys: "1-5", action: "Go to section (smooth scroll)" },
            Binding { keys: "m", action: "Open the section menu" },
            Binding { keys: "x", action: "Dismiss the notice" },
            Binding { keys: "q", action: "Quit" },
        ],
    },
    Group {
        title: "Skills",
        bindings: &[Binding { keys: "←/→", action: "Switch skill category tab" }],
    },
    Group {
        title: "Projects",
        bindings: &[
            Binding { keys: "←/→", action: "Move between project cards" },
            Binding { keys: "f", action: "Cycle category filter" },
            Binding { keys: "Enter", action: "Open project details" },
        ],
    },
    Group {
        title: "Work",
        bindings: &[
            Binding { keys: "←/→", action: "Previous / next job" },
            Binding { keys: "Tab / Shift+Tab", action: "Move job cursor" },
            Binding { keys: "Enter", action: "Show job under cursor" },
            Binding { keys: "j/k", action: "Scroll the detail panel" },
        ],
    },
    Group {
        title: "Contact",
        bindings: &[
            Binding { keys: "Enter", action: "Edit the form / send" },
            Binding { keys: "Tab / Shift+Tab", action: "Next / previous field" },
            Binding { keys: "Esc", action: "Stop editing" },
        ],
    },
];

/// Render the help overlay.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for group in GROUPS {
        lines.push(Line::from(Span::styled(
            format!(" {}", group.title),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        for binding in group.bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {:<18}", binding.keys),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(binding.action.to_string(), Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::default());
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Close"),
    ]))
    .style(Style::default().fg(theme.text_muted));
    f.render_widget(footer, chunks[1]);
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
