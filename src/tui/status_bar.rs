//! Status bar: active notice, contextual key hints, scroll position.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::models::SectionId;
use crate::tui::contact::NoticeKind;
use crate::tui::{AppState, Popup};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        // First line: notice if present, otherwise contextual hints
        let first = if let Some(notice) = &state.contact.notice {
            let (symbol, color) = match notice.kind {
                NoticeKind::Success => ("✔", theme.success),
                NoticeKind::Error => ("✘", theme.error),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {symbol} {}", notice.text),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (x dismisses)", Style::default().fg(theme.text_muted)),
            ])
        } else {
            Self::hints_line(state)
        };

        // Second line: scroll position and active section
        let total = state.page.layout.total_height();
        let position = Line::from(vec![
            Span::styled(
                format!(" row {}/{total}", state.scroll),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                format!("  ·  {}", state.nav.active.anchor()),
                Style::default().fg(theme.text_secondary),
            ),
        ]);

        f.render_widget(Paragraph::new(vec![first, position]), area);
    }

    fn hints_line(state: &AppState) -> Line<'static> {
        let theme = &state.theme;

        let hints: &str = if state.popup.is_some() {
            match state.popup {
                Some(Popup::Drawer) => "↑↓ navigate  Enter go  Esc close",
                Some(Popup::Help) => "Esc closes help",
                None => "",
            }
        } else if state.projects.inspected.is_some() {
            "↑↓ scroll  Esc close"
        } else if state.contact.is_editing() {
            "type to edit  Tab next field  Enter send  Esc done"
        } else {
            match state.nav.active {
                SectionId::Skills => "←→ skill tabs  ↑↓ scroll  1-5 jump  ? help",
                SectionId::Projects => "←→ cards  f filter  Enter details  ↑↓ scroll",
                SectionId::Work => "←→ jobs  Tab cursor  Enter select  j/k panel",
                SectionId::Contact => "Enter writes a message  ↑↓ scroll",
                SectionId::Home => "↑↓ scroll  1-5 jump  m menu  ? help  q quit",
            }
        };

        Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(theme.text_muted),
        ))
    }
}
