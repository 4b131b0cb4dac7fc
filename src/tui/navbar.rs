//! Fixed navigation bar with scroll-spy highlighting.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::constants::NARROW_WIDTH;
use crate::models::{Profile, SectionId};
use crate::tui::scroll::NavState;
use crate::tui::theme::Theme;

/// Renders the navigation bar into its fixed top area.
///
/// Past the raise threshold the bar draws a bottom border and surface
/// background; before it the bar sits flat on the page background.
pub fn render(
    f: &mut Frame,
    area: Rect,
    profile: &Profile,
    nav: &NavState,
    theme: &Theme,
) {
    let (bg, border_style) = if nav.raised {
        (theme.surface, Style::default().fg(theme.primary))
    } else {
        (theme.background, Style::default().fg(theme.background))
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style)
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let narrow = area.width < NARROW_WIDTH;
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            format!(" {} ", profile.name),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if narrow {
        spans.push(Span::styled(
            format!("[{}]", nav.active.title()),
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            "  m: menu".to_string(),
            Style::default().fg(theme.text_muted),
        ));
    } else {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            let style = if section == nav.active {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(
                format!(" {}:{} ", i + 1, section.title()),
                style,
            ));
        }
        if !profile.resume_ref.is_empty() {
            spans.push(Span::styled(
                format!("  Resume: {}", profile.resume_ref),
                Style::default().fg(theme.text_muted),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
