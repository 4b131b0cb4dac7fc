//! Landing/hero section.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Profile;
use crate::tui::page::wrap_text;
use crate::tui::theme::Theme;

/// Renders the hero section.
pub fn lines(profile: &Profile, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let wrap_width = usize::from(width).saturating_sub(8).max(20);
    let mut out = vec![
        Line::default(),
        Line::default(),
        Line::default(),
        Line::from(Span::styled(
            "Hi, I'm".to_string(),
            Style::default().fg(theme.text_secondary),
        ))
        .centered(),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            profile.headline.clone(),
            Style::default().fg(theme.accent),
        ))
        .centered(),
        Line::default(),
    ];

    for part in wrap_text(&profile.summary, wrap_width) {
        out.push(
            Line::from(Span::styled(part, Style::default().fg(theme.text))).centered(),
        );
    }
    out.push(Line::default());

    if !profile.location.is_empty() {
        out.push(
            Line::from(Span::styled(
                profile.location.clone(),
                Style::default().fg(theme.text_muted),
            ))
            .centered(),
        );
    }

    if !profile.links.is_empty() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, link) in profile.links.iter().enumerate() {
            spans.push(Span::styled(
                link.label.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            spans.push(Span::styled(
                format!(" {} ", link.url),
                Style::default().fg(theme.text_muted),
            ));
            if i + 1 < profile.links.len() {
                spans.push(Span::raw("  "));
            }
        }
        out.push(Line::from(spans).centered());
    }

    if !profile.resume_ref.is_empty() {
        out.push(Line::default());
        out.push(
            Line::from(vec![
                Span::styled("Resume: ".to_string(), Style::default().fg(theme.text_secondary)),
                Span::styled(
                    profile.resume_ref.clone(),
                    Style::default().fg(theme.accent),
                ),
            ])
            .centered(),
        );
    }

    out.push(Line::default());
    out.push(
        Line::from(Span::styled(
            "↓ scroll to explore".to_string(),
            Style::default().fg(theme.text_muted),
        ))
        .centered(),
    );
    out.push(Line::default());
    out.push(Line::default());

    out
}
