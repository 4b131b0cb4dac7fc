//! Work-history section: a carousel over the job list.
//!
//! One job is shown at a time in a fixed-height detail panel; the panel
//! renders blank while a transition is in flight and its internal scroll
//! resets whenever the selection changes.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::WorkExperience;
use crate::tui::carousel::Carousel;
use crate::tui::page::{chip_lines, section_header, wrap_text};
use crate::tui::theme::Theme;

/// Rows the detail panel occupies regardless of content length.
const DETAIL_HEIGHT: usize = 16;

/// Work view state.
#[derive(Debug)]
pub struct WorkState {
    /// Carousel over the job list
    pub carousel: Carousel,
    /// Sidebar cursor, independent of the shown job
    pub job_cursor: usize,
    /// Internal scroll of the detail panel
    pub detail_scroll: usize,
}

impl WorkState {
    /// Creates the state for a job list of the given length.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            carousel: Carousel::new(len),
            job_cursor: 0,
            detail_scroll: 0,
        }
    }

    /// Shows the next job. The panel scroll resets on an accepted change.
    pub fn next(&mut self, now: Instant) {
        if self.carousel.next(now) {
            self.detail_scroll = 0;
        }
    }

    /// Shows the previous job.
    pub fn previous(&mut self, now: Instant) {
        if self.carousel.previous(now) {
            self.detail_scroll = 0;
        }
    }

    /// Jumps to the job under the sidebar cursor.
    pub fn select_cursor(&mut self, now: Instant) {
        if self.carousel.select(self.job_cursor, now) {
            self.detail_scroll = 0;
        }
    }

    /// Moves the sidebar cursor with wraparound.
    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.carousel.len();
        if forward {
            self.job_cursor = (self.job_cursor + 1) % len;
        } else {
            self.job_cursor = (self.job_cursor + len - 1) % len;
        }
    }

    /// Scrolls the detail panel.
    pub fn scroll_detail(&mut self, down: bool, panel_lines: usize) {
        let max = panel_lines.saturating_sub(DETAIL_HEIGHT);
        if down {
            self.detail_scroll = (self.detail_scroll + 1).min(max);
        } else {
            self.detail_scroll = self.detail_scroll.saturating_sub(1);
        }
    }
}

/// Full (unwindowed) detail lines for one job.
fn detail_lines(job: &WorkExperience, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let wrap_width = usize::from(width).saturating_sub(8).max(20);
    let mut out = vec![
        Line::from(vec![
            Span::styled(
                job.company.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", job.title),
                Style::default().fg(theme.accent),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}   {}", job.duration, job.location),
            Style::default().fg(theme.text_muted),
        )),
        Line::default(),
    ];
    for part in wrap_text(&job.description, wrap_width) {
        out.push(Line::from(Span::styled(
            part,
            Style::default().fg(theme.text_secondary),
        )));
    }
    out.push(Line::default());
    out.push(Line::from(Span::styled(
        "Key Achievements".to_string(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, achievement) in job.achievements.iter().enumerate() {
        let mut first = true;
        for part in wrap_text(achievement, wrap_width.saturating_sub(4)) {
            let prefix = if first {
                format!(" {}. ", i + 1)
            } else {
                "    ".to_string()
            };
            first = false;
            out.push(Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.accent)),
                Span::styled(part, Style::default().fg(theme.text)),
            ]));
        }
    }
    out.push(Line::default());
    out.push(Line::from(Span::styled(
        "Technologies".to_string(),
        Style::default().fg(theme.text_secondary),
    )));
    out.extend(chip_lines(&job.skills, theme, width, " "));
    out
}

/// Renders the work section.
pub fn lines(
    jobs: &[WorkExperience],
    state: &WorkState,
    theme: &Theme,
    width: u16,
    now: Instant,
) -> Vec<Line<'static>> {
    let mut out = section_header(
        "MY JOURNEY",
        "Work Experience",
        "Where I've worked and what I did there.",
        theme,
        width,
    );

    let active = state.carousel.active_index();
    let Some(job) = jobs.get(active) else {
        return out;
    };

    // Carousel header: position, company, prev/next hints
    out.push(
        Line::from(vec![
            Span::styled("◀ ".to_string(), Style::default().fg(theme.accent)),
            Span::styled(
                format!("{}/{}: {}", active + 1, jobs.len(), job.company),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶".to_string(), Style::default().fg(theme.accent)),
        ])
        .centered(),
    );
    out.push(Line::default());

    // Sidebar: every job with period, cursor marker, active highlight
    for (i, entry) in jobs.iter().enumerate() {
        let marker = if i == state.job_cursor { "► " } else { "  " };
        let style = if i == active {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        out.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.active)),
            Span::styled(format!("{} — {}", entry.company, entry.title), style),
            Span::styled(
                format!("  ({})", entry.period),
                Style::default().fg(theme.text_muted),
            ),
        ]));
    }
    out.push(Line::default());

    // Fixed-height detail panel; blank while the transition is in flight.
    let transitioning = state.carousel.is_transitioning(now);
    let detail = detail_lines(job, theme, width);
    for row in 0..DETAIL_HEIGHT {
        if transitioning {
            out.push(Line::default());
        } else {
            match detail.get(state.detail_scroll + row) {
                Some(line) => out.push(line.clone()),
                None => out.push(Line::default()),
            }
        }
    }

    if detail.len() > DETAIL_HEIGHT {
        out.push(
            Line::from(Span::styled(
                "j/k scrolls the panel".to_string(),
                Style::default().fg(theme.text_muted),
            ))
            .centered(),
        );
    }
    out.push(Line::default());
    out
}

/// Number of lines the current job's detail content occupies, for scroll
/// clamping.
#[must_use]
pub fn detail_line_count(
    jobs: &[WorkExperience],
    state: &WorkState,
    theme: &Theme,
    width: u16,
) -> usize {
    jobs.get(state.carousel.active_index())
        .map_or(0, |job| detail_lines(job, theme, width).len())
}
