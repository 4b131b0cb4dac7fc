//! Skills section: category tabs and staggered proficiency bars.
//!
//! Each skill bar fills only after its row has been seen inside the
//! viewport, with a short per-bar delay. The latch is one-way (a bar never
//! empties while visible) and is cleared wholesale when the tab changes.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::constants::SKILL_FILL_DELAY;
use crate::models::SkillCategory;
use crate::tui::page::section_header;
use crate::tui::theme::Theme;

/// Width of a rendered proficiency bar, in cells.
const BAR_WIDTH: usize = 24;

/// Skills view state: active tab plus the fill-animation latches.
#[derive(Debug, Default)]
pub struct SkillsState {
    /// Index of the selected category tab
    pub active_tab: usize,
    latched: HashSet<String>,
    pending: HashMap<String, Instant>,
}

impl SkillsState {
    /// Creates the state with the first tab selected and nothing latched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a tab. Changing tabs clears every latch and pending delay;
    /// re-selecting the current tab leaves them alone.
    pub fn select_tab(&mut self, index: usize, tab_count: usize) {
        if tab_count == 0 || index >= tab_count || index == self.active_tab {
            return;
        }
        self.active_tab = index;
        self.latched.clear();
        self.pending.clear();
    }

    /// Moves to the next tab with wraparound.
    pub fn next_tab(&mut self, tab_count: usize) {
        if tab_count > 0 {
            self.select_tab((self.active_tab + 1) % tab_count, tab_count);
        }
    }

    /// Moves to the previous tab with wraparound.
    pub fn previous_tab(&mut self, tab_count: usize) {
        if tab_count > 0 {
            self.select_tab((self.active_tab + tab_count - 1) % tab_count, tab_count);
        }
    }

    /// Notes that the given skill rows are currently visible, arming a
    /// one-shot fill delay for each one not already latched or pending.
    pub fn observe_visible<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>, now: Instant) {
        for id in ids {
            if !self.latched.contains(id) && !self.pending.contains_key(id) {
                self.pending.insert(id.to_string(), now + SKILL_FILL_DELAY);
            }
        }
    }

    /// Latches every pending bar whose delay has elapsed. Once armed, a
    /// delay fires even if the row has scrolled back out of view.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, deadline)| now >= **deadline)
            .map(|(id, _)| id.clone())
            .collect();
        for id in expired {
            self.pending.remove(&id);
            self.latched.insert(id);
        }
    }

    /// Whether the bar for `id` renders filled.
    #[must_use]
    pub fn is_filled(&self, id: &str) -> bool {
        self.latched.contains(id)
    }
}

/// Stable id for a skill bar, unique across categories.
#[must_use]
pub fn skill_bar_id(category: &str, skill: &str) -> String {
    format!("{category}/{skill}")
}

/// Renders the skills section.
///
/// Returns the lines plus `(bar id, row offset)` pairs for every bar in the
/// active tab, so the caller can feed visibility back into the latch.
pub fn lines(
    categories: &[SkillCategory],
    state: &SkillsState,
    theme: &Theme,
    width: u16,
) -> (Vec<Line<'static>>, Vec<(String, usize)>) {
    let mut out = section_header(
        "WHAT I WORK WITH",
        "Skills",
        "Technologies and tools I use day to day.",
        theme,
        width,
    );
    let mut bar_rows = Vec::new();

    // Tab bar
    let mut tab_spans: Vec<Span<'static>> = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        let style = if i == state.active_tab {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        tab_spans.push(Span::styled(format!(" {} ", category.name), style));
        if i + 1 < categories.len() {
            tab_spans.push(Span::styled("|", Style::default().fg(theme.text_muted)));
        }
    }
    out.push(Line::from(tab_spans).centered());
    out.push(Line::default());

    if let Some(category) = categories.get(state.active_tab) {
        for skill in &category.skills {
            let id = skill_bar_id(&category.name, &skill.name);
            out.push(Line::from(Span::styled(
                format!("  {}", skill.name),
                Style::default().fg(theme.text),
            )));

            let filled = if state.is_filled(&id) {
                usize::from(skill.level) * BAR_WIDTH / 100
            } else {
                0
            };
            let bar = format!(
                "  {}{} {:>3}%",
                "█".repeat(filled.min(BAR_WIDTH)),
                "░".repeat(BAR_WIDTH.saturating_sub(filled)),
                skill.level
            );
            bar_rows.push((id, out.len()));
            out.push(Line::from(Span::styled(
                bar,
                Style::default().fg(theme.accent),
            )));
            out.push(Line::default());
        }
    }

    (out, bar_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn bars_latch_after_delay_and_stay_latched() {
        let mut state = SkillsState::new();
        let now = Instant::now();
        let id = skill_bar_id("Backend", "Rust");

        state.observe_visible([id.as_str()], now);
        assert!(!state.is_filled(&id));

        // Before the delay elapses the bar stays empty.
        state.tick(now + Duration::from_millis(50));
        assert!(!state.is_filled(&id));

        state.tick(now + SKILL_FILL_DELAY);
        assert!(state.is_filled(&id));

        // Latch is one-way: observing again has no effect.
        state.observe_visible([id.as_str()], now + Duration::from_secs(1));
        state.tick(now + Duration::from_secs(2));
        assert!(state.is_filled(&id));
    }

    #[test]
    fn armed_delay_fires_even_after_row_leaves_view() {
        let mut state = SkillsState::new();
        let now = Instant::now();
        let id = skill_bar_id("Tools", "Git");

        state.observe_visible([id.as_str()], now);
        // No further observation; the delay still fires.
        state.tick(now + SKILL_FILL_DELAY);
        assert!(state.is_filled(&id));
    }

    #[test]
    fn tab_change_clears_latches_and_pending() {
        let mut state = SkillsState::new();
        let now = Instant::now();
        let latched = skill_bar_id("Frontend", "React");
        let pending = skill_bar_id("Frontend", "Svelte");

        state.observe_visible([latched.as_str()], now);
        state.tick(now + SKILL_FILL_DELAY);
        state.observe_visible([pending.as_str()], now + SKILL_FILL_DELAY);
        assert!(state.is_filled(&latched));

        state.select_tab(1, 3);
        assert!(!state.is_filled(&latched));
        // The pending delay was discarded with the tab change.
        state.tick(now + Duration::from_secs(1));
        assert!(!state.is_filled(&pending));
    }

    #[test]
    fn reselecting_current_tab_keeps_latches() {
        let mut state = SkillsState::new();
        let now = Instant::now();
        let id = skill_bar_id("Frontend", "React");

        state.observe_visible([id.as_str()], now);
        state.tick(now + SKILL_FILL_DELAY);
        state.select_tab(0, 3);
        assert!(state.is_filled(&id));
    }

    #[test]
    fn tab_cycling_wraps_both_directions() {
        let mut state = SkillsState::new();
        state.next_tab(3);
        assert_eq!(state.active_tab, 1);
        state.previous_tab(3);
        state.previous_tab(3);
        assert_eq!(state.active_tab, 2);
    }
}
