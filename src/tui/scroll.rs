//! Page geometry, scroll spy, and smooth scrolling.
//!
//! The page is a virtual column of rows. Each section contributes a measured
//! block of rendered lines; `PageLayout` records where every section starts
//! and how tall it is. The scroll spy maps the current scroll offset to the
//! section the navigation bar should highlight.

use std::time::{Duration, Instant};

use crate::constants::{ACTIVATION_MARGIN, RAISED_THRESHOLD};
use crate::models::SectionId;

/// Where a section sits on the virtual page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    /// Section identity
    pub id: SectionId,
    /// First row of the section
    pub top: usize,
    /// Rendered height in rows
    pub height: usize,
}

impl SectionExtent {
    /// Whether the scroll offset falls inside this section's activation band,
    /// `[top - margin, top + height - margin)`.
    ///
    /// Both bounds saturate at zero, matching offsets that can never go
    /// negative: a section whose whole band sits above row zero simply never
    /// matches.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        let lower = self.top.saturating_sub(ACTIVATION_MARGIN);
        let upper = (self.top + self.height).saturating_sub(ACTIVATION_MARGIN);
        offset >= lower && offset < upper
    }
}

/// Section positions for one rendered width.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    extents: Vec<SectionExtent>,
    total_height: usize,
}

impl PageLayout {
    /// Builds a layout from explicit extents, trusting their declared order.
    #[must_use]
    pub fn from_extents(extents: Vec<SectionExtent>) -> Self {
        let total_height = extents.iter().map(|e| e.top + e.height).max().unwrap_or(0);
        Self {
            extents,
            total_height,
        }
    }

    /// Stacks `(section, height)` blocks in order with `gap` blank rows
    /// between adjacent sections.
    #[must_use]
    pub fn stack(blocks: &[(SectionId, usize)], gap: usize) -> Self {
        let mut extents = Vec::with_capacity(blocks.len());
        let mut top = 0;
        for (i, (id, height)) in blocks.iter().enumerate() {
            if i > 0 {
                top += gap;
            }
            extents.push(SectionExtent {
                id: *id,
                top,
                height: *height,
            });
            top += height;
        }
        Self {
            extents,
            total_height: top,
        }
    }

    /// All section extents in page order.
    #[must_use]
    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    /// Total page height in rows.
    #[must_use]
    pub const fn total_height(&self) -> usize {
        self.total_height
    }

    /// First row of the given section.
    #[must_use]
    pub fn section_top(&self, id: SectionId) -> Option<usize> {
        self.extents.iter().find(|e| e.id == id).map(|e| e.top)
    }

    /// Largest valid scroll offset for a viewport of the given height.
    #[must_use]
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.total_height.saturating_sub(viewport_height)
    }

    /// The section whose activation band contains the offset.
    ///
    /// Sections are checked in declared order and the **last** match wins, so
    /// when short sections produce overlapping bands the later-declared
    /// section takes the highlight. Returns `None` when no band matches.
    #[must_use]
    pub fn section_at(&self, offset: usize) -> Option<SectionId> {
        self.extents
            .iter()
            .filter(|e| e.contains(offset))
            .next_back()
            .map(|e| e.id)
    }
}

/// Navigation bar state derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    /// The highlighted section
    pub active: SectionId,
    /// Whether the bar uses its raised (scrolled) treatment
    pub raised: bool,
}

impl NavState {
    /// Starts at the first declared section, bar flat.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: SectionId::ALL[0],
            raised: false,
        }
    }

    /// Recomputes the state for the given scroll offset.
    ///
    /// When no section's band contains the offset the previous highlight is
    /// retained rather than falling back to the first section. That matches
    /// the observed behavior of the spy this was modeled on; tests pin it.
    pub fn observe(&mut self, layout: &PageLayout, offset: usize) {
        if let Some(active) = layout.section_at(offset) {
            self.active = active;
        }
        self.raised = offset > RAISED_THRESHOLD;
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-flight smooth scroll toward a navigation target.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    from: usize,
    to: usize,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    /// Starts a scroll from `from` to `to` at `now`.
    #[must_use]
    pub fn new(from: usize, to: usize, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    /// Scroll target.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.to
    }

    /// Linear interpolation between start and target, clamped to the target
    /// once the duration has elapsed.
    #[must_use]
    pub fn position(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        if self.to >= self.from {
            let span = (self.to - self.from) as f64;
            self.from + (span * fraction).round() as usize
        } else {
            let span = (self.from - self.to) as f64;
            self.from - (span * fraction).round() as usize
        }
    }

    /// Whether the scroll has reached its target.
    #[must_use]
    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_sections() -> PageLayout {
        // Realistic mix: a tall hero, mid-sized content sections, a short tail.
        PageLayout::stack(
            &[
                (SectionId::Home, 120),
                (SectionId::Skills, 90),
                (SectionId::Projects, 140),
                (SectionId::Work, 110),
                (SectionId::Contact, 60),
            ],
            4,
        )
    }

    #[test]
    fn stack_accumulates_tops_with_gaps() {
        let layout = five_sections();
        let tops: Vec<usize> = layout.extents().iter().map(|e| e.top).collect();
        assert_eq!(tops, vec![0, 124, 218, 362, 476]);
        assert_eq!(layout.total_height(), 536);
    }

    #[test]
    fn active_section_is_last_matching_band() {
        let layout = five_sections();
        // Offset 130 is inside Home's band [0, 20) — no. Skills band is
        // [24, 114+... recompute: Skills top 124, height 90 -> band [24, 114).
        // Projects top 218, height 140 -> band [118, 258).
        // 130 falls only in Projects' band.
        assert_eq!(layout.section_at(130), Some(SectionId::Projects));
        // 110 falls in Skills' band [24, 114) only.
        assert_eq!(layout.section_at(110), Some(SectionId::Skills));
    }

    #[test]
    fn overlapping_bands_prefer_later_section() {
        // Stacked sections produce disjoint bands, so overlap is pinned with
        // explicit extents: Skills' band [50, 250) swallows Projects' band
        // [120, 160) entirely.
        let layout = PageLayout::from_extents(vec![
            SectionExtent {
                id: SectionId::Skills,
                top: 150,
                height: 200,
            },
            SectionExtent {
                id: SectionId::Projects,
                top: 220,
                height: 40,
            },
        ]);
        assert!(layout.extents()[0].contains(140));
        assert!(layout.extents()[1].contains(140));
        assert_eq!(layout.section_at(140), Some(SectionId::Projects));
        // Outside Projects' band Skills keeps the highlight.
        assert_eq!(layout.section_at(200), Some(SectionId::Skills));
    }

    #[test]
    fn no_matching_band_yields_none() {
        // A single section shorter than the margin has an empty band.
        let layout = PageLayout::stack(&[(SectionId::Home, 80)], 0);
        assert_eq!(layout.section_at(0), None);
        assert_eq!(layout.section_at(79), None);
    }

    #[test]
    fn nav_state_retains_previous_active_when_nothing_matches() {
        let layout = five_sections();
        let mut nav = NavState::new();

        nav.observe(&layout, 130);
        assert_eq!(nav.active, SectionId::Projects);

        // Far past the page end no band matches; the highlight must be
        // retained, not reset to the first section.
        nav.observe(&layout, 5000);
        assert_eq!(nav.active, SectionId::Projects);
    }

    #[test]
    fn raised_flips_strictly_above_threshold() {
        let layout = five_sections();
        let mut nav = NavState::new();

        nav.observe(&layout, 50);
        assert!(!nav.raised);

        nav.observe(&layout, 51);
        assert!(nav.raised);
    }

    #[test]
    fn smooth_scroll_reaches_target_within_duration() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(0, 200, start, Duration::from_millis(500));

        assert_eq!(scroll.position(start), 0);
        let midway = scroll.position(start + Duration::from_millis(250));
        assert!(midway > 0 && midway < 200, "midway position was {midway}");
        assert_eq!(scroll.position(start + Duration::from_millis(500)), 200);
        assert!(scroll.finished(start + Duration::from_millis(500)));
    }

    #[test]
    fn smooth_scroll_interpolates_downward() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(300, 100, start, Duration::from_millis(500));

        let midway = scroll.position(start + Duration::from_millis(250));
        assert!(midway < 300 && midway > 100, "midway position was {midway}");
        assert_eq!(scroll.position(start + Duration::from_millis(600)), 100);
    }

    #[test]
    fn max_scroll_clamps_to_zero_for_tall_viewports() {
        let layout = PageLayout::stack(&[(SectionId::Home, 30)], 0);
        assert_eq!(layout.max_scroll(100), 0);
    }
}
