//! Selection over an ordered list with a transition lock.
//!
//! Used by the work-history view. While a transition is in flight every
//! further selection change is dropped (not queued); the lock self-clears
//! after a fixed delay.

use std::time::Instant;

use crate::constants::CAROUSEL_TRANSITION;

/// Carousel selection state.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active: usize,
    locked_until: Option<Instant>,
}

impl Carousel {
    /// Creates a carousel over a non-empty list.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active: 0,
            locked_until: None,
        }
    }

    /// Currently selected index. Always in `0..len`.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel holds exactly one entry.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.len == 1
    }

    /// Whether a transition is in flight at `now`.
    #[must_use]
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Advances to the next entry with wraparound.
    ///
    /// Returns `true` if the selection changed; a call during a transition
    /// is dropped and returns `false`.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.is_transitioning(now) {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        self.lock(now);
        true
    }

    /// Moves to the previous entry with wraparound.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.is_transitioning(now) {
            return false;
        }
        self.active = (self.active + self.len - 1) % self.len;
        self.lock(now);
        true
    }

    /// Jumps directly to `index` (no intermediate steps).
    ///
    /// Dropped while transitioning; selecting the current index is a no-op
    /// and does not arm the lock. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        if self.is_transitioning(now) || index == self.active || index >= self.len {
            return false;
        }
        self.active = index;
        self.lock(now);
        true
    }

    fn lock(&mut self, now: Instant) {
        self.locked_until = Some(now + CAROUSEL_TRANSITION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A moment safely past the transition window.
    fn after_lock(now: Instant) -> Instant {
        now + CAROUSEL_TRANSITION + Duration::from_millis(1)
    }

    #[test]
    fn next_wraps_back_to_start_after_full_cycle() {
        let mut carousel = Carousel::new(3);
        let mut now = Instant::now();
        for _ in 0..3 {
            assert!(carousel.next(now));
            now = after_lock(now);
        }
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn previous_is_inverse_of_next() {
        let mut carousel = Carousel::new(4);
        let mut now = Instant::now();
        assert!(carousel.next(now));
        now = after_lock(now);
        assert!(carousel.previous(now));
        assert_eq!(carousel.active_index(), 0);

        now = after_lock(now);
        assert!(carousel.previous(now));
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn changes_during_lock_window_are_dropped() {
        let mut carousel = Carousel::new(3);
        let now = Instant::now();

        assert!(carousel.next(now));
        assert_eq!(carousel.active_index(), 1);

        // Still inside the lock window: every operation is a no-op.
        let inside = now + Duration::from_millis(100);
        assert!(!carousel.next(inside));
        assert!(!carousel.previous(inside));
        assert!(!carousel.select(2, inside));
        assert_eq!(carousel.active_index(), 1);

        // After the window the carousel accepts input again.
        assert!(carousel.next(after_lock(now)));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn select_jumps_directly_without_intermediate_index() {
        let mut carousel = Carousel::new(5);
        let now = Instant::now();
        assert!(carousel.select(3, now));
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn selecting_current_index_does_not_arm_lock() {
        let mut carousel = Carousel::new(3);
        let now = Instant::now();
        assert!(!carousel.select(0, now));
        assert!(!carousel.is_transitioning(now));
        // Immediately selectable because no lock was armed.
        assert!(carousel.select(2, now));
    }

    #[test]
    fn lock_self_clears_after_fixed_delay() {
        let mut carousel = Carousel::new(2);
        let now = Instant::now();
        carousel.next(now);
        assert!(carousel.is_transitioning(now + Duration::from_millis(499)));
        assert!(!carousel.is_transitioning(now + CAROUSEL_TRANSITION));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut carousel = Carousel::new(2);
        let now = Instant::now();
        assert!(!carousel.select(7, now));
        assert_eq!(carousel.active_index(), 0);
    }
}
