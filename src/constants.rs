//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the navigation timing model.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "folio";

/// Rows above a section's top at which it already counts as active.
///
/// A section's activation band is `[top - ACTIVATION_MARGIN,
/// top + height - ACTIVATION_MARGIN)`. Short sections produce overlapping
/// bands; the later-declared section wins.
pub const ACTIVATION_MARGIN: usize = 100;

/// Scroll offset past which the navigation bar switches to its raised
/// treatment. Exactly at the threshold the bar is still flat.
pub const RAISED_THRESHOLD: usize = 50;

/// Duration of the smooth scroll triggered by a navigation entry.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(500);

/// How long a carousel transition holds its lock before accepting new input.
pub const CAROUSEL_TRANSITION: Duration = Duration::from_millis(500);

/// Delay between a skill bar entering the viewport and its fill latching.
/// Rows become visible at different times, so the fills stagger.
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(100);

/// How long a contact-form notice stays visible before auto-dismissing.
pub const NOTICE_AUTO_DISMISS: Duration = Duration::from_secs(6);

/// Terminal width below which the navbar collapses to the drawer menu.
pub const NARROW_WIDTH: u16 = 70;

/// Blank rows inserted between adjacent sections on the page.
pub const SECTION_GAP: usize = 4;

/// Minimum rendered height of a section, in rows. Short sections are padded
/// so each one reads as a full page band and keeps a non-empty activation
/// band under [`ACTIVATION_MARGIN`].
pub const SECTION_MIN_HEIGHT: usize = 120;

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_SCROLL_STEP: usize = 3;

/// Rows scrolled per arrow key press.
pub const KEY_SCROLL_STEP: usize = 2;
