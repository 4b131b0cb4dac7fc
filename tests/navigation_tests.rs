//! End-to-end tests for the page's view/navigation state machine:
//! scroll spy, smooth scrolling, the work carousel, the project modal,
//! and the contact form, driven through the public `AppState` API.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use folio::config::Config;
use folio::constants::{CAROUSEL_TRANSITION, SMOOTH_SCROLL_DURATION};
use folio::content::PortfolioContent;
use folio::models::SectionId;
use folio::tui::{handle_key_event, AppState, Popup, Theme};

/// A page viewport of a typical terminal.
fn page_area() -> Rect {
    Rect::new(0, 2, 100, 40)
}

fn app() -> AppState {
    AppState::new(
        PortfolioContent::builtin(),
        Config::new(),
        Theme::dark(),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Scrolls the app into the given section's activation band and settles it.
fn scroll_into(state: &mut AppState, section: SectionId, now: Instant) {
    let top = state.page.layout.section_top(section).unwrap();
    state.scroll = top.saturating_sub(50);
    state.tick(now, page_area());
}

#[test]
fn page_starts_on_home() {
    let mut state = app();
    state.tick(Instant::now(), page_area());
    assert_eq!(state.nav.active, SectionId::Home);
    assert!(!state.nav.raised);
}

#[test]
fn scrolling_into_projects_band_activates_projects() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());

    scroll_into(&mut state, SectionId::Projects, now);
    assert_eq!(state.nav.active, SectionId::Projects);
    assert!(state.nav.raised);
}

#[test]
fn nav_jump_reaches_work_within_duration() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());

    // Key '4' starts the smooth scroll toward Work.
    handle_key_event(&mut state, key(KeyCode::Char('4')), now);
    assert!(state.smooth.is_some());

    // Midway through, the page is in motion but not there yet.
    let midway = now + SMOOTH_SCROLL_DURATION / 2;
    state.tick(midway, page_area());
    let work_top = state.page.layout.section_top(SectionId::Work).unwrap();
    assert!(state.scroll > 0 && state.scroll < work_top);

    // After the full duration the target is reached and the spy follows.
    let done = now + SMOOTH_SCROLL_DURATION;
    state.tick(done, page_area());
    assert_eq!(state.scroll, work_top);
    assert_eq!(state.nav.active, SectionId::Work);
    assert!(state.smooth.is_none());
}

#[test]
fn spy_retains_active_section_past_page_end() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());

    scroll_into(&mut state, SectionId::Projects, now);
    assert_eq!(state.nav.active, SectionId::Projects);

    // The gap rows between sections sit outside every activation band;
    // parking there must keep the previous highlight.
    let skills_top = state.page.layout.section_top(SectionId::Skills).unwrap();
    state.scroll = skills_top.saturating_sub(102);
    state.tick(now, page_area());
    assert_eq!(state.nav.active, SectionId::Projects);
}

#[test]
fn carousel_keys_respect_transition_lock() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());
    scroll_into(&mut state, SectionId::Work, now);
    assert_eq!(state.nav.active, SectionId::Work);

    handle_key_event(&mut state, key(KeyCode::Right), now);
    assert_eq!(state.work.carousel.active_index(), 1);

    // A second press inside the lock window is dropped.
    handle_key_event(
        &mut state,
        key(KeyCode::Right),
        now + Duration::from_millis(50),
    );
    assert_eq!(state.work.carousel.active_index(), 1);

    // After the lock clears, input is accepted again.
    let later = now + CAROUSEL_TRANSITION + Duration::from_millis(1);
    handle_key_event(&mut state, key(KeyCode::Right), later);
    assert_eq!(state.work.carousel.active_index(), 2);
}

#[test]
fn project_modal_opens_and_closes_via_keys() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());
    scroll_into(&mut state, SectionId::Projects, now);

    handle_key_event(&mut state, key(KeyCode::Enter), now);
    let first_id = state.content.projects[0].id;
    assert_eq!(state.projects.inspected, Some(first_id));

    handle_key_event(&mut state, key(KeyCode::Esc), now);
    assert_eq!(state.projects.inspected, None);
}

#[test]
fn contact_form_submits_and_raises_notice() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());
    scroll_into(&mut state, SectionId::Contact, now);
    assert_eq!(state.nav.active, SectionId::Contact);

    handle_key_event(&mut state, key(KeyCode::Enter), now);
    assert!(state.contact.is_editing());

    for c in "Ada".chars() {
        handle_key_event(&mut state, key(KeyCode::Char(c)), now);
    }
    handle_key_event(&mut state, key(KeyCode::Tab), now);
    for c in "ada@example.com".chars() {
        handle_key_event(&mut state, key(KeyCode::Char(c)), now);
    }
    handle_key_event(&mut state, key(KeyCode::Tab), now);
    for c in "hello".chars() {
        handle_key_event(&mut state, key(KeyCode::Char(c)), now);
    }

    handle_key_event(&mut state, key(KeyCode::Enter), now);

    assert!(!state.contact.is_editing());
    assert_eq!(state.contact.name, "");
    assert_eq!(state.contact.email, "");
    assert_eq!(state.contact.message, "");
    assert!(state.contact.notice.is_some());

    // The notice auto-dismisses after its deadline.
    state.tick(now + Duration::from_secs(7), page_area());
    assert!(state.contact.notice.is_none());
}

#[test]
fn drawer_navigates_and_closes_on_selection() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());

    handle_key_event(&mut state, key(KeyCode::Char('m')), now);
    assert_eq!(state.popup, Some(Popup::Drawer));

    handle_key_event(&mut state, key(KeyCode::Down), now);
    handle_key_event(&mut state, key(KeyCode::Enter), now);
    assert_eq!(state.popup, None);

    let skills_top = state.page.layout.section_top(SectionId::Skills).unwrap();
    state.tick(now + SMOOTH_SCROLL_DURATION, page_area());
    assert_eq!(state.scroll, skills_top);
}

#[test]
fn skill_bars_latch_after_entering_viewport() {
    let mut state = app();
    let now = Instant::now();
    state.tick(now, page_area());

    // Park the viewport over the skill bars.
    let (first_bar, first_row) = state.page.skill_bar_rows[0].clone();
    state.scroll = first_row.saturating_sub(5);
    state.tick(now, page_area());
    assert!(!state.skills.is_filled(&first_bar));

    // The staggered delay elapses on a later tick.
    state.tick(now + Duration::from_millis(150), page_area());
    assert!(state.skills.is_filled(&first_bar));

    // Switching tabs clears the latch set.
    handle_key_event(
        &mut state,
        key(KeyCode::Right),
        now + Duration::from_millis(200),
    );
    assert!(!state.skills.is_filled(&first_bar));
}
