//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod carousel;
pub mod contact;
pub mod help_overlay;
pub mod home;
pub mod nav_drawer;
pub mod navbar;
pub mod page;
pub mod project_modal;
pub mod projects;
pub mod scroll;
pub mod skills;
pub mod status_bar;
pub mod theme;
pub mod work;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{KEY_SCROLL_STEP, SMOOTH_SCROLL_DURATION, WHEEL_SCROLL_STEP};
use crate::content::PortfolioContent;
use crate::models::SectionId;
use crate::sink::{LogSink, MessageSink};

// Re-export TUI components
pub use contact::ContactState;
pub use nav_drawer::{NavDrawerEvent, NavDrawerState};
pub use page::PageView;
pub use project_modal::{ProjectModalEvent, ProjectModalState};
pub use projects::ProjectsState;
pub use scroll::{NavState, SmoothScroll};
pub use skills::SkillsState;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use work::WorkState;

/// Overlay currently shown on top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    /// Section menu for narrow terminals
    Drawer,
    /// Key binding help
    Help,
}

/// Application state - single source of truth.
///
/// All UI components read from this state immutably.
/// Only event handlers and the per-frame tick modify it.
pub struct AppState {
    /// Portfolio content, immutable after startup
    pub content: PortfolioContent,
    /// Application configuration
    pub config: Config,
    /// Resolved UI theme
    pub theme: Theme,

    /// Current scroll offset in page rows
    pub scroll: usize,
    /// In-flight smooth scroll, if any
    pub smooth: Option<SmoothScroll>,
    /// Scroll-spy derived navigation state
    pub nav: NavState,

    /// Skills view state
    pub skills: SkillsState,
    /// Projects view state
    pub projects: ProjectsState,
    /// Project modal scroll state
    pub modal: ProjectModalState,
    /// Work carousel state
    pub work: WorkState,
    /// Contact form state
    pub contact: ContactState,

    /// Active overlay, if any
    pub popup: Option<Popup>,
    /// Drawer selection state, rebuilt on open
    pub drawer: NavDrawerState,

    /// Page lines and geometry for the current frame
    pub page: PageView,
    /// Page viewport height in rows, from the last tick
    pub viewport_height: usize,
    /// Page viewport width in columns, from the last tick
    pub viewport_width: u16,

    /// Destination for contact-form submissions
    pub sink: Box<dyn MessageSink>,
    /// Whether the application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state with the page at the top and nothing selected.
    #[must_use]
    pub fn new(content: PortfolioContent, config: Config, theme: Theme) -> Self {
        let work = WorkState::new(content.work_experiences.len());
        Self {
            content,
            config,
            theme,
            scroll: 0,
            smooth: None,
            nav: NavState::new(),
            skills: SkillsState::new(),
            projects: ProjectsState::new(),
            modal: ProjectModalState::default(),
            work,
            contact: ContactState::new(),
            popup: None,
            drawer: NavDrawerState::new(SectionId::Home),
            page: PageView::default(),
            viewport_height: 0,
            viewport_width: 0,
            sink: Box::new(LogSink),
            should_quit: false,
        }
    }

    /// Replaces the message sink (tests use an in-memory sink).
    pub fn with_sink(mut self, sink: Box<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Per-frame update: advances animations, rebuilds the page for the
    /// current width, clamps the scroll, and feeds the scroll spy and the
    /// skill-bar visibility latch.
    pub fn tick(&mut self, now: Instant, page_area: Rect) {
        self.viewport_height = usize::from(page_area.height);
        self.viewport_width = page_area.width;

        if let Some(smooth) = self.smooth {
            self.scroll = smooth.position(now);
            if smooth.finished(now) {
                self.smooth = None;
            }
        }

        self.page = page::build(
            &self.content,
            &self.skills,
            &self.projects,
            &self.work,
            &self.contact,
            &self.theme,
            page_area.width,
            now,
        );

        let max = self.page.layout.max_scroll(self.viewport_height);
        self.scroll = self.scroll.min(max);

        self.nav.observe(&self.page.layout, self.scroll);

        let visible: Vec<&str> = self
            .page
            .skill_bar_rows
            .iter()
            .filter(|(_, row)| *row >= self.scroll && *row < self.scroll + self.viewport_height)
            .map(|(id, _)| id.as_str())
            .collect();
        self.skills.observe_visible(visible, now);
        self.skills.tick(now);

        self.contact.tick(now);
    }

    /// Starts a smooth scroll to a section's top.
    pub fn jump_to(&mut self, section: SectionId, now: Instant) {
        let Some(top) = self.page.layout.section_top(section) else {
            return;
        };
        let target = top.min(self.page.layout.max_scroll(self.viewport_height));
        self.smooth = Some(SmoothScroll::new(
            self.scroll,
            target,
            now,
            SMOOTH_SCROLL_DURATION,
        ));
    }

    /// Manual scroll; cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: isize) {
        self.smooth = None;
        let max = self.page.layout.max_scroll(self.viewport_height);
        if delta >= 0 {
            self.scroll = (self.scroll + delta.unsigned_abs()).min(max);
        } else {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let page_area = Rect {
            x: 0,
            y: 2,
            width: size.width,
            height: size.height.saturating_sub(4),
        };

        state.tick(Instant::now(), page_area);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout so animations keep advancing
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_key_event(state, key, Instant::now()),
                Event::Mouse(mouse) => handle_mouse_event(state, &mouse),
                // Terminal resized: next tick rebuilds the page
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Navigation bar
            Constraint::Min(5),    // Page
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    navbar::render(f, chunks[0], &state.content.profile, &state.nav, &state.theme);
    state.page.render(f, chunks[1], state.scroll);
    StatusBar::render(f, chunks[2], state);

    if let Some(project) = state.projects.inspected_project(&state.content.projects) {
        project_modal::render(f, &state.modal, project, &state.theme);
    }

    match state.popup {
        Some(Popup::Drawer) => nav_drawer::render(
            f,
            &state.drawer,
            &state.content.profile,
            state.nav.active,
            &state.theme,
        ),
        Some(Popup::Help) => help_overlay::render(f, &state.theme),
        None => {}
    }
}

/// Route a key event to the active overlay, modal, form, or the page.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) {
    match state.popup {
        Some(Popup::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
                state.popup = None;
            }
            return;
        }
        Some(Popup::Drawer) => {
            match nav_drawer::handle_input(&mut state.drawer, key) {
                Some(NavDrawerEvent::Navigate(section)) => {
                    // Selecting an entry also closes the menu
                    state.popup = None;
                    state.jump_to(section, now);
                }
                Some(NavDrawerEvent::Close) => state.popup = None,
                None => {}
            }
            return;
        }
        None => {}
    }

    if state.projects.inspected.is_some() {
        if let Some(ProjectModalEvent::Close) = project_modal::handle_input(&mut state.modal, key)
        {
            state.projects.close();
            state.modal = ProjectModalState::default();
        }
        return;
    }

    if state.contact.is_editing() {
        handle_form_key(state, key, now);
        return;
    }

    handle_page_key(state, key, now);
}

/// Keys while the contact form has focus.
fn handle_form_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => state.contact.leave_form(),
        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => state.contact.next_field(),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => state.contact.previous_field(),
        (KeyCode::Enter, _) => {
            state.contact.submit(state.sink.as_mut(), now);
        }
        (KeyCode::Backspace, _) => {
            if let Some(field) = state.contact.active_field_mut() {
                field.pop();
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            if let Some(field) = state.contact.active_field_mut() {
                field.push(c);
            }
        }
        _ => {}
    }
}

/// Keys in plain page mode: scrolling, section jumps, and the
/// section-specific bindings for whichever section is active.
fn handle_page_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            state.popup = Some(Popup::Help);
            return;
        }
        KeyCode::Char('m') => {
            state.drawer = NavDrawerState::new(state.nav.active);
            state.popup = Some(Popup::Drawer);
            return;
        }
        KeyCode::Char('x') => {
            state.contact.dismiss_notice();
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            state.jump_to(SectionId::ALL[index], now);
            return;
        }
        KeyCode::Up => {
            state.scroll_by(-(KEY_SCROLL_STEP as isize));
            return;
        }
        KeyCode::Down => {
            state.scroll_by(KEY_SCROLL_STEP as isize);
            return;
        }
        KeyCode::PageUp => {
            state.scroll_by(-(state.viewport_height as isize));
            return;
        }
        KeyCode::PageDown => {
            state.scroll_by(state.viewport_height as isize);
            return;
        }
        KeyCode::Home => {
            state.smooth = None;
            state.scroll = 0;
            return;
        }
        KeyCode::End => {
            state.smooth = None;
            state.scroll = state.page.layout.max_scroll(state.viewport_height);
            return;
        }
        _ => {}
    }

    let tab_count = state.content.skill_categories.len();
    match state.nav.active {
        SectionId::Skills => match key.code {
            KeyCode::Left => state.skills.previous_tab(tab_count),
            KeyCode::Right => state.skills.next_tab(tab_count),
            _ => {}
        },
        SectionId::Projects => match key.code {
            KeyCode::Left => {
                let len = state.projects.filtered(&state.content.projects).len();
                state.projects.move_cursor(false, len);
            }
            KeyCode::Right => {
                let len = state.projects.filtered(&state.content.projects).len();
                state.projects.move_cursor(true, len);
            }
            KeyCode::Char('f') => state.projects.cycle_filter(),
            KeyCode::Enter => {
                state.modal = ProjectModalState::default();
                state.projects.open_selected(&state.content.projects);
            }
            _ => {}
        },
        SectionId::Work => match key.code {
            KeyCode::Left => state.work.previous(now),
            KeyCode::Right => state.work.next(now),
            KeyCode::Tab => state.work.move_cursor(true),
            KeyCode::BackTab => state.work.move_cursor(false),
            KeyCode::Enter => state.work.select_cursor(now),
            KeyCode::Char('j') => {
                let panel = work::detail_line_count(
                    &state.content.work_experiences,
                    &state.work,
                    &state.theme,
                    state.viewport_width,
                );
                state.work.scroll_detail(true, panel);
            }
            KeyCode::Char('k') => {
                let panel = work::detail_line_count(
                    &state.content.work_experiences,
                    &state.work,
                    &state.theme,
                    state.viewport_width,
                );
                state.work.scroll_detail(false, panel);
            }
            _ => {}
        },
        SectionId::Contact => {
            if key.code == KeyCode::Enter {
                state.contact.enter_form();
            }
        }
        SectionId::Home => {}
    }
}

/// Mouse wheel scrolls the page; every notch re-runs the scroll spy on the
/// next tick.
pub fn handle_mouse_event(state: &mut AppState, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_by(-(WHEEL_SCROLL_STEP as isize)),
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_SCROLL_STEP as isize),
        _ => {}
    }
}
