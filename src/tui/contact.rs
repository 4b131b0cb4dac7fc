//! Contact section: channels, the message form, and its notice.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::constants::NOTICE_AUTO_DISMISS;
use crate::models::Profile;
use crate::sink::{ContactMessage, MessageSink};
use crate::tui::page::{section_header, wrap_text};
use crate::tui::theme::Theme;

/// Field in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name field
    Name,
    /// Sender email field
    Email,
    /// Message body field
    Message,
}

impl ContactField {
    /// Get the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Get the previous field.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    /// Get the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Kind of notice raised by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Confirmation
    Success,
    /// Failure
    Error,
}

/// A transient notification with an auto-dismiss deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text
    pub text: String,
    /// Success or error styling
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    /// Success notice expiring after the standard delay.
    #[must_use]
    pub fn success(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
            expires_at: now + NOTICE_AUTO_DISMISS,
        }
    }

    /// Error notice expiring after the standard delay.
    #[must_use]
    pub fn error(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            expires_at: now + NOTICE_AUTO_DISMISS,
        }
    }

    /// Whether the notice has passed its auto-dismiss deadline.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Contact view state: the three fields, the focus, and the notice.
#[derive(Debug, Default)]
pub struct ContactState {
    /// Name field value
    pub name: String,
    /// Email field value
    pub email: String,
    /// Message field value
    pub message: String,
    /// Focused field while the form is being edited
    pub focus: Option<ContactField>,
    /// Active notification, if any
    pub notice: Option<Notice>,
}

impl ContactState {
    /// Creates an empty, unfocused form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form is in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    /// Enters edit mode on the name field.
    pub fn enter_form(&mut self) {
        self.focus = Some(ContactField::Name);
    }

    /// Leaves edit mode, keeping whatever was typed.
    pub fn leave_form(&mut self) {
        self.focus = None;
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        if let Some(field) = self.focus {
            self.focus = Some(field.next());
        }
    }

    /// Moves focus to the previous field.
    pub fn previous_field(&mut self) {
        if let Some(field) = self.focus {
            self.focus = Some(field.previous());
        }
    }

    /// Sets exactly one field, leaving the others untouched.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Mutable access to one field's value.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Mutable access to the focused field's value, if editing.
    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(field) => Some(self.field_mut(field)),
            None => None,
        }
    }

    /// First field with no content, in form order.
    #[must_use]
    pub fn first_empty_field(&self) -> Option<ContactField> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .find(|field| match field {
                ContactField::Name => self.name.trim().is_empty(),
                ContactField::Email => self.email.trim().is_empty(),
                ContactField::Message => self.message.trim().is_empty(),
            })
    }

    /// Submits the form.
    ///
    /// With any field empty, submission is silently blocked: focus moves to
    /// the first empty field and nothing is delivered. Otherwise the message
    /// goes to the sink, the fields reset to empty, edit mode ends, and a
    /// success notice is raised. Delivery is simulated — a sink error is
    /// logged but the submission still reports success.
    pub fn submit(&mut self, sink: &mut dyn MessageSink, now: Instant) -> bool {
        if let Some(empty) = self.first_empty_field() {
            self.focus = Some(empty);
            return false;
        }

        let message = ContactMessage::new(&self.name, &self.email, &self.message);
        if let Err(e) = sink.deliver(&message) {
            tracing::warn!("message sink failed: {e:#}");
        }

        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = None;
        self.notice = Some(Notice::success(
            "Thank you! Your message has been sent successfully.",
            now,
        ));
        true
    }

    /// Clears the notice once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Explicitly dismisses the notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Renders the contact section.
pub fn lines(
    profile: &Profile,
    state: &ContactState,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut out = section_header(
        "GET IN TOUCH",
        "Contact",
        "Have a project in mind? Send me a message.",
        theme,
        width,
    );

    let mut channel = |label: &str, value: &str| {
        if !value.is_empty() {
            out.push(Line::from(vec![
                Span::styled(
                    format!("  {label}: "),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(value.to_string(), Style::default().fg(theme.text)),
            ]));
        }
    };
    channel("Email", &profile.email);
    channel("Phone", &profile.phone);
    channel("Location", &profile.location);
    out.push(Line::default());

    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let focused = state.focus == Some(field);
        let label_style = if focused {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        out.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            label_style,
        )));

        let value = match field {
            ContactField::Name => &state.name,
            ContactField::Email => &state.email,
            ContactField::Message => &state.message,
        };
        let shown = if focused {
            format!("  > {value}_")
        } else if value.is_empty() {
            "  > -".to_string()
        } else {
            format!("  > {value}")
        };
        let wrap_width = usize::from(width).saturating_sub(6).max(20);
        for part in wrap_text(&shown, wrap_width) {
            out.push(Line::from(Span::styled(
                format!("  {part}"),
                Style::default().fg(theme.text),
            )));
        }
    }

    out.push(Line::default());
    let hint = if state.is_editing() {
        "Enter sends  Tab next field  Esc stops editing"
    } else {
        "Press Enter to write a message"
    };
    out.push(
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(theme.text_muted),
        ))
        .centered(),
    );
    out.push(Line::default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn set_field_touches_exactly_one_field() {
        let mut state = ContactState::new();
        state.set_field(ContactField::Email, "a@b.com");
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.name, "");
        assert_eq!(state.message, "");
    }

    #[test]
    fn submit_delivers_resets_and_raises_success() {
        let mut state = ContactState::new();
        let mut sink = MemorySink::default();
        let now = Instant::now();
        state.set_field(ContactField::Name, "Ada");
        state.set_field(ContactField::Email, "ada@example.com");
        state.set_field(ContactField::Message, "hello");

        assert!(state.submit(&mut sink, now));

        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(sink.delivered[0].email, "ada@example.com");
        assert_eq!(state.name, "");
        assert_eq!(state.email, "");
        assert_eq!(state.message, "");
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn submit_with_empty_field_is_silently_blocked() {
        let mut state = ContactState::new();
        let mut sink = MemorySink::default();
        state.set_field(ContactField::Name, "Ada");
        state.set_field(ContactField::Message, "hello");

        assert!(!state.submit(&mut sink, Instant::now()));

        assert!(sink.delivered.is_empty());
        assert!(state.notice.is_none());
        // Focus lands on the first empty field.
        assert_eq!(state.focus, Some(ContactField::Email));
        // The typed fields are kept.
        assert_eq!(state.name, "Ada");
    }

    #[test]
    fn notice_auto_dismisses_after_deadline() {
        let mut state = ContactState::new();
        let now = Instant::now();
        state.notice = Some(Notice::success("sent", now));

        state.tick(now + NOTICE_AUTO_DISMISS - std::time::Duration::from_millis(1));
        assert!(state.notice.is_some());

        state.tick(now + NOTICE_AUTO_DISMISS);
        assert!(state.notice.is_none());
    }

    #[test]
    fn error_notice_kind_is_representable() {
        let now = Instant::now();
        let notice = Notice::error("delivery failed", now);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(!notice.is_expired(now));
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
    }
}
