//! Delivery of contact-form submissions.
//!
//! The form hands finished messages to a [`MessageSink`]; the real transport
//! (an email API or similar) is external to this application. The default
//! sink writes submissions to the log.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Submission id
    pub id: Uuid,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
    /// When the form was submitted
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Builds a message from the current form fields, stamped now.
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            submitted_at: Utc::now(),
        }
    }
}

/// Destination for contact-form submissions.
pub trait MessageSink {
    /// Hands a submission to the sink.
    fn deliver(&mut self, message: &ContactMessage) -> Result<()>;
}

/// Sink that records submissions in the application log.
#[derive(Debug, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn deliver(&mut self, message: &ContactMessage) -> Result<()> {
        tracing::info!(
            id = %message.id,
            name = %message.name,
            email = %message.email,
            "contact form submitted: {}",
            message.message
        );
        Ok(())
    }
}

/// Sink that keeps submissions in memory, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Messages delivered so far, in order
    pub delivered: Vec<ContactMessage>,
}

impl MessageSink for MemorySink {
    fn deliver(&mut self, message: &ContactMessage) -> Result<()> {
        self.delivered.push(message.clone());
        Ok(())
    }
}
