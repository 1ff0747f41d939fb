//! Core types: conversation, message, scheduled message, and their sum types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message: the local user or the remote contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Contact,
}

/// Delivery status of a message. `Failed` is reserved for a future failure
/// path; no current operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
    Failed,
}

/// A single message inside a conversation thread. Write-once: never edited or
/// deleted after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender: Sender,
    pub content: String,
    #[serde(rename = "time")]
    pub sent_at: DateTime<Utc>,
    pub status: MessageStatus,
}

impl Message {
    /// Creates an outgoing user message, stamped now with status `Sent`.
    pub fn from_user(id: i64, content: String) -> Self {
        Self {
            id,
            sender: Sender::User,
            content,
            sent_at: Utc::now(),
            status: MessageStatus::Sent,
        }
    }

    /// Creates an incoming contact message, stamped now with status `Read`.
    pub fn from_contact(id: i64, content: String) -> Self {
        Self {
            id,
            sender: Sender::Contact,
            content,
            sent_at: Utc::now(),
            status: MessageStatus::Read,
        }
    }
}

/// A per-contact thread of messages plus display metadata.
///
/// `last_message` and `last_activity` are caches over the newest message and
/// are refreshed by [`Conversation::append`]; `messages` is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub platform: String,
    pub last_message: String,
    #[serde(rename = "time")]
    pub last_activity: DateTime<Utc>,
    pub unread: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Appends a message and refreshes the cached preview fields. A contact
    /// message marks the conversation unread; clearing is the caller's job
    /// (it happens when the conversation is opened).
    pub fn append(&mut self, message: Message) {
        self.last_message = message.content.clone();
        self.last_activity = message.sent_at;
        if message.sender == Sender::Contact {
            self.unread = true;
        }
        self.messages.push(message);
    }
}

/// A message template queued for a future send. Scheduling is disjoint from
/// sending: nothing ever transitions an entry to "sent"; entries leave the
/// registry only by explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMessage {
    pub id: i64,
    /// Template text; placeholder tokens like `{first_name}` are carried
    /// verbatim, never substituted.
    pub content: String,
    /// Count of recipients selected at schedule time.
    pub recipients: usize,
    /// The selected conversation ids. Older data carried only the count, so
    /// this defaults to empty when absent.
    #[serde(default)]
    pub recipient_ids: Vec<i64>,
    pub scheduled_for: DateTime<Utc>,
    pub platform: String,
}

impl ScheduledMessage {
    /// Creates an entry for the given recipients; `recipients` is derived
    /// from the id list.
    pub fn new(
        id: i64,
        content: String,
        recipient_ids: Vec<i64>,
        scheduled_for: DateTime<Utc>,
        platform: String,
    ) -> Self {
        Self {
            id,
            content,
            recipients: recipient_ids.len(),
            recipient_ids,
            scheduled_for,
            platform,
        }
    }
}

/// Allocates a time-based record id: the current millisecond timestamp,
/// bumped past the largest existing id so two allocations in the same
/// millisecond stay unique.
pub fn next_record_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) => now.max(max + 1),
        None => now,
    }
}
