//! # outreach-core
//!
//! Core types and seams for the outreach messaging core: conversation,
//! message and scheduled-message records, the [`Notifier`] boundary,
//! formatting helpers, and tracing initialization. Store-agnostic; used by
//! outreach-store and the CLI.

pub mod error;
pub mod format;
pub mod logger;
pub mod notify;
pub mod types;

pub use error::{Result, StoreError};
pub use format::{format_message_time, format_relative_time, format_scheduled_date, get_initials};
pub use logger::init_tracing;
pub use notify::{Notification, Notifier, TracingNotifier};
pub use types::{
    next_record_id, Conversation, Message, MessageStatus, ScheduledMessage, Sender,
};
