//! Scheduler registry: owns the pending scheduled messages, independent of
//! the conversation store. Scheduling never touches conversations and
//! nothing here performs delivery.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use outreach_core::{
    format_scheduled_date, next_record_id, Notification, Notifier, Result, ScheduledMessage,
    StoreError,
};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// In-memory registry of pending scheduled messages.
#[derive(Clone)]
pub struct SchedulerRegistry {
    entries: Arc<RwLock<Vec<ScheduledMessage>>>,
    notifier: Arc<dyn Notifier>,
}

impl SchedulerRegistry {
    /// Creates a registry over the given initial entries.
    pub fn new(initial: Vec<ScheduledMessage>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(initial)),
            notifier,
        }
    }

    /// All pending entries, ordered as stored.
    pub async fn scheduled_messages(&self) -> Vec<ScheduledMessage> {
        self.entries.read().await.clone()
    }

    /// Number of pending entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is scheduled.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Queues a message for the given recipients. Recipient ids are taken
    /// as-is; they are not checked against any conversation store. Past send
    /// times are accepted (the original tool never rejected them) but logged.
    pub async fn schedule_message(
        &self,
        content: &str,
        scheduled_for: DateTime<Utc>,
        recipient_ids: &[i64],
        platform: &str,
    ) -> Result<ScheduledMessage> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }
        if recipient_ids.is_empty() {
            return Err(StoreError::NoRecipients);
        }
        if scheduled_for <= Utc::now() {
            warn!(
                scheduled_for = %scheduled_for,
                "Scheduling a message for a time in the past"
            );
        }

        let entry = {
            let mut entries = self.entries.write().await;
            let id = next_record_id(entries.iter().map(|e| e.id));
            let entry = ScheduledMessage::new(
                id,
                content.to_string(),
                recipient_ids.to_vec(),
                scheduled_for,
                platform.to_string(),
            );
            entries.push(entry.clone());
            entry
        };

        info!(
            id = entry.id,
            recipients = entry.recipients,
            platform = %entry.platform,
            scheduled_for = %entry.scheduled_for,
            "Message scheduled"
        );

        self.emit(Notification::new(
            "Message scheduled",
            format!(
                "Your message will be sent to {} recipients at {}.",
                entry.recipients,
                format_scheduled_date(&entry.scheduled_for)
            ),
        ))
        .await;

        Ok(entry)
    }

    /// Removes the entry with the given id. Returns whether an entry was
    /// removed; a second delete of the same id is a no-op.
    pub async fn delete_scheduled_message(&self, id: i64) -> bool {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() < before;
        if removed {
            info!(id, "Scheduled message deleted");
        }
        removed
    }

    async fn emit(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(notification).await {
            warn!(error = %e, "Notifier failed");
        }
    }
}
