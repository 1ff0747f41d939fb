//! Conversation store: owns the conversation list and its message histories.
//!
//! The store is a cheap-to-clone handle over shared state; accessors return
//! cloned snapshots, so readers never observe a half-applied mutation. The
//! only deferred work is the one-shot simulated reply spawned by
//! [`ConversationStore::send_message`].

use std::sync::Arc;

use outreach_core::{
    next_record_id, Conversation, Message, Notification, Notifier, Result, StoreError,
};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::StoreConfig;

/// In-memory conversation store. Conversations are injected at construction
/// and live for the store's lifetime; messages are append-only.
#[derive(Clone)]
pub struct ConversationStore {
    conversations: Arc<RwLock<Vec<Conversation>>>,
    pending_replies: Arc<Mutex<Vec<JoinHandle<()>>>>,
    config: StoreConfig,
    notifier: Arc<dyn Notifier>,
}

impl ConversationStore {
    /// Creates a store over the given initial snapshot.
    pub fn new(
        initial: Vec<Conversation>,
        config: StoreConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            conversations: Arc::new(RwLock::new(initial)),
            pending_replies: Arc::new(Mutex::new(Vec::new())),
            config,
            notifier,
        }
    }

    /// Restores a store from a JSON snapshot produced by [`Self::snapshot`].
    pub fn from_snapshot(
        json: &str,
        config: StoreConfig,
        notifier: Arc<dyn Notifier>,
    ) -> serde_json::Result<Self> {
        let initial: Vec<Conversation> = serde_json::from_str(json)?;
        Ok(Self::new(initial, config, notifier))
    }

    /// All conversations, ordered as stored.
    pub async fn conversations(&self) -> Vec<Conversation> {
        self.conversations.read().await.clone()
    }

    /// Finds a conversation by id.
    pub async fn conversation(&self, conversation_id: i64) -> Option<Conversation> {
        self.conversations
            .read()
            .await
            .iter()
            .find(|c| c.id == conversation_id)
            .cloned()
    }

    /// Number of conversations in the store.
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// Returns true if the store holds no conversations.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Serializes the full conversation list to JSON.
    pub async fn snapshot(&self) -> serde_json::Result<String> {
        let conversations = self.conversations.read().await;
        serde_json::to_string_pretty(&*conversations)
    }

    /// Appends a user message to the target conversation, refreshes its
    /// preview fields, and arms the one-shot simulated reply.
    ///
    /// Content that is empty after trimming and unknown conversation ids are
    /// rejected with the store untouched.
    pub async fn send_message(&self, conversation_id: i64, content: &str) -> Result<Message> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let message = {
            let mut conversations = self.conversations.write().await;
            let conversation = conversations
                .iter_mut()
                .find(|c| c.id == conversation_id)
                .ok_or(StoreError::UnknownConversation(conversation_id))?;

            let id = next_record_id(conversation.messages.iter().map(|m| m.id));
            let message = Message::from_user(id, content.to_string());
            conversation.append(message.clone());
            message
        };

        info!(
            conversation_id,
            message_id = message.id,
            content_len = message.content.len(),
            "Message sent"
        );

        self.emit(Notification::new(
            "Message sent",
            "Your message has been sent successfully.",
        ))
        .await;

        self.arm_simulated_reply(conversation_id).await;

        Ok(message)
    }

    /// Clears the unread flag for the given conversation (done when the
    /// conversation is opened). Returns whether a previously unread
    /// conversation was cleared; unknown ids and already-read conversations
    /// are no-ops.
    pub async fn mark_conversation_read(&self, conversation_id: i64) -> bool {
        let mut conversations = self.conversations.write().await;
        match conversations.iter_mut().find(|c| c.id == conversation_id) {
            Some(conversation) if conversation.unread => {
                conversation.unread = false;
                info!(conversation_id, "Conversation marked read");
                true
            }
            _ => false,
        }
    }

    /// Number of simulated replies still pending.
    pub async fn pending_reply_count(&self) -> usize {
        let mut pending = self.pending_replies.lock().await;
        pending.retain(|handle| !handle.is_finished());
        pending.len()
    }

    /// Cancels every simulated reply that has not fired yet.
    pub async fn abort_pending_replies(&self) {
        let mut pending = self.pending_replies.lock().await;
        let outstanding = pending.len();
        for handle in pending.drain(..) {
            handle.abort();
        }
        if outstanding > 0 {
            info!(outstanding, "Aborted pending simulated replies");
        }
    }

    /// Spawns the deferred reply task. The task re-resolves the conversation
    /// by id after the delay; it must not close over the snapshot that was
    /// current when the send happened.
    async fn arm_simulated_reply(&self, conversation_id: i64) {
        let store = self.clone();
        let delay = self.config.reply_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.apply_simulated_reply(conversation_id).await;
        });

        let mut pending = self.pending_replies.lock().await;
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Appends the canned contact reply to the conversation's current state.
    async fn apply_simulated_reply(&self, conversation_id: i64) {
        let mut conversations = self.conversations.write().await;
        let Some(conversation) = conversations.iter_mut().find(|c| c.id == conversation_id)
        else {
            warn!(conversation_id, "Simulated reply target no longer present");
            return;
        };

        let id = next_record_id(conversation.messages.iter().map(|m| m.id));
        let reply = Message::from_contact(id, self.config.reply_content.clone());
        info!(
            conversation_id,
            message_id = reply.id,
            "Simulated reply appended"
        );
        conversation.append(reply);
    }

    async fn emit(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(notification).await {
            warn!(error = %e, "Notifier failed");
        }
    }
}
