//! Integration tests for [`outreach_store::ConversationStore`].
//!
//! Covers send/reply semantics, invalid-input no-ops, read marking, reply
//! cancellation, and the snapshot round trip, using the embedded seed data
//! and a short reply delay.

use std::sync::Arc;
use std::time::Duration;

use outreach_core::{MessageStatus, Sender, StoreError};
use outreach_store::{seed, ConversationStore, StoreConfig};

use recording_notifier::RecordingNotifier;

const SHORT_DELAY: Duration = Duration::from_millis(50);

/// Seeded store with a 50 ms reply delay and a recording notifier.
fn seeded_store() -> (ConversationStore, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let store = ConversationStore::new(
        seed::conversations().expect("seed parses"),
        StoreConfig::with_reply_delay(SHORT_DELAY),
        Arc::new(notifier.clone()),
    );
    (store, notifier)
}

/// Sleeps long enough for a SHORT_DELAY reply to have fired.
async fn wait_for_reply() {
    tokio::time::sleep(SHORT_DELAY * 4).await;
}

/// **Test: sending appends a user message and updates the preview fields.**
///
/// **Setup:** Seeded store; conversation 1 has 5 messages.
/// **Action:** `send_message(1, "Hello")`.
/// **Expected:** 6 messages; the newest is sender=user, status=sent,
/// content "Hello"; `last_message` and `last_activity` reflect it; a
/// "Message sent" notification was emitted.
#[tokio::test]
async fn test_send_appends_user_message() {
    let (store, notifier) = seeded_store();

    let sent = store.send_message(1, "Hello").await.expect("send succeeds");

    let conversation = store.conversation(1).await.expect("conversation exists");
    assert_eq!(conversation.messages.len(), 6);
    let newest = conversation.messages.last().unwrap();
    assert_eq!(newest.id, sent.id);
    assert_eq!(newest.sender, Sender::User);
    assert_eq!(newest.status, MessageStatus::Sent);
    assert_eq!(newest.content, "Hello");
    assert_eq!(conversation.last_message, "Hello");
    assert_eq!(conversation.last_activity, newest.sent_at);

    let received = notifier.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].title, "Message sent");
    assert_eq!(received[0].description, "Your message has been sent successfully.");
}

/// **Test: the simulated reply lands after the delay.**
///
/// **Setup:** Seeded store with a 50 ms delay.
/// **Action:** `send_message(1, "Hello")`, assert immediately, then wait.
/// **Expected:** 6 messages immediately; 7 after the delay; the reply is
/// sender=contact, status=read, canned content; the user message precedes
/// it; the conversation is unread again.
#[tokio::test]
async fn test_send_triggers_simulated_reply() {
    let (store, _notifier) = seeded_store();

    store.send_message(1, "Hello").await.expect("send succeeds");
    assert_eq!(store.conversation(1).await.unwrap().messages.len(), 6);

    wait_for_reply().await;

    let conversation = store.conversation(1).await.unwrap();
    assert_eq!(conversation.messages.len(), 7);
    let reply = conversation.messages.last().unwrap();
    assert_eq!(reply.sender, Sender::Contact);
    assert_eq!(reply.status, MessageStatus::Read);
    assert_eq!(reply.content, outreach_store::DEFAULT_REPLY_CONTENT);
    assert_eq!(conversation.messages[5].sender, Sender::User);
    assert_ne!(conversation.messages[5].id, reply.id);
    assert_eq!(conversation.last_message, reply.content);
    assert!(conversation.unread);
}

/// **Test: empty and whitespace-only content are rejected without effect.**
///
/// **Setup:** Seeded store.
/// **Action:** `send_message(1, "")` and `send_message(1, "   ")`.
/// **Expected:** Both return `EmptyContent`; message counts unchanged; no
/// notification; no reply pending.
#[tokio::test]
async fn test_send_empty_content_is_noop() {
    let (store, notifier) = seeded_store();
    let before = store.conversations().await;

    assert_eq!(store.send_message(1, "").await, Err(StoreError::EmptyContent));
    assert_eq!(store.send_message(1, "   ").await, Err(StoreError::EmptyContent));

    assert_eq!(store.conversations().await, before);
    assert!(notifier.received().is_empty());
    assert_eq!(store.pending_reply_count().await, 0);
}

/// **Test: sending to an unknown conversation is a no-op.**
///
/// **Setup:** Seeded store (ids 1..=4).
/// **Action:** `send_message(999, "Hello")`.
/// **Expected:** Returns `UnknownConversation(999)`; store unchanged; no
/// reply pending.
#[tokio::test]
async fn test_send_unknown_conversation_is_noop() {
    let (store, notifier) = seeded_store();
    let before = store.conversations().await;

    assert_eq!(
        store.send_message(999, "Hello").await,
        Err(StoreError::UnknownConversation(999))
    );

    assert_eq!(store.conversations().await, before);
    assert!(notifier.received().is_empty());
    assert_eq!(store.pending_reply_count().await, 0);
}

/// **Test: marking a conversation read is idempotent.**
///
/// **Setup:** Seeded store; conversation 1 starts unread.
/// **Action:** `mark_conversation_read(1)` twice, then on an unknown id.
/// **Expected:** First call clears and returns true; second returns false
/// with `unread` still false; unknown id returns false and changes nothing.
#[tokio::test]
async fn test_mark_conversation_read_idempotent() {
    let (store, _notifier) = seeded_store();
    assert!(store.conversation(1).await.unwrap().unread);

    assert!(store.mark_conversation_read(1).await);
    assert!(!store.conversation(1).await.unwrap().unread);

    assert!(!store.mark_conversation_read(1).await);
    assert!(!store.conversation(1).await.unwrap().unread);

    let before = store.conversations().await;
    assert!(!store.mark_conversation_read(999).await);
    assert_eq!(store.conversations().await, before);
}

/// **Test: replies apply to the live state, not a captured snapshot.**
///
/// **Setup:** Seeded store with a 50 ms delay.
/// **Action:** Send twice to conversation 1 before either reply fires.
/// **Expected:** After the delay the thread holds both user messages and
/// both replies (5 + 4 = 9) with all message ids unique.
#[tokio::test]
async fn test_reply_applies_to_current_state() {
    let (store, _notifier) = seeded_store();

    store.send_message(1, "First").await.expect("first send");
    store.send_message(1, "Second").await.expect("second send");

    wait_for_reply().await;

    let conversation = store.conversation(1).await.unwrap();
    assert_eq!(conversation.messages.len(), 9);
    let contact_replies = conversation
        .messages
        .iter()
        .filter(|m| m.sender == Sender::Contact && m.content == outreach_store::DEFAULT_REPLY_CONTENT)
        .count();
    assert_eq!(contact_replies, 2);

    let mut ids: Vec<i64> = conversation.messages.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), conversation.messages.len());
}

/// **Test: ordering — a user message always precedes its reply.**
///
/// **Setup:** Seeded store with a 50 ms delay.
/// **Action:** Send to conversations 1 and 2, wait for both replies.
/// **Expected:** In each thread the user message sits directly before the
/// canned reply.
#[tokio::test]
async fn test_user_message_precedes_reply_per_conversation() {
    let (store, _notifier) = seeded_store();

    store.send_message(1, "Hi one").await.expect("send to 1");
    store.send_message(2, "Hi two").await.expect("send to 2");

    wait_for_reply().await;

    for (id, content) in [(1, "Hi one"), (2, "Hi two")] {
        let conversation = store.conversation(id).await.unwrap();
        let n = conversation.messages.len();
        assert_eq!(conversation.messages[n - 2].content, content);
        assert_eq!(conversation.messages[n - 2].sender, Sender::User);
        assert_eq!(conversation.messages[n - 1].sender, Sender::Contact);
    }
}

/// **Test: aborting pending replies keeps them from landing.**
///
/// **Setup:** Seeded store with a long (10 s) reply delay.
/// **Action:** Send, assert a reply is pending, abort, wait briefly.
/// **Expected:** The thread stays at 6 messages and no reply remains
/// pending.
#[tokio::test]
async fn test_abort_pending_replies() {
    let notifier = RecordingNotifier::new();
    let store = ConversationStore::new(
        seed::conversations().expect("seed parses"),
        StoreConfig::with_reply_delay(Duration::from_secs(10)),
        Arc::new(notifier),
    );

    store.send_message(1, "Hello").await.expect("send succeeds");
    assert_eq!(store.pending_reply_count().await, 1);

    store.abort_pending_replies().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(store.conversation(1).await.unwrap().messages.len(), 6);
    assert_eq!(store.pending_reply_count().await, 0);
}

/// **Test: snapshot round trip through a file preserves everything.**
///
/// **Setup:** Seeded store with one extra sent message (reply landed).
/// **Action:** `snapshot()` to a temp file, restore with `from_snapshot`.
/// **Expected:** The restored store's conversations equal the original's —
/// ids, message order, and all scalar fields.
#[tokio::test]
async fn test_snapshot_round_trip() {
    let (store, _notifier) = seeded_store();
    store.send_message(1, "Hello").await.expect("send succeeds");
    wait_for_reply().await;

    let json = store.snapshot().await.expect("snapshot serializes");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("conversations.json");
    std::fs::write(&path, &json).expect("write snapshot");
    let restored_json = std::fs::read_to_string(&path).expect("read snapshot");

    let restored = ConversationStore::from_snapshot(
        &restored_json,
        StoreConfig::default(),
        Arc::new(RecordingNotifier::new()),
    )
    .expect("snapshot parses");

    assert_eq!(restored.conversations().await, store.conversations().await);
}
