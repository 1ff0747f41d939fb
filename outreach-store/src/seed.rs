//! Embedded seed dataset: the fixed conversations and scheduled messages the
//! stores are initialized with at process start.

use outreach_core::{Conversation, ScheduledMessage};
use serde::Deserialize;

/// Embedded sample dataset (4 conversations, 2 scheduled messages).
const SEED_JSON: &str = include_str!("seed.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedData {
    conversations: Vec<Conversation>,
    scheduled_messages: Vec<ScheduledMessage>,
}

fn parse() -> serde_json::Result<SeedData> {
    serde_json::from_str(SEED_JSON)
}

/// The initial conversation list.
pub fn conversations() -> serde_json::Result<Vec<Conversation>> {
    Ok(parse()?.conversations)
}

/// The initial scheduled-message list.
pub fn scheduled_messages() -> serde_json::Result<Vec<ScheduledMessage>> {
    Ok(parse()?.scheduled_messages)
}
