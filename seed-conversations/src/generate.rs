//! Generate conversation-shaped seed data (samples or synthetic).

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One message; fields align with the outreach-store wire shape for
/// import/export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedMessage {
    pub id: i64,
    pub sender: String,
    pub content: String,
    pub time: DateTime<Utc>,
    pub status: String,
}

/// One conversation thread; fields align with the outreach-store wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedConversation {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub platform: String,
    pub last_message: String,
    pub time: DateTime<Utc>,
    pub unread: bool,
    pub avatar: Option<String>,
    pub messages: Vec<SeedMessage>,
}

/// One scheduled entry; fields align with the outreach-store wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedScheduledMessage {
    pub id: i64,
    pub content: String,
    pub recipients: usize,
    #[serde(default)]
    pub recipient_ids: Vec<i64>,
    pub scheduled_for: DateTime<Utc>,
    pub platform: String,
}

/// Full seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub conversations: Vec<SeedConversation>,
    pub scheduled_messages: Vec<SeedScheduledMessage>,
}

/// Embedded sample dataset (the four dashboard conversations).
const SAMPLES_JSON: &str = include_str!("samples.json");

const PLATFORMS: [&str; 3] = ["Instagram", "Twitter", "LinkedIn"];

/// Generates seed data: by default the built-in samples; config from env.
/// - SEED_USE_SAMPLES: "1" (default) = use samples, "0" = synthetic
/// - SEED_CONVERSATIONS_COUNT: conversation count when synthetic (default 4)
/// - SEED_MESSAGES_PER_CONVERSATION: thread length when synthetic (default 4)
pub fn generate() -> Result<SeedData> {
    let use_samples = std::env::var("SEED_USE_SAMPLES")
        .unwrap_or_else(|_| "1".into())
        .trim()
        == "1";

    if use_samples {
        Ok(serde_json::from_str(SAMPLES_JSON)?)
    } else {
        let conversations = std::env::var("SEED_CONVERSATIONS_COUNT")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(4);
        let messages_per = std::env::var("SEED_MESSAGES_PER_CONVERSATION")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(4);
        Ok(generate_synthetic(conversations, messages_per))
    }
}

/// Synthetic conversations: alternating user/contact messages five minutes
/// apart, platforms rotated, every thread read except the newest.
pub fn generate_synthetic(conversations: usize, messages_per: usize) -> SeedData {
    let base_time = Utc::now() - Duration::minutes(5 * (conversations * messages_per) as i64);

    let conversations: Vec<SeedConversation> = (0..conversations)
        .map(|c| {
            let id = (c + 1) as i64;
            let messages: Vec<SeedMessage> = (0..messages_per)
                .map(|m| {
                    let (sender, status) = if m % 2 == 0 {
                        ("user", "read")
                    } else {
                        ("contact", "read")
                    };
                    SeedMessage {
                        id: (m + 1) as i64,
                        sender: sender.into(),
                        content: format!("Seed message {} in thread {}", m + 1, id),
                        time: base_time + Duration::minutes(5 * (c * messages_per + m) as i64),
                        status: status.into(),
                    }
                })
                .collect();

            let last = messages.last().cloned();
            SeedConversation {
                id,
                username: format!("contact{}", id),
                name: format!("Contact {}", id),
                platform: PLATFORMS[c % PLATFORMS.len()].into(),
                last_message: last.as_ref().map(|m| m.content.clone()).unwrap_or_default(),
                time: last.map(|m| m.time).unwrap_or(base_time),
                unread: c == 0,
                avatar: None,
                messages,
            }
        })
        .collect();

    SeedData {
        conversations,
        scheduled_messages: Vec::new(),
    }
}
