//! Store config: simulated-reply delay and content. Loaded from env:
//! AUTO_REPLY_DELAY_MS, AUTO_REPLY_CONTENT.

use std::env;
use std::time::Duration;

/// Delay before the simulated reply lands.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 3000;

/// Canned contact reply appended after each send.
pub const DEFAULT_REPLY_CONTENT: &str = "Thanks for your message! I'll get back to you soon.";

/// Conversation-store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub reply_delay: Duration,
    pub reply_content: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            reply_content: DEFAULT_REPLY_CONTENT.to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads from env; both variables are optional and fall back to defaults.
    pub fn from_env() -> Self {
        let reply_delay = env::var("AUTO_REPLY_DELAY_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_REPLY_DELAY_MS));
        let reply_content =
            env::var("AUTO_REPLY_CONTENT").unwrap_or_else(|_| DEFAULT_REPLY_CONTENT.to_string());
        Self {
            reply_delay,
            reply_content,
        }
    }

    /// Config with the given delay; reply content stays the default. Handy
    /// for tests that want a short delay.
    pub fn with_reply_delay(reply_delay: Duration) -> Self {
        Self {
            reply_delay,
            ..Self::default()
        }
    }
}
