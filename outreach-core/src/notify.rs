//! Notification seam between the core and whatever surfaces toasts.
//!
//! [`Notifier`] is the boundary; [`TracingNotifier`] is the default sink.

use async_trait::async_trait;
use tracing::info;

/// A user-facing notification event: title plus one-line description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for notification events. Implementations map to a presentation
/// surface; emitting is fire-and-forget from the core's point of view.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), anyhow::Error>;
}

/// Default sink: logs each notification as a structured tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), anyhow::Error> {
        info!(
            title = %notification.title,
            description = %notification.description,
            "UI notification"
        );
        Ok(())
    }
}
