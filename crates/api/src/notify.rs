//! Notification sink boundary.
//!
//! The reminder scheduler dispatches through this trait so the OS
//! notification mechanism stays out of the scheduling logic. Failures
//! are returned to the caller, which logs them and moves on; nothing
//! downstream ever sees a dispatch error.

use std::sync::Mutex;

use async_trait::async_trait;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Fire one notification with a headline and a body.
    async fn notify(&self, title: &str, body: &str) -> anyhow::Result<()>;
}

/// Sink backed by the desktop notification service.
pub struct DesktopSink;

#[async_trait]
impl NotificationSink for DesktopSink {
    async fn notify(&self, title: &str, body: &str) -> anyhow::Result<()> {
        let title = title.to_owned();
        let body = body.to_owned();
        // notify-rust's show() is synchronous; keep it off the runtime.
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .summary(&title)
                .body(&body)
                .show()
                .map(|_| ())
        })
        .await??;
        Ok(())
    }
}

/// Test sink that records every dispatch.
#[derive(Default)]
pub struct RecordingSink {
    dispatched: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn dispatched(&self) -> Vec<(String, String)> {
        self.dispatched.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, title: &str, body: &str) -> anyhow::Result<()> {
        self.dispatched
            .lock()
            .expect("sink lock")
            .push((title.to_owned(), body.to_owned()));
        Ok(())
    }
}
