//! Periodic reminder dispatch.
//!
//! Polls the `todos` table for pending reminders falling in the current
//! interval window and pushes one notification per match. Runs on a
//! fixed interval via `tokio::time::interval`; the first tick fires
//! immediately, so reminders due right after startup are not lost.
//!
//! Windows are non-overlapping back-to-back intervals, so no dispatch
//! bookkeeping is needed: a reminder matches in exactly one tick. There
//! is no catch-up either; a window the process slept through is gone.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use taskdeck_db::repositories::TodoRepo;
use taskdeck_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::notify::NotificationSink;

/// Default polling interval: one minute.
const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Run the reminder dispatch loop until `cancel` is triggered.
pub async fn run(pool: DbPool, sink: Arc<dyn NotificationSink>, cancel: CancellationToken) {
    let interval_secs: u64 = std::env::var("REMINDER_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    tracing::info!(interval_secs, "Reminder scheduler started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reminder scheduler stopping");
                break;
            }
            _ = interval.tick() => {
                check_reminders(&pool, sink.as_ref(), interval_secs).await;
            }
        }
    }
}

/// One polling pass: match pending reminders in `[now, now + window_secs)`
/// and dispatch a notification per hit.
///
/// Query and dispatch failures are logged and never abort the pass or
/// the loop; a failed dispatch does not block the remaining matches.
pub async fn check_reminders(pool: &DbPool, sink: &dyn NotificationSink, window_secs: u64) {
    let start = Utc::now();
    let end = start + chrono::Duration::seconds(window_secs as i64);

    let due = match TodoRepo::due_reminders(pool, start, end).await {
        Ok(due) => due,
        Err(e) => {
            tracing::error!(error = %e, "Reminder check failed");
            return;
        }
    };

    for reminder in due {
        tracing::debug!(title = %reminder.title, "Dispatching reminder");
        if let Err(e) = sink.notify(&reminder.title, &reminder.description).await {
            tracing::error!(error = %e, title = %reminder.title, "Reminder dispatch failed");
        }
    }
}
