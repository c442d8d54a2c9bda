//! Integration tests for the reminder scheduler: one polling pass
//! matches only reminders due in its window, and a failing sink never
//! takes the pass down.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use taskdeck_api::background::reminders;
use taskdeck_api::notify::{NotificationSink, RecordingSink};
use taskdeck_core::recurrence::RepeatRule;
use taskdeck_core::types::Timestamp;
use taskdeck_db::models::todo::{CreateTodo, Priority};
use taskdeck_db::repositories::TodoRepo;

fn reminder_todo(title: &str, remind_at: Timestamp) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: format!("{title} details"),
        priority: Priority::Medium,
        due_date: None,
        remind_at: Some(remind_at),
        repeat: RepeatRule::None,
        tags: Vec::new(),
        project_id: None,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_check_dispatches_only_due_reminders(pool: SqlitePool) {
    let now = Utc::now();
    TodoRepo::create(&pool, &reminder_todo("soon", now + Duration::seconds(30)))
        .await
        .unwrap();
    TodoRepo::create(&pool, &reminder_todo("later", now + Duration::seconds(90)))
        .await
        .unwrap();

    let sink = RecordingSink::default();
    reminders::check_reminders(&pool, &sink, 60).await;

    let dispatched = sink.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].0, "soon");
    assert_eq!(dispatched[0].1, "soon details");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_completed_todo_is_not_dispatched(pool: SqlitePool) {
    let now = Utc::now();
    let todo = TodoRepo::create(&pool, &reminder_todo("done", now + Duration::seconds(10)))
        .await
        .unwrap();
    TodoRepo::set_completed(&pool, todo.id, true).await.unwrap();

    let sink = RecordingSink::default();
    reminders::check_reminders(&pool, &sink, 60).await;

    assert!(sink.dispatched().is_empty());
}

/// Sink that fails every dispatch but counts the attempts.
#[derive(Default)]
struct FailingSink {
    attempts: Mutex<u32>,
}

#[async_trait]
impl NotificationSink for FailingSink {
    async fn notify(&self, _title: &str, _body: &str) -> anyhow::Result<()> {
        *self.attempts.lock().unwrap() += 1;
        anyhow::bail!("notification service unavailable")
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_dispatch_failure_does_not_stop_the_pass(pool: SqlitePool) {
    let now = Utc::now();
    TodoRepo::create(&pool, &reminder_todo("first", now + Duration::seconds(5)))
        .await
        .unwrap();
    TodoRepo::create(&pool, &reminder_todo("second", now + Duration::seconds(10)))
        .await
        .unwrap();

    let sink = FailingSink::default();
    reminders::check_reminders(&pool, &sink, 60).await;

    // Both dispatches were attempted despite each failing.
    assert_eq!(*sink.attempts.lock().unwrap(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_run_performs_immediate_check_and_cancels(pool: SqlitePool) {
    let now = Utc::now();
    TodoRepo::create(&pool, &reminder_todo("startup", now + Duration::seconds(5)))
        .await
        .unwrap();

    let sink = Arc::new(RecordingSink::default());
    let cancel = tokio_util::sync::CancellationToken::new();
    let handle = tokio::spawn(reminders::run(
        pool.clone(),
        Arc::clone(&sink) as Arc<dyn NotificationSink>,
        cancel.clone(),
    ));

    // The first interval tick fires immediately; give it a moment.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    cancel.cancel();
    handle.await.unwrap();

    assert_eq!(sink.dispatched().len(), 1);
    assert_eq!(sink.dispatched()[0].0, "startup");
}
