//! Sync runner driven by tokio's paused clock, observed through a broadcast
//! subscriber.

use std::sync::Arc;
use std::time::Duration;

use slawatch_domain::SyncStatus;
use slawatch_infra::notifications::BroadcastNotificationSink;
use slawatch_infra::scheduling::{SyncRunner, SyncRunnerConfig};

#[tokio::test(start_paused = true)]
async fn subscriber_sees_start_then_completion() {
    let sink = Arc::new(BroadcastNotificationSink::default());
    let mut rx = sink.subscribe();
    let runner = SyncRunner::new(SyncRunnerConfig::default(), sink);

    runner.start(Some("abc123")).await.unwrap();
    let snapshot = runner.wait().await.unwrap();

    assert_eq!(snapshot.status, SyncStatus::Completed);
    assert_eq!(snapshot.application_id.as_deref(), Some("123"));

    let started = rx.recv().await.unwrap();
    assert_eq!(started.description, "Syncing application ID: 123");
    let completed = rx.recv().await.unwrap();
    assert_eq!(completed.title, "Sync completed");
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn progress_is_monotonic_in_fixed_steps() {
    let sink = Arc::new(BroadcastNotificationSink::default());
    let config = SyncRunnerConfig {
        tick_interval: Duration::from_millis(100),
        progress_step: 25,
        ..SyncRunnerConfig::default()
    };
    let runner = SyncRunner::new(config, sink);
    runner.start(None).await.unwrap();

    let mut seen = Vec::new();
    for _ in 0..4 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        seen.push(runner.snapshot().progress);
    }

    assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]), "progress went backwards: {seen:?}");
    assert!(seen.iter().all(|progress| progress % 25 == 0));
    assert_eq!(runner.wait().await.unwrap().progress, 100);
}
