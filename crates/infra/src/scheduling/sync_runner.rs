//! Timer-driven sync runner.
//!
//! Wraps a [`SyncSession`] and advances it on a fixed-cadence
//! `tokio::time::interval`. One tick loop exists at a time; a second
//! [`SyncRunner::start`] while a run is in flight is rejected.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use slawatch_infra::notifications::TracingNotificationSink;
//! use slawatch_infra::scheduling::{SchedulerResult, SyncRunner, SyncRunnerConfig};
//!
//! # async fn example() -> SchedulerResult<()> {
//! let runner = SyncRunner::new(SyncRunnerConfig::default(), Arc::new(TracingNotificationSink));
//!
//! runner.start(Some("123")).await?;
//! let snapshot = runner.wait().await?;
//! assert_eq!(snapshot.progress, 100);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex as SyncMutex;
use slawatch_core::{NotificationSink, SyncSession, TickOutcome};
use slawatch_domain::constants::{SYNC_PROGRESS_STEP, SYNC_TICK_INTERVAL_MS};
use slawatch_domain::{SyncConfig, SyncSnapshot};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the sync runner
#[derive(Debug, Clone)]
pub struct SyncRunnerConfig {
    /// Delay between progress ticks
    pub tick_interval: Duration,
    /// Percent added per tick
    pub progress_step: u8,
    /// Timeout for awaiting the tick task after cancellation
    pub join_timeout: Duration,
}

impl Default for SyncRunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(SYNC_TICK_INTERVAL_MS),
            progress_step: SYNC_PROGRESS_STEP,
            join_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&SyncConfig> for SyncRunnerConfig {
    fn from(config: &SyncConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            progress_step: config.progress_step,
            ..Self::default()
        }
    }
}

/// Drives a [`SyncSession`] on a repeating timer
pub struct SyncRunner {
    config: SyncRunnerConfig,
    session: Arc<SyncMutex<SyncSession>>,
    notifier: Arc<dyn NotificationSink>,
    cancellation_token: SyncMutex<CancellationToken>,
    task_handle: TaskHandle,
}

impl SyncRunner {
    pub fn new(config: SyncRunnerConfig, notifier: Arc<dyn NotificationSink>) -> Self {
        let session = SyncSession::new(config.progress_step);
        Self {
            config,
            session: Arc::new(SyncMutex::new(session)),
            notifier,
            cancellation_token: SyncMutex::new(CancellationToken::new()),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a run and spawn the tick loop.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AlreadyRunning`] while a run is in flight.
    #[instrument(skip(self))]
    pub async fn start(&self, application_id: Option<&str>) -> SchedulerResult<SyncSnapshot> {
        let mut handle_slot = self.task_handle.lock().await;

        let (notification, snapshot) = {
            let mut session = self.session.lock();
            let notification = session.start(application_id)?;
            (notification, session.snapshot())
        };

        // A finished loop from the previous run may still be parked here.
        if let Some(previous) = handle_slot.take() {
            if !previous.is_finished() {
                warn!("previous sync task still alive; aborting it");
                previous.abort();
            }
        }

        let cancel = CancellationToken::new();
        *self.cancellation_token.lock() = cancel.clone();

        let session = Arc::clone(&self.session);
        let notifier = Arc::clone(&self.notifier);
        let interval = self.config.tick_interval;
        *handle_slot = Some(tokio::spawn(async move {
            Self::tick_loop(session, notifier, interval, cancel).await;
        }));
        drop(handle_slot);

        info!(
            application_id = ?snapshot.application_id,
            tick_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            "sync runner started"
        );
        self.notifier.notify(notification);
        Ok(snapshot)
    }

    /// Stop the tick loop and return the session to `idle`.
    ///
    /// No further progress is applied once this returns.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NotRunning`] when no run is in flight, or a
    /// timeout/join error if the tick task fails to stop.
    #[instrument(skip(self))]
    pub async fn cancel(&self) -> SchedulerResult<SyncSnapshot> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation_token.lock().cancel();
        self.join_task().await?;

        let (notification, snapshot) = {
            let mut session = self.session.lock();
            let notification = session.cancel()?;
            (notification, session.snapshot())
        };

        info!(progress = snapshot.progress, "sync runner cancelled");
        self.notifier.notify(notification);
        Ok(snapshot)
    }

    /// Move the running session to `error` and stop ticking.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NotRunning`] when no run is in flight.
    #[instrument(skip(self))]
    pub async fn fail(&self, reason: &str) -> SchedulerResult<SyncSnapshot> {
        let (notification, snapshot) = {
            let mut session = self.session.lock();
            let notification = session.fail(reason)?;
            (notification, session.snapshot())
        };

        self.cancellation_token.lock().cancel();
        self.join_task().await?;

        self.notifier.notify(notification);
        Ok(snapshot)
    }

    /// Wait for the current tick loop to end on its own.
    ///
    /// Returns immediately with the current snapshot when nothing is running.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::TaskJoinFailed`] if the tick task panicked.
    pub async fn wait(&self) -> SchedulerResult<SyncSnapshot> {
        let handle = self.task_handle.lock().await.take();
        if let Some(handle) = handle {
            handle.await?;
        }
        Ok(self.snapshot())
    }

    /// True while the session is `running`.
    pub fn is_running(&self) -> bool {
        self.session.lock().is_syncing()
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        self.session.lock().snapshot()
    }

    async fn join_task(&self) -> SchedulerResult<()> {
        let handle = self.task_handle.lock().await.take();
        if let Some(handle) = handle {
            let duration = self.config.join_timeout;
            tokio::time::timeout(duration, handle)
                .await
                .map_err(|_| SchedulerError::Timeout { duration })??;
        }
        Ok(())
    }

    /// Background tick loop
    async fn tick_loop(
        session: Arc<SyncMutex<SyncSession>>,
        notifier: Arc<dyn NotificationSink>,
        period: Duration,
        cancel: CancellationToken,
    ) {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    debug!("sync loop cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let outcome = session.lock().tick();
                    match outcome {
                        TickOutcome::Progressed(progress) => {
                            debug!(progress, "sync tick");
                        }
                        TickOutcome::Completed(notification) => {
                            notifier.notify(notification);
                            break;
                        }
                        TickOutcome::Inactive => {
                            debug!("session no longer running; sync loop exiting");
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl Drop for SyncRunner {
    fn drop(&mut self) {
        self.cancellation_token.lock().cancel();
    }
}

#[cfg(test)]
mod tests {
    use slawatch_domain::SyncStatus;

    use super::*;
    use crate::notifications::RecordingNotificationSink;

    fn runner() -> (SyncRunner, Arc<RecordingNotificationSink>) {
        let sink = Arc::new(RecordingNotificationSink::default());
        (SyncRunner::new(SyncRunnerConfig::default(), sink.clone()), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn runs_to_completion_with_two_notifications() {
        let (runner, sink) = runner();
        let started = Instant::now();

        let snapshot = runner.start(Some("123")).await.unwrap();
        assert_eq!(snapshot.status, SyncStatus::Running);
        assert_eq!(snapshot.progress, 0);

        let snapshot = runner.wait().await.unwrap();
        assert_eq!(snapshot.status, SyncStatus::Completed);
        assert_eq!(snapshot.progress, 100);
        assert!(!snapshot.is_syncing);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(800 * 10), "finished early: {elapsed:?}");
        assert!(elapsed < Duration::from_millis(800 * 11), "extra tick: {elapsed:?}");

        let notes = sink.notifications();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Sync started");
        assert_eq!(notes[0].description, "Syncing application ID: 123");
        assert_eq!(notes[1].title, "Sync completed");
    }

    #[tokio::test(start_paused = true)]
    async fn progress_advances_one_step_per_tick() {
        let (runner, _sink) = runner();
        runner.start(None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(800 * 3 + 400)).await;
        assert_eq!(runner.snapshot().progress, 30);
        assert!(runner.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_is_rejected() {
        let (runner, sink) = runner();
        runner.start(None).await.unwrap();

        let err = runner.start(Some("9")).await.unwrap_err();
        assert!(matches!(err, SchedulerError::AlreadyRunning));
        assert_eq!(sink.notifications().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let (runner, sink) = runner();
        runner.start(None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(800 * 2 + 400)).await;

        let snapshot = runner.cancel().await.unwrap();
        assert_eq!(snapshot.status, SyncStatus::Idle);
        assert_eq!(snapshot.progress, 20);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(runner.snapshot().progress, 20);
        assert_eq!(sink.notifications().last().unwrap().title, "Sync cancelled");

        assert!(matches!(runner.cancel().await, Err(SchedulerError::NotRunning)));
    }

    #[tokio::test(start_paused = true)]
    async fn fail_moves_to_error_and_stops() {
        let (runner, sink) = runner();
        runner.start(None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1200)).await;

        let snapshot = runner.fail("upstream unavailable").await.unwrap();
        assert_eq!(snapshot.status, SyncStatus::Error);
        assert_eq!(snapshot.last_error.as_deref(), Some("upstream unavailable"));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(runner.snapshot().progress, 10);
        assert!(sink.notifications().last().unwrap().is_destructive());
    }

    #[tokio::test(start_paused = true)]
    async fn restarts_after_completion() {
        let (runner, sink) = runner();
        runner.start(None).await.unwrap();
        runner.wait().await.unwrap();

        let snapshot = runner.start(None).await.unwrap();
        assert_eq!(snapshot.progress, 0);
        let snapshot = runner.wait().await.unwrap();
        assert_eq!(snapshot.status, SyncStatus::Completed);
        assert_eq!(sink.notifications().len(), 4);
    }

    #[test]
    fn config_follows_sync_settings() {
        let config = SyncRunnerConfig::from(&SyncConfig { tick_interval_ms: 50, progress_step: 25 });
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.progress_step, 25);
    }
}
