//! Native Dashboard Runtime
//!
//! Hosts a [`DashboardController`] on a single tokio task. The task owns the
//! controller outright and multiplexes:
//!
//! - commands from [`DashboardHandle`]s (user actions, snapshots, shutdown)
//! - the clock interval
//! - the progress simulation interval
//! - the frame interval driving tweens and notification lifecycles
//!
//! No state is shared between tasks, so nothing needs a lock. Late ticks are
//! delayed rather than bunched up.

mod terminal;

pub use terminal::{write_board, TerminalRenderer};

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::config::Config;
use crate::dashboard::{DashboardController, DashboardSnapshot, Renderer, UiEvent};
use crate::tasks::TaskId;

/// Capacity of the command channel
const COMMAND_BUFFER: usize = 64;

/// Messages accepted by the runtime task
#[derive(Debug)]
pub enum Command {
    Ui(UiEvent),
    Snapshot(oneshot::Sender<DashboardSnapshot>),
    Shutdown,
}

/// Errors returned by [`DashboardHandle`]
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Dashboard runtime has stopped")]
    Stopped,
}

/// Cheap, cloneable sender for dashboard commands
#[derive(Debug, Clone)]
pub struct DashboardHandle {
    tx: mpsc::Sender<Command>,
}

impl DashboardHandle {
    /// Forward a user action
    pub async fn send(&self, event: UiEvent) -> Result<(), RuntimeError> {
        self.tx
            .send(Command::Ui(event))
            .await
            .map_err(|_| RuntimeError::Stopped)
    }

    pub async fn add_task(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        self.send(UiEvent::AddTask(text.into())).await
    }

    pub async fn toggle_task(&self, id: TaskId) -> Result<(), RuntimeError> {
        self.send(UiEvent::Toggle(id)).await
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<(), RuntimeError> {
        self.send(UiEvent::Delete(id)).await
    }

    /// Fetch the current dashboard state
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot(reply))
            .await
            .map_err(|_| RuntimeError::Stopped)?;
        rx.await.map_err(|_| RuntimeError::Stopped)
    }

    /// Ask the runtime to stop; pending commands sent earlier are handled first
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::Stopped)
    }
}

/// Timer-driven host for a dashboard controller
pub struct DashboardRuntime<R> {
    controller: DashboardController<R>,
    commands: mpsc::Receiver<Command>,
    rng: StdRng,
    clock_period: Duration,
    progress_period: Duration,
    frame_period: Duration,
    /// Wall time at startup; later times are derived from the tokio clock
    started_wall: DateTime<Local>,
    started: Instant,
}

impl<R: Renderer + Send + 'static> DashboardRuntime<R> {
    /// Spawn the runtime on the current tokio runtime
    ///
    /// The join handle yields the renderer back once the runtime stops.
    pub fn spawn(renderer: R, config: &Config) -> (DashboardHandle, JoinHandle<R>) {
        Self::spawn_with_rng(renderer, config, StdRng::from_entropy())
    }

    /// Like [`spawn`](Self::spawn) with an explicit progress RNG
    pub fn spawn_with_rng(
        renderer: R,
        config: &Config,
        rng: StdRng,
    ) -> (DashboardHandle, JoinHandle<R>) {
        let (tx, commands) = mpsc::channel(COMMAND_BUFFER);

        let runtime = DashboardRuntime {
            controller: DashboardController::new(renderer, config),
            commands,
            rng,
            clock_period: Duration::from_millis(config.dashboard.clock_interval_ms.max(1)),
            progress_period: Duration::from_millis(config.progress.interval_ms.max(1)),
            frame_period: Duration::from_millis(config.animation.frame_interval_ms.max(1)),
            started_wall: Local::now(),
            started: Instant::now(),
        };

        let handle = tokio::spawn(runtime.run());
        (DashboardHandle { tx }, handle)
    }

    async fn run(self) -> R {
        let DashboardRuntime {
            mut controller,
            mut commands,
            mut rng,
            clock_period,
            progress_period,
            frame_period,
            started_wall,
            started,
        } = self;
        let now = move || wall_clock(started_wall, started);

        controller.start(&now());

        let start = Instant::now();
        let mut clock = interval_at(start + clock_period, clock_period);
        let mut progress = interval_at(start + progress_period, progress_period);
        let mut frame = interval_at(start + frame_period, frame_period);
        for timer in [&mut clock, &mut progress, &mut frame] {
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        tracing::info!("Dashboard runtime started");

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Ui(event)) => {
                        tracing::trace!(?event, "UI event");
                        controller.dispatch(event);
                    }
                    Some(Command::Snapshot(reply)) => {
                        let _ = reply.send(controller.snapshot());
                    }
                    Some(Command::Shutdown) | None => break,
                },
                _ = clock.tick() => {
                    controller.tick_clock(&now());
                }
                _ = progress.tick() => {
                    let roll: f64 = rng.gen();
                    controller.tick_progress(roll);
                }
                _ = frame.tick() => {
                    controller.on_frame(now().timestamp_millis());
                }
            }
        }

        tracing::info!("Dashboard runtime stopped");
        controller.into_renderer()
    }
}

/// Wall time advanced by the tokio clock, so paused test time stays consistent
fn wall_clock(started_wall: DateTime<Local>, started: Instant) -> DateTime<Local> {
    let elapsed =
        chrono::Duration::from_std(started.elapsed()).unwrap_or_else(|_| chrono::Duration::zero());
    started_wall + elapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::testing::RecordingRenderer;
    use crate::dashboard::{CounterSlot, MSG_TASK_ADDED, MSG_TASK_COMPLETED, MSG_TASK_DELETED};

    fn config() -> Config {
        let mut config = Config::default();
        config.dashboard.sample_tasks.clear();
        config
    }

    #[tokio::test(start_paused = true)]
    async fn test_actions_flow_through_runtime() {
        let renderer = RecordingRenderer::new();
        let (handle, join) = DashboardRuntime::spawn(renderer.clone(), &config());

        handle.add_task("Buy milk").await.unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.tasks.len(), 1);
        let id = snapshot.tasks[0].id;

        handle.toggle_task(id).await.unwrap();
        handle.delete_task(id).await.unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.completed_count, 0);

        handle.shutdown().await.unwrap();
        join.await.unwrap();

        assert_eq!(
            renderer.state().messages(),
            vec![MSG_TASK_ADDED, MSG_TASK_COMPLETED, MSG_TASK_DELETED]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_drive_clock_counters_and_toasts() {
        let renderer = RecordingRenderer::new();
        let (handle, join) = DashboardRuntime::spawn(renderer.clone(), &config());

        handle.add_task("Buy milk").await.unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        {
            let state = renderer.state();
            assert!(state.time.is_some());
            assert_eq!(state.counter(CounterSlot::ActiveProjects), 3);
            assert_eq!(state.toasts.len(), 1);
        }

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(renderer.state().toasts.is_empty());

        handle.shutdown().await.unwrap();
        join.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_simulation() {
        let mut config = config();
        config.progress.probability = 1.0;
        config.progress.increment_tenths = 10;
        config.progress.interval_ms = 1_000;

        let renderer = RecordingRenderer::new();
        let (handle, join) =
            DashboardRuntime::spawn_with_rng(renderer.clone(), &config, StdRng::seed_from_u64(7));

        tokio::time::sleep(Duration::from_millis(3_500)).await;

        let snapshot = handle.snapshot().await.unwrap();
        assert!((snapshot.hours_worked - 3.0).abs() < 1e-9);

        tokio::time::sleep(Duration::from_millis(1_200)).await;
        assert!(renderer.state().counter(CounterSlot::HoursWorked) >= 3);

        handle.shutdown().await.unwrap();
        join.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_reports_stopped_runtime() {
        let (handle, join) = DashboardRuntime::spawn(RecordingRenderer::new(), &config());
        handle.shutdown().await.unwrap();
        join.await.unwrap();

        assert!(matches!(
            handle.add_task("too late").await,
            Err(RuntimeError::Stopped)
        ));
        assert!(handle.snapshot().await.is_err());
    }
}
