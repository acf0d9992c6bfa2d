//! Event/action/effect loop for the palette.
//!
//! Wiring: a background task polls crossterm and forwards terminal events;
//! the main `tokio::select!` loop maps events to actions, dispatches them
//! through the reducer, hands emitted effects to the effect handler, and
//! re-renders when the reducer reports a change. Effect handlers spawn
//! their work on the [`TaskManager`]; completions come back as actions.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::action::Action;
use crate::effect::Effect;
use crate::event::EventKind;
use crate::reducer::reduce;
use crate::state::AppState;

/// Configuration for the event poller.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Spawn the terminal event polling task.
///
/// Polls crossterm on a blocking-free cadence and forwards key/resize events
/// until cancelled or the channel closes.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    config: PollerConfig,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(config.loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(config.poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        if let Ok(evt) = event::read() {
                            let kind = match evt {
                                event::Event::Key(key) => Some(EventKind::Key(key)),
                                event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(kind) = kind {
                                if tx.send(kind).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Manages async effect tasks with keyed cancellation.
///
/// Spawning under a key that is already running aborts the previous task
/// first, so e.g. at most one clipboard write is ever in flight.
pub struct TaskManager {
    tasks: HashMap<&'static str, AbortHandle>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, cancelling any existing task with the same key. The
    /// future's action is sent back into the loop on completion; a
    /// cancelled task sends nothing.
    pub fn spawn<F>(&mut self, key: &'static str, future: F) -> &mut Self
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.cancel(key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key. No-op if nothing runs under the key.
    pub fn cancel(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks (shutdown).
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

/// Context passed to the effect handler.
pub struct EffectContext<'a> {
    tasks: &'a mut TaskManager,
}

impl<'a> EffectContext<'a> {
    pub fn tasks(&mut self) -> &mut TaskManager {
        self.tasks
    }
}

/// The palette runtime: owns the state, the action queue, and the tasks.
pub struct Runtime {
    state: AppState,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    poller_config: PollerConfig,
    should_render: bool,
    tasks: TaskManager,
    subscriptions: Vec<AbortHandle>,
}

impl Runtime {
    pub fn new(state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        Self {
            state,
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
            tasks,
            subscriptions: Vec::new(),
        }
    }

    /// Configure event polling behavior.
    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Clone the action sender.
    pub fn action_tx(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Access the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Subscribe a repeating action (tick timers and the like). Runs until
    /// the runtime shuts down.
    pub fn subscribe_interval(&mut self, period: Duration, make_action: fn() -> Action) {
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of tokio's interval fires immediately; skip it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(make_action()).is_err() {
                    break;
                }
            }
        });
        self.subscriptions.push(handle.abort_handle());
    }

    /// Run the event/action loop until a quit action is dispatched.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &AppState),
        FEvent: FnMut(&EventKind, &AppState) -> Vec<Action>,
        FQuit: FnMut(&Action) -> bool,
        FEffect: FnMut(Effect, &mut EffectContext),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, self.poller_config, cancel_token.clone());

        loop {
            if self.should_render {
                let state = &self.state;
                terminal.draw(|frame| {
                    render(frame, frame.area(), state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    for action in map_event(&event, &self.state) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    debug!(action = action.name(), "dispatch");
                    let result = reduce(&mut self.state, action);
                    if result.has_effects() {
                        let mut ctx = EffectContext {
                            tasks: &mut self.tasks,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    self.should_render = result.changed;
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        for handle in self.subscriptions.drain(..) {
            handle.abort();
        }
        self.tasks.cancel_all();
        Ok(())
    }
}
