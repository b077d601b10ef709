// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::event::TimerEvent;
use crate::options::TimerOptions;
use crate::wait::{WaitStop, WaitTriggered};
use core::fmt;
use core::time::Duration;
use parking_lot::Mutex;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};
use tickr_core::{EventPublisher, Result, TimerError, Waiters};
use tickr_runtime::{CallHandle, DefaultScheduler, Scheduler};

type Callback<T> = Box<dyn FnMut() -> Result<T> + Send + 'static>;

/// A stateful, cancelable scheduler for one deferred or periodic callback.
///
/// A timer is idle until [`start`](Self::start) arms its first tick. Each tick
/// runs the callback, settles the pending [`wait_triggered`](Self::wait_triggered)
/// futures, publishes a [`TimerEvent::Triggered`] event, and re-arms when the
/// repeat policy allows another tick. A run ends with [`stop`](Self::stop) or
/// when the last allowed tick has fired.
///
/// Clones share the same state machine. The callback may call `stop`, `reset`
/// or `restart` on a clone of its own timer. Dropping the last clone cancels
/// the outstanding tick; a callback holding a clone keeps the timer alive.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tickr_timer::{Timer, TimerOptions};
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> tickr_core::Result<()> {
/// let options = TimerOptions::DEFAULT.with_repeat(true).with_max_times(2);
/// let timer = Timer::new(Duration::from_millis(100), || 42, options)?;
///
/// timer.start();
/// assert_eq!(timer.wait_triggered().await?, 42);
/// assert_eq!(timer.remain_times(), Some(1));
///
/// timer.wait_stop().await;
/// assert_eq!(timer.call_times(), 2);
/// assert!(!timer.running());
/// # Ok(())
/// # }
/// ```
pub struct Timer<T, S = DefaultScheduler>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    inner: Arc<Inner<T, S>>,
}

struct Armed {
    generation: u64,
    handle: CallHandle,
}

struct State<T> {
    armed: Option<Armed>,
    generation: u64,
    call_times: u32,
    triggered: Waiters<Result<T>>,
    stopped: Waiters<()>,
}

impl<T> State<T> {
    fn owns(&self, generation: u64) -> bool {
        self.armed
            .as_ref()
            .is_some_and(|armed| armed.generation == generation)
    }
}

// Waiters taken out of the state lock, settled once it is released.
struct Drained<T> {
    triggered: Waiters<Result<T>>,
    stopped: Waiters<()>,
}

impl<T: Clone> Drained<T> {
    fn settle(self) {
        self.triggered.settle(Err(TimerError::Stopped));
        self.stopped.settle(());
    }
}

struct Inner<T, S>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    delay: Duration,
    options: TimerOptions,
    scheduler: S,
    state: Mutex<State<T>>,
    // Held from invocation until the tick has published.
    callback: Mutex<Callback<T>>,
    events: EventPublisher<TimerEvent<T>>,
}

impl<T, S> Inner<T, S>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    fn has_more_trigger(&self, state: &State<T>) -> bool {
        self.options.repeat
            && self
                .options
                .max_times
                .is_none_or(|max| state.call_times.saturating_add(1) < max)
    }

    fn arm(self: &Arc<Self>, state: &mut State<T>, delay: Duration) {
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;
        let timer = Arc::downgrade(self);

        let handle = self.scheduler.schedule_once(delay, move || {
            if let Some(inner) = Weak::upgrade(&timer) {
                inner.tick(generation);
            }
        });

        trace!(generation, ?delay, "armed timer tick");
        state.armed = Some(Armed { generation, handle });
    }

    fn arm_first(self: &Arc<Self>, state: &mut State<T>) {
        let delay = if self.options.call_when_start {
            Duration::ZERO
        } else {
            self.delay
        };
        self.arm(state, delay);
    }

    fn go_idle(&self, state: &mut State<T>) -> Drained<T> {
        state.armed = None;
        self.events.publish(TimerEvent::RunningChanged(false));
        debug!(call_times = state.call_times, "timer stopped");
        Drained {
            triggered: state.triggered.take(),
            stopped: state.stopped.take(),
        }
    }

    fn tick(self: &Arc<Self>, generation: u64) {
        let rearmed = {
            let mut state = self.state.lock();
            if !state.owns(generation) {
                trace!(generation, "ignoring stale timer tick");
                return;
            }

            let more = self.has_more_trigger(&state);
            if more {
                self.arm(&mut state, self.delay);
            }
            state.call_times = state.call_times.saturating_add(1);
            trace!(generation, call_times = state.call_times, "timer tick");
            more
        };

        // Held until published: overlapping ticks publish in invocation order.
        let mut callback = self.callback.lock();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (*callback)()))
            .unwrap_or_else(|payload| Err(TimerError::from_panic(payload.as_ref())));

        let (triggered, drained) = {
            let mut state = self.state.lock();
            let triggered = state.triggered.take();

            match &outcome {
                Ok(value) => self.events.publish(TimerEvent::Triggered(value.clone())),
                #[cfg(feature = "tracing")]
                Err(error) => tracing::warn!(%error, "timer callback failed"),
                #[cfg(not(feature = "tracing"))]
                Err(_) => {}
            }

            // A re-entrant stop, reset or restart already replaced the consumed handle.
            let drained = (!rearmed && state.owns(generation)).then(|| self.go_idle(&mut state));
            (triggered, drained)
        };
        drop(callback);

        triggered.settle(outcome);
        if let Some(drained) = drained {
            drained.settle();
        }
    }
}

impl<T, S> Drop for Inner<T, S>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    fn drop(&mut self) {
        // Pending waiters observe their senders being dropped.
        if let Some(armed) = self.state.get_mut().armed.take() {
            armed.handle.cancel();
        }
    }
}

impl<T> Timer<T, DefaultScheduler>
where
    T: Clone + Send + 'static,
{
    /// Create an idle timer on the default scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidOptions`] if `options.max_times` is `Some(0)`.
    pub fn new<F>(delay: Duration, callback: F, options: TimerOptions) -> Result<Self>
    where
        F: FnMut() -> T + Send + 'static,
    {
        Self::with_scheduler(DefaultScheduler::default(), delay, callback, options)
    }

    /// Create an idle timer whose callback may fail.
    ///
    /// A failing tick rejects that tick's `wait_triggered` futures with
    /// [`TimerError::Callback`] and publishes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidOptions`] if `options.max_times` is `Some(0)`.
    pub fn try_new<F, E>(delay: Duration, callback: F, options: TimerOptions) -> Result<Self>
    where
        F: FnMut() -> std::result::Result<T, E> + Send + 'static,
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self::try_with_scheduler(DefaultScheduler::default(), delay, callback, options)
    }
}

impl<T> Timer<T, DefaultScheduler>
where
    T: Clone + Default + Send + 'static,
{
    /// Create an idle timer with a no-op tick producing `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidOptions`] if `options.max_times` is `Some(0)`.
    pub fn without_callback(delay: Duration, options: TimerOptions) -> Result<Self> {
        Self::with_scheduler(DefaultScheduler::default(), delay, T::default, options)
    }
}

impl<T, S> Timer<T, S>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    /// Create an idle timer that arms its ticks on `scheduler`.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidOptions`] if `options.max_times` is `Some(0)`.
    pub fn with_scheduler<F>(
        scheduler: S,
        delay: Duration,
        mut callback: F,
        options: TimerOptions,
    ) -> Result<Self>
    where
        F: FnMut() -> T + Send + 'static,
    {
        Self::from_parts(scheduler, delay, Box::new(move || Ok(callback())), options)
    }

    /// Fallible-callback counterpart of [`with_scheduler`](Self::with_scheduler).
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidOptions`] if `options.max_times` is `Some(0)`.
    pub fn try_with_scheduler<F, E>(
        scheduler: S,
        delay: Duration,
        mut callback: F,
        options: TimerOptions,
    ) -> Result<Self>
    where
        F: FnMut() -> std::result::Result<T, E> + Send + 'static,
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self::from_parts(
            scheduler,
            delay,
            Box::new(move || callback().map_err(TimerError::callback_error)),
            options,
        )
    }

    fn from_parts(
        scheduler: S,
        delay: Duration,
        callback: Callback<T>,
        options: TimerOptions,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                delay,
                options,
                scheduler,
                state: Mutex::new(State {
                    armed: None,
                    generation: 0,
                    call_times: 0,
                    triggered: Waiters::new(),
                    stopped: Waiters::new(),
                }),
                callback: Mutex::new(callback),
                events: EventPublisher::new(),
            }),
        })
    }

    /// Arm the first tick.
    ///
    /// Does nothing if the timer is already running. Otherwise resets
    /// `call_times`, publishes `RunningChanged(true)` and arms a single
    /// handle: delay zero with `call_when_start`, the configured delay
    /// otherwise.
    pub fn start(&self) -> &Self {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        if state.armed.is_some() {
            return self;
        }

        state.call_times = 0;
        inner.events.publish(TimerEvent::RunningChanged(true));
        debug!(delay = ?inner.delay, options = ?inner.options, "timer started");
        inner.arm_first(&mut state);
        self
    }

    /// Cancel the outstanding tick and go idle.
    ///
    /// Does nothing if the timer is idle. Otherwise publishes
    /// `RunningChanged(false)`, rejects every pending `wait_triggered` future
    /// with [`TimerError::Stopped`] and resolves every pending `wait_stop` future.
    pub fn stop(&self) {
        let drained = {
            let mut state = self.inner.state.lock();
            let Some(armed) = state.armed.as_ref() else {
                return;
            };
            armed.handle.cancel();
            self.inner.go_idle(&mut state)
        };
        drained.settle();
    }

    /// Reset `call_times` and, when running, re-arm from scratch.
    ///
    /// Returns `true` if the timer was running and has been re-armed. No
    /// `RunningChanged` event is published either way.
    pub fn reset(&self) -> bool {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        state.call_times = 0;

        let Some(armed) = state.armed.take() else {
            return false;
        };
        armed.handle.cancel();
        debug!("timer reset");
        inner.arm_first(&mut state);
        true
    }

    /// [`stop`](Self::stop) followed by [`start`](Self::start).
    pub fn restart(&self) -> &Self {
        self.stop();
        self.start()
    }

    /// `start()` when `running` is true, `stop()` otherwise.
    pub fn set_running(&self, running: bool) {
        if running {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Wait for the value of the next tick.
    ///
    /// The future is registered immediately, also when the timer is idle, in
    /// which case it waits for a tick of the next run. It fails with
    /// [`TimerError::Stopped`] if the timer stops before that tick, or with the
    /// callback's error if the tick fails.
    pub fn wait_triggered(&self) -> WaitTriggered<T> {
        WaitTriggered::new(self.inner.state.lock().triggered.register())
    }

    /// Wait for the next transition to idle, manual or by exhaustion.
    pub fn wait_stop(&self) -> WaitStop {
        WaitStop::new(self.inner.state.lock().stopped.register())
    }

    /// Publisher of this timer's [`TimerEvent`]s.
    pub fn events(&self) -> &EventPublisher<TimerEvent<T>> {
        &self.inner.events
    }

    /// `true` iff a tick is armed.
    pub fn running(&self) -> bool {
        self.inner.state.lock().armed.is_some()
    }

    /// Ticks completed since the last `start` or `reset`.
    pub fn call_times(&self) -> u32 {
        self.inner.state.lock().call_times
    }

    /// Ticks left in the current run, `None` when unbounded.
    pub fn remain_times(&self) -> Option<u32> {
        let call_times = self.call_times();
        self.inner
            .options
            .max_times
            .map(|max| max.saturating_sub(call_times))
    }

    /// Whether another tick would be armed after the current one.
    pub fn has_more_trigger(&self) -> bool {
        let state = self.inner.state.lock();
        self.inner.has_more_trigger(&state)
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    pub fn options(&self) -> TimerOptions {
        self.inner.options
    }

    pub fn scheduler(&self) -> &S {
        &self.inner.scheduler
    }
}

impl<T, S> Clone for Timer<T, S>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, S> fmt::Debug for Timer<T, S>
where
    T: Clone + Send + 'static,
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Timer")
            .field("delay", &self.inner.delay)
            .field("options", &self.inner.options)
            .field("running", &state.armed.is_some())
            .field("call_times", &state.call_times)
            .finish_non_exhaustive()
    }
}
