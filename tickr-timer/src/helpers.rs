// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Free-standing helpers built on the same primitives as [`Timer`].
//!
//! Each helper has a `*_with` variant taking an explicit [`Scheduler`]; the
//! plain form uses [`DefaultScheduler`].

use crate::options::RepeatOptions;
use crate::timer::Timer;
use crate::wait::WaitStop;
use core::future::Future;
use core::time::Duration;
use tickr_core::Result;
use tickr_runtime::{CallHandle, DefaultScheduler, Scheduler};

/// Future resolving after `duration`.
pub fn sleep(duration: Duration) -> <DefaultScheduler as Scheduler>::Sleep {
    sleep_with(&DefaultScheduler::default(), duration)
}

pub fn sleep_with<S: Scheduler>(scheduler: &S, duration: Duration) -> S::Sleep {
    scheduler.sleep_future(duration)
}

/// Future resolving to `f()` once `delay` has elapsed.
///
/// The delay is measured from this call, not from the first poll.
pub fn call_after<T, F>(delay: Duration, f: F) -> impl Future<Output = T>
where
    F: FnOnce() -> T,
{
    call_after_with(&DefaultScheduler::default(), delay, f)
}

pub fn call_after_with<S, T, F>(scheduler: &S, delay: Duration, f: F) -> impl Future<Output = T>
where
    S: Scheduler,
    F: FnOnce() -> T,
{
    let sleep = scheduler.sleep_future(delay);
    async move {
        sleep.await;
        f()
    }
}

/// Handle to a call scheduled with [`call_sync_after`].
///
/// Dropping the handle does not cancel the call.
#[derive(Clone, Debug)]
pub struct CancelableCall {
    handle: CallHandle,
}

impl CancelableCall {
    /// Prevent the call from running. No-op once it ran.
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_pending()
    }

    pub fn is_fired(&self) -> bool {
        self.handle.is_fired()
    }
}

/// Run `f` on the scheduler once `delay` has elapsed, unless cancelled first.
pub fn call_sync_after<F>(delay: Duration, f: F) -> CancelableCall
where
    F: FnOnce() + Send + 'static,
{
    call_sync_after_with(&DefaultScheduler::default(), delay, f)
}

pub fn call_sync_after_with<S, F>(scheduler: &S, delay: Duration, f: F) -> CancelableCall
where
    S: Scheduler,
    F: FnOnce() + Send + 'static,
{
    CancelableCall {
        handle: scheduler.schedule_once(delay, f),
    }
}

pub fn cancel_call_sync(call: &CancelableCall) {
    call.cancel();
}

/// Handle to a repetition started with [`repeat_every`].
///
/// Dropping the handle cancels the repetition.
#[must_use = "dropping the handle cancels the repetition"]
#[derive(Debug)]
pub struct CancelableRepeat<S: Scheduler = DefaultScheduler> {
    timer: Option<Timer<(), S>>,
}

impl<S: Scheduler> CancelableRepeat<S> {
    /// Stop repeating. No further call starts after this returns.
    pub fn cancel(&self) {
        if let Some(timer) = &self.timer {
            timer.stop();
        }
    }

    /// `true` while more calls are scheduled.
    pub fn is_active(&self) -> bool {
        self.timer.as_ref().is_some_and(Timer::running)
    }

    /// Calls made so far.
    pub fn call_times(&self) -> u32 {
        self.timer.as_ref().map_or(0, Timer::call_times)
    }

    /// Future resolving once the repetition is cancelled or exhausted.
    ///
    /// `None` if the repetition is no longer active.
    pub fn finished(&self) -> Option<WaitStop> {
        self.timer
            .as_ref()
            .filter(|timer| timer.running())
            .map(Timer::wait_stop)
    }
}

/// Call `f` every `delay`.
///
/// With `call_when_start` the first call happens immediately. `max_times`
/// bounds the total number of calls, the immediate one included;
/// `Some(0)` makes no call at all.
///
/// # Errors
///
/// Returns an error if the underlying [`Timer`] cannot be built.
#[must_use = "dropping the handle cancels the repetition"]
pub fn repeat_every<F>(delay: Duration, f: F, options: RepeatOptions) -> Result<CancelableRepeat>
where
    F: FnMut() + Send + 'static,
{
    repeat_every_with(DefaultScheduler::default(), delay, f, options)
}

#[must_use = "dropping the handle cancels the repetition"]
pub fn repeat_every_with<S, F>(
    scheduler: S,
    delay: Duration,
    f: F,
    options: RepeatOptions,
) -> Result<CancelableRepeat<S>>
where
    S: Scheduler,
    F: FnMut() + Send + 'static,
{
    if options.max_times == Some(0) {
        return Ok(CancelableRepeat { timer: None });
    }

    let timer = Timer::with_scheduler(scheduler, delay, f, options.into())?;
    timer.start();
    Ok(CancelableRepeat { timer: Some(timer) })
}

pub fn cancel_repeat<S: Scheduler>(repeat: &CancelableRepeat<S>) {
    repeat.cancel();
}

/// Call `f` synchronously `times` times.
pub fn loop_times<F: FnMut()>(times: usize, mut f: F) {
    for _ in 0..times {
        f();
    }
}
