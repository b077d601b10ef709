// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateful, observable, cancelable timer for one deferred or periodic callback.
//!
//! # Overview
//!
//! - **`Timer<T>`** - start, stop, reset, restart and await one callback's timeline
//! - **`TimerOptions`** - repeat policy: `repeat`, `call_when_start`, `max_times`
//! - **`TimerEvent<T>`** - `RunningChanged` and `Triggered` notifications, by [`TimerTopic`]
//! - **helpers** - `sleep`, `call_after`, `call_sync_after`, `repeat_every`, `loop_times`
//!
//! A timer notifies in two ways: push-style through [`Timer::events`] and
//! pull-style through the one-shot [`Timer::wait_triggered`] and
//! [`Timer::wait_stop`] futures.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - ticks run on `TokioScheduler`
//! - `runtime-smol` - ticks run on `SmolScheduler`
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use std::time::Duration;
//! use tickr_timer::{Timer, TimerEvent, TimerOptions, TimerTopic};
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> tickr_core::Result<()> {
//! let mut n = 0;
//! let timer = Timer::new(
//!     Duration::from_millis(50),
//!     move || {
//!         n += 1;
//!         n
//!     },
//!     TimerOptions::DEFAULT.with_repeat(true).with_max_times(3),
//! )?;
//! let mut triggered = timer.events().subscribe_topic(TimerTopic::Triggered);
//!
//! timer.start();
//! timer.wait_stop().await;
//!
//! assert_eq!(triggered.next().await, Some(TimerEvent::Triggered(1)));
//! assert_eq!(triggered.next().await, Some(TimerEvent::Triggered(2)));
//! assert_eq!(triggered.next().await, Some(TimerEvent::Triggered(3)));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod logging;

mod event;
pub mod helpers;
mod options;
mod timer;
mod wait;

pub use event::{TimerEvent, TimerTopic};
pub use helpers::{
    call_after, call_after_with, call_sync_after, call_sync_after_with, cancel_call_sync,
    cancel_repeat, loop_times, repeat_every, repeat_every_with, sleep, sleep_with, CancelableCall,
    CancelableRepeat,
};
pub use options::{RepeatOptions, TimerOptions};
pub use timer::Timer;
pub use wait::{WaitStop, WaitTriggered};

pub use tickr_core::{Result, TimerError};
pub use tickr_runtime::{DefaultScheduler, Scheduler};
