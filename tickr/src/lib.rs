// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tickr
//!
//! Stateful timers for one deferred or periodic callback.
//!
//! ## Overview
//!
//! A [`Timer`] wraps a callback, a delay and a repeat policy. It can be
//! started, stopped, reset and restarted, reports how many ticks it made and
//! how many are left, and notifies observers in two ways:
//!
//! - **Events**: [`TimerEvent::RunningChanged`] and [`TimerEvent::Triggered`], through [`Timer::events`]
//! - **Futures**: [`Timer::wait_triggered`] resolves with the next tick's value, [`Timer::wait_stop`] with the next stop
//!
//! The [`helpers`] cover the one-off cases: [`sleep`], [`call_after`],
//! [`call_sync_after`], [`repeat_every`] and [`loop_times`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use tickr::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> tickr::Result<()> {
//! let timer = Timer::new(
//!     Duration::from_millis(100),
//!     || "tick",
//!     TimerOptions::DEFAULT.with_repeat(true).with_max_times(2),
//! )?;
//!
//! timer.start();
//! assert_eq!(timer.wait_triggered().await?, "tick");
//!
//! timer.wait_stop().await;
//! assert_eq!(timer.call_times(), 2);
//! # Ok(())
//! # }
//! ```

pub use tickr_core::{EventPublisher, EventStream, Result, SharedError, TimerError, TopicEvent};
pub use tickr_runtime::{CallHandle, DefaultScheduler, Scheduler};
pub use tickr_timer::helpers;
pub use tickr_timer::{
    call_after, call_sync_after, cancel_call_sync, cancel_repeat, loop_times, repeat_every, sleep,
    CancelableCall, CancelableRepeat, RepeatOptions, Timer, TimerEvent, TimerOptions, TimerTopic,
    WaitStop, WaitTriggered,
};

#[cfg(feature = "runtime-tokio")]
pub use tickr_runtime::TokioScheduler;

#[cfg(feature = "runtime-smol")]
pub use tickr_runtime::{SmolScheduler, SmolSleep};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::helpers::{call_after, call_sync_after, repeat_every, sleep};
    pub use crate::{RepeatOptions, Timer, TimerError, TimerEvent, TimerOptions, TimerTopic};
}
