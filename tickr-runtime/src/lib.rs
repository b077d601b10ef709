// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for deferred, cancelable calls.
//!
//! - **`Scheduler` trait** - sleep, spawn and `schedule_once` for one runtime
//! - **`CallHandle`** - cancelable, fire-at-most-once handle for one deferred call
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioScheduler`
//! - `runtime-smol` - `SmolScheduler`
//!
//! [`DefaultScheduler`] names the scheduler of the selected runtime, with
//! Tokio taking precedence when both features are enabled.

pub mod handle;
pub mod impls;
pub mod scheduler;

pub use handle::{CallHandle, Cancelled};
pub use scheduler::Scheduler;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;

#[cfg(feature = "runtime-smol")]
pub use impls::smol::{SmolScheduler, SmolSleep};

#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = TokioScheduler;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultScheduler = SmolScheduler;
