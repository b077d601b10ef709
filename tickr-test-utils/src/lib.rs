// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the tickr timer workspace.
//!
//! Designed for use in development and testing only, not for production code.
//!
//! - [`Counter`] - shared tick counter that hands out counting callbacks
//! - [`TestError`] - error type returned by failing test callbacks
//! - [`Slot`] - late-bound value, used to give a callback a handle to its own timer
//! - [`helpers`] - stream assertions and scheduler-settling utilities

pub mod counter;
pub mod helpers;
pub mod slot;
pub mod test_error;

pub use counter::Counter;
pub use slot::Slot;
pub use test_error::TestError;
