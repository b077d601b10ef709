// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tickr_core::{Result, TimerError};

/// Repeat policy of a [`Timer`](crate::Timer).
///
/// With the `serde` feature the policy can be loaded from configuration;
/// missing fields fall back to [`TimerOptions::DEFAULT`].
///
/// # Example
///
/// ```
/// use tickr_timer::TimerOptions;
///
/// let options = TimerOptions::DEFAULT
///     .with_repeat(true)
///     .with_call_when_start(true)
///     .with_max_times(3);
///
/// assert!(options.repeat);
/// assert_eq!(options.max_times, Some(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerOptions {
    /// Re-arm after each tick
    pub repeat: bool,
    /// Fire the first tick immediately on `start` instead of after the delay
    pub call_when_start: bool,
    /// Upper bound on ticks per run, `None` for unbounded
    ///
    /// Only meaningful together with `repeat`; a non-repeating timer ticks once.
    pub max_times: Option<u32>,
}

impl TimerOptions {
    /// One-shot, delayed, unbounded.
    pub const DEFAULT: Self = Self {
        repeat: false,
        call_when_start: false,
        max_times: None,
    };

    #[must_use]
    pub const fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub const fn with_call_when_start(mut self, call_when_start: bool) -> Self {
        self.call_when_start = call_when_start;
        self
    }

    #[must_use]
    pub const fn with_max_times(mut self, max_times: u32) -> Self {
        self.max_times = Some(max_times);
        self
    }

    /// Remove the tick bound.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_times = None;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_times == Some(0) {
            return Err(TimerError::invalid_options(
                "max_times must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Options of [`repeat_every`](crate::repeat_every).
///
/// `max_times` counts the immediate call made when `call_when_start` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepeatOptions {
    pub call_when_start: bool,
    pub max_times: Option<u32>,
}

impl RepeatOptions {
    #[must_use]
    pub const fn with_call_when_start(mut self, call_when_start: bool) -> Self {
        self.call_when_start = call_when_start;
        self
    }

    #[must_use]
    pub const fn with_max_times(mut self, max_times: u32) -> Self {
        self.max_times = Some(max_times);
        self
    }
}

impl From<RepeatOptions> for TimerOptions {
    fn from(options: RepeatOptions) -> Self {
        Self {
            repeat: true,
            call_when_start: options.call_when_start,
            max_times: options.max_times,
        }
    }
}
