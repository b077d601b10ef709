// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shared invocation counter.
///
/// ```rust
/// use tickr_test_utils::Counter;
///
/// let counter = Counter::new();
/// let mut tick = counter.callback();
///
/// assert_eq!(tick(), 1);
/// assert_eq!(tick(), 2);
/// assert_eq!(counter.get(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Counter {
    count: Arc<AtomicU32>,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new count.
    pub fn increment(&self) -> u32 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// Callback returning the new count on each call.
    pub fn callback(&self) -> impl FnMut() -> u32 + Send + 'static {
        let counter = self.clone();
        move || counter.increment()
    }

    /// Callback that only counts.
    pub fn unit_callback(&self) -> impl FnMut() + Send + 'static {
        let counter = self.clone();
        move || {
            counter.increment();
        }
    }
}
