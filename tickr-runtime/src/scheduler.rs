// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::handle::CallHandle;
use core::fmt::Debug;
use core::future::Future;
use core::time::Duration;
use futures::future::{self, Either};
use futures::pin_mut;

/// Deferred-call capability of an async runtime.
///
/// Implementors only provide sleeping and task spawning; `schedule_once`
/// builds the cancelable deferred call on top of them.
pub trait Scheduler: Clone + Send + Sync + Debug + Default + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    /// Creates a future that sleeps for the specified duration.
    ///
    /// The deadline is fixed when the future is created, not when it is first polled.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Run `future` to completion in the background.
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;

    /// Run `callback` once after `delay` unless the returned handle is cancelled first.
    fn schedule_once<F>(&self, delay: Duration, callback: F) -> CallHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = CallHandle::new();
        let armed = handle.clone();
        let sleep = self.sleep_future(delay);

        self.spawn(async move {
            let cancelled = armed.cancelled();
            pin_mut!(sleep, cancelled);

            if let Either::Left(_) = future::select(sleep, cancelled).await {
                if armed.try_fire() {
                    callback();
                }
            }
        });

        handle
    }
}
