// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::oneshot::Receiver;
use futures::ready;
use tickr_core::{Result, TimerError};

/// Future returned by [`Timer::wait_triggered`](crate::Timer::wait_triggered).
///
/// Resolves with the value of the next tick, or fails with the tick's
/// callback error or with [`TimerError::Stopped`].
#[must_use = "futures do nothing unless polled"]
#[derive(Debug)]
pub struct WaitTriggered<T> {
    receiver: Receiver<Result<T>>,
}

impl<T> WaitTriggered<T> {
    pub(crate) const fn new(receiver: Receiver<Result<T>>) -> Self {
        Self { receiver }
    }
}

impl<T> Future for WaitTriggered<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // A dropped sender means the timer itself is gone.
        let outcome = ready!(Pin::new(&mut self.receiver).poll(cx));
        Poll::Ready(outcome.unwrap_or(Err(TimerError::Stopped)))
    }
}

/// Future returned by [`Timer::wait_stop`](crate::Timer::wait_stop).
///
/// Resolves the next time the timer goes idle. Never fails.
#[must_use = "futures do nothing unless polled"]
#[derive(Debug)]
pub struct WaitStop {
    receiver: Receiver<()>,
}

impl WaitStop {
    pub(crate) const fn new(receiver: Receiver<()>) -> Self {
        Self { receiver }
    }
}

impl Future for WaitStop {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let _ = ready!(Pin::new(&mut self.receiver).poll(cx));
        Poll::Ready(())
    }
}
