// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancelable handle for one deferred call.
//!
//! A [`CallHandle`] moves from *pending* to exactly one of *fired* or
//! *cancelled*. Both transitions are atomic compare-and-swap operations, so a
//! call can fire at most once and a cancel that loses the race against firing
//! is a harmless no-op.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicU8, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Handle to one outstanding deferred call.
///
/// Clones share the same call; the scheduler keeps one clone to decide
/// whether to fire, the owner keeps the other to cancel.
///
/// # Example
///
/// ```
/// use tickr_runtime::CallHandle;
///
/// let handle = CallHandle::new();
/// assert!(handle.is_pending());
///
/// handle.cancel();
/// handle.cancel();
/// assert!(handle.is_cancelled());
/// assert!(!handle.try_fire());
/// ```
#[derive(Clone, Debug)]
pub struct CallHandle {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: AtomicU8,
    event: Event,
}

impl CallHandle {
    /// Create a new pending handle.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: AtomicU8::new(PENDING),
                event: Event::new(),
            }),
        }
    }

    /// Cancel the call, waking the task waiting to fire it.
    ///
    /// Idempotent. Cancelling a call that already fired has no effect.
    pub fn cancel(&self) {
        if self
            .inner
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.inner.event.notify(usize::MAX);
        }
    }

    /// Claim the right to run the call.
    ///
    /// Returns `true` exactly once, and only if the handle was not cancelled.
    pub fn try_fire(&self) -> bool {
        self.inner
            .state
            .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.load(Ordering::Acquire) == PENDING
    }

    pub fn is_fired(&self) -> bool {
        self.inner.state.load(Ordering::Acquire) == FIRED
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.state.load(Ordering::Acquire) == CANCELLED
    }

    /// Wait until the call is cancelled.
    ///
    /// Resolves immediately if it already is. Never resolves for a call that
    /// fired.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            handle: self,
            listener: None,
        }
    }
}

impl Default for CallHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`CallHandle::cancelled()`].
pub struct Cancelled<'a> {
    handle: &'a CallHandle,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        loop {
            if this.handle.is_cancelled() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Re-check after registering: cancel() may have run in between.
                None => this.listener = Some(this.handle.inner.event.listen()),
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    this.listener = None;
                }
            }
        }
    }
}
