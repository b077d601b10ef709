// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-use waiter lists.
//!
//! A [`Waiters`] list hands out one-shot receivers and later settles all of
//! them at once with the same value. Each waiter is settled at most once:
//! settling drains the list, so waiters registered afterwards wait for the
//! next event.

use futures::channel::oneshot::{self, Receiver, Sender};

/// A list of pending one-shot waiters that are settled together.
#[derive(Debug)]
pub struct Waiters<V> {
    senders: Vec<Sender<V>>,
}

impl<V> Waiters<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            senders: Vec::new(),
        }
    }

    /// Register a new waiter and return the receiving half.
    pub fn register(&mut self) -> Receiver<V> {
        let (sender, receiver) = oneshot::channel();
        self.senders.push(sender);
        receiver
    }

    /// Move every pending waiter out of the list, leaving it empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            senders: std::mem::take(&mut self.senders),
        }
    }

    /// Number of waiters still registered.
    ///
    /// Waiters whose receiver has been dropped are counted until the list
    /// is settled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

impl<V: Clone> Waiters<V> {
    /// Settle every waiter with `value`, consuming the list.
    ///
    /// Returns how many waiters were still listening.
    pub fn settle(self, value: V) -> usize {
        self.senders
            .into_iter()
            .filter(|sender| !sender.is_canceled())
            .map(|sender| sender.send(value.clone()))
            .filter(Result::is_ok)
            .count()
    }
}

impl<V> Default for Waiters<V> {
    fn default() -> Self {
        Self::new()
    }
}
