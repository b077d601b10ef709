// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber event publisher with named topics.
//!
//! An [`EventPublisher`] broadcasts each event to every current subscriber
//! whose topic filter matches.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past events, only events published after subscribing.
//! - **Unbounded**: Uses unbounded mpsc channels internally (no backpressure).
//! - **Synchronous**: `publish` delivers to the subscriber queues before returning and never runs listener code.
//! - **Topics**: Subscribe to every event, or to a single topic.
//!
//! ## Example
//!
//! ```
//! use tickr_core::{EventPublisher, TopicEvent};
//! use futures::StreamExt;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Door {
//!     Opened,
//!     Closed,
//! }
//!
//! impl TopicEvent for Door {
//!     type Topic = &'static str;
//!
//!     fn topic(&self) -> Self::Topic {
//!         match self {
//!             Door::Opened => "opened",
//!             Door::Closed => "closed",
//!         }
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let publisher = EventPublisher::<Door>::new();
//! let mut all = publisher.subscribe();
//! let mut closed = publisher.subscribe_topic("closed");
//!
//! publisher.publish(Door::Opened);
//! publisher.publish(Door::Closed);
//! drop(publisher);
//!
//! assert_eq!(all.next().await, Some(Door::Opened));
//! assert_eq!(all.next().await, Some(Door::Closed));
//! assert_eq!(closed.next().await, Some(Door::Closed));
//! assert_eq!(closed.next().await, None);
//! # }
//! ```

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

/// An event that belongs to a named topic.
pub trait TopicEvent: Clone + Send + 'static {
    /// Identifier of the topic an event is published under
    type Topic: Copy + PartialEq + Send + 'static;

    fn topic(&self) -> Self::Topic;
}

struct Subscriber<E: TopicEvent> {
    topic: Option<E::Topic>,
    sender: UnboundedSender<E>,
}

impl<E: TopicEvent> Subscriber<E> {
    fn accepts(&self, event: &E) -> bool {
        self.topic.is_none_or(|topic| topic == event.topic())
    }
}

/// Stream of events handed out by [`EventPublisher::subscribe`].
///
/// Ends once the publisher is dropped.
pub struct EventStream<E> {
    receiver: UnboundedReceiver<E>,
}

impl<E> Stream for EventStream<E> {
    type Item = E;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl<E> fmt::Debug for EventStream<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream").finish_non_exhaustive()
    }
}

/// A hot, unbounded publisher that broadcasts events to all current subscribers.
///
/// See the [module documentation](self) for examples and more details.
pub struct EventPublisher<E: TopicEvent> {
    subscribers: Mutex<Vec<Subscriber<E>>>,
}

impl<E: TopicEvent> EventPublisher<E> {
    /// Creates a new publisher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to every event published from now on.
    pub fn subscribe(&self) -> EventStream<E> {
        self.register(None)
    }

    /// Subscribe to the events of a single topic.
    pub fn subscribe_topic(&self, topic: E::Topic) -> EventStream<E> {
        self.register(Some(topic))
    }

    fn register(&self, topic: Option<E::Topic>) -> EventStream<E> {
        let (sender, receiver) = mpsc::unbounded();
        self.subscribers.lock().push(Subscriber { topic, sender });
        EventStream { receiver }
    }

    /// Publish an event to every matching subscriber.
    ///
    /// Subscribers whose stream has been dropped are pruned.
    pub fn publish(&self, event: E) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|subscriber| {
            if !subscriber.accepts(&event) {
                return !subscriber.sender.is_closed();
            }
            subscriber.sender.unbounded_send(event.clone()).is_ok()
        });
    }

    /// Returns the number of currently registered subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed
    /// on the next `publish()` call, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl<E: TopicEvent> Default for EventPublisher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TopicEvent> fmt::Debug for EventPublisher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventPublisher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
