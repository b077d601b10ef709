// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tickr_core::TopicEvent;

/// Notification published by a [`Timer`](crate::Timer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent<T> {
    /// The timer started (`true`) or went idle (`false`)
    RunningChanged(bool),
    /// A tick's callback succeeded with this value
    Triggered(T),
}

/// Topics a [`TimerEvent`] is published under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerTopic {
    RunningChanged,
    Triggered,
}

impl<T: Clone + Send + 'static> TopicEvent for TimerEvent<T> {
    type Topic = TimerTopic;

    fn topic(&self) -> TimerTopic {
        match self {
            Self::RunningChanged(_) => TimerTopic::RunningChanged,
            Self::Triggered(_) => TimerTopic::Triggered,
        }
    }
}
