// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod event_publisher;
pub mod waiters;

pub use self::error::{Result, SharedError, TimerError};
pub use self::event_publisher::{EventPublisher, EventStream, TopicEvent};
pub use self::waiters::Waiters;
