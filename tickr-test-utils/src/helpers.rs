// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::FutureExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::sleep;

/// Let spawned tasks run without advancing a paused clock.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Advance a paused clock by `millis` and let woken tasks run.
pub async fn advance_ms(millis: u64) {
    settle().await;
    tokio::time::advance(Duration::from_millis(millis)).await;
    settle().await;
}

pub async fn assert_no_event_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: std::fmt::Debug,
{
    tokio::select! {
        event = stream.next() => {
            panic!("Unexpected event emitted, expected no output: {event:?}");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Wait up to `timeout_ms` for the next event.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_event<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        event = stream.next() => {
            event.expect("stream ended before the expected event")
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: No event received within {timeout_ms} ms")
        }
    }
}

/// Collect every event that is already queued.
pub fn drain_events<S, T>(stream: &mut S) -> Vec<T>
where
    S: Stream<Item = T> + Unpin,
{
    let mut events = Vec::new();
    while let Some(Some(event)) = stream.next().now_or_never() {
        events.push(event);
    }
    events
}
