// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use std::time::Duration;
use tickr_core::TopicEvent;
use tickr_test_utils::helpers::{assert_no_event_emitted, drain_events, unwrap_event};
use tickr_test_utils::Counter;
use tickr_timer::{Timer, TimerEvent, TimerOptions, TimerTopic};
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_run_publishes_events_in_order() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let options = TimerOptions::DEFAULT.with_repeat(true).with_max_times(2);
    let timer = Timer::new(Duration::from_millis(100), counter.callback(), options)?;
    let mut events = timer.events().subscribe();

    // Act
    timer.start();
    timer.wait_stop().await;

    // Assert
    assert_eq!(
        drain_events(&mut events),
        vec![
            TimerEvent::RunningChanged(true),
            TimerEvent::Triggered(1),
            TimerEvent::Triggered(2),
            TimerEvent::RunningChanged(false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_topic_subscribers_only_see_their_topic() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let timer = Timer::new(
        Duration::from_millis(100),
        counter.callback(),
        TimerOptions::DEFAULT.with_repeat(true),
    )?;
    let mut running = timer.events().subscribe_topic(TimerTopic::RunningChanged);
    let mut triggered = timer.events().subscribe_topic(TimerTopic::Triggered);

    // Act
    timer.start();
    assert_eq!(
        unwrap_event(&mut triggered, 150).await,
        TimerEvent::Triggered(1)
    );
    timer.stop();

    // Assert
    assert_eq!(
        drain_events(&mut running),
        vec![
            TimerEvent::RunningChanged(true),
            TimerEvent::RunningChanged(false),
        ]
    );
    assert_no_event_emitted(&mut triggered, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_late_subscriber_sees_only_later_events() -> anyhow::Result<()> {
    // Arrange
    pause();
    let timer = Timer::new(
        Duration::from_millis(100),
        || "tick",
        TimerOptions::DEFAULT.with_repeat(true).with_max_times(2),
    )?;
    timer.start();
    sleep(Duration::from_millis(150)).await;

    // Act
    let mut events = timer.events().subscribe();
    timer.wait_stop().await;

    // Assert
    assert_eq!(
        drain_events(&mut events),
        vec![
            TimerEvent::Triggered("tick"),
            TimerEvent::RunningChanged(false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_stopping_an_idle_timer_publishes_nothing() -> anyhow::Result<()> {
    // Arrange
    let timer = Timer::new(Duration::from_millis(100), || 0, TimerOptions::DEFAULT)?;
    let mut events = timer.events().subscribe();

    // Act
    timer.stop();
    timer.reset();

    // Assert
    assert!(drain_events(&mut events).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_dropping_the_timer_ends_event_streams() -> anyhow::Result<()> {
    // Arrange
    let timer = Timer::new(Duration::from_millis(100), || 0, TimerOptions::DEFAULT)?;
    let mut events = timer.events().subscribe();
    timer.start();

    // Act
    drop(timer);

    // Assert
    assert_eq!(events.next().await, Some(TimerEvent::RunningChanged(true)));
    assert_eq!(events.next().await, None);

    Ok(())
}

#[test]
fn test_event_topics() {
    assert_eq!(
        TimerEvent::<u8>::RunningChanged(true).topic(),
        TimerTopic::RunningChanged
    );
    assert_eq!(TimerEvent::Triggered(7u8).topic(), TimerTopic::Triggered);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_slow_callback_publishes_in_invocation_order() -> anyhow::Result<()> {
    // Arrange
    let counter = Counter::new();
    let ticks = counter.clone();
    let timer = Timer::new(
        Duration::from_millis(1),
        move || {
            let n = ticks.increment();
            std::thread::sleep(Duration::from_millis(3));
            n
        },
        TimerOptions::DEFAULT.with_repeat(true).with_max_times(5),
    )?;
    let mut triggered = timer.events().subscribe_topic(TimerTopic::Triggered);

    // Act
    timer.start();
    timer.wait_stop().await;

    // Assert
    assert_eq!(
        drain_events(&mut triggered),
        (1..=5).map(TimerEvent::Triggered).collect::<Vec<_>>()
    );
    assert_eq!(counter.get(), 5);

    Ok(())
}
