// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tickr_test_utils::helpers::drain_events;
use tickr_test_utils::{Counter, Slot};
use tickr_timer::{Timer, TimerError, TimerEvent, TimerOptions};
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_stop_from_callback_ends_the_run() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let slot: Slot<Timer<u32>> = Slot::new();
    let ticks = counter.clone();
    let own = slot.clone();
    let timer = Timer::new(
        Duration::from_millis(100),
        move || {
            let n = ticks.increment();
            if n == 2 {
                own.with(|timer| timer.stop());
            }
            n
        },
        TimerOptions::DEFAULT.with_repeat(true),
    )?;
    slot.fill(timer.clone());
    let mut events = timer.events().subscribe();
    timer.start();
    sleep(Duration::from_millis(150)).await;

    // Act
    let waiter = timer.wait_triggered();
    let stopped = timer.wait_stop();
    sleep(Duration::from_millis(100)).await;

    // Assert
    assert!(matches!(waiter.await, Err(TimerError::Stopped)));
    stopped.await;
    assert!(!timer.running());

    sleep(Duration::from_millis(500)).await;
    assert_eq!(counter.get(), 2);

    let events = drain_events(&mut events);
    assert_eq!(events.first(), Some(&TimerEvent::RunningChanged(true)));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, TimerEvent::RunningChanged(false)))
            .count(),
        1
    );
    assert!(events.contains(&TimerEvent::Triggered(2)));

    Ok(())
}

#[tokio::test]
async fn test_restart_from_terminal_callback_starts_a_new_run() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let slot: Slot<Timer<u32>> = Slot::new();
    let ticks = counter.clone();
    let own = slot.clone();
    let timer = Timer::new(
        Duration::from_millis(100),
        move || {
            let n = ticks.increment();
            if n == 1 {
                own.with(|timer| {
                    timer.restart();
                });
            }
            n
        },
        TimerOptions::DEFAULT,
    )?;
    slot.fill(timer.clone());
    let mut events = timer.events().subscribe();

    // Act
    timer.start();
    sleep(Duration::from_millis(150)).await;

    // Assert
    assert!(timer.running());
    assert_eq!(timer.call_times(), 0);

    timer.wait_stop().await;
    assert_eq!(counter.get(), 2);
    assert_eq!(timer.call_times(), 1);
    assert_eq!(
        drain_events(&mut events),
        vec![
            TimerEvent::RunningChanged(true),
            TimerEvent::RunningChanged(false),
            TimerEvent::RunningChanged(true),
            TimerEvent::Triggered(1),
            TimerEvent::Triggered(2),
            TimerEvent::RunningChanged(false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_reset_from_last_tick_extends_the_run() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let slot: Slot<Timer<u32>> = Slot::new();
    let ticks = counter.clone();
    let own = slot.clone();
    let timer = Timer::new(
        Duration::from_millis(100),
        move || {
            let n = ticks.increment();
            if n == 2 {
                own.with(|timer| timer.reset());
            }
            n
        },
        TimerOptions::DEFAULT.with_repeat(true).with_max_times(2),
    )?;
    slot.fill(timer.clone());
    let mut events = timer.events().subscribe();

    // Act
    timer.start();
    timer.wait_stop().await;

    // Assert
    assert_eq!(counter.get(), 4);
    assert_eq!(timer.call_times(), 2);
    assert_eq!(
        drain_events(&mut events),
        vec![
            TimerEvent::RunningChanged(true),
            TimerEvent::Triggered(1),
            TimerEvent::Triggered(2),
            TimerEvent::Triggered(3),
            TimerEvent::Triggered(4),
            TimerEvent::RunningChanged(false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_start_from_callback_is_a_no_op_while_running() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let slot: Slot<Timer<u32>> = Slot::new();
    let ticks = counter.clone();
    let own = slot.clone();
    let timer = Timer::new(
        Duration::from_millis(100),
        move || {
            own.with(|timer| {
                timer.start();
            });
            ticks.increment()
        },
        TimerOptions::DEFAULT.with_repeat(true).with_max_times(3),
    )?;
    slot.fill(timer.clone());
    let mut events = timer.events().subscribe();

    // Act
    timer.start();
    sleep(Duration::from_millis(250)).await;

    // Assert
    assert_eq!(counter.get(), 2);
    assert_eq!(timer.call_times(), 2);
    assert_eq!(
        drain_events(&mut events),
        vec![
            TimerEvent::RunningChanged(true),
            TimerEvent::Triggered(1),
            TimerEvent::Triggered(2),
        ]
    );

    timer.stop();
    Ok(())
}
