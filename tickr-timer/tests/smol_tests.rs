// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use std::time::{Duration, Instant};
use tickr_runtime::SmolScheduler;
use tickr_test_utils::Counter;
use tickr_timer::{call_after_with, repeat_every_with, RepeatOptions, Timer, TimerOptions};

#[test]
fn test_bounded_timer_on_smol() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let counter = Counter::new();
        let timer = Timer::with_scheduler(
            SmolScheduler,
            Duration::from_millis(20),
            counter.callback(),
            TimerOptions::DEFAULT.with_repeat(true).with_max_times(3),
        )?;
        let start = Instant::now();

        // Act
        timer.start();
        let first = timer.wait_triggered().await?;
        timer.wait_stop().await;

        // Assert
        assert_eq!(first, 1);
        assert_eq!(counter.get(), 3);
        assert!(!timer.running());
        assert!(start.elapsed() >= Duration::from_millis(50)); // Allow 10ms tolerance

        Ok::<_, anyhow::Error>(())
    })
}

#[test]
fn test_stop_on_smol_rejects_waiters() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let timer = Timer::with_scheduler(
            SmolScheduler,
            Duration::from_secs(5),
            || 0,
            TimerOptions::DEFAULT,
        )?;
        timer.start();
        let waiter = timer.wait_triggered();

        // Act
        timer.stop();

        // Assert
        assert!(waiter.await.is_err());
        Ok::<_, anyhow::Error>(())
    })
}

#[test]
fn test_helpers_on_smol() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let counter = Counter::new();
        let repeat = repeat_every_with(
            SmolScheduler,
            Duration::from_millis(10),
            counter.unit_callback(),
            RepeatOptions::default()
                .with_call_when_start(true)
                .with_max_times(2),
        )?;

        // Act
        if let Some(finished) = repeat.finished() {
            finished.await;
        }
        let value = call_after_with(&SmolScheduler, Duration::from_millis(10), || 7).await;

        // Assert
        assert_eq!(counter.get(), 2);
        assert_eq!(value, 7);
        Ok::<_, anyhow::Error>(())
    })
}
