// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::FutureExt;
use tickr_core::Waiters;

#[tokio::test]
async fn settle_resolves_every_waiter_with_the_same_value() {
    let mut waiters = Waiters::<u32>::new();
    let first = waiters.register();
    let second = waiters.register();

    assert_eq!(waiters.take().settle(5), 2);

    assert_eq!(first.await, Ok(5));
    assert_eq!(second.await, Ok(5));
}

#[test]
fn take_leaves_the_list_empty() {
    let mut waiters = Waiters::<()>::new();
    let _receiver = waiters.register();
    assert_eq!(waiters.len(), 1);

    let taken = waiters.take();
    assert!(waiters.is_empty());
    assert_eq!(taken.len(), 1);
}

#[test]
fn waiters_registered_after_settling_stay_pending() {
    let mut waiters = Waiters::<()>::new();
    let early = waiters.register();
    waiters.take().settle(());

    let mut late = waiters.register();

    assert_eq!(early.now_or_never(), Some(Ok(())));
    assert!((&mut late).now_or_never().is_none());
}

#[test]
fn dropped_receivers_are_not_counted() {
    let mut waiters = Waiters::<u8>::new();
    let kept = waiters.register();
    drop(waiters.register());

    assert_eq!(waiters.take().settle(1), 1);
    drop(kept);
}

#[test]
fn dropping_the_list_cancels_receivers() {
    let mut waiters = Waiters::<u8>::new();
    let receiver = waiters.register();
    drop(waiters);

    assert!(matches!(receiver.now_or_never(), Some(Err(_))));
}
