// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::{Arc, OnceLock};

/// A value that is filled in after the closures using it were created.
///
/// A timer callback cannot capture the timer it is passed to; give it a
/// `Slot` instead and fill the slot once the timer exists.
#[derive(Debug)]
pub struct Slot<T> {
    cell: Arc<OnceLock<T>>,
}

impl<T> Slot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// Fill the slot. Later calls are ignored.
    pub fn fill(&self, value: T) {
        let _ = self.cell.set(value);
    }

    /// Run `f` on the value, if the slot is filled.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.cell.get().map(f)
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}
