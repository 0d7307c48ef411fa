// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::{Duration, Instant};

/// Default quiet window for debounced search input.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Coalesces rapid repeated inputs into a single delayed emission.
///
/// Every new input cancels and replaces the pending one, so only the
/// final value before a quiet window fires. The event loop drives the
/// debouncer by calling [`Debouncer::poll`]; time is passed in
/// explicitly, which keeps the behavior deterministic under test.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records an input at `now`, cancelling any pending emission and
    /// restarting the quiet window.
    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// Emits the pending value if its quiet window has elapsed by `now`.
    ///
    /// Returns `None` while the window is still open or when nothing is
    /// pending. Each recorded input is emitted at most once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now)
        {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }

    /// Drops the pending emission, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an input is waiting for its quiet window.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured quiet window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}
