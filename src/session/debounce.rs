use std::time::{Duration, Instant};

/// Quiet-period debouncer: every push replaces the pending value and
/// restarts the timer; `poll` hands out the value only once the quiet
/// period has elapsed with no further pushes. Intermediate values are
/// dropped, so observers only ever see the most recent one.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, pushed)) if now.duration_since(*pushed) >= self.quiet => {
                self.pending.take().map(|(v, _)| v)
            }
            _ => None,
        }
    }

    /// Drain the pending value regardless of the timer. Used when a step
    /// is left and its last edit must not be lost.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
