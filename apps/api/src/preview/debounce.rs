//! Cancel-and-reschedule debounce timer. Every new submission replaces
//! the pending value and restarts the window; the pending value is
//! dropped (not flushed) when the debouncer is dropped, matching timer
//! cancellation on teardown.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the debounce window.
    pub fn submit(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.window));
    }

    /// Waits out the current window and yields the latest submitted
    /// value, or returns `None` immediately when nothing is pending.
    pub async fn settled(&mut self) -> Option<T> {
        let deadline = self.pending.as_ref().map(|(_, d)| *d)?;
        sleep_until(deadline).await;
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_settled_yields_latest_submission() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.submit(1);
        debouncer.submit(2);
        debouncer.submit(3);
        let value = debouncer.settled().await;
        assert_eq!(value, Some(3));
        // Delivery drains the pending slot.
        assert_eq!(debouncer.settled().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_none_when_idle() {
        let mut debouncer: Debouncer<i32> = Debouncer::new(Duration::from_millis(300));
        assert_eq!(debouncer.settled().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmission_restarts_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.submit(1);
        tokio::time::advance(Duration::from_millis(200)).await;
        // A fresh submission clears the prior pending timer.
        debouncer.submit(2);
        let start = Instant::now();
        let value = debouncer.settled().await;
        assert_eq!(value, Some(2));
        assert!(
            start.elapsed() >= Duration::from_millis(300),
            "window restarts from the second submission"
        );
    }
}
