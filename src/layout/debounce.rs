use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

/// Trailing-edge debounce: each call replaces the single pending timer, and only the
/// last value of a burst is delivered, once `quiet` has elapsed without further calls.
///
/// Fired values arrive on the receiver returned by [`Debouncer::new`]. Dropping the
/// debouncer does not cancel a pending timer; the receiver closes after it fires.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
    fired: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(quiet: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        (Self { quiet, pending: None, fired }, receiver)
    }

    /// Restart the quiet period with `value` as the payload to deliver.
    pub fn call(&mut self, value: T) {
        self.cancel();

        let quiet = self.quiet;
        let fired = self.fired.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // receiver gone means nobody is listening for redraws anymore
            let _ = fired.send(value);
        }));
    }

    /// Drop the pending value, if any, without delivering it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| !pending.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::{sleep, Instant};

    use super::*;

    const QUIET: Duration = Duration::from_millis(100);

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_into_one_trailing_call() {
        let (mut debouncer, mut fired) = Debouncer::new(QUIET);
        let start = Instant::now();

        for i in 0..10 {
            debouncer.call(i);
            sleep(Duration::from_millis(5)).await;
        }

        assert_eq!(fired.recv().await, Some(9));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(145) && elapsed < Duration::from_millis(150), "{elapsed:?}");

        sleep(QUIET * 5).await;
        assert!(fired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_fire_on_the_leading_edge() {
        let (mut debouncer, mut fired) = Debouncer::new(QUIET);
        debouncer.call("first");
        tokio::task::yield_now().await;
        assert!(fired.try_recv().is_err());
        assert!(debouncer.is_pending());

        sleep(QUIET / 2).await;
        assert!(fired.try_recv().is_err());

        sleep(QUIET).await;
        assert_eq!(fired.try_recv().ok(), Some("first"));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn separated_bursts_fire_separately() {
        let (mut debouncer, mut fired) = Debouncer::new(QUIET);

        debouncer.call(1);
        debouncer.call(2);
        assert_eq!(fired.recv().await, Some(2));

        debouncer.call(3);
        assert_eq!(fired.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_the_pending_value() {
        let (mut debouncer, mut fired) = Debouncer::new(QUIET);
        debouncer.call(1);
        debouncer.cancel();
        drop(debouncer);

        assert_eq!(fired.recv().await, None);
    }
}
