//! Shutdown coordination for the application.

use std::future::Future;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// Coordinator for shutdown.
///
/// Provides a broadcast channel that background tasks (preloads) subscribe to.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Future that completes once shutdown is triggered.
    ///
    /// Subscribes immediately, so a trigger that happens before the first
    /// poll is still observed. Never completes if the coordinator is dropped
    /// without triggering: pending preloads then run to completion.
    pub fn requested(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            match rx.recv().await {
                Ok(()) | Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => std::future::pending().await,
            }
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still listening.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_requested_observes_early_trigger() {
        let shutdown = Shutdown::new();
        let requested = shutdown.requested();
        shutdown.trigger();

        let done = tokio::time::timeout(std::time::Duration::from_secs(1), requested).await;
        assert!(done.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_requested_pends_when_dropped_untriggered() {
        let shutdown = Shutdown::new();
        let requested = shutdown.requested();
        drop(shutdown);

        let done = tokio::time::timeout(std::time::Duration::from_secs(60), requested).await;
        assert!(done.is_err());
    }
}
