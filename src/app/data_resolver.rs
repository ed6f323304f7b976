//! Resolver for the orders route.
//!
//! Stands in for a real data service: waits `delay`, then yields a fixed
//! record.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use crate::resolve::{ResolveContext, ResolveFuture, Resolver};

#[derive(Debug)]
pub struct DataResolver {
    delay: Duration,
    fetches: Arc<AtomicUsize>,
}

impl DataResolver {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches that actually started.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Resolver for DataResolver {
    fn resolve(&self, ctx: ResolveContext) -> ResolveFuture {
        let delay = self.delay;
        let fetches = self.fetches.clone();

        Box::pin(async move {
            fetches.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(navigation_id = ctx.navigation_id, url = %ctx.url, "Fetching route data");
            tokio::time::sleep(delay).await;
            Ok(json!({ "id": 1, "name": "Mocked Data" }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_resolve_is_cold() {
        let resolver = DataResolver::new(Duration::from_secs(3));

        let pending = resolver.resolve(ResolveContext::default());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(resolver.fetch_count(), 0);

        let value = pending.await.unwrap();
        assert_eq!(value, json!({ "id": 1, "name": "Mocked Data" }));
        assert_eq!(resolver.fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_call_fetches_again() {
        let resolver = DataResolver::new(Duration::from_secs(3));

        let started = tokio::time::Instant::now();
        let first = resolver.resolve(ResolveContext::default()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(3));

        let second = resolver.resolve(ResolveContext::default()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(resolver.fetch_count(), 2);
        assert!(started.elapsed() >= Duration::from_secs(6));
    }
}
