//! Runs every resolver bound to a route.

use std::collections::BTreeMap;
use std::time::Instant;

use futures_util::future::join_all;
use thiserror::Error;

use crate::observability::metrics;
use crate::resolve::resolver::{ResolveContext, ResolveError, ResolvedValue};
use crate::routing::ResolverBinding;

/// Resolved values keyed by binding name.
pub type ResolvedData = BTreeMap<String, ResolvedValue>;

/// A binding whose resolver failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resolver '{resolver}' for '{key}' failed: {source}")]
pub struct ResolveFailure {
    pub key: String,
    pub resolver: String,
    #[source]
    pub source: ResolveError,
}

/// Run all bindings concurrently and wait for every one of them.
///
/// Returns the first failure in key order if any resolver failed.
pub async fn resolve_all(
    bindings: &BTreeMap<String, ResolverBinding>,
    ctx: &ResolveContext,
) -> Result<ResolvedData, ResolveFailure> {
    let pending = bindings.iter().map(|(key, binding)| {
        let fut = binding.resolver.resolve(ctx.clone());
        async move {
            let started = Instant::now();
            let result = fut.await;
            metrics::record_resolve(&binding.name, result.is_ok(), started);
            (key, binding, result)
        }
    });

    let mut data = ResolvedData::new();
    for (key, binding, result) in join_all(pending).await {
        match result {
            Ok(value) => {
                tracing::debug!(key = %key, resolver = %binding.name, "Resolver completed");
                data.insert(key.clone(), value);
            }
            Err(source) => {
                return Err(ResolveFailure {
                    key: key.clone(),
                    resolver: binding.name.clone(),
                    source,
                });
            }
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::resolve::resolver::{ResolveFuture, Resolver};

    #[derive(Debug, Default)]
    struct Slow {
        finished: Arc<AtomicUsize>,
    }

    impl Resolver for Slow {
        fn resolve(&self, _ctx: ResolveContext) -> ResolveFuture {
            let finished = self.finished.clone();
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(serde_json::json!("slow"))
            })
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Resolver for Failing {
        fn resolve(&self, _ctx: ResolveContext) -> ResolveFuture {
            Box::pin(async { Err(ResolveError::Fetch("503".into())) })
        }
    }

    fn binding(name: &str, resolver: Arc<dyn Resolver>) -> ResolverBinding {
        ResolverBinding {
            name: name.to_string(),
            resolver,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_all_bindings() {
        let slow = Arc::new(Slow::default());
        let mut bindings = BTreeMap::new();
        bindings.insert("a".to_string(), binding("Slow", slow.clone()));
        bindings.insert("b".to_string(), binding("Slow", slow.clone()));

        let started = tokio::time::Instant::now();
        let data = resolve_all(&bindings, &ResolveContext::default()).await.unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(slow.finished.load(Ordering::SeqCst), 2);
        // Concurrent, not sequential.
        assert!(started.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_reported_after_all_complete() {
        let slow = Arc::new(Slow::default());
        let mut bindings = BTreeMap::new();
        bindings.insert("data".to_string(), binding("Failing", Arc::new(Failing)));
        bindings.insert("extra".to_string(), binding("Slow", slow.clone()));

        let err = resolve_all(&bindings, &ResolveContext::default()).await.unwrap_err();
        assert_eq!(err.key, "data");
        assert_eq!(err.resolver, "Failing");
        assert_eq!(err.source, ResolveError::Fetch("503".into()));
        assert_eq!(slow.finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_bindings() {
        let data = resolve_all(&BTreeMap::new(), &ResolveContext::default()).await.unwrap();
        assert!(data.is_empty());
    }
}
