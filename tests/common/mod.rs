//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lazy_router::module::{LoadError, LoadFuture, ModuleLoader};
use lazy_router::resolve::{ResolveContext, ResolveError, ResolveFuture, Resolver};

/// Loader whose every attempt fails.
#[derive(Debug, Default)]
pub struct FailingLoader {
    attempts: AtomicUsize,
}

#[allow(dead_code)]
impl FailingLoader {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ModuleLoader for FailingLoader {
    fn module_name(&self) -> &str {
        "BrokenModule"
    }

    fn load(&self) -> LoadFuture {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {
            Err(LoadError::Failed {
                module: "BrokenModule".to_string(),
                reason: "chunk not found".to_string(),
            })
        })
    }
}

/// Resolver whose fetch always fails.
#[derive(Debug, Default)]
pub struct FailingResolver {
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FailingResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Resolver for FailingResolver {
    fn resolve(&self, _ctx: ResolveContext) -> ResolveFuture {
        let calls = self.calls.clone();
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ResolveError::Fetch("backend unavailable".to_string()))
        })
    }
}
