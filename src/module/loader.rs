//! Module loaders.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::module::feature::FeatureModule;

/// Errors that can occur while loading a feature module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The loader reported a failure (network, chunk missing, ...).
    #[error("module '{module}' failed to load: {reason}")]
    Failed { module: String, reason: String },

    /// The route is not part of the table the cache was built for.
    #[error("route #{0} has no module slot")]
    NoSlot(usize),
}

/// Single-shot load future.
pub type LoadFuture = BoxFuture<'static, Result<Arc<FeatureModule>, LoadError>>;

/// Produces a feature module on demand.
///
/// Implementations must return a cold future: nothing may be fetched until
/// the future is polled.
pub trait ModuleLoader: Send + Sync + fmt::Debug {
    /// Name of the module this loader produces.
    fn module_name(&self) -> &str;

    /// Begin loading the module.
    fn load(&self) -> LoadFuture;
}

/// Loader for a module that is already in memory, after a simulated
/// download latency.
#[derive(Debug)]
pub struct StaticModuleLoader {
    module: Arc<FeatureModule>,
    latency: Duration,
    loads: Arc<AtomicUsize>,
}

impl StaticModuleLoader {
    pub fn new(module: FeatureModule, latency: Duration) -> Self {
        Self {
            module: Arc::new(module),
            latency,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of loads that actually started.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModuleLoader for StaticModuleLoader {
    fn module_name(&self) -> &str {
        self.module.name()
    }

    fn load(&self) -> LoadFuture {
        let module = self.module.clone();
        let latency = self.latency;
        let loads = self.loads.clone();

        Box::pin(async move {
            loads.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(module = module.name(), latency_ms = latency.as_millis() as u64, "Fetching module");
            tokio::time::sleep(latency).await;
            Ok(module)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::feature::RouteComponent;
    use crate::navigation::RouteSnapshot;

    #[derive(Debug)]
    struct Blank;

    impl RouteComponent for Blank {
        fn selector(&self) -> &str {
            "app-blank"
        }

        fn on_init(&self, _snapshot: &RouteSnapshot) {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_is_cold() {
        let loader = StaticModuleLoader::new(
            FeatureModule::new("BlankModule", Arc::new(Blank)),
            Duration::from_millis(50),
        );

        let pending = loader.load();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(loader.load_count(), 0);

        let module = pending.await.unwrap();
        assert_eq!(module.name(), "BlankModule");
        assert_eq!(loader.load_count(), 1);
    }
}
