//! Runs the preloading strategy over the route table.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;
use crate::module::{LoadError, ModuleCache};
use crate::observability::metrics;
use crate::preloading::strategy::{LoadAction, PreloadingStrategy};
use crate::routing::RouteTable;

/// What happened to one route's preload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadOutcome {
    /// The strategy triggered the load and it completed.
    Loaded,
    /// The strategy deferred the route to navigation time.
    Skipped,
    /// The load was triggered and failed.
    Failed(LoadError),
    /// Shutdown arrived before the load finished.
    Abandoned,
    /// The preload task panicked.
    Panicked,
}

impl PreloadOutcome {
    fn label(&self) -> &'static str {
        match self {
            PreloadOutcome::Loaded => "loaded",
            PreloadOutcome::Skipped => "skipped",
            PreloadOutcome::Failed(_) => "failed",
            PreloadOutcome::Abandoned => "abandoned",
            PreloadOutcome::Panicked => "panicked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadReport {
    pub path: String,
    pub outcome: PreloadOutcome,
}

/// Handles to the spawned preload tasks.
///
/// Dropping the handle detaches the tasks; they keep running.
#[derive(Debug)]
pub struct PreloadHandle {
    tasks: Vec<(String, JoinHandle<PreloadOutcome>)>,
}

impl PreloadHandle {
    /// Number of lazy routes handed to the strategy.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every preload task, in table order.
    pub async fn join(self) -> Vec<PreloadReport> {
        let mut reports = Vec::with_capacity(self.tasks.len());
        for (path, task) in self.tasks {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(e) if e.is_panic() => {
                    tracing::error!(path = %path, error = %e, "Preload task panicked");
                    metrics::record_preload(PreloadOutcome::Panicked.label());
                    PreloadOutcome::Panicked
                }
                Err(_) => PreloadOutcome::Abandoned,
            };
            reports.push(PreloadReport { path, outcome });
        }
        reports
    }
}

/// Applies a strategy to every lazy route, once.
#[derive(Debug)]
pub struct Preloader {
    table: Arc<RouteTable>,
    modules: Arc<ModuleCache>,
    strategy: Arc<dyn PreloadingStrategy>,
}

impl Preloader {
    pub fn new(
        table: Arc<RouteTable>,
        modules: Arc<ModuleCache>,
        strategy: Arc<dyn PreloadingStrategy>,
    ) -> Self {
        Self {
            table,
            modules,
            strategy,
        }
    }

    /// Ask the strategy about every lazy route and spawn the resulting
    /// work. Must be called from within a tokio runtime.
    pub fn start(self, shutdown: &Shutdown) -> PreloadHandle {
        let mut tasks = Vec::new();

        for (id, route) in self.table.iter() {
            let Some(loader) = route.loader() else {
                continue;
            };

            let modules = self.modules.clone();
            let loader = loader.clone();
            let path = route.path().to_string();
            let action = LoadAction::new({
                let path = path.clone();
                move || Box::pin(async move { modules.load(id, &path, &loader).await })
            });

            let decision = self.strategy.preload(route, action);
            let shutdown_requested = shutdown.requested();
            let task_path = path.clone();

            let task = tokio::spawn(async move {
                let outcome = tokio::select! {
                    result = decision => match result {
                        Ok(Some(module)) => {
                            tracing::info!(path = %task_path, module = module.name(), "Preloaded feature module");
                            PreloadOutcome::Loaded
                        }
                        Ok(None) => {
                            tracing::debug!(path = %task_path, "Preload skipped");
                            PreloadOutcome::Skipped
                        }
                        Err(e) => {
                            tracing::warn!(path = %task_path, error = %e, "Preload failed");
                            PreloadOutcome::Failed(e)
                        }
                    },
                    _ = shutdown_requested => {
                        tracing::debug!(path = %task_path, "Preload abandoned on shutdown");
                        PreloadOutcome::Abandoned
                    }
                };
                metrics::record_preload(outcome.label());
                outcome
            });

            tasks.push((path, task));
        }

        tracing::info!(routes = tasks.len(), strategy = ?self.strategy, "Preloading started");
        PreloadHandle { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathMatch;
    use crate::app::CustomersComponent;
    use crate::module::{FeatureModule, StaticModuleLoader};
    use crate::preloading::strategy::PreloadFuture;
    use crate::routing::Route;
    use std::time::Duration;

    #[derive(Debug)]
    struct Exploding;

    impl PreloadingStrategy for Exploding {
        fn preload(&self, route: &Route, _load: LoadAction) -> PreloadFuture {
            let path = route.path().to_string();
            Box::pin(async move {
                assert!(path.is_empty(), "cannot decide on '{path}'");
                Ok(None)
            })
        }
    }

    #[tokio::test]
    async fn test_panicked_task_reported() {
        let loader = Arc::new(StaticModuleLoader::new(
            FeatureModule::new("CustomersModule", Arc::new(CustomersComponent::default())),
            Duration::from_millis(1),
        ));
        let table = Arc::new(RouteTable::new(vec![
            Route::lazy("customers", loader.clone()),
            Route::redirect("", "").with_path_match(PathMatch::Full),
        ]));
        let (events, _) = tokio::sync::broadcast::channel(8);
        let modules = Arc::new(ModuleCache::new(table.len(), events));
        let shutdown = Shutdown::new();

        let handle = Preloader::new(table, modules, Arc::new(Exploding)).start(&shutdown);
        assert_eq!(handle.len(), 1);

        let reports = handle.join().await;
        assert_eq!(reports[0].outcome, PreloadOutcome::Panicked);
        assert_eq!(loader.load_count(), 0);
    }
}
