//! Preloading strategies.

use std::fmt;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture};

use crate::config::PreloadingMode;
use crate::module::{FeatureModule, LoadError, LoadFuture};
use crate::routing::Route;

/// Outcome of a preload decision: `Some` when the module was loaded.
pub type PreloadFuture = BoxFuture<'static, Result<Option<Arc<FeatureModule>>, LoadError>>;

/// Deferred, consume-once action that starts loading a route's module.
pub struct LoadAction {
    start: Box<dyn FnOnce() -> LoadFuture + Send>,
}

impl LoadAction {
    pub fn new<F>(start: F) -> Self
    where
        F: FnOnce() -> LoadFuture + Send + 'static,
    {
        Self {
            start: Box::new(start),
        }
    }

    /// Start the load.
    pub fn invoke(self) -> LoadFuture {
        (self.start)()
    }
}

impl fmt::Debug for LoadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadAction").finish_non_exhaustive()
    }
}

/// Decides, once per lazy route, whether to load it right after bootstrap.
pub trait PreloadingStrategy: Send + Sync + fmt::Debug {
    fn preload(&self, route: &Route, load: LoadAction) -> PreloadFuture;
}

fn start(load: LoadAction) -> PreloadFuture {
    let fut = load.invoke();
    Box::pin(async move { fut.await.map(Some) })
}

fn skip() -> PreloadFuture {
    Box::pin(future::ready(Ok(None)))
}

/// Preloads routes whose options set `preload`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagPreloading;

impl PreloadingStrategy for FlagPreloading {
    fn preload(&self, route: &Route, load: LoadAction) -> PreloadFuture {
        if route.options().preload {
            start(load)
        } else {
            skip()
        }
    }
}

/// Preloads every lazy route.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreloadAllModules;

impl PreloadingStrategy for PreloadAllModules {
    fn preload(&self, _route: &Route, load: LoadAction) -> PreloadFuture {
        start(load)
    }
}

/// Never preloads; modules load on first navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreloading;

impl PreloadingStrategy for NoPreloading {
    fn preload(&self, _route: &Route, _load: LoadAction) -> PreloadFuture {
        skip()
    }
}

/// Strategy instance for a configured mode.
pub fn strategy_for(mode: PreloadingMode) -> Arc<dyn PreloadingStrategy> {
    match mode {
        PreloadingMode::Flagged => Arc::new(FlagPreloading),
        PreloadingMode::All => Arc::new(PreloadAllModules),
        PreloadingMode::None => Arc::new(NoPreloading),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::module::{ModuleLoader, RouteComponent};
    use crate::navigation::RouteSnapshot;

    #[derive(Debug)]
    struct Blank;

    impl RouteComponent for Blank {
        fn selector(&self) -> &str {
            "app-blank"
        }

        fn on_init(&self, _snapshot: &RouteSnapshot) {}
    }

    #[derive(Debug)]
    struct Unused;

    impl ModuleLoader for Unused {
        fn module_name(&self) -> &str {
            "Unused"
        }

        fn load(&self) -> LoadFuture {
            Box::pin(async {
                Err(LoadError::Failed {
                    module: "Unused".into(),
                    reason: "not reachable from the action".into(),
                })
            })
        }
    }

    fn route(preload: bool) -> Route {
        Route::lazy("customers", Arc::new(Unused)).with_preload(preload)
    }

    fn counting_action(invoked: Arc<AtomicUsize>, result: Result<(), LoadError>) -> LoadAction {
        LoadAction::new(move || {
            invoked.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                result.map(|_| Arc::new(FeatureModule::new("CustomersModule", Arc::new(Blank))))
            })
        })
    }

    #[tokio::test]
    async fn test_flagged_route_loads_once() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let result = FlagPreloading
            .preload(&route(true), counting_action(invoked.clone(), Ok(())))
            .await
            .unwrap();

        assert_eq!(result.map(|m| m.name().to_string()).as_deref(), Some("CustomersModule"));
        assert_eq!(invoked.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unflagged_route_skipped() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let result = FlagPreloading
            .preload(&route(false), counting_action(invoked.clone(), Ok(())))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(invoked.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_failure_propagated() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let failure = LoadError::Failed {
            module: "CustomersModule".into(),
            reason: "offline".into(),
        };
        let err = FlagPreloading
            .preload(&route(true), counting_action(invoked.clone(), Err(failure.clone())))
            .await
            .unwrap_err();

        assert_eq!(err, failure);
        assert_eq!(invoked.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_and_none_strategies() {
        let invoked = Arc::new(AtomicUsize::new(0));

        let all = strategy_for(PreloadingMode::All);
        assert!(all
            .preload(&route(false), counting_action(invoked.clone(), Ok(())))
            .await
            .unwrap()
            .is_some());

        let none = strategy_for(PreloadingMode::None);
        assert!(none
            .preload(&route(true), counting_action(invoked.clone(), Ok(())))
            .await
            .unwrap()
            .is_none());

        assert_eq!(invoked.load(Ordering::SeqCst), 1);
    }
}
