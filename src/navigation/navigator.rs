//! The navigation pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::{broadcast, watch};

use crate::config::NavigationConfig;
use crate::module::{LoadError, ModuleCache};
use crate::navigation::events::RouterEvent;
use crate::navigation::snapshot::RouteSnapshot;
use crate::observability::metrics;
use crate::resolve::{resolve_all, ResolveContext, ResolveFailure, ResolvedData};
use crate::routing::{Route, RouteMatch, RouteTable, UrlTree};

/// Why a navigation did not commit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route matches '{url}'")]
    NoMatch { url: String },

    #[error("more than {limit} redirects while navigating to '{url}'")]
    RedirectLoop { url: String, limit: u32 },

    #[error(transparent)]
    ModuleLoad(#[from] LoadError),

    #[error(transparent)]
    Resolve(#[from] ResolveFailure),

    #[error("navigation {id} to '{url}' was superseded by navigation {by}")]
    Cancelled { id: u64, url: String, by: u64 },
}

/// Drives navigations against an immutable route table.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    modules: Arc<ModuleCache>,
    config: NavigationConfig,
    events: broadcast::Sender<RouterEvent>,
    current: watch::Sender<Option<Arc<RouteSnapshot>>>,
    latest: watch::Sender<u64>,
    next_id: AtomicU64,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, config: NavigationConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        let modules = Arc::new(ModuleCache::new(table.len(), events.clone()));
        let (current, _) = watch::channel(None);
        let (latest, _) = watch::channel(0);

        Self {
            table,
            modules,
            config,
            events,
            current,
            latest,
            next_id: AtomicU64::new(0),
        }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// Module cache shared with the preloader.
    pub fn module_cache(&self) -> Arc<ModuleCache> {
        self.modules.clone()
    }

    /// Subscribe to router events.
    pub fn subscribe(&self) -> broadcast::Receiver<RouterEvent> {
        self.events.subscribe()
    }

    /// The currently active route, if any navigation has committed.
    pub fn current(&self) -> Option<Arc<RouteSnapshot>> {
        self.current.borrow().clone()
    }

    /// Watch the active route.
    pub fn watch(&self) -> watch::Receiver<Option<Arc<RouteSnapshot>>> {
        self.current.subscribe()
    }

    /// Navigate to `url`.
    ///
    /// On success the new snapshot is committed and the route's component
    /// initialised. On failure the current route is left untouched.
    pub async fn navigate(&self, url: &str) -> Result<Arc<RouteSnapshot>, NavigationError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest.send_replace(id);
        let started = Instant::now();

        tracing::debug!(navigation_id = id, url, "Navigation started");
        self.emit(RouterEvent::NavigationStart { id, url: url.to_string() });

        let result = self.run(id, url).await;
        match &result {
            Ok(snapshot) => {
                metrics::record_navigation("end", started);
                tracing::info!(
                    navigation_id = id,
                    url = %snapshot.url,
                    route = %snapshot.route_path,
                    "Navigation completed"
                );
            }
            Err(e @ NavigationError::Cancelled { .. }) => {
                metrics::record_navigation("cancel", started);
                tracing::info!(navigation_id = id, url, reason = %e, "Navigation cancelled");
                self.emit(RouterEvent::NavigationCancel {
                    id,
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                metrics::record_navigation("error", started);
                tracing::warn!(navigation_id = id, url, error = %e, "Navigation failed");
                self.emit(RouterEvent::NavigationError {
                    id,
                    url: url.to_string(),
                    error: e.to_string(),
                });
            }
        }
        result
    }

    async fn run(&self, id: u64, url: &str) -> Result<Arc<RouteSnapshot>, NavigationError> {
        let (tree, matched) = self.recognize(url)?;
        let route = self
            .table
            .get(matched.route)
            .ok_or_else(|| NavigationError::NoMatch { url: tree.path() })?;
        let url_after_redirects = tree.to_string();

        let module = match route.loader() {
            Some(loader) => Some(self.modules.load(matched.route, route.path(), loader).await?),
            None => None,
        };
        self.ensure_latest(id, url)?;

        let data = if route.resolvers().is_empty() {
            ResolvedData::new()
        } else {
            self.emit(RouterEvent::ResolveStart {
                id,
                url: url_after_redirects.clone(),
            });
            let ctx = ResolveContext {
                navigation_id: id,
                url: url_after_redirects.clone(),
                route_path: route.path().to_string(),
                params: matched.params.clone(),
                query: tree.query.clone(),
            };

            let mut latest = self.latest.subscribe();
            let data = tokio::select! {
                result = resolve_all(route.resolvers(), &ctx) => result?,
                by = superseded(&mut latest, id) => {
                    return Err(NavigationError::Cancelled { id, url: url.to_string(), by });
                }
            };

            self.emit(RouterEvent::ResolveEnd {
                id,
                url: url_after_redirects.clone(),
            });
            data
        };
        self.ensure_latest(id, url)?;

        let snapshot = Arc::new(RouteSnapshot {
            navigation_id: id,
            url: url_after_redirects.clone(),
            route_path: route.path().to_string(),
            params: matched.params,
            query: tree.query,
            data,
            remaining: matched.remaining,
            module: module.as_ref().map(|m| m.name().to_string()),
        });

        self.current.send_replace(Some(snapshot.clone()));
        self.emit(RouterEvent::NavigationEnd {
            id,
            url: url.to_string(),
            url_after_redirects,
        });

        if let Some(module) = module {
            let component = module.component();
            tracing::debug!(selector = component.selector(), "Activating component");
            component.on_init(&snapshot);
        }
        Ok(snapshot)
    }

    /// Match `url`, following redirects until a non-redirect route matches
    /// or a redirect points back at its own source.
    fn recognize(&self, url: &str) -> Result<(UrlTree, RouteMatch), NavigationError> {
        let mut tree = UrlTree::parse(url);
        let mut redirects = 0;

        loop {
            let matched = self
                .table
                .match_url(&tree)
                .ok_or_else(|| NavigationError::NoMatch { url: tree.path() })?;

            let Some(to) = self.table.get(matched.route).and_then(Route::redirect_to) else {
                return Ok((tree, matched));
            };

            let next = tree.redirect(to, matched.consumed, &matched.params);
            if next.segments == tree.segments {
                tracing::debug!(url = %tree, "Redirect targets its own source, settling");
                return Ok((tree, matched));
            }

            redirects += 1;
            if redirects > self.config.max_redirects {
                return Err(NavigationError::RedirectLoop {
                    url: url.to_string(),
                    limit: self.config.max_redirects,
                });
            }

            tracing::debug!(from = %tree, to = %next, "Applying redirect");
            tree = next;
        }
    }

    fn ensure_latest(&self, id: u64, url: &str) -> Result<(), NavigationError> {
        let latest = *self.latest.borrow();
        if latest == id {
            Ok(())
        } else {
            Err(NavigationError::Cancelled {
                id,
                url: url.to_string(),
                by: latest,
            })
        }
    }

    fn emit(&self, event: RouterEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

/// Resolves with the id of the navigation that replaced `id`.
async fn superseded(latest: &mut watch::Receiver<u64>, id: u64) -> u64 {
    let newer = latest.wait_for(|current| *current != id).await.map(|current| *current);
    match newer {
        Ok(newer) => newer,
        Err(_) => std::future::pending().await,
    }
}
