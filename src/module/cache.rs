//! Per-route module cache.
//!
//! # Responsibilities
//! - Hold the loaded module of every lazy route
//! - Collapse concurrent loads of the same route into one
//! - Publish RouteConfigLoadStart/End events
//!
//! # Design Decisions
//! - One `OnceCell` per route, indexed by `RouteId`
//! - Failed loads leave the cell empty

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, OnceCell};

use crate::module::feature::FeatureModule;
use crate::module::loader::{LoadError, ModuleLoader};
use crate::navigation::RouterEvent;
use crate::observability::metrics;
use crate::routing::RouteId;

#[derive(Debug)]
pub struct ModuleCache {
    slots: Vec<OnceCell<Arc<FeatureModule>>>,
    events: broadcast::Sender<RouterEvent>,
}

impl ModuleCache {
    /// Create a cache with one empty slot per route.
    pub fn new(routes: usize, events: broadcast::Sender<RouterEvent>) -> Self {
        Self {
            slots: (0..routes).map(|_| OnceCell::new()).collect(),
            events,
        }
    }

    /// The loaded module for `route`, if any.
    pub fn get(&self, route: RouteId) -> Option<Arc<FeatureModule>> {
        self.slots.get(route.0).and_then(|slot| slot.get().cloned())
    }

    /// Load the module for `route`, or return the cached one.
    pub async fn load(
        &self,
        route: RouteId,
        path: &str,
        loader: &Arc<dyn ModuleLoader>,
    ) -> Result<Arc<FeatureModule>, LoadError> {
        let slot = self.slots.get(route.0).ok_or(LoadError::NoSlot(route.0))?;

        let module = slot
            .get_or_try_init(|| async move {
                let started = Instant::now();
                let _ = self.events.send(RouterEvent::RouteConfigLoadStart { path: path.to_string() });
                tracing::info!(path, module = loader.module_name(), "Loading feature module");

                match loader.load().await {
                    Ok(module) => {
                        metrics::record_module_load(loader.module_name(), "loaded", started);
                        let _ = self.events.send(RouterEvent::RouteConfigLoadEnd { path: path.to_string() });
                        Ok(module)
                    }
                    Err(e) => {
                        metrics::record_module_load(loader.module_name(), "failed", started);
                        tracing::warn!(path, error = %e, "Feature module failed to load");
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(module.clone())
    }
}
