//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and build the route table
//! - Construct the navigator and perform the initial navigation
//! - Start preloading once the initial navigation settled
//!
//! # Design Decisions
//! - Fail fast on configuration and table errors
//! - Strategy, loaders and resolvers are passed in, never global

use std::sync::Arc;

use thiserror::Error;

use crate::config::loader::join_errors;
use crate::config::validation::{validate_config, ValidationError};
use crate::config::{NavigationConfig, RouterConfig};
use crate::lifecycle::shutdown::Shutdown;
use crate::module::ModuleRegistry;
use crate::navigation::{NavigationError, Navigator, RouteSnapshot};
use crate::preloading::{strategy_for, PreloadHandle, Preloader, PreloadingStrategy};
use crate::resolve::ResolverRegistry;
use crate::routing::{RouteTable, TableError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// A bootstrapped application: route table, navigator and preloads.
#[derive(Debug)]
pub struct Application {
    navigator: Arc<Navigator>,
    shutdown: Shutdown,
    preload: Option<PreloadHandle>,
}

impl Application {
    /// Bootstrap from configuration, wiring names through the registries.
    pub async fn bootstrap(
        config: &RouterConfig,
        modules: &ModuleRegistry,
        resolvers: &ResolverRegistry,
    ) -> Result<Self, StartupError> {
        validate_config(config).map_err(StartupError::Validation)?;
        let table = RouteTable::from_config(&config.routes, modules, resolvers)?;

        tracing::info!(
            routes = table.len(),
            strategy = ?config.preloading.strategy,
            initial_url = %config.navigation.initial_url,
            "Configuration loaded"
        );

        Ok(Self::start(table, config.navigation.clone(), strategy_for(config.preloading.strategy)).await)
    }

    /// Start with an already built table and strategy.
    pub async fn start(
        table: RouteTable,
        navigation: NavigationConfig,
        strategy: Arc<dyn PreloadingStrategy>,
    ) -> Self {
        let table = Arc::new(table);
        let initial_url = navigation.initial_url.clone();
        let navigator = Arc::new(Navigator::new(table.clone(), navigation));

        if let Err(e) = navigator.navigate(&initial_url).await {
            tracing::warn!(url = %initial_url, error = %e, "Initial navigation failed");
        }

        let shutdown = Shutdown::new();
        let preload = Preloader::new(table, navigator.module_cache(), strategy).start(&shutdown);

        Self {
            navigator,
            shutdown,
            preload: Some(preload),
        }
    }

    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }

    /// Navigate to `url`.
    pub async fn navigate(&self, url: &str) -> Result<Arc<RouteSnapshot>, NavigationError> {
        self.navigator.navigate(url).await
    }

    /// The preload handle; `None` once taken.
    pub fn take_preload(&mut self) -> Option<PreloadHandle> {
        self.preload.take()
    }

    /// Abandon outstanding preloads.
    pub fn shutdown(&self) {
        tracing::info!("Shutting down router");
        self.shutdown.trigger();
    }
}
