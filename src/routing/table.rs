//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Resolve module and resolver names from configuration
//! - Look up the first route matching a URL
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(n) scan in config order (acceptable for typical route counts)
//! - Explicit no-match rather than a silent default

use thiserror::Error;

use crate::config::RouteConfig;
use crate::module::ModuleRegistry;
use crate::resolve::ResolverRegistry;
use crate::routing::matcher::{match_route, RouteMatch, UrlTree};
use crate::routing::route::{Route, RouteId};

/// Errors raised while building the table from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("route '{path}' references unknown module '{module}'")]
    UnknownModule { path: String, module: String },

    #[error("route '{path}' binds '{key}' to unknown resolver '{resolver}'")]
    UnknownResolver {
        path: String,
        key: String,
        resolver: String,
    },

    #[error("route '{path}' has no target")]
    MissingTarget { path: String },

    #[error("redirect route '{path}' cannot bind resolvers")]
    ResolveOnRedirect { path: String },
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Build the table from (already validated) route configuration.
    pub fn from_config(
        config: &[RouteConfig],
        modules: &ModuleRegistry,
        resolvers: &ResolverRegistry,
    ) -> Result<Self, TableError> {
        let mut routes = Vec::with_capacity(config.len());

        for route_config in config {
            let path = route_config.path.clone();

            let mut route = match (&route_config.module, &route_config.redirect_to) {
                (Some(module), _) => {
                    let loader = modules.get(module).ok_or_else(|| TableError::UnknownModule {
                        path: path.clone(),
                        module: module.clone(),
                    })?;
                    Route::lazy(path.clone(), loader)
                }
                (None, Some(to)) => Route::redirect(path.clone(), to.clone()),
                (None, None) => return Err(TableError::MissingTarget { path }),
            };

            if route.redirect_to().is_some() && !route_config.resolve.is_empty() {
                return Err(TableError::ResolveOnRedirect { path });
            }

            for (key, name) in &route_config.resolve {
                let resolver = resolvers.get(name).ok_or_else(|| TableError::UnknownResolver {
                    path: path.clone(),
                    key: key.clone(),
                    resolver: name.clone(),
                })?;
                route = route.with_resolver(key.clone(), name.clone(), resolver);
            }

            routes.push(
                route
                    .with_preload(route_config.preload)
                    .with_path_match(route_config.path_match),
            );
        }

        tracing::info!(routes = routes.len(), "Route table compiled");
        Ok(Self { routes })
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.routes.iter().enumerate().map(|(i, r)| (RouteId(i), r))
    }

    /// First route matching `url`, in table order.
    pub fn match_url(&self, url: &UrlTree) -> Option<RouteMatch> {
        self.iter()
            .find_map(|(id, route)| match_route(id, route, &url.segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CustomersComponent;
    use crate::config::PathMatch;
    use crate::module::{FeatureModule, StaticModuleLoader};
    use crate::resolve::{ResolveContext, ResolveFuture, Resolver};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug)]
    struct Constant;

    impl Resolver for Constant {
        fn resolve(&self, _ctx: ResolveContext) -> ResolveFuture {
            Box::pin(async { Ok(serde_json::json!(1)) })
        }
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            Route::redirect("orders", "/a"),
            Route::redirect("orders/:id", "/b"),
            Route::redirect("", "/c").with_path_match(PathMatch::Full),
        ]);

        let m = table.match_url(&UrlTree::parse("/orders/1")).unwrap();
        assert_eq!(m.route, RouteId(0));

        let m = table.match_url(&UrlTree::parse("/")).unwrap();
        assert_eq!(m.route, RouteId(2));

        assert!(table.match_url(&UrlTree::parse("/customers")).is_none());
    }

    #[test]
    fn test_from_config_unknown_names() {
        let modules = ModuleRegistry::new();
        let mut resolvers = ResolverRegistry::new();
        resolvers.register("Constant", Arc::new(Constant));

        let err = RouteTable::from_config(&[RouteConfig::lazy("orders", "orders")], &modules, &resolvers)
            .unwrap_err();
        assert_eq!(
            err,
            TableError::UnknownModule {
                path: "orders".into(),
                module: "orders".into()
            }
        );

        let mut modules = ModuleRegistry::new();
        modules.register("orders", customers_loader());
        let mut orders = RouteConfig::lazy("orders", "orders");
        orders.resolve.insert("data".into(), "Missing".into());
        let err = RouteTable::from_config(&[orders], &modules, &resolvers).unwrap_err();
        assert!(matches!(err, TableError::UnknownResolver { ref resolver, .. } if resolver == "Missing"));
    }

    fn customers_loader() -> Arc<StaticModuleLoader> {
        Arc::new(StaticModuleLoader::new(
            FeatureModule::new("CustomersModule", Arc::new(CustomersComponent::default())),
            Duration::from_millis(10),
        ))
    }

    #[test]
    fn test_from_config_carries_options() {
        let mut modules = ModuleRegistry::new();
        modules.register("customers", customers_loader());
        let mut resolvers = ResolverRegistry::new();
        resolvers.register("Constant", Arc::new(Constant));

        let mut customers = RouteConfig::lazy("customers", "customers");
        customers.preload = true;
        customers.resolve.insert("value".into(), "Constant".into());
        let mut root = RouteConfig::redirect("", "customers");
        root.path_match = PathMatch::Full;

        let table = RouteTable::from_config(&[customers, root], &modules, &resolvers).unwrap();
        let route = table.get(RouteId(0)).unwrap();
        assert!(route.options().preload);
        assert_eq!(route.resolvers().get("value").map(|b| b.name.as_str()), Some("Constant"));
        assert_eq!(table.get(RouteId(1)).unwrap().path_match(), PathMatch::Full);
    }

    #[test]
    fn test_from_config_rejects_resolver_on_redirect() {
        let mut resolvers = ResolverRegistry::new();
        resolvers.register("Constant", Arc::new(Constant));
        let mut root = RouteConfig::redirect("", "");
        root.path_match = PathMatch::Full;
        root.resolve.insert("value".into(), "Constant".into());

        let err = RouteTable::from_config(&[root], &ModuleRegistry::new(), &resolvers).unwrap_err();
        assert_eq!(err, TableError::ResolveOnRedirect { path: String::new() });
    }
}
