//! Application wiring: feature modules, resolvers and the default route table.
//!
//! ```text
//! customers  → CustomersModule (preloaded after bootstrap)
//! orders     → OrdersModule    (data resolved by DataResolver before activation)
//! ''         → redirect to ''  (full match, settles on itself)
//! ```

pub mod customers;
pub mod data_resolver;
pub mod orders;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{PathMatch, RouteConfig, RouterConfig, SimulationConfig};
use crate::module::{FeatureModule, ModuleRegistry, StaticModuleLoader};
use crate::resolve::ResolverRegistry;

pub use customers::CustomersComponent;
pub use data_resolver::DataResolver;
pub use orders::OrdersComponent;

/// Registry name of the data resolver.
pub const DATA_RESOLVER: &str = "DataResolver";

/// Everything the default route table refers to, plus handles for
/// inspecting it.
#[derive(Debug)]
pub struct AppServices {
    pub modules: ModuleRegistry,
    pub resolvers: ResolverRegistry,
    pub customers_loader: Arc<StaticModuleLoader>,
    pub orders_loader: Arc<StaticModuleLoader>,
    pub customers: Arc<CustomersComponent>,
    pub orders: Arc<OrdersComponent>,
    pub data_resolver: Arc<DataResolver>,
}

impl AppServices {
    pub fn new(simulation: &SimulationConfig) -> Self {
        let latency = Duration::from_millis(simulation.module_load_ms);

        let customers = Arc::new(CustomersComponent::default());
        let orders = Arc::new(OrdersComponent::new());
        let customers_loader = Arc::new(StaticModuleLoader::new(
            FeatureModule::new("CustomersModule", customers.clone()),
            latency,
        ));
        let orders_loader = Arc::new(StaticModuleLoader::new(
            FeatureModule::new("OrdersModule", orders.clone()),
            latency,
        ));
        let data_resolver = Arc::new(DataResolver::new(Duration::from_millis(simulation.fetch_delay_ms)));

        let mut modules = ModuleRegistry::new();
        modules
            .register("customers", customers_loader.clone())
            .register("orders", orders_loader.clone());

        let mut resolvers = ResolverRegistry::new();
        resolvers.register(DATA_RESOLVER, data_resolver.clone());

        Self {
            modules,
            resolvers,
            customers_loader,
            orders_loader,
            customers,
            orders,
            data_resolver,
        }
    }
}

/// The application's route configuration.
pub fn default_config() -> RouterConfig {
    let mut customers = RouteConfig::lazy("customers", "customers");
    customers.preload = true;

    let mut orders = RouteConfig::lazy("orders", "orders");
    orders.resolve.insert("data".to_string(), DATA_RESOLVER.to_string());

    let mut root = RouteConfig::redirect("", "");
    root.path_match = PathMatch::Full;

    RouterConfig {
        routes: vec![customers, orders, root],
        ..RouterConfig::default()
    }
}
