//! Client-side routing core for a single-page application: lazy feature
//! modules, a preloading policy, and resolvers that gate navigation on data.

pub mod app;
pub mod config;
pub mod lifecycle;
pub mod module;
pub mod navigation;
pub mod observability;
pub mod preloading;
pub mod resolve;
pub mod routing;

pub use config::schema::RouterConfig;
pub use lifecycle::{Application, Shutdown};
pub use navigation::{NavigationError, Navigator, RouteSnapshot, RouterEvent};
pub use routing::{Route, RouteTable};
