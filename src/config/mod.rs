//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → routing::RouteTable::from_config (name lookups)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::NavigationConfig;
pub use schema::ObservabilityConfig;
pub use schema::PathMatch;
pub use schema::PreloadingMode;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
pub use schema::SimulationConfig;
