//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, checked in order (first match wins).
    pub routes: Vec<RouteConfig>,

    /// Preloading strategy selection.
    pub preloading: PreloadingConfig,

    /// Navigation behaviour.
    pub navigation: NavigationConfig,

    /// Simulated latencies for the demo modules and resolvers.
    pub simulation: SimulationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// One entry of the route table.
///
/// Unknown keys are rejected so a misspelled option (`preloda`) fails at load
/// time instead of being silently ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Path relative to the root, without a leading slash (e.g. "orders").
    pub path: String,

    /// Name of the lazily loaded feature module, looked up in the module registry.
    #[serde(default)]
    pub module: Option<String>,

    /// Redirect target. Absolute when it starts with `/`.
    #[serde(default)]
    pub redirect_to: Option<String>,

    /// How the path is compared against the URL.
    #[serde(default)]
    pub path_match: PathMatch,

    /// Eagerly load the module after bootstrap (flagged strategy only).
    #[serde(default)]
    pub preload: bool,

    /// Resolver bindings: snapshot data key -> resolver name.
    #[serde(default)]
    pub resolve: BTreeMap<String, String>,
}

impl RouteConfig {
    /// Lazy route config for the given module.
    pub fn lazy(path: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            module: Some(module.into()),
            redirect_to: None,
            path_match: PathMatch::default(),
            preload: false,
            resolve: BTreeMap::new(),
        }
    }

    /// Redirect route config.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            module: None,
            redirect_to: Some(to.into()),
            path_match: PathMatch::default(),
            preload: false,
            resolve: BTreeMap::new(),
        }
    }
}

/// Path matching mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    /// The route path must match the leading segments of the URL.
    #[default]
    Prefix,
    /// The route path must match the whole URL.
    Full,
}

/// Preloading configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PreloadingConfig {
    pub strategy: PreloadingMode,
}

/// Which preloading strategy the application installs.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreloadingMode {
    /// Preload only routes with `preload = true`.
    #[default]
    Flagged,
    /// Preload every lazy route.
    All,
    /// Never preload.
    None,
}

/// Navigation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// URL of the initial navigation performed during bootstrap.
    pub initial_url: String,

    /// Maximum number of redirects applied to a single navigation.
    pub max_redirects: u32,

    /// Capacity of the router event broadcast channel.
    pub event_capacity: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_url: "/".to_string(),
            max_redirects: 8,
            event_capacity: 64,
        }
    }
}

/// Simulated latencies used by the demo feature modules and data resolver.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delay before the data resolver yields its value, in milliseconds.
    pub fetch_delay_ms: u64,

    /// Time taken to "download" a feature module, in milliseconds.
    pub module_load_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 3000,
            module_load_ms: 100,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
