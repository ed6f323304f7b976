//! Committed navigation state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::resolve::{ResolvedData, ResolvedValue};

/// State of the active route after a successful navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSnapshot {
    pub navigation_id: u64,
    /// URL after redirects.
    pub url: String,
    /// Path of the matched route config.
    pub route_path: String,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    /// Resolved values keyed by binding name.
    pub data: ResolvedData,
    /// Segments not consumed by the route path.
    pub remaining: Vec<String>,
    /// Activated feature module, if the route is lazy.
    pub module: Option<String>,
}

impl RouteSnapshot {
    /// Resolved value bound under `key`.
    pub fn data(&self, key: &str) -> Option<&ResolvedValue> {
        self.data.get(key)
    }
}
