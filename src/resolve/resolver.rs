//! The resolver contract.

use std::collections::BTreeMap;
use std::fmt;

use futures_util::future::BoxFuture;
use thiserror::Error;

/// Opaque value produced by a resolver.
pub type ResolvedValue = serde_json::Value;

/// Single-shot resolve future.
pub type ResolveFuture = BoxFuture<'static, Result<ResolvedValue, ResolveError>>;

/// Errors reported by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The backing fetch failed.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The fetch succeeded but produced nothing usable.
    #[error("no data for '{0}'")]
    NotFound(String),
}

/// Navigation context handed to resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolveContext {
    pub navigation_id: u64,
    /// URL after redirects.
    pub url: String,
    /// Path of the matched route config.
    pub route_path: String,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
}

/// Supplies data a route needs before it may activate.
///
/// `resolve` must return a cold future: no fetch may start before the
/// router polls it.
pub trait Resolver: Send + Sync + fmt::Debug {
    fn resolve(&self, ctx: ResolveContext) -> ResolveFuture;
}
