//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[] + ModuleRegistry + ResolverRegistry
//!     → table.rs (resolve names, parse path segments)
//!     → Freeze as immutable RouteTable
//!
//! Navigation (per URL):
//!     url
//!     → matcher.rs (UrlTree: segments, query, fragment)
//!     → table.rs (first matching route)
//!     → Return: RouteMatch or NoMatch
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (config order)
//! - Typed route options instead of an open metadata map

pub mod matcher;
pub mod route;
pub mod table;

pub use matcher::{RouteMatch, UrlTree};
pub use route::{ResolverBinding, Route, RouteId, RouteOptions, RouteTarget, Segment};
pub use table::{RouteTable, TableError};
