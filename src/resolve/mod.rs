//! Route data resolution.
//!
//! # Data Flow
//! ```text
//! Navigation to a route with bindings
//!     → runner.rs (one cold future per binding, polled concurrently)
//!     → resolver.rs (Resolver::resolve, exactly one value or one failure)
//!     → ResolvedData (key → value), attached to the RouteSnapshot
//! ```
//!
//! # Design Decisions
//! - Resolvers return single-shot futures, not streams
//! - Every navigation reruns every bound resolver (no caching)
//! - Any failure aborts the navigation

pub mod registry;
pub mod resolver;
pub mod runner;

pub use registry::ResolverRegistry;
pub use resolver::{ResolveContext, ResolveError, ResolveFuture, ResolvedValue, Resolver};
pub use runner::{resolve_all, ResolveFailure, ResolvedData};
