//! Feature module subsystem.
//!
//! # Data Flow
//! ```text
//! ModuleRegistry (name → loader, built by the application)
//!     → routing::RouteTable::from_config (binds loaders to lazy routes)
//!
//! Load request (preload task or navigation):
//!     → cache.rs (per-route slot, deduplicates concurrent loads)
//!     → loader.rs (cold load future, runs only when polled)
//!     → FeatureModule (shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Loads are cold: building a load future performs no work
//! - A module is loaded at most once per route on success
//! - A failed load leaves the slot empty so a later navigation can try again

pub mod cache;
pub mod feature;
pub mod loader;
pub mod registry;

pub use cache::ModuleCache;
pub use feature::{FeatureModule, RouteComponent};
pub use loader::{LoadError, LoadFuture, ModuleLoader, StaticModuleLoader};
pub use registry::ModuleRegistry;
