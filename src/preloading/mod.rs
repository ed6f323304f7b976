//! Preloading subsystem.
//!
//! # Data Flow
//! ```text
//! After the initial navigation (lifecycle::startup):
//!     RouteTable (lazy routes only)
//!     → preloader.rs (one task per route, spawned together)
//!     → strategy.rs (PreloadingStrategy::preload(route, load))
//!         → Load: LoadAction invoked → module::ModuleCache
//!         → Skip: ready Ok(None), load never invoked
//!     → PreloadReport per route
//! ```
//!
//! # Design Decisions
//! - Each route is decided exactly once per application lifetime
//! - Tasks are fire-and-forget; no ordering between routes
//! - Failures are logged and reported, never retried
//! - Shutdown abandons outstanding preloads

pub mod preloader;
pub mod strategy;

pub use preloader::{PreloadHandle, PreloadOutcome, PreloadReport, Preloader};
pub use strategy::{
    strategy_for, FlagPreloading, LoadAction, NoPreloading, PreloadAllModules, PreloadFuture,
    PreloadingStrategy,
};
