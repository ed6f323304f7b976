//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(url)
//!     → NavigationStart
//!     → recognize: match table, apply redirects (loop guard)
//!     → module::ModuleCache (lazy routes; RouteConfigLoadStart/End)
//!     → resolve::resolve_all (ResolveStart/End; failure aborts)
//!     → commit RouteSnapshot (watch channel)
//!     → NavigationEnd
//!     → RouteComponent::on_init(&snapshot)
//! ```
//!
//! # Design Decisions
//! - A newer navigation supersedes an in-flight one (NavigationCancel)
//! - Nothing is committed unless every stage succeeded
//! - Events are broadcast; slow subscribers lag instead of blocking navigation

pub mod events;
pub mod navigator;
pub mod snapshot;

pub use events::RouterEvent;
pub use navigator::{NavigationError, Navigator};
pub use snapshot::RouteSnapshot;
