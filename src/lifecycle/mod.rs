//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build route table → Initial navigation → Start preloading
//!
//! Shutdown (shutdown.rs):
//!     trigger() → outstanding preloads abandoned → Application dropped
//! ```
//!
//! # Design Decisions
//! - Ordered startup: preloading begins only after the initial navigation
//! - Configuration and table errors are fatal; a failed initial navigation is not

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{Application, StartupError};
