//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters and histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → any `metrics` recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (navigation_id, path, module) on every event
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
