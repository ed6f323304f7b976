//! Metrics collection.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by outcome (end, cancel, error)
//! - `router_navigation_duration_seconds` (histogram): start to commit/abort
//! - `router_module_loads_total` (counter): module loads by module, outcome
//! - `router_module_load_duration_seconds` (histogram): per module
//! - `router_resolve_duration_seconds` (histogram): per resolver, outcome
//! - `router_preload_total` (counter): preload decisions by outcome

use std::time::Instant;

use metrics::{counter, histogram};

pub fn record_navigation(outcome: &'static str, started: Instant) {
    counter!("router_navigations_total", "outcome" => outcome).increment(1);
    histogram!("router_navigation_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}

pub fn record_module_load(module: &str, outcome: &'static str, started: Instant) {
    let module = module.to_string();
    counter!("router_module_loads_total", "module" => module.clone(), "outcome" => outcome).increment(1);
    histogram!("router_module_load_duration_seconds", "module" => module)
        .record(started.elapsed().as_secs_f64());
}

pub fn record_resolve(resolver: &str, ok: bool, started: Instant) {
    let outcome = if ok { "ok" } else { "error" };
    histogram!(
        "router_resolve_duration_seconds",
        "resolver" => resolver.to_string(),
        "outcome" => outcome
    )
    .record(started.elapsed().as_secs_f64());
}

pub fn record_preload(outcome: &'static str) {
    counter!("router_preload_total", "outcome" => outcome).increment(1);
}
