//! Customers feature.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::module::RouteComponent;
use crate::navigation::RouteSnapshot;

#[derive(Debug, Default)]
pub struct CustomersComponent {
    inits: AtomicUsize,
}

impl CustomersComponent {
    /// Number of activations so far.
    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }
}

impl RouteComponent for CustomersComponent {
    fn selector(&self) -> &str {
        "app-customers"
    }

    fn on_init(&self, snapshot: &RouteSnapshot) {
        self.inits.fetch_add(1, Ordering::SeqCst);
        tracing::info!(url = %snapshot.url, "Customers component initialised");
    }
}
