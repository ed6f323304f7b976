//! Orders feature. Reads the value resolved under `data`.

use tokio::sync::watch;

use crate::module::RouteComponent;
use crate::navigation::RouteSnapshot;
use crate::resolve::ResolvedValue;

#[derive(Debug)]
pub struct OrdersComponent {
    resolved: watch::Sender<Option<ResolvedValue>>,
}

impl OrdersComponent {
    pub fn new() -> Self {
        let (resolved, _) = watch::channel(None);
        Self { resolved }
    }

    /// Value read during the last activation.
    pub fn resolved(&self) -> Option<ResolvedValue> {
        self.resolved.borrow().clone()
    }
}

impl Default for OrdersComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteComponent for OrdersComponent {
    fn selector(&self) -> &str {
        "app-orders"
    }

    fn on_init(&self, snapshot: &RouteSnapshot) {
        let data = snapshot.data("data").cloned();
        tracing::info!(resolved = ?data, "Orders component initialised");
        self.resolved.send_replace(data);
    }
}
