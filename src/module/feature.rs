//! Loaded feature modules and the components they activate.

use std::fmt;
use std::sync::Arc;

use crate::navigation::RouteSnapshot;

/// The component a feature module activates for its route.
///
/// Rendering belongs to the host framework; the router only hands the
/// component the committed snapshot so it can read resolved data.
pub trait RouteComponent: Send + Sync + fmt::Debug {
    /// Component selector, used in logs.
    fn selector(&self) -> &str;

    /// Called once per successful navigation that activates this component.
    fn on_init(&self, snapshot: &RouteSnapshot);
}

/// A lazily loaded unit of the application.
#[derive(Debug, Clone)]
pub struct FeatureModule {
    name: String,
    component: Arc<dyn RouteComponent>,
}

impl FeatureModule {
    pub fn new(name: impl Into<String>, component: Arc<dyn RouteComponent>) -> Self {
        Self {
            name: name.into(),
            component,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &Arc<dyn RouteComponent> {
        &self.component
    }
}
