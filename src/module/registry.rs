//! Name → loader lookup used when building the route table from config.

use std::collections::HashMap;
use std::sync::Arc;

use crate::module::loader::ModuleLoader;

#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    loaders: HashMap<String, Arc<dyn ModuleLoader>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loader under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, loader: Arc<dyn ModuleLoader>) -> &mut Self {
        self.loaders.insert(name.into(), loader);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ModuleLoader>> {
        self.loaders.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}
