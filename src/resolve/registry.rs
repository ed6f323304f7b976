//! Name → resolver lookup used when building the route table from config.

use std::collections::HashMap;
use std::sync::Arc;

use crate::resolve::resolver::Resolver;

#[derive(Debug, Clone, Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, Arc<dyn Resolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, resolver: Arc<dyn Resolver>) -> &mut Self {
        self.resolvers.insert(name.into(), resolver);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Resolver>> {
        self.resolvers.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
