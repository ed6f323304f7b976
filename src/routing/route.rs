//! Route definitions.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::PathMatch;
use crate::module::ModuleLoader;
use crate::resolve::Resolver;

/// Position of a route in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub usize);

/// One segment of a route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the URL segment (case-sensitive).
    Static(String),
    /// `:name`, captures any URL segment.
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(raw.to_string()),
        }
    }
}

/// What a route does once matched.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    /// Load a feature module and activate its component.
    Lazy(Arc<dyn ModuleLoader>),
    /// Rewrite the URL and match again.
    Redirect(String),
}

/// Recognized per-route options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteOptions {
    /// Load the module right after bootstrap.
    pub preload: bool,
}

/// A resolver bound to a snapshot data key.
#[derive(Debug, Clone)]
pub struct ResolverBinding {
    /// Registry name, used in logs and errors.
    pub name: String,
    pub resolver: Arc<dyn Resolver>,
}

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    segments: Vec<Segment>,
    target: RouteTarget,
    options: RouteOptions,
    path_match: PathMatch,
    resolvers: BTreeMap<String, ResolverBinding>,
}

impl Route {
    fn new(path: String, target: RouteTarget) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();

        Self {
            path,
            segments,
            target,
            options: RouteOptions::default(),
            path_match: PathMatch::default(),
            resolvers: BTreeMap::new(),
        }
    }

    /// A route whose module is loaded on demand.
    pub fn lazy(path: impl Into<String>, loader: Arc<dyn ModuleLoader>) -> Self {
        Self::new(path.into(), RouteTarget::Lazy(loader))
    }

    /// A route that redirects to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(path.into(), RouteTarget::Redirect(to.into()))
    }

    pub fn with_preload(mut self, preload: bool) -> Self {
        self.options.preload = preload;
        self
    }

    pub fn with_path_match(mut self, path_match: PathMatch) -> Self {
        self.path_match = path_match;
        self
    }

    /// Bind `resolver` so its value lands under `key` in the snapshot data.
    ///
    /// Redirect routes never activate, so bindings on them are dropped.
    pub fn with_resolver(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        resolver: Arc<dyn Resolver>,
    ) -> Self {
        let key = key.into();
        if let RouteTarget::Redirect(_) = self.target {
            tracing::warn!(path = %self.path, key = %key, "Ignoring resolver bound to a redirect route");
            return self;
        }
        self.resolvers.insert(
            key,
            ResolverBinding {
                name: name.into(),
                resolver,
            },
        );
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }

    pub fn path_match(&self) -> PathMatch {
        self.path_match
    }

    pub fn resolvers(&self) -> &BTreeMap<String, ResolverBinding> {
        &self.resolvers
    }

    /// The module loader, for lazy routes.
    pub fn loader(&self) -> Option<&Arc<dyn ModuleLoader>> {
        match &self.target {
            RouteTarget::Lazy(loader) => Some(loader),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::Lazy(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_parsed() {
        let route = Route::redirect("orders/:id/items", "/");
        assert_eq!(
            route.segments(),
            &[
                Segment::Static("orders".into()),
                Segment::Param("id".into()),
                Segment::Static("items".into()),
            ]
        );
        assert!(Route::redirect("", "").segments().is_empty());
    }

    #[test]
    fn test_builder_options() {
        let route = Route::redirect("", "home").with_path_match(PathMatch::Full);
        assert_eq!(route.path_match(), PathMatch::Full);
        assert_eq!(route.redirect_to(), Some("home"));
        assert!(route.loader().is_none());
        assert!(!route.options().preload);
    }

    #[test]
    fn test_redirect_drops_resolver_bindings() {
        use crate::app::DataResolver;
        use std::time::Duration;

        let resolver = Arc::new(DataResolver::new(Duration::from_secs(1)));
        let route = Route::redirect("", "").with_resolver("data", "DataResolver", resolver);
        assert!(route.resolvers().is_empty());
    }
}
