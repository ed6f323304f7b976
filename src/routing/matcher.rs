//! Route matching logic.
//!
//! # Responsibilities
//! - Split a URL into path segments, query and fragment
//! - Match route segments against URL segments (static or `:param`)
//! - Apply `prefix` / `full` path matching
//! - Rewrite URLs for redirects
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Empty route path with prefix matching matches every URL
//! - No percent-decoding; segments are compared verbatim

use std::collections::BTreeMap;

use crate::config::PathMatch;
use crate::routing::route::{Route, RouteId, Segment};

/// A parsed navigation URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlTree {
    pub segments: Vec<String>,
    pub query: BTreeMap<String, String>,
    pub fragment: Option<String>,
}

impl UrlTree {
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };

        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Self {
            segments,
            query,
            fragment,
        }
    }

    /// Absolute path, without query or fragment.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// The URL produced by applying redirect `to` to a match that consumed
    /// `consumed` segments and captured `params`.
    ///
    /// Absolute targets replace the whole path, relative targets replace only
    /// the consumed segments. `:name` segments are substituted from `params`.
    pub fn redirect(&self, to: &str, consumed: usize, params: &BTreeMap<String, String>) -> UrlTree {
        let target = UrlTree::parse(to);
        let substituted = target.segments.into_iter().map(|segment| {
            let value = segment
                .strip_prefix(':')
                .and_then(|name| params.get(name))
                .cloned();
            value.unwrap_or(segment)
        });

        let segments = if to.starts_with('/') {
            substituted.collect()
        } else {
            substituted
                .chain(self.segments.iter().skip(consumed).cloned())
                .collect()
        };

        let query = if target.query.is_empty() {
            self.query.clone()
        } else {
            target.query
        };

        UrlTree {
            segments,
            query,
            fragment: target.fragment.or_else(|| self.fragment.clone()),
        }
    }
}

impl std::fmt::Display for UrlTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, k, v)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Result of matching a URL against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteId,
    /// Number of URL segments consumed by the route path.
    pub consumed: usize,
    pub params: BTreeMap<String, String>,
    /// Segments left for the feature module's own routes.
    pub remaining: Vec<String>,
}

/// Match a single route against URL segments.
pub fn match_route(id: RouteId, route: &Route, segments: &[String]) -> Option<RouteMatch> {
    let pattern = route.segments();
    if pattern.len() > segments.len() {
        return None;
    }
    if route.path_match() == PathMatch::Full && pattern.len() != segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        match expected {
            Segment::Static(s) if s == actual => {}
            Segment::Static(_) => return None,
            Segment::Param(name) => {
                params.insert(name.clone(), actual.clone());
            }
        }
    }

    Some(RouteMatch {
        route: id,
        consumed: pattern.len(),
        params,
        remaining: segments[pattern.len()..].to_vec(),
    })
}
