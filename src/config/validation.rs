//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject routes that can never be reached or never terminate
//! - Validate value ranges (redirect budget, channel capacity)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Name lookups (modules, resolvers) happen later, when the table is built

use thiserror::Error;

use crate::config::schema::{PathMatch, RouterConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} ('{path}') has neither a module nor a redirect target")]
    MissingTarget { index: usize, path: String },

    #[error("route #{index} ('{path}') has both a module and a redirect target")]
    ConflictingTarget { index: usize, path: String },

    #[error("route #{index} path '{path}' must not start with '/'")]
    LeadingSlash { index: usize, path: String },

    #[error("route #{index} ('{path}') duplicates route #{first} and can never match")]
    Unreachable { index: usize, first: usize, path: String },

    #[error("redirect route #{index} ('{path}') cannot be preloaded")]
    PreloadOnRedirect { index: usize, path: String },

    #[error("redirect route #{index} ('{path}') cannot bind resolvers")]
    ResolveOnRedirect { index: usize, path: String },

    #[error("route #{index} ('{path}') has an empty resolver binding")]
    EmptyBinding { index: usize, path: String },

    #[error("route #{index}: empty path redirect with prefix matching matches every URL; use path_match = \"full\"")]
    EmptyPrefixRedirect { index: usize },

    #[error("navigation.max_redirects must be at least 1")]
    ZeroRedirects,

    #[error("navigation.event_capacity must be at least 1")]
    ZeroEventCapacity,
}

/// Validate the configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: Vec<(&str, PathMatch)> = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        let path = route.path.clone();

        match (&route.module, &route.redirect_to) {
            (None, None) => errors.push(ValidationError::MissingTarget { index, path: path.clone() }),
            (Some(_), Some(_)) => errors.push(ValidationError::ConflictingTarget { index, path: path.clone() }),
            _ => {}
        }

        if route.path.starts_with('/') {
            errors.push(ValidationError::LeadingSlash { index, path: path.clone() });
        }

        let key = (route.path.as_str(), route.path_match);
        if let Some(first) = seen.iter().position(|k| *k == key) {
            errors.push(ValidationError::Unreachable { index, first, path: path.clone() });
        }
        seen.push(key);

        if route.redirect_to.is_some() {
            if route.preload {
                errors.push(ValidationError::PreloadOnRedirect { index, path: path.clone() });
            }
            if !route.resolve.is_empty() {
                errors.push(ValidationError::ResolveOnRedirect { index, path: path.clone() });
            }
            if route.path.is_empty() && route.path_match == PathMatch::Prefix {
                errors.push(ValidationError::EmptyPrefixRedirect { index });
            }
        }

        if route
            .resolve
            .iter()
            .any(|(key, name)| key.trim().is_empty() || name.trim().is_empty())
        {
            errors.push(ValidationError::EmptyBinding { index, path });
        }
    }

    if config.navigation.max_redirects == 0 {
        errors.push(ValidationError::ZeroRedirects);
    }
    if config.navigation.event_capacity == 0 {
        errors.push(ValidationError::ZeroEventCapacity);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
