//! Router lifecycle events.

/// Emitted on the navigator's broadcast channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    NavigationStart {
        id: u64,
        url: String,
    },
    RouteConfigLoadStart {
        path: String,
    },
    RouteConfigLoadEnd {
        path: String,
    },
    ResolveStart {
        id: u64,
        url: String,
    },
    ResolveEnd {
        id: u64,
        url: String,
    },
    NavigationEnd {
        id: u64,
        url: String,
        url_after_redirects: String,
    },
    NavigationCancel {
        id: u64,
        url: String,
        reason: String,
    },
    NavigationError {
        id: u64,
        url: String,
        error: String,
    },
}

impl RouterEvent {
    /// Navigation id, for events tied to one navigation.
    pub fn navigation_id(&self) -> Option<u64> {
        match self {
            RouterEvent::NavigationStart { id, .. }
            | RouterEvent::ResolveStart { id, .. }
            | RouterEvent::ResolveEnd { id, .. }
            | RouterEvent::NavigationEnd { id, .. }
            | RouterEvent::NavigationCancel { id, .. }
            | RouterEvent::NavigationError { id, .. } => Some(*id),
            RouterEvent::RouteConfigLoadStart { .. } | RouterEvent::RouteConfigLoadEnd { .. } => None,
        }
    }
}
