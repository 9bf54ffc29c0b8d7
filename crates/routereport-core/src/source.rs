//! Raw routing-table input types.
//!
//! The host server owns the routing table; this crate only ever sees a
//! read-only snapshot through [`RoutingSource`]. One snapshot entry
//! exists per served address, so multi-listener hosts produce multiple
//! [`ConnectionSnapshot`]s.

/// A read-only view of the host's routing table.
///
/// Implemented by the hosting process (or by test fixtures). The
/// snapshot is taken fresh on every report invocation; the core never
/// caches or mutates it.
pub trait RoutingSource {
    /// All served connections with their registered routes, in
    /// registration order.
    fn connections(&self) -> Vec<ConnectionSnapshot>;

    /// The host-wide default authentication strategies, if any are
    /// configured. Used as the fallback for routes that declare no auth
    /// configuration of their own.
    fn default_strategies(&self) -> Option<Vec<String>>;
}

/// One served address and its registered routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSnapshot {
    /// Base URI of this listener (e.g. `http://localhost:8000`).
    pub uri: String,
    /// Routes in registration order.
    pub routes: Vec<RawRouteEntry>,
}

impl ConnectionSnapshot {
    /// Create an empty snapshot for a listener.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            routes: Vec::new(),
        }
    }

    /// Append a route entry.
    #[must_use]
    pub fn route(mut self, entry: RawRouteEntry) -> Self {
        self.routes.push(entry);
        self
    }
}

/// One registered route as the routing table reports it.
///
/// All metadata beyond method and path is optional; missing fields
/// degrade to empty strings or the "none configured" sentinel during
/// collection, never to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRouteEntry {
    /// HTTP verb as registered (any case).
    pub method: String,
    /// Path template, may embed `{param}` segments.
    pub path: String,
    /// Free-text description, if declared.
    pub description: Option<String>,
    /// Auth configuration. `None` means the route declares no auth
    /// settings at all, which triggers the host-default fallback.
    pub auth: Option<RouteAuth>,
}

impl RawRouteEntry {
    /// Create a new entry with the mandatory fields.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            description: None,
            auth: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit auth configuration.
    #[must_use]
    pub fn auth(mut self, auth: RouteAuth) -> Self {
        self.auth = Some(auth);
        self
    }
}

/// Per-route authentication configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteAuth {
    /// Declared strategy names. An explicitly declared but empty list
    /// resolves to the sentinel, not to the host default.
    pub strategies: Vec<String>,
    /// Access rules; only the first rule's scope selection is consulted.
    pub access: Vec<AccessEntry>,
}

impl RouteAuth {
    /// Create an empty auth configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy name.
    #[must_use]
    pub fn strategy(mut self, name: impl Into<String>) -> Self {
        self.strategies.push(name.into());
        self
    }

    /// Add an access rule.
    #[must_use]
    pub fn access(mut self, entry: AccessEntry) -> Self {
        self.access.push(entry);
        self
    }
}

/// The scope selection of one access rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessEntry {
    /// Required scope identifiers.
    pub selection: Vec<String>,
}

impl AccessEntry {
    /// Create an access rule from scope identifiers.
    #[must_use]
    pub fn new(selection: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            selection: selection.into_iter().map(Into::into).collect(),
        }
    }
}
