//! Route collection and auth resolution.
//!
//! Turns the raw routing-table snapshot into sorted [`ConnectionInfo`]
//! aggregates. Malformed or partially absent metadata never raises an
//! error here: missing descriptions become empty strings and missing
//! auth settings become the "none configured" sentinel.

use crate::options::RenderOptions;
use crate::order::sort_records;
use crate::record::{AuthValue, ConnectionInfo, RouteRecord};
use crate::source::{RawRouteEntry, RouteAuth, RoutingSource};

/// Run collection and ordering over the current routing snapshot.
///
/// Produces one [`ConnectionInfo`] per served address, each with fully
/// resolved, path-sorted records. Auth and scope are resolved only when
/// the corresponding toggle is enabled; otherwise the fields stay
/// absent from the records.
#[must_use]
pub fn collect(source: &impl RoutingSource, options: &RenderOptions) -> Vec<ConnectionInfo> {
    let defaults = source.default_strategies();

    source
        .connections()
        .into_iter()
        .map(|connection| {
            let mut routes: Vec<RouteRecord> = connection
                .routes
                .iter()
                .map(|entry| build_record(entry, defaults.as_deref(), options))
                .collect();
            sort_records(&mut routes);

            ConnectionInfo {
                uri: connection.uri,
                routes,
            }
        })
        .collect()
}

fn build_record(
    entry: &RawRouteEntry,
    defaults: Option<&[String]>,
    options: &RenderOptions,
) -> RouteRecord {
    RouteRecord {
        method: entry.method.to_uppercase(),
        path: entry.path.clone(),
        description: entry.description.clone().unwrap_or_default(),
        auth: options
            .show_auth
            .then(|| resolve_strategy(entry.auth.as_ref(), defaults)),
        scope: options.show_scope.then(|| resolve_scope(entry.auth.as_ref())),
    }
}

/// Resolve the effective auth strategy for a route.
///
/// Two-level precedence, kept in one place so it stays auditable:
/// a route with no auth configuration at all falls back to the
/// host-wide default strategies; a route that declares auth uses its
/// own strategy list. An empty list at either level is the sentinel.
#[must_use]
pub fn resolve_strategy(auth: Option<&RouteAuth>, defaults: Option<&[String]>) -> AuthValue {
    match auth {
        None => match defaults {
            Some(strategies) if !strategies.is_empty() => {
                AuthValue::Configured(strategies.join(","))
            }
            _ => AuthValue::NoneConfigured,
        },
        Some(auth) if auth.strategies.is_empty() => AuthValue::NoneConfigured,
        Some(auth) => AuthValue::Configured(auth.strategies.join(",")),
    }
}

/// Resolve the effective auth scope for a route.
///
/// Only the first access rule is consulted; later rules in a
/// multi-strategy access list are ignored by design. An empty first
/// selection normalizes to the sentinel.
#[must_use]
pub fn resolve_scope(auth: Option<&RouteAuth>) -> AuthValue {
    auth.and_then(|auth| auth.access.first())
        .filter(|access| !access.selection.is_empty())
        .map_or(AuthValue::NoneConfigured, |access| {
            AuthValue::Configured(access.selection.join(","))
        })
}
