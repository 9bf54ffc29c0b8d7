//! End-to-end pipeline tests with an in-memory routing source.

use routereport::{
    AccessEntry, AuthValue, BufferSink, ConnectionSnapshot, PlainStyler, RawRouteEntry,
    RenderOptions, Reporter, RouteAuth, RoutingSource,
};
use serde_json::json;

/// A host with two listeners, a default auth strategy, and a mix of
/// route auth configurations.
struct MemoryHost {
    defaults: Option<Vec<String>>,
}

impl RoutingSource for MemoryHost {
    fn connections(&self) -> Vec<ConnectionSnapshot> {
        vec![
            ConnectionSnapshot::new("http://localhost:8000")
                .route(
                    RawRouteEntry::new("post", "/users")
                        .description("Create a user")
                        .auth(
                            RouteAuth::new()
                                .strategy("session")
                                .strategy("token")
                                .access(AccessEntry::new(["admin"])),
                        ),
                )
                .route(RawRouteEntry::new("get", "/users/{id}").description("Fetch a user"))
                .route(RawRouteEntry::new("get", "/health")),
            ConnectionSnapshot::new("http://localhost:8001")
                .route(RawRouteEntry::new("get", "/metrics")),
        ]
    }

    fn default_strategies(&self) -> Option<Vec<String>> {
        self.defaults.clone()
    }
}

fn host() -> MemoryHost {
    MemoryHost {
        defaults: Some(vec!["session".to_string()]),
    }
}

#[test]
fn text_renders_every_connection_and_route() {
    let reporter = Reporter::new(host(), RenderOptions::default()).with_styler(PlainStyler);

    let text = reporter.text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "http://localhost:8000");
    // Sorted by path: /health, /users, /users/{id}.
    assert!(lines[1].starts_with("  GET"));
    assert!(lines[1].contains("/health"));
    assert!(lines[2].starts_with("  POST"));
    assert!(lines[2].contains("/users"));
    assert!(lines[3].contains("/users/{id}"));
    assert_eq!(lines[4], "http://localhost:8001");
    assert!(lines[5].contains("/metrics"));
}

#[test]
fn text_matches_the_documented_layout() {
    let reporter = Reporter::new(host(), RenderOptions::default()).with_styler(PlainStyler);

    let text = reporter.text();
    let expected = format!("{:<18} {:<30} {}", "  GET", "/users/{id}", "Fetch a user");
    assert!(text.lines().any(|line| line == expected));
}

#[test]
fn info_preserves_route_count_and_omits_disabled_fields() {
    let reporter = Reporter::new(host(), RenderOptions::default());

    let info = reporter.info();
    assert_eq!(info.len(), 2);
    assert_eq!(info[0].routes.len(), 3);
    assert_eq!(info[1].routes.len(), 1);
    assert!(info[0].routes.iter().all(|r| r.auth.is_none()));
    assert!(info[0].routes.iter().all(|r| r.scope.is_none()));
}

#[test]
fn info_resolves_auth_and_scope_when_enabled() {
    let options = RenderOptions {
        show_auth: true,
        show_scope: true,
        show_start: true,
    };
    let reporter = Reporter::new(host(), options);

    let info = reporter.info();
    let route = |path: &str| {
        info[0]
            .routes
            .iter()
            .find(|r| r.path == path)
            .unwrap()
            .clone()
    };

    // Explicit strategies are comma-joined.
    assert_eq!(
        route("/users").auth,
        Some(AuthValue::Configured("session,token".into()))
    );
    assert_eq!(
        route("/users").scope,
        Some(AuthValue::Configured("admin".into()))
    );
    // No auth declared: host default applies, scope stays the sentinel.
    assert_eq!(
        route("/health").auth,
        Some(AuthValue::Configured("session".into()))
    );
    assert_eq!(route("/health").scope, Some(AuthValue::NoneConfigured));
}

#[test]
fn info_serializes_for_structured_consumers() {
    let options = RenderOptions {
        show_auth: true,
        show_scope: false,
        show_start: true,
    };
    let reporter = Reporter::new(host(), options);

    let json = serde_json::to_value(reporter.info()).unwrap();
    assert_eq!(json[0]["uri"], "http://localhost:8000");
    assert_eq!(json[0]["routes"][0]["method"], "GET");
    // Disabled scope column is absent, not null.
    assert!(json[0]["routes"][0].get("scope").is_none());
}

#[test]
fn start_event_prints_to_the_sink() {
    let sink = BufferSink::new();
    let reporter = Reporter::new(host(), RenderOptions::default())
        .with_styler(PlainStyler)
        .with_sink(sink.clone());

    reporter.on_server_start();

    let printed = sink.contents();
    assert!(printed.starts_with("http://localhost:8000\n"));
    assert!(printed.ends_with("\n\n")); // report newline + sink newline
}

#[test]
fn invocations_are_independent() {
    let reporter = Reporter::new(host(), RenderOptions::default()).with_styler(PlainStyler);

    assert_eq!(reporter.text(), reporter.text());
    assert_eq!(reporter.info(), reporter.info());
}

#[test]
fn config_validation_is_the_only_failure_path() {
    assert!(Reporter::from_config(host(), json!({})).is_ok());
    assert!(Reporter::from_config(host(), json!({ "show_scope": true })).is_ok());
    assert!(Reporter::from_config(host(), json!({ "show_scope": 1 })).is_err());
    assert!(Reporter::from_config(host(), json!("not an object")).is_err());
}
