//! Route table reporter.
//!
//! routereport introspects a host server's routing table and prints a
//! column-aligned listing of registered endpoints — method, path,
//! description, and optionally the effective auth strategy and scope —
//! typically once, when the server starts.
//!
//! The host supplies a read-only [`RoutingSource`] snapshot and a
//! validated set of [`RenderOptions`]; the reporter does the rest. It
//! never mutates routing state, never authenticates anything, and
//! keeps no state between invocations.
//!
//! # Quick start
//!
//! ```
//! use routereport::{
//!     ConnectionSnapshot, PlainStyler, RawRouteEntry, RenderOptions, Reporter, RoutingSource,
//! };
//!
//! struct Host;
//!
//! impl RoutingSource for Host {
//!     fn connections(&self) -> Vec<ConnectionSnapshot> {
//!         vec![ConnectionSnapshot::new("http://localhost:8000")
//!             .route(RawRouteEntry::new("get", "/users/{id}").description("Fetch a user"))]
//!     }
//!
//!     fn default_strategies(&self) -> Option<Vec<String>> {
//!         None
//!     }
//! }
//!
//! let reporter = Reporter::new(Host, RenderOptions::default()).with_styler(PlainStyler);
//!
//! // Wire this to the host's start event, or call it directly:
//! let report = reporter.text();
//! assert!(report.starts_with("http://localhost:8000\n"));
//!
//! // Structured form for programmatic consumers:
//! let info = reporter.info();
//! assert_eq!(info[0].routes.len(), 1);
//! ```
//!
//! # Crate structure
//!
//! - [`routereport_core`] — snapshot types, collection, ordering, options
//! - [`routereport_output`] — tagged-span table rendering and styling

#![forbid(unsafe_code)]

// Re-export crates
pub use routereport_core as core;
pub use routereport_output as output;

// Re-export commonly used types
pub use routereport_core::{
    AccessEntry, AuthValue, ConnectionInfo, ConnectionSnapshot, OptionsError, RawRouteEntry,
    RenderOptions, RouteAuth, RouteRecord, RoutingSource, collect,
};
pub use routereport_output::{AnsiStyler, Category, Line, PlainStyler, RouteTable, Span, Styler};

mod reporter;
mod sink;

pub use reporter::Reporter;
pub use sink::{BufferSink, OutputSink, StdoutSink};
