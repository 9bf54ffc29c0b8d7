//! Core route-information pipeline for routereport.
//!
//! This crate owns the data side of the report: it pulls a read-only
//! snapshot of registered routes from a [`RoutingSource`], resolves each
//! entry into an immutable [`RouteRecord`] (method, path, description,
//! and optionally the effective auth strategy and scope), and orders the
//! records deterministically. Rendering lives in `routereport-output`.
//!
//! # Pipeline
//!
//! ```text
//! RoutingSource::connections() -> collect() -> Vec<ConnectionInfo>
//!                                  (resolve + stable locale sort)
//! ```
//!
//! # Example
//!
//! ```
//! use routereport_core::{
//!     ConnectionSnapshot, RawRouteEntry, RenderOptions, RoutingSource, collect,
//! };
//!
//! struct Fixed(Vec<ConnectionSnapshot>);
//!
//! impl RoutingSource for Fixed {
//!     fn connections(&self) -> Vec<ConnectionSnapshot> {
//!         self.0.clone()
//!     }
//!
//!     fn default_strategies(&self) -> Option<Vec<String>> {
//!         None
//!     }
//! }
//!
//! let source = Fixed(vec![ConnectionSnapshot::new("http://localhost:8000")
//!     .route(RawRouteEntry::new("get", "/users/{id}").description("Fetch a user"))]);
//!
//! let info = collect(&source, &RenderOptions::default());
//! assert_eq!(info[0].routes[0].method, "GET");
//! ```

#![forbid(unsafe_code)]

mod collect;
mod options;
mod order;
mod record;
mod source;

pub use collect::{collect, resolve_scope, resolve_strategy};
pub use options::{OptionsError, RenderOptions};
pub use order::{locale_cmp, sort_records};
pub use record::{AuthValue, ConnectionInfo, RouteRecord};
pub use source::{AccessEntry, ConnectionSnapshot, RawRouteEntry, RouteAuth, RoutingSource};
