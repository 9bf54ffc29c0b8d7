//! Table rendering and terminal styling for routereport.
//!
//! The renderer never emits escape codes itself: [`RouteTable`] turns
//! sorted [`ConnectionInfo`] aggregates into lines of tagged spans
//! (text + semantic [`Category`]), and a [`Styler`] adapter maps the
//! categories to actual presentation — 24-bit ANSI for terminals,
//! plain passthrough for everything else. Column widths are measured on
//! content text only, so styling never disturbs alignment.
//!
//! # Example
//!
//! ```
//! use routereport_core::{ConnectionInfo, RenderOptions, RouteRecord};
//! use routereport_output::{PlainStyler, RouteTable};
//!
//! let info = ConnectionInfo {
//!     uri: "http://localhost:8000".into(),
//!     routes: vec![RouteRecord {
//!         method: "GET".into(),
//!         path: "/users/{id}".into(),
//!         description: "Fetch a user".into(),
//!         auth: None,
//!         scope: None,
//!     }],
//! };
//!
//! let table = RouteTable::new(&RenderOptions::default());
//! let text = table.render(std::slice::from_ref(&info), &PlainStyler);
//! assert!(text.starts_with("http://localhost:8000\n"));
//! ```

#![forbid(unsafe_code)]

mod span;
mod style;
mod table;

pub use span::{Category, Line, Span};
pub use style::{AnsiStyler, Color, Palette, PlainStyler, Styler, auto_styler};
pub use table::RouteTable;
