//! Fixed-width route table layout.
//!
//! One title line per connection, then one line per route. Columns are
//! padded with spaces to their nominal width but never truncated: an
//! oversized path or scope list simply widens its line.

use std::sync::LazyLock;

use regex::Regex;
use routereport_core::{AuthValue, ConnectionInfo, RenderOptions, RouteRecord};

use crate::span::{Category, Line, Span};
use crate::style::Styler;

const METHOD_WIDTH: usize = 18;
const PATH_WIDTH: usize = 30;
const AUTH_WIDTH: usize = 30;
const SCOPE_WIDTH: usize = 50;

/// `{param}` segments inside a path template.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*?\}").expect("placeholder pattern"));

/// Renders connection info into tagged-span lines.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    show_auth: bool,
    show_scope: bool,
}

impl RouteTable {
    /// Create a table renderer for the given options.
    #[must_use]
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            show_auth: options.show_auth,
            show_scope: options.show_scope,
        }
    }

    /// Render connections through a styler into the final text block.
    #[must_use]
    pub fn render(&self, connections: &[ConnectionInfo], styler: &dyn Styler) -> String {
        styler.render(&self.lines(connections))
    }

    /// Produce the tagged-span lines for all connections.
    #[must_use]
    pub fn lines(&self, connections: &[ConnectionInfo]) -> Vec<Line> {
        let mut out = Vec::new();
        for connection in connections {
            out.push(
                [Span::new(connection.uri.clone(), Category::Title)]
                    .into_iter()
                    .collect(),
            );
            for record in &connection.routes {
                out.push(self.route_line(record));
            }
        }
        out
    }

    /// Lay out one route.
    ///
    /// Base column order is [method, path, description]; the scope
    /// column is spliced in at index 2 first, then the auth column at
    /// index 2, so with both enabled the order becomes
    /// [method, path, auth, scope, description].
    fn route_line(&self, record: &RouteRecord) -> Line {
        let mut columns = vec![
            method_column(&record.method),
            path_column(&record.path),
            description_column(&record.description),
        ];

        if self.show_scope {
            let value = record.scope.clone().unwrap_or(AuthValue::NoneConfigured);
            columns.insert(2, value_column(&value, SCOPE_WIDTH));
        }
        if self.show_auth {
            let value = record.auth.clone().unwrap_or(AuthValue::NoneConfigured);
            columns.insert(2, value_column(&value, AUTH_WIDTH));
        }

        let mut line = Line::new();
        for (i, column) in columns.into_iter().enumerate() {
            if i > 0 {
                line.push(Span::plain(" "));
            }
            for span in column {
                line.push(span);
            }
        }
        line
    }
}

fn method_column(method: &str) -> Vec<Span> {
    let mut column = vec![Span::new(
        format!("  {}", method.to_uppercase()),
        Category::Positive,
    )];
    pad(&mut column, METHOD_WIDTH);
    column
}

fn path_column(path: &str) -> Vec<Span> {
    let mut column = Vec::new();
    let mut last = 0;
    for found in PLACEHOLDER.find_iter(path) {
        if found.start() > last {
            column.push(Span::plain(&path[last..found.start()]));
        }
        column.push(Span::new(found.as_str(), Category::Muted));
        last = found.end();
    }
    if last < path.len() {
        column.push(Span::plain(&path[last..]));
    }
    pad(&mut column, PATH_WIDTH);
    column
}

fn value_column(value: &AuthValue, width: usize) -> Vec<Span> {
    let category = if value.is_none_configured() {
        Category::Negative
    } else {
        Category::Positive
    };
    let mut column = vec![Span::new(value.display_text(), category)];
    pad(&mut column, width);
    column
}

fn description_column(description: &str) -> Vec<Span> {
    // Never padded; an empty description passes through unchanged.
    vec![Span::new(description, Category::Warning)]
}

/// Pad a column with spaces up to `width` content characters.
///
/// Content at or beyond the target is left unmodified; there is no
/// truncation anywhere in the renderer.
fn pad(column: &mut Vec<Span>, width: usize) {
    let current: usize = column.iter().map(Span::width).sum();
    if current < width {
        column.push(Span::plain(" ".repeat(width - current)));
    }
}
