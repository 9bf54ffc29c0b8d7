//! The reporter facade.
//!
//! Owns the wiring between the host's routing snapshot, the render
//! options, the table renderer, and the output sink. Every invocation
//! runs the full collect → sort → render pipeline over a fresh
//! snapshot; nothing is cached between calls.

use parking_lot::Mutex;
use routereport_core::{ConnectionInfo, OptionsError, RenderOptions, RoutingSource, collect};
use routereport_output::{RouteTable, Styler, auto_styler};

use crate::sink::{OutputSink, StdoutSink};

/// Renders route listings for one routing source.
///
/// Exposes the two host-facing operations: [`text`](Self::text) for the
/// rendered report and [`info`](Self::info) for the structured form.
/// When the `show_start` option is enabled, the host should invoke
/// [`on_server_start`](Self::on_server_start) from its start event;
/// the reporter then prints the report to its sink exactly once per
/// invocation, fire-and-forget.
pub struct Reporter<S> {
    source: S,
    options: RenderOptions,
    table: RouteTable,
    styler: Box<dyn Styler + Send + Sync>,
    sink: Mutex<Box<dyn OutputSink + Send>>,
}

impl<S: RoutingSource> Reporter<S> {
    /// Create a reporter with an auto-detected styler (ANSI on a
    /// terminal, plain otherwise) and a stdout sink.
    #[must_use]
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self {
            source,
            options,
            table: RouteTable::new(&options),
            styler: auto_styler(),
            sink: Mutex::new(Box::new(StdoutSink)),
        }
    }

    /// Create a reporter from loose configuration.
    ///
    /// This is the single fail-fast path in the system: an option value
    /// of the wrong shape aborts initialization with [`OptionsError`].
    pub fn from_config(source: S, config: serde_json::Value) -> Result<Self, OptionsError> {
        Ok(Self::new(source, RenderOptions::from_value(config)?))
    }

    /// Replace the styler.
    #[must_use]
    pub fn with_styler(mut self, styler: impl Styler + Send + Sync + 'static) -> Self {
        self.styler = Box::new(styler);
        self
    }

    /// Replace the output sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl OutputSink + Send + 'static) -> Self {
        self.sink = Mutex::new(Box::new(sink));
        self
    }

    /// The options this reporter was configured with.
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Collection + ordering only: the structured route data, one
    /// [`ConnectionInfo`] per served address.
    #[must_use]
    pub fn info(&self) -> Vec<ConnectionInfo> {
        collect(&self.source, &self.options)
    }

    /// The full rendered report: per connection, a title line followed
    /// by one line per route, every line newline-terminated.
    #[must_use]
    pub fn text(&self) -> String {
        self.table.render(&self.info(), self.styler.as_ref())
    }

    /// Start-event hook. Prints the report to the sink when
    /// `show_start` is enabled; a no-op otherwise.
    pub fn on_server_start(&self) {
        if !self.options.show_start {
            return;
        }
        let report = self.text();
        self.sink.lock().write(&report);
    }
}
