//! Output sinks.
//!
//! The reporter produces strings; writing them somewhere is a sink's
//! job. The default sink writes to stdout and ignores write errors —
//! the start-event print is fire-and-forget by design.

use std::sync::Arc;

use parking_lot::Mutex;

/// Receives rendered reports.
pub trait OutputSink {
    /// Write one report. A trailing newline is appended by the sink.
    fn write(&mut self, report: &str);
}

/// Writes reports to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, report: &str) {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{report}");
    }
}

/// Collects reports in memory. Useful for tests and for hosts that
/// route diagnostics through their own logging.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, report: &str) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(report);
        buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_appends_with_trailing_newline() {
        let sink = BufferSink::new();
        let mut writer = sink.clone();

        writer.write("first");
        writer.write("second");

        assert_eq!(sink.contents(), "first\nsecond\n");
    }
}
