use super::glyph::LogLevel;
use super::realizer::format_request;
use super::report::ReportRequest;
use super::sink::OutputSink;
use crate::config::RenderConfig;

/// The only component that writes to the output sink.
/// Holds layout config and the sink; no domain state.
pub struct Renderer<S: OutputSink> {
    config: RenderConfig,
    sink: S,
}

impl<S: OutputSink> Renderer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, RenderConfig::default())
    }

    pub fn with_config(sink: S, config: RenderConfig) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn render(&mut self, request: &ReportRequest) {
        for line in format_request(request, &self.config) {
            self.sink.write_line(&line);
        }
    }

    pub fn message(&mut self, level: LogLevel, text: impl Into<String>) {
        self.render(&ReportRequest::message(level, text));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.message(LogLevel::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.message(LogLevel::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.message(LogLevel::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.message(LogLevel::Error, text);
    }

    pub fn debug(&mut self, text: impl Into<String>) {
        self.message(LogLevel::Debug, text);
    }

    pub fn section(&mut self, title: impl Into<String>) {
        self.render(&ReportRequest::section(title));
    }

    pub fn subsection(&mut self, title: impl Into<String>) {
        self.render(&ReportRequest::subsection(title));
    }

    /// Blank separator line between report blocks.
    pub fn blank(&mut self) {
        self.sink.write_line("");
    }
}
