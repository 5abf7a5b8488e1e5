use std::io::Write;
use tracing::error;

/// Line-oriented destination for rendered reports.
/// Writing never fails from the caller's point of view.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// In-memory capture, for tests and for building a report before printing it.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Everything written so far, newline-terminated.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Adapter over any `io::Write` (stdout, a file, a socket).
/// The first I/O error is kept and logged; later lines are dropped.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<std::io::Error>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", line) {
            error!("output sink write failed: {}", e);
            self.error = Some(e);
        }
    }
}
