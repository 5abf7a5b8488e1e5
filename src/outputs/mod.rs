pub mod glyph;
pub mod realizer;
pub mod renderer;
pub mod report;
pub mod sink;

pub use glyph::{LogLevel, ReferenceKind};
pub use realizer::format_request;
pub use renderer::Renderer;
pub use report::{GraphEdge, MemoryEntry, ReportRequest};
pub use sink::{BufferSink, OutputSink, WriterSink};
