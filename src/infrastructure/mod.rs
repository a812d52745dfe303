pub mod host;

pub use host::{MemoryHost, PipelineHost};
