pub mod processor;

pub use processor::{FileProcessor, FnProcessor, ProcessOutput};
