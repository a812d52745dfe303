pub mod file_record;
pub mod loaders;
pub mod options;

pub use file_record::{FileMap, FileRecord, Metadata, FILE_NAME_KEY};
pub use loaders::{load_options, parse_options};
pub use options::PluginOptions;
