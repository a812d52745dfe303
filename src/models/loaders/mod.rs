pub mod toml_loader;

pub use toml_loader::{load_options, parse_options};
