//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod timestamps;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use timestamps::read_timestamps;
