pub mod file;

pub use file::write_generated;
