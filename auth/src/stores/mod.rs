//! Session store backends.

mod json_file;

pub use json_file::JsonFileSessionStore;
