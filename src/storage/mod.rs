//! Persistence: the JSON document store and its file plumbing

pub mod file_io;
pub mod store;

pub use store::{AppData, Store, SCHEMA_VERSION};
