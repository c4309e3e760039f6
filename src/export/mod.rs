//! Data export in JSON and CSV forms

pub mod csv;
pub mod json;
