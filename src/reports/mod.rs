//! Read-only reporting over the stored data

pub mod spending;
pub mod summary;
pub mod year_over_year;
