//! Domain services: the pure logic the store and CLI build on

pub mod alerts;
pub mod import;
pub mod ledger;
pub mod recurring;
pub mod snapshot;
