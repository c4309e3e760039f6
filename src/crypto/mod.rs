//! PIN lock support

pub mod pin;

pub use pin::{hash_pin, is_valid_pin, verify_pin};
