//! PIN hashing and validation
//!
//! The PIN is a convenience lock for a local data file, not a security
//! boundary. It is stored as an unsalted SHA-256 digest and compared against
//! the digest of the supplied PIN.

use sha2::{Digest, Sha256};

/// Whether a candidate PIN has the required shape: exactly four digits
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit())
}

/// Hash a PIN to its stored form, a lowercase hex SHA-256 digest
pub fn hash_pin(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a candidate PIN against a stored digest
pub fn verify_pin(pin: &str, stored_hash: &str) -> bool {
    hash_pin(pin) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_shape() {
        assert!(is_valid_pin("0000"));
        assert!(is_valid_pin("1234"));
        assert!(!is_valid_pin("123"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
        assert!(!is_valid_pin(""));
    }

    #[test]
    fn test_known_digest() {
        // SHA-256 of the ASCII string "1234"
        assert_eq!(
            hash_pin("1234"),
            "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
        );
    }

    #[test]
    fn test_verify() {
        let hash = hash_pin("4321");
        assert!(verify_pin("4321", &hash));
        assert!(!verify_pin("1234", &hash));
    }
}
