// src/digest.rs

//! Content hashing behind a small trait so the terminal can be tested with a
//! hasher that fails.

use sha2::{Digest, Sha256};
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("{algorithm} digest unavailable: {reason}")]
    Unavailable {
        algorithm: &'static str,
        reason: String,
    },
}

/// A hashing primitive that turns a string into a hex-encoded digest.
pub trait ContentHasher {
    /// Name shown next to the digest, e.g. `SHA-256`.
    fn name(&self) -> &'static str;

    fn hex_digest(&self, input: &str) -> Result<String, DigestError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Digest;

impl ContentHasher for Sha256Digest {
    fn name(&self) -> &'static str {
        "SHA-256"
    }

    fn hex_digest(&self, input: &str) -> Result<String, DigestError> {
        let digest = Sha256::digest(input.as_bytes());
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            // Writing into a String cannot fail.
            let _ = write!(hex, "{:02x}", byte);
        }
        Ok(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_abc() {
        assert_eq!(
            Sha256Digest.hex_digest("abc").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_of_empty_string() {
        assert_eq!(
            Sha256Digest.hex_digest("").unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn error_message_names_the_algorithm() {
        let err = DigestError::Unavailable {
            algorithm: "SHA-256",
            reason: "no backend".to_string(),
        };
        assert_eq!(err.to_string(), "SHA-256 digest unavailable: no backend");
    }
}
