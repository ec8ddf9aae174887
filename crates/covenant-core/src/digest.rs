//! # Content Digest
//!
//! SHA-256 digests over contract text. The analysis core is stateless and
//! never stores the text it analyzed; the digest travels with the emitted
//! storage record so the persistence collaborator can deduplicate and
//! correlate analyses of the same document.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A SHA-256 digest of a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Compute the digest of a UTF-8 text.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Compute the digest of raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Self { bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = ContentDigest::from_text("this agreement");
        let b = ContentDigest::from_text("this agreement");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_inputs_different_digests() {
        assert_ne!(
            ContentDigest::from_text("clause one"),
            ContentDigest::from_text("clause two"),
        );
    }

    #[test]
    fn test_hex_format() {
        let hex = ContentDigest::from_text("x").to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_display_prefix() {
        let s = ContentDigest::from_text("x").to_string();
        assert!(s.starts_with("sha256:"));
        assert_eq!(s.len(), 7 + 64);
    }

    #[test]
    fn test_known_sha256_vector() {
        // Verified against Python hashlib.sha256(b"").hexdigest().
        assert_eq!(
            ContentDigest::from_text("").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
