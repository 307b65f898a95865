// ============================================================================
// Hash Module
// SHA-256 digests rendered as lowercase hex
// ============================================================================

use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 bytes of `s`, as lowercase hex.
pub fn sha256(s: &str) -> String {
    sha256_bytes(s.as_bytes())
}

/// SHA-256 of `data`, as lowercase hex.
pub fn sha256_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
