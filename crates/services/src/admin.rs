//! Admin secret gate.

use sha2::{Digest, Sha256};

/// Equality check for the admin shared secret.
///
/// Both sides are hashed before comparing, so the comparison cost does not
/// depend on where the first mismatching byte sits.
pub fn secrets_match(provided: &str, expected: &str) -> bool {
    Sha256::digest(provided.as_bytes()) == Sha256::digest(expected.as_bytes())
}
