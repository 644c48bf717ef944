//! Password digesting.
//!
//! A password's digest is the standard-base64 rendering of SHA-512 over its
//! raw bytes: deterministic, unsalted, and directly comparable, so sign-in is
//! a plain string equality check. Swapping in a salted KDF would invalidate
//! every stored credential and needs a migration.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha512};

/// Compute the digest stored for (and compared against) a password.
pub fn digest(password: &str) -> String {
    let hash = Sha512::digest(password.as_bytes());
    STANDARD.encode(hash)
}
