use sha2::{Digest as _, Sha256};
use std::fmt;

/// Length in bytes of a seed digest.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 digest of a seed, the only entropy source of an identimorph.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash the UTF-8 bytes of `seed`.
    pub fn of_seed(seed: &str) -> Self {
        Self(Sha256::digest(seed.as_bytes()).into())
    }

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Byte at `offset`, treating the digest as circular.
    pub fn byte_wrapping(&self, offset: usize) -> u8 {
        self.0[offset % DIGEST_LEN]
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_LEN * 2);
        for b in self.0 {
            out.push_str(&format!("{b:02x}"));
        }
        out
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Hash a seed. Shorthand for [`Digest::of_seed`].
pub fn digest(seed: &str) -> Digest {
    Digest::of_seed(seed)
}

/// Seed variant hashed for classic frame `index`: `"{seed}_{index}"`.
pub fn frame_seed(seed: &str, index: u64) -> String {
    format!("{seed}_{index}")
}

#[cfg(test)]
#[path = "../../tests/unit/identity/digest.rs"]
mod tests;
