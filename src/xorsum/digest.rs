use std::fmt;
use std::str::FromStr;

use super::{DIGEST_SIZE, MalformedInput, hex};

/// Fixed-width XOR-folded fingerprint of a file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// The digest of an empty file.
    pub const fn zero() -> Self {
        Digest([0u8; DIGEST_SIZE])
    }

    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Canonical uppercase hex form (`HEX_DIGEST_LEN` characters).
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse checking data; either case is accepted.
    pub fn from_hex(text: &str) -> Result<Self, MalformedInput> {
        hex::decode_digest(text)
    }

    /// Index of the first byte that differs from `other`, if any.
    pub fn first_difference(&self, other: &Digest) -> Option<usize> {
        self.0.iter().zip(other.0.iter()).position(|(a, b)| a != b)
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::zero()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
