use std::path::Path;

use super::{
    BlockReader, DEFAULT_BUFFER_CAPACITY, Digest, MAX_BUFFER_CAPACITY, MalformedInput, Result,
    XorFolder, fold_blocks,
};

/// Bytes per block read from the file.
pub const BLOCK_SIZE: usize = 64;

/// Width of the folded digest in bytes.
pub const DIGEST_SIZE: usize = 64;

/// Length of the checking data (hex form of a digest).
pub const HEX_DIGEST_LEN: usize = DIGEST_SIZE * 2;

/// Outcome of checking a file against caller-supplied checking data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Match,
    Mismatch {
        expected: Digest,
        actual: Digest,
        /// Index of the first digest byte that differs.
        first_difference: usize,
    },
    /// The checking data is not a hex digest; the file was not read.
    MalformedInput(MalformedInput),
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

/// Runs the read → fold → encode pipeline for a single file.
#[derive(Debug, Clone, Copy)]
pub struct ChecksumEngine {
    buffer_capacity: usize,
}

impl Default for ChecksumEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecksumEngine {
    pub fn new() -> Self {
        ChecksumEngine {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Size of the read buffer behind the block reader. Throughput only;
    /// the digest does not depend on it. Clamped to
    /// `BLOCK_SIZE..=MAX_BUFFER_CAPACITY`.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.clamp(BLOCK_SIZE, MAX_BUFFER_CAPACITY);
        self
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    /// Fold the file at `path` into its digest.
    pub fn digest_file(&self, path: &Path) -> Result<Digest> {
        let blocks = BlockReader::with_capacity(path, self.buffer_capacity)?;
        fold_blocks(blocks)
    }

    /// Checking data for the file at `path`.
    pub fn generate(&self, path: &Path) -> Result<String> {
        Ok(self.digest_file(path)?.to_hex())
    }

    /// Check the file at `path` against `candidate`.
    ///
    /// Malformed checking data is reported without opening the file. File
    /// errors are returned as `Err`; match/mismatch is exact byte equality.
    pub fn verify(&self, path: &Path, candidate: &str) -> Result<Verification> {
        let expected = match Digest::from_hex(candidate) {
            Ok(d) => d,
            Err(e) => return Ok(Verification::MalformedInput(e)),
        };
        let actual = self.digest_file(path)?;
        Ok(match expected.first_difference(&actual) {
            None => Verification::Match,
            Some(first_difference) => Verification::Mismatch {
                expected,
                actual,
                first_difference,
            },
        })
    }
}

/// Digest of an in-memory buffer, folded exactly as a file of the same bytes.
pub fn digest_bytes(data: &[u8]) -> Digest {
    let mut folder = XorFolder::new();
    for block in data.chunks(BLOCK_SIZE) {
        folder.update(block);
    }
    folder.finalize()
}

/// Checking data for the file at `path`, using default engine settings.
pub fn generate(path: &Path) -> Result<String> {
    ChecksumEngine::new().generate(path)
}

/// Check the file at `path` against `candidate`, using default engine settings.
pub fn verify(path: &Path, candidate: &str) -> Result<Verification> {
    ChecksumEngine::new().verify(path, candidate)
}
