//! XOR-fold checksums.
//!
//! A file is split into `BLOCK_SIZE` blocks which are XORed, in file order,
//! into a `DIGEST_SIZE` accumulator. The result is rendered as
//! `HEX_DIGEST_LEN` uppercase hex characters ("checking data").
//!
//! The fold detects accidental corruption only. It is not collision
//! resistant: equal bit flips at the same offset in two different blocks
//! cancel out.
//!
//! ```no_run
//! use std::path::Path;
//! use xorsum_rs::xorsum::{self, Verification};
//!
//! let path = Path::new("report.bin");
//! let checking_data = xorsum::generate(path)?;
//! assert_eq!(xorsum::verify(path, &checking_data)?, Verification::Match);
//! # Ok::<(), xorsum_rs::xorsum::ChecksumError>(())
//! ```

mod block;
mod core;
mod digest;
mod error;
mod fold;
pub mod hex;

pub use self::block::{Block, BlockReader, DEFAULT_BUFFER_CAPACITY, MAX_BUFFER_CAPACITY};
pub use self::core::{
    BLOCK_SIZE, ChecksumEngine, DIGEST_SIZE, HEX_DIGEST_LEN, Verification, digest_bytes,
    generate, verify,
};
pub use self::digest::Digest;
pub use self::error::{ChecksumError, MalformedInput, Result};
pub use self::fold::{XorFolder, fold_blocks, xor_in_place};
