//! HMAC-MD5 file fingerprints (RFC 2104).
//!
//! Companion to the XOR fold for callers that want a keyed fingerprint.
//! Files are streamed through the same block reader.

mod core;

pub use self::core::{FileMac, HmacMd5, MD5_BLOCK_SIZE, MD5_OUTPUT_SIZE, hmac_md5, hmac_md5_file};

#[cfg(test)]
mod tests;
