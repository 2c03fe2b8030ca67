use std::path::Path;

use digest::Digest;
use md5::Md5;

use crate::xorsum::{BlockReader, Result};

/// MD5 input block size; HMAC keys are padded or hashed to this width.
pub const MD5_BLOCK_SIZE: usize = 64;

pub const MD5_OUTPUT_SIZE: usize = 16;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Incremental HMAC-MD5.
#[derive(Clone)]
pub struct HmacMd5 {
    inner: Md5,
    outer_key: [u8; MD5_BLOCK_SIZE],
    bytes: u64,
}

impl HmacMd5 {
    pub fn new(key: &[u8]) -> Self {
        let mut padded = [0u8; MD5_BLOCK_SIZE];
        if key.len() > MD5_BLOCK_SIZE {
            padded[..MD5_OUTPUT_SIZE].copy_from_slice(&Md5::digest(key));
        } else {
            padded[..key.len()].copy_from_slice(key);
        }

        let mut inner_key = padded;
        let mut outer_key = padded;
        inner_key.iter_mut().for_each(|b| *b ^= IPAD);
        outer_key.iter_mut().for_each(|b| *b ^= OPAD);

        let mut inner = Md5::new();
        inner.update(inner_key);
        HmacMd5 {
            inner,
            outer_key,
            bytes: 0,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
        self.bytes += data.len() as u64;
    }

    /// Message bytes fed so far (key padding excluded).
    pub fn bytes_hashed(&self) -> u64 {
        self.bytes
    }

    pub fn finalize(self) -> [u8; MD5_OUTPUT_SIZE] {
        let inner = self.inner.finalize();
        let mut outer = Md5::new();
        outer.update(self.outer_key);
        outer.update(inner);

        let mut mac = [0u8; MD5_OUTPUT_SIZE];
        mac.copy_from_slice(&outer.finalize());
        mac
    }
}

/// One-shot HMAC-MD5 of an in-memory message.
pub fn hmac_md5(key: &[u8], data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let mut h = HmacMd5::new(key);
    h.update(data);
    h.finalize()
}

/// MAC of a file together with the number of bytes it covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMac {
    pub mac: [u8; MD5_OUTPUT_SIZE],
    pub bytes: u64,
}

/// HMAC-MD5 of the file at `path`, streamed block by block.
pub fn hmac_md5_file(key: &[u8], path: &Path) -> Result<FileMac> {
    let mut h = HmacMd5::new(key);
    for block in BlockReader::open(path)? {
        h.update(block?.as_bytes());
    }
    let bytes = h.bytes_hashed();
    Ok(FileMac {
        mac: h.finalize(),
        bytes,
    })
}
