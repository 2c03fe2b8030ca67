use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use super::{BLOCK_SIZE, ChecksumError, Result};
use crate::common::io::{open_noatime, read_full};

/// Default read-buffer capacity (256KB buffer like GNU).
pub const DEFAULT_BUFFER_CAPACITY: usize = 256 * 1024;

/// Largest read buffer a scan will allocate.
pub const MAX_BUFFER_CAPACITY: usize = 64 * 1024 * 1024;

/// Up to `BLOCK_SIZE` consecutive bytes of a file.
/// Only the final block of a file may be shorter than `BLOCK_SIZE`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Block {
    bytes: [u8; BLOCK_SIZE],
    len: usize,
}

impl Block {
    fn empty() -> Self {
        Block {
            bytes: [0u8; BLOCK_SIZE],
            len: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == BLOCK_SIZE
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("len", &self.len)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

/// Sequential, non-restartable reader of a file's `Block`s.
///
/// The underlying handle is dropped as soon as EOF is seen or a read fails,
/// so the file is held open only while blocks remain. Once exhausted or
/// failed, the reader yields nothing more.
pub struct BlockReader<R> {
    reader: Option<R>,
    path: PathBuf,
    offset: u64,
}

fn access_error(path: &Path, source: io::Error) -> ChecksumError {
    ChecksumError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}

impl BlockReader<BufReader<File>> {
    /// Open `path` for a block scan with the default buffer capacity.
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_capacity(path, DEFAULT_BUFFER_CAPACITY)
    }

    /// Open `path` for a block scan, buffering reads in chunks of `capacity`
    /// bytes, clamped to `BLOCK_SIZE..=MAX_BUFFER_CAPACITY`. Directories are
    /// rejected up front: on Unix they open fine and only fail at the first
    /// read.
    pub fn with_capacity(path: &Path, capacity: usize) -> Result<Self> {
        let file = open_noatime(path).map_err(|e| access_error(path, e))?;
        let metadata = file.metadata().map_err(|e| access_error(path, e))?;
        if metadata.is_dir() {
            return Err(access_error(
                path,
                io::Error::from(io::ErrorKind::IsADirectory),
            ));
        }
        let capacity = capacity.clamp(BLOCK_SIZE, MAX_BUFFER_CAPACITY);
        let reader = BufReader::with_capacity(capacity, file);
        Ok(Self::from_reader(path, reader))
    }
}

impl<R: Read> BlockReader<R> {
    /// Scan an already-open source. `path` is only used in error reports.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        BlockReader {
            reader: Some(reader),
            path: path.into(),
            offset: 0,
        }
    }

    /// Number of bytes handed out so far.
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    /// Whether the underlying source is still held.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Read the next block, or `None` once the source is exhausted.
    pub fn next_block(&mut self) -> Result<Option<Block>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut block = Block::empty();
        match read_full(reader, &mut block.bytes) {
            Ok(0) => {
                self.reader = None;
                Ok(None)
            }
            Ok(n) => {
                block.len = n;
                self.offset += n as u64;
                // read_full only comes back short at EOF
                if n < BLOCK_SIZE {
                    self.reader = None;
                }
                Ok(Some(block))
            }
            Err(source) => {
                self.reader = None;
                Err(ChecksumError::Io {
                    path: self.path.clone(),
                    offset: self.offset,
                    source,
                })
            }
        }
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}

impl<R: Read> FusedIterator for BlockReader<R> {}
