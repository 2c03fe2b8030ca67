use super::{DIGEST_SIZE, Digest};

/// XOR `block` into `acc` over the positions both share.
/// Positions of `acc` past the end of `block` are left untouched.
#[inline]
pub fn xor_in_place(acc: &mut [u8], block: &[u8]) {
    for (a, &b) in acc.iter_mut().zip(block) {
        *a ^= b;
    }
}

/// Running XOR accumulator of `DIGEST_SIZE` bytes.
///
/// Every block is aligned to position 0 of the accumulator, so block `k`
/// byte `i` and block `j` byte `i` land on the same digest byte. Feed
/// blocks in file order.
#[derive(Clone)]
pub struct XorFolder {
    acc: [u8; DIGEST_SIZE],
    blocks: u64,
}

impl XorFolder {
    pub fn new() -> Self {
        XorFolder {
            acc: [0u8; DIGEST_SIZE],
            blocks: 0,
        }
    }

    /// Fold one block into the accumulator.
    #[inline]
    pub fn update(&mut self, block: &[u8]) {
        xor_in_place(&mut self.acc, block);
        self.blocks += 1;
    }

    /// Number of blocks folded so far.
    pub fn blocks_folded(&self) -> u64 {
        self.blocks
    }

    pub fn finalize(self) -> Digest {
        Digest::from_bytes(self.acc)
    }
}

impl Default for XorFolder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a fallible block sequence into a digest, stopping at the first error.
pub fn fold_blocks<I, B, E>(blocks: I) -> Result<Digest, E>
where
    I: IntoIterator<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    let mut folder = XorFolder::new();
    for block in blocks {
        folder.update(block?.as_ref());
    }
    Ok(folder.finalize())
}
