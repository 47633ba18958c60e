//! The effective `HMAC` key and the pad blocks derived from it.

use zeroize::Zeroize;

use crate::hash::engine::{Block, Engine, BLOCK_LEN};
use crate::hash::{digest_with, DIGEST_LEN};

pub(crate) const IPAD: u8 = 0x36;
pub(crate) const OPAD: u8 = 0x5C;

/// A key normalized to exactly one block.
///
/// Keys longer than a block are replaced by their MD4 digest, then every key is zero-padded on
/// the right.
pub(crate) struct BlockKey {
    raw: Block
}

impl BlockKey {
    pub(crate) fn derive<E: Engine>(key: &[u8], engine: E) -> Self {
        let mut raw = [0u8; BLOCK_LEN];

        if key.len() > BLOCK_LEN {
            let mut folded = digest_with(engine, key);
            raw[..DIGEST_LEN].copy_from_slice(&folded);
            folded.zeroize();
        } else {
            raw[..key.len()].copy_from_slice(key);
        }

        Self { raw }
    }

    /// The key XORed with `byte` repeated over the block.
    pub(crate) fn pad(&self, byte: u8) -> Pad {
        let mut raw = self.raw;
        for b in &mut raw {
            *b ^= byte;
        }
        Pad { raw }
    }
}

impl Drop for BlockKey {
    #[inline]
    fn drop(&mut self) {
        self.raw.zeroize();
    }
}

pub(crate) struct Pad {
    raw: Block
}

impl AsRef<[u8]> for Pad {
    #[inline]
    fn as_ref(&self) -> &[u8] { self.raw.as_slice() }
}

impl Drop for Pad {
    #[inline]
    fn drop(&mut self) {
        self.raw.zeroize();
    }
}
