//! An [`Engine`] backed by wolfcrypt's MD4 transform.
//!
//! wolfcrypt does not export its block transform, but `wc_Md4Update` runs it as soon as its
//! internal buffer holds a full block. Seeding the context's chaining words with our running
//! state and feeding it exactly one block from an empty buffer therefore performs a single
//! compression, leaving the result in `digest`.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr::addr_of_mut;

use wolf_crypto_sys::{Md4 as wc_Md4, wc_InitMd4, wc_Md4Update};
use zeroize::Zeroize;

use crate::hash::engine::{Block, Engine, State, BLOCK_LEN};

/// The wolfcrypt-backed MD4 engine.
///
/// # Example
///
/// ```
/// use md4_compat::hash::{Md4, engine::Wolfcrypt};
///
/// let mut hasher = Md4::with_engine(Wolfcrypt::new());
/// hasher.update(b"abc");
///
/// assert_eq!(hasher.finalize(), md4_compat::hash::digest(b"abc"));
/// ```
pub struct Wolfcrypt {
    inner: wc_Md4
}

impl Wolfcrypt {
    /// Create a new `Wolfcrypt` engine.
    #[must_use]
    pub fn new() -> Self {
        let mut inner = MaybeUninit::<wc_Md4>::uninit();

        unsafe {
            // wc_InitMd4 only writes the IV and zeroes the counters, it cannot fail.
            wc_InitMd4(inner.as_mut_ptr());
            Self { inner: inner.assume_init() }
        }
    }
}

impl Default for Wolfcrypt {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Wolfcrypt {
    /// The engine carries no state between blocks, so a clone is a fresh engine.
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for Wolfcrypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Wolfcrypt { ... }")
    }
}

impl Engine for Wolfcrypt {
    fn compress(&mut self, state: &mut State, block: &Block) {
        self.inner.digest = *state;
        self.inner.buffLen = 0;

        unsafe {
            wc_Md4Update(addr_of_mut!(self.inner), block.as_ptr(), BLOCK_LEN as u32);
        }

        debug_assert_eq!(self.inner.buffLen, 0);
        *state = self.inner.digest;
    }
}

impl Drop for Wolfcrypt {
    fn drop(&mut self) {
        self.inner.digest.zeroize();
        self.inner.buffer.zeroize();
    }
}
