//! The MD4 Streaming Accumulator and One-Shot Wrapper.

use core::fmt;
use zeroize::Zeroize;

use crate::hash::engine::{Block, Engine, Soft, State, BLOCK_LEN, INITIAL_STATE};
use crate::opaque_res::Res;

/// The size of an MD4 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Offset of the 64-bit message length within the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// The `MD4` hasher.
///
/// # Security Warning
///
/// MD4 has been considered **fully compromised** since 1995, with original weaknesses published
/// in 1991, as of 2007 an attack can generate collisions in less than two MD4 hash operations.
/// This type exists only to reproduce digests required by existing wire-compatible callers.
///
/// # Lifecycle
///
/// [`new`] (or [`with_engine`]) initializes the context, [`update`] absorbs input, and
/// [`finalize`] seals it, consuming the hasher so that it cannot be updated afterwards. The
/// `finalize_reset` / `finalize_into*` family seals the current message and re-initializes the
/// context in place instead. Both the running state and the buffered input are wiped on drop.
///
/// # Example
///
/// ```
/// use md4_compat::hash::Md4;
///
/// let mut hasher = Md4::new();
///
/// hasher.update(b"message ");
/// hasher.update(b"digest");
///
/// assert_eq!(
///     hasher.finalize(),
///     md4_compat::hash::digest(b"message digest")
/// );
/// ```
///
/// [`new`]: Md4::new
/// [`with_engine`]: Md4::with_engine
/// [`update`]: Md4::update
/// [`finalize`]: Md4::finalize
#[derive(Clone)]
pub struct Md4<E: Engine = Soft> {
    state: State,
    /// Bytes absorbed since init, `[low, high]`.
    total: [u32; 2],
    buffer: Block,
    engine: E,
}

impl<E: Engine> fmt::Debug for Md4<E> {
    /// Writes "Md4 { ... }" to the formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md4 { ... }")
    }
}

impl Md4 {
    /// Create a new `Md4` instance backed by the [`Soft`] engine.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::hash::Md4;
    ///
    /// let hasher = Md4::new();
    /// assert!(hasher.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_engine(Soft)
    }
}

impl Default for Md4 {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Md4<E> {
    /// Create a new `Md4` instance which compresses blocks with the provided `engine`.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::hash::{Md4, engine::Soft};
    ///
    /// let mut hasher = Md4::with_engine(Soft);
    /// hasher.update(b"abc");
    ///
    /// assert_eq!(hasher.finalize(), md4_compat::hash::digest(b"abc"));
    /// ```
    #[must_use]
    pub const fn with_engine(engine: E) -> Self {
        Self { state: INITIAL_STATE, total: [0; 2], buffer: [0u8; BLOCK_LEN], engine }
    }

    /// Returns a reference to the engine this context compresses with.
    #[inline]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// The number of bytes absorbed since the context was last initialized.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        ((self.total[1] as u64) << 32) | self.total[0] as u64
    }

    /// Returns `true` if no bytes were absorbed since the context was last initialized.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total[0] == 0 && self.total[1] == 0
    }

    /// Bytes waiting in `buffer`, always less than [`BLOCK_LEN`].
    #[inline(always)]
    const fn buffered(&self) -> usize {
        (self.total[0] as usize) & (BLOCK_LEN - 1)
    }

    #[inline]
    fn count(&mut self, len: usize) {
        let len = len as u64;
        let (low, carry) = self.total[0].overflowing_add(len as u32);

        self.total[0] = low;
        self.total[1] = self.total[1]
            .wrapping_add((len >> 32) as u32)
            .wrapping_add(u32::from(carry));
    }

    /// Update the hasher with `data`.
    ///
    /// Any length and any alignment is accepted. Splitting a message across any number of
    /// `update` calls at any byte boundaries yields the same digest as a single call with the
    /// whole message.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::hash::Md4;
    ///
    /// let mut hasher = Md4::new();
    /// hasher.update(b"hello ").update(b"world");
    ///
    /// assert_eq!(hasher.len(), 11);
    /// ```
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        if data.is_empty() { return self }

        let fill = self.buffered();
        self.count(data.len());

        let mut input = data;

        if fill != 0 {
            let room = BLOCK_LEN - fill;

            if input.len() < room {
                self.buffer[fill..fill + input.len()].copy_from_slice(input);
                return self;
            }

            let (head, rest) = input.split_at(room);
            self.buffer[fill..].copy_from_slice(head);
            self.engine.compress(&mut self.state, &self.buffer);
            input = rest;
        }

        let (blocks, tail) = input.split_at(input.len() - input.len() % BLOCK_LEN);

        if !blocks.is_empty() {
            self.engine.compress_blocks(&mut self.state, blocks);
        }

        self.buffer[..tail.len()].copy_from_slice(tail);
        self
    }

    /// Append the padding and the bit length, compressing the final block(s).
    fn pad(&mut self) {
        let bits_low = self.total[0] << 3;
        let bits_high = (self.total[1] << 3) | (self.total[0] >> 29);

        let fill = self.buffered();
        self.buffer[fill] = 0x80;

        if fill + 1 > LENGTH_OFFSET {
            // no room left for the length, it spills into one more block.
            self.buffer[fill + 1..].fill(0);
            self.engine.compress(&mut self.state, &self.buffer);
            self.buffer[..LENGTH_OFFSET].fill(0);
        } else {
            self.buffer[fill + 1..LENGTH_OFFSET].fill(0);
        }

        self.buffer[LENGTH_OFFSET..LENGTH_OFFSET + 4].copy_from_slice(&bits_low.to_le_bytes());
        self.buffer[LENGTH_OFFSET + 4..].copy_from_slice(&bits_high.to_le_bytes());
        self.engine.compress(&mut self.state, &self.buffer);
    }

    fn seal(&mut self, output: &mut [u8; DIGEST_LEN]) {
        self.pad();

        for (chunk, word) in output.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }

    /// Re-initialize the context, discarding any absorbed input. The engine is kept.
    pub fn reset(&mut self) {
        self.state = INITIAL_STATE;
        self.total = [0; 2];
        self.buffer.zeroize();
    }

    /// Finalize the hashing of data, consuming the hasher.
    ///
    /// # Returns
    ///
    /// The 16-byte digest, the four state words serialized little-endian.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::hash::Md4;
    ///
    /// let mut hasher = Md4::new();
    /// hasher.update(b"a");
    ///
    /// assert_eq!(
    ///     hasher.finalize(),
    ///     [0xbd, 0xe5, 0x2c, 0xb3, 0x1d, 0xe3, 0x3e, 0x46,
    ///      0x24, 0x5e, 0x05, 0xfb, 0xdb, 0xd6, 0xfb, 0x24]
    /// );
    /// ```
    ///
    /// A finalized hasher cannot be updated again:
    ///
    /// ```compile_fail
    /// use md4_compat::hash::Md4;
    ///
    /// let mut hasher = Md4::new();
    /// let _digest = hasher.finalize();
    /// hasher.update(b"too late");
    /// ```
    #[must_use]
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        self.seal(&mut out);
        out
    }

    /// Finalize the hashing of data and re-initialize the context in place.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::hash::Md4;
    ///
    /// let mut hasher = Md4::new();
    ///
    /// hasher.update(b"abc");
    /// let first = hasher.finalize_reset();
    ///
    /// hasher.update(b"abc");
    /// let second = hasher.finalize_reset();
    ///
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn finalize_reset(&mut self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        self.finalize_into_exact(&mut out);
        out
    }

    /// Finalize the hashing of data into `output` and re-initialize the context in place.
    #[inline]
    pub fn finalize_into_exact(&mut self, output: &mut [u8; DIGEST_LEN]) {
        self.seal(output);
        self.reset();
    }

    /// Finalize the hashing of data into the first 16 bytes of `output`, re-initializing the
    /// context in place.
    ///
    /// # Errors
    ///
    /// If the size of `output` is less than the digest size (`16`). The context is left
    /// untouched in this case, so the caller may retry with an adequate buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::hash::Md4;
    ///
    /// let mut hasher = Md4::new();
    /// hasher.update(b"abc");
    ///
    /// let mut small = [0u8; 8];
    /// assert!(hasher.finalize_into(&mut small).is_err());
    ///
    /// let mut output = [0u8; 32];
    /// assert!(hasher.finalize_into(&mut output).is_ok());
    /// assert_eq!(&output[..16], md4_compat::hash::digest(b"abc").as_slice());
    /// ```
    pub fn finalize_into(&mut self, output: &mut [u8]) -> Res {
        let mut res = Res::new();
        res.check(output.len() >= DIGEST_LEN);

        if res.is_ok() {
            let mut out = [0u8; DIGEST_LEN];
            self.finalize_into_exact(&mut out);
            output[..DIGEST_LEN].copy_from_slice(&out);
        }

        res
    }
}

impl<E: Engine> Drop for Md4<E> {
    #[inline]
    fn drop(&mut self) {
        self.state.zeroize();
        self.total.zeroize();
        self.buffer.zeroize();
    }
}

/// Compute the MD4 digest of `data` in one shot.
///
/// Equivalent to `Md4::new()`, one `update(data)`, then `finalize()`.
///
/// # Example
///
/// ```
/// use md4_compat::hash::digest;
///
/// assert_eq!(
///     digest(b"abc"),
///     [0xa4, 0x48, 0x01, 0x7a, 0xaf, 0x21, 0xd8, 0x52,
///      0x5f, 0xc1, 0x0a, 0xe8, 0x7a, 0xa6, 0x72, 0x9d]
/// );
/// ```
#[must_use]
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    digest_with(Soft, data)
}

/// Compute the MD4 digest of `data` in one shot with the provided `engine`.
#[must_use]
pub fn digest_with<E: Engine>(engine: E, data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Md4::with_engine(engine);
    hasher.update(data);
    hasher.finalize()
}
