//! The MD4 Block Compression Core.
//!
//! [`compress`] is the pure RFC 1320 transform. The [`Engine`] trait is the seam through which
//! the accumulator reaches it, so that a platform may substitute an accelerated implementation
//! without the streaming, padding, or `HMAC` layers noticing.

/// The running MD4 state, the four chaining words `A`, `B`, `C`, `D`.
pub type State = [u32; 4];

/// One MD4 input block.
pub type Block = [u8; BLOCK_LEN];

/// The size of an MD4 input block in bytes.
pub const BLOCK_LEN: usize = 64;

/// The chaining words every MD4 computation starts from.
pub const INITIAL_STATE: State = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

const ROUND_2_K: u32 = 0x5A82_7999;
const ROUND_3_K: u32 = 0x6ED9_EBA1;

const ROUND_1_SHIFTS: [u32; 4] = [3, 7, 11, 19];
const ROUND_2_SHIFTS: [u32; 4] = [3, 5, 9, 13];
const ROUND_3_SHIFTS: [u32; 4] = [3, 9, 11, 15];

const ROUND_2_ORDER: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const ROUND_3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

#[inline(always)]
const fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn load_words(block: &Block) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Run one round of 16 steps over the working registers.
///
/// Each step computes `a = rotl(a + round_fn(b, c, d) + x[k] + constant, s)` and then rotates the
/// registers so that the freshly computed word becomes `b` of the next step.
#[inline(always)]
fn round(
    regs: &mut State,
    x: &[u32; 16],
    order: impl Fn(usize) -> usize,
    shifts: &[u32; 4],
    constant: u32,
    round_fn: fn(u32, u32, u32) -> u32
) {
    let [mut a, mut b, mut c, mut d] = *regs;

    for step in 0..16 {
        let t = a
            .wrapping_add(round_fn(b, c, d))
            .wrapping_add(x[order(step)])
            .wrapping_add(constant)
            .rotate_left(shifts[step & 3]);

        (a, b, c, d) = (d, t, b, c);
    }

    *regs = [a, b, c, d];
}

/// Compress one 64-byte `block` into `state`.
///
/// This is a pure function, identical inputs always produce identical outputs.
///
/// # Example
///
/// ```
/// use md4_compat::hash::engine::{compress, INITIAL_STATE};
///
/// // The single padded block of the empty message.
/// let mut block = [0u8; 64];
/// block[0] = 0x80;
///
/// let state = compress(INITIAL_STATE, &block);
/// assert_eq!(state[0].to_le_bytes(), [0x31, 0xd6, 0xcf, 0xe0]);
/// ```
#[must_use]
pub fn compress(state: State, block: &Block) -> State {
    let x = load_words(block);
    let mut regs = state;

    round(&mut regs, &x, |step| step, &ROUND_1_SHIFTS, 0, f);
    round(&mut regs, &x, |step| ROUND_2_ORDER[step], &ROUND_2_SHIFTS, ROUND_2_K, g);
    round(&mut regs, &x, |step| ROUND_3_ORDER[step], &ROUND_3_SHIFTS, ROUND_3_K, h);

    [
        state[0].wrapping_add(regs[0]),
        state[1].wrapping_add(regs[1]),
        state[2].wrapping_add(regs[2]),
        state[3].wrapping_add(regs[3]),
    ]
}

/// A block compression capability.
///
/// Implementations must be bit-exact with [`compress`]. The accumulator only ever hands an
/// engine complete blocks, and the engine never sees the message length or the padding logic.
///
/// The engine is selected when a context is constructed (see [`Md4::with_engine`]), and is
/// owned by that context, so an accelerator may keep a device handle or scratch space in
/// `self`.
///
/// [`Md4::with_engine`]: crate::hash::Md4::with_engine
pub trait Engine {
    /// Compress one block into `state`.
    fn compress(&mut self, state: &mut State, block: &Block);

    /// Compress a run of consecutive blocks into `state`.
    ///
    /// `blocks.len()` is always a multiple of [`BLOCK_LEN`]. The default implementation
    /// forwards each block to [`compress`](Engine::compress); engines with a cheaper bulk path
    /// should override it.
    fn compress_blocks(&mut self, state: &mut State, blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);

        let mut block = [0u8; BLOCK_LEN];
        for chunk in blocks.chunks_exact(BLOCK_LEN) {
            block.copy_from_slice(chunk);
            self.compress(state, &block);
        }
    }
}

impl<E: Engine + ?Sized> Engine for &mut E {
    #[inline]
    fn compress(&mut self, state: &mut State, block: &Block) {
        (**self).compress(state, block);
    }

    #[inline]
    fn compress_blocks(&mut self, state: &mut State, blocks: &[u8]) {
        (**self).compress_blocks(state, blocks);
    }
}

/// The portable software engine.
///
/// Zero-sized and stateless, this is the default engine of every context in this crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Soft;

impl Engine for Soft {
    #[inline]
    fn compress(&mut self, state: &mut State, block: &Block) {
        *state = compress(*state, block);
    }
}

wolfcrypt! {
    pub use super::wolfcrypt::Wolfcrypt;
}
