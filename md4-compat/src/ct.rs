//! Constant-Time Programming Utilities
//!
//! Tag verification and hex rendering of tags both touch secret-dependent bytes, so neither is
//! allowed to branch on the data.

use crate::error::InvalidSize;

#[inline(always)]
fn volatile(byte: u8) -> u8 {
    unsafe { core::ptr::read_volatile(&byte) }
}

#[inline(always)]
fn eq_hsb(xor: u8) -> u8 {
    volatile(xor | volatile(xor.wrapping_neg())) >> 7
}

/// Constant-time byte equality.
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[inline(always)]
#[must_use]
pub fn byte_eq(a: u8, b: u8) -> u8 {
    // The volatile read on `xor | -xor` keeps LLVM from folding this into an `icmp` + `zext`,
    // which is what it emits for the plain expression with optimizations enabled.
    eq_hsb(b ^ a) ^ volatile(1)
}

macro_rules! unroll_ct_cmp {
    (g2 $start:expr, $result:ident, $left:ident, $right:ident) => {{
        $result &= byte_eq(*$left.get_unchecked($start), *$right.get_unchecked($start));
        $result &= byte_eq(
            *$left.get_unchecked($start.wrapping_add(1)),
            *$right.get_unchecked($start.wrapping_add(1))
        );
    }};
    (g4 $start:expr, $result:ident, $left:ident, $right:ident) => {
        unroll_ct_cmp!(g2 $start, $result, $left, $right);
        unroll_ct_cmp!(g2 $start.wrapping_add(2) as usize, $result, $left, $right);
    };
}

/// # Safety
///
/// Both `a` and `b` must have a length of at least 4.
#[inline(always)]
unsafe fn cmp_bytes_4_unchecked(mut res: u8, a: &[u8], b: &[u8]) -> u8 {
    debug_assert!(a.len() >= 4 && b.len() >= 4);
    unroll_ct_cmp!(g4 0usize, res, a, b);
    res
}

/// Compare two slices in constant-time.
///
/// # Note
///
/// If the length of slice `a` and slice `b` are not equivalent, this will exit early. In short,
/// there is variable timing on length comparisons.
///
/// # Warning
///
/// This is a *best-effort* constant-time equivalence check. There is no guarantee of
/// constant-time properties across all existing hardware.
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[must_use]
pub fn cmp_slice(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() { return 0 }

    let mut rem = a.len();
    let mut res = volatile(1u8);

    while rem >= 4 {
        debug_assert!(rem <= a.len());

        let next = rem.wrapping_sub(4);
        // SAFETY: `next..rem` is a 4 byte window inside both slices, they share a length.
        res &= unsafe {
            cmp_bytes_4_unchecked(
                res,
                a.get_unchecked(next..rem),
                b.get_unchecked(next..rem)
            )
        };

        rem = next;
    }

    // SAFETY: `rem` is the count of leading bytes not yet compared, all indices are below it.
    match rem {
        3 => unsafe {
            res &= byte_eq(*a.get_unchecked(0), *b.get_unchecked(0));
            unroll_ct_cmp!(g2 rem.wrapping_sub(2), res, a, b);
        }
        2 => unsafe { unroll_ct_cmp!(g2 rem.wrapping_sub(2), res, a, b) },
        1 => unsafe { res &= byte_eq(*a.get_unchecked(0), *b.get_unchecked(0)) },
        _ => {}
    }

    res
}

/// Compare two byte sequences in constant-time.
///
/// Both arguments only need to implement `AsRef<[u8]>` (`&str`, `[u8; 16]`, a tag, ...).
///
/// # Note
///
/// Lengths are compared first, with variable timing.
///
/// # Example
///
/// ```
/// use md4_compat::ct_eq;
///
/// assert!(ct_eq(b"same", b"same"));
/// assert!(!ct_eq(b"same", b"diff"));
/// ```
#[must_use]
pub fn ct_eq<A: AsRef<[u8]>, B: AsRef<[u8]>>(a: A, b: B) -> bool {
    cmp_slice(a.as_ref(), b.as_ref()) != 0
}

/// The length of the hex encoding of `len` bytes.
#[must_use]
#[inline]
pub const fn hex_encode_len(len: usize) -> usize {
    len << 1
}

#[inline]
fn encode_byte(byte: u8, output: &mut [u8]) {
    let lower = u32::from(byte & 0xf);
    let upper = u32::from(byte >> 4);

    let h =
        87u32.wrapping_add(lower)
            .wrapping_add(lower.wrapping_sub(10u32).wrapping_shr(8) & !38u32)
            .wrapping_shl(8)
            |
            87u32.wrapping_add(upper)
                .wrapping_add(upper.wrapping_sub(10u32).wrapping_shr(8) & !38u32);

    // truncate
    output[0] = h as u8;
    output[1] = h.wrapping_shr(8) as u8;
}

/// Constant-time lowercase hex encoding.
///
/// # Returns
///
/// The number of bytes written to `output`, always `input.len() * 2`.
///
/// # Errors
///
/// If `output` is shorter than `input.len() * 2`.
///
/// # UTF-8
///
/// The encoded region of `output` (up to the returned length) is always valid UTF-8, every
/// byte is one of `0-9a-f`. [`hex_encode_str`] relies on this.
pub fn hex_encode(input: &[u8], output: &mut [u8]) -> Result<usize, InvalidSize> {
    let hex_len = hex_encode_len(input.len());
    if output.len() < hex_len { return Err(InvalidSize) }

    for (pos, byte) in input.iter().enumerate() {
        let o_pos = pos.wrapping_shl(1);
        encode_byte(*byte, &mut output[o_pos..o_pos + 2]);
    }

    Ok(hex_len)
}

/// Constant-time hex encoding to a `&str`.
///
/// # Errors
///
/// If `output` is shorter than `input.len() * 2`.
///
/// # Example
///
/// ```
/// use md4_compat::ct::hex_encode_str;
///
/// let mut output = [0u8; 22];
/// let encoded = hex_encode_str(b"hello world", &mut output).unwrap();
/// assert_eq!(encoded, "68656c6c6f20776f726c64");
/// ```
#[inline]
pub fn hex_encode_str<'o>(input: &[u8], output: &'o mut [u8]) -> Result<&'o str, InvalidSize> {
    hex_encode(input, output)
        // SAFETY: `hex_encode` only writes ASCII hex digits into the first `len` bytes.
        .map(move |len| unsafe { core::str::from_utf8_unchecked(&output[..len]) })
}

alloc! {
    /// Constant-time hex encoding into an owned `String`.
    pub fn hex_encode_alloc(input: &[u8]) -> alloc::string::String {
        let mut output = alloc::vec![0u8; hex_encode_len(input.len())];
        // The output was sized exactly, so encoding cannot fail and every byte is hex.
        let _len = hex_encode(input, output.as_mut_slice());
        unsafe { alloc::string::String::from_utf8_unchecked(output) }
    }
}
