use core::fmt;
use crate::ct;
use crate::hash::DIGEST_LEN;

/// The length of a hex-encoded `HMAC-MD4` tag.
pub const HEX_DIGEST_LEN: usize = ct::hex_encode_len(DIGEST_LEN);

/// Utility wrapper around the final `HMAC` tag.
#[must_use]
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct Digest {
    raw: [u8; DIGEST_LEN]
}

impl fmt::Debug for Digest {
    /// Writes "Digest { ... }" to the provided formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Digest { ... }")
    }
}

impl Digest {
    /// Create a new `Digest` instance.
    pub const fn new(digest: [u8; DIGEST_LEN]) -> Self {
        Self { raw: digest }
    }

    /// Unwraps this `Digest` returning the raw byte array.
    ///
    /// # Note
    ///
    /// Comparing `Digest`s should always be in constant-time, do not use `into_inner` prior to
    /// checking equivalence between `Digest`s. The `Digest` type's `PartialEq` implementations
    /// are all in constant-time. Either leverage these, or use this crate's [`ct_eq`] function.
    ///
    /// [`ct_eq`]: crate::ct_eq
    #[must_use]
    pub const fn into_inner(self) -> [u8; DIGEST_LEN] {
        self.raw
    }

    /// Hex-encodes the underlying tag in constant-time, returning the [`HexDigest`] type.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::mac::hmac::hmac;
    ///
    /// let tag = hmac(b"Jefe", b"what do ya want for nothing?");
    /// assert_eq!(tag.hex_encode().as_str(), "be192c588a8e914d8a59b474a828128f");
    /// ```
    pub fn hex_encode(&self) -> HexDigest {
        let mut out = [0u8; HEX_DIGEST_LEN];
        // `out` is exactly twice the tag length, encoding cannot fail.
        let _len = ct::hex_encode(&self.raw, &mut out);
        HexDigest::new(out)
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] { self.raw.as_slice() }
}

impl AsRef<[u8; DIGEST_LEN]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8; DIGEST_LEN] { &self.raw }
}

impl PartialEq for Digest {
    /// Constant-Time Equivalence.
    fn eq(&self, other: &Self) -> bool {
        ct::ct_eq(self.raw, other.raw)
    }
}

impl Eq for Digest {}

impl PartialEq<[u8]> for Digest {
    /// Constant-Time Equivalence.
    fn eq(&self, other: &[u8]) -> bool {
        ct::ct_eq(self.raw, other)
    }
}

impl PartialEq<[u8; DIGEST_LEN]> for Digest {
    /// Constant-Time Equivalence.
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        ct::ct_eq(self.raw, other)
    }
}

impl<T: ?Sized> PartialEq<&T> for Digest where Self: PartialEq<T> {
    /// Constant-Time Equivalence.
    #[inline]
    fn eq(&self, other: &&T) -> bool {
        self.eq(*other)
    }
}

impl<T: ?Sized> PartialEq<&mut T> for Digest where Self: PartialEq<T> {
    /// Constant-Time Equivalence.
    #[inline]
    fn eq(&self, other: &&mut T) -> bool {
        self.eq(&**other)
    }
}

/// Utility wrapper around the hex-encoded final `HMAC` tag.
#[repr(transparent)]
#[must_use]
#[derive(Copy, Clone)]
pub struct HexDigest {
    raw: [u8; HEX_DIGEST_LEN]
}

impl HexDigest {
    // new is not public as we cannot guarantee the provided data is properly hex-encoded.
    const fn new(digest: [u8; HEX_DIGEST_LEN]) -> Self {
        Self { raw: digest }
    }

    /// Returns the underlying hex-encoded tag as a `&str`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `HexDigest` is only constructed from `ct::hex_encode` output, which is ASCII.
        unsafe { core::str::from_utf8_unchecked(self.raw.as_slice()) }
    }

    /// Unwraps this `HexDigest` returning the hex-encoded byte array.
    ///
    /// # Note
    ///
    /// Comparing `HexDigest`s should always be in constant-time, do not use `into_inner` prior to
    /// checking equivalence between `HexDigest`s. The `PartialEq` implementations are all in
    /// constant-time.
    #[must_use]
    pub const fn into_inner(self) -> [u8; HEX_DIGEST_LEN] {
        self.raw
    }
}

impl fmt::Debug for HexDigest {
    /// Writes "HexDigest { ... }" to the provided formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HexDigest { ... }")
    }
}

impl fmt::Display for HexDigest {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<[u8]> for HexDigest {
    #[inline]
    fn as_ref(&self) -> &[u8] { self.raw.as_slice() }
}

impl AsRef<str> for HexDigest {
    #[inline]
    fn as_ref(&self) -> &str { self.as_str() }
}

impl PartialEq for HexDigest {
    /// Constant-Time Equivalence.
    fn eq(&self, other: &Self) -> bool {
        ct::ct_eq(self.raw, other.raw)
    }
}

impl Eq for HexDigest {}

impl PartialEq<[u8]> for HexDigest {
    /// Constant-Time Equivalence.
    fn eq(&self, other: &[u8]) -> bool {
        ct::ct_eq(self.raw, other)
    }
}

impl PartialEq<str> for HexDigest {
    /// Constant-Time Equivalence.
    fn eq(&self, other: &str) -> bool {
        ct::ct_eq(self.raw, other)
    }
}

impl<T: ?Sized> PartialEq<&T> for HexDigest where Self: PartialEq<T> {
    /// Constant-Time Equivalence.
    #[inline]
    fn eq(&self, other: &&T) -> bool {
        self.eq(*other)
    }
}

impl From<Digest> for HexDigest {
    #[inline]
    fn from(value: Digest) -> Self {
        value.hex_encode()
    }
}
