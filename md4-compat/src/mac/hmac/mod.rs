//! Hashed-Based Message Authentication Codes `HMAC`, instantiated with MD4 (RFC 2104).

mod digest;
mod key;

pub use digest::{Digest, HexDigest, HEX_DIGEST_LEN};

use core::fmt;
use zeroize::Zeroize;

use crate::ct;
use crate::error::InvalidSize;
use crate::hash::engine::{Engine, Soft};
use crate::hash::{Md4, DIGEST_LEN};
use key::{BlockKey, IPAD, OPAD};

/// `HMAC-MD4`.
///
/// The context is three independent MD4 contexts: the running inner hash, a pristine copy of
/// the inner hash seeded with `K ⊕ ipad` (used to restart the message), and the outer hash
/// seeded with `K ⊕ opad`. The key itself is not retained.
///
/// # Example
///
/// ```
/// use md4_compat::mac::hmac::Hmac;
///
/// let mut hmac = Hmac::new(b"Jefe");
///
/// hmac.update(b"what do ya want ")
///     .update(b"for nothing?");
///
/// let parts = hmac.finalize();
///
/// let mut hmac = Hmac::new(b"Jefe");
/// hmac.update(b"what do ya want for nothing?");
///
/// let all = hmac.finalize();
///
/// assert_eq!(parts, all);
/// assert_eq!(all.hex_encode().as_str(), "be192c588a8e914d8a59b474a828128f");
/// ```
#[derive(Clone)]
pub struct Hmac<E: Engine + Clone = Soft> {
    inner: Md4<E>,
    keyed_inner: Md4<E>,
    keyed_outer: Md4<E>
}

impl<E: Engine + Clone> fmt::Debug for Hmac<E> {
    /// Writes "Hmac { ... }" to the provided formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hmac { ... }")
    }
}

impl Hmac {
    /// Create a new `Hmac` instance keyed with `key`, using the [`Soft`] engine.
    ///
    /// Any key length is accepted. Keys longer than 64 bytes are first replaced by their MD4
    /// digest.
    pub fn new(key: &[u8]) -> Self {
        Self::with_engine(key, Soft)
    }
}

impl<E: Engine + Clone> Hmac<E> {
    /// Create a new `Hmac` instance keyed with `key`, using `engine` for every compression.
    pub fn with_engine(key: &[u8], engine: E) -> Self {
        let key = BlockKey::derive(key, engine.clone());

        let mut keyed_inner = Md4::with_engine(engine.clone());
        keyed_inner.update(key.pad(IPAD).as_ref());

        let mut keyed_outer = Md4::with_engine(engine);
        keyed_outer.update(key.pad(OPAD).as_ref());

        Self { inner: keyed_inner.clone(), keyed_inner, keyed_outer }
    }

    /// Updates the message to authenticate.
    ///
    /// # Arguments
    ///
    /// * `data` - The data to append to the message.
    #[inline]
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Discard the message so far, keeping the key.
    #[inline]
    pub fn reset(&mut self) {
        self.inner.clone_from(&self.keyed_inner);
    }

    /// Complete the outer hash over the inner digest.
    fn seal(outer: &mut Md4<E>, mut inner_digest: [u8; DIGEST_LEN]) -> Digest {
        outer.update(&inner_digest);
        inner_digest.zeroize();
        Digest::new(outer.finalize_reset())
    }

    /// Compute the final tag of the `HMAC` instance's message.
    #[inline]
    pub fn finalize(self) -> Digest {
        let Self { inner, mut keyed_outer, .. } = self;
        Self::seal(&mut keyed_outer, inner.finalize())
    }

    /// Compute the final tag and restart the message with the same key.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_compat::mac::hmac::{hmac, Hmac};
    ///
    /// let mut mac = Hmac::new(&[0x0b; 16]);
    ///
    /// mac.update(b"first");
    /// assert_eq!(mac.finalize_reset(), hmac(&[0x0b; 16], b"first"));
    ///
    /// mac.update(b"second");
    /// assert_eq!(mac.finalize_reset(), hmac(&[0x0b; 16], b"second"));
    /// ```
    pub fn finalize_reset(&mut self) -> Digest {
        let inner_digest = self.inner.finalize_reset();
        self.reset();

        let mut outer = self.keyed_outer.clone();
        Self::seal(&mut outer, inner_digest)
    }

    /// Compute the final tag of the `HMAC` instance's message into the `output` buffer.
    #[inline]
    pub fn finalize_into(self, output: &mut [u8; DIGEST_LEN]) {
        *output = self.finalize().into_inner();
    }

    /// Compute the final tag into the first 16 bytes of `output`.
    ///
    /// # Errors
    ///
    /// If the length of `output` is less than 16. The message is discarded either way.
    pub fn finalize_into_slice(self, output: &mut [u8]) -> Result<(), InvalidSize> {
        match output.get_mut(..DIGEST_LEN) {
            Some(dst) => {
                dst.copy_from_slice(&self.finalize().into_inner());
                Ok(())
            },
            None => Err(InvalidSize)
        }
    }

    /// Ensure that `other` is equivalent to the current message's tag in constant-time.
    ///
    /// # Arguments
    ///
    /// * `other` - The tag to compare with.
    #[must_use]
    pub fn compare_digest<T: AsRef<[u8]>>(self, other: T) -> bool {
        ct::ct_eq(self.finalize(), other)
    }
}

/// Compute `HMAC-MD4` over `data` in one shot.
///
/// # Example
///
/// ```
/// use md4_compat::mac::hmac::hmac;
///
/// let tag = hmac(&[0x0b; 16], b"Hi There");
/// assert_eq!(tag.hex_encode().as_str(), "90a79458f58f437e21f169cdba283da6");
/// ```
pub fn hmac(key: &[u8], data: &[u8]) -> Digest {
    hmac_with(Soft, key, data)
}

/// Compute `HMAC-MD4` over `data` in one shot with the provided `engine`.
pub fn hmac_with<E: Engine + Clone>(engine: E, key: &[u8], data: &[u8]) -> Digest {
    let mut mac = Hmac::with_engine(key, engine);
    mac.update(data);
    mac.finalize()
}
