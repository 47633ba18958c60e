use core::fmt;

/// A generic error type representing an unspecified failure.
///
/// Every byte sequence is a valid message for MD4, so the only failures this crate reports are
/// caller-contract violations, such as handing `finalize_into` an output buffer which cannot
/// hold the digest. `Unspecified` is deliberately non-descriptive, mirroring the rest of the
/// opaque error handling in this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unspecified;

impl fmt::Display for Unspecified {
    /// Writes "Unspecified" to the formatter.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Unspecified")
    }
}

std! { impl std::error::Error for Unspecified {} }

#[cfg(feature = "embedded-io")]
impl embedded_io::Error for Unspecified {
    #[inline]
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

/// The provided buffer was too small for the requested output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidSize;

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InvalidSize")
    }
}

std! { impl std::error::Error for InvalidSize {} }

impl From<InvalidSize> for Unspecified {
    #[inline]
    fn from(_value: InvalidSize) -> Self {
        Self
    }
}
