//! `Write` sinks for [`Md4`] and [`Hmac`].
//!
//! Both contexts accept every byte offered, so `write` always consumes the whole buffer and
//! `flush` is a no-op. Under `std` the sinks implement `std::io::Write`; with `embedded-io` and
//! without `std` they implement `embedded_io::Write`.
//!
//! [`Md4`]: crate::hash::Md4
//! [`Hmac`]: crate::mac::Hmac

#[cfg(any(feature = "std", feature = "embedded-io"))]
use crate::hash::{engine::Engine, Md4};
#[cfg(any(feature = "std", feature = "embedded-io"))]
use crate::mac::Hmac;

std! {
    use std::io as std_io;
    use crate::hash::DIGEST_LEN;
    use crate::mac::hmac::Digest;

    impl<E: Engine> std_io::Write for Md4<E> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std_io::Result<usize> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> std_io::Result<()> {
            self.update(buf);
            Ok(())
        }

        #[inline]
        fn flush(&mut self) -> std_io::Result<()> {
            Ok(())
        }
    }

    impl<E: Engine + Clone> std_io::Write for Hmac<E> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std_io::Result<usize> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> std_io::Result<()> {
            self.update(buf);
            Ok(())
        }

        #[inline]
        fn flush(&mut self) -> std_io::Result<()> {
            Ok(())
        }
    }

    /// Drain `reader` to its end, returning the MD4 digest of everything read.
    ///
    /// # Errors
    ///
    /// Any error `reader` reports other than [`Interrupted`], which is retried.
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> std::io::Result<()> {
    /// use md4_compat::io::digest_reader;
    ///
    /// let digest = digest_reader(b"abc".as_slice())?;
    /// assert_eq!(digest, md4_compat::hash::digest(b"abc"));
    /// # Ok(()) }
    /// ```
    ///
    /// [`Interrupted`]: std_io::ErrorKind::Interrupted
    pub fn digest_reader<R: std_io::Read>(mut reader: R) -> std_io::Result<[u8; DIGEST_LEN]> {
        let mut hasher = Md4::new();
        std_io::copy(&mut reader, &mut hasher)?;
        Ok(hasher.finalize())
    }

    /// Drain `reader` to its end, returning the `HMAC-MD4` tag of everything read under `key`.
    ///
    /// # Errors
    ///
    /// Any error `reader` reports other than [`Interrupted`], which is retried.
    ///
    /// [`Interrupted`]: std_io::ErrorKind::Interrupted
    pub fn hmac_reader<R: std_io::Read>(key: &[u8], mut reader: R) -> std_io::Result<Digest> {
        let mut mac = Hmac::new(key);
        std_io::copy(&mut reader, &mut mac)?;
        Ok(mac.finalize())
    }
}

no_std_io! {
    use embedded_io::{self as eio, ErrorType};
    use crate::Unspecified;

    impl<E: Engine> ErrorType for Md4<E> {
        type Error = Unspecified;
    }

    impl<E: Engine> eio::Write for Md4<E> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.update(buf);
            Ok(())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl<E: Engine + Clone> ErrorType for Hmac<E> {
        type Error = Unspecified;
    }

    impl<E: Engine + Clone> eio::Write for Hmac<E> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.update(buf);
            Ok(())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}
