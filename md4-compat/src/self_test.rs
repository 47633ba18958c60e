//! Known-Answer Self Test
//!
//! Runs the RFC 1320 suite, the padding boundary inputs (whole and chunked), and a set of
//! `HMAC-MD4` vectors covering short, block-sized, and folded keys. A failing vector is
//! reported as a [`Failure`] value, the harness never panics.
//!
//! Verbose runs log one record per vector through the [`log`] facade, `info` on pass and
//! `error` on failure, so the caller decides where (and whether) the output goes.

use core::fmt;

use crate::ct;
use crate::hash::{digest, Md4, DIGEST_LEN};
use crate::mac::hmac::hmac;

/// Which part of the implementation a vector exercises.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// The message handed to [`digest`] in one call.
    OneShot,
    /// The message fed to a [`Md4`] context `chunk` bytes at a time.
    Chunked {
        /// The size of each update.
        chunk: usize
    },
    /// A keyed [`hmac`] computation.
    Hmac
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneShot => f.write_str("md4"),
            Self::Chunked { chunk } => write!(f, "md4 ({chunk}-byte updates)"),
            Self::Hmac => f.write_str("hmac-md4")
        }
    }
}

/// A vector whose computed output did not match the known answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// The operation the vector exercised.
    pub kind: Kind,
    /// The vector's name within its battery.
    pub name: &'static str,
    /// The known answer.
    pub expected: [u8; DIGEST_LEN],
    /// What the implementation produced.
    pub actual: [u8; DIGEST_LEN]
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut expected = [0u8; ct::hex_encode_len(DIGEST_LEN)];
        let mut actual = [0u8; ct::hex_encode_len(DIGEST_LEN)];

        let expected = ct::hex_encode_str(&self.expected, &mut expected).map_err(|_| fmt::Error)?;
        let actual = ct::hex_encode_str(&self.actual, &mut actual).map_err(|_| fmt::Error)?;

        write!(
            f, "{} vector `{}` failed: expected {expected}, got {actual}",
            self.kind, self.name
        )
    }
}

std! { impl std::error::Error for Failure {} }

static A_RUN: [u8; 65] = [b'a'; 65];
static DIGITS: &[u8] =
    b"12345678901234567890123456789012345678901234567890123456789012345678901234567890";

static KEY_0B: [u8; 16] = [0x0b; 16];
static KEY_25: [u8; 25] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
    0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19
];
static KEY_42: [u8; 64] = [0x42; 64];
static KEY_AA: [u8; 80] = [0xaa; 80];
static DATA_DD: [u8; 50] = [0xdd; 50];
static DATA_CD: [u8; 50] = [0xcd; 50];

struct DigestVector {
    name: &'static str,
    input: &'static [u8],
    expected: [u8; DIGEST_LEN]
}

struct HmacVector {
    name: &'static str,
    key: &'static [u8],
    data: &'static [u8],
    expected: [u8; DIGEST_LEN]
}

macro_rules! digest_vector {
    ($name:literal, $input:expr, $hex:literal) => {
        DigestVector { name: $name, input: $input, expected: hex_literal::hex!($hex) }
    };
}

fn rfc_1320() -> [DigestVector; 7] {
    [
        digest_vector!("empty", b"", "31d6cfe0d16ae931b73c59d7e0c089c0"),
        digest_vector!("a", b"a", "bde52cb31de33e46245e05fbdbd6fb24"),
        digest_vector!("abc", b"abc", "a448017aaf21d8525fc10ae87aa6729d"),
        digest_vector!("message digest", b"message digest", "d9130a8164549fe818874806e1c7014b"),
        digest_vector!(
            "a-z", b"abcdefghijklmnopqrstuvwxyz",
            "d79e1c308aa5bbcdeea8ed63df412da9"
        ),
        digest_vector!(
            "A-Za-z0-9", b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            "043f8582f241db351ce627e153e7f0e4"
        ),
        digest_vector!("8 * 1234567890", DIGITS, "e33b4ddc9c38f2199c3e7b164fcc0536"),
    ]
}

fn boundaries() -> [DigestVector; 5] {
    [
        digest_vector!("a * 55", &A_RUN[..55], "c889c81dd86c4d2e025778944ea02881"),
        digest_vector!("a * 56", &A_RUN[..56], "d5f9a9e9257077a5f08b0b92f348b0ad"),
        digest_vector!("a * 63", &A_RUN[..63], "7ea3da77432d44c323671097d1348fc8"),
        digest_vector!("a * 64", &A_RUN[..64], "52f5076fabd22680234a3fa9f9dc5732"),
        digest_vector!("a * 65", &A_RUN[..65], "330e377bf231f3cacfecc2c182fe7e5b"),
    ]
}

fn hmac_vectors() -> [HmacVector; 7] {
    [
        HmacVector {
            name: "16-byte key",
            key: &KEY_0B,
            data: b"Hi There",
            expected: hex_literal::hex!("90a79458f58f437e21f169cdba283da6")
        },
        HmacVector {
            name: "4-byte key",
            key: b"Jefe",
            data: b"what do ya want for nothing?",
            expected: hex_literal::hex!("be192c588a8e914d8a59b474a828128f")
        },
        HmacVector {
            name: "16-byte key, 50-byte message",
            key: &KEY_AA[..16],
            data: &DATA_DD,
            expected: hex_literal::hex!("75e5fb6e71ca6dcdd9fca269a9a3cd9c")
        },
        HmacVector {
            name: "25-byte key",
            key: &KEY_25,
            data: &DATA_CD,
            expected: hex_literal::hex!("fb14cddf9efe11ad24033fc70f37bb9e")
        },
        HmacVector {
            name: "64-byte key",
            key: &KEY_42,
            data: b"key exactly one block",
            expected: hex_literal::hex!("8be4bb9e1dbe960d196f28662e630057")
        },
        HmacVector {
            name: "80-byte key",
            key: &KEY_AA,
            data: b"Test Using Larger Than Block-Size Key - Hash Key First",
            expected: hex_literal::hex!("545b8f2577657042df628fbb98430d5f")
        },
        HmacVector {
            name: "80-byte key, 73-byte message",
            key: &KEY_AA,
            data: b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
            expected: hex_literal::hex!("0192f3442ad5d1ea5268306ab0d4962e")
        },
    ]
}

fn chunked(input: &[u8], chunk: usize) -> [u8; DIGEST_LEN] {
    let mut hasher = Md4::new();
    for part in input.chunks(chunk) {
        hasher.update(part);
    }
    hasher.finalize()
}

fn verdict(
    kind: Kind,
    name: &'static str,
    expected: [u8; DIGEST_LEN],
    actual: [u8; DIGEST_LEN]
) -> Result<(), Failure> {
    if ct::ct_eq(expected, actual) {
        Ok(())
    } else {
        Err(Failure { kind, name, expected, actual })
    }
}

/// Run every vector, handing each outcome to `report`. Stops at the first failure.
fn run(mut report: impl FnMut(Kind, &'static str, &Result<(), Failure>)) -> Result<(), Failure> {
    macro_rules! record {
        ($kind:expr, $name:expr, $expected:expr, $actual:expr) => {{
            let outcome = verdict($kind, $name, $expected, $actual);
            report($kind, $name, &outcome);
            outcome?;
        }};
    }

    for v in rfc_1320().iter().chain(boundaries().iter()) {
        record!(Kind::OneShot, v.name, v.expected, digest(v.input));
    }

    // boundaries, then the two-block 80 digit vector.
    for chunk in [1, 7] {
        for v in boundaries().iter().chain(rfc_1320().iter().skip(6)) {
            record!(Kind::Chunked { chunk }, v.name, v.expected, chunked(v.input, chunk));
        }
    }

    for v in &hmac_vectors() {
        record!(Kind::Hmac, v.name, v.expected, hmac(v.key, v.data).into_inner());
    }

    Ok(())
}

/// Run the battery, returning the first vector which did not produce its known answer.
///
/// # Errors
///
/// The first [`Failure`] encountered.
///
/// # Example
///
/// ```
/// assert_eq!(md4_compat::self_test::check(), Ok(()));
/// ```
pub fn check() -> Result<(), Failure> {
    run(|_, _, _| {})
}

/// Run the battery, returning `true` if every vector passed.
///
/// With `verbose` set each vector's outcome is logged, see the [module docs](self).
pub fn self_test(verbose: bool) -> bool {
    let outcome = run(|kind, name, outcome| {
        if !verbose { return }
        match outcome {
            Ok(()) => log::info!("{kind} vector `{name}` passed"),
            Err(failure) => log::error!("{failure}")
        }
    });

    outcome.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::{String, ToString};
    use std::sync::Mutex;
    use std::vec::Vec;

    struct Capture {
        records: Mutex<Vec<(log::Level, String)>>
    }

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &log::Metadata) -> bool { true }

        fn log(&self, record: &log::Record) {
            if record.target().starts_with("md4_compat") {
                self.records.lock().unwrap().push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

    #[test]
    fn battery_passes() {
        assert_eq!(check(), Ok(()));
        assert!(self_test(false));
    }

    #[test]
    fn stable_across_invocations() {
        for _ in 0..16 {
            assert!(self_test(false));
        }
    }

    #[test]
    fn verbose_logs_every_vector() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Info);

        CAPTURE.records.lock().unwrap().clear();
        assert!(self_test(true));

        let records = CAPTURE.records.lock().unwrap();
        let expected = rfc_1320().len() + boundaries().len()
            + 2 * (boundaries().len() + 1)
            + hmac_vectors().len();

        assert!(records.len() >= expected);
        assert!(records.iter().all(|(level, _)| *level == log::Level::Info));
        assert!(records.iter().any(|(_, msg)| msg == "md4 vector `abc` passed"));
        assert!(records.iter().any(|(_, msg)| msg == "md4 (7-byte updates) vector `a * 64` passed"));
        assert!(records.iter().any(|(_, msg)| msg == "hmac-md4 vector `80-byte key` passed"));
    }

    #[test]
    fn verdict_reports_mismatch() {
        let failure = verdict(Kind::Hmac, "mismatch", [0u8; DIGEST_LEN], [1u8; DIGEST_LEN])
            .unwrap_err();

        assert_eq!(failure.kind, Kind::Hmac);
        assert_eq!(failure.name, "mismatch");
        assert_eq!(
            failure.to_string(),
            "hmac-md4 vector `mismatch` failed: expected 00000000000000000000000000000000, \
             got 01010101010101010101010101010101"
        );
    }

    #[test]
    fn run_reports_each_vector() {
        let mut seen = 0usize;
        let outcome = run(|_, name, outcome| {
            seen += 1;
            if name == "abc" {
                assert!(outcome.is_ok());
            }
        });

        assert_eq!(outcome, Ok(()));
        assert_eq!(
            seen,
            rfc_1320().len() + boundaries().len() + 2 * (boundaries().len() + 1)
                + hmac_vectors().len()
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::OneShot.to_string(), "md4");
        assert_eq!(Kind::Chunked { chunk: 1 }.to_string(), "md4 (1-byte updates)");
        assert_eq!(Kind::Hmac.to_string(), "hmac-md4");
    }
}
