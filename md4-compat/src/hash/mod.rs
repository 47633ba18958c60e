//! The MD4 Message Digest
//!
//! # Security Warning
//!
//! MD4 is broken. It is provided only to reproduce the exact output of deployed protocols
//! (credential fingerprints, pairing nonces, compatibility hashes), never as a security
//! primitive for new designs.

pub mod engine;
#[doc(hidden)]
pub mod md4;

wolfcrypt! {
    mod wolfcrypt;
}

pub use md4::{digest, digest_with, Md4, DIGEST_LEN};
