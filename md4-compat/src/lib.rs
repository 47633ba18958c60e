//! MD4 (RFC 1320) and `HMAC-MD4` (RFC 2104) for protocol compatibility.
//!
//! MD4 is cryptographically broken. This crate exists to reproduce the exact bytes legacy
//! protocols expect, it must not be used to protect anything new.
//!
//! ```
//! use md4_compat::hash::{digest, Md4};
//!
//! let mut hasher = Md4::new();
//! hasher.update(b"message ").update(b"digest");
//!
//! assert_eq!(hasher.finalize(), digest(b"message digest"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// lengths are bounded by the block size wherever a cast narrows.
#![allow(clippy::cast_possible_truncation)]
// stupid lint IMO
#![allow(clippy::module_name_repetitions)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]
// engines are taken by value so `&mut E` and zero-sized engines both work.
#![allow(clippy::needless_pass_by_value)]
// I don't care for the assertion in my panic API where I am checking if OK. This is just for
// more controlled error messages. Again, should be disabled
#![allow(clippy::manual_assert)]
// I don't need a linter lecturing me on performance
#![allow(clippy::inline_always)]
// I am doing constant time bitwise hacks
#![allow(clippy::cast_sign_loss)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod opaque_res;
pub mod ct;

pub mod hash;
pub mod mac;
pub mod io;
pub mod self_test;

pub use error::{InvalidSize, Unspecified};
pub use ct::ct_eq;
