//! Message Authentication Codes

pub mod hmac;

pub use hmac::{hmac, Hmac};
