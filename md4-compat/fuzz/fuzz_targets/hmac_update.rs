#![no_main]

use libfuzzer_sys::fuzz_target;
use md4_compat::hash::digest;
use md4_compat::mac::hmac::{hmac, Hmac};

// The first byte is the key length, then the key, then the message.
fuzz_target!(|data: &[u8]| {
    let Some((&key_len, rest)) = data.split_first() else { return };
    let (key, msg) = rest.split_at(usize::from(key_len).min(rest.len()));

    let mut mac = Hmac::new(key);
    for chunk in msg.chunks(13) {
        mac.update(chunk);
    }

    let tag = mac.finalize();
    assert_eq!(tag, hmac(key, msg));

    if key.len() > 64 {
        assert_eq!(tag, hmac(&digest(key), msg));
    }
});
