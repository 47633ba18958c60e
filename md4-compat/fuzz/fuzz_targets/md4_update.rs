#![no_main]

use libfuzzer_sys::fuzz_target;
use md4_compat::hash::{digest, Md4};

// The first byte picks the split stride, the rest is the message.
fuzz_target!(|data: &[u8]| {
    let Some((&stride, msg)) = data.split_first() else { return };
    let stride = usize::from(stride).max(1);

    let mut hasher = Md4::new();
    for chunk in msg.chunks(stride) {
        hasher.update(chunk);
    }

    assert_eq!(hasher.len(), msg.len() as u64);
    assert_eq!(hasher.finalize(), digest(msg));
});
