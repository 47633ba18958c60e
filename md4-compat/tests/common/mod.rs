#![allow(dead_code)]

pub mod rsp;

/// Decode a hex field, `00` paired with a zero length denotes the empty message.
pub fn decode_msg(msg: &str, len_bits: usize) -> Vec<u8> {
    assert_eq!(len_bits & 7, 0, "only byte oriented vectors are supported");
    if len_bits == 0 {
        return Vec::new()
    }

    let msg = hex::decode(msg).expect("[PARSE] `Msg` was not valid hex");
    assert_eq!(msg.len() * 8, len_bits, "[PARSE] `Len` disagrees with `Msg`");
    msg
}

pub fn decode_sized<const N: usize>(field: &str) -> [u8; N] {
    let mut out = [0u8; N];
    hex::decode_to_slice(field, &mut out).expect("[PARSE] field was not valid hex of the expected size");
    out
}
