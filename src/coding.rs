//! Fixed-width integer encoding helpers.
//!
//! All integers persisted in the filter region are little-endian and
//! unsigned.

/// Append a `u32` to `dst` in little-endian byte order.
pub fn put_fixed32(dst: &mut Vec<u8>, value: u32) {
    dst.extend_from_slice(&value.to_le_bytes());
}

/// Decode a little-endian `u32` from the first four bytes of `src`.
///
/// Callers must have bounds-checked `src` to hold at least four bytes.
pub fn decode_fixed32(src: &[u8]) -> u32 {
    u32::from_le_bytes(src[..4].try_into().unwrap())
}
