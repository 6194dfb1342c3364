//! Element-wise XOR over byte slices

/// XOR `src` into `dst` element-wise
///
/// Only the common prefix `min(dst.len(), src.len())` is touched.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// XOR two byte slices, truncated to the shorter one
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}
