//! Zigzag mapping between signed deltas and unsigned parameters

/// Map a signed delta onto the non-negative integers: 0, -1, 1, -2, 2, ...
#[inline]
pub fn zigzag_encode(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

/// Inverse of [`zigzag_encode`]
#[inline]
pub fn zigzag_decode(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}
