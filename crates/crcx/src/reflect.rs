//! Bit reflection.

/// Reverse the low `bits` bits of `value`.
///
/// `bits` is clamped to 64 and bits above it are discarded, so the function
/// is total: `reflect(x, 0)` is 0 and `reflect(reflect(x, n), n) == x` for any
/// `x < 2^n`.
///
/// # Examples
///
/// ```
/// use crcx::reflect;
///
/// assert_eq!(reflect(0xF7B3D5, 24), 0xABCDEF);
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, bits: u32) -> u64 {
  let n = if bits > u64::BITS { u64::BITS } else { bits };
  if n == 0 {
    0
  } else {
    value.reverse_bits() >> (u64::BITS - n)
  }
}
