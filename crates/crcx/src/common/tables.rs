//! Const-fn CRC lookup table generation.
//!
//! Every width shares one generator: a 256-entry table of `u64`, indexed by
//! the byte shifted out of the top of the register. Entries are stored in
//! normal (MSB-first) orientation; input reflection happens on the byte, not
//! in the table.
//!
//! # Construction
//!
//! Only the eight power-of-two entries need a polynomial step. Every other
//! entry is the XOR of entries already computed, because the table is linear
//! over GF(2):
//!
//! ```text
//! table[i ^ j] = table[i] ^ table[j]
//! ```
//!
//! So the generator walks `i = 1, 2, 4, ... 128`, advancing the CRC by one bit
//! per step, and fills `table[i ^ j]` for every `j < i`.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// `(1 << width) - 1`, saturating to all ones at 64 bits.
#[inline]
#[must_use]
pub const fn width_mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// `1 << (width - 1)`, or zero when the width is outside `1..=64`.
#[inline]
#[must_use]
pub const fn width_msb(width: u8) -> u64 {
  if width == 0 || width > 64 {
    0
  } else {
    1u64 << (width - 1)
  }
}

/// Generate the 256-entry lookup table for `(width, polynomial)`.
///
/// The polynomial is truncated to `width` bits, so an explicit leading term is
/// discarded. The caller is responsible for validating the pair; an invalid
/// width yields a table of zeros rather than a panic.
#[must_use]
pub const fn generate(width: u8, polynomial: u64) -> [u64; 256] {
  let mask = width_mask(width);
  let msb = width_msb(width);
  let poly = polynomial & mask;

  let mut table = [0u64; 256];
  let mut crc = msb;
  let mut i = 1usize;
  while i < 256 {
    crc = if crc & msb != 0 { (crc << 1) ^ poly } else { crc << 1 };
    crc &= mask;

    let mut j = 0usize;
    while j < i {
      table[i ^ j] = crc ^ table[j];
      j += 1;
    }
    i <<= 1;
  }
  table
}

/// Compute one table entry the slow way: place `index` in the top byte of
/// the register and shift it through eight polynomial steps.
#[cfg(test)]
#[must_use]
pub const fn table_entry_bitwise(width: u8, polynomial: u64, index: u8) -> u64 {
  let mask = width_mask(width);
  let msb = width_msb(width);
  let poly = polynomial & mask;

  let mut crc = if width >= 8 { (index as u64) << (width - 8) } else { 0 };
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & msb != 0 { (crc << 1) ^ poly } else { crc << 1 };
    crc &= mask;
    bit += 1;
  }
  crc
}
