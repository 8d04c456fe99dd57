//! Table-driven update and finalize kernel.
//!
//! Both engines funnel through these functions, so the dynamic [`Crc`] and the
//! static [`StaticCrc`] cannot drift apart. The kernel is `const` so static
//! algorithms can be evaluated at compile time.
//!
//! [`Crc`]: crate::Crc
//! [`StaticCrc`]: crate::StaticCrc

// SAFETY: Table lookups index a [u64; 256] with a u8, which is always in bounds.
#![allow(clippy::indexing_slicing)]

use crate::{common::tables::width_mask, reflect::reflect};

/// Advance `register` by one input byte.
///
/// The top byte of the register is XORed with the (optionally reflected)
/// input to pick a table entry; the rest of the register shifts up by 8. At
/// width 8 the whole register is shifted out, leaving just the table entry.
#[inline(always)]
#[must_use]
pub const fn update_byte(register: u64, byte: u8, width: u8, reflect_in: bool, table: &[u64; 256]) -> u64 {
  let byte = if reflect_in { byte.reverse_bits() } else { byte };

  let (upper, shifted) = if width <= 8 {
    (register as u8, 0)
  } else {
    let upper = match register.checked_shr(width as u32 - 8) {
      Some(top) => top as u8,
      None => 0,
    };
    (upper, (register << 8) & width_mask(width))
  };

  shifted ^ table[(byte ^ upper) as usize]
}

/// Fold [`update_byte`] over `data` in order.
#[inline]
#[must_use]
pub const fn update_slice(mut register: u64, data: &[u8], width: u8, reflect_in: bool, table: &[u64; 256]) -> u64 {
  let mut i = 0;
  while i < data.len() {
    register = update_byte(register, data[i], width, reflect_in, table);
    i += 1;
  }
  register
}

/// Apply the output stage: XOR with `xor_out`, mask, then reflect if asked.
#[inline]
#[must_use]
pub const fn finalize(register: u64, xor_out: u64, width: u8, reflect_out: bool) -> u64 {
  let out = (register ^ xor_out) & width_mask(width);
  if reflect_out { reflect(out, width as u32) } else { out }
}
