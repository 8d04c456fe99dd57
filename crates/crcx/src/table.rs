//! Validated 256-entry lookup table.
//!
//! A [`CrcTable`] is a pure function of `(width, polynomial)` and is immutable
//! once built, so one table can back any number of running registers (see
//! [`Crc::with_table`](crate::Crc::with_table)).

use core::fmt;

use crate::{
  common::tables::{generate, width_mask, width_msb},
  error::InvalidParameters,
  params::{CrcParams, check_shape},
};

/// Lookup table for one `(width, polynomial)` pair.
///
/// # Display
///
/// Prints eight entries per row, each zero-padded to `width / 4` hex digits:
///
/// ```
/// use crcx::CrcTable;
///
/// let table = CrcTable::new(8, 0x07)?;
/// let text = table.to_string();
/// assert!(text.starts_with("0x00 0x07 0x0e 0x09 0x1c 0x1b 0x12 0x15\n"));
/// assert_eq!(text.lines().count(), 32);
/// # Ok::<(), crcx::InvalidParameters>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable {
  width: u8,
  polynomial: u64,
  entries: [u64; 256],
}

impl CrcTable {
  /// Build the table for `(width, polynomial)`.
  ///
  /// The stored polynomial has any explicit `x^width` term stripped.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when the pair fails validation.
  pub const fn new(width: u8, polynomial: u64) -> Result<Self, InvalidParameters> {
    match check_shape(width, polynomial, width_mask(width), width_msb(width)) {
      Ok(()) => Ok(Self::new_unchecked(width, polynomial)),
      Err(e) => Err(e),
    }
  }

  /// Build the table for `params`, ignoring everything but width and
  /// polynomial.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when `params` fail validation.
  #[inline]
  pub const fn for_params(params: &CrcParams) -> Result<Self, InvalidParameters> {
    Self::new(params.width, params.polynomial)
  }

  /// Build without validating. Callers must have checked the pair.
  #[must_use]
  pub(crate) const fn new_unchecked(width: u8, polynomial: u64) -> Self {
    Self {
      width,
      polynomial: polynomial & width_mask(width),
      entries: generate(width, polynomial),
    }
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Polynomial with the implicit leading term removed.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// All 256 entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u64; 256] {
    &self.entries
  }

  /// Entry for `index`.
  #[inline]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // u8 index into a 256-entry array
  pub const fn get(&self, index: u8) -> u64 {
    self.entries[index as usize]
  }

  /// `true` when this table was built for the same width and polynomial as
  /// `params`.
  #[inline]
  #[must_use]
  pub const fn matches(&self, params: &CrcParams) -> bool {
    self.width == params.width && self.polynomial == params.polynomial & width_mask(params.width)
  }
}

impl AsRef<CrcTable> for CrcTable {
  #[inline]
  fn as_ref(&self) -> &CrcTable {
    self
  }
}

impl fmt::Display for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.width / 4);
    for row in self.entries.chunks(8) {
      let mut first = true;
      for entry in row {
        if !first {
          f.write_str(" ")?;
        }
        first = false;
        write!(f, "{entry:#0w$x}", w = digits + 2)?;
      }
      f.write_str("\n")?;
    }
    Ok(())
  }
}

impl fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &self.width)
      .field("polynomial", &format_args!("{:#x}", self.polynomial))
      .field("entries", &format_args!("[{:#x}, {:#x}, ..; 256]", self.get(0), self.get(1)))
      .finish()
  }
}
