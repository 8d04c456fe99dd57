//! CRC engine with parameters chosen at runtime.
//!
//! [`Crc`] is built only through validating constructors and keeps its
//! fields private, so its derived `mask` and `msb` always agree with its
//! width and finalization cannot fail.
//!
//! The table is a type parameter: an owned [`CrcTable`] by default, or any
//! `AsRef<CrcTable>` such as `&CrcTable` or `Arc<CrcTable>` when many running
//! registers share one table.
//!
//! # Example
//!
//! ```
//! use crcx::{Crc, CrcParams, CrcTable};
//!
//! let crc = Crc::new(CrcParams::CRC16_XMODEM)?;
//! assert_eq!(crc.checksum(b"123456789"), 0x31C3);
//!
//! // Two streams, one table.
//! let table = CrcTable::new(16, 0x1021)?;
//! let mut a = Crc::with_table(CrcParams::CRC16_XMODEM, &table)?;
//! let mut b = Crc::with_table(CrcParams::CRC16_IBM_3740, &table)?;
//! a.update(b"123456789");
//! b.update(b"123456789");
//! assert_eq!((a.finalize(), b.finalize()), (0x31C3, 0x29B1));
//! # Ok::<(), crcx::InvalidParameters>(())
//! ```

use core::fmt;

use traits::Checksum;

use crate::{
  common::kernel,
  context::CrcContext,
  error::{InvalidParameters, ParamRule},
  params::CrcParams,
  table::CrcTable,
};

/// Runtime-parameterized CRC.
#[derive(Clone)]
pub struct Crc<T = CrcTable> {
  params: CrcParams,
  mask: u64,
  msb: u64,
  table: T,
  register: u64,
}

impl Crc<CrcTable> {
  /// Validate `params` and build an owned table.
  ///
  /// `initial` and `xor_out` are truncated to the width.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when the width or polynomial is invalid.
  pub fn new(params: CrcParams) -> Result<Self, InvalidParameters> {
    params.check()?;
    let table = CrcTable::new_unchecked(params.width, params.polynomial);
    Ok(Self::assemble(params, table))
  }

  /// Positional form of [`new`](Self::new).
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when the width or polynomial is invalid.
  pub fn init(
    width: u8,
    polynomial: u64,
    initial: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
  ) -> Result<Self, InvalidParameters> {
    Self::new(CrcParams {
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in,
      reflect_out,
    })
  }
}

impl<T: AsRef<CrcTable>> Crc<T> {
  /// Use an existing table for `params`.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when `params` are invalid, or with
  /// [`ParamRule::TableMismatch`] when `table` was built for a different
  /// width or polynomial.
  pub fn with_table(params: CrcParams, table: T) -> Result<Self, InvalidParameters> {
    params.check()?;
    if !table.as_ref().matches(&params) {
      return Err(InvalidParameters::new(ParamRule::TableMismatch));
    }
    Ok(Self::assemble(params, table))
  }

  fn assemble(params: CrcParams, table: T) -> Self {
    let params = params.truncated();
    Self {
      mask: params.mask(),
      msb: params.msb(),
      register: params.initial,
      params,
      table,
    }
  }

  /// Parameters, with `initial` and `xor_out` truncated to the width.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.params.width
  }

  /// `(1 << width) - 1`.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    self.mask
  }

  /// `1 << (width - 1)`.
  #[inline]
  #[must_use]
  pub const fn msb(&self) -> u64 {
    self.msb
  }

  /// The lookup table.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &CrcTable {
    self.table.as_ref()
  }

  /// The raw register, before the output stage.
  #[inline]
  #[must_use]
  pub const fn register(&self) -> u64 {
    self.register
  }

  /// Feed one byte.
  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    let table = self.table.as_ref();
    self.register = kernel::update_byte(self.register, byte, table.width(), self.params.reflect_in, table.entries());
  }

  /// Feed `data` in order.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let table = self.table.as_ref();
    self.register = kernel::update_slice(self.register, data, table.width(), self.params.reflect_in, table.entries());
  }

  /// The CRC of everything fed so far.
  ///
  /// Does not modify the register, so it can be called repeatedly and
  /// updates can continue afterwards.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    kernel::finalize(self.register, self.params.xor_out, self.params.width, self.params.reflect_out)
  }

  /// Reseed the register with the initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.register = self.params.initial;
  }

  /// One-shot CRC of `data` from the initial value. Leaves `self` untouched.
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    let table = self.table.as_ref();
    let register = kernel::update_slice(self.params.initial, data, table.width(), self.params.reflect_in, table.entries());
    kernel::finalize(register, self.params.xor_out, self.params.width, self.params.reflect_out)
  }

  /// Copy out into a plain-data [`CrcContext`], register included.
  #[must_use]
  pub fn to_context(&self) -> CrcContext {
    CrcContext {
      width: self.params.width,
      polynomial: self.params.polynomial,
      initial: self.params.initial,
      xor_out: self.params.xor_out,
      mask: self.mask,
      msb: self.msb,
      reflect_in: self.params.reflect_in,
      reflect_out: self.params.reflect_out,
      table: *self.table.as_ref().entries(),
      register: self.register,
    }
  }
}

impl TryFrom<&CrcContext> for Crc<CrcTable> {
  type Error = InvalidParameters;

  /// Validate a plain-data context and adopt its register.
  ///
  /// The table is rebuilt rather than trusted.
  fn try_from(ctx: &CrcContext) -> Result<Self, Self::Error> {
    ctx.check()?;
    let mut crc = Self::new(ctx.params())?;
    crc.register = ctx.register & crc.mask;
    Ok(crc)
  }
}

impl<T: AsRef<CrcTable> + Clone> Checksum for Crc<T> {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc::reset(self);
  }
}

impl<T> fmt::Debug for Crc<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("params", &self.params)
      .field("register", &format_args!("{:#x}", self.register))
      .finish_non_exhaustive()
  }
}
