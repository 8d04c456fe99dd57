//! Plain-data CRC context.
//!
//! [`CrcContext`] exposes every field publicly: the six user parameters, the
//! derived `mask` and `msb`, the lookup table and the running register. It is
//! what you get when a context is assembled by hand or deserialized from
//! somewhere else, so nothing about it can be trusted until it has been
//! [validated](validate). Every fallible operation re-checks it first.
//!
//! For a context that cannot be put into an inconsistent state, use
//! [`Crc`](crate::Crc).
//!
//! # Example
//!
//! ```
//! use crcx::{CrcContext, validate};
//!
//! let mut ctx = CrcContext::init(16, 0x1021, 0, 0, false, false)?;
//! assert!(validate(Some(&ctx)));
//!
//! ctx.compute(b"123456789")?;
//! assert_eq!(ctx.finalize()?, 0x31C3);
//!
//! ctx.mask = 0xFFF;
//! assert!(!validate(Some(&ctx)));
//! assert!(!validate(None));
//! # Ok::<(), crcx::InvalidParameters>(())
//! ```

use core::fmt;

use crate::{
  common::{
    kernel,
    tables::{generate, width_mask, width_msb},
  },
  error::{InvalidParameters, ParamRule},
  params::{CrcParams, check_shape},
};

/// Complete CRC state with public fields.
///
/// Only `register` changes while data is processed. `mask`, `msb` and `table`
/// are functions of `width` and `polynomial`; if they are edited by hand the
/// next fallible operation reports the mismatch.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcContext {
  /// Width in bits.
  pub width: u8,
  /// Generator polynomial, normal form.
  pub polynomial: u64,
  /// Initial register value, truncated to `width` bits.
  pub initial: u64,
  /// Final XOR value, truncated to `width` bits.
  pub xor_out: u64,
  /// `(1 << width) - 1`.
  pub mask: u64,
  /// `1 << (width - 1)`.
  pub msb: u64,
  /// Reflect input bytes.
  pub reflect_in: bool,
  /// Reflect the final register.
  pub reflect_out: bool,
  /// Lookup table for `(width, polynomial)`.
  pub table: [u64; 256],
  /// Running register.
  pub register: u64,
}

impl Default for CrcContext {
  /// An all-zero context, which does not validate.
  fn default() -> Self {
    Self {
      width: 0,
      polynomial: 0,
      initial: 0,
      xor_out: 0,
      mask: 0,
      msb: 0,
      reflect_in: false,
      reflect_out: false,
      table: [0; 256],
      register: 0,
    }
  }
}

impl CrcContext {
  /// Initialize a context.
  ///
  /// Derives `msb` and `mask`, truncates `initial` and `xor_out` to the
  /// width, validates, seeds the register and builds the table. On failure
  /// nothing is built.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when the width or polynomial is invalid.
  pub const fn init(
    width: u8,
    polynomial: u64,
    initial: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
  ) -> Result<Self, InvalidParameters> {
    let mask = width_mask(width);
    let msb = width_msb(width);
    if let Err(e) = check_shape(width, polynomial, mask, msb) {
      return Err(e);
    }

    Ok(Self {
      width,
      polynomial,
      initial: initial & mask,
      xor_out: xor_out & mask,
      mask,
      msb,
      reflect_in,
      reflect_out,
      table: generate(width, polynomial),
      register: initial & mask,
    })
  }

  /// Initialize from a parameter set.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] when `params` fail validation.
  #[inline]
  pub const fn from_params(params: &CrcParams) -> Result<Self, InvalidParameters> {
    Self::init(
      params.width,
      params.polynomial,
      params.initial,
      params.xor_out,
      params.reflect_in,
      params.reflect_out,
    )
  }

  /// The user parameters this context carries.
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    CrcParams {
      width: self.width,
      polynomial: self.polynomial,
      initial: self.initial,
      xor_out: self.xor_out,
      reflect_in: self.reflect_in,
      reflect_out: self.reflect_out,
    }
  }

  /// Validate width, polynomial, `mask` and `msb`.
  ///
  /// The table is not compared; [`generate_table`](Self::generate_table)
  /// rebuilds it from the validated pair.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] naming the first violated rule.
  #[inline]
  pub const fn check(&self) -> Result<(), InvalidParameters> {
    check_shape(self.width, self.polynomial, self.mask, self.msb)
  }

  /// `true` when [`check`](Self::check) passes.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.check().is_ok()
  }

  /// Re-validate and rebuild the lookup table in place.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] if the context is invalid; the table is
  /// left untouched.
  pub fn generate_table(&mut self) -> Result<&[u64; 256], InvalidParameters> {
    self.check()?;
    self.table = generate(self.width, self.polynomial);
    Ok(&self.table)
  }

  /// Feed one byte.
  ///
  /// Does not validate. On an inconsistent context the register still
  /// changes deterministically, but the value is meaningless.
  #[inline]
  pub fn update(&mut self, byte: u8) {
    self.register = kernel::update_byte(self.register, byte, self.width, self.reflect_in, &self.table);
  }

  /// Feed `data` byte by byte, in order. Does not validate.
  #[inline]
  pub fn update_slice(&mut self, data: &[u8]) {
    self.register = kernel::update_slice(self.register, data, self.width, self.reflect_in, &self.table);
  }

  /// Validate, then feed `data`.
  ///
  /// Does not finalize, so several calls can be chained before
  /// [`finalize`](Self::finalize).
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] before touching the register.
  pub fn compute(&mut self, data: &[u8]) -> Result<(), InvalidParameters> {
    self.check()?;
    self.update_slice(data);
    Ok(())
  }

  /// Apply the final XOR and output reflection.
  ///
  /// The result is also left in `register`, so a second call operates on the
  /// already finalized value. Use [`reset`](Self::reset) before reuse.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] without touching the register.
  pub fn finalize(&mut self) -> Result<u64, InvalidParameters> {
    self.check()?;
    self.register = kernel::finalize(self.register, self.xor_out, self.width, self.reflect_out);
    Ok(self.register)
  }

  /// Reseed the register with the initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.register = self.initial & self.mask;
  }
}

impl fmt::Debug for CrcContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcContext")
      .field("width", &self.width)
      .field("polynomial", &format_args!("{:#x}", self.polynomial))
      .field("initial", &format_args!("{:#x}", self.initial))
      .field("xor_out", &format_args!("{:#x}", self.xor_out))
      .field("mask", &format_args!("{:#x}", self.mask))
      .field("msb", &format_args!("{:#x}", self.msb))
      .field("reflect_in", &self.reflect_in)
      .field("reflect_out", &self.reflect_out)
      .field("register", &format_args!("{:#x}", self.register))
      .finish_non_exhaustive()
  }
}

/// Check an optional context, reporting the violated rule.
///
/// # Errors
///
/// Returns [`ParamRule::MissingContext`] for `None`, otherwise whatever
/// [`CrcContext::check`] reports.
#[inline]
pub const fn check(ctx: Option<&CrcContext>) -> Result<(), InvalidParameters> {
  match ctx {
    Some(ctx) => ctx.check(),
    None => Err(InvalidParameters::new(ParamRule::MissingContext)),
  }
}

/// `true` when `ctx` is present and internally consistent. Never panics.
#[inline]
#[must_use]
pub const fn validate(ctx: Option<&CrcContext>) -> bool {
  check(ctx).is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn crc8() -> CrcContext {
    CrcContext::init(8, 0x07, 0, 0, false, false).unwrap()
  }

  #[test]
  fn init_derives_masks_and_truncates() {
    let ctx = CrcContext::init(16, 0x1021, 0xABCD_FFFF, 0x1_0001, true, false).unwrap();
    assert_eq!(ctx.mask, 0xFFFF);
    assert_eq!(ctx.msb, 0x8000);
    assert_eq!(ctx.initial, 0xFFFF);
    assert_eq!(ctx.xor_out, 0x0001);
    assert_eq!(ctx.register, 0xFFFF);
    assert_eq!(ctx.table[1], 0x1021);
  }

  #[test]
  fn init_rejects_invalid_parameters() {
    let err = CrcContext::init(12, 0x80F, 0, 0, false, false).unwrap_err();
    assert_eq!(err.rule(), ParamRule::WidthNotByteMultiple);
  }

  #[test]
  fn default_is_invalid() {
    assert!(!validate(Some(&CrcContext::default())));
  }

  #[test]
  fn missing_context() {
    assert!(!validate(None));
    assert_eq!(check(None).unwrap_err().rule(), ParamRule::MissingContext);
  }

  #[test]
  fn rejects_each_broken_field() {
    let mut ctx = crc8();
    ctx.polynomial = 0;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::ZeroPolynomial);

    let mut ctx = crc8();
    ctx.width = 0;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::ZeroWidth);

    let mut ctx = crc8();
    ctx.width = 9;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::WidthNotByteMultiple);

    let mut ctx = crc8();
    ctx.width = 72;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::WidthTooLarge);

    let mut ctx = crc8();
    ctx.msb = 0x40;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::MsbMismatch);

    let mut ctx = crc8();
    ctx.mask = 0x7F;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::MaskMismatch);

    let mut ctx = crc8();
    ctx.polynomial = 0x207;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::PolynomialTooWide);
  }

  #[test]
  fn full_width_mask_must_be_all_ones() {
    let mut ctx = CrcContext::from_params(&CrcParams::CRC64_ECMA_182).unwrap();
    assert!(ctx.is_valid());
    ctx.mask = u64::MAX >> 1;
    assert_eq!(ctx.check().unwrap_err().rule(), ParamRule::MaskMismatch);
  }

  #[test]
  fn compute_leaves_register_alone_on_error() {
    let mut ctx = crc8();
    ctx.update(b'1');
    let before = ctx.register;
    ctx.mask = 0;
    assert!(ctx.compute(b"23456789").is_err());
    assert!(ctx.finalize().is_err());
    assert_eq!(ctx.register, before);
  }

  #[test]
  fn compute_then_finalize() {
    let mut ctx = crc8();
    ctx.compute(b"1234").unwrap();
    ctx.compute(b"56789").unwrap();
    assert_eq!(ctx.finalize().unwrap(), 0xF4);
    assert_eq!(ctx.register, 0xF4);

    ctx.reset();
    ctx.compute(b"W").unwrap();
    assert_eq!(ctx.finalize().unwrap(), 0xA2);
  }

  #[test]
  fn generate_table_rebuilds_after_edit() {
    let mut ctx = crc8();
    ctx.polynomial = 0x39;
    ctx.table = [0; 256];
    let table = ctx.generate_table().unwrap();
    assert_eq!(table[1], 0x39);

    ctx.width = 4;
    assert!(ctx.generate_table().is_err());
    assert_eq!(ctx.table[1], 0x39);
  }

  #[test]
  fn params_round_trip() {
    let ctx = CrcContext::from_params(&CrcParams::CRC24_BLE).unwrap();
    assert_eq!(ctx.params(), CrcParams::CRC24_BLE);
  }
}
