//! Error type for CRC parameter validation.
//!
//! The engine has exactly one failure mode: the parameters do not describe a
//! CRC it can compute. [`InvalidParameters`] carries the [`ParamRule`] that was
//! violated so callers can report something useful, but there is no other
//! error kind and nothing is retryable.

use core::fmt;

/// The validation rule a set of CRC parameters violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamRule {
  /// No context was supplied.
  MissingContext,
  /// The polynomial is zero.
  ZeroPolynomial,
  /// The width is zero.
  ZeroWidth,
  /// The width is not a multiple of 8.
  WidthNotByteMultiple,
  /// The width exceeds the 64-bit register.
  WidthTooLarge,
  /// The stored most-significant-bit mask is not `1 << (width - 1)`.
  MsbMismatch,
  /// The stored width mask is not `(1 << width) - 1`.
  MaskMismatch,
  /// The polynomial has a set bit above position `width`.
  PolynomialTooWide,
  /// A shared table was built for a different `(width, polynomial)` pair.
  TableMismatch,
}

impl ParamRule {
  /// Short human-readable description of the rule.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::MissingContext => "no CRC context supplied",
      Self::ZeroPolynomial => "polynomial must be non-zero",
      Self::ZeroWidth => "width must be non-zero",
      Self::WidthNotByteMultiple => "width must be a multiple of 8",
      Self::WidthTooLarge => "width must not exceed 64 bits",
      Self::MsbMismatch => "msb must equal 1 << (width - 1)",
      Self::MaskMismatch => "mask must equal (1 << width) - 1",
      Self::PolynomialTooWide => "polynomial does not fit in width bits",
      Self::TableMismatch => "table was generated for different parameters",
    }
  }
}

/// The CRC parameters are inconsistent.
///
/// Returned by initialization, table generation, finalization and one-shot
/// computation whenever width, polynomial, mask or msb disagree.
///
/// # Examples
///
/// ```
/// use crcx::{Crc, CrcParams, ParamRule};
///
/// let params = CrcParams { width: 12, ..CrcParams::CRC16_XMODEM };
/// let err = Crc::new(params).unwrap_err();
/// assert_eq!(err.rule(), ParamRule::WidthNotByteMultiple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidParameters {
  rule: ParamRule,
}

impl InvalidParameters {
  /// Create an error for the violated `rule`.
  #[inline]
  #[must_use]
  pub const fn new(rule: ParamRule) -> Self {
    Self { rule }
  }

  /// The rule that was violated.
  #[inline]
  #[must_use]
  pub const fn rule(&self) -> ParamRule {
    self.rule
  }
}

impl fmt::Display for InvalidParameters {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid CRC parameters: {}", self.rule.as_str())
  }
}

impl core::error::Error for InvalidParameters {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_names_the_rule() {
    let err = InvalidParameters::new(ParamRule::ZeroPolynomial);
    assert_eq!(err.to_string(), "invalid CRC parameters: polynomial must be non-zero");
  }

  #[test]
  fn rule_round_trips() {
    let err = InvalidParameters::new(ParamRule::MaskMismatch);
    assert_eq!(err.rule(), ParamRule::MaskMismatch);
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<InvalidParameters>();
    assert_sync::<InvalidParameters>();
    assert_error::<InvalidParameters>();
  }
}
