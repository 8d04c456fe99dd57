//! Text configuration for CRC parameters.
//!
//! [`CrcParams`] parses from and prints to the CRC Catalogue line format:
//!
//! ```text
//! width=16 poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000
//! ```
//!
//! Keys are case-insensitive and may appear in any order. `width` and `poly`
//! are required; the rest default to zero/`false`. `check`, `residue` and
//! `name` are accepted and ignored so full catalogue lines parse as-is.
//! Numbers are decimal or `0x`-prefixed hex. A bare preset name such as
//! `CRC-16/XMODEM` (or `crc16_xmodem`) is also accepted.
//!
//! With `std`, [`from_env`] reads the same syntax from `CRCX_PARAMS`.
//!
//! # Example
//!
//! ```
//! use crcx::CrcParams;
//!
//! let params: CrcParams = "width=8 poly=0x07 xorout=0x55".parse()?;
//! assert_eq!(params, CrcParams::CRC8_I432_1);
//! assert_eq!(params.to_string(), "width=8 poly=0x07 init=0x00 refin=false refout=false xorout=0x55");
//!
//! let preset: CrcParams = "crc-32/iso-hdlc".parse()?;
//! assert_eq!(preset, CrcParams::CRC32_ISO_HDLC);
//! # Ok::<(), crcx::ParseParamsError>(())
//! ```

use core::{fmt, str::FromStr};

use crate::{error::InvalidParameters, fixed::catalog, params::CrcParams};

/// Environment variable read by [`from_env`].
pub const ENV_PARAMS: &str = "CRCX_PARAMS";

/// Catalogue aliases for the built-in presets.
const ALIASES: &[(&str, CrcParams)] = &[
  ("CRC-8", CrcParams::CRC8_SMBUS),
  ("CRC-8/ITU", CrcParams::CRC8_I432_1),
  ("CRC-16/CCITT", CrcParams::CRC16_KERMIT),
  ("CRC-16/CCITT-ZERO", CrcParams::CRC16_XMODEM),
  ("CRC-16/CCITT-FALSE", CrcParams::CRC16_IBM_3740),
  ("CRC-32", CrcParams::CRC32_ISO_HDLC),
  ("CRC-32/POSIX", CrcParams::CRC32_CKSUM),
  ("CRC-64", CrcParams::CRC64_ECMA_182),
];

/// Error parsing a parameter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseParamsError {
  /// The input was empty or whitespace.
  Empty,
  /// A token was not of the form `key=value`.
  MalformedPair,
  /// A key is not one of the recognized names.
  UnknownKey,
  /// A numeric value is not decimal or `0x` hex, or does not fit.
  InvalidNumber,
  /// A flag is not `true`/`false` (or `1`/`0`, `yes`/`no`).
  InvalidBool,
  /// `width` was not given.
  MissingWidth,
  /// `poly` was not given.
  MissingPolynomial,
  /// A bare name matched no preset.
  UnknownPreset,
  /// The parsed parameters failed validation.
  Invalid(InvalidParameters),
}

impl fmt::Display for ParseParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => f.write_str("empty CRC parameter string"),
      Self::MalformedPair => f.write_str("expected key=value"),
      Self::UnknownKey => f.write_str("unknown CRC parameter key"),
      Self::InvalidNumber => f.write_str("invalid number (expected decimal or 0x hex)"),
      Self::InvalidBool => f.write_str("invalid flag (expected true or false)"),
      Self::MissingWidth => f.write_str("missing width"),
      Self::MissingPolynomial => f.write_str("missing poly"),
      Self::UnknownPreset => f.write_str("unknown CRC preset name"),
      Self::Invalid(e) => fmt::Display::fmt(e, f),
    }
  }
}

impl core::error::Error for ParseParamsError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Invalid(e) => Some(e),
      _ => None,
    }
  }
}

impl From<InvalidParameters> for ParseParamsError {
  #[inline]
  fn from(e: InvalidParameters) -> Self {
    Self::Invalid(e)
  }
}

/// Compare preset names on ASCII alphanumerics only, ignoring case.
fn names_match(a: &str, b: &str) -> bool {
  let mut a = a.chars().filter(char::is_ascii_alphanumeric);
  let mut b = b.chars().filter(char::is_ascii_alphanumeric);
  loop {
    match (a.next(), b.next()) {
      (None, None) => return true,
      (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
      _ => return false,
    }
  }
}

/// Look up a preset by catalogue name or alias.
///
/// Matching ignores case and punctuation, so `CRC-16/XMODEM`,
/// `crc16_xmodem` and `crc16xmodem` are the same name.
#[must_use]
pub fn by_name(name: &str) -> Option<CrcParams> {
  let name = name.trim();
  catalog::ALL
    .iter()
    .chain(ALIASES.iter())
    .find(|(label, _)| names_match(label, name))
    .map(|&(_, params)| params)
}

/// Catalogue name of a preset with exactly these parameters, if any.
#[must_use]
pub fn name_of(params: &CrcParams) -> Option<&'static str> {
  let params = params.truncated();
  catalog::ALL.iter().find(|(_, p)| *p == params).map(|&(label, _)| label)
}

fn key_is(key: &str, names: &[&str]) -> bool {
  names.iter().any(|name| key.eq_ignore_ascii_case(name))
}

fn parse_u64(value: &str) -> Result<u64, ParseParamsError> {
  let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
    Some(hex) => u64::from_str_radix(hex, 16),
    None => value.parse::<u64>(),
  };
  parsed.map_err(|_| ParseParamsError::InvalidNumber)
}

fn parse_bool(value: &str) -> Result<bool, ParseParamsError> {
  if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") || value == "1" {
    return Ok(true);
  }
  if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("no") || value == "0" {
    return Ok(false);
  }
  Err(ParseParamsError::InvalidBool)
}

impl FromStr for CrcParams {
  type Err = ParseParamsError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() {
      return Err(ParseParamsError::Empty);
    }
    if !s.contains('=') {
      return by_name(s).ok_or(ParseParamsError::UnknownPreset);
    }

    let mut width = None;
    let mut polynomial = None;
    let mut params = CrcParams {
      width: 0,
      polynomial: 0,
      initial: 0,
      xor_out: 0,
      reflect_in: false,
      reflect_out: false,
    };

    for token in s.split_ascii_whitespace() {
      let (key, value) = token.split_once('=').ok_or(ParseParamsError::MalformedPair)?;
      if key_is(key, &["width"]) {
        let w = parse_u64(value)?;
        width = Some(u8::try_from(w).map_err(|_| ParseParamsError::InvalidNumber)?);
      } else if key_is(key, &["poly", "polynomial"]) {
        polynomial = Some(parse_u64(value)?);
      } else if key_is(key, &["init", "initial"]) {
        params.initial = parse_u64(value)?;
      } else if key_is(key, &["xorout", "xor_out", "final"]) {
        params.xor_out = parse_u64(value)?;
      } else if key_is(key, &["refin", "reflect_in"]) {
        params.reflect_in = parse_bool(value)?;
      } else if key_is(key, &["refout", "reflect_out"]) {
        params.reflect_out = parse_bool(value)?;
      } else if !key_is(key, &["check", "residue", "name"]) {
        return Err(ParseParamsError::UnknownKey);
      }
    }

    params.width = width.ok_or(ParseParamsError::MissingWidth)?;
    params.polynomial = polynomial.ok_or(ParseParamsError::MissingPolynomial)?;
    params.check()?;
    Ok(params)
  }
}

impl fmt::Display for CrcParams {
  /// Catalogue form, hex values padded to `width / 4` digits.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let w = usize::from(self.width / 4) + 2;
    write!(
      f,
      "width={} poly={:#0w$x} init={:#0w$x} refin={} refout={} xorout={:#0w$x}",
      self.width, self.polynomial, self.initial, self.reflect_in, self.reflect_out, self.xor_out,
    )
  }
}

/// Parse an environment value: trimmed, empty means unset, errors are
/// ignored.
#[must_use]
pub fn parse_env_value(value: &str) -> Option<CrcParams> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse().ok()
}

/// Parameters from `CRCX_PARAMS`, read once per process.
///
/// Returns `None` when the variable is unset, empty or does not parse.
#[cfg(feature = "std")]
#[must_use]
pub fn from_env() -> Option<CrcParams> {
  use std::sync::OnceLock;
  static PARAMS: OnceLock<Option<CrcParams>> = OnceLock::new();
  *PARAMS.get_or_init(|| std::env::var(ENV_PARAMS).ok().as_deref().and_then(parse_env_value))
}
