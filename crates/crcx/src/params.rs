//! CRC algorithm parameters.
//!
//! Parameters follow the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! naming with one difference in the output stage: the final XOR is applied
//! to the register *before* output reflection. For catalogue entries whose
//! `xorout` is zero or all ones (every preset below) the two orders agree.

use crate::{
  common::tables::{width_mask, width_msb},
  error::{InvalidParameters, ParamRule},
};

/// Widest supported CRC, in bits.
pub const MAX_WIDTH: u8 = u64::BITS as u8;

/// CRC algorithm parameters.
///
/// - `width`: number of bits in the CRC, a positive multiple of 8 up to 64
/// - `polynomial`: generator polynomial in normal form; the leading `x^width`
///   term may be omitted or spelled out
/// - `initial`: register seed, truncated to `width` bits
/// - `xor_out`: XORed into the register at the end, truncated to `width` bits
/// - `reflect_in`: bit-reverse each input byte before mixing it in
/// - `reflect_out`: bit-reverse the final register over `width` bits
///
/// # Examples
///
/// ```
/// use crcx::{Crc, CrcParams};
///
/// let params = CrcParams {
///   width: 8,
///   polynomial: 0x07,
///   initial: 0,
///   xor_out: 0,
///   reflect_in: false,
///   reflect_out: false,
/// };
/// assert_eq!(params, CrcParams::CRC8_SMBUS);
/// assert_eq!(Crc::new(params)?.checksum(b"W"), 0xA2);
/// # Ok::<(), crcx::InvalidParameters>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits (8, 16, 24, ... 64).
  pub width: u8,
  /// Generator polynomial (normal representation).
  pub polynomial: u64,
  /// Initial register value.
  pub initial: u64,
  /// Value XORed with the register before output reflection.
  pub xor_out: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the final register over `width` bits.
  pub reflect_out: bool,
}

impl CrcParams {
  /// CRC-8/SMBUS (also the CRC-8/ATM HEC polynomial).
  pub const CRC8_SMBUS: Self = Self::normal(8, 0x07, 0x00, 0x00);

  /// CRC-8/I-432-1 (ITU-T I.432.1), CRC-8/SMBUS with a `0x55` final XOR.
  pub const CRC8_I432_1: Self = Self::normal(8, 0x07, 0x00, 0x55);

  /// CRC-8/DARC - Data Radio Channel (ETSI EN 300 751).
  pub const CRC8_DARC: Self = Self::reflected(8, 0x39, 0x00, 0x00);

  /// CRC-16/XMODEM (CCITT polynomial, zero initializer).
  pub const CRC16_XMODEM: Self = Self::normal(16, 0x1021, 0x0000, 0x0000);

  /// CRC-16/KERMIT (reflected CCITT, zero initializer).
  pub const CRC16_KERMIT: Self = Self::reflected(16, 0x1021, 0x0000, 0x0000);

  /// CRC-16/IBM-3740, better known as CRC-16/CCITT-FALSE.
  pub const CRC16_IBM_3740: Self = Self::normal(16, 0x1021, 0xFFFF, 0x0000);

  /// CRC-16/MCRF4XX: the HDLC frame check sequence of RFC 1662 before its
  /// final complement.
  ///
  /// Appending the result low byte first and running the CRC again over the
  /// whole frame leaves zero.
  pub const CRC16_MCRF4XX: Self = Self::reflected(16, 0x1021, 0xFFFF, 0x0000);

  /// Bluetooth LE advertising channel CRC.
  ///
  /// `x^24 + x^10 + x^9 + x^6 + x^4 + x^3 + x + 1` with the advertising
  /// initializer `0x555555`. Input bytes are reflected (air order is LSB first);
  /// the output is left in register order. The catalogue's CRC-24/BLE also
  /// reflects the output, so this preset is named CRC-24/BLE-ADV.
  pub const CRC24_BLE: Self = Self {
    width: 24,
    polynomial: 0x0000_065B,
    initial: 0x0055_5555,
    xor_out: 0,
    reflect_in: true,
    reflect_out: false,
  };

  /// CRC-32/CKSUM (POSIX `cksum` polynomial stage).
  pub const CRC32_CKSUM: Self = Self::normal(32, 0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF);

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip.
  pub const CRC32_ISO_HDLC: Self = Self::reflected(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF);

  /// CRC-64/ECMA-182.
  pub const CRC64_ECMA_182: Self = Self::normal(64, 0x42F0_E1EB_A9EA_3693, 0, 0);

  const fn normal(width: u8, polynomial: u64, initial: u64, xor_out: u64) -> Self {
    Self {
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in: false,
      reflect_out: false,
    }
  }

  const fn reflected(width: u8, polynomial: u64, initial: u64, xor_out: u64) -> Self {
    Self {
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in: true,
      reflect_out: true,
    }
  }

  /// `(1 << width) - 1`, or all ones for a 64-bit CRC.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width)
  }

  /// `1 << (width - 1)`.
  #[inline]
  #[must_use]
  pub const fn msb(&self) -> u64 {
    width_msb(self.width)
  }

  /// Copy of these parameters with `initial` and `xor_out` truncated to
  /// `width` bits.
  #[inline]
  #[must_use]
  pub const fn truncated(self) -> Self {
    let mask = self.mask();
    Self {
      initial: self.initial & mask,
      xor_out: self.xor_out & mask,
      ..self
    }
  }

  /// Check width and polynomial.
  ///
  /// `mask` and `msb` are derived here, so the mismatch rules cannot fire.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidParameters`] naming the first violated rule.
  pub const fn check(&self) -> Result<(), InvalidParameters> {
    check_shape(self.width, self.polynomial, self.mask(), self.msb())
  }

  /// `true` when [`check`](Self::check) passes.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.check().is_ok()
  }
}

/// Validate a width/polynomial pair together with its stored derived masks.
///
/// Rules are checked in a fixed order and the first failure is reported.
pub(crate) const fn check_shape(width: u8, polynomial: u64, mask: u64, msb: u64) -> Result<(), InvalidParameters> {
  let rule = if polynomial == 0 {
    Some(ParamRule::ZeroPolynomial)
  } else if width == 0 {
    Some(ParamRule::ZeroWidth)
  } else if width % 8 != 0 {
    Some(ParamRule::WidthNotByteMultiple)
  } else if width > MAX_WIDTH {
    Some(ParamRule::WidthTooLarge)
  } else if msb != width_msb(width) {
    Some(ParamRule::MsbMismatch)
  } else if mask != width_mask(width) {
    Some(ParamRule::MaskMismatch)
  } else if (u64::BITS - 1 - polynomial.leading_zeros()) > width as u32 {
    Some(ParamRule::PolynomialTooWide)
  } else {
    None
  };

  match rule {
    Some(rule) => Err(InvalidParameters::new(rule)),
    None => Ok(()),
  }
}
