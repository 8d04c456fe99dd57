//! CRC engine with parameters fixed at compile time.
//!
//! An [`Algorithm`] type names a parameter set and the register integer its
//! output fits in. [`StaticCrc<A>`] then evaluates the lookup table as a
//! `const`, so the table lives in read-only data and a bad parameter set is
//! a build error rather than a runtime one.
//!
//! # Example
//!
//! ```
//! use crcx::{Crc16Xmodem, Crc24Ble, Checksum, FixedChecksum};
//!
//! assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3u16);
//!
//! let mut crc = Crc24Ble::new();
//! crc.update(&[0x42, 0x09, 0xA6, 0xA5, 0xA4, 0xA3]);
//! crc.update(&[0xA2, 0xC1, 0x01, 0x02, 0x03]);
//! assert_eq!(crc.finalize(), 0x00B5_2DD7);
//!
//! // The whole computation is available at compile time.
//! const CHECK: u64 = Crc16Xmodem::compute(b"123456789");
//! assert_eq!(CHECK, 0x31C3);
//! ```
//!
//! A custom algorithm is a marker type:
//!
//! ```
//! use crcx::{Algorithm, CrcParams, FixedChecksum, StaticCrc};
//!
//! enum Crc16Arc {}
//!
//! impl Algorithm for Crc16Arc {
//!   type Register = u16;
//!   const PARAMS: CrcParams = CrcParams {
//!     width: 16,
//!     polynomial: 0x8005,
//!     initial: 0,
//!     xor_out: 0,
//!     reflect_in: true,
//!     reflect_out: true,
//!   };
//!   const NAME: &'static str = "CRC-16/ARC";
//! }
//!
//! assert_eq!(StaticCrc::<Crc16Arc>::checksum(b"123456789"), 0xBB3D);
//! ```

use core::{fmt, marker::PhantomData};

use traits::{Checksum, FixedChecksum};

use crate::{common::kernel, params::CrcParams, table::CrcTable};

mod sealed {
  pub trait Sealed {}
}

/// Unsigned integer types a static CRC can report its value in.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32` and `u64`.
pub trait Register: sealed::Sealed + Copy + Eq + fmt::Debug + fmt::LowerHex + Send + Sync + 'static {
  /// Width of the integer in bits.
  const BITS: u32;

  /// Truncate a 64-bit register value.
  fn from_register(value: u64) -> Self;

  /// Widen to the 64-bit register.
  fn into_register(self) -> u64;
}

macro_rules! impl_register {
  ($($t:ty),*) => {
    $(
      impl sealed::Sealed for $t {}

      impl Register for $t {
        const BITS: u32 = <$t>::BITS;

        #[inline(always)]
        fn from_register(value: u64) -> Self {
          value as $t
        }

        #[inline(always)]
        fn into_register(self) -> u64 {
          u64::from(self)
        }
      }
    )*
  };
}

impl_register!(u8, u16, u32, u64);

/// A parameter set known at compile time.
///
/// Implement this on an uninhabited marker type and use it through
/// [`StaticCrc`]. `Register` must be at least `PARAMS.width` bits wide.
pub trait Algorithm: 'static {
  /// Integer type the CRC value is reported in.
  type Register: Register;

  /// The algorithm's parameters.
  const PARAMS: CrcParams;

  /// Human-readable name, e.g. `"CRC-32/CKSUM"`.
  const NAME: &'static str;
}

/// CRC for the algorithm `A`, with its table built at compile time.
pub struct StaticCrc<A: Algorithm> {
  register: u64,
  _algorithm: PhantomData<fn() -> A>,
}

impl<A: Algorithm> StaticCrc<A> {
  const VALID: () = {
    assert!(
      A::PARAMS.width as u32 <= <A::Register as Register>::BITS,
      "CRC width does not fit the register type"
    );
    assert!(A::PARAMS.is_valid(), "invalid CRC parameters");
  };

  const PARAMS: CrcParams = A::PARAMS.truncated();

  /// The lookup table, evaluated at compile time.
  pub const TABLE: &'static CrcTable = {
    let () = Self::VALID;
    &CrcTable::new_unchecked(A::PARAMS.width, A::PARAMS.polynomial)
  };

  /// A fresh state seeded with the algorithm's initial value.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    let () = Self::VALID;
    Self {
      register: Self::PARAMS.initial,
      _algorithm: PhantomData,
    }
  }

  /// Resume from a raw register value, as returned by
  /// [`register`](Self::register).
  #[inline]
  #[must_use]
  pub const fn resume(register: u64) -> Self {
    let () = Self::VALID;
    Self {
      register: register & Self::PARAMS.mask(),
      _algorithm: PhantomData,
    }
  }

  /// Parameters, with `initial` and `xor_out` truncated to the width.
  #[inline]
  #[must_use]
  pub const fn params() -> CrcParams {
    Self::PARAMS
  }

  /// The algorithm's name.
  #[inline]
  #[must_use]
  pub const fn name() -> &'static str {
    A::NAME
  }

  /// The raw register, before the output stage.
  #[inline]
  #[must_use]
  pub const fn register(&self) -> u64 {
    self.register
  }

  /// Feed `data` in order. Usable in `const` contexts.
  #[inline]
  pub const fn update_const(&mut self, data: &[u8]) {
    self.register = kernel::update_slice(
      self.register,
      data,
      Self::PARAMS.width,
      Self::PARAMS.reflect_in,
      Self::TABLE.entries(),
    );
  }

  /// The output-stage value as a `u64`. Usable in `const` contexts.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u64 {
    kernel::finalize(
      self.register,
      Self::PARAMS.xor_out,
      Self::PARAMS.width,
      Self::PARAMS.reflect_out,
    )
  }

  /// One-shot CRC of `data` as a `u64`, evaluable at compile time.
  #[must_use]
  pub const fn compute(data: &[u8]) -> u64 {
    let mut crc = Self::new();
    crc.update_const(data);
    crc.value()
  }
}

impl<A: Algorithm> Checksum for StaticCrc<A> {
  type Output = A::Register;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.update_const(data);
  }

  #[inline]
  fn finalize(&self) -> A::Register {
    A::Register::from_register(self.value())
  }

  #[inline]
  fn reset(&mut self) {
    self.register = Self::PARAMS.initial;
  }
}

impl<A: Algorithm> FixedChecksum for StaticCrc<A> {
  const OUTPUT_SIZE: usize = A::PARAMS.width as usize / 8;

  #[inline]
  fn new() -> Self {
    Self::new()
  }

  #[inline]
  fn with_initial(initial: A::Register) -> Self {
    Self::resume(initial.into_register())
  }
}

impl<A: Algorithm> Clone for StaticCrc<A> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<A: Algorithm> Copy for StaticCrc<A> {}

impl<A: Algorithm> Default for StaticCrc<A> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Algorithm> fmt::Debug for StaticCrc<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StaticCrc")
      .field("algorithm", &A::NAME)
      .field("register", &format_args!("{:#x}", self.register))
      .finish()
  }
}

define_algorithms! {
  /// CRC-8/SMBUS: `x^8 + x^2 + x + 1`, the ATM HEC polynomial.
  Crc8Smbus: u8 = CrcParams::CRC8_SMBUS, "CRC-8/SMBUS";
  /// CRC-8/I-432-1 (ITU-T I.432.1).
  Crc8I4321: u8 = CrcParams::CRC8_I432_1, "CRC-8/I-432-1";
  /// CRC-8/DARC.
  Crc8Darc: u8 = CrcParams::CRC8_DARC, "CRC-8/DARC";
  /// CRC-16/XMODEM.
  Crc16Xmodem: u16 = CrcParams::CRC16_XMODEM, "CRC-16/XMODEM";
  /// CRC-16/KERMIT.
  Crc16Kermit: u16 = CrcParams::CRC16_KERMIT, "CRC-16/KERMIT";
  /// CRC-16/IBM-3740 (CCITT-FALSE).
  Crc16Ibm3740: u16 = CrcParams::CRC16_IBM_3740, "CRC-16/IBM-3740";
  /// CRC-16/MCRF4XX, the RFC 1662 HDLC FCS-16 without the final complement.
  Crc16Mcrf4xx: u16 = CrcParams::CRC16_MCRF4XX, "CRC-16/MCRF4XX";
  /// Bluetooth LE advertising channel CRC-24, output in register order.
  Crc24Ble: u32 = CrcParams::CRC24_BLE, "CRC-24/BLE-ADV";
  /// CRC-32/CKSUM (POSIX).
  Crc32Cksum: u32 = CrcParams::CRC32_CKSUM, "CRC-32/CKSUM";
  /// CRC-32/ISO-HDLC.
  Crc32IsoHdlc: u32 = CrcParams::CRC32_ISO_HDLC, "CRC-32/ISO-HDLC";
  /// CRC-64/ECMA-182.
  Crc64Ecma182: u64 = CrcParams::CRC64_ECMA_182, "CRC-64/ECMA-182";
}
