//! Parameterized, table-driven CRC computation.
//!
//! This crate computes any CRC whose width is a multiple of 8 bits, up to 64,
//! from the usual six parameters: width, polynomial, initial value, final XOR
//! and input/output reflection. Every engine uses the same byte-at-a-time
//! (Sarwate) table lookup and the same `const fn` table generator.
//!
//! # Engines
//!
//! | Type | Parameters | Table | Output |
//! |------|------------|-------|--------|
//! | [`Crc`] | runtime, validated once | owned, borrowed or `Arc` | `u64` |
//! | [`StaticCrc<A>`] | compile time via [`Algorithm`] | `const` | `A::Register` |
//! | [`CrcContext`] | public fields, validated per call | inline | `u64` |
//!
//! # Presets
//!
//! | Type | Width | Polynomial | Init | RefIn/Out | XorOut | Check |
//! |------|-------|------------|------|-----------|--------|-------|
//! | [`Crc8Smbus`] | 8 | 0x07 | 0x00 | no/no | 0x00 | 0xF4 |
//! | [`Crc8I4321`] | 8 | 0x07 | 0x00 | no/no | 0x55 | 0xA1 |
//! | [`Crc8Darc`] | 8 | 0x39 | 0x00 | yes/yes | 0x00 | 0x15 |
//! | [`Crc16Xmodem`] | 16 | 0x1021 | 0x0000 | no/no | 0x0000 | 0x31C3 |
//! | [`Crc16Kermit`] | 16 | 0x1021 | 0x0000 | yes/yes | 0x0000 | 0x2189 |
//! | [`Crc16Ibm3740`] | 16 | 0x1021 | 0xFFFF | no/no | 0x0000 | 0x29B1 |
//! | [`Crc16Mcrf4xx`] | 16 | 0x1021 | 0xFFFF | yes/yes | 0x0000 | 0x6F91 |
//! | [`Crc24Ble`] | 24 | 0x00065B | 0x555555 | yes/no | 0x000000 | - |
//! | [`Crc32Cksum`] | 32 | 0x04C11DB7 | 0 | no/no | 0xFFFFFFFF | 0x765E7680 |
//! | [`Crc32IsoHdlc`] | 32 | 0x04C11DB7 | 0xFFFFFFFF | yes/yes | 0xFFFFFFFF | 0xCBF43926 |
//! | [`Crc64Ecma182`] | 64 | 0x42F0E1EBA9EA3693 | 0 | no/no | 0 | 0x6C40DF5F0B497347 |
//!
//! The final XOR is applied before output reflection. For every preset above
//! the order makes no difference.
//!
//! # Example
//!
//! ```rust
//! use crcx::{Crc, Crc32Cksum, CrcParams, FixedChecksum};
//!
//! // Runtime parameters.
//! let mut crc = Crc::init(16, 0x1021, 0x0000, 0x0000, false, false)?;
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0x31C3);
//!
//! // Parameters from text.
//! let params: CrcParams = "width=8 poly=0x39 refin=true refout=true".parse().unwrap();
//! assert_eq!(Crc::new(params)?.checksum(b"123456789"), 0x15);
//!
//! // Compile-time parameters.
//! assert_eq!(Crc32Cksum::checksum(b"123456789"), 0x765E_7680);
//! # Ok::<(), crcx::InvalidParameters>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crcx = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the table cache, `CRCX_PARAMS` and the I/O adapters are
//! unavailable; everything else works unchanged.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod cache;
mod common;
pub mod config;
pub mod context;
mod dynamic;
mod error;
mod fixed;
mod params;
mod reflect;
mod table;

/// Bitwise reference implementation, exposed for differential testing.
pub mod reference {
  pub use crate::common::reference::{crc_bitwise, register_bitwise};
}

#[cfg(feature = "std")]
pub use cache::shared_table;
pub use config::ParseParamsError;
pub use context::{CrcContext, validate};
pub use dynamic::Crc;
pub use error::{InvalidParameters, ParamRule};
pub use fixed::{
  Algorithm, Crc8Darc, Crc8I4321, Crc8Smbus, Crc16Ibm3740, Crc16Kermit, Crc16Mcrf4xx, Crc16Xmodem, Crc24Ble, Crc32Cksum,
  Crc32IsoHdlc, Crc64Ecma182, Register, StaticCrc, catalog,
};
pub use params::{CrcParams, MAX_WIDTH};
pub use reflect::reflect;
pub use table::CrcTable;
// Re-export traits for convenience
#[cfg(feature = "std")]
pub use traits::io;
pub use traits::{Checksum, FixedChecksum};
