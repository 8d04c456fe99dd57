//! Bitwise reference implementation for every supported width.
//!
//! This module is the "source of truth" for CRC computation. It processes one
//! bit at a time with no lookup table, so it directly mirrors the polynomial
//! division:
//!
//! - **Obviously correct**: one shift and one conditional XOR per bit
//! - **Const-evaluable**: check values are verified at compile time below
//!
//! The table-driven kernel must produce identical results for every valid
//! parameter set, at every byte boundary.
//!
//! # CRC Model
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (8, 16, ... 64) |
//! | `polynomial` | Generator polynomial, normal form |
//! | `initial` | Initial register value |
//! | `reflect_in` | Reflect each input byte |
//! | `xor_out` | Final XOR value, applied first |
//! | `reflect_out` | Reflect the XORed register over `width` bits |
//!
//! These are intentionally slow (~8 operations per bit). Use for verification
//! and for generating expected values, not for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{params::CrcParams, reflect::reflect};

/// Advance `register` over `data` one bit at a time, MSB first.
///
/// Returns the raw register with no final XOR or output reflection.
#[must_use]
pub const fn register_bitwise(params: &CrcParams, register: u64, data: &[u8]) -> u64 {
  let mask = params.mask();
  let msb = params.msb();
  let poly = params.polynomial & mask;
  let shift = params.width.saturating_sub(8) as u32;

  let mut crc = register & mask;
  let mut i: usize = 0;
  while i < data.len() {
    let byte = if params.reflect_in {
      data[i].reverse_bits()
    } else {
      data[i]
    };
    crc ^= (byte as u64) << shift;

    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & msb != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask;
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Full bitwise CRC of `data`: seed, shift, final XOR, optional reflection.
#[must_use]
pub const fn crc_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let mask = params.mask();
  let raw = register_bitwise(params, params.initial, data);
  let out = (raw ^ params.xor_out) & mask;
  if params.reflect_out {
    reflect(out, params.width as u32)
  } else {
    out
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────
//
// These const assertions verify the reference implementation against the
// catalogue check values for "123456789" at compile time.

const CHECK_INPUT: &[u8] = b"123456789";

// CRC-8/SMBUS: poly=0x07, init=0x00, xorout=0x00
const _: () = assert!(crc_bitwise(&CrcParams::CRC8_SMBUS, CHECK_INPUT) == 0xF4);

// CRC-8/I-432-1: poly=0x07, xorout=0x55
const _: () = assert!(crc_bitwise(&CrcParams::CRC8_I432_1, CHECK_INPUT) == 0xA1);

// CRC-8/DARC: poly=0x39, refin, refout
const _: () = assert!(crc_bitwise(&CrcParams::CRC8_DARC, CHECK_INPUT) == 0x15);

// CRC-16/XMODEM: poly=0x1021, init=0x0000
const _: () = assert!(crc_bitwise(&CrcParams::CRC16_XMODEM, CHECK_INPUT) == 0x31C3);

// CRC-16/KERMIT: poly=0x1021, refin, refout
const _: () = assert!(crc_bitwise(&CrcParams::CRC16_KERMIT, CHECK_INPUT) == 0x2189);

// CRC-16/IBM-3740: poly=0x1021, init=0xFFFF
const _: () = assert!(crc_bitwise(&CrcParams::CRC16_IBM_3740, CHECK_INPUT) == 0x29B1);

// CRC-16/MCRF4XX: poly=0x1021, init=0xFFFF, refin, refout
const _: () = assert!(crc_bitwise(&CrcParams::CRC16_MCRF4XX, CHECK_INPUT) == 0x6F91);

// CRC-32/CKSUM: poly=0x04C11DB7, xorout=0xFFFFFFFF
const _: () = assert!(crc_bitwise(&CrcParams::CRC32_CKSUM, CHECK_INPUT) == 0x765E_7680);

// CRC-32/ISO-HDLC: poly=0x04C11DB7, init/xorout=0xFFFFFFFF, refin, refout
const _: () = assert!(crc_bitwise(&CrcParams::CRC32_ISO_HDLC, CHECK_INPUT) == 0xCBF4_3926);

// CRC-64/ECMA-182: poly=0x42F0E1EBA9EA3693
const _: () = assert!(crc_bitwise(&CrcParams::CRC64_ECMA_182, CHECK_INPUT) == 0x6C40_DF5F_0B49_7347);

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_byte_vectors() {
    assert_eq!(crc_bitwise(&CrcParams::CRC8_SMBUS, b"W"), 0xA2);
    assert_eq!(crc_bitwise(&CrcParams::CRC16_XMODEM, b"W"), 0x2A12);
  }

  #[test]
  fn empty_input_is_seed_through_output_stage() {
    assert_eq!(crc_bitwise(&CrcParams::CRC16_IBM_3740, b""), 0xFFFF);
    assert_eq!(crc_bitwise(&CrcParams::CRC32_CKSUM, b""), 0xFFFF_FFFF);
    assert_eq!(crc_bitwise(&CrcParams::CRC32_ISO_HDLC, b""), 0);
  }

  #[test]
  fn register_resumes_across_splits() {
    let params = CrcParams::CRC16_XMODEM;
    let head = register_bitwise(&params, params.initial, b"1234");
    let tail = register_bitwise(&params, head, b"56789");
    assert_eq!(tail, register_bitwise(&params, params.initial, CHECK_INPUT));
  }

  #[test]
  fn ble_legacy_advertising_pdu() {
    let pdu = [0x42, 0x09, 0xA6, 0xA5, 0xA4, 0xA3, 0xA2, 0xC1, 0x01, 0x02, 0x03];
    assert_eq!(crc_bitwise(&CrcParams::CRC24_BLE, &pdu), 0x00B5_2DD7);
  }
}
