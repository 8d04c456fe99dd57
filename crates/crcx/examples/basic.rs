//! Basic CRC usage: presets, custom parameters, streaming, and resume.
//!
//! Run with: `cargo run --example basic -p crcx`

use crcx::{
  Checksum, Crc, Crc8Smbus, Crc16Ibm3740, Crc24Ble, Crc32IsoHdlc, Crc64Ecma182, CrcContext, CrcParams, FixedChecksum,
  shared_table,
};

fn main() {
  println!("=== CRC Basic Examples ===\n");

  preset_examples();
  custom_examples();
  streaming_examples();
  resume_example();
}

/// Compile-time tables for the named presets.
fn preset_examples() {
  println!("--- Presets ---\n");

  let data = b"123456789";

  // CRC-8/SMBUS - SMBus packet error checking, ATM HEC polynomial
  let crc8 = Crc8Smbus::checksum(data);
  println!("CRC-8/SMBUS:      0x{crc8:02X}");
  assert_eq!(crc8, 0xF4);

  // CRC-16/IBM-3740 - floppy disks, often called CCITT-FALSE
  let crc16 = Crc16Ibm3740::checksum(data);
  println!("CRC-16/IBM-3740:  0x{crc16:04X}");
  assert_eq!(crc16, 0x29B1);

  // CRC-32/ISO-HDLC - Ethernet, gzip, PNG
  let crc32 = Crc32IsoHdlc::checksum(data);
  println!("CRC-32/ISO-HDLC:  0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-64/ECMA-182
  let crc64 = Crc64Ecma182::checksum(data);
  println!("CRC-64/ECMA-182:  0x{crc64:016X}");
  assert_eq!(crc64, 0x6C40_DF5F_0B49_7347);

  // Evaluated by the compiler
  const BAKED: u64 = Crc32IsoHdlc::compute(b"123456789");
  assert_eq!(BAKED, 0xCBF4_3926);

  // CRC-24/BLE-ADV over a legacy advertising PDU
  let pdu = [0x42, 0x09, 0xA6, 0xA5, 0xA4, 0xA3, 0xA2, 0xC1, 0x01, 0x02, 0x03];
  let crc24 = Crc24Ble::checksum(&pdu);
  println!("CRC-24/BLE-ADV:   0x{crc24:06X}");
  assert_eq!(crc24, 0x00B5_2DD7);

  println!();
}

/// Runtime parameters: the dynamic engine and the explicit context.
fn custom_examples() {
  println!("--- Custom Parameters ---\n");

  let data = b"123456789";

  // Parsed from a catalogue line
  let params: CrcParams = "width=16 poly=0x1021 init=0xffff".parse().unwrap();
  let crc = Crc::new(params).unwrap();
  println!("{params}");
  println!("  -> 0x{:04X}", crc.checksum(data));
  assert_eq!(crc.checksum(data), 0x29B1);

  // Tables shared across engines with the same width and polynomial
  let table = shared_table(16, 0x1021).unwrap();
  let kermit = Crc::with_table(CrcParams::CRC16_KERMIT, table).unwrap();
  println!("CRC-16/KERMIT via shared table: 0x{:04X}", kermit.checksum(data));

  // Explicit context with visible register state
  let mut ctx = CrcContext::init(8, 0x07, 0x00, 0x55, false, false).unwrap();
  ctx.compute(data).unwrap();
  let value = ctx.finalize().unwrap();
  println!("CRC-8 context:    0x{value:02X}");
  assert_eq!(value, 0xA1);

  // Invalid shapes are rejected up front
  let err = CrcContext::init(12, 0x80F, 0, 0, false, false).unwrap_err();
  println!("Rejected:         {err}");

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"123456789";

  // Process in chunks - result matches one-shot
  let mut hasher = Crc32IsoHdlc::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();

  println!("Streaming CRC-32: 0x{crc:08X}");
  assert_eq!(crc, Crc32IsoHdlc::checksum(data));

  // finalize() is non-consuming: can continue after
  hasher.update(b"...");
  let extended = hasher.finalize();
  println!("Extended CRC-32:  0x{extended:08X}");

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  let new_crc = hasher.finalize();
  println!("Reset CRC-32:     0x{new_crc:08X}");

  println!();
}

/// Resume computation from a saved register.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  // Save the raw register, not the finalized value
  let mut hasher = Crc32IsoHdlc::new();
  hasher.update(part1);
  let saved = hasher.register();
  println!("Saved register after part1: 0x{saved:08X}");

  // Later, resume from saved state
  let mut resumed = Crc32IsoHdlc::resume(saved);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:     0x{final_crc:08X}");

  // Verify: should match processing all at once
  let mut full = Crc32IsoHdlc::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");

  println!();
}
