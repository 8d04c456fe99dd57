//! Fuzz target for parameter parsing and validation.
//!
//! Arbitrary text and arbitrary raw parameters must never panic. Anything
//! accepted must print and parse back to itself, and compute the same CRC as
//! the bitwise reference.

#![no_main]

use arbitrary::Arbitrary;
use crcx::{Crc, CrcContext, CrcParams, reference::crc_bitwise, validate};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
  text: &'a str,
  width: u8,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  if let Ok(params) = input.text.parse::<CrcParams>() {
    assert!(params.is_valid());
    let printed = params.to_string();
    assert_eq!(printed.parse::<CrcParams>(), Ok(params), "round trip failed for {printed}");
  }

  let raw = CrcParams {
    width: input.width,
    polynomial: input.polynomial,
    initial: input.initial,
    xor_out: input.xor_out,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
  };

  match CrcContext::init(
    raw.width,
    raw.polynomial,
    raw.initial,
    raw.xor_out,
    raw.reflect_in,
    raw.reflect_out,
  ) {
    Ok(mut ctx) => {
      assert!(validate(Some(&ctx)));
      assert!(raw.is_valid());
      ctx.compute(input.data).unwrap();
      let expected = crc_bitwise(&raw, input.data);
      assert_eq!(ctx.finalize().unwrap(), expected);
      assert_eq!(Crc::new(raw).unwrap().checksum(input.data), expected);
    }
    Err(err) => {
      assert!(!raw.is_valid());
      assert_eq!(Crc::new(raw).unwrap_err(), err);
    }
  }
});
