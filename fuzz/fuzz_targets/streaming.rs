//! Fuzz target for the streaming API.
//!
//! Arbitrary parameters and arbitrary chunking: every engine must agree with
//! the bitwise reference.

#![no_main]

use arbitrary::Arbitrary;
use crcx::{Crc, CrcContext, CrcParams, reference::crc_bitwise};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width_bytes: u8,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

impl Input {
  fn params(&self) -> CrcParams {
    let width = (self.width_bytes % 8 + 1) * 8;
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    CrcParams {
      width,
      polynomial: (self.polynomial & mask) | 1,
      initial: self.initial,
      xor_out: self.xor_out,
      reflect_in: self.reflect_in,
      reflect_out: self.reflect_out,
    }
  }
}

fuzz_target!(|input: Input| {
  let params = input.params();
  let data = &input.data;
  let expected = crc_bitwise(&params, data);

  let crc = Crc::new(params).unwrap();
  assert_eq!(crc.checksum(data), expected, "one-shot mismatch for {params}");

  let mut hasher = crc.clone();
  let mut ctx = CrcContext::from_params(&params).unwrap();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(input.chunk_sizes.len());
      input.chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    ctx.compute(&data[offset..end]).unwrap();
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch for {params}");
  assert_eq!(ctx.finalize().unwrap(), expected, "context mismatch for {params}");
});
