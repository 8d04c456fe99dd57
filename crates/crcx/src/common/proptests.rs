//! Property tests for the shared table generator and kernel.
//!
//! Every property is checked over arbitrary valid parameter sets, not just
//! the presets, with the bitwise reference as the oracle:
//!
//! 1. **Table construction**: the bit-halving generator equals the per-entry
//!    bitwise construction for every `(width, polynomial)`
//! 2. **Kernel equivalence**: the table-driven register equals the bitwise
//!    register after every byte
//! 3. **Chunking equivalence**: any split of the input through the streaming
//!    API equals the one-shot result

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use super::{
  kernel::{finalize, update_byte, update_slice},
  reference::{crc_bitwise, register_bitwise},
  tables::{generate, table_entry_bitwise, width_mask},
};
use crate::{Crc, params::CrcParams, reflect::reflect};

fn arb_params() -> impl Strategy<Value = CrcParams> {
  (1u8..=8, any::<u64>(), any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>()).prop_map(
    |(bytes, poly, initial, xor_out, reflect_in, reflect_out)| {
      let width = bytes * 8;
      CrcParams {
        width,
        // Force a non-zero polynomial that fits the width.
        polynomial: (poly & width_mask(width)) | 1,
        initial,
        xor_out,
        reflect_in,
        reflect_out,
      }
    },
  )
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn table_matches_bitwise_entries(params in arb_params()) {
    let table = generate(params.width, params.polynomial);
    for index in 0..=255u8 {
      prop_assert_eq!(
        table[usize::from(index)],
        table_entry_bitwise(params.width, params.polynomial, index),
        "index {}", index
      );
    }
  }

  #[test]
  fn kernel_matches_reference_at_every_byte(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
  ) {
    let table = generate(params.width, params.polynomial);
    let mut fast = params.initial & params.mask();
    let mut slow = fast;
    for &byte in &data {
      fast = update_byte(fast, byte, params.width, params.reflect_in, &table);
      slow = register_bitwise(&params, slow, &[byte]);
      prop_assert_eq!(fast, slow);
    }

    let out = finalize(fast, params.xor_out, params.width, params.reflect_out);
    prop_assert_eq!(out, crc_bitwise(&params, &data));
  }

  #[test]
  fn streaming_chunks_match_oneshot(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    cuts in proptest::collection::vec(any::<usize>(), 0..8),
  ) {
    let crc = Crc::new(params).unwrap();
    let oneshot = crc.checksum(&data);

    let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c % (data.len() + 1)).collect();
    cuts.sort_unstable();

    let mut streaming = crc.clone();
    let mut start = 0;
    for cut in cuts {
      streaming.update(&data[start..cut]);
      start = cut;
    }
    streaming.update(&data[start..]);
    prop_assert_eq!(streaming.finalize(), oneshot);
  }

  #[test]
  fn update_slice_is_a_fold(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let table = generate(params.width, params.polynomial);
    let seed = params.initial & params.mask();
    let folded = data
      .iter()
      .fold(seed, |r, &b| update_byte(r, b, params.width, params.reflect_in, &table));
    prop_assert_eq!(update_slice(seed, &data, params.width, params.reflect_in, &table), folded);
  }

  #[test]
  fn reflect_is_an_involution(value in any::<u64>(), bits in 1u32..=64) {
    let x = if bits == 64 { value } else { value & ((1u64 << bits) - 1) };
    prop_assert_eq!(reflect(reflect(x, bits), bits), x);
  }
}
