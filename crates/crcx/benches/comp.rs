//! Comparison against established CRC crates.
//!
//! Run: `cargo bench -p crcx --bench comp`

use core::hint::black_box;

use crc_fast::{CrcAlgorithm as CrcFastAlgorithm, Digest as CrcFastDigest};
use crcx::{Checksum, Crc, Crc32IsoHdlc, Crc64Ecma182, CrcParams, FixedChecksum};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CASES: &[(&str, usize)] = &[
  ("xs", 64),
  ("s", 256),
  ("m", 4 * 1024),
  ("l", 64 * 1024),
  ("xl", 1024 * 1024),
];

const CRC32_ISO_HDLC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC64_ECMA_182: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_ECMA_182);

fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

fn bench_crc32_iso_hdlc_comp(c: &mut Criterion) {
  let dynamic = Crc::new(CrcParams::CRC32_ISO_HDLC).unwrap();
  let base_fast = CrcFastDigest::new(CrcFastAlgorithm::Crc32IsoHdlc);

  let mut group = c.benchmark_group("crc32/iso-hdlc/compare");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crcx/static", label), &data, |b, data| {
      b.iter(|| {
        let mut hasher = Crc32IsoHdlc::new();
        hasher.update(black_box(data));
        black_box(hasher.finalize());
      });
    });

    group.bench_with_input(BenchmarkId::new("crcx/dynamic", label), &data, |b, data| {
      b.iter(|| black_box(dynamic.checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("crc/table", label), &data, |b, data| {
      b.iter(|| black_box(CRC32_ISO_HDLC.checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("crc32fast/auto", label), &data, |b, data| {
      b.iter(|| {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(black_box(data));
        black_box(hasher.finalize());
      });
    });

    group.bench_with_input(BenchmarkId::new("crc-fast/auto", label), &data, |b, data| {
      b.iter(|| {
        let mut hasher = base_fast;
        hasher.update(black_box(data));
        black_box(hasher.finalize());
      });
    });
  }
  group.finish();
}

fn bench_crc64_ecma_182_comp(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc64/ecma-182/compare");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crcx/static", label), &data, |b, data| {
      b.iter(|| black_box(Crc64Ecma182::checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("crc/table", label), &data, |b, data| {
      b.iter(|| black_box(CRC64_ECMA_182.checksum(black_box(data))));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_crc32_iso_hdlc_comp, bench_crc64_ecma_182_comp);
criterion_main!(benches);
