//! Engine benchmarks (crcx implementations only).
//!
//! Run: `cargo bench -p crcx --bench engine`
//!
//! This benchmarks:
//! - Static presets (compile-time tables) at every width
//! - The dynamic engine against the static one for the same parameters
//! - The explicit context, including per-call validation
//! - Table construction

use core::hint::black_box;

use crcx::{
  Checksum, Crc, Crc8Smbus, Crc16Ibm3740, Crc24Ble, Crc32IsoHdlc, Crc64Ecma182, CrcContext, CrcParams, CrcTable,
  FixedChecksum,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [64, 256, 1024, 4096, 16384, 65536];

fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

fn bench_static<C: FixedChecksum>(c: &mut Criterion, name: &str) {
  let mut group = c.benchmark_group(format!("static/{name}"));

  for size in SIZES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| black_box(C::checksum(black_box(data))));
    });
  }

  group.finish();
}

/// Benchmark every preset width through its compile-time table.
fn bench_presets(c: &mut Criterion) {
  bench_static::<Crc8Smbus>(c, "crc8/smbus");
  bench_static::<Crc16Ibm3740>(c, "crc16/ibm-3740");
  bench_static::<Crc24Ble>(c, "crc24/ble");
  bench_static::<Crc32IsoHdlc>(c, "crc32/iso-hdlc");
  bench_static::<Crc64Ecma182>(c, "crc64/ecma-182");
}

/// Same parameters, three engines.
fn bench_engines(c: &mut Criterion) {
  let params = CrcParams::CRC32_ISO_HDLC;
  let dynamic = Crc::new(params).unwrap();
  let context = CrcContext::from_params(&params).unwrap();

  let mut group = c.benchmark_group("crc32/iso-hdlc/engines");
  for size in SIZES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("static", size), &data, |b, data| {
      b.iter(|| black_box(Crc32IsoHdlc::checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("dynamic", size), &data, |b, data| {
      b.iter(|| black_box(dynamic.checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("context", size), &data, |b, data| {
      b.iter(|| {
        let mut ctx = context.clone();
        ctx.compute(black_box(data)).unwrap();
        black_box(ctx.finalize().unwrap())
      });
    });

    group.bench_with_input(BenchmarkId::new("streaming-64", size), &data, |b, data| {
      b.iter(|| {
        let mut hasher = Crc32IsoHdlc::new();
        for chunk in black_box(data).chunks(64) {
          hasher.update(chunk);
        }
        black_box(hasher.finalize())
      });
    });
  }
  group.finish();
}

/// Cost of building a table at runtime, per width.
fn bench_table(c: &mut Criterion) {
  let mut group = c.benchmark_group("table/generate");
  for params in [
    CrcParams::CRC8_SMBUS,
    CrcParams::CRC16_XMODEM,
    CrcParams::CRC24_BLE,
    CrcParams::CRC32_CKSUM,
    CrcParams::CRC64_ECMA_182,
  ] {
    group.bench_with_input(BenchmarkId::from_parameter(params.width), &params, |b, params| {
      b.iter(|| black_box(CrcTable::for_params(black_box(params)).unwrap()));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_presets, bench_engines, bench_table);
criterion_main!(benches);
