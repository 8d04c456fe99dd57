use crcx::{
  Crc, Crc8Darc, Crc8I4321, Crc8Smbus, Crc16Ibm3740, Crc16Kermit, Crc16Mcrf4xx, Crc16Xmodem, Crc24Ble, Crc32Cksum,
  Crc32IsoHdlc, Crc64Ecma182, CrcContext, CrcParams, CrcTable, FixedChecksum, catalog, reference::crc_bitwise,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

/// Every engine, every preset, every split: one answer.
fn check_all_engines<C>(params: CrcParams)
where
  C: FixedChecksum,
  C::Output: Into<u64>,
{
  let dynamic = Crc::new(params).unwrap();

  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let reference = crc_bitwise(&params, &data);
      assert_eq!(dynamic.checksum(&data), reference, "dynamic mismatch at len={len}");
      assert_eq!(C::checksum(&data).into(), reference, "static mismatch at len={len}");

      let mut ctx = CrcContext::from_params(&params).unwrap();
      ctx.compute(&data).unwrap();
      assert_eq!(ctx.finalize().unwrap(), reference, "context mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = C::new();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize().into(), reference, "static split mismatch at len={len} split={split}");

        let mut d = dynamic.clone();
        d.update(a);
        let _ = d.finalize();
        d.update(b);
        assert_eq!(d.finalize(), reference, "dynamic split mismatch at len={len} split={split}");

        let v = C::checksum_vectored(&[a, b]);
        assert_eq!(v.into(), reference, "vectored mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn crc8_invariants() {
  check_all_engines::<Crc8Smbus>(CrcParams::CRC8_SMBUS);
  check_all_engines::<Crc8I4321>(CrcParams::CRC8_I432_1);
  check_all_engines::<Crc8Darc>(CrcParams::CRC8_DARC);
}

#[test]
fn crc16_invariants() {
  check_all_engines::<Crc16Xmodem>(CrcParams::CRC16_XMODEM);
  check_all_engines::<Crc16Kermit>(CrcParams::CRC16_KERMIT);
  check_all_engines::<Crc16Ibm3740>(CrcParams::CRC16_IBM_3740);
  check_all_engines::<Crc16Mcrf4xx>(CrcParams::CRC16_MCRF4XX);
}

#[test]
fn crc24_invariants() {
  check_all_engines::<Crc24Ble>(CrcParams::CRC24_BLE);
}

#[test]
fn crc32_invariants() {
  check_all_engines::<Crc32Cksum>(CrcParams::CRC32_CKSUM);
  check_all_engines::<Crc32IsoHdlc>(CrcParams::CRC32_ISO_HDLC);
}

#[test]
fn crc64_invariants() {
  check_all_engines::<Crc64Ecma182>(CrcParams::CRC64_ECMA_182);
}

#[test]
fn odd_widths_match_reference() {
  // Widths with no preset: 40, 48, 56.
  for (width, poly) in [(40u8, 0x0004_8200_09u64), (48, 0x1_0000_0000_07), (56, 0x00A1_B2C3_D4E5_F7)] {
    for reflect in [false, true] {
      let params = CrcParams {
        width,
        polynomial: poly,
        initial: u64::MAX,
        xor_out: 0x1234_5678_9ABC_DEF0,
        reflect_in: reflect,
        reflect_out: !reflect,
      };
      let crc = Crc::new(params).unwrap();
      for &len in &LENGTHS {
        let data = gen_bytes(len, u64::from(width));
        assert_eq!(
          crc.checksum(&data),
          crc_bitwise(&params.truncated(), &data),
          "width={width} reflect_in={reflect} len={len}"
        );
      }
    }
  }
}

#[test]
fn determinism() {
  let data = gen_bytes(4096, 42);
  for &(name, params) in catalog::ALL {
    let a = Crc::new(params).unwrap().checksum(&data);
    let b = Crc::new(params).unwrap().checksum(&data);
    assert_eq!(a, b, "{name}");
  }
}

#[test]
fn table_is_pure_function_of_width_and_polynomial() {
  let a = Crc::new(CrcParams::CRC16_XMODEM).unwrap();
  let b = Crc::new(CrcParams::CRC16_KERMIT).unwrap();
  let c = Crc::new(CrcParams::CRC16_IBM_3740).unwrap();
  assert_eq!(a.table(), b.table());
  assert_eq!(b.table(), c.table());
  assert_eq!(a.table(), &CrcTable::new(16, 0x1021).unwrap());
}

#[test]
fn only_register_changes() {
  let mut ctx = CrcContext::from_params(&CrcParams::CRC32_ISO_HDLC).unwrap();
  let before = ctx.clone();
  ctx.compute(&gen_bytes(512, 7)).unwrap();

  assert_ne!(ctx.register, before.register);
  ctx.register = before.register;
  assert_eq!(ctx, before);
}

#[test]
fn reader_and_writer_adapters() {
  use std::io::{Read, Write};

  let data = gen_bytes(10_000, 99);
  let expected = Crc32IsoHdlc::checksum(&data);

  let mut reader = Crc32IsoHdlc::reader(&data[..]);
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();
  assert_eq!(reader.crc(), expected);

  let mut writer = Crc32IsoHdlc::writer(Vec::new());
  writer.write_all(&data).unwrap();
  let (inner, crc) = writer.into_parts();
  assert_eq!(inner, data);
  assert_eq!(crc, expected);

  let dynamic = Crc::new(CrcParams::CRC32_ISO_HDLC).unwrap();
  let mut reader = crcx::io::ChecksumReader::new(&data[..], dynamic);
  std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
  assert_eq!(reader.crc(), u64::from(expected));
}
