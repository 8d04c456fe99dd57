//! Differential fuzzing against the `crc` crate.
//!
//! Compares the static presets against the catalogue implementations to
//! catch any discrepancies.

#![no_main]

use crcx::{
  Checksum, Crc16Ibm3740, Crc16Kermit, Crc16Mcrf4xx, Crc24Ble, Crc32Cksum, Crc32IsoHdlc, Crc64Ecma182, FixedChecksum,
};
use libfuzzer_sys::fuzz_target;

const CRC16_KERMIT: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_KERMIT);
const CRC16_IBM_3740: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740);
const CRC16_MCRF4XX: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MCRF4XX);
const CRC24_BLE: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_24_BLE);
const CRC32_CKSUM: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_CKSUM);
const CRC32_ISO_HDLC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC64_ECMA_182: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_ECMA_182);

fuzz_target!(|data: &[u8]| {
  check(
    "CRC-16/KERMIT",
    u64::from(Crc16Kermit::checksum(data)),
    u64::from(CRC16_KERMIT.checksum(data)),
  );
  check(
    "CRC-16/IBM-3740",
    u64::from(Crc16Ibm3740::checksum(data)),
    u64::from(CRC16_IBM_3740.checksum(data)),
  );
  check(
    "CRC-16/MCRF4XX",
    u64::from(Crc16Mcrf4xx::checksum(data)),
    u64::from(CRC16_MCRF4XX.checksum(data)),
  );
  check(
    "CRC-32/CKSUM",
    u64::from(Crc32Cksum::checksum(data)),
    u64::from(CRC32_CKSUM.checksum(data)),
  );
  check(
    "CRC-32/ISO-HDLC",
    u64::from(Crc32IsoHdlc::checksum(data)),
    u64::from(CRC32_ISO_HDLC.checksum(data)),
  );
  check(
    "CRC-64/ECMA-182",
    Crc64Ecma182::checksum(data),
    CRC64_ECMA_182.checksum(data),
  );
  // The catalogue entry reflects its output; this preset leaves it in transmission order.
  check(
    "CRC-24/BLE-ADV",
    u64::from(Crc24Ble::checksum(data)),
    crcx::reflect(u64::from(CRC24_BLE.checksum(data)), 24),
  );

  // Self-consistency check: streaming should match one-shot
  let mut hasher = Crc32IsoHdlc::new();
  hasher.update(data);
  assert_eq!(
    hasher.finalize(),
    Crc32IsoHdlc::checksum(data),
    "CRC-32/ISO-HDLC self-consistency mismatch"
  );
});

fn check(name: &str, ours: u64, reference: u64) {
  assert_eq!(
    ours, reference,
    "{name} differential mismatch: ours={ours:#018x}, reference={reference:#018x}"
  );
}
