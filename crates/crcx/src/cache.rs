//! Process-wide table cache.
//!
//! Building a table costs a few hundred operations; programs that construct
//! many [`Crc`](crate::Crc) values for the same polynomial can share one
//! [`CrcTable`] instead. Tables are immutable, so handing out `Arc`s is all
//! the synchronization readers need.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, OnceLock, PoisonError},
};

use crate::{common::tables::width_mask, error::InvalidParameters, table::CrcTable};

type Cache = Mutex<HashMap<(u8, u64), Arc<CrcTable>>>;

fn cache() -> &'static Cache {
  static CACHE: OnceLock<Cache> = OnceLock::new();
  CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// The table for `(width, polynomial)`, built at most once per process.
///
/// Polynomials that differ only in the explicit leading term share a table.
///
/// # Errors
///
/// Returns [`InvalidParameters`] when the pair fails validation; nothing is
/// cached in that case.
///
/// # Example
///
/// ```
/// use crcx::{Crc, CrcParams, shared_table};
///
/// let table = shared_table(32, 0x04C1_1DB7)?;
/// let mut crc = Crc::with_table(CrcParams::CRC32_CKSUM, table)?;
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0x765E_7680);
/// # Ok::<(), crcx::InvalidParameters>(())
/// ```
pub fn shared_table(width: u8, polynomial: u64) -> Result<Arc<CrcTable>, InvalidParameters> {
  let key = (width, polynomial & width_mask(width));

  // A poisoned lock still holds a consistent map: inserts are the only writes.
  let mut tables = cache().lock().unwrap_or_else(PoisonError::into_inner);
  if let Some(table) = tables.get(&key) {
    return Ok(Arc::clone(table));
  }

  let table = Arc::new(CrcTable::new(width, polynomial)?);
  tables.insert(key, Arc::clone(&table));
  Ok(table)
}
