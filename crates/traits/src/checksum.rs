//! Checksum traits.
//!
//! - [`Checksum`]: streaming interface shared by every CRC engine, including
//!   engines whose parameters are only known at runtime
//! - [`FixedChecksum`]: algorithms fully determined by their type, which can
//!   be constructed without arguments and computed in one shot

use core::fmt::Debug;

/// Streaming checksum state.
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling it repeatedly returns the same value)
/// - `reset()` must restore the state it was constructed with
/// - `update(a); update(b)` must equal `update(a ++ b)`
pub trait Checksum: Clone {
  /// The checksum output type.
  ///
  /// `u64` for runtime-parameterized engines, the narrowest fitting unsigned
  /// integer for statically known algorithms.
  type Output: Copy + Eq + Debug;

  /// Feed additional data.
  ///
  /// Bytes are consumed strictly in order; calling this repeatedly is the same
  /// as calling it once with the concatenation.
  fn update(&mut self, data: &[u8]);

  /// Feed multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far.
  ///
  /// Does not consume the state; further updates continue from where the
  /// register left off.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Restore the initial register.
  fn reset(&mut self);
}

/// A checksum whose parameters are fixed by its type.
///
/// # Usage
///
/// ```rust,ignore
/// use crcx::{Crc32Cksum, FixedChecksum};
///
/// let crc = Crc32Cksum::checksum(b"123456789");
///
/// let mut hasher = Crc32Cksum::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
pub trait FixedChecksum: Checksum + Default {
  /// Output size in bytes (the CRC width rounded up to whole bytes).
  const OUTPUT_SIZE: usize;

  /// Create a state seeded with the algorithm's initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a state seeded with a custom initial register value.
  ///
  /// Bits above the CRC width are dropped.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, Self::new())
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, Self::new())
  }
}
