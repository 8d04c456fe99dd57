//! I/O adapters that checksum bytes as they pass through.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap any [`Checksum`] state, so
//! they work equally with runtime-configured and statically known CRCs.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   type Output = u32;
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! use traits::io::ChecksumReader;
//!
//! let mut reader = ChecksumReader::new(Cursor::new(b"abc".to_vec()), Sum(0));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.crc(),
//!   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::Checksum;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  // Only the accepted prefix belongs to the stream.
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and checksums every byte actually read.
///
/// Short reads are handled: only the filled part of the buffer is fed to the
/// checksum.
#[derive(Clone)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Wrap `inner`, feeding reads into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: R, hasher: C) -> Self {
    Self { inner, hasher }
  }

  /// Current checksum of the bytes read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Mutable access to the checksum state.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap into the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap into the inner reader, discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: std::io::Read, C: Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and checksums every byte the inner
/// writer accepts.
///
/// A short write only contributes the accepted prefix, so the checksum always
/// matches what reached the inner writer.
#[derive(Clone)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Wrap `inner`, feeding accepted writes into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: W, hasher: C) -> Self {
    Self { inner, hasher }
  }

  /// Current checksum of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Unwrap into the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, C: Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}
