//! Core checksum traits for crcx.
//!
//! This crate provides the traits every CRC engine in the workspace conforms
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Streaming update/finalize/reset over any CRC state |
//! | [`FixedChecksum`] | Algorithms fixed by their type (one-shot, `new()`) |
//!
//! With the `std` feature, [`io`] provides reader/writer adapters.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod checksum;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, FixedChecksum};
