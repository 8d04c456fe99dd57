//! Common building blocks shared by the dynamic and static engines.
//!
//! - Const-fn lookup table generation for any width
//! - The per-byte update and finalize kernel
//! - A bit-at-a-time reference used as the test oracle

pub mod kernel;
pub mod reference;
pub mod tables;

#[cfg(test)]
mod proptests;
