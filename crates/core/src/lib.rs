//! This crate is the helper library behind [numkit](https://crates.io/crates/numkit).
//!
//! It is split into three independent modules:
//! * [`number`] contains null-safe accessors for every numeric width, a perfect-square test, digit
//!   counting, and unique random sampling.
//! * [`radix`] converts the textual form of an unsigned integer between any two bases in 2..=36.
//! * [`units`] contains [`MemoryUnit`](units::MemoryUnit), the binary-prefixed units from KiB to
//!   YiB, along with classification and pretty-printing of byte counts.
//!
//! Everything except the thread-local sampler works without `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
mod no_std {
    extern crate alloc;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

pub mod error;
pub mod number;
pub mod radix;
pub mod units;

pub mod prelude;

pub use error::{Error, Result};
