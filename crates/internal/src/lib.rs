//! Internal utilities for tinyblake
//!
//! Fixed-endianness word codec and constant-time helpers shared by the
//! engine crates. Nothing here is part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
