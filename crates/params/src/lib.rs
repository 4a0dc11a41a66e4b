//! Constant values for tinyblake
//!
//! Algorithm constants shared by the BLAKE2s engine and its tests. This crate
//! has no dependencies and is always `no_std`.

#![no_std]

pub mod utils;
