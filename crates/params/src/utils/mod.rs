//! Hash function constants

pub mod hash;
