//! Utilities for log2image: small helpers shared by logging and tests.

pub mod hex;

pub use hex::*;
