// log2image/src/lib.rs

//! log2image
//!
//! Extract fingerprint memory dumps from kernel logs and render each one as
//! a square grayscale PNG.
#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod parser;
pub mod prelude;
pub mod render;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the block types in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
