// log2image/src/prelude.rs
//! Common imports.

pub use crate::batch::{Batch, Progress, Summary};
pub use crate::config::{ExtractConfig, ExtractConfigBuilder, MalformedLinePolicy};
pub use crate::parser::{parse_file, parse_reader, parse_str};
pub use crate::render::{render, render_bytes};
pub use crate::{Error, Fingerprint, HexWord, Result};
