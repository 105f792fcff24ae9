// log2image/src/parser/mod.rs
//! Fingerprint block extraction from log text.

pub mod line;
pub mod scanner;
pub mod state;

pub use line::{decode_payload, split_payload};
pub use scanner::{parse_file, parse_reader, parse_str};
pub use state::{Marker, RawBlock, ScanState};
