// log2image/src/parser/scanner.rs
//! Whole-log scanning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::config::ExtractConfig;
use crate::parser::state::ScanState;
use crate::types::Fingerprint;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

const PREVIEW_BYTES: usize = 16;

/// Scan a whole log and collect its fingerprint blocks in order.
///
/// Lines are decoded lossily: kernel logs can carry stray non-UTF-8 bytes
/// outside the dump, and those lines are only ever matched against markers.
pub fn parse_reader<R: BufRead>(mut reader: R, cfg: &ExtractConfig) -> Result<Vec<Fingerprint>> {
    let mut state = ScanState::Idle;
    let mut blocks = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let (next, finished) = state.step(line_no, &line, cfg)?;
        state = next;

        if let Some(raw) = finished {
            let fp = Fingerprint::new(blocks.len(), raw.start_line, raw.bytes);
            debug!(
                "block {}: {} bytes from line {}, head [{}]",
                fp.index(),
                fp.len(),
                fp.start_line(),
                bytes_to_hex_spaced(&fp[..fp.len().min(PREVIEW_BYTES)])
            );
            blocks.push(fp);
        }
    }

    if let ScanState::InBlock { start_line, bytes } = state {
        warn!(
            "block opened at line {} never closed, dropping {} bytes",
            start_line,
            bytes.len()
        );
    }

    Ok(blocks)
}

/// Scan log text already in memory.
pub fn parse_str(text: &str, cfg: &ExtractConfig) -> Result<Vec<Fingerprint>> {
    parse_reader(text.as_bytes(), cfg)
}

/// Open and scan the log at `path`.
pub fn parse_file(path: impl AsRef<Path>, cfg: &ExtractConfig) -> Result<Vec<Fingerprint>> {
    let file = File::open(path.as_ref())?;
    parse_reader(BufReader::new(file), cfg)
}
