// log2image/src/parser/state.rs
//! Per-line block state machine.

use log::{debug, warn};

use crate::config::{ExtractConfig, MalformedLinePolicy};
use crate::parser::line::decode_payload;
use crate::Result;

/// Classification of a trimmed log line against the configured markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Opens a block (or toggles, with identical markers).
    Start,
    /// Closes a block.
    End,
}

impl Marker {
    /// Markers match on the line's trailing content, so kernel timestamps
    /// and log prefixes in front of them are ignored. When both markers
    /// match (one is a suffix of the other) the longer one wins. With
    /// identical markers every marker line classifies as `Start`.
    pub fn classify(trimmed: &str, cfg: &ExtractConfig) -> Option<Self> {
        let start = trimmed.ends_with(cfg.start_marker());
        let end = trimmed.ends_with(cfg.end_marker());
        match (start, end) {
            (true, true) if cfg.end_marker().len() > cfg.start_marker().len() => {
                Some(Marker::End)
            }
            (true, _) => Some(Marker::Start),
            (false, true) => Some(Marker::End),
            (false, false) => None,
        }
    }
}

/// A finished block as found in the log, before it is given an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// 1-based line number of the start marker.
    pub start_line: usize,
    /// Decoded bytes in memory order.
    pub bytes: Vec<u8>,
}

/// Scanner state, threaded by value through [`ScanState::step`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any block; payload-looking lines are ignored.
    #[default]
    Idle,
    /// Collecting the block opened at `start_line`.
    InBlock {
        /// 1-based line number of the start marker.
        start_line: usize,
        /// Bytes decoded so far.
        bytes: Vec<u8>,
    },
}

impl ScanState {
    /// True while a block is open.
    pub fn is_in_block(&self) -> bool {
        matches!(self, ScanState::InBlock { .. })
    }

    /// Feed one line (1-based `line_no`) and return the next state, plus the
    /// block this line closed, if any.
    pub fn step(
        self,
        line_no: usize,
        line: &str,
        cfg: &ExtractConfig,
    ) -> Result<(ScanState, Option<RawBlock>)> {
        let trimmed = line.trim();

        match (self, Marker::classify(trimmed, cfg)) {
            (ScanState::Idle, Some(Marker::Start)) => {
                debug!("line {}: fingerprint start", line_no);
                Ok((ScanState::open(line_no), None))
            }
            (ScanState::Idle, Some(Marker::End)) => {
                debug!("line {}: end marker outside a block, ignored", line_no);
                Ok((ScanState::Idle, None))
            }
            (ScanState::Idle, None) => Ok((ScanState::Idle, None)),

            (ScanState::InBlock { start_line, bytes }, Some(Marker::Start)) if cfg.toggles() => {
                debug!("line {}: fingerprint end", line_no);
                Ok((ScanState::Idle, Some(RawBlock { start_line, bytes })))
            }
            (ScanState::InBlock { start_line, bytes }, Some(Marker::Start)) => {
                warn!(
                    "line {}: start marker inside block opened at line {}, dropping {} bytes",
                    line_no,
                    start_line,
                    bytes.len()
                );
                Ok((ScanState::open(line_no), None))
            }
            (ScanState::InBlock { start_line, bytes }, Some(Marker::End)) => {
                debug!("line {}: fingerprint end", line_no);
                Ok((ScanState::Idle, Some(RawBlock { start_line, bytes })))
            }
            (ScanState::InBlock { start_line, mut bytes }, None) => {
                if !trimmed.is_empty() {
                    match decode_payload(line_no, trimmed, cfg.delimiter()) {
                        Ok(decoded) => bytes.extend_from_slice(&decoded),
                        Err(e) if cfg.malformed() == MalformedLinePolicy::Skip => {
                            warn!("skipping malformed payload: {}", e);
                        }
                        Err(e) => return Err(e),
                    }
                }
                Ok((ScanState::InBlock { start_line, bytes }, None))
            }
        }
    }

    fn open(line_no: usize) -> Self {
        ScanState::InBlock {
            start_line: line_no,
            bytes: Vec::new(),
        }
    }
}
