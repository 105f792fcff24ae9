//! Test support helpers intended for use by unit and integration tests.
//!
//! These build kernel-log text around fingerprint dumps the way the dumping
//! module prints them, so tests across the crate and tests/ directory can
//! share one fixture format.
#![allow(dead_code)]

use crate::constants::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use crate::utils::bytes_to_words;

/// Bytes per printed dump line (four words).
pub const BYTES_PER_LINE: usize = 16;

/// Base address printed in front of the first dump line.
pub const DUMP_BASE_ADDRESS: u32 = 0xc000_0000;

/// One dump line, `"<addr>: <w0> <w1> ..."`, with a kernel timestamp in
/// front like dmesg output.
#[doc(hidden)]
pub fn payload_line(address: u32, bytes: &[u8]) -> String {
    format!("[   42.000000] {:08x}: {}", address, bytes_to_words(bytes))
}

/// Dump lines for `bytes`, sixteen bytes per line.
#[doc(hidden)]
pub fn payload_lines(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(i, chunk)| payload_line(DUMP_BASE_ADDRESS + (i * BYTES_PER_LINE) as u32, chunk))
        .collect()
}

/// A whole log with one framed dump per entry of `blocks`, surrounded by
/// unrelated kernel messages. Block lengths must be multiples of four.
#[doc(hidden)]
pub fn fingerprint_log(blocks: &[&[u8]]) -> String {
    framed_log(blocks, DEFAULT_START_MARKER, DEFAULT_END_MARKER)
}

/// Like [`fingerprint_log`] with custom marker lines.
#[doc(hidden)]
pub fn framed_log(blocks: &[&[u8]], start: &str, end: &str) -> String {
    let mut out = String::from("[    0.000000] Booting Linux on physical CPU 0x0\n");
    for (n, bytes) in blocks.iter().enumerate() {
        assert!(bytes.len() % 4 == 0, "block {} is not whole words", n);
        out.push_str("[   41.999999] Step 7: Output fingerprint data\n");
        out.push_str(&format!("[   42.000000] {}\n", start));
        for line in payload_lines(bytes) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!("[   42.000001] {}\n", end));
    }
    out.push_str("[   43.000000] All done\n");
    out
}

/// `side * side` bytes forming a horizontal gradient.
#[doc(hidden)]
pub fn gradient(side: usize) -> Vec<u8> {
    let denom = side.saturating_sub(1).max(1);
    (0..side * side)
        .map(|k| ((k % side) * 255 / denom) as u8)
        .collect()
}
