//! Hexadecimal helpers for debug output and for producing dump text.
//!
//! `bytes_to_hex_spaced` previews block contents in logs; `bytes_to_words`
//! is the inverse of the parser's word decoding and formats bytes the way
//! the kernel module prints them.

use std::fmt::Write;

use crate::constants::WORD_BYTES;

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Format bytes (memory order) as space-separated `%08x` words.
///
/// A trailing partial word is zero-padded in its high bytes.
///
/// Example: `&[0xdd, 0xcc, 0xbb, 0xaa]` -> `"aabbccdd"`
pub fn bytes_to_words(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() / WORD_BYTES * 9 + 8);
    for (i, chunk) in bytes.chunks(WORD_BYTES).enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let mut word = [0u8; WORD_BYTES];
        word[..chunk.len()].copy_from_slice(chunk);
        let _ = write!(&mut s, "{:08x}", u32::from_le_bytes(word));
    }
    s
}
