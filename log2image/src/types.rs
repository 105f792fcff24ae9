// log2image/src/types.rs
//! Dump words and fingerprint blocks.

use derive_more::{Deref, Display};

use crate::constants::{WORD_BYTES, WORD_HEX_DIGITS};
use crate::{Error, Result};

/// One dumped 32-bit word as printed in the log (`%08x`), validated to be
/// exactly eight hex digits.
///
/// Parse errors carry line 0; the parser rewrites them with the real line
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref, Display)]
#[display(fmt = "{}", text)]
pub struct HexWord<'a> {
    #[deref(forward)]
    text: &'a str,
    value: u32,
}

impl<'a> HexWord<'a> {
    /// Validate `word` and parse it once; later accessors cannot fail.
    pub fn new(word: &'a str) -> Result<Self> {
        let actual = word.chars().count();
        if actual != WORD_HEX_DIGITS {
            return Err(Error::InvalidWordLength {
                line: 0,
                word: word.to_string(),
                expected: WORD_HEX_DIGITS,
                actual,
            });
        }
        let invalid = || Error::InvalidHex {
            line: 0,
            word: word.to_string(),
        };
        // from_str_radix alone would accept a leading '+'
        if !word.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(word, 16).map_err(|_| invalid())?;
        Ok(Self { text: word, value })
    }

    /// The word's numeric value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Byte pairs in memory order. The word is printed most significant
    /// byte first, so `aabbccdd` yields `["dd", "cc", "bb", "aa"]`.
    pub fn byte_pairs(&self) -> [&'a str; WORD_BYTES] {
        let w = self.text;
        [&w[6..8], &w[4..6], &w[2..4], &w[0..2]]
    }

    /// Bytes in memory order (little-endian decomposition of the word).
    pub fn to_bytes(&self) -> [u8; WORD_BYTES] {
        self.value.to_le_bytes()
    }
}

/// A fingerprint block: the bytes between one start marker and its end
/// marker, in dump order.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Fingerprint {
    index: usize,
    start_line: usize,
    #[deref(forward)]
    bytes: Vec<u8>,
}

impl Fingerprint {
    /// Block `index` opened at `start_line` holding `bytes`.
    pub fn new(index: usize, start_line: usize, bytes: Vec<u8>) -> Self {
        Self {
            index,
            start_line,
            bytes,
        }
    }

    /// Zero-based position of the block in the log.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line number of the start marker.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// The block bytes in memory order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the block bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Side of the square image this block renders to.
    pub fn side_len(&self) -> usize {
        self.bytes.len().isqrt()
    }

    /// Bytes past the largest square that the rendered image drops.
    pub fn truncated_len(&self) -> usize {
        let side = self.side_len();
        self.bytes.len() - side * side
    }
}
