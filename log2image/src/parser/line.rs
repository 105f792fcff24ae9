// log2image/src/parser/line.rs
//! Payload line decoding.

use crate::types::HexWord;
use crate::{Error, Result};

/// Return the part of a payload line after the first `delimiter`.
pub fn split_payload(line_no: usize, line: &str, delimiter: char) -> Result<&str> {
    match line.split_once(delimiter) {
        Some((_address, words)) => Ok(words),
        None => Err(Error::MissingDelimiter {
            line: line_no,
            content: line.to_string(),
        }),
    }
}

/// Decode one payload line into bytes, four per word, in memory order.
///
/// The whole line is decoded before anything is returned so a bad word
/// never leaves half a line behind in a block.
pub fn decode_payload(line_no: usize, line: &str, delimiter: char) -> Result<Vec<u8>> {
    let words = split_payload(line_no, line, delimiter)?;

    let mut out = Vec::with_capacity(words.len() / 2);
    for word in words.split_whitespace() {
        let word = HexWord::new(word).map_err(|e| e.at_line(line_no))?;
        out.extend_from_slice(&word.to_bytes());
    }
    Ok(out)
}
