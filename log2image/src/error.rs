// log2image/src/error.rs
//! Crate-wide error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// A payload line inside a block has no address delimiter.
    #[error("line {line}: payload line has no delimiter: {content:?}")]
    MissingDelimiter {
        /// 1-based input line.
        line: usize,
        /// The trimmed line.
        content: String,
    },

    /// A data word is not exactly eight characters.
    #[error("line {line}: hex word {word:?} has {actual} digits, expected {expected}")]
    InvalidWordLength {
        /// 1-based input line.
        line: usize,
        /// The offending word.
        word: String,
        /// Required digit count.
        expected: usize,
        /// Characters found.
        actual: usize,
    },

    /// A data word has a non-hex character.
    #[error("line {line}: invalid hex word {word:?}")]
    InvalidHex {
        /// 1-based input line.
        line: usize,
        /// The offending word.
        word: String,
    },

    /// A block with no bytes cannot be rendered.
    #[error("fingerprint block {index} is empty")]
    EmptyBlock {
        /// Block position in the log.
        index: usize,
    },

    /// Rejected by `ExtractConfigBuilder::build`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading the log or writing an image failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// Line number (1-based) of the offending input line, for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingDelimiter { line, .. }
            | Error::InvalidWordLength { line, .. }
            | Error::InvalidHex { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Attach a line number to a word-level error raised without one.
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            Error::InvalidWordLength {
                word,
                expected,
                actual,
                ..
            } => Error::InvalidWordLength {
                line: line_no,
                word,
                expected,
                actual,
            },
            Error::InvalidHex { word, .. } => Error::InvalidHex {
                line: line_no,
                word,
            },
            other => other,
        }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
