// log2image/src/constants.rs
//! Default framing and naming constants for fingerprint dumps

/// Marker line printed before a fingerprint dump
pub const DEFAULT_START_MARKER: &str = "---------- FINGERPRINT START ----------";

/// Marker line printed after a fingerprint dump
pub const DEFAULT_END_MARKER: &str = "---------- FINGERPRINT END ----------";

/// Generic framing used by older dumps, where the same line opens and
/// closes a block
pub const LEGACY_MARKER: &str = "--------------------";

/// Separates the address column from the data words on a payload line
pub const DEFAULT_DELIMITER: char = ':';

/// Hex digits per dumped word (one 32-bit word)
pub const WORD_HEX_DIGITS: usize = 8;

/// Bytes per dumped word
pub const WORD_BYTES: usize = WORD_HEX_DIGITS / 2;

/// Output file name prefix; the block index and extension follow
pub const DEFAULT_FILE_PREFIX: &str = "fingerprint_";

/// Output image extension
pub const IMAGE_EXTENSION: &str = "png";
