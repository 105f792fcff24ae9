// log2image/src/config.rs
//! Extraction settings and their builder.

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_DELIMITER, DEFAULT_END_MARKER, DEFAULT_FILE_PREFIX, DEFAULT_START_MARKER,
};
use crate::{Error, Result};

/// What to do with a payload line that cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Abort the run with a parse error naming the line.
    #[default]
    Fail,
    /// Log a warning and drop the line from its block.
    Skip,
}

/// Settings for one extraction run. Build with [`ExtractConfig::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    start_marker: String,
    end_marker: String,
    delimiter: char,
    output_dir: PathBuf,
    file_prefix: String,
    malformed: MalformedLinePolicy,
}

impl ExtractConfig {
    /// Start a builder with every field at its default.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }

    /// Line suffix that opens a block.
    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    /// Line suffix that closes a block.
    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    /// Identical markers toggle: the same line opens and closes a block.
    pub fn toggles(&self) -> bool {
        self.start_marker == self.end_marker
    }

    /// Separator between address and data words.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Directory images are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Image file name prefix.
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Handling of undecodable payload lines.
    pub fn malformed(&self) -> MalformedLinePolicy {
        self.malformed
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            delimiter: DEFAULT_DELIMITER,
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            malformed: MalformedLinePolicy::Fail,
        }
    }
}

/// Helper to construct an ExtractConfig; unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct ExtractConfigBuilder {
    start_marker: Option<String>,
    end_marker: Option<String>,
    delimiter: Option<char>,
    output_dir: Option<PathBuf>,
    file_prefix: Option<String>,
    malformed: Option<MalformedLinePolicy>,
}

impl ExtractConfigBuilder {
    /// Builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line suffix that opens a block.
    pub fn start_marker(mut self, marker: impl Into<String>) -> Self {
        self.start_marker = Some(marker.into());
        self
    }

    /// Set the line suffix that closes a block.
    pub fn end_marker(mut self, marker: impl Into<String>) -> Self {
        self.end_marker = Some(marker.into());
        self
    }

    /// Use one marker for both ends of a block.
    pub fn toggle_marker(self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        self.start_marker(marker.clone()).end_marker(marker)
    }

    /// Set the address/data separator.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the directory images are written to.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the image file name prefix.
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = Some(prefix.into());
        self
    }

    /// Set the handling of undecodable payload lines.
    pub fn malformed(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed = Some(policy);
        self
    }

    /// Consume the builder and validate the result.
    ///
    /// Markers are matched against trimmed lines, so they are trimmed here
    /// too and must not end up empty. The delimiter may not be whitespace or
    /// a hex digit, since either would split inside the data words.
    pub fn build(self) -> Result<ExtractConfig> {
        let defaults = ExtractConfig::default();

        let start_marker = self
            .start_marker
            .map(|m| m.trim().to_string())
            .unwrap_or(defaults.start_marker);
        let end_marker = self
            .end_marker
            .map(|m| m.trim().to_string())
            .unwrap_or(defaults.end_marker);
        if start_marker.is_empty() || end_marker.is_empty() {
            return Err(Error::InvalidConfig("markers must not be empty".into()));
        }

        let delimiter = self.delimiter.unwrap_or(defaults.delimiter);
        if delimiter.is_whitespace() || delimiter.is_ascii_hexdigit() {
            return Err(Error::InvalidConfig(format!(
                "delimiter {:?} would split data words",
                delimiter
            )));
        }

        let file_prefix = self.file_prefix.unwrap_or(defaults.file_prefix);
        if file_prefix.contains(std::path::is_separator) {
            return Err(Error::InvalidConfig(format!(
                "file prefix {:?} must not contain a path separator",
                file_prefix
            )));
        }

        Ok(ExtractConfig {
            start_marker,
            end_marker,
            delimiter,
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            file_prefix,
            malformed: self.malformed.unwrap_or(defaults.malformed),
        })
    }
}
