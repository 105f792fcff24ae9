// log2image/src/batch.rs
//! Batch driver: parse a log once, then write one image per block.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::ExtractConfig;
use crate::types::Fingerprint;
use crate::{Error, Result, output, parser, render};

/// Events reported while a batch runs, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A block was found in the log.
    BlockCollected {
        /// Block position in the log.
        index: usize,
        /// Line of the start marker.
        start_line: usize,
        /// Decoded bytes in the block.
        byte_count: usize,
    },
    /// A block had no bytes; no image is written for it.
    BlockSkipped {
        /// Block position in the log.
        index: usize,
    },
    /// An image was written.
    ImageWritten {
        /// Block position in the log.
        index: usize,
        /// Where the PNG went.
        path: PathBuf,
        /// Width and height in pixels.
        side: u32,
        /// Bytes past the square that were not drawn.
        dropped: usize,
    },
}

/// Outcome of a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Blocks found in the log, including empty ones.
    pub blocks: usize,
    /// Image paths in block order.
    pub written: Vec<PathBuf>,
    /// Indices of empty blocks that got no image.
    pub skipped: Vec<usize>,
}

/// Parse a log once, then render and write every block it contains.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    config: ExtractConfig,
}

impl Batch {
    /// Batch writing with `config`.
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Settings this batch runs with.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Run over the log at `input`. Images written before a failure stay on
    /// disk.
    pub fn run<F>(&self, input: impl AsRef<Path>, on_progress: F) -> Result<Summary>
    where
        F: FnMut(&Progress),
    {
        let blocks = parser::parse_file(input, &self.config)?;
        self.write_blocks(&blocks, on_progress)
    }

    /// Same as [`Batch::run`] for log text already in memory.
    pub fn run_str<F>(&self, text: &str, on_progress: F) -> Result<Summary>
    where
        F: FnMut(&Progress),
    {
        let blocks = parser::parse_str(text, &self.config)?;
        self.write_blocks(&blocks, on_progress)
    }

    /// Render and write already parsed blocks, reporting progress first for
    /// every collected block and then per image.
    pub fn write_blocks<F>(&self, blocks: &[Fingerprint], mut on_progress: F) -> Result<Summary>
    where
        F: FnMut(&Progress),
    {
        let mut summary = Summary {
            blocks: blocks.len(),
            ..Summary::default()
        };

        if blocks.is_empty() {
            warn!(
                "no fingerprint blocks found between {:?} and {:?}",
                self.config.start_marker(),
                self.config.end_marker()
            );
        }

        for fp in blocks {
            on_progress(&Progress::BlockCollected {
                index: fp.index(),
                start_line: fp.start_line(),
                byte_count: fp.len(),
            });
        }

        for fp in blocks {
            let image = match render::render(fp) {
                Ok(image) => image,
                Err(Error::EmptyBlock { index }) => {
                    warn!("block {} is empty, no image written", index);
                    summary.skipped.push(index);
                    on_progress(&Progress::BlockSkipped { index });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let path = output::image_path(
                self.config.output_dir(),
                self.config.file_prefix(),
                fp.index(),
            );
            output::write_png(&image, &path)?;
            info!(
                "block {}: wrote {}x{} image to {}",
                fp.index(),
                image.width(),
                image.height(),
                path.display()
            );

            on_progress(&Progress::ImageWritten {
                index: fp.index(),
                path: path.clone(),
                side: image.width(),
                dropped: fp.truncated_len(),
            });
            summary.written.push(path);
        }

        Ok(summary)
    }
}
