// log2image/src/output.rs
//! Output file naming and PNG writing.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};

use crate::constants::IMAGE_EXTENSION;
use crate::Result;

/// `<dir>/<prefix><index>.png`
pub fn image_path(dir: &Path, prefix: &str, index: usize) -> PathBuf {
    dir.join(format!("{}{}.{}", prefix, index, IMAGE_EXTENSION))
}

/// Write `image` as PNG, creating the parent directory if needed.
pub fn write_png(image: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
