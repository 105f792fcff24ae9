// log2image/src/render.rs
//! Square grayscale rendering of fingerprint bytes.
//!
//! Bytes fill the square row-major from the bottom row up, so the first
//! dumped byte lands in the bottom-left corner.

use image::{GrayImage, Luma};
use log::warn;

use crate::types::Fingerprint;
use crate::{Error, Result};

/// Side of the largest square that fits `len` bytes.
pub fn side_len(len: usize) -> u32 {
    // isqrt(usize::MAX) < 2^32 on 64-bit targets
    len.isqrt() as u32
}

/// Render raw bytes. Trailing bytes past `side_len(bytes.len())^2` are not
/// drawn; an empty slice gives a 0x0 image.
pub fn render_bytes(bytes: &[u8]) -> GrayImage {
    let side = side_len(bytes.len());
    let n = side as usize;
    GrayImage::from_fn(side, side, |i, j| {
        let idx = (n - j as usize - 1) * n + i as usize;
        Luma([bytes[idx]])
    })
}

/// Render one block, warning when its length is not a perfect square.
pub fn render(fp: &Fingerprint) -> Result<GrayImage> {
    if fp.is_empty() {
        return Err(Error::EmptyBlock { index: fp.index() });
    }

    let dropped = fp.truncated_len();
    if dropped != 0 {
        warn!(
            "block {}: {} bytes is not a perfect square, dropping last {}",
            fp.index(),
            fp.len(),
            dropped
        );
    }

    Ok(render_bytes(fp.as_bytes()))
}
