//! Build a small synthetic kernel log and render it.
//!
//! Usage:
//!   cargo run -p log2image --example render_sample -- [OUTPUT_DIR]

use log2image::test_support::{fingerprint_log, gradient};
use log2image::{Batch, ExtractConfig, Progress, Result};

fn main() -> Result<()> {
    env_logger::init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "sample_out".to_string());
    let ramp = gradient(32);
    let flat = [0xA5u8; 64 * 64];
    let text = fingerprint_log(&[ramp.as_slice(), &flat[..]]);
    println!("{}", text.lines().take(4).collect::<Vec<_>>().join("\n"));

    let config = ExtractConfig::builder().output_dir(&out).build()?;
    let summary = Batch::new(config).run_str(&text, |event| {
        if let Progress::ImageWritten { path, side, .. } = event {
            println!("wrote {} ({}x{})", path.display(), side, side);
        }
    })?;
    println!("{} images in {}", summary.written.len(), out);
    Ok(())
}
