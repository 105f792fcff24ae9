//! Render every fingerprint dump in a kernel log as `fingerprint_<n>.png`.
//!
//! Usage:
//!   log2image [OPTIONS] <LOG_FILE>

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log2image::constants::{
    DEFAULT_DELIMITER, DEFAULT_END_MARKER, DEFAULT_FILE_PREFIX, DEFAULT_START_MARKER,
    LEGACY_MARKER,
};
use log2image::{Batch, ExtractConfig, MalformedLinePolicy, Progress};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Kernel log containing the fingerprint dumps
    log_file: PathBuf,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// File name prefix; the block index and `.png` follow
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    prefix: String,

    /// Line suffix that opens a dump
    #[arg(long, default_value = DEFAULT_START_MARKER, allow_hyphen_values = true)]
    start_marker: String,

    /// Line suffix that closes a dump
    #[arg(long, default_value = DEFAULT_END_MARKER, allow_hyphen_values = true)]
    end_marker: String,

    /// Dumps framed by a single `--------------------` line at both ends
    #[arg(long, conflicts_with_all = ["start_marker", "end_marker"])]
    legacy: bool,

    /// Separator between the address and the data words
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Drop undecodable payload lines with a warning instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print progress lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also land here
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let policy = if cli.skip_malformed {
        MalformedLinePolicy::Skip
    } else {
        MalformedLinePolicy::Fail
    };
    let builder = if cli.legacy {
        ExtractConfig::builder().toggle_marker(LEGACY_MARKER)
    } else {
        ExtractConfig::builder()
            .start_marker(cli.start_marker.as_str())
            .end_marker(cli.end_marker.as_str())
    };
    let config = builder
        .delimiter(cli.delimiter)
        .output_dir(&cli.output_dir)
        .file_prefix(cli.prefix.as_str())
        .malformed(policy)
        .build()?;

    let quiet = cli.quiet;
    let summary = Batch::new(config)
        .run(&cli.log_file, |event| {
            if !quiet {
                print_progress(event);
            }
        })
        .with_context(|| format!("failed to process {}", cli.log_file.display()))?;

    if !quiet {
        println!(
            "{} fingerprint(s) found, {} image(s) written",
            summary.blocks,
            summary.written.len()
        );
    }
    Ok(())
}

fn print_progress(event: &Progress) {
    match event {
        Progress::BlockCollected {
            index,
            start_line,
            byte_count,
        } => println!(
            "Collected fingerprint {} ({} bytes, line {})",
            index, byte_count, start_line
        ),
        Progress::BlockSkipped { index } => {
            println!("Skipped fingerprint {}: no data", index)
        }
        Progress::ImageWritten {
            index,
            path,
            side,
            dropped,
        } => {
            if *dropped > 0 {
                println!(
                    "Wrote fingerprint {} to {} ({}x{}, {} trailing bytes dropped)",
                    index,
                    path.display(),
                    side,
                    side,
                    dropped
                );
            } else {
                println!(
                    "Wrote fingerprint {} to {} ({}x{})",
                    index,
                    path.display(),
                    side,
                    side
                );
            }
        }
    }
}
