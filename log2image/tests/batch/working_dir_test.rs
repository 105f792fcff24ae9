#[path = "../common/mod.rs"]
mod common;

use log2image::{Batch, ExtractConfig};
use serial_test::serial;

/// Runs `f` with the process working directory set to a fresh temp dir.
fn in_temp_cwd<F: FnOnce(&std::path::Path)>(f: F) {
    let dir = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    f(dir.path());
    std::env::set_current_dir(previous).unwrap();
}

#[test]
#[serial]
fn default_output_goes_to_working_directory() {
    in_temp_cwd(|cwd| {
        Batch::new(ExtractConfig::default())
            .run_str(&common::fixtures::two_block_log(), |_| {})
            .expect("batch");
        assert!(cwd.join("fingerprint_0.png").exists());
        assert!(cwd.join("fingerprint_1.png").exists());
    });
}

#[test]
#[serial]
fn relative_log_path_resolves_against_working_directory() {
    in_temp_cwd(|cwd| {
        common::fixtures::write_log(cwd, &common::fixtures::single_line_log());
        let summary = Batch::new(ExtractConfig::default())
            .run("kern.log", |_| {})
            .expect("batch");
        assert_eq!(summary.written.len(), 1);
        assert!(cwd.join("fingerprint_0.png").exists());
    });
}
