#[path = "../common/mod.rs"]
mod common;

use log2image::{Batch, Error, ExtractConfig, Progress};

fn config_in(dir: &std::path::Path) -> ExtractConfig {
    ExtractConfig::builder()
        .output_dir(dir)
        .build()
        .expect("config")
}

#[test]
fn two_blocks_write_two_images() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::fixtures::write_log(dir.path(), &common::fixtures::two_block_log());
    let out = dir.path().join("out");

    let summary = Batch::new(config_in(&out)).run(&log, |_| {}).expect("batch");

    let mut names: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["fingerprint_0.png", "fingerprint_1.png"]);
    assert_eq!(summary.written.len(), 2);

    let first = image::open(out.join("fingerprint_0.png")).unwrap().to_luma8();
    let second = image::open(out.join("fingerprint_1.png")).unwrap().to_luma8();
    assert!(first.pixels().all(|p| p.0 == [0x11]));
    assert!(second.pixels().all(|p| p.0 == [0x22]));
}

#[test]
fn empty_block_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::fixtures::write_log(dir.path(), &common::fixtures::empty_block_log());
    let out = dir.path().join("out");

    let mut events = Vec::new();
    let summary = Batch::new(config_in(&out))
        .run(&log, |e| events.push(e.clone()))
        .expect("batch");

    assert_eq!(summary.blocks, 1);
    assert!(summary.written.is_empty());
    assert_eq!(summary.skipped, vec![0]);
    assert_eq!(events.last(), Some(&Progress::BlockSkipped { index: 0 }));
    assert!(!out.join("fingerprint_0.png").exists());
}

#[test]
fn malformed_log_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = common::fixtures::write_log(dir.path(), &common::fixtures::missing_delimiter_log());
    let out = dir.path().join("out");

    let res = Batch::new(config_in(&out)).run(&log, |_| {});
    assert!(matches!(res, Err(Error::MissingDelimiter { line: 4, .. })));
    assert!(!out.exists());
}

#[test]
fn custom_prefix_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ExtractConfig::builder()
        .output_dir(dir.path())
        .file_prefix("core1_")
        .build()
        .expect("config");

    let summary = Batch::new(cfg)
        .run_str(&common::fixtures::single_line_log(), |_| {})
        .expect("batch");
    assert_eq!(summary.written, vec![dir.path().join("core1_0.png")]);
}

#[test]
fn identical_input_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let text = common::fixtures::two_block_log();
    let a = dir.path().join("a");
    let b = dir.path().join("b");

    Batch::new(config_in(&a)).run_str(&text, |_| {}).expect("batch a");
    Batch::new(config_in(&b)).run_str(&text, |_| {}).expect("batch b");

    for name in ["fingerprint_0.png", "fingerprint_1.png"] {
        let left = std::fs::read(a.join(name)).unwrap();
        let right = std::fs::read(b.join(name)).unwrap();
        assert_eq!(left, right, "{}", name);
    }
}
