#[path = "../common/mod.rs"]
mod common;

use log2image::constants::LEGACY_MARKER;
use log2image::test_support::{framed_log, gradient};
use log2image::{ExtractConfig, HexWord, parse_str};

#[test]
fn word_decomposes_to_reversed_byte_pairs() {
    let word = HexWord::new("AABBCCDD").expect("valid word");
    assert_eq!(word.byte_pairs(), ["DD", "CC", "BB", "AA"]);
}

#[test]
fn single_line_block_has_sixteen_bytes() {
    let blocks = parse_str(&common::fixtures::single_line_log(), &ExtractConfig::default())
        .expect("parse");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].len(), 16);
    assert_eq!(&blocks[0][..4], &[0xDD, 0xCC, 0xBB, 0xAA]);
}

#[test]
fn empty_block_is_kept_with_zero_length() {
    let blocks = parse_str(&common::fixtures::empty_block_log(), &ExtractConfig::default())
        .expect("parse");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_empty());
}

#[test]
fn blocks_keep_file_order() {
    let blocks = parse_str(&common::fixtures::two_block_log(), &ExtractConfig::default())
        .expect("parse");
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].iter().all(|&b| b == 0x11));
    assert!(blocks[1].iter().all(|&b| b == 0x22));
    assert!(blocks[0].start_line() < blocks[1].start_line());
}

#[test]
fn dump_text_reproduces_bytes() {
    let bytes = gradient(12);
    let text = log2image::test_support::fingerprint_log(&[bytes.as_slice()]);
    let blocks = parse_str(&text, &ExtractConfig::default()).expect("parse");
    assert_eq!(blocks[0].as_bytes(), bytes.as_slice());
}

#[test]
fn legacy_framing_with_shared_marker() {
    let cfg = ExtractConfig::builder()
        .toggle_marker(LEGACY_MARKER)
        .build()
        .expect("config");
    let text = framed_log(
        &[&[1u8, 2, 3, 4][..], &[5u8, 6, 7, 8][..]],
        LEGACY_MARKER,
        LEGACY_MARKER,
    );
    let blocks = parse_str(&text, &cfg).expect("parse");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].as_bytes(), &[5, 6, 7, 8]);
}
