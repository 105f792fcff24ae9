#[path = "../common/mod.rs"]
mod common;

use log2image::{Error, ExtractConfig, MalformedLinePolicy, parse_str};

#[test]
fn missing_delimiter_reports_line() {
    let err = parse_str(
        &common::fixtures::missing_delimiter_log(),
        &ExtractConfig::default(),
    )
    .unwrap_err();
    match &err {
        Error::MissingDelimiter { line, content } => {
            assert_eq!(*line, 4);
            assert_eq!(content, "00000000 00000000");
        }
        other => panic!("expected MissingDelimiter, got: {:?}", other),
    }
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn missing_delimiter_skipped_on_request() {
    let cfg = ExtractConfig::builder()
        .malformed(MalformedLinePolicy::Skip)
        .build()
        .expect("config");
    let blocks = parse_str(&common::fixtures::missing_delimiter_log(), &cfg).expect("parse");
    assert_eq!(blocks[0].len(), 8);
}

#[test]
fn short_word_reports_line() {
    let text = format!(
        "{}\nc0000000: 1234567\n{}\n",
        log2image::constants::DEFAULT_START_MARKER,
        log2image::constants::DEFAULT_END_MARKER
    );
    match parse_str(&text, &ExtractConfig::default()) {
        Err(Error::InvalidWordLength { line, actual, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(actual, 7);
        }
        other => panic!("expected InvalidWordLength, got: {:?}", other),
    }
}

#[test]
fn malformed_lines_outside_blocks_are_ignored() {
    let text = format!(
        "no delimiter\nx: zz\n{}\n",
        common::fixtures::single_line_log()
    );
    let blocks = parse_str(&text, &ExtractConfig::default()).expect("parse");
    assert_eq!(blocks.len(), 1);
}
