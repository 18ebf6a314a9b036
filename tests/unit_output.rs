//! Unit tests for term emission and output file handling.

use std::fs;
use std::io::Write;

use tempfile::tempdir;
use ulam::{create_output_file, BuilderConfig, LineSink, SequenceBuilder};

fn run_streamed(with_addends: bool) -> String {
    let mut builder = SequenceBuilder::new(BuilderConfig::default());
    let mut buf = Vec::new();
    let mut sink = LineSink::new(&mut buf, with_addends);
    builder.run_with_sink(&mut sink).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn lines_are_one_term_each_without_seeds() {
    assert_eq!(run_streamed(false), "3\n4\n6\n8\n11\n13\n");
}

#[test]
fn addend_mode_appends_the_smaller_addend() {
    assert_eq!(run_streamed(true), "3 1\n4 1\n6 2\n8 2\n11 3\n13 2\n");
}

#[test]
fn output_file_is_replaced_not_appended() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("terms.txt");
    fs::write(&path, "stale contents\n").unwrap();

    let mut file = create_output_file(&path).unwrap();
    writeln!(file, "42").unwrap();
    drop(file);

    assert_eq!(fs::read_to_string(&path).unwrap(), "42\n");
}

#[test]
fn output_file_is_created_when_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.txt");
    let file = create_output_file(&path).unwrap();
    drop(file);
    assert!(path.exists());
}
