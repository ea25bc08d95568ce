//! Indent writer tests

mod common;

use common::{FailingSink, Interrupting, Trickle};
use pretty_assertions::assert_eq;
use std::io::{self, Write};
use tracetree::*;

fn through(indent: &str, chunks: &[&str]) -> String {
    let mut w = IndentWriter::new(Vec::new(), indent);
    for chunk in chunks {
        w.write_all(chunk.as_bytes()).unwrap();
    }
    String::from_utf8(w.into_inner()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Line Handling
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_every_line_prefixed() {
    assert_eq!(through(">> ", &["a\nb\nc"]), ">> a\n>> b\n>> c");
}

#[test]
fn test_split_calls_match_single_call() {
    let whole = through(">> ", &["a\nb"]);
    assert_eq!(through(">> ", &["a", "\nb"]), whole);
    assert_eq!(through(">> ", &["a\n", "b"]), whole);
    assert_eq!(through(">> ", &["", "a", "", "\n", "b", ""]), whole);
}

#[test]
fn test_byte_at_a_time_matches_single_call() {
    let text = "first\n\nthird line\nlast";
    let bytes: Vec<String> = text.chars().map(String::from).collect();
    let chunks: Vec<&str> = bytes.iter().map(String::as_str).collect();
    assert_eq!(through("\t", &chunks), through("\t", &[text]));
}

#[test]
fn test_count_excludes_indent() {
    let mut w = IndentWriter::new(Vec::new(), "----");
    assert_eq!(w.write(b"ab\ncd").unwrap(), 5);
    assert_eq!(w.get_ref().len(), 5 + 2 * 4);
}

#[test]
fn test_formatted_output() {
    let mut w = IndentWriter::new(Vec::new(), "  ");
    writeln!(w, "depth {}", 1).unwrap();
    write!(w, "value = {:?}", "x\ny").unwrap();
    assert_eq!(
        String::from_utf8(w.into_inner()).unwrap(),
        "  depth 1\n  value = \"x\\ny\""
    );
}

#[test]
fn test_nested_writers_stack_indentation() {
    let mut outer = IndentWriter::new(Vec::new(), "| ");
    {
        let mut inner = IndentWriter::new(&mut outer, "- ");
        inner.write_all(b"one\ntwo\n").unwrap();
    }
    outer.write_all(b"three\n").unwrap();
    assert_eq!(
        String::from_utf8(outer.into_inner()).unwrap(),
        "| - one\n| - two\n| three\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Partial Writes and Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_error_mid_chunk_reports_count_and_error() {
    // indent, "a\n", indent succeed; "b\n" fails
    let mut w = IndentWriter::new(FailingSink::new(3), ">> ");
    let err = w.write_chunk(b"a\nb\nc").unwrap_err();

    assert_eq!(err.written, 2);
    assert_eq!(err.source.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(w.get_ref().out, b">> a\n>> ");
}

#[test]
fn test_error_mid_chunk_is_partial_count_through_io_write() {
    let mut w = IndentWriter::new(FailingSink::new(3), ">> ");
    assert_eq!(w.write(b"a\nb\nc").unwrap(), 2);
    // the rest hits the closed sink on the next call
    assert_eq!(
        w.write(b"b\nc").unwrap_err().kind(),
        io::ErrorKind::BrokenPipe
    );
}

#[test]
fn test_error_before_any_byte_is_an_error() {
    let mut w = IndentWriter::new(FailingSink::new(0), ">> ");
    let err = w.write(b"abc").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert!(w.is_at_line_start());
}

#[test]
fn test_short_write_returns_early() {
    let mut w = IndentWriter::new(Trickle::new(1), "> ");
    assert_eq!(w.write_chunk(b"ab\ncd").unwrap(), 1);
    assert!(!w.is_at_line_start());
    assert_eq!(w.get_ref().out, b"> a");
}

#[test]
fn test_write_all_over_short_writes_indents_once_per_line() {
    let mut w = IndentWriter::new(Trickle::new(1), "> ");
    w.write_all(b"ab\ncd").unwrap();
    w.flush().unwrap();

    let sink = w.into_inner();
    assert!(sink.flushed);
    assert_eq!(String::from_utf8(sink.out).unwrap(), "> ab\n> cd");
}

#[test]
fn test_short_write_error_converts_to_trace_error() {
    fn forward(w: &mut IndentWriter<FailingSink>) -> tracetree::Result<usize> {
        Ok(w.write_chunk(b"x\ny")?)
    }

    let mut w = IndentWriter::new(FailingSink::new(0), "");
    match forward(&mut w) {
        Err(TraceError::ShortWrite(short)) => assert_eq!(short.written, 0),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_interrupted_indent_is_not_retried() {
    let mut w = IndentWriter::new(Interrupting::new(2), ">> ");
    let err = w.write_chunk(b"x").unwrap_err();
    assert_eq!(err.written, 0);
    assert_eq!(err.source.kind(), io::ErrorKind::Interrupted);
    assert!(w.get_ref().out.is_empty());

    // write_all retries Interrupted itself; the indent goes out once
    w.write_all(b"x").unwrap();
    assert_eq!(w.get_ref().out, b">> x");
}

#[test]
fn test_indent_split_by_short_writes_goes_out_once() {
    let mut w = IndentWriter::new(Trickle::new(2), "----");
    w.write_all(b"ab\ncd\n").unwrap();
    assert_eq!(
        String::from_utf8(w.into_inner().out).unwrap(),
        "----ab\n----cd\n"
    );
}
