//! End-to-end tests for the complete extraction pipeline

use termex_core::{Config, Error, Input, Language, TermExtractor, TermLibrary};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_complete_english_pipeline() {
    let library = TermLibrary::parse("hello world\tm1\npython\tm2\nhello\tm3\n");
    let config = Config::builder().language("en").max_window(5).build().unwrap();
    let extractor = TermExtractor::new(library, config);

    let output = extractor
        .process(Input::from_text("hello world, hello python, first hello"))
        .unwrap();

    for term in ["hello world", "python", "hello", "first hello"] {
        assert_eq!(
            output.terms().iter().filter(|t| *t == term).count(),
            1,
            "expected '{term}' exactly once in {:?}",
            output.terms()
        );
    }
    assert_eq!(output.terms().len(), 4);
    assert!(output
        .lines
        .iter()
        .any(|line| line.to_string() == "first hello\t第一m3"));
}

#[test]
fn test_complete_chinese_pipeline() {
    let library = TermLibrary::parse("世界第一高峰\tm\n珠穆朗玛峰\tm2\n");
    let config = Config::builder().language("cn").max_window(3).build().unwrap();
    let extractor = TermExtractor::new(library, config);

    let output = extractor.process_text("世界第一高峰是珠穆朗玛峰").unwrap();

    assert_eq!(output.terms(), &["世界第一高峰", "珠穆朗玛峰"]);
    assert_eq!(output.to_text(), "世界第一高峰\tm\n珠穆朗玛峰\tm2\n");
    assert!(!output.terms().iter().any(|t| t == "世界"));
}

#[test]
fn test_library_and_document_from_files() {
    let mut terms = NamedTempFile::new().unwrap();
    writeln!(terms, "Python\t蟒蛇语言").unwrap();
    writeln!(terms, "python\t蟒蛇语言").unwrap();
    writeln!(terms, "malformed line without delimiter").unwrap();

    let mut document = NamedTempFile::new().unwrap();
    write!(document, "Python is great. I like python. The second python too.").unwrap();

    let library = TermLibrary::from_file(terms.path()).unwrap();
    assert_eq!(library.skipped_lines(), 1);

    let extractor = TermExtractor::new(library, Config::default());
    let output = extractor.process(Input::from_file(document.path())).unwrap();

    assert_eq!(output.terms(), &["python", "second python"]);
    assert_eq!(output.lines[1].meaning, "第二蟒蛇语言");
}

#[test]
fn test_reader_input() {
    let library: TermLibrary = [("rust", "铁锈")].into_iter().collect();
    let extractor = TermExtractor::new(library, Config::default());
    let output = extractor
        .process(Input::from_reader(Cursor::new(b"the third rust".to_vec())))
        .unwrap();
    assert_eq!(output.to_text(), "third rust\t第三铁锈\n");
}

#[test]
fn test_unknown_language_is_fatal() {
    let err = Config::builder().language("jp").build().unwrap_err();
    assert!(matches!(err, Error::InvalidLanguage(_)));
}

#[test]
fn test_processing_is_repeatable() {
    let library = TermLibrary::parse("hello world\tm1\nhello\tm3\n");
    let extractor = TermExtractor::new(library, Config::default());
    let text = "hello world and hello again, first hello world";

    let first = extractor.process_text(text).unwrap();
    let second = extractor.process_text(text).unwrap();
    assert_eq!(first.terms(), second.terms());
    assert_eq!(first.to_text(), second.to_text());
    assert_eq!(extractor.language(), Language::English);
}
