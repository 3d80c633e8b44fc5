use crate::file_reader::read_content;
use crate::file_reader::read_executable_document;
use crate::file_reader::ReadContentError;
use std::path::PathBuf;

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "libgraphql-ir-file-reader-{}",
        std::process::id(),
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn reads_and_parses_a_document() {
    let path = temp_file("ok.graphql", b"query Q { a } fragment F on T { b }");
    let doc = read_executable_document(&path).unwrap();
    assert_eq!(doc.definitions.len(), 2);
}

#[test]
fn directories_are_not_files() {
    let dir = std::env::temp_dir();
    assert_eq!(
        read_content(&dir).unwrap_err(),
        ReadContentError::PathIsNotAFile(dir.clone()),
    );
}

#[test]
fn invalid_utf8_is_reported() {
    let path = temp_file("bad-utf8.graphql", &[0x7b, 0xff, 0x7d]);
    assert!(matches!(
        read_content(&path),
        Err(ReadContentError::FileDecodeError { .. }),
    ));
}

#[test]
fn parse_errors_name_the_file() {
    let path = temp_file("broken.graphql", b"query {");
    let err = read_executable_document(&path).unwrap_err();
    assert!(matches!(err, ReadContentError::ParseError { .. }));
    assert_eq!(err.file_path(), path.as_path());
}
