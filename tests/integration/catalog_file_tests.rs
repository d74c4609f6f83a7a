//! Catalog file load/save behaviour

use std::fs;

use library_catalog::{
    codec,
    models::{DropReason, DroppedLine},
    repository::Repository,
};
use tempfile::NamedTempFile;

const CATALOG: &str = "id,title,author,year,genre,status
1,Bumi Manusia,Pramoedya Ananta Toer,1980,Novel,available
2,Ronggeng Dukuh Paruk,Ahmad Tohari,1982,Novel,borrowed
3,Negeri 5 Menara,Ahmad Fuadi,2009,Novel,available
";

fn catalog_file(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp catalog");
    fs::write(file.path(), content).expect("write temp catalog");
    file
}

#[test]
fn five_field_line_is_dropped() {
    let file = catalog_file(
        "id,title,author,year,genre,status
1,A,B,2001,G,available
2,C,D,2002,G,borrowed
3,E,F,2003,available
",
    );
    let (repo, report) = Repository::load(file.path()).unwrap();
    assert_eq!(repo.books.len(), 2);
    assert_eq!(
        report.dropped,
        vec![DroppedLine {
            line: 4,
            reason: DropReason::FieldCount(5)
        }]
    );
}

#[test]
fn reencoding_a_loaded_file_reproduces_it() {
    let file = catalog_file(CATALOG);
    let (repo, _) = Repository::load(file.path()).unwrap();
    assert_eq!(codec::encode(repo.books.all()), CATALOG);
}

#[test]
fn decode_encode_decode_is_stable() {
    let (first, _) = codec::decode(CATALOG);
    let (second, report) = codec::decode(&codec::encode(&first));
    assert!(report.dropped.is_empty());
    assert_eq!(first, second);
}

#[test]
fn save_normalizes_status_tokens_and_header() {
    let file = catalog_file(
        "ID;TITLE
7,Title,Author,1970,Poetry,checked-out
8,Other,Writer,1971,Poetry,available
",
    );
    let (repo, _) = Repository::load(file.path()).unwrap();
    repo.save(file.path()).unwrap();
    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        "id,title,author,year,genre,status
7,Title,Author,1970,Poetry,borrowed
8,Other,Writer,1971,Poetry,available
"
    );
}

#[test]
fn header_only_file_loads_empty() {
    let file = catalog_file("id,title,author,year,genre,status\n");
    let (repo, report) = Repository::load(file.path()).unwrap();
    assert!(repo.books.is_empty());
    assert_eq!(report.loaded, 0);
}
