//! End-to-end menu sessions over a temporary catalog file

use std::fs;
use std::io::Cursor;
use std::path::Path;

use library_catalog::{
    console::{Session, SessionOutcome},
    repository::Repository,
};
use tempfile::TempDir;

const CATALOG: &str = "id,title,author,year,genre,status
1,Laskar Pelangi,Andrea Hirata,2005,Novel,available
2,Sang Pemimpi,Andrea Hirata,2006,Novel,borrowed
3,Ayat-Ayat Cinta,Habiburrahman El Shirazy,2004,Religi,available
";

struct Fixture {
    _dir: TempDir,
    path: std::path::PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("books.csv");
        fs::write(&path, CATALOG).expect("seed catalog");
        Self { _dir: dir, path }
    }

    fn run(&self, input: &str) -> (SessionOutcome, String, Repository) {
        run_session(&self.path, input)
    }

    fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("read catalog")
    }
}

fn run_session(path: &Path, input: &str) -> (SessionOutcome, String, Repository) {
    let (repository, _) = Repository::load(path).expect("load catalog");
    let mut session = Session::new(
        repository,
        path.to_path_buf(),
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    );
    let outcome = session.run().expect("session runs");
    let repository = session.repository().clone();
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (outcome, output, repository)
}

#[test]
fn borrow_then_save_persists_status() {
    let fixture = Fixture::new();
    let (outcome, output, _) = fixture.run("3\n1\n6\n");
    assert_eq!(outcome, SessionOutcome::Saved);
    assert!(output.contains("Borrowed: Laskar Pelangi"));
    assert!(output.contains("Changes saved. Goodbye!"));
    assert!(fixture
        .contents()
        .contains("1,Laskar Pelangi,Andrea Hirata,2005,Novel,borrowed"));
}

#[test]
fn borrowing_twice_reports_already_borrowed() {
    let fixture = Fixture::new();
    let (_, output, repo) = fixture.run("3\n1\n3\n1\n");
    assert_eq!(output.matches("Borrowed: Laskar Pelangi").count(), 1);
    assert!(output.contains("That book is already borrowed. Please choose another."));
    let book = repo.books.find_by_id(1).unwrap();
    assert!(!book.available);
    assert_eq!(book.title, "Laskar Pelangi");
    assert_eq!(book.year, 2005);
}

#[test]
fn return_flow() {
    let fixture = Fixture::new();
    let (_, output, repo) = fixture.run("4\n2\n4\n2\n4\n99\n");
    assert!(output.contains("Thank you, return recorded for: Sang Pemimpi"));
    assert!(output.contains("That book is already in the library."));
    assert!(output.contains("Book ID not found."));
    assert!(repo.books.find_by_id(2).unwrap().available);
}

#[test]
fn unrecognized_choice_changes_nothing() {
    let fixture = Fixture::new();
    let (outcome, output, repo) = fixture.run("9\n");
    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(output.contains("Unrecognized choice. Please pick 1-6."));
    // the menu is shown again after the rejected choice
    assert_eq!(output.matches("Your choice: ").count(), 2);
    let (original, _) = Repository::load(&fixture.path).unwrap();
    assert_eq!(repo.books.all(), original.books.all());
}

#[test]
fn abandoned_session_leaves_file_untouched() {
    let fixture = Fixture::new();
    let (outcome, output, _) = fixture.run("3\n1\n");
    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(output.contains("Changes were not saved."));
    assert_eq!(fixture.contents(), CATALOG);
}

#[test]
fn empty_search_lists_every_book() {
    let fixture = Fixture::new();
    let (_, output, _) = fixture.run("2\n\n");
    assert!(output.contains("Search results:"));
    for title in ["Laskar Pelangi", "Sang Pemimpi", "Ayat-Ayat Cinta"] {
        assert!(output.contains(title), "missing {}", title);
    }
}

#[test]
fn search_by_author_is_case_insensitive() {
    let fixture = Fixture::new();
    let (_, output, _) = fixture.run("2\nANDREA\n");
    assert!(output.contains("Laskar Pelangi"));
    assert!(output.contains("Sang Pemimpi"));
    assert!(!output.contains("Ayat-Ayat Cinta"));
}

#[test]
fn search_without_matches() {
    let fixture = Fixture::new();
    let (_, output, _) = fixture.run("2\ntolstoy\n");
    assert!(output.contains("No books match that keyword."));
    assert!(!output.contains("Search results:"));
}

#[test]
fn summary_counts_session_changes() {
    let fixture = Fixture::new();
    let (_, output, _) = fixture.run("3\n3\n5\n");
    assert!(output.contains("Total titles: 3"));
    assert!(output.contains("Available:    1"));
    assert!(output.contains("Borrowed:     2"));
}

#[test]
fn non_numeric_id_is_rejected() {
    let fixture = Fixture::new();
    let (_, output, repo) = fixture.run("3\none\n");
    assert!(output.contains("Invalid input."));
    let (original, _) = Repository::load(&fixture.path).unwrap();
    assert_eq!(repo.books.all(), original.books.all());
}

#[test]
fn failed_save_keeps_session_running() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("books.csv");
    fs::write(&path, CATALOG).expect("seed catalog");
    let (repository, _) = Repository::load(&path).expect("load catalog");

    // a directory in place of the file makes the write fail
    let blocked = dir.path().join("blocked");
    fs::create_dir(&blocked).expect("create dir");
    let mut session = Session::new(
        repository,
        blocked,
        Cursor::new(b"6\n".to_vec()),
        Vec::new(),
    );
    assert_eq!(session.run().unwrap(), SessionOutcome::Abandoned);
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Could not save the catalog"));
    assert!(!output.contains("Goodbye"));
}

#[test]
fn list_renders_table() {
    let fixture = Fixture::new();
    let (_, output, _) = fixture.run("1\n");
    assert!(output.contains("| ID   | Title"));
    assert!(output.contains("Habiburrahman E..."));
    assert!(output.contains("Available"));
    assert!(output.contains("Borrowed"));
}
