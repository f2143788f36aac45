//! End-to-end pipeline tests: parse → view state → filter.
//!
//! Exercises the full load-then-search flow the way the CLI drives it,
//! without going through a terminal.

use onoma_engine::{Status, ViewState, load_dataset, spawn_load};
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = "\
name,length,syllables_est,vowel_ratio,starts_with,ending,endswith_a,endswith_i,endswith_y
Aarav,5,2,0.6,A,av,0,0,0
Arjun,5,2,0.4,A,un,0,0,0
Dev,3,1,0.33,D,ev,0,0,0
,4,2,0.5,X,xx,0,0,0
Isha,4,2,0.5,I,ha,1,0,0
";

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("names.csv");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn load_then_search_flow() {
    // Given: a dataset on disk with one blank-name row
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    // When: the startup load resolves into the view state
    let mut state = ViewState::new();
    assert_eq!(*state.status(), Status::Loading);
    state.apply_load(load_dataset(&path));

    // Then: the blank-name row was dropped and everything is visible
    assert_eq!(*state.status(), Status::Ready);
    assert_eq!(state.records().len(), 4);
    assert_eq!(state.visible().len(), 4);

    // When: the user types a prefix one keystroke at a time
    state.set_search_term("a");
    assert_eq!(state.visible().len(), 2);

    state.set_search_term("ar");
    let names: Vec<&str> = state.visible().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Arjun"]);

    // When: the term matches nothing
    state.set_search_term("zzz");
    assert!(state.visible().is_empty());
    assert_eq!(*state.status(), Status::Ready);
}

#[test]
fn threaded_load_feeds_the_same_state_machine() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let rx = spawn_load(path);
    let mut state = ViewState::new();
    state.apply_load(rx.recv().unwrap());

    assert_eq!(*state.status(), Status::Ready);
    assert_eq!(state.records().len(), 4);
}

#[test]
fn failed_load_reaches_terminal_failed_status() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");

    let mut state = ViewState::new();
    state.apply_load(load_dataset(&missing));

    match state.status() {
        Status::Failed(message) => assert!(!message.is_empty()),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(state.records().is_empty());
    assert!(state.visible().is_empty());
}
