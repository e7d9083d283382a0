//! Interactive session tests: command flow and preferences that outlive a
//! session.

use knights_tour::core::{BoardSize, Square, TourStatus};
use knights_tour::prefs::{JsonFileStore, PreferenceStore, Preferences, VisitedStyle, SIZE_KEY, STYLE_KEY};
use knights_tour::session::{Reply, Session};

/// Scratch directory holding a preferences file; removed when dropped.
fn temp_prefs() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    (dir, path)
}

fn run(session: &mut Session, lines: &[&str]) -> String {
    let mut last = String::new();
    for line in lines {
        if let Reply::Continue(text) = session.handle_line(line) {
            last = text;
        }
    }
    last
}

/// Board size and style chosen in one session are restored in the next;
/// tour progress is not.
#[test]
fn test_preferences_survive_sessions() {
    let (_dir, path) = temp_prefs();

    let mut first = Session::new(Box::new(JsonFileStore::open(&path)));
    run(&mut first, &["new 5", "style number", "0 0", "2 1"]);
    assert_eq!(first.engine().visited_count(), 2);
    drop(first);

    let second = Session::new(Box::new(JsonFileStore::open(&path)));
    assert_eq!(
        second.preferences(),
        Preferences::default()
            .with_board_size(BoardSize::new(5).unwrap())
            .with_visited_style(VisitedStyle::Number)
    );
    assert_eq!(second.engine().status(), TourStatus::Empty);

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(SIZE_KEY).as_deref(), Some("5"));
    assert_eq!(store.get(STYLE_KEY).as_deref(), Some("number"));
}

/// Reset clears the tour but keeps the board size.
#[test]
fn test_reset_keeps_board_size() {
    let (_dir, path) = temp_prefs();
    let mut session = Session::new(Box::new(JsonFileStore::open(&path)));
    run(&mut session, &["new 6", "0 0"]);

    let out = run(&mut session, &["reset"]);

    assert!(out.contains("Place the knight anywhere to begin."));
    assert_eq!(session.engine().size().get(), 6);
}

/// A full session on a 5x5 board: opening, a rejected move, undo, a win.
#[test]
fn test_session_to_win() {
    let (_dir, path) = temp_prefs();
    let mut session = Session::new(Box::new(JsonFileStore::open(&path))).ascii(true);

    let out = run(&mut session, &["new 5", "0,0", "0,1"]);
    assert!(out.starts_with("Invalid move.\n"));

    run(&mut session, &["2,1", "z"]);
    assert_eq!(session.engine().current(), Some(Square::new(0, 0)));

    let tour = [
        "2,1", "4,0", "3,2", "4,4", "2,3", "0,4", "1,2", "3,3", "1,4", "0,2", "1,0", "3,1", "4,3",
        "2,4", "0,3", "1,1", "3,0", "4,2", "3,4", "1,3", "0,1", "2,2", "4,1", "2,0",
    ];
    let out = run(&mut session, &tour);

    assert!(out.contains("Tour complete! 25/25 squares visited."));
    assert!(out.contains("== Full Tour! =="));
    assert!(out.contains("You visited all 25 squares."));
}
