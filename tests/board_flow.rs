use std::fs;
use std::time::{Duration, Instant};

use tafel::app::{App, AppScreen};
use tafel::config::Config;
use tafel::dataset::loader::{self, SAMPLE_QUESTIONS};
use tafel::dataset::parser::{self, SchemaVariant};
use tafel::session::Session;
use tafel::timer::TimerDisplay;
use tafel::ui::components::board_grid::{CellState, cell_state};

/// Builds an app over an in-memory dataset, as if the file read succeeded.
fn app_with(csv: &str) -> App {
    App::from_fetch(Config::default(), Ok(csv.to_string()))
}

fn sample_app() -> App {
    app_with(SAMPLE_QUESTIONS)
}

// ── Sample dataset to board ──────────────────────────────────────────────

#[test]
fn sample_dataset_fills_every_board_slot() {
    let outcome = parser::parse(SAMPLE_QUESTIONS, SchemaVariant::Wide);
    assert_eq!(outcome.skipped_rows, 0, "bundled rows must all parse");
    assert_eq!(outcome.replaced_rows, 0, "bundled rows must not collide");
    assert_eq!(
        outcome.categories,
        vec!["Geographie", "Musik", "Sport", "Wissenschaft"]
    );

    let session = Session::new(outcome);
    assert_eq!(session.len(), 16);
    for category in session.categories() {
        for difficulty in [100, 200, 300, 400] {
            assert_eq!(
                cell_state(&session, category, difficulty),
                CellState::Question { played: false },
                "{category}-{difficulty} slot should hold a fresh question"
            );
        }
    }
}

#[test]
fn sample_dataset_mixes_multiple_choice_and_free_form() {
    let app = sample_app();
    let choice = app.session.find_by_id("Geographie-100").unwrap();
    assert_eq!(choice.options.len(), 3);
    assert!(choice.options.contains(&choice.solution));

    let free_form = app.session.find_by_id("Geographie-200").unwrap();
    assert!(free_form.options.is_empty());
    assert_eq!(free_form.solution, "Donau");
}

// ── Question lifecycle ───────────────────────────────────────────────────

#[test]
fn open_reveal_close_marks_the_card_played() {
    let mut app = sample_app();
    assert_eq!(app.screen, AppScreen::Board);

    app.open_selected();
    assert_eq!(app.screen, AppScreen::Question);
    let open = app.current.as_ref().unwrap();
    assert_eq!(open.record.id(), "Geographie-100");
    assert!(!open.revealed);

    app.reveal_answer();
    assert!(app.current.as_ref().unwrap().revealed);

    app.close_question();
    assert_eq!(app.screen, AppScreen::Board);
    assert!(app.current.is_none());
    assert_eq!(
        cell_state(&app.session, "Geographie", 100),
        CellState::Question { played: true }
    );
    assert_eq!(app.session.played_count(), 1);
}

#[test]
fn closing_without_revealing_still_marks_played() {
    let mut app = sample_app();
    app.open_selected();
    app.close_question();
    assert!(app.session.find_by_id("Geographie-100").unwrap().played);
}

#[test]
fn a_played_card_can_be_opened_again() {
    let mut app = sample_app();
    app.open_selected();
    app.close_question();

    app.open_selected();
    assert_eq!(app.screen, AppScreen::Question);
    assert_eq!(app.current.as_ref().unwrap().record.id(), "Geographie-100");

    // A second run through the card does not double-count.
    app.close_question();
    assert_eq!(app.session.played_count(), 1);
}

#[test]
fn cursor_navigation_reaches_every_card() {
    let mut app = sample_app();
    let mut visited = Vec::new();
    for _ in 0..4 {
        for _ in 0..4 {
            app.open_selected();
            visited.push(app.current.as_ref().unwrap().record.id());
            app.close_question();
            app.cursor_down();
        }
        for _ in 0..4 {
            app.cursor_up();
        }
        app.cursor_right();
    }
    visited.sort();
    visited.dedup();
    assert_eq!(visited.len(), 16);
    assert_eq!(app.session.played_count(), 16);
}

// ── Random selection ─────────────────────────────────────────────────────

#[test]
fn random_walks_the_whole_board_then_reports_exhaustion() {
    let mut app = sample_app();
    for round in 1..=app.session.len() {
        app.open_random();
        assert_eq!(
            app.screen,
            AppScreen::Question,
            "round {round}: an unplayed question must open"
        );
        let id = app.current.as_ref().unwrap().record.id();
        assert!(
            !app.session.find_by_id(&id).unwrap().played,
            "round {round}: random picked the already-played {id}"
        );
        app.close_question();
    }
    assert_eq!(app.session.played_count(), app.session.len());

    app.open_random();
    assert_eq!(app.screen, AppScreen::Board);
    assert!(app.current.is_none());
    assert_eq!(app.status.as_deref(), Some("all questions played"));
}

// ── Countdown through the app ────────────────────────────────────────────

#[test]
fn countdown_counts_blinks_and_dies_with_the_card() {
    let mut config = Config::default();
    config.countdown_secs = 3;
    let mut app = App::from_fetch(config, Ok(SAMPLE_QUESTIONS.to_string()));

    app.open_selected();
    assert_eq!(app.timer.display(), TimerDisplay::Idle);

    let t0 = Instant::now();
    app.start_timer(t0);
    assert_eq!(app.timer.display(), TimerDisplay::Remaining(3));
    app.on_tick(t0 + Duration::from_secs(1));
    assert_eq!(app.timer.display(), TimerDisplay::Remaining(2));
    app.on_tick(t0 + Duration::from_secs(2));
    assert_eq!(app.timer.display(), TimerDisplay::Remaining(1));
    app.on_tick(t0 + Duration::from_secs(3));
    assert_eq!(app.timer.display(), TimerDisplay::Expired { on: true });
    app.on_tick(t0 + Duration::from_millis(3_400));
    assert_eq!(app.timer.display(), TimerDisplay::Expired { on: false });

    // Closing the card silences the alert; the next card starts from idle.
    app.close_question();
    assert_eq!(app.timer.display(), TimerDisplay::Idle);
    app.open_random();
    assert_eq!(app.timer.display(), TimerDisplay::Idle);
    app.start_timer(t0 + Duration::from_secs(10));
    assert_eq!(app.timer.display(), TimerDisplay::Remaining(3));
}

// ── Loading from disk ────────────────────────────────────────────────────

#[test]
fn reads_a_questions_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runde1.csv");
    fs::write(
        &path,
        "Kategorie;Schwierigkeit;Frage;Antwortmöglichkeiten;Lösung\n\
         Geo;100;Hauptstadt von Frankreich?;Paris;Lyon;Paris\n\
         Musik;100;Komponist der Zauberflöte?;;Mozart\n",
    )
    .unwrap();

    let mut config = Config::default();
    config.questions_file = path.to_str().unwrap().to_string();
    let app = App::new(config);

    assert!(app.load_error.is_none());
    assert_eq!(app.session.len(), 2);
    assert_eq!(app.session.categories(), vec!["Geo", "Musik"]);
    assert_eq!(
        app.session.find("Geo", 100).unwrap().options,
        vec!["Paris", "Lyon"]
    );
}

#[test]
fn missing_file_yields_an_inert_board_naming_the_resource() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nicht-da.csv");
    let fetched = loader::fetch_text(path.to_str().unwrap());
    assert!(fetched.is_err());

    let mut app = App::from_fetch(Config::default(), fetched);
    assert!(app.session.is_empty());
    assert!(app.load_error.as_ref().unwrap().contains("nicht-da.csv"));

    // The board stays up and every control is a safe no-op.
    app.open_selected();
    assert!(app.current.is_none());
    app.close_question();
    assert_eq!(app.screen, AppScreen::Board);
}

#[test]
fn header_only_file_is_an_empty_board_not_an_error() {
    let app = app_with("Kategorie;Schwierigkeit;Frage;Lösung\n");
    assert!(app.load_error.is_none());
    assert!(app.session.is_empty());
}

// ── Schema and diagnostics wiring ────────────────────────────────────────

#[test]
fn fixed_schema_config_drives_the_parse() {
    let mut config = Config::default();
    config.schema = SchemaVariant::Fixed;
    let csv = "Kategorie;Schwierigkeit;Frage;Lösung;Antwortmöglichkeiten\n\
               Geo;100;Hauptstadt von Italien?;Rom;Rom|Mailand|Turin\n";
    let app = App::from_fetch(config, Ok(csv.to_string()));

    let record = app.session.find("Geo", 100).unwrap();
    assert_eq!(record.solution, "Rom");
    assert_eq!(record.options, vec!["Rom", "Mailand", "Turin"]);
}

#[test]
fn parse_diagnostics_reach_the_status_line() {
    let csv = "Kategorie;Schwierigkeit;Frage;Lösung\n\
               Geo;100;Erste Fassung?;Alt\n\
               Kaputt;200\n\
               Geo;100;Zweite Fassung?;Neu\n";
    let app = app_with(csv);
    assert_eq!(
        app.status.as_deref(),
        Some("skipped 1 malformed row(s), 1 duplicate row(s) replaced by later ones")
    );
    assert_eq!(app.session.find("Geo", 100).unwrap().prompt, "Zweite Fassung?");
}
