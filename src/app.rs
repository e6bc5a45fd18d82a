use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::dataset::loader::{self, LoadError};
use crate::dataset::parser::{self, ParseOutcome};
use crate::dataset::record::QuestionRecord;
use crate::session::Session;
use crate::timer::QuestionTimer;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Board,
    Question,
}

/// The question currently shown in the card overlay. Holds a snapshot of the
/// record; the session copy is only touched again when the card closes.
pub struct OpenQuestion {
    pub record: QuestionRecord,
    pub revealed: bool,
}

pub struct App {
    pub screen: AppScreen,
    pub session: Session,
    pub current: Option<OpenQuestion>,
    pub timer: QuestionTimer,
    /// Board cursor: (column, row) into categories × difficulty ladder.
    pub cursor: (usize, usize),
    pub theme: &'static Theme,
    pub config: Config,
    /// Why the dataset could not be loaded; shown in place of the board.
    pub load_error: Option<String>,
    /// One-line status shown under the board (parse diagnostics, notices).
    pub status: Option<String>,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config) -> Self {
        let fetched = loader::fetch_text(&config.questions_file);
        Self::from_fetch(config, fetched)
    }

    /// Builds the app from an already-fetched dataset. A load failure leaves
    /// an empty, inert board with a visible notice instead of crashing.
    pub fn from_fetch(config: Config, fetched: Result<String, LoadError>) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let (session, load_error, status) = match fetched {
            Ok(text) => {
                let outcome = parser::parse(&text, config.schema);
                let status = parse_status(&outcome);
                (Session::new(outcome), None, status)
            }
            Err(err) => (Session::empty(), Some(err.to_string()), None),
        };

        let timer = QuestionTimer::new(config.countdown_secs);

        Self {
            screen: AppScreen::Board,
            session,
            current: None,
            timer,
            cursor: (0, 0),
            theme,
            config,
            load_error,
            status,
            should_quit: false,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Opens the question under the board cursor, if that slot has one.
    pub fn open_selected(&mut self) {
        let (col, row) = self.cursor;
        let Some(category) = self.session.categories().get(col) else {
            return;
        };
        let Some(&difficulty) = self.config.difficulty_ladder.get(row) else {
            return;
        };
        if let Some(record) = self.session.find(category, difficulty) {
            let record = record.clone();
            self.open_question(record);
        }
    }

    /// Opens a uniformly random unplayed question. With nothing left to play
    /// the board stays up and a notice appears instead.
    pub fn open_random(&mut self) {
        let unplayed = self.session.unplayed();
        if unplayed.is_empty() {
            self.status = Some("all questions played".to_string());
            return;
        }
        let record = unplayed[self.rng.gen_range(0..unplayed.len())].clone();
        self.open_question(record);
    }

    /// Opening while another question is shown simply replaces it.
    pub fn open_question(&mut self, record: QuestionRecord) {
        self.current = Some(OpenQuestion {
            record,
            revealed: false,
        });
        self.timer.reset();
        self.screen = AppScreen::Question;
    }

    /// Terminal within one open question: revealing twice changes nothing.
    pub fn reveal_answer(&mut self) {
        if let Some(ref mut open) = self.current {
            open.revealed = true;
        }
    }

    /// Marks the open question played and returns to the board. Safe no-op
    /// when no question is open.
    pub fn close_question(&mut self) {
        if let Some(open) = self.current.take() {
            self.session.mark_played(&open.record.id());
        }
        self.timer.reset();
        self.screen = AppScreen::Board;
    }

    pub fn start_timer(&mut self, now: Instant) {
        self.timer.start(now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.timer.on_tick(now);
    }

    pub fn cursor_left(&mut self) {
        if self.cursor.0 > 0 {
            self.cursor.0 -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        let columns = self.session.categories().len();
        if columns > 0 && self.cursor.0 + 1 < columns {
            self.cursor.0 += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor.1 > 0 {
            self.cursor.1 -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        let rows = self.config.difficulty_ladder.len();
        if rows > 0 && self.cursor.1 + 1 < rows {
            self.cursor.1 += 1;
        }
    }
}

fn parse_status(outcome: &ParseOutcome) -> Option<String> {
    let mut parts = Vec::new();
    if outcome.skipped_rows > 0 {
        parts.push(format!("skipped {} malformed row(s)", outcome.skipped_rows));
    }
    if outcome.replaced_rows > 0 {
        parts.push(format!(
            "{} duplicate row(s) replaced by later ones",
            outcome.replaced_rows
        ));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
