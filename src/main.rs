mod app;
mod config;
mod dataset;
mod event;
mod session;
mod timer;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use app::{App, AppScreen};
use config::Config;
use dataset::loader;
use dataset::parser::SchemaVariant;
use event::{AppEvent, EventHandler};
use ui::components::board_grid::BoardGrid;
use ui::components::question_card::QuestionCard;

#[derive(Parser)]
#[command(name = "tafel", version, about = "Jeopardy-style quiz board for the terminal")]
struct Cli {
    #[arg(short, long, help = "Questions file: a path or an http(s) URL")]
    file: Option<String>,

    #[arg(short, long, help = "Questions file schema (wide, fixed)")]
    schema: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Countdown length in seconds")]
    countdown: Option<u32>,

    #[arg(long, help = "Play the bundled sample questions")]
    sample: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(file) = cli.file {
        config.questions_file = file;
    }
    if let Some(ref name) = cli.schema {
        match SchemaVariant::from_name(name) {
            Some(schema) => config.schema = schema,
            None => anyhow::bail!("unknown schema {name:?}, expected wide or fixed"),
        }
    }
    if let Some(theme) = cli.theme {
        if ui::theme::Theme::load(&theme).is_none() {
            anyhow::bail!(
                "unknown theme {theme:?}, bundled themes: {}",
                ui::theme::Theme::available_themes().join(", ")
            );
        }
        config.theme = theme;
    }
    if let Some(countdown) = cli.countdown {
        config.countdown_secs = countdown;
    }
    config.validate();

    let mut app = if cli.sample {
        App::from_fetch(config, Ok(loader::SAMPLE_QUESTIONS.to_string()))
    } else {
        App::new(config)
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Board => handle_board_key(app, key),
        AppScreen::Question => handle_question_key(app, key),
    }
}

fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_right(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('r') => app.open_random(),
        _ => {}
    }
}

fn handle_question_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_question(),
        KeyCode::Char('a') | KeyCode::Char(' ') => app.reveal_answer(),
        KeyCode::Char('t') => app.start_timer(Instant::now()),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    render_board(frame, app);

    // The question card sits above the board, which stays visible around it.
    if app.screen == AppScreen::Question {
        render_question(frame, app);
    }
}

fn render_board(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header_info = format!(
        " {} | {}/{} played",
        app.config.questions_file,
        app.session.played_count(),
        app.session.len(),
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " tafel ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            &*header_info,
            Style::default()
                .fg(colors.text_dim())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    if let Some(ref message) = app.load_error {
        let notice = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(colors.error()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "check the path, or run with --sample for the bundled questions",
                Style::default().fg(colors.text_dim()),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(notice, layout[1]);
    } else if app.session.is_empty() {
        let notice = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "the questions file has no playable rows",
                Style::default().fg(colors.text_dim()),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(notice, layout[1]);
    } else {
        let grid = BoardGrid::new(
            &app.session,
            &app.config.difficulty_ladder,
            app.cursor,
            app.theme,
        );
        frame.render_widget(grid, layout[1]);
    }

    if let Some(ref status) = app.status {
        let status_line = Paragraph::new(Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors.warning()),
        )));
        frame.render_widget(status_line, layout[2]);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " [arrows] Move  [Enter] Open  [r] Random  [q] Quit ",
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout[3]);
}

fn render_question(frame: &mut ratatui::Frame, app: &App) {
    if let Some(ref open) = app.current {
        let area = ui::layout::centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);
        let card = QuestionCard::new(
            &open.record,
            open.revealed,
            app.timer.display(),
            app.config.countdown_secs,
            app.theme,
        );
        frame.render_widget(card, area);
    }
}
