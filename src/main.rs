//! Terminal front end for the Knight's Tour puzzle.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use knights_tour::core::BoardSize;
use knights_tour::prefs::{JsonFileStore, MemoryStore, PreferenceStore, Preferences, VisitedStyle};
use knights_tour::session::{Reply, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Visit every square of the board exactly once with a knight")]
struct Cli {
    /// Board size N for an NxN board (overrides the saved preference)
    #[arg(long, short)]
    size: Option<BoardSize>,

    /// How visited squares are drawn: icon or number (overrides the saved preference)
    #[arg(long)]
    style: Option<VisitedStyle>,

    /// Preference file; without it preferences last only for this session
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Draw the knight as `N` instead of the Unicode glyph
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let store: Box<dyn PreferenceStore> = match &cli.prefs {
        Some(path) => Box::new(JsonFileStore::open(path)),
        None => Box::new(MemoryStore::new()),
    };

    let mut prefs = Preferences::load(&*store);
    if let Some(size) = cli.size {
        prefs = prefs.with_board_size(size);
    }
    if let Some(style) = cli.style {
        prefs = prefs.with_visited_style(style);
    }

    let mut session = Session::with_preferences(prefs, store).ascii(cli.ascii);
    log::info!("starting tour on {} board", prefs.board_size);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", session.screen())?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        match session.handle_line(&line) {
            Reply::Continue(text) => {
                write!(stdout, "{text}")?;
                stdout.flush()?;
            }
            Reply::Quit => break,
        }
    }

    Ok(())
}
