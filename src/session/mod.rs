//! Interactive session: engine, preferences and renderer behind a
//! line-oriented command interface.
//!
//! The session is the presentation layer. It re-renders after every command
//! and owns everything the engine deliberately does not: persisted
//! preferences, the display style and user-facing messages.

pub mod command;

pub use command::{Command, HELP};

use log::{info, warn};

use crate::core::{BoardSize, TourEngine, TourError, TourStatus};
use crate::prefs::{PreferenceStore, Preferences, VisitedStyle};
use crate::render::TextRenderer;

/// Notice shown when a square is not a legal destination.
pub const INVALID_MOVE_NOTICE: &str = "Invalid move.";

/// What the front end should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands.
    Continue(String),
    /// End the session.
    Quit,
}

/// One interactive tour session.
pub struct Session {
    engine: TourEngine,
    prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    renderer: TextRenderer,
}

impl Session {
    /// Create a session from stored preferences.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let prefs = Preferences::load(&*store);
        Self::with_preferences(prefs, store)
    }

    /// Create a session with explicit preferences.
    ///
    /// The preferences are written to the store so that overrides given on
    /// the command line stick.
    pub fn with_preferences(prefs: Preferences, mut store: Box<dyn PreferenceStore>) -> Self {
        if let Err(e) = prefs.save(&mut *store) {
            warn!("could not save preferences: {e}");
        }
        Self {
            engine: TourEngine::new(prefs.board_size),
            prefs,
            store,
            renderer: TextRenderer::new(prefs.visited_style),
        }
    }

    /// Use ASCII glyphs instead of the Unicode knight.
    #[must_use]
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.renderer = self.renderer.ascii(ascii);
        self
    }

    #[must_use]
    pub fn engine(&self) -> &TourEngine {
        &self.engine
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    /// Board and status line as currently displayed.
    #[must_use]
    pub fn screen(&self) -> String {
        self.renderer.render(&self.engine)
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => Reply::Continue(format!("{e}\n")),
        }
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Reply {
        let notice = match command {
            Command::Play(square) => match self.engine.play(square) {
                Ok(TourStatus::Won) => {
                    info!("tour complete on {} board", self.engine.size());
                    None
                }
                Ok(_) => None,
                Err(TourError::InvalidMove { .. } | TourError::AlreadyPlaced { .. }) => {
                    Some(INVALID_MOVE_NOTICE.to_string())
                }
                Err(e) => Some(e.to_string()),
            },
            Command::Undo => {
                self.engine.undo();
                None
            }
            Command::Reset => {
                self.engine.reset(None);
                None
            }
            Command::New(size) => {
                self.start_new(size);
                None
            }
            Command::Style(style) => {
                self.set_style(style);
                None
            }
            Command::Show => None,
            Command::Help => return Reply::Continue(HELP.to_string()),
            Command::Quit => return Reply::Quit,
        };

        let mut out = String::new();
        if let Some(notice) = notice {
            out.push_str(&notice);
            out.push('\n');
        }
        out.push_str(&self.screen());
        if let Some(overlay) = self.overlay() {
            out.push_str(&overlay);
        }
        Reply::Continue(out)
    }

    /// End-of-tour banner, if the tour is won or stuck.
    #[must_use]
    pub fn overlay(&self) -> Option<String> {
        let (title, body) = self.engine.report().overlay()?;
        Some(format!("\n== {title} ==\n{body}\n"))
    }

    /// Start a new tour, persisting the board size.
    fn start_new(&mut self, size: Option<BoardSize>) {
        if let Some(size) = size {
            self.prefs.board_size = size;
        }
        if let Err(e) = self.prefs.save_board_size(&mut *self.store) {
            warn!("could not save board size: {e}");
        }
        self.engine.reset(Some(self.prefs.board_size));
    }

    fn set_style(&mut self, style: VisitedStyle) {
        self.prefs.visited_style = style;
        self.renderer.set_style(style);
        if let Err(e) = self.prefs.save_visited_style(&mut *self.store) {
            warn!("could not save visited style: {e}");
        }
    }
}
