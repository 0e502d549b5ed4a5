mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::{Duration, Instant},
};
use tracing::{debug, info};
use wordrush::{
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner, SessionTimer},
    word_generator::{WordGenConfig, WordGenerator},
    SessionConfig, SessionEngine, SetupError,
};

const TICK_RATE_MS: u64 = 100;

/// timed typing test for the terminal
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    version,
    about,
    long_about = "A timed typing test: type the words, press space after each one, and get your wpm and accuracy when the clock runs out."
)]
pub struct Cli {
    /// number of seconds to run test
    #[clap(short = 's', long = "seconds")]
    number_of_secs: Option<u64>,

    /// number of words to draw (capped at the size of the word set)
    #[clap(short = 'w', long = "words")]
    number_of_words: Option<usize>,

    /// word set to pull words from
    #[clap(short = 'l', long = "language", value_enum)]
    supported_language: Option<SupportedLanguage>,

    /// seed for a reproducible word order
    #[clap(long)]
    seed: Option<u64>,

    /// remember these settings as the new defaults
    #[clap(long)]
    save: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SupportedLanguage {
    English,
    EnglishLong,
}

impl Cli {
    /// CLI flags win over the stored config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(secs) = self.number_of_secs {
            config.duration_secs = secs;
        }
        if let Some(words) = self.number_of_words {
            config.number_of_words = words;
        }
        if let Some(language) = self.supported_language {
            config.word_set = language.to_string();
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Typing,
    Results,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq)]
enum Control {
    Continue,
    Restart,
    New,
    Quit,
}

pub struct App {
    pub session: SessionEngine,
    pub timer: SessionTimer,
    pub state: AppState,
    generator: WordGenerator,
    session_config: SessionConfig,
}

impl App {
    pub fn new(config: &Config, seed: Option<u64>) -> Result<Self, SetupError> {
        let mut generator = WordGenerator::new(WordGenConfig {
            word_set: config.word_set.clone(),
            seed,
        });
        let session_config = config.session_config();
        let session = generator.new_session(session_config)?;

        Ok(Self {
            session,
            timer: SessionTimer::every_second(),
            state: AppState::Typing,
            generator,
            session_config,
        })
    }

    /// Throws away the current session. The old timer is cancelled before anything else.
    pub fn reset(&mut self, same_words: bool) -> Result<(), SetupError> {
        self.timer.cancel();

        self.session = if same_words {
            let words: Vec<String> = self
                .session
                .words()
                .iter()
                .map(|w| w.text().to_string())
                .collect();
            SessionEngine::new(&words, *self.session.config())?
        } else {
            self.generator.new_session(self.session_config)?
        };
        self.state = AppState::Typing;
        info!(same_words, "session reset");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Left => return Control::Restart,
            KeyCode::Right => return Control::New,
            _ => {}
        }

        match self.state {
            AppState::Typing => {
                self.on_typing_key(key.code, now);
                Control::Continue
            }
            AppState::Results => match key.code {
                KeyCode::Char('r') => Control::Restart,
                KeyCode::Char('n') => Control::New,
                _ => Control::Continue,
            },
        }
    }

    fn on_typing_key(&mut self, code: KeyCode, now: Instant) {
        // a key that lands after the deadline must not reach the session
        self.on_tick(now);
        if self.state == AppState::Results {
            debug!(?code, "key after time expired ignored");
            return;
        }

        if self.session.is_idle() && matches!(code, KeyCode::Char(_)) {
            if let Err(e) = self.session.start() {
                debug!(error = %e, "start ignored");
                return;
            }
            self.timer.start(now);
        }

        let outcome = match code {
            KeyCode::Char(' ') => match self.session.submit_word() {
                Ok(advance) if advance.game_over => {
                    self.finish_session();
                    Ok(())
                }
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            },
            KeyCode::Char(c) => self.session.type_char(c),
            KeyCode::Backspace => self.session.backspace(),
            _ => Ok(()),
        };

        if let Err(e) = outcome {
            debug!(error = %e, "key ignored");
        }
    }

    fn on_tick(&mut self, now: Instant) {
        for _ in 0..self.timer.poll(now) {
            match self.session.tick() {
                Ok(tick) if tick.finished => {
                    self.finish_session();
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    debug!(error = %e, "tick ignored");
                    break;
                }
            }
        }
    }

    fn finish_session(&mut self) {
        self.timer.cancel();
        self.state = AppState::Results;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init_tracing();

    // Build the first session before touching the terminal so setup errors print normally
    let mut app = prepare_app(&cli, &FileConfigStore::new())?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Merges the CLI over the stored config and builds the app. Settings are only saved
/// once they have produced a valid session.
fn prepare_app(cli: &Cli, store: &FileConfigStore) -> Result<App, Box<dyn Error>> {
    let config = cli.apply(store.load());
    let app = App::new(&config, cli.seed)?;

    if cli.save {
        store.save(&config)?;
        info!(path = %store.path().display(), "settings saved");
    }
    Ok(app)
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| ui(app, f))?;

        let wait = app
            .timer
            .until_next(Instant::now())
            .unwrap_or(Duration::from_millis(TICK_RATE_MS));

        match runner.step_within(wait) {
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize => {}
            AppEvent::Key(key) => match app.handle_key(key, Instant::now()) {
                Control::Continue => {}
                Control::Restart => app.reset(true)?,
                Control::New => app.reset(false)?,
                Control::Quit => break,
            },
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
