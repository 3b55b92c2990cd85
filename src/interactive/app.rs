//! TUI application state and logic

use crate::game::{Clock, GameEngine, GameEvent, InputEvent};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before advancing the clock again
const TICK_RATE: Duration = Duration::from_millis(100);

/// Messages kept in the side panel
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub messages: Vec<Message>,
    pub invalid_word: bool,
    pub clock: Clock,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            messages: vec![Message {
                text: "Type a word and press Enter. Beat the clock!".to_string(),
                style: MessageStyle::Info,
            }],
            invalid_word: false,
            clock: Clock::default(),
            should_quit: false,
        }
    }

    /// Start the first round
    pub fn start(&mut self) {
        self.engine.new_game();
        self.absorb_events();
    }

    /// Advance the round clock, then fold the resulting events into the view
    pub fn update(&mut self, elapsed: Duration) {
        self.engine.tick(elapsed.as_secs_f64());
        self.absorb_events();
    }

    /// Translate a key press into engine input
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.engine.handle(InputEvent::NewGame),
            KeyCode::Char('r') if ctrl => self.engine.handle(InputEvent::Restart),
            KeyCode::Char(c) if self.engine.phase().is_over() => match c.to_ascii_lowercase() {
                'n' => self.engine.handle(InputEvent::NewGame),
                'r' => self.engine.handle(InputEvent::Restart),
                'q' => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => self.engine.handle(InputEvent::Letter(c)),
            KeyCode::Backspace => self.engine.handle(InputEvent::Backspace),
            KeyCode::Enter => self.engine.handle(InputEvent::Submit),
            _ => {}
        }
        self.absorb_events();
    }

    fn absorb_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                GameEvent::InvalidWordShown(shown) => {
                    self.invalid_word = shown;
                    if shown {
                        let text = if self.engine.initial_guess_submitted() {
                            format!(
                                "Not in word list! -{}s",
                                self.engine.config().invalid_penalty_seconds
                            )
                        } else {
                            "Not in word list!".to_string()
                        };
                        self.add_message(&text, MessageStyle::Error);
                    }
                }
                GameEvent::GuessScored { word, .. } => {
                    log::debug!("tui saw scored guess {word}");
                }
                GameEvent::GameWon => {
                    let guesses = self.engine.history().len();
                    self.add_message(
                        &format!("🎉 Solved in {guesses} guess(es)! 'n' new word, 'r' same word"),
                        MessageStyle::Success,
                    );
                }
                GameEvent::GameLost => {
                    let text = format!(
                        "⌛ Time's up! The word was {}. 'n' new word, 'r' try again",
                        self.engine.target().to_uppercase()
                    );
                    self.add_message(&text, MessageStyle::Error);
                }
                GameEvent::TimerDisplay(clock) => self.clock = clock,
                GameEvent::RoundReset => {
                    self.invalid_word = false;
                    self.add_message("New round started", MessageStyle::Info);
                }
                GameEvent::SlotChanged { .. } => {}
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("tui stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Clock first, then any input for this frame
        let now = Instant::now();
        app.update(now.duration_since(last_tick));
        last_tick = now;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
