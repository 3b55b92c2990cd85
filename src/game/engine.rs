//! Board state machine
//!
//! The engine owns both guess rows, the input cursor, the target word and the
//! round timer. A round moves through two phases:
//!
//! - Opening guess: typed into the initial row. An invalid word is rejected
//!   without penalty. A valid one is scored, restarts the clock and unlocks
//!   the guessing row.
//! - Subsequent guesses: typed into the guessing row, which is scored and then
//!   cleared for the next attempt. An invalid word costs time.
//!
//! A fully correct row wins. The timer reaching zero loses. Either way the
//! round is over and all input is ignored until a new game or restart.

use super::events::{GameEvent, InputEvent, ScoredGuess};
use super::timer::{Clock, CountdownTimer, TimerStatus};
use super::GameConfig;
use crate::core::{GuessRow, RowId, Verdict, WORD_LENGTH, score};
use crate::wordlists::WordBank;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::Cell;
use std::rc::Rc;

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round has been started yet
    Idle,
    AwaitingInitialInput,
    AwaitingSubsequentInput,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Results across rounds played in this session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
}

impl Statistics {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
}

/// Timed two-row guessing game
pub struct GameEngine {
    bank: WordBank,
    config: GameConfig,
    timer: CountdownTimer,
    expired: Rc<Cell<bool>>,
    rng: StdRng,
    rows: [GuessRow; 2],
    target: String,
    cursor: usize,
    initial_guess_submitted: bool,
    game_over: bool,
    outcome: Option<Outcome>,
    invalid_shown: bool,
    shown_clock: Option<Clock>,
    history: Vec<ScoredGuess>,
    stats: Statistics,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create an engine around a word bank and a timer
    ///
    /// The engine registers itself as the timer's expiry listener, replacing
    /// any callback set before. No round is running until [`Self::new_game`].
    #[must_use]
    pub fn new(bank: WordBank, mut timer: CountdownTimer, config: GameConfig) -> Self {
        let expired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&expired);
        timer.set_on_expire(move || flag.set(true));

        Self {
            bank,
            config,
            timer,
            expired,
            rng: StdRng::from_os_rng(),
            rows: [GuessRow::new(), GuessRow::new()],
            target: String::new(),
            cursor: 0,
            initial_guess_submitted: false,
            game_over: true,
            outcome: None,
            invalid_shown: false,
            shown_clock: None,
            history: Vec::new(),
            stats: Statistics::default(),
            events: Vec::new(),
        }
    }

    /// Create an engine with a timer sized from `config`
    ///
    /// # Examples
    /// ```
    /// use wordle_blitz::game::{GameConfig, GameEngine, Phase};
    /// use wordle_blitz::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_text("crane\nslate", "crane").unwrap();
    /// let mut engine = GameEngine::with_config(bank, GameConfig::default());
    /// engine.new_game();
    /// assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
    /// assert_eq!(engine.target(), "crane");
    /// ```
    #[must_use]
    pub fn with_config(bank: WordBank, config: GameConfig) -> Self {
        Self::new(bank, CountdownTimer::new(config.round_seconds), config)
    }

    /// Replace the random source used to draw targets
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Start a round on a freshly drawn target
    pub fn new_game(&mut self) {
        self.target = self.bank.pick_target(&mut self.rng);
        log::info!("new game started");
        log::debug!("target drawn: {}", self.target);
        self.reset_round();
    }

    /// Start the round over on the same target
    ///
    /// Before any round has been played this behaves like [`Self::new_game`].
    pub fn restart_game(&mut self) {
        if self.target.is_empty() {
            self.new_game();
            return;
        }
        log::info!("round restarted on the same target");
        self.reset_round();
    }

    fn reset_round(&mut self) {
        for row in RowId::ALL {
            self.clear_row(row);
        }
        self.cursor = 0;
        self.initial_guess_submitted = false;
        self.game_over = false;
        self.outcome = None;
        self.history.clear();

        self.invalid_shown = false;
        self.events.push(GameEvent::InvalidWordShown(false));
        self.events.push(GameEvent::RoundReset);

        self.expired.set(false);
        self.timer.restart();
        self.show_clock(true);
    }

    /// Dispatch a decoded input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Letter(letter) => self.on_letter_input(letter),
            InputEvent::Backspace => self.on_backspace(),
            InputEvent::Submit => self.on_submit(),
            InputEvent::NewGame => self.new_game(),
            InputEvent::Restart => self.restart_game(),
        }
    }

    /// Type a letter into the next free slot of the active row
    ///
    /// Ignored once the round is over, when the row is full, or for anything
    /// other than an ASCII letter.
    pub fn on_letter_input(&mut self, letter: char) {
        if self.game_over || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.cursor >= WORD_LENGTH {
            return;
        }

        let row = self.active_row_id();
        let letter = letter.to_ascii_lowercase();
        self.write_slot(row, self.cursor, Some(letter), Verdict::Occupied);
        self.cursor += 1;
    }

    /// Remove the most recently typed letter of the active row
    pub fn on_backspace(&mut self) {
        if self.game_over || self.cursor == 0 {
            return;
        }

        self.cursor -= 1;
        let row = self.active_row_id();
        self.write_slot(row, self.cursor, None, Verdict::Empty);
        self.show_invalid(false);
    }

    /// Submit the active row once every slot is filled
    pub fn on_submit(&mut self) {
        if self.game_over || self.cursor < WORD_LENGTH {
            return;
        }

        if self.initial_guess_submitted {
            self.submit_subsequent_guess();
        } else {
            self.submit_initial_guess();
        }
    }

    fn submit_initial_guess(&mut self) {
        let word = self.rows[RowId::Initial.index()].current_word();
        if !self.bank.is_valid(&word) {
            log::debug!("opening guess {word:?} rejected");
            self.show_invalid(true);
            return;
        }

        self.show_invalid(false);
        self.score_row(RowId::Initial, word);
        self.initial_guess_submitted = true;
        self.timer.restart();
        self.show_clock(true);
        self.cursor = 0;
        self.clear_row(RowId::Guessing);

        if self.rows[RowId::Initial.index()].is_fully_correct() {
            self.win();
        }
    }

    fn submit_subsequent_guess(&mut self) {
        let word = self.rows[RowId::Guessing.index()].current_word();
        if !self.bank.is_valid(&word) {
            log::debug!(
                "guess {word:?} rejected, {}s penalty",
                self.config.invalid_penalty_seconds
            );
            self.show_invalid(true);
            let status = self.timer.deduct(self.config.invalid_penalty_seconds);
            self.show_clock(true);
            self.resolve_expiry(status);
            return;
        }

        self.show_invalid(false);
        self.score_row(RowId::Guessing, word);

        if self.rows[RowId::Guessing.index()].is_fully_correct() {
            self.win();
        } else {
            self.cursor = 0;
            self.clear_row(RowId::Guessing);
        }
    }

    fn score_row(&mut self, row: RowId, word: String) {
        let verdicts = score(&word, &self.target);
        for (index, &verdict) in verdicts.iter().enumerate() {
            let letter = self.rows[row.index()].slot(index).letter;
            self.write_slot(row, index, letter, verdict);
        }

        let verdicts = self.rows[row.index()].verdicts();
        log::debug!("{row} row scored {word:?}: {verdicts:?}");
        self.events.push(GameEvent::GuessScored {
            row,
            word: word.clone(),
            verdicts,
        });
        self.history.push(ScoredGuess { word, verdicts });
    }

    fn win(&mut self) {
        self.timer.stop();
        self.game_over = true;
        self.outcome = Some(Outcome::Won);
        self.stats.played += 1;
        self.stats.won += 1;
        log::info!("round won in {} guess(es)", self.history.len());
        self.events.push(GameEvent::GameWon);
    }

    /// End the round because the clock ran out
    ///
    /// Safe to call repeatedly; only the first call on a live round has any
    /// effect.
    pub fn on_time_expired(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.outcome = Some(Outcome::Lost);
        self.stats.played += 1;
        self.stats.lost += 1;
        log::info!("round lost on time");
        self.show_invalid(false);
        self.events.push(GameEvent::GameLost);
    }

    /// Advance the round clock by `delta_seconds`
    ///
    /// Expiry is resolved before this returns, so input handled afterwards
    /// already sees the round as over.
    pub fn tick(&mut self, delta_seconds: f64) {
        let status = self.timer.tick(delta_seconds);
        self.show_clock(false);
        self.resolve_expiry(status);
    }

    fn resolve_expiry(&mut self, status: TimerStatus) {
        if self.expired.replace(false) {
            debug_assert_eq!(status, TimerStatus::Expired);
            self.on_time_expired();
        }
    }

    fn show_invalid(&mut self, shown: bool) {
        if self.invalid_shown != shown {
            self.invalid_shown = shown;
            self.events.push(GameEvent::InvalidWordShown(shown));
        }
    }

    fn show_clock(&mut self, force: bool) {
        let clock = self.timer.clock();
        if force || self.shown_clock != Some(clock) {
            self.shown_clock = Some(clock);
            self.events.push(GameEvent::TimerDisplay(clock));
        }
    }

    fn write_slot(&mut self, row: RowId, index: usize, letter: Option<char>, verdict: Verdict) {
        let slots = &mut self.rows[row.index()];
        slots.set_letter(index, letter);
        slots.set_verdict(index, verdict);
        self.events.push(GameEvent::SlotChanged {
            row,
            index,
            letter,
            verdict,
        });
    }

    fn clear_row(&mut self, row: RowId) {
        self.rows[row.index()].clear();
        for index in 0..WORD_LENGTH {
            self.events.push(GameEvent::SlotChanged {
                row,
                index,
                letter: None,
                verdict: Verdict::Empty,
            });
        }
    }

    /// Take every event queued since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.outcome, self.target.is_empty()) {
            (Some(Outcome::Won), _) => Phase::Won,
            (Some(Outcome::Lost), _) => Phase::Lost,
            (None, true) => Phase::Idle,
            (None, false) if self.initial_guess_submitted => Phase::AwaitingSubsequentInput,
            (None, false) => Phase::AwaitingInitialInput,
        }
    }

    /// Row that letters currently go into
    #[must_use]
    pub const fn active_row_id(&self) -> RowId {
        if self.initial_guess_submitted {
            RowId::Guessing
        } else {
            RowId::Initial
        }
    }

    #[must_use]
    pub fn row(&self, row: RowId) -> &GuessRow {
        &self.rows[row.index()]
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub const fn is_invalid_word_shown(&self) -> bool {
        self.invalid_shown
    }

    #[inline]
    #[must_use]
    pub const fn initial_guess_submitted(&self) -> bool {
        self.initial_guess_submitted
    }

    /// Current target word; empty before the first round
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> f64 {
        self.timer.remaining()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.timer.clock()
    }

    #[must_use]
    pub const fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "crane\ncrate\ntrace\nslate\nstare\nirate\nreact\ncater\ncaret";

    fn engine() -> GameEngine {
        let bank = WordBank::from_text(VALID, "crane").unwrap();
        let mut engine = GameEngine::with_config(bank, GameConfig::default())
            .with_rng(StdRng::seed_from_u64(1));
        engine.new_game();
        engine.drain_events();
        engine
    }

    fn type_word(engine: &mut GameEngine, word: &str) {
        for c in word.chars() {
            engine.on_letter_input(c);
        }
    }

    fn guess(engine: &mut GameEngine, word: &str) {
        type_word(engine, word);
        engine.on_submit();
    }

    #[test]
    fn engine_is_idle_until_first_game() {
        let bank = WordBank::from_text(VALID, "crane").unwrap();
        let mut engine = GameEngine::with_config(bank, GameConfig::default());
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.is_game_over());

        engine.on_letter_input('c');
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn new_game_resets_state() {
        let engine = engine();
        assert_eq!(engine.target(), "crane");
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
        assert!(!engine.is_game_over());
        assert!(engine.timer().is_running());
        assert!((engine.remaining_seconds() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn letters_fill_active_row() {
        let mut engine = engine();
        type_word(&mut engine, "Sla");
        assert_eq!(engine.cursor(), 3);

        let row = engine.row(RowId::Initial);
        assert_eq!(row.slot(0).letter, Some('s'));
        assert_eq!(row.slot(1).letter, Some('l'));
        assert_eq!(row.slot(2).verdict, Verdict::Occupied);
        assert_eq!(row.slot(3).verdict, Verdict::Empty);
    }

    #[test]
    fn letter_on_full_row_is_noop() {
        let mut engine = engine();
        type_word(&mut engine, "slate");
        engine.on_letter_input('x');
        assert_eq!(engine.cursor(), WORD_LENGTH);
        assert_eq!(engine.row(RowId::Initial).current_word(), "slate");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut engine = engine();
        engine.on_letter_input('3');
        engine.on_letter_input(' ');
        engine.on_letter_input('é');
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut engine = engine();
        type_word(&mut engine, "sl");
        engine.on_backspace();
        assert_eq!(engine.cursor(), 1);
        let slot = engine.row(RowId::Initial).slot(1);
        assert_eq!(slot.letter, None);
        assert_eq!(slot.verdict, Verdict::Empty);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut engine = engine();
        engine.on_backspace();
        assert_eq!(engine.cursor(), 0);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn submit_requires_full_row() {
        let mut engine = engine();
        type_word(&mut engine, "slat");
        engine.on_submit();
        assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
        assert_eq!(engine.cursor(), 4);
    }

    #[test]
    fn invalid_opening_guess_is_free() {
        let mut engine = engine();
        engine.tick(5.0);
        guess(&mut engine, "zzzzz");

        assert!(engine.is_invalid_word_shown());
        assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
        assert_eq!(engine.cursor(), WORD_LENGTH);
        assert_eq!(engine.row(RowId::Initial).current_word(), "zzzzz");
        assert!((engine.remaining_seconds() - 175.0).abs() < 1e-9);
    }

    #[test]
    fn valid_opening_guess_scores_and_advances() {
        let mut engine = engine();
        engine.tick(30.0);
        guess(&mut engine, "crate");

        assert_eq!(engine.phase(), Phase::AwaitingSubsequentInput);
        assert_eq!(engine.active_row_id(), RowId::Guessing);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(
            engine.row(RowId::Initial).verdicts(),
            [
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Incorrect,
                Verdict::WrongSpot
            ]
        );
        // Clock starts over for the guessing phase
        assert!((engine.remaining_seconds() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_subsequent_guess_costs_ten_seconds() {
        let mut engine = engine();
        guess(&mut engine, "slate");
        guess(&mut engine, "zzzzz");

        assert!(engine.is_invalid_word_shown());
        assert!((engine.remaining_seconds() - 170.0).abs() < 1e-9);
        assert_eq!(engine.cursor(), WORD_LENGTH);
        assert_eq!(engine.row(RowId::Guessing).current_word(), "zzzzz");
        assert_eq!(engine.phase(), Phase::AwaitingSubsequentInput);
    }

    #[test]
    fn backspace_hides_invalid_message() {
        let mut engine = engine();
        guess(&mut engine, "zzzzz");
        assert!(engine.is_invalid_word_shown());
        engine.on_backspace();
        assert!(!engine.is_invalid_word_shown());
    }

    #[test]
    fn penalty_can_end_the_round() {
        let mut engine = engine();
        guess(&mut engine, "slate");
        engine.tick(175.0);
        guess(&mut engine, "zzzzz");

        assert!(engine.is_game_over());
        assert_eq!(engine.phase(), Phase::Lost);
        assert!(engine.remaining_seconds().abs() < f64::EPSILON);
        assert_eq!(engine.stats().lost, 1);
    }

    #[test]
    fn winning_opening_guess() {
        let mut engine = engine();
        guess(&mut engine, "crane");

        assert_eq!(engine.phase(), Phase::Won);
        assert!(engine.is_game_over());
        assert!(!engine.timer().is_running());
        assert!(engine.drain_events().contains(&GameEvent::GameWon));
    }

    #[test]
    fn winning_subsequent_guess_keeps_row() {
        let mut engine = engine();
        guess(&mut engine, "slate");
        guess(&mut engine, "crane");

        assert_eq!(engine.phase(), Phase::Won);
        assert!(engine.row(RowId::Guessing).is_fully_correct());
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.stats().won, 1);
    }

    #[test]
    fn missed_subsequent_guess_clears_row() {
        let mut engine = engine();
        guess(&mut engine, "slate");
        guess(&mut engine, "trace");

        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.row(RowId::Guessing), &GuessRow::new());
        assert!(!engine.is_game_over());
        assert!(!engine.history()[1].is_win());
    }

    #[test]
    fn input_ignored_after_game_over() {
        let mut engine = engine();
        guess(&mut engine, "crane");
        engine.drain_events();

        engine.on_letter_input('a');
        engine.on_backspace();
        engine.on_submit();
        engine.tick(500.0);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn time_expiry_loses_once() {
        let mut engine = engine();
        engine.tick(179.5);
        engine.tick(1.0);
        assert_eq!(engine.phase(), Phase::Lost);

        engine.on_time_expired();
        let lost = engine
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::GameLost)
            .count();
        assert_eq!(lost, 1);
        assert_eq!(engine.stats().played, 1);
    }

    #[test]
    fn expiry_blocks_submission_in_same_frame() {
        let mut engine = engine();
        type_word(&mut engine, "crane");
        engine.tick(200.0);
        engine.on_submit();
        assert_eq!(engine.phase(), Phase::Lost);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn restart_keeps_target() {
        let mut engine = engine();
        guess(&mut engine, "slate");
        engine.restart_game();

        assert_eq!(engine.target(), "crane");
        assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
        assert_eq!(engine.row(RowId::Initial), &GuessRow::new());
        assert!(engine.history().is_empty());
        assert!(engine.drain_events().contains(&GameEvent::RoundReset));
    }

    fn multi_target_engine() -> GameEngine {
        let bank = WordBank::from_text(VALID, VALID).unwrap();
        let mut engine = GameEngine::with_config(bank, GameConfig::default())
            .with_rng(StdRng::seed_from_u64(7));
        engine.new_game();
        engine
    }

    #[test]
    fn restart_never_redraws_target() {
        let mut engine = multi_target_engine();
        let target = engine.target().to_string();

        for _ in 0..50 {
            engine.tick(3.0);
            engine.restart_game();
            assert_eq!(engine.target(), target);
            assert!((engine.remaining_seconds() - 180.0).abs() < f64::EPSILON);
        }

        guess(&mut engine, &target);
        assert_eq!(engine.phase(), Phase::Won);
        engine.restart_game();
        assert_eq!(engine.target(), target);

        engine.tick(500.0);
        assert_eq!(engine.phase(), Phase::Lost);
        engine.restart_game();
        assert_eq!(engine.target(), target);
        assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
        assert!((engine.remaining_seconds() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_game_redraws_target() {
        let mut engine = multi_target_engine();
        let first = engine.target().to_string();

        let changed = (0..50).any(|_| {
            engine.new_game();
            engine.target() != first
        });
        assert!(changed);
    }

    #[test]
    fn restart_before_any_game_starts_one() {
        let bank = WordBank::from_text(VALID, "crane").unwrap();
        let mut engine = GameEngine::with_config(bank, GameConfig::default());
        engine.restart_game();
        assert_eq!(engine.target(), "crane");
        assert_eq!(engine.phase(), Phase::AwaitingInitialInput);
    }

    #[test]
    fn clock_events_only_on_whole_second_change() {
        let mut engine = engine();
        engine.tick(0.5);
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::TimerDisplay(Clock {
                minutes: 2,
                seconds: 59
            })]
        );

        engine.tick(0.3);
        assert!(engine.drain_events().is_empty());

        engine.tick(0.4);
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::TimerDisplay(Clock {
                minutes: 2,
                seconds: 58
            })]
        );
    }

    #[test]
    fn handle_dispatches_input() {
        let mut engine = engine();
        for event in [
            InputEvent::Letter('c'),
            InputEvent::Letter('r'),
            InputEvent::Backspace,
        ] {
            engine.handle(event);
        }
        assert_eq!(engine.cursor(), 1);
    }
}
