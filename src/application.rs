/*
application.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Game controller.
//!
//! [`WordgridApplication`] ties the core together for a front-end: it validates the player name,
//! consults the cooldown gate before starting a game, generates the board, routes the pointer
//! events to the selection tracker and to the match engine, and records the time of the
//! completed games.
//!
//! All the methods run to completion; the front-end calls them one event at a time.

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use rand::Rng;

use crate::clock::Clock;
use crate::cooldown::{CooldownGate, GateState, format_hms};
use crate::game::{Game, Summary};
use crate::generator::board::{Board, BoardGenerator};
use crate::generator::grid::Coord;
use crate::generator::word_set::WordSet;
use crate::matcher::{self, MatchOutcome};
use crate::saver::last_game::SaverLastGame;
use crate::selection::SelectionTracker;

/// Pointer events sent by the front-end. Touch events map to the same three events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The button is pressed, or the screen touched, over a cell.
    CellPointerDown(Coord),
    /// The pointer moves over a cell.
    CellPointerOver(Coord),
    /// The button is released, or the finger lifted.
    PointerUp,
}

/// Reasons why a game cannot start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    /// The player did not enter a name.
    #[error("Please enter your username")]
    EmptyUsername,
    /// The player must wait before playing again.
    #[error("You need to wait {} before starting a new game", format_hms(.remaining.to_owned()))]
    Cooldown { remaining: TimeDelta },
}

/// Game controller.
pub struct WordgridApplication<C: Clock, R: Rng> {
    /// Words used for every new game.
    word_set: WordSet,

    generator: BoardGenerator,

    gate: CooldownGate,

    saver: SaverLastGame,

    clock: C,

    /// Random source for the board generation.
    rng: R,

    /// Game in progress or just ended. None before the first game.
    game: Option<Game>,

    /// Cells that the player is dragging across.
    selection: SelectionTracker,

    /// Name of the player of the current game.
    player: String,
}

impl<C: Clock, R: Rng> WordgridApplication<C, R> {
    /// Create a [`WordgridApplication`] object.
    pub fn new(word_set: WordSet, saver: SaverLastGame, clock: C, rng: R) -> Self {
        Self {
            word_set,
            generator: BoardGenerator::new(),
            gate: CooldownGate::default(),
            saver,
            clock,
            rng,
            game: None,
            selection: SelectionTracker::new(),
            player: String::new(),
        }
    }

    /// Replace the board generator.
    pub fn with_generator(mut self, generator: BoardGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Replace the cooldown gate.
    pub fn with_gate(mut self, gate: CooldownGate) -> Self {
        self.gate = gate;
        self
    }

    /// Return the game in progress, or the last game if it ended.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Return the cells that the player is dragging across.
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Return the name of the player.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Return the current time.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Whether a game is being played.
    pub fn is_playing(&self) -> bool {
        self.game.as_ref().is_some_and(|g| !g.is_ended())
    }

    /// Compute whether a new game can start now.
    pub fn check_cooldown(&self) -> GateState {
        self.gate
            .can_start(self.saver.get_last_game_time(), self.clock.now())
    }

    /// Start a new game for the given player.
    ///
    /// # Errors
    ///
    /// The method returns an error if the player must wait for the end of the cooldown period,
    /// or if the player name is empty.
    pub fn start_game(&mut self, player: &str) -> Result<(), StartError> {
        let state: GateState = self.check_cooldown();
        if !state.allowed {
            return Err(StartError::Cooldown {
                remaining: state.remaining,
            });
        }
        let player: &str = player.trim();
        if player.is_empty() {
            return Err(StartError::EmptyUsername);
        }

        let board: Board =
            self.generator
                .generate(&self.word_set, self.word_set.grid_size(), &mut self.rng);
        debug!(
            "New game for {player}: {} word(s) placed, {} dropped, {} attempt(s)",
            board.placements.len(),
            board.dropped.len(),
            board.attempts
        );
        let words: WordSet = board.playable_words(&self.word_set);
        self.start_with(player, Game::new(words, board.grid, self.clock.now()));
        Ok(())
    }

    /// Start playing the provided game. All the state of the previous game is discarded.
    ///
    /// The cooldown gate is not verified. A game without primary words, because the generator
    /// dropped all of them, is complete from the start and ends immediately.
    pub fn start_with(&mut self, player: &str, mut game: Game) {
        self.player = player.to_string();
        self.selection.clear();
        let solved: bool = matcher::is_complete(&game);
        game.solved = solved;
        self.game = Some(game);
        if solved {
            debug!("No word to find");
            self.finish();
        }
    }

    /// Process a pointer event.
    ///
    /// Return the outcome of the selection when the button is released, or None for the other
    /// events and when no game is being played.
    /// When the selection completes the puzzle, the game ends and its time is saved.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<MatchOutcome> {
        if !self.is_playing() {
            self.selection.clear();
            return None;
        }

        match event {
            InputEvent::CellPointerDown(cell) => {
                self.selection.begin(cell);
                None
            }
            InputEvent::CellPointerOver(cell) => {
                self.selection.extend(cell);
                None
            }
            InputEvent::PointerUp => {
                if !self.selection.is_active() {
                    return None;
                }
                let game: &mut Game = self.game.as_mut()?;
                let outcome: MatchOutcome = matcher::evaluate(self.selection.current(), game);
                self.selection.clear();
                if game.is_solved() {
                    debug!("All the words are found");
                    self.finish();
                }
                Some(outcome)
            }
        }
    }

    /// End the game in progress and return its report.
    ///
    /// The game clock stops and the end time is saved for the cooldown gate. Calling the method
    /// again returns the same report. Return None if no game was started.
    pub fn end_game(&mut self) -> Option<Summary> {
        self.finish();
        let now: DateTime<Utc> = self.clock.now();
        self.game.as_ref().map(|g| g.summary(&self.player, now))
    }

    /// Stop the game clock and save the end time, once.
    fn finish(&mut self) {
        let now: DateTime<Utc> = self.clock.now();
        if let Some(game) = self.game.as_mut()
            && !game.is_ended()
        {
            game.end(now);
            self.selection.clear();
            self.saver.save_last_game_time(now);
        }
    }

    /// Return the text of the game clock, or None when no game is being played.
    ///
    /// The front-end calls this method periodically. It does not change the game.
    pub fn tick(&self) -> Option<String> {
        self.game
            .as_ref()
            .filter(|g| !g.is_ended())
            .map(|g| g.clock_text(self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::generator::grid::Grid;
    use crate::saver::store::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn app(clock: &FixedClock) -> WordgridApplication<&FixedClock, StdRng> {
        WordgridApplication::new(
            WordSet::default(),
            SaverLastGame::new(Box::new(MemoryStore::new())),
            clock,
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn empty_username() {
        let clock: FixedClock = FixedClock::new(t0());
        let mut app = app(&clock);

        assert_eq!(app.start_game("   "), Err(StartError::EmptyUsername));
        assert!(app.game().is_none());

        app.start_game("  satoshi ").unwrap();
        assert_eq!(app.player(), "satoshi");
        assert!(app.is_playing());
    }

    #[test]
    fn events_without_game_are_ignored() {
        let clock: FixedClock = FixedClock::new(t0());
        let mut app = app(&clock);

        assert_eq!(
            app.handle_event(InputEvent::CellPointerDown(Coord::new(0, 0))),
            None
        );
        assert_eq!(app.handle_event(InputEvent::PointerUp), None);
        assert!(app.selection().is_empty());
        assert_eq!(app.tick(), None);
    }

    #[test]
    fn end_game_starts_the_cooldown() {
        let clock: FixedClock = FixedClock::new(t0());
        let mut app = app(&clock);
        app.start_game("satoshi").unwrap();

        clock.advance(TimeDelta::seconds(30));
        assert_eq!(app.tick().as_deref(), Some("00:30"));
        let summary: Summary = app.end_game().unwrap();
        assert_eq!(summary.time_taken, "00:30");
        assert_eq!(summary.score, 0);
        assert_eq!(app.tick(), None);

        // Ending twice does not move the saved time
        clock.advance(TimeDelta::hours(1));
        assert_eq!(app.end_game().unwrap().time_taken, "00:30");
        assert_eq!(
            app.start_game("satoshi"),
            Err(StartError::Cooldown {
                remaining: TimeDelta::hours(23)
            })
        );

        clock.advance(TimeDelta::hours(23));
        assert!(app.start_game("satoshi").is_ok());
    }

    #[test]
    fn pointer_up_without_selection() {
        let clock: FixedClock = FixedClock::new(t0());
        let mut app = app(&clock);
        let grid: Grid = Grid::from_rows(&["CAT", "XXX", "XXX"]).unwrap();
        app.start_with("satoshi", Game::new(WordSet::new(["CAT"], ["AXX"], 3), grid, t0()));

        assert_eq!(app.handle_event(InputEvent::PointerUp), None);
        assert_eq!(
            app.handle_event(InputEvent::CellPointerOver(Coord::new(0, 1))),
            None
        );
        assert!(app.selection().is_empty());
    }

    #[test]
    fn game_without_words_ends_at_once() {
        let clock: FixedClock = FixedClock::new(t0());
        let mut app = WordgridApplication::new(
            WordSet::new(["BLOCKCHAIN"], ["LEE"], 3),
            SaverLastGame::new(Box::new(MemoryStore::new())),
            &clock,
            StdRng::seed_from_u64(5),
        );

        app.start_game("satoshi").unwrap();
        let game: &Game = app.game().unwrap();
        assert!(game.word_set().primary().is_empty());
        assert!(game.is_solved());
        assert!(!app.is_playing());
        assert_eq!(app.tick(), None);
        assert!(!app.check_cooldown().allowed);
    }

    #[test]
    fn cooldown_error_message() {
        let error: StartError = StartError::Cooldown {
            remaining: TimeDelta::seconds(3661),
        };
        assert_eq!(
            error.to_string(),
            "You need to wait 01:01:01 before starting a new game"
        );
    }
}
