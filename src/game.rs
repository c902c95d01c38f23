/*
game.rs

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

//! Manage the status of a game in progress.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashSet;
use std::fmt;

use crate::generator::grid::Grid;
use crate::generator::word_set::WordSet;

/// Manage the status of the game in progress.
///
/// A [`Game`] object is created for every new game and dropped when the player starts the next
/// one. Only [`crate::matcher::evaluate`] changes the score and the found words.
#[derive(Debug, Clone)]
pub struct Game {
    /// Words of the game. Words that the generator could not write in the grid are not part of
    /// this list.
    pub(crate) word_set: WordSet,

    /// Letter grid.
    pub(crate) grid: Grid,

    /// Primary words that the player found.
    pub(crate) found_primary: HashSet<String>,

    /// Hidden words that the player found.
    pub(crate) found_hidden: HashSet<String>,

    /// Current score.
    pub(crate) score: u32,

    /// Whether the player found all the primary words.
    pub(crate) solved: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: DateTime<Utc>,

    /// Time when the game ended, either because the puzzle is solved or because the player
    /// stopped. The game duration does not change after that time.
    end_time: Option<DateTime<Utc>>,
}

impl Game {
    /// Create a [`Game`] object for the given words and grid. The game starts at `now`.
    pub fn new(word_set: WordSet, grid: Grid, now: DateTime<Utc>) -> Self {
        Self {
            word_set,
            grid,
            found_primary: HashSet::new(),
            found_hidden: HashSet::new(),
            score: 0,
            solved: false,
            start_time: now,
            end_time: None,
        }
    }

    /// Return the letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the words of the game.
    pub fn word_set(&self) -> &WordSet {
        &self.word_set
    }

    /// Return the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return the primary words found so far.
    pub fn found_primary(&self) -> &HashSet<String> {
        &self.found_primary
    }

    /// Return the hidden words found so far.
    pub fn found_hidden(&self) -> &HashSet<String> {
        &self.found_hidden
    }

    /// Whether the word, primary or hidden, has already been found.
    pub fn is_found(&self, word: &str) -> bool {
        self.found_primary.contains(word) || self.found_hidden.contains(word)
    }

    /// Whether the player found all the primary words.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether the game is over. The player cannot select words anymore.
    pub fn is_ended(&self) -> bool {
        self.end_time.is_some()
    }

    /// Stop the game clock. Only the first call has an effect.
    pub fn end(&mut self, now: DateTime<Utc>) {
        if self.end_time.is_none() {
            self.end_time = Some(now);
        }
    }

    /// Return the time when the game ended.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Return the game duration.
    pub fn get_duration(&self, now: DateTime<Utc>) -> TimeDelta {
        let end: DateTime<Utc> = self.end_time.unwrap_or(now);
        (end - self.start_time).max(TimeDelta::zero())
    }

    /// Return the game duration in hours, minutes, and seconds.
    pub fn get_duration_hms(&self, now: DateTime<Utc>) -> (i64, i64, i64) {
        let duration: i64 = self.get_duration(now).num_seconds();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }

    /// Return the game duration for the clock display: `MM:SS`, or `HH:MM:SS` after one hour.
    pub fn clock_text(&self, now: DateTime<Utc>) -> String {
        let (hour, minute, second) = self.get_duration_hms(now);
        if hour > 0 {
            format!("{hour:02}:{minute:02}:{second:02}")
        } else {
            format!("{minute:02}:{second:02}")
        }
    }

    /// Build the end-of-game report.
    pub fn summary(&self, player: &str, now: DateTime<Utc>) -> Summary {
        Summary {
            player: player.to_string(),
            score: self.score,
            time_taken: self.clock_text(now),
            words_found: self.found_primary.len(),
            words_total: self.word_set.primary().len(),
            hidden_found: self.found_hidden.len(),
            hidden_total: self.word_set.hidden().len(),
        }
    }
}

/// End-of-game report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub player: String,
    pub score: u32,
    /// Game duration, as displayed by the game clock.
    pub time_taken: String,
    pub words_found: usize,
    pub words_total: usize,
    pub hidden_found: usize,
    pub hidden_total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Player: {}", self.player)?;
        writeln!(f, "Final Score: {}", self.score)?;
        writeln!(f, "Time Taken: {}", self.time_taken)?;
        writeln!(f, "Words Found: {}/{}", self.words_found, self.words_total)?;
        write!(
            f,
            "Hidden Words Found: {}/{}",
            self.hidden_found, self.hidden_total
        )
    }
}
