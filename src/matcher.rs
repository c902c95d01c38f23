/*
matcher.rs

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

//! Check the player's selection against the word lists.

use log::debug;

use crate::config::{HIDDEN_WORD_BONUS, PRIMARY_WORD_POINTS};
use crate::game::Game;
use crate::generator::grid::Coord;

/// Result of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The selection spells a primary word that was not found yet.
    PrimaryWordFound(String),
    /// The selection spells a hidden word that was not found yet.
    HiddenWordFound(String),
    /// The selection spells no word, or a word that was already found.
    NoMatch,
}

impl MatchOutcome {
    /// Return the points that the outcome earned.
    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::PrimaryWordFound(_) => PRIMARY_WORD_POINTS,
            MatchOutcome::HiddenWordFound(_) => HIDDEN_WORD_BONUS,
            MatchOutcome::NoMatch => 0,
        }
    }
}

/// Evaluate the selected cells and update the game.
///
/// The letters of the cells, in selection order, must spell a word of the game.
/// A word spelled backward does not match.
/// Each word is credited only once per list: selecting a word that was already found is a
/// [`MatchOutcome::NoMatch`]. A word that is in both lists is credited as a primary word the
/// first time, and as a hidden word the second time.
/// Nothing is credited once the game is over.
pub fn evaluate(selection: &[Coord], game: &mut Game) -> MatchOutcome {
    if game.is_ended() {
        return MatchOutcome::NoMatch;
    }
    let Some(candidate) = game.grid.read(selection) else {
        return MatchOutcome::NoMatch;
    };

    // A word in both lists is credited as primary first, then as hidden
    let outcome: MatchOutcome = if game.word_set.is_primary(&candidate)
        && !game.found_primary.contains(&candidate)
    {
        game.found_primary.insert(candidate.clone());
        MatchOutcome::PrimaryWordFound(candidate)
    } else if game.word_set.is_hidden(&candidate) && !game.found_hidden.contains(&candidate) {
        game.found_hidden.insert(candidate.clone());
        MatchOutcome::HiddenWordFound(candidate)
    } else {
        MatchOutcome::NoMatch
    };
    game.score += outcome.points();

    if outcome != MatchOutcome::NoMatch {
        debug!("{outcome:?}: score = {}", game.score);
    }
    if is_complete(game) {
        game.solved = true;
    }
    outcome
}

/// Whether the player found all the primary words. Hidden words are not required.
pub fn is_complete(game: &Game) -> bool {
    game.word_set
        .primary()
        .iter()
        .all(|w| game.found_primary.contains(w))
}
