/*
board.rs

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

//! Generate a random board.

use log::debug;
use rand::Rng;

use super::grid::{Coord, Grid};
use super::placement::{Orientation, Placement};
use super::word_set::{Category, WordSet};
use crate::config::MAX_PLACEMENT_ATTEMPTS;

/// Result of a board generation.
#[derive(Debug, Clone)]
pub struct Board {
    /// The letter grid, with all the cells filled.
    pub grid: Grid,

    /// Words written in the grid, in placement order.
    pub placements: Vec<Placement>,

    /// Words that could not be written in the grid, with their category.
    pub dropped: Vec<(String, Category)>,

    /// Total number of placement attempts. Used for statistics.
    pub attempts: usize,
}

impl Board {
    /// Whether the given word has been written in the grid.
    pub fn is_placed(&self, word: &str) -> bool {
        self.placements.iter().any(|p| p.word == word)
    }

    /// Return the words of `word_set` that are written in the grid.
    ///
    /// Dropped words cannot be found, so the game is played with this shorter list.
    pub fn playable_words(&self, word_set: &WordSet) -> WordSet {
        WordSet::new(
            word_set.primary().iter().filter(|w| self.is_placed(w)),
            word_set.hidden().iter().filter(|w| self.is_placed(w)),
            self.grid.size(),
        )
    }
}

/// Grid in construction. Empty cells are `None`.
struct Draft {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Draft {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size)
            .then_some(coord.row * self.size + coord.col)
    }

    /// Whether the word can be written: each cell must be empty or already hold the same letter.
    fn can_place(&self, placement: &Placement) -> bool {
        placement.cells().all(|(coord, letter)| match self.idx(coord) {
            Some(i) => self.cells[i].is_none_or(|c| c == letter),
            None => false,
        })
    }

    fn place(&mut self, placement: &Placement) {
        for (coord, letter) in placement.cells() {
            if let Some(i) = self.idx(coord) {
                self.cells[i] = Some(letter);
            }
        }
    }

    /// Fill the empty cells with random letters and return the final grid.
    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let letters: Vec<char> = self
            .cells
            .into_iter()
            .map(|c| c.unwrap_or_else(|| random_letter(rng)))
            .collect();
        Grid::from_letters(self.size, letters)
    }
}

/// Return a random letter between `A` and `Z`.
fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.random_range(0..26u8))
}

/// [`BoardGenerator`] object.
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator {
    /// Number of random positions tried for a word before giving up on that word.
    max_attempts: usize,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator {
    /// Create a [`BoardGenerator`] object that tries [`MAX_PLACEMENT_ATTEMPTS`] positions per
    /// word.
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_PLACEMENT_ATTEMPTS)
    }

    /// Create a [`BoardGenerator`] object with a custom number of attempts per word.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Return the number of attempts per word.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate a random board for the given words.
    ///
    /// Hidden words are placed first, then primary words. A word that does not fit after
    /// [`BoardGenerator::max_attempts`] random positions is dropped: this is not an error, the
    /// game continues with fewer words. A word longer than the grid is always dropped.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        word_set: &WordSet,
        grid_size: usize,
        rng: &mut R,
    ) -> Board {
        let mut draft: Draft = Draft::new(grid_size);
        let mut placements: Vec<Placement> = Vec::new();
        let mut dropped: Vec<(String, Category)> = Vec::new();
        let mut attempts: usize = 0;

        for entry in word_set.placement_order() {
            let (placement, tries) = self.find_placement(&draft, entry.word, rng);
            attempts += tries;
            match placement {
                Some(p) => {
                    debug!(
                        "Placed {} at ({}, {}) {:?} after {tries} attempt(s)",
                        p.word, p.anchor.row, p.anchor.col, p.orientation
                    );
                    draft.place(&p);
                    placements.push(p);
                }
                None => {
                    debug!(
                        "Dropped {:?} word {} after {tries} attempt(s)",
                        entry.category, entry.word
                    );
                    dropped.push((entry.word.to_string(), entry.category));
                }
            }
        }

        Board {
            grid: draft.fill(rng),
            placements,
            dropped,
            attempts,
        }
    }

    /// Try random positions for the word and return the first legal one, and the number of
    /// attempts.
    fn find_placement<R: Rng + ?Sized>(
        &self,
        draft: &Draft,
        word: &str,
        rng: &mut R,
    ) -> (Option<Placement>, usize) {
        let len: usize = word.chars().count();
        if len == 0 || len > draft.size {
            return (None, 0);
        }

        for attempt in 1..=self.max_attempts {
            let orientation: Orientation = Orientation::random(rng);
            let Some(anchor) = Placement::random_anchor(rng, len, draft.size, orientation) else {
                continue;
            };
            let placement: Placement = Placement::new(word, anchor, orientation);
            if draft.can_place(&placement) {
                return (Some(placement), attempt);
            }
        }
        (None, self.max_attempts)
    }
}
