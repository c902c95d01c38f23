/*
placement.rs

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

//! Position of a word in the grid.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::grid::Coord;

/// Direction in which a word is written. Words are never written diagonally or backward.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Return [`Orientation::Horizontal`] or [`Orientation::Vertical`] with the same probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_repr(rng.random_range(0..2)).unwrap_or(Orientation::Horizontal)
    }

    /// Return the position of the letter at `offset` for a word starting at `anchor`.
    pub fn step(self, anchor: Coord, offset: usize) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(anchor.row, anchor.col + offset),
            Orientation::Vertical => Coord::new(anchor.row + offset, anchor.col),
        }
    }
}

/// A word written in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word.
    pub word: String,

    /// Position of the first letter.
    pub anchor: Coord,

    /// Direction of the word from its first letter.
    pub orientation: Orientation,
}

impl Placement {
    /// Create a [`Placement`] object.
    pub fn new(word: &str, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            word: word.to_string(),
            anchor,
            orientation,
        }
    }

    /// Choose a random position for a word of `len` letters in a grid of `grid_size` cells.
    ///
    /// The word always fits in the grid from the returned anchor.
    /// Return None if the word is longer than the grid.
    pub fn random_anchor<R: Rng + ?Sized>(
        rng: &mut R,
        len: usize,
        grid_size: usize,
        orientation: Orientation,
    ) -> Option<Coord> {
        if len == 0 || len > grid_size {
            return None;
        }
        let fixed: usize = rng.random_range(0..grid_size);
        let along: usize = rng.random_range(0..=grid_size - len);
        Some(match orientation {
            Orientation::Horizontal => Coord::new(fixed, along),
            Orientation::Vertical => Coord::new(along, fixed),
        })
    }

    /// Iterate over the cells that the word occupies with their letter.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(|(i, c)| (self.orientation.step(self.anchor, i), c))
    }
}
