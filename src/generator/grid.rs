/*
grid.rs

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

//! Letter grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the grid. `(0, 0)` is the top left corner.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a [`Coord`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Square grid of uppercase letters.
///
/// Every cell holds exactly one letter between `A` and `Z`.
/// A [`Grid`] object is only built by the board generator, once all the cells are filled, or by
/// [`Grid::from_rows`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Letters, row by row.
    letters: Vec<char>,
}

impl Grid {
    /// Create a [`Grid`] object from a vector of `size * size` letters stored row by row.
    pub(crate) fn from_letters(size: usize, letters: Vec<char>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Self { size, letters }
    }

    /// Create a [`Grid`] object from its rows.
    ///
    /// Return None if the rows do not form a square, or if a cell is not an uppercase ASCII
    /// letter.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size: usize = rows.len();
        let mut letters: Vec<char> = Vec::with_capacity(size * size);

        for row in rows {
            let row: &str = row.as_ref();
            if row.chars().count() != size {
                return None;
            }
            for c in row.chars() {
                if !c.is_ascii_uppercase() {
                    return None;
                }
                letters.push(c);
            }
        }
        Some(Self { size, letters })
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter at the given position, or None if the position is outside the grid.
    pub fn get(&self, coord: Coord) -> Option<char> {
        if coord.row < self.size && coord.col < self.size {
            Some(self.letters[coord.row * self.size + coord.col])
        } else {
            None
        }
    }

    /// Concatenate the letters of the given cells, in order.
    ///
    /// Return None if one of the positions is outside the grid.
    pub fn read(&self, cells: &[Coord]) -> Option<String> {
        cells.iter().map(|c| self.get(*c)).collect()
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_non_square_input() {
        assert!(Grid::from_rows(&["ABC", "DEF"]).is_none());
        assert!(Grid::from_rows(&["AB", "DEF", "GHI"]).is_none());
    }

    #[test]
    fn from_rows_rejects_lowercase_and_digits() {
        assert!(Grid::from_rows(&["AB", "cD"]).is_none());
        assert!(Grid::from_rows(&["A1", "CD"]).is_none());
    }

    #[test]
    fn read_follows_the_cell_order() {
        let grid: Grid = Grid::from_rows(&["CAT", "XYZ", "DOG"]).unwrap();

        let across: Vec<Coord> = vec![(0, 0).into(), (0, 1).into(), (0, 2).into()];
        assert_eq!(grid.read(&across).as_deref(), Some("CAT"));

        let backward: Vec<Coord> = across.iter().rev().copied().collect();
        assert_eq!(grid.read(&backward).as_deref(), Some("TAC"));

        let down: Vec<Coord> = vec![(0, 0).into(), (1, 0).into(), (2, 0).into()];
        assert_eq!(grid.read(&down).as_deref(), Some("CXD"));
    }

    #[test]
    fn read_outside_the_grid() {
        let grid: Grid = Grid::from_rows(&["AB", "CD"]).unwrap();

        assert_eq!(grid.get(Coord::new(2, 0)), None);
        assert_eq!(grid.read(&[Coord::new(0, 0), Coord::new(0, 2)]), None);
        assert_eq!(grid.read(&[]).as_deref(), Some(""));
    }

    #[test]
    fn display_separates_letters() {
        let grid: Grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D\n");
    }
}
