/*
generator.rs

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

//! Build the letter grid of a game.
//!
//! A [`word_set::WordSet`] object groups the words to find (the primary words), the bonus words
//! that are never displayed (the hidden words), and the grid dimension.
//! The default word set is provided by the [`word_lists`] module.
//!
//! To play, a random board must be created with a [`board::BoardGenerator`] object and its
//! [`board::BoardGenerator::generate`] method:
//!
//! * Every word is tried at random positions (see [`placement::Placement`]), horizontally or
//!   vertically, and is written to the grid at the first position where it does not collide with
//!   the letters already there.
//!   Hidden words are tried first.
//!   A word that cannot be written after [`crate::config::MAX_PLACEMENT_ATTEMPTS`] attempts is
//!   dropped from the game.
//!
//! * The remaining empty cells are then filled with random letters, which produces the final
//!   [`grid::Grid`] object.

pub mod board;
pub mod grid;
pub mod placement;
pub mod word_lists;
pub mod word_set;
