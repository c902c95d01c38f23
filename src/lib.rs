/*
lib.rs

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

//! Wordgrid, a word search game.
//!
//! The player drags the pointer across the letters of a square grid to find the words of a
//! list. A few hidden words, which are not listed, earn a bonus. Once all the listed words are
//! found, or the player ends the game, a new game can only start after a cooldown period.
//!
//! The core modules ([`generator`], [`selection`], [`matcher`], [`cooldown`], [`game`]) do not
//! depend on the terminal. [`application::WordgridApplication`] ties them together, and
//! [`term`] provides the terminal front-end.

pub mod application;
pub mod cli_options;
pub mod clock;
pub mod config;
pub mod cooldown;
pub mod game;
pub mod generator;
pub mod matcher;
pub mod saver;
pub mod selection;
pub mod term;
