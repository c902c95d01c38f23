/*
board_test.rs

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

//! Tests for the board generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

use wordgrid::config::MAX_PLACEMENT_ATTEMPTS;
use wordgrid::generator::board::{Board, BoardGenerator};
use wordgrid::generator::grid::Coord;
use wordgrid::generator::word_set::{Category, WordSet};

fn generate(word_set: &WordSet, seed: u64) -> Board {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    BoardGenerator::new().generate(word_set, word_set.grid_size(), &mut rng)
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2025)]
fn every_cell_is_a_letter(#[case] seed: u64) {
    let word_set: WordSet = WordSet::default();
    let board: Board = generate(&word_set, seed);

    assert_eq!(board.grid.size(), word_set.grid_size());
    let mut count: usize = 0;
    for row in board.grid.rows() {
        assert_eq!(row.len(), word_set.grid_size());
        for c in row {
            assert!(c.is_ascii_uppercase(), "unexpected cell {c:?}");
            count += 1;
        }
    }
    assert_eq!(count, word_set.grid_size() * word_set.grid_size());
}

#[rstest]
#[case(3)]
#[case(99)]
#[case(12345)]
fn placed_words_can_be_read(#[case] seed: u64) {
    let word_set: WordSet = WordSet::default();
    let board: Board = generate(&word_set, seed);

    for placement in &board.placements {
        let cells: Vec<Coord> = placement.cells().map(|(cell, _)| cell).collect();
        assert_eq!(cells.len(), placement.word.len());
        assert!(
            cells
                .iter()
                .all(|c| c.row < board.grid.size() && c.col < board.grid.size())
        );
        assert_eq!(board.grid.read(&cells).as_deref(), Some(placement.word.as_str()));
    }

    // Every word is either placed or dropped
    assert_eq!(
        board.placements.len() + board.dropped.len(),
        word_set.primary().len() + word_set.hidden().len()
    );
}

#[test]
fn hidden_words_are_placed_first() {
    let word_set: WordSet = WordSet::default();
    let board: Board = generate(&word_set, 8);

    let mut seen_primary: bool = false;
    for placement in &board.placements {
        match word_set.category(&placement.word) {
            Some(Category::Primary) => seen_primary = true,
            Some(Category::Hidden) => assert!(!seen_primary, "{} placed late", placement.word),
            None => panic!("Unknown word {}", placement.word),
        }
    }
}

#[test]
fn same_seed_same_board() {
    let word_set: WordSet = WordSet::default();

    assert_eq!(generate(&word_set, 77).grid, generate(&word_set, 77).grid);
}

#[test]
fn generation_ends_in_small_grids() {
    let word_set: WordSet = WordSet::new(["BLOCKCHAIN", "GAS", "NODE", "HASH"], ["LEE"], 4);
    let board: Board = generate(&word_set, 5);

    assert!(!board.is_placed("BLOCKCHAIN"));
    assert!(
        board
            .dropped
            .contains(&(String::from("BLOCKCHAIN"), Category::Primary))
    );
    assert!(board.attempts <= 4 * MAX_PLACEMENT_ATTEMPTS);

    // The game only uses the words in the grid
    let words: WordSet = board.playable_words(&word_set);
    assert!(words.category("BLOCKCHAIN").is_none());
    assert_eq!(
        words.primary().len() + words.hidden().len(),
        board.placements.len()
    );
}

#[test]
fn empty_grid() {
    let word_set: WordSet = WordSet::new(["GAS"], ["LEE"], 0);
    let board: Board = generate(&word_set, 1);

    assert_eq!(board.grid.size(), 0);
    assert_eq!(board.dropped.len(), 2);
    assert_eq!(board.attempts, 0);
}
