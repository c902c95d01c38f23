/*
game_test.rs

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

//! Tests for the selection, the match engine, and the cooldown gate.

use chrono::{DateTime, TimeDelta, Utc};
use rstest::rstest;

use wordgrid::cooldown::{CooldownGate, GateState};
use wordgrid::game::Game;
use wordgrid::generator::grid::{Coord, Grid};
use wordgrid::generator::word_set::WordSet;
use wordgrid::matcher::{self, MatchOutcome};
use wordgrid::selection::SelectionTracker;

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000, 0).unwrap()
}

fn row_cells(row: usize, cols: std::ops::Range<usize>) -> Vec<Coord> {
    cols.map(|col| Coord::new(row, col)).collect()
}

/// 5x5 grid with CAT on the third row.
fn cat_game() -> Game {
    let grid: Grid = Grid::from_rows(&["QWERT", "YUIOP", "CATXZ", "ASDFG", "HJKLM"]).unwrap();
    Game::new(WordSet::new(["CAT"], ["WUS"], 5), grid, t0())
}

#[test]
fn find_cat() {
    let mut game: Game = cat_game();
    let mut selection: SelectionTracker = SelectionTracker::new();

    selection.begin(Coord::new(2, 0));
    selection.extend(Coord::new(2, 1));
    selection.extend(Coord::new(2, 2));
    let outcome: MatchOutcome = matcher::evaluate(selection.current(), &mut game);

    assert_eq!(outcome, MatchOutcome::PrimaryWordFound(String::from("CAT")));
    assert_eq!(game.score(), 100);
    assert!(matcher::is_complete(&game));
    assert!(game.is_solved());
}

#[test]
fn words_are_credited_once() {
    let mut game: Game = cat_game();
    let cat: Vec<Coord> = row_cells(2, 0..3);

    matcher::evaluate(&cat, &mut game);
    assert_eq!(matcher::evaluate(&cat, &mut game), MatchOutcome::NoMatch);
    assert_eq!(game.score(), 100);
    assert_eq!(game.found_primary().len(), 1);
}

#[test]
fn hidden_words_earn_a_bonus() {
    let mut game: Game = cat_game();
    let wus: Vec<Coord> = (0..3).map(|row| Coord::new(row, 1)).rev().collect();
    // Column 1 from bottom to top reads "AUW", from top to bottom "WUA"
    assert_eq!(matcher::evaluate(&wus, &mut game), MatchOutcome::NoMatch);

    let wus: Vec<Coord> = vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(3, 1)];
    assert_eq!(
        matcher::evaluate(&wus, &mut game),
        MatchOutcome::HiddenWordFound(String::from("WUS"))
    );
    assert_eq!(game.score(), 500);
    assert!(!game.is_solved());
    assert_eq!(matcher::evaluate(&wus, &mut game), MatchOutcome::NoMatch);
    assert_eq!(game.score(), 500);
}

#[rstest]
#[case(vec![Coord::new(2, 2), Coord::new(2, 1), Coord::new(2, 0)])]
#[case(vec![Coord::new(2, 0), Coord::new(2, 1)])]
#[case(vec![Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)])]
#[case(vec![Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 7)])]
#[case(Vec::new())]
fn selections_without_match(#[case] cells: Vec<Coord>) {
    let mut game: Game = cat_game();

    assert_eq!(matcher::evaluate(&cells, &mut game), MatchOutcome::NoMatch);
    assert_eq!(game.score(), 0);
    assert!(!game.is_solved());
}

#[test]
fn score_never_decreases() {
    let mut game: Game = cat_game();
    let attempts: [Vec<Coord>; 4] = [
        row_cells(0, 0..3),
        row_cells(2, 0..3),
        row_cells(4, 1..4),
        row_cells(2, 0..3),
    ];

    let mut previous: u32 = game.score();
    for cells in &attempts {
        let outcome: MatchOutcome = matcher::evaluate(cells, &mut game);
        assert_eq!(game.score(), previous + outcome.points());
        previous = game.score();
    }
    assert_eq!(game.score(), 100);
}

#[test]
fn completion_needs_every_primary_word() {
    // 27 distinct words, one per row
    let words: Vec<String> = (0..27u8)
        .map(|i| {
            let a: char = char::from(b'A' + i % 26);
            let b: char = char::from(b'A' + i / 26);
            format!("Q{a}{b}")
        })
        .collect();
    let rows: Vec<String> = words
        .iter()
        .map(|w| format!("{w}{}", "X".repeat(24)))
        .collect();
    let grid: Grid = Grid::from_rows(&rows).unwrap();
    let mut game: Game = Game::new(WordSet::new(&words, ["ZZZ"], 27), grid, t0());
    assert_eq!(game.word_set().primary().len(), 27);

    for row in 0..27 {
        assert!(!matcher::is_complete(&game));
        assert_eq!(
            matcher::evaluate(&row_cells(row, 0..3), &mut game),
            MatchOutcome::PrimaryWordFound(words[row].clone())
        );
    }
    assert!(matcher::is_complete(&game));
    assert!(game.found_hidden().is_empty());
    assert_eq!(game.score(), 2700);
}

#[test]
fn no_credit_after_the_end() {
    let mut game: Game = cat_game();
    game.end(t0() + TimeDelta::seconds(10));

    assert_eq!(
        matcher::evaluate(&row_cells(2, 0..3), &mut game),
        MatchOutcome::NoMatch
    );
    assert_eq!(game.score(), 0);
    assert_eq!(game.clock_text(t0() + TimeDelta::hours(1)), "00:10");
}

#[test]
fn consecutive_duplicates_are_ignored() {
    let mut selection: SelectionTracker = SelectionTracker::new();
    let a: Coord = Coord::new(0, 0);
    let b: Coord = Coord::new(0, 1);

    selection.begin(a);
    selection.extend(a);
    selection.extend(b);
    selection.extend(b);
    selection.extend(a);
    assert_eq!(selection.current(), &[a, b, a]);

    selection.clear();
    selection.extend(b);
    assert!(selection.is_empty());
}

#[rstest]
#[case(TimeDelta::hours(23), false, TimeDelta::hours(1))]
#[case(TimeDelta::hours(24), true, TimeDelta::zero())]
#[case(TimeDelta::hours(72), true, TimeDelta::zero())]
#[case(TimeDelta::zero(), false, TimeDelta::hours(24))]
#[case(TimeDelta::minutes(-30), false, TimeDelta::hours(24))]
fn cooldown_arithmetic(
    #[case] elapsed: TimeDelta,
    #[case] allowed: bool,
    #[case] remaining: TimeDelta,
) {
    let state: GateState = CooldownGate::default().can_start(Some(t0()), t0() + elapsed);

    assert_eq!(state.allowed, allowed);
    assert_eq!(state.remaining, remaining);
}

#[test]
fn first_game_is_allowed() {
    assert_eq!(CooldownGate::default().can_start(None, t0()), GateState::open());
}
