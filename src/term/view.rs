/*
view.rs

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

//! Build the frames of the screens.
//!
//! The functions only read the game state. They never change it.

use std::collections::HashMap;

use super::renderer::{Frame, Span, Style};
use super::{CELL_WIDTH, GRID_LEFT, GRID_TOP};
use crate::game::{Game, Summary};
use crate::generator::grid::Coord;
use crate::generator::word_set::Category;
use crate::selection::SelectionTracker;

const TITLE: &str = "WORDGRID";

/// Space between the grid and the word list.
const WORD_LIST_GAP: usize = 4;

/// Cells of the words that the player found, with the category of the word.
pub type FoundCells = HashMap<Coord, Category>;

/// Data for the game screen.
pub struct PlayView<'a> {
    pub game: &'a Game,
    pub selection: &'a SelectionTracker,
    pub found_cells: &'a FoundCells,
    pub player: &'a str,
    /// Text of the game clock.
    pub clock: &'a str,
    /// Short message, such as the announcement of a hidden word.
    pub flash: Option<&'a str>,
}

fn header(frame: &mut Frame, spans: Vec<Span>) {
    let mut line: Vec<Span> = vec![Span::new(TITLE, Style::Title)];
    line.extend(spans);
    frame.push_line(line);
    frame.push_blank();
}

/// Sign-in screen.
pub fn sign_in(name: &str, error: Option<&str>) -> Frame {
    let mut frame: Frame = Frame::new();
    header(&mut frame, Vec::new());
    frame.push_text("Find the words hidden in the grid of letters.", Style::Normal);
    frame.push_blank();
    frame.push_line(vec![
        Span::plain("Username: "),
        Span::new(name, Style::Title),
        Span::new("_", Style::Faint),
    ]);
    frame.push_blank();
    match error {
        Some(msg) => frame.push_text(msg, Style::Error),
        None => frame.push_blank(),
    }
    frame.push_blank();
    frame.push_text("Enter: start    Esc: quit", Style::Faint);
    frame
}

/// Screen displayed while the player must wait.
pub fn cooldown(remaining: &str) -> Frame {
    let mut frame: Frame = Frame::new();
    header(&mut frame, Vec::new());
    frame.push_text("You already played recently.", Style::Normal);
    frame.push_blank();
    frame.push_line(vec![
        Span::plain("Next game available in: "),
        Span::new(remaining, Style::Title),
    ]);
    frame.push_blank();
    frame.push_text("q: quit", Style::Faint);
    frame
}

fn cell_style(view: &PlayView, cell: Coord) -> Style {
    if view.selection.contains(cell) {
        return Style::Selected;
    }
    match view.found_cells.get(&cell) {
        Some(Category::Hidden) => Style::FoundHidden,
        Some(Category::Primary) => Style::Found,
        None => Style::Normal,
    }
}

/// Game screen.
///
/// The grid starts at row [`GRID_TOP`] and column [`GRID_LEFT`]. Each cell is [`CELL_WIDTH`]
/// columns wide. The sorted list of the words to find is displayed on the right of the grid.
pub fn playing(view: &PlayView) -> Frame {
    let mut frame: Frame = Frame::new();
    header(
        &mut frame,
        vec![
            Span::plain(format!("    Player: {}", view.player)),
            Span::plain(format!("    Score: {}", view.game.score())),
            Span::plain(format!("    Time: {}", view.clock)),
        ],
    );
    debug_assert_eq!(frame.lines().len(), GRID_TOP);

    let words: Vec<&str> = view.game.word_set().sorted_primary();
    let size: usize = view.game.grid().size();
    let rows: usize = size.max(1);
    let columns: usize = words.len().div_ceil(rows);
    let width: usize = words.iter().map(|w| w.len()).max().unwrap_or(0) + 4;

    for (row, letters) in view.game.grid().rows().enumerate() {
        let mut line: Vec<Span> = vec![Span::plain(" ".repeat(GRID_LEFT))];
        for (col, letter) in letters.iter().enumerate() {
            let style: Style = cell_style(view, Coord::new(row, col));
            line.push(Span::new(format!("{letter:^cell$}", cell = CELL_WIDTH), style));
        }
        line.push(Span::plain(" ".repeat(WORD_LIST_GAP)));
        for column in 0..columns {
            if let Some(word) = words.get(column * rows + row) {
                if view.game.is_found(word) {
                    line.push(Span::new(format!("✓ {word:<pad$}", pad = width - 2), Style::Faint));
                } else {
                    line.push(Span::plain(format!("  {word:<pad$}", pad = width - 2)));
                }
            }
        }
        frame.push_line(line);
    }

    frame.push_blank();
    match view.flash {
        Some(msg) => frame.push_text(msg, Style::Alert),
        None => frame.push_blank(),
    }
    frame.push_text(
        "Drag over the letters to select a word.    e: end the game    q: quit",
        Style::Faint,
    );
    frame
}

/// End-of-game screen.
///
/// `next_game` is the remaining wait before the next game, or None if a game can start now.
pub fn summary(summary: &Summary, next_game: Option<&str>) -> Frame {
    let mut frame: Frame = Frame::new();
    let title: &str = if summary.words_found == summary.words_total {
        "    Congratulations!"
    } else {
        "    Game Over"
    };
    header(&mut frame, vec![Span::new(title, Style::Alert)]);
    for line in summary.to_string().lines() {
        frame.push_text(line, Style::Normal);
    }
    frame.push_blank();
    match next_game {
        Some(remaining) => {
            frame.push_line(vec![
                Span::plain("Next game available in: "),
                Span::new(remaining, Style::Title),
            ]);
            frame.push_blank();
            frame.push_text("q: quit", Style::Faint);
        }
        None => {
            frame.push_blank();
            frame.push_blank();
            frame.push_text("Enter: new game    q: quit", Style::Faint);
        }
    }
    frame
}
