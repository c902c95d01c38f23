/*
input.rs

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

//! Translate terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{CELL_WIDTH, GRID_LEFT, GRID_TOP};
use crate::application::InputEvent;
use crate::generator::grid::Coord;

/// Maximum length of the player name.
pub const MAX_NAME_LEN: usize = 24;

/// Outcome of a key press in the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameInput {
    /// The player validated the form.
    Submit,
    /// The name changed.
    Edited,
    Ignored,
}

/// Return the grid cell under the terminal position, or None if the position is outside the
/// grid.
pub fn cell_at(column: u16, row: u16, grid_size: usize) -> Option<Coord> {
    let column: usize = usize::from(column).checked_sub(GRID_LEFT)?;
    let row: usize = usize::from(row).checked_sub(GRID_TOP)?;
    let col: usize = column / CELL_WIDTH;
    if row < grid_size && col < grid_size {
        Some(Coord::new(row, col))
    } else {
        None
    }
}

/// Map a mouse event to a pointer event.
///
/// Only the left button is used. Releasing the button anywhere ends the selection.
pub fn map_mouse(mouse: MouseEvent, grid_size: usize) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_at(mouse.column, mouse.row, grid_size).map(InputEvent::CellPointerDown)
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            cell_at(mouse.column, mouse.row, grid_size).map(InputEvent::CellPointerOver)
        }
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp),
        _ => None,
    }
}

/// Whether the key quits the application. `q` is not included so the player can type it.
pub fn is_interrupt(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Whether the key quits the application, outside the sign-in form.
pub fn is_quit(key: KeyEvent) -> bool {
    is_interrupt(key) || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Update the player name with the key.
pub fn edit_name(name: &mut String, key: KeyEvent) -> NameInput {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return NameInput::Ignored;
    }
    match key.code {
        KeyCode::Enter => NameInput::Submit,
        KeyCode::Backspace => {
            if name.pop().is_some() {
                NameInput::Edited
            } else {
                NameInput::Ignored
            }
        }
        KeyCode::Char(c)
            if !c.is_control() && name.chars().count() < MAX_NAME_LEN =>
        {
            name.push(c);
            NameInput::Edited
        }
        _ => NameInput::Ignored,
    }
}
