/*
selection.rs

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

//! Cells that the player is dragging across.
//!
//! A selection starts when the player presses the mouse button (or touches the screen) over a
//! cell, grows while the pointer moves over other cells, and ends when the button is released.
//! The tracker does not verify that the cells are adjacent or form a straight line. Only the
//! letters they spell matter.

use crate::generator::grid::Coord;

/// Ordered list of the selected cells.
#[derive(Debug, Default, Clone)]
pub struct SelectionTracker {
    /// Selected cells, in selection order.
    cells: Vec<Coord>,

    /// Whether a drag gesture is in progress.
    active: bool,
}

impl SelectionTracker {
    /// Create a [`SelectionTracker`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection with the given cell.
    pub fn begin(&mut self, cell: Coord) {
        self.cells.clear();
        self.cells.push(cell);
        self.active = true;
    }

    /// Add a cell to the selection.
    ///
    /// The cell is ignored when it is the last selected cell, because the pointer is still over
    /// that cell. Cells selected earlier can be added again.
    /// Nothing happens if no selection is in progress.
    pub fn extend(&mut self, cell: Coord) {
        if !self.active || self.cells.last() == Some(&cell) {
            return;
        }
        self.cells.push(cell);
    }

    /// Return the selected cells.
    pub fn current(&self) -> &[Coord] {
        &self.cells
    }

    /// Remove all the cells from the selection and end the gesture.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.active = false;
    }

    /// Whether a drag gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the cell is part of the selection. Used to highlight the cell.
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// Return the number of selected cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_cell_is_recorded_once() {
        let mut selection: SelectionTracker = SelectionTracker::new();
        selection.begin(Coord::new(1, 1));
        for _ in 0..10 {
            selection.extend(Coord::new(1, 1));
        }
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn earlier_cells_can_be_revisited() {
        let mut selection: SelectionTracker = SelectionTracker::new();
        selection.begin(Coord::new(0, 0));
        selection.extend(Coord::new(0, 1));
        selection.extend(Coord::new(0, 1));
        selection.extend(Coord::new(0, 0));

        assert_eq!(
            selection.current(),
            [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 0)]
        );
    }

    #[test]
    fn no_straight_line_constraint() {
        let mut selection: SelectionTracker = SelectionTracker::new();
        selection.begin(Coord::new(0, 0));
        selection.extend(Coord::new(3, 4));
        selection.extend(Coord::new(1, 0));

        assert_eq!(selection.len(), 3);
        assert!(selection.contains(Coord::new(3, 4)));
        assert!(!selection.contains(Coord::new(4, 3)));
    }

    #[test]
    fn begin_restarts_the_selection() {
        let mut selection: SelectionTracker = SelectionTracker::new();
        selection.begin(Coord::new(0, 0));
        selection.extend(Coord::new(0, 1));
        selection.begin(Coord::new(2, 2));

        assert_eq!(selection.current(), [Coord::new(2, 2)]);
        assert!(selection.is_active());
    }

    #[test]
    fn hovering_without_gesture_is_ignored() {
        let mut selection: SelectionTracker = SelectionTracker::new();
        selection.extend(Coord::new(0, 1));
        assert!(selection.is_empty());

        selection.begin(Coord::new(0, 0));
        selection.clear();
        selection.extend(Coord::new(0, 1));
        assert!(selection.is_empty());
        assert!(!selection.is_active());
    }
}
