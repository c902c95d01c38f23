/*
clock.rs

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

//! Wall clock.
//!
//! The game reads the current time through the [`Clock`] trait so that tests can control it.

use chrono::{DateTime, TimeDelta, Utc};
use std::cell::Cell;

/// Source of the current time.
pub trait Clock {
    /// Return the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a [`FixedClock`] object set to the given time.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Set the clock.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Move the clock forward (or backward for negative values).
    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
