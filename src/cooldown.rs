/*
cooldown.rs

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

//! Wait period between two games.
//!
//! After completing (or ending) a game, the player must wait [`COOLDOWN_HOURS`] before starting
//! a new one. [`CooldownGate::can_start`] only computes the gate state from the time of the last
//! completed game: reading and saving that time is the job of [`crate::saver::last_game`].

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::COOLDOWN_HOURS;

/// Whether a game can start, and how long to wait otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    /// Whether a new game can start now.
    pub allowed: bool,

    /// Time to wait before a new game can start. Zero when [`GateState::allowed`] is `true`.
    pub remaining: TimeDelta,
}

impl GateState {
    /// State of an open gate.
    pub fn open() -> Self {
        Self {
            allowed: true,
            remaining: TimeDelta::zero(),
        }
    }

    /// Return the remaining time as `HH:MM:SS`.
    pub fn remaining_hms(&self) -> String {
        format_hms(self.remaining)
    }
}

/// [`CooldownGate`] object.
#[derive(Debug, Clone, Copy)]
pub struct CooldownGate {
    /// Wait period.
    cooldown: TimeDelta,
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(TimeDelta::hours(COOLDOWN_HOURS))
    }
}

impl CooldownGate {
    /// Create a [`CooldownGate`] object with the given wait period.
    pub fn new(cooldown: TimeDelta) -> Self {
        Self { cooldown }
    }

    /// Return the wait period.
    pub fn cooldown(&self) -> TimeDelta {
        self.cooldown
    }

    /// Compute whether a game can start at `now`.
    ///
    /// `last_completion` is None when no game has been completed yet, or when the time of the
    /// last game could not be read. In both cases the gate is open.
    /// A completion time in the future (the system clock moved backward) counts as a game that
    /// just ended.
    pub fn can_start(
        &self,
        last_completion: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> GateState {
        let Some(last) = last_completion else {
            return GateState::open();
        };
        let elapsed: TimeDelta = (now - last).max(TimeDelta::zero());
        if elapsed >= self.cooldown {
            GateState::open()
        } else {
            GateState {
                allowed: false,
                remaining: self.cooldown - elapsed,
            }
        }
    }
}

/// Format a duration as `HH:MM:SS`. Negative durations are shown as `00:00:00`.
///
/// The number of hours is not limited to two digits.
pub fn format_hms(duration: TimeDelta) -> String {
    let secs: i64 = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
