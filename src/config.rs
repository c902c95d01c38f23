/*
config.rs

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

//! Build-time settings.

use std::env;
use std::path::PathBuf;

/// Application name. Also used as the name of the data directory.
pub const APPLICATION_NAME: &str = "wordgrid";

pub const COPYRIGHT_NOTICE: &str = "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of rows and columns of the letter grid.
pub const GRID_SIZE: usize = 15;

/// Number of random positions tried for a word before the word is dropped from the grid.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Points for each word of the main list.
pub const PRIMARY_WORD_POINTS: u32 = 100;

/// Points for each hidden word.
pub const HIDDEN_WORD_BONUS: u32 = 500;

/// Minimum wait between the end of a game and the start of the next one.
pub const COOLDOWN_HOURS: i64 = 24;

/// Store key for the time of the last completed game.
pub const LAST_GAME_TIME_KEY: &str = "lastGameTime";

/// Name of the JSON file that backs the persistent store.
pub const STORE_FILE: &str = "store.json";

/// Name of the log file, in the data directory, used while the game runs.
pub const LOG_FILE: &str = "wordgrid.log";

/// Return the directory where Wordgrid keeps its data.
///
/// Follow the XDG convention: `$XDG_DATA_HOME/wordgrid`, or `$HOME/.local/share/wordgrid` when
/// `XDG_DATA_HOME` is not set. Return None when neither variable is available.
pub fn user_data_dir() -> Option<PathBuf> {
    let mut dir: PathBuf = match env::var_os("XDG_DATA_HOME") {
        Some(d) if !d.is_empty() => PathBuf::from(d),
        _ => {
            let mut home: PathBuf = PathBuf::from(env::var_os("HOME")?);
            home.push(".local");
            home.push("share");
            home
        }
    };
    dir.push(APPLICATION_NAME);
    Some(dir)
}
