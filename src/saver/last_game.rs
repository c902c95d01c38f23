/*
last_game.rs

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

//! Save and restore the time of the last completed game.
//!
//! The time is saved under the [`LAST_GAME_TIME_KEY`] key as the number of milliseconds since
//! the Unix epoch.
//! Storage errors never prevent the player from playing: when the time cannot be read, the
//! player is considered to have never completed a game, and when it cannot be saved, the error
//! is only logged.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::store::Store;
use crate::config::LAST_GAME_TIME_KEY;

/// Object to save and restore the time of the last completed game.
pub struct SaverLastGame {
    store: Box<dyn Store>,
}

impl SaverLastGame {
    /// Create a [`SaverLastGame`] object that uses the given store.
    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store }
    }

    /// Retrieve the time of the last completed game.
    ///
    /// Return None if no game was completed, or if the time cannot be read.
    pub fn get_last_game_time(&self) -> Option<DateTime<Utc>> {
        let value: String = match self.store.get(LAST_GAME_TIME_KEY) {
            Ok(Some(v)) => v,
            Ok(None) => {
                debug!("No previous game");
                return None;
            }
            Err(error) => {
                warn!("Storage access not available: {error}");
                return None;
            }
        };

        let when: Option<DateTime<Utc>> = value
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);
        if when.is_none() {
            warn!("Ignoring invalid {LAST_GAME_TIME_KEY} value {value:?}");
        }
        when
    }

    /// Save the time of the last completed game. Errors are logged and ignored.
    pub fn save_last_game_time(&mut self, when: DateTime<Utc>) {
        let value: String = when.timestamp_millis().to_string();
        match self.store.set(LAST_GAME_TIME_KEY, &value) {
            Ok(()) => debug!("Saved {LAST_GAME_TIME_KEY} = {value}"),
            Err(error) => warn!("Cannot save the time of the game: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saver::store::{MemoryStore, StoreError};
    use rstest::rstest;

    /// Store that always fails.
    struct UnavailableStore;

    impl Store for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: "unavailable".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            self.get(key).map(|_| ())
        }
    }

    #[test]
    fn save_and_restore() {
        let mut saver: SaverLastGame = SaverLastGame::new(Box::new(MemoryStore::new()));
        assert_eq!(saver.get_last_game_time(), None);

        let when: DateTime<Utc> = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        saver.save_last_game_time(when);
        assert_eq!(saver.get_last_game_time(), Some(when));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("12.5")]
    #[case("99999999999999999999")]
    fn invalid_values_are_ignored(#[case] value: &str) {
        let mut store: MemoryStore = MemoryStore::new();
        store.set(LAST_GAME_TIME_KEY, value).unwrap();
        let saver: SaverLastGame = SaverLastGame::new(Box::new(store));

        assert_eq!(saver.get_last_game_time(), None);
    }

    #[test]
    fn unavailable_storage_fails_open() {
        let mut saver: SaverLastGame = SaverLastGame::new(Box::new(UnavailableStore));

        saver.save_last_game_time(Utc::now());
        assert_eq!(saver.get_last_game_time(), None);
    }
}
