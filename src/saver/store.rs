/*
store.rs

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

//! Key/value stores.
//!
//! [`JsonFileStore`] keeps the values in a JSON object, in a file of the user data directory.
//! [`MemoryStore`] keeps them in memory, for tests or when no data directory is available.

use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::STORE_FILE;

/// Type of errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file cannot be read or written.
    #[error("cannot access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The store file is not a valid JSON object of strings.
    #[error("invalid store file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistent key/value store.
pub trait Store {
    /// Return the value for the key, or None if the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set the value for the key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store that keeps the values in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty [`MemoryStore`] object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that keeps the values in a JSON file.
pub struct JsonFileStore {
    /// Absolute path to the store file.
    save_file: PathBuf,
}

impl JsonFileStore {
    /// Create a [`JsonFileStore`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the store file is saved.
    /// The directory is created on the first write.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(STORE_FILE);
        debug!("Store file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Return the path to the store file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Read all the values. A missing file is an empty store.
    fn read(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(BTreeMap::new()),
                _ => return Err(self.io_error(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| StoreError::Json {
            path: self.save_file.clone(),
            source,
        })
    }

    /// Replace the store file with the given values.
    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let file: File = File::create(&self.save_file).map_err(|e| self.io_error(e))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, values).map_err(|source| StoreError::Json {
            path: self.save_file.clone(),
            source,
        })?;
        writer.flush().map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.save_file.clone(),
            source,
        }
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values: BTreeMap<String, String> = match self.read() {
            Ok(v) => v,
            // A corrupt file is replaced
            Err(error @ StoreError::Json { .. }) => {
                warn!("Overwriting the store: {error}");
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }
}
