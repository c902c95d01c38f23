/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Wordgrid starts the game in the terminal.
//! The other options are intended for developers tuning the word lists and the grid size.
//!
//! # Examples
//!
//! List the words that the player must find:
//!
//! ```text
//! $ wordgrid --ls
//! ALTCOIN
//! AVALANCHE
//! BEARISH
//! ...
//! ```
//!
//! Generate three boards with a fixed seed, and print some placement statistics:
//!
//! ```text
//! $ wordgrid --print 3 --seed 42 --summary
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{COPYRIGHT_NOTICE, GRID_SIZE, LOG_FILE, user_data_dir};
use crate::generator::board::{Board, BoardGenerator};
use crate::generator::word_set::WordSet;

/// Find the hidden words in a grid of letters.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the words to find
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Generate and print the given number of boards
    #[arg(short, long, value_name = "COUNT")]
    print: Option<usize>,

    /// Print some statistics after generating the boards
    #[arg(short, long, default_value_t = false, requires = "print")]
    summary: bool,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rows and columns of the grid
    #[arg(short, long, default_value_t = GRID_SIZE, value_parser = parse_grid_size)]
    grid_size: usize,

    /// Directory where the time of the last game is stored
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Verify that the grid size is between 1 and 26.
fn parse_grid_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (1..=26).contains(&size) {
        Ok(size)
    } else {
        Err(String::from("the grid size must be between 1 and 26"))
    }
}

/// Options for playing a game in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub grid_size: usize,
    /// Data directory. None when no directory can be found, in which case nothing persists
    /// between runs.
    pub data_dir: Option<PathBuf>,
}

/// What to do after processing the command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exit with the given status code.
    Exit(u8),
    /// Start the game.
    Play(PlayOptions),
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    let data_dir: Option<PathBuf> = args.data_dir.clone().or_else(user_data_dir);
    init_logger(log_dir(&args, data_dir.as_deref()).as_deref());

    let word_set: WordSet = WordSet::default();

    //
    // List the words
    //
    if args.ls {
        for word in word_set.sorted_primary() {
            println!("{word}");
        }
        return Command::Exit(0);
    }

    if let Some(count) = args.print {
        print_boards(&word_set, count, args.grid_size, args.seed, args.summary);
        return Command::Exit(0);
    }

    Command::Play(PlayOptions {
        seed: args.seed,
        grid_size: args.grid_size,
        data_dir,
    })
}

/// Return the directory of the log file, or None when the messages go to stderr.
///
/// The game screens use the whole terminal, so while playing the messages are written to a
/// file in the data directory, or in the temporary directory when there is no data directory.
fn log_dir(args: &Args, data_dir: Option<&Path>) -> Option<PathBuf> {
    if args.ls || args.print.is_some() {
        return None;
    }
    Some(data_dir.map_or_else(env::temp_dir, Path::to_path_buf))
}

/// Open the log file for appending.
fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
}

/// Initialize env_logger. Without a log directory, messages go to stderr.
fn init_logger(log_dir: Option<&Path>) {
    let mut builder: env_logger::Builder = env_logger::Builder::from_default_env();
    if let Some(dir) = log_dir {
        match open_log_file(dir) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(error) => {
                eprintln!("Cannot open the log file in {}: {error}", dir.display());
                builder.filter_level(LevelFilter::Off);
            }
        }
    }
    builder.init();
}

/// Generate and print boards, followed by their dropped words.
fn print_boards(
    word_set: &WordSet,
    count: usize,
    grid_size: usize,
    seed: Option<u64>,
    summary: bool,
) {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let generator: BoardGenerator = BoardGenerator::new();

    let mut attempts: usize = 0;
    let mut max_attempts: usize = 0;
    let mut dropped: usize = 0;
    let mut complete: usize = 0;
    for i in 0..count {
        debug!("Board {i}");
        let board: Board = generator.generate(word_set, grid_size, &mut rng);

        println!("{}", board.grid);
        for (word, category) in &board.dropped {
            println!("Dropped {category:?} word {word}");
        }
        println!();

        attempts += board.attempts;
        max_attempts = max_attempts.max(board.attempts);
        dropped += board.dropped.len();
        if board.dropped.is_empty() {
            complete += 1;
        }
    }

    // Print some stats
    if summary && count > 0 {
        println!(
            "
          boards = {}
  complete boards = {}
    dropped words = {}
 average attempts = {}
     max attempts = {}",
            count,
            complete,
            dropped,
            attempts / count,
            max_attempts
        );
    }
}
