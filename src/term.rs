/*
term.rs

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

//! Play Wordgrid in the terminal.
//!
//! The front-end is a loop that polls terminal events with a one-second timeout, so the game
//! clock and the cooldown countdown refresh even when the player does not move the mouse.
//! It renders the state of the [`WordgridApplication`] object and forwards the mouse events to
//! it. The core never schedules anything on its own.

pub mod input;
pub mod renderer;
pub mod view;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::time::{Duration, Instant};

use crate::application::{StartError, WordgridApplication};
use crate::cli_options::PlayOptions;
use crate::clock::{Clock, SystemClock};
use crate::cooldown::GateState;
use crate::game::Summary;
use crate::generator::grid::Coord;
use crate::generator::word_set::{Category, WordSet};
use crate::generator::word_lists::{HIDDEN_WORDS, PRIMARY_WORDS};
use crate::matcher::MatchOutcome;
use crate::saver::last_game::SaverLastGame;
use crate::saver::store::{JsonFileStore, MemoryStore, Store};
use input::NameInput;
use renderer::{Frame, TerminalRenderer};
use view::{FoundCells, PlayView};

/// Terminal row of the first row of the grid.
pub const GRID_TOP: usize = 2;

/// Terminal column of the first column of the grid.
pub const GRID_LEFT: usize = 2;

/// Number of terminal columns for each grid cell.
pub const CELL_WIDTH: usize = 3;

/// Refresh period of the clocks.
const TICK: Duration = Duration::from_secs(1);

/// How long the messages announcing the found words stay on the screen.
const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Screens of the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    SignIn,
    Cooldown,
    Playing,
    Summary(Summary),
}

/// Whether the loop continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// State of the front-end. The game state stays in the [`WordgridApplication`] object.
struct FrontEnd {
    screen: Screen,

    /// Player name, as typed in the sign-in form.
    name: String,

    /// Error message for the sign-in form.
    error: Option<String>,

    found_cells: FoundCells,

    /// Message about the last found word, and when it was displayed.
    flash: Option<(String, Instant)>,
}

impl FrontEnd {
    fn new<C: Clock, R: Rng>(app: &WordgridApplication<C, R>) -> Self {
        let screen: Screen = if app.check_cooldown().allowed {
            Screen::SignIn
        } else {
            Screen::Cooldown
        };
        Self {
            screen,
            name: String::new(),
            error: None,
            found_cells: FoundCells::new(),
            flash: None,
        }
    }

    /// Update the screen on clock ticks.
    fn refresh<C: Clock, R: Rng>(&mut self, app: &WordgridApplication<C, R>) {
        if self.screen == Screen::Cooldown && app.check_cooldown().allowed {
            debug!("End of the cooldown period");
            self.screen = Screen::SignIn;
        }
        if self
            .flash
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed() >= FLASH_DURATION)
        {
            self.flash = None;
        }
    }

    fn render<C: Clock, R: Rng>(&self, app: &WordgridApplication<C, R>) -> Frame {
        match &self.screen {
            Screen::SignIn => view::sign_in(&self.name, self.error.as_deref()),
            Screen::Cooldown => view::cooldown(&app.check_cooldown().remaining_hms()),
            Screen::Playing => match app.game() {
                Some(game) => {
                    let clock: String = app.tick().unwrap_or_default();
                    view::playing(&PlayView {
                        game,
                        selection: app.selection(),
                        found_cells: &self.found_cells,
                        player: app.player(),
                        clock: &clock,
                        flash: self.flash.as_ref().map(|(msg, _)| msg.as_str()),
                    })
                }
                None => view::sign_in(&self.name, None),
            },
            Screen::Summary(summary) => {
                let state: GateState = app.check_cooldown();
                let remaining: Option<String> =
                    (!state.allowed).then(|| state.remaining_hms());
                view::summary(summary, remaining.as_deref())
            }
        }
    }

    fn handle_key<C: Clock, R: Rng>(
        &mut self,
        app: &mut WordgridApplication<C, R>,
        key: KeyEvent,
    ) -> Flow {
        if self.screen == Screen::SignIn {
            if input::is_interrupt(key) {
                return Flow::Quit;
            }
            if input::edit_name(&mut self.name, key) == NameInput::Submit {
                self.start(app);
            }
            return Flow::Continue;
        }

        if input::is_quit(key) {
            return Flow::Quit;
        }
        match key.code {
            KeyCode::Char('e') | KeyCode::Char('E') if self.screen == Screen::Playing => {
                if let Some(summary) = app.end_game() {
                    debug!("Game ended by the player");
                    self.screen = Screen::Summary(summary);
                }
            }
            KeyCode::Enter if matches!(self.screen, Screen::Summary(_)) => {
                self.screen = if app.check_cooldown().allowed {
                    Screen::SignIn
                } else {
                    Screen::Cooldown
                };
            }
            _ => (),
        }
        Flow::Continue
    }

    fn start<C: Clock, R: Rng>(&mut self, app: &mut WordgridApplication<C, R>) {
        match app.start_game(&self.name) {
            Ok(()) => {
                self.error = None;
                self.flash = None;
                self.found_cells.clear();
                self.screen = Screen::Playing;
                // The game is already over when there is no word to find
                if !app.is_playing()
                    && let Some(summary) = app.end_game()
                {
                    self.screen = Screen::Summary(summary);
                }
            }
            Err(StartError::Cooldown { .. }) => {
                self.error = None;
                self.screen = Screen::Cooldown;
            }
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    fn handle_mouse<C: Clock, R: Rng>(
        &mut self,
        app: &mut WordgridApplication<C, R>,
        mouse: MouseEvent,
    ) {
        if self.screen != Screen::Playing {
            return;
        }
        let Some(size) = app.game().map(|g| g.grid().size()) else {
            return;
        };
        let Some(event) = input::map_mouse(mouse, size) else {
            return;
        };

        // The selection is cleared once evaluated
        let cells: Vec<Coord> = app.selection().current().to_vec();
        let Some(outcome) = app.handle_event(event) else {
            return;
        };
        let message: String = match &outcome {
            MatchOutcome::PrimaryWordFound(word) => {
                self.mark_found(&cells, Category::Primary);
                format!("Found {word}! +{} points", outcome.points())
            }
            MatchOutcome::HiddenWordFound(word) => {
                self.mark_found(&cells, Category::Hidden);
                format!("Hidden Word Found: {word}! +{} points!", outcome.points())
            }
            MatchOutcome::NoMatch => return,
        };
        self.flash = Some((message, Instant::now()));

        if app.game().is_some_and(|g| g.is_solved())
            && let Some(summary) = app.end_game()
        {
            self.screen = Screen::Summary(summary);
        }
    }

    fn mark_found(&mut self, cells: &[Coord], category: Category) {
        for cell in cells {
            // Cells of hidden words keep their color when crossed by a primary word
            let entry: &mut Category = self.found_cells.entry(*cell).or_insert(category);
            if category == Category::Hidden {
                *entry = category;
            }
        }
    }
}

/// Build the store for the time of the last game.
fn open_store(options: &PlayOptions) -> Box<dyn Store> {
    match &options.data_dir {
        Some(dir) => {
            let store: JsonFileStore = JsonFileStore::new(dir.clone());
            debug!("Using store file {}", store.path().display());
            Box::new(store)
        }
        None => {
            debug!("No data directory: the time of the last game is not kept");
            Box::new(MemoryStore::new())
        }
    }
}

/// Start the game in the terminal and return when the player quits.
pub fn run(options: &PlayOptions) -> Result<(), Box<dyn Error>> {
    let rng: StdRng = match options.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let word_set: WordSet = WordSet::new(PRIMARY_WORDS, HIDDEN_WORDS, options.grid_size);
    let mut app = WordgridApplication::new(
        word_set,
        SaverLastGame::new(open_store(options)),
        SystemClock,
        rng,
    );

    let mut renderer: TerminalRenderer = TerminalRenderer::new();
    renderer.enter()?;
    let result: Result<(), Box<dyn Error>> = event_loop(&mut renderer, &mut app);
    // Restore the terminal before reporting the error
    let restored = renderer.exit();
    result?;
    restored?;
    Ok(())
}

fn event_loop<C: Clock, R: Rng>(
    renderer: &mut TerminalRenderer,
    app: &mut WordgridApplication<C, R>,
) -> Result<(), Box<dyn Error>> {
    let mut ui: FrontEnd = FrontEnd::new(app);
    loop {
        ui.refresh(app);
        renderer.draw(&ui.render(app))?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ui.handle_key(app, key) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => ui.handle_mouse(app, mouse),
            Event::Resize(_, _) => renderer.invalidate(),
            _ => (),
        }
    }
}
