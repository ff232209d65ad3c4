// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Dashboard TUI.
//!
//! A terminal dashboard for a remote playlist service: lists, searches,
//! sorts, paginates, rates, charts and exports a collection of music
//! tracks.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** performs the blocking HTTP calls against the
//!   playlist service via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the UI and the background worker is handled via
//! `std::sync::mpsc` channels; all view state is owned by the main thread
//! and mutated only inside the event loop.

mod api;
mod components;
mod config;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::{SearchBar, SongTableState},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        Song, StatusMessage,
        charts::ChartCache,
        page_list::PageList,
        search::Search,
    },
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, PartialEq)]
enum MainView {
    Songs,
    Charts,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub page_list: PageList,
    pub search: Search,
    pub charts: ChartCache,
    pub status: Option<StatusMessage>,

    pub search_bar: SearchBar,
    pub song_table: SongTableState,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let page_list = PageList::new(config.page_size);

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Songs,
            event_tx,
            event_rx,
            task_tx,
            page_list,
            search: Search::new(),
            charts: ChartCache::new(),
            status: None,
            search_bar: SearchBar::new(),
            song_table: SongTableState::new(),
        }
    }

    /// Starts loading `page`, forwarding the sequenced fetch to the worker.
    pub fn request_page(&mut self, page: u64) -> Result<()> {
        let seq = self.page_list.begin_load(page);
        self.task_tx.send(AppTask::FetchPage {
            page,
            size: self.page_list.size,
            seq,
        })?;
        Ok(())
    }

    /// Shows a status message, superseding any pending one.
    pub fn raise(&mut self, message: StatusMessage) {
        self.status = Some(message);
    }

    /// Clears the status message once its display window has passed.
    pub fn expire_status(&mut self) {
        if self.status.as_ref().is_some_and(|m| m.is_expired()) {
            self.status = None;
        }
    }

    /// The song under the table cursor, if any.
    pub fn selected_song(&self) -> Option<&Song> {
        let songs = &self.page_list.songs;
        self.song_table
            .selected(songs.len())
            .and_then(|i| songs.get(i))
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Enables raw mode to capture all keyboard input and switches the
/// terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and ensures the
/// cursor is made visible again. It is "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event
/// loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s against the
///   playlist service.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes and expire status
///   messages.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if tx_tick.send(AppEvent::Tick).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the first page of the song list
    app.request_page(1)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
