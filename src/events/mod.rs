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

//! Application event distribution and orchestration.
//!
//! The event loop is the single owner of all mutable view state: key
//! events, task completions and ticks arrive on one mpsc channel, are
//! applied to the [`App`] regions, and the UI is re-drawn after every
//! event. Presentation components never mutate state directly; they raise
//! events or tasks that pass through here.

mod key_handlers;


use std::{io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    api::ApiError,
    model::{Song, SongPage, StatusMessage, search::SearchState},
    render::draw,
    tasks::AppTask,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// The search bar submitted its current text.
    SearchSubmitted(String),

    /// A page fetch finished; `seq` identifies the request it answers.
    PageLoaded {
        seq: u64,
        result: Result<SongPage, ApiError>,
    },

    /// A title search finished; `seq` identifies the request it answers.
    SearchCompleted {
        seq: u64,
        result: Result<Song, ApiError>,
    },

    /// The service confirmed (or rejected) a rating update.
    RatingUpdated {
        song_id: String,
        rating: u8,
        result: Result<(), ApiError>,
    },

    /// The one-shot full-collection fetch for the charts finished.
    AllSongsLoaded {
        result: Result<Vec<Song>, ApiError>,
    },

    /// The CSV export finished, successfully or with a detail message.
    CsvExported(Result<PathBuf, String>),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// Loops until a quit event is received or the event channel is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        apply_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies one event to the application state.
///
/// Separate from the render loop so state transitions can be exercised
/// without a terminal.
fn apply_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,

        AppEvent::SearchSubmitted(query) => submit_search(app, query)?,

        AppEvent::PageLoaded { seq, result } => {
            app.page_list.complete_load(seq, result);
        }

        AppEvent::SearchCompleted { seq, result } => {
            if app.search.complete(seq, result) {
                raise_search_outcome(app);
            }
        }

        AppEvent::RatingUpdated {
            song_id,
            rating,
            result,
        } => match result {
            Ok(()) => {
                app.page_list.patch_rating(&song_id, rating);
                app.search.patch_rating(&song_id, rating);
                app.raise(StatusMessage::success("Rating updated successfully!"));
            }
            Err(e) => {
                app.raise(StatusMessage::error(format!(
                    "Failed to update rating: {}",
                    e
                )));
            }
        },

        AppEvent::AllSongsLoaded { result } => match result {
            Ok(songs) => app.charts.set_songs(songs),
            Err(e) => {
                app.charts.loading = false;
                app.raise(StatusMessage::error(format!(
                    "Failed to load all songs: {}",
                    e
                )));
            }
        },

        AppEvent::CsvExported(result) => match result {
            Ok(_) => app.raise(StatusMessage::success("CSV exported successfully!")),
            Err(detail) => {
                app.raise(StatusMessage::error(format!(
                    "Failed to export CSV: {}",
                    detail
                )));
            }
        },

        AppEvent::Tick => app.expire_status(),

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Dispatches a submitted search, or clears the result for a blank query.
fn submit_search(app: &mut App, query: String) -> Result<()> {
    let query = query.trim().to_string();
    if query.is_empty() {
        app.search.clear();
        return Ok(());
    }

    let seq = app.search.begin();
    app.task_tx.send(AppTask::Search { title: query, seq })?;
    Ok(())
}

/// Raises the status message matching the freshly applied search outcome.
fn raise_search_outcome(app: &mut App) {
    let message = match &app.search.state {
        SearchState::Found(_) => StatusMessage::success("Song found!"),
        SearchState::NotFound => StatusMessage::error("No song found with that title"),
        SearchState::Failed(detail) => {
            StatusMessage::error(format!("Error searching for song: {}", detail))
        }
        _ => return,
    };

    app.raise(message);
}
