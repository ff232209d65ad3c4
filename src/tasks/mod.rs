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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! network calls from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into playlist service calls
//! and broadcasts the results back to the application via `AppEvent`s.
//!
//! Only actions that may block belong here; pure state changes are handled
//! directly in the event loop.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{api::ApiClient, config::AppConfig, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Fetch one page of songs for the page-list region.
    FetchPage { page: u64, size: u64, seq: u64 },

    /// Look up a single song by exact title.
    Search { title: String, seq: u64 },

    /// Persist a star rating for a song.
    RateSong { song_id: String, rating: u8 },

    /// Fetch the full collection once for the charts cache.
    FetchAllSongs,

    /// Download the CSV export and save it next to the working directory.
    ExportCsv,
}

pub(crate) struct TaskContext<'a> {
    api: &'a ApiClient,
    event_tx: &'a Sender<AppEvent>,
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns its own HTTP client and blocks on the task channel;
/// every completed task is reported back through the event channel,
/// carrying the outcome for the region that requested it.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let api_url = config.api_url.clone();

    thread::spawn(move || {
        let api = ApiClient::new(&api_url).expect("Failed to initialise API client");

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                api: &api,
                event_tx: &event_tx,
            };

            // A send failure means the UI is gone; stop the worker.
            if handle_task(task, &mut ctx).is_err() {
                break;
            }
        }
    });
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::FetchPage { page, size, seq } => handlers::fetch_page(ctx, page, size, seq),
        AppTask::Search { title, seq } => handlers::search(ctx, &title, seq),
        AppTask::RateSong { song_id, rating } => handlers::rate_song(ctx, song_id, rating),
        AppTask::FetchAllSongs => handlers::fetch_all_songs(ctx),
        AppTask::ExportCsv => handlers::export_csv(ctx),
    }
}
