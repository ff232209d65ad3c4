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

//! Task handler implementations.
//!
//! Each handler performs one blocking service call and reports the outcome
//! as an event. Handlers never interpret failures; classification happens
//! in the API layer and presentation happens in the event loop.

use std::{fs, path::PathBuf};

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::charts::CHART_FETCH_LIMIT,
    tasks::TaskContext,
};

/// Filename for the client-local CSV save.
const EXPORT_FILENAME: &str = "playlist_data.csv";

pub(super) fn fetch_page(ctx: &mut TaskContext, page: u64, size: u64, seq: u64) -> Result<()> {
    let result = ctx.api.fetch_page(page, size);
    ctx.event_tx.send(AppEvent::PageLoaded { seq, result })?;
    Ok(())
}

pub(super) fn search(ctx: &mut TaskContext, title: &str, seq: u64) -> Result<()> {
    let result = ctx.api.search_by_title(title);
    ctx.event_tx.send(AppEvent::SearchCompleted { seq, result })?;
    Ok(())
}

pub(super) fn rate_song(ctx: &mut TaskContext, song_id: String, rating: u8) -> Result<()> {
    // Write-then-patch: local state is only touched once the service
    // confirms, so a failure here leaves the displayed rating unchanged.
    let result = ctx.api.update_rating(&song_id, rating).map(|_| ());
    ctx.event_tx.send(AppEvent::RatingUpdated {
        song_id,
        rating,
        result,
    })?;
    Ok(())
}

pub(super) fn fetch_all_songs(ctx: &mut TaskContext) -> Result<()> {
    let result = ctx.api.fetch_page(1, CHART_FETCH_LIMIT).map(|page| page.songs);
    ctx.event_tx.send(AppEvent::AllSongsLoaded { result })?;
    Ok(())
}

pub(super) fn export_csv(ctx: &mut TaskContext) -> Result<()> {
    let result = ctx
        .api
        .export_csv()
        .map_err(|e| e.to_string())
        .and_then(|bytes| {
            fs::write(EXPORT_FILENAME, &bytes).map_err(|e| e.to_string())?;
            Ok(PathBuf::from(EXPORT_FILENAME))
        });

    ctx.event_tx.send(AppEvent::CsvExported(result))?;
    Ok(())
}
