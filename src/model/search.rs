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

//! View state for the title search region.
//!
//! Search runs independently of the page list: a failed search never
//! disturbs the loaded page and a failed page load never clears a search
//! result. At most one result is held at a time, shown in its own panel.
//!
//! Like the page list, searches are sequenced so a slow response to an
//! earlier query cannot overwrite the result of a later one.

use crate::{api::ApiError, model::Song};

#[derive(Debug)]
pub(crate) enum SearchState {
    Idle,
    Loading,
    Found(Song),
    NotFound,
    Failed(String),
}

pub(crate) struct Search {
    pub(crate) state: SearchState,
    seq: u64,
}

impl Search {
    pub(crate) fn new() -> Self {
        Self {
            state: SearchState::Idle,
            seq: 0,
        }
    }

    /// Starts a new search, superseding any still in flight.
    pub(crate) fn begin(&mut self) -> u64 {
        self.state = SearchState::Loading;
        self.seq += 1;
        self.seq
    }

    /// Clears the result without issuing a request (empty query submitted).
    pub(crate) fn clear(&mut self) {
        self.state = SearchState::Idle;
        // Invalidate any in-flight search so its result is discarded.
        self.seq += 1;
    }

    /// Applies a search completion, discarding stale ones.
    pub(crate) fn complete(&mut self, seq: u64, result: Result<Song, ApiError>) -> bool {
        if seq != self.seq {
            return false;
        }

        self.state = match result {
            Ok(song) => SearchState::Found(song),
            Err(ApiError::NotFound) => SearchState::NotFound,
            Err(e) => SearchState::Failed(e.to_string()),
        };

        true
    }

    /// The found song, if the last search succeeded.
    pub(crate) fn result(&self) -> Option<&Song> {
        match &self.state {
            SearchState::Found(song) => Some(song),
            _ => None,
        }
    }

    /// Patches the result's rating after a confirmed update of `song_id`.
    pub(crate) fn patch_rating(&mut self, song_id: &str, rating: u8) {
        if let SearchState::Found(song) = &mut self.state
            && song.id == song_id
        {
            song.star_rating = Some(rating);
        }
    }
}

#[cfg(test)]
mod tests;
