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

//! View state for the paginated song list.
//!
//! The page list is one of the two independent request regions: its
//! loading and failure states never touch the search region. Sorting is
//! local to the currently loaded page and resets whenever a new page
//! arrives.
//!
//! Every fetch carries a monotonic sequence number. A completion that does
//! not carry the most recently issued number is stale (a slower response
//! to an earlier navigation) and is discarded instead of overwriting
//! newer state.

use crate::{
    api::ApiError,
    model::{Song, SongPage, SortDirection, SortKey, page_count},
};

#[derive(Debug, PartialEq)]
pub(crate) enum PageListState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

pub(crate) struct PageList {
    pub(crate) state: PageListState,
    pub(crate) songs: Vec<Song>,
    pub(crate) page: u64,
    pub(crate) size: u64,
    pub(crate) total: u64,
    pub(crate) total_pages: u64,
    pub(crate) sort: Option<(SortKey, SortDirection)>,
    seq: u64,
}

impl PageList {
    pub(crate) fn new(size: u64) -> Self {
        Self {
            state: PageListState::Idle,
            songs: vec![],
            page: 1,
            size,
            total: 0,
            total_pages: 1,
            sort: None,
            seq: 0,
        }
    }

    /// Starts loading `page`, superseding any fetch still in flight.
    ///
    /// Returns the sequence number the eventual completion must carry.
    pub(crate) fn begin_load(&mut self, page: u64) -> u64 {
        self.state = PageListState::Loading;
        self.page = page;
        self.seq += 1;
        self.seq
    }

    /// Applies a fetch completion.
    ///
    /// Stale completions (not the most recently issued sequence number) are
    /// discarded; the return value reports whether the completion was
    /// applied. A fresh page arrives unsorted, so the sort configuration is
    /// reset.
    pub(crate) fn complete_load(&mut self, seq: u64, result: Result<SongPage, ApiError>) -> bool {
        if seq != self.seq {
            return false;
        }

        match result {
            Ok(page) => {
                self.songs = page.songs;
                self.total = page.total;
                // Trust the service's page count, deriving it only when a
                // degenerate payload omits it.
                self.total_pages = if page.total_pages > 0 {
                    page.total_pages
                } else {
                    page_count(page.total, self.size).max(1)
                };
                self.sort = None;
                self.state = PageListState::Loaded;
            }
            Err(e) => {
                self.state = PageListState::Error(format!("Failed to load songs: {}", e));
            }
        }

        true
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.state == PageListState::Loading
    }

    pub(crate) fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub(crate) fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Toggles sorting on `key`: a new column starts ascending, the active
    /// column flips direction.
    ///
    /// Re-orders only the loaded page in place, with a stable sort so ties
    /// keep their prior order. Server-derived fields are untouched.
    pub(crate) fn toggle_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some((active, SortDirection::Ascending)) if active == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some((key, direction));

        self.songs.sort_by(|a, b| {
            let ordering = key.compare(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    /// Patches the rating of every loaded row with the given id.
    ///
    /// Only called after the service confirmed the update; a failed update
    /// never reaches this point, leaving local state untouched.
    pub(crate) fn patch_rating(&mut self, song_id: &str, rating: u8) {
        for song in self.songs.iter_mut().filter(|s| s.id == song_id) {
            song.star_rating = Some(rating);
        }
    }
}

#[cfg(test)]
mod tests;
