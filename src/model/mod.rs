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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: songs as
//! served by the playlist service, pages of songs, sort configuration and
//! transient status messages. The per-region view state machines live in
//! the sub-modules.

pub(crate) mod charts;
pub(crate) mod page_list;
pub(crate) mod search;

use std::{
    cmp::Ordering,
    time::{Duration, Instant},
};

use serde::Deserialize;

/// How long a status message stays visible before it is cleared.
const STATUS_LIFETIME: Duration = Duration::from_millis(3000);

/// A single track record as served by the playlist service.
///
/// All attributes except `star_rating` are immutable; the rating is only
/// ever changed through a confirmed rating update.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Song {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) danceability: f64,
    pub(crate) energy: f64,
    pub(crate) acousticness: f64,
    pub(crate) tempo: f64,
    pub(crate) duration_ms: u64,
    /// Precomputed duration in seconds, when the service provides one.
    #[serde(default)]
    pub(crate) duration_s: Option<f64>,
    #[serde(default)]
    pub(crate) star_rating: Option<u8>,
}

impl Song {
    /// The rating to display, treating an absent rating as zero stars.
    pub(crate) fn rating(&self) -> u8 {
        self.star_rating.unwrap_or(0)
    }
}

/// One server-paginated slice of the song collection.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SongPage {
    pub(crate) songs: Vec<Song>,
    pub(crate) total: u64,
    #[allow(dead_code)]
    pub(crate) page: u64,
    #[allow(dead_code)]
    pub(crate) size: u64,
    pub(crate) total_pages: u64,
}

/// The number of pages needed to hold `total` songs at `size` per page.
pub(crate) fn page_count(total: u64, size: u64) -> u64 {
    total.div_ceil(size)
}

/// A sortable column of the song table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortKey {
    Title,
    Danceability,
    Energy,
    Acousticness,
    Tempo,
    Duration,
}

impl SortKey {
    /// Compares two songs on this column with standard ordering.
    pub(crate) fn compare(&self, a: &Song, b: &Song) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Danceability => a.danceability.total_cmp(&b.danceability),
            SortKey::Energy => a.energy.total_cmp(&b.energy),
            SortKey::Acousticness => a.acousticness.total_cmp(&b.acousticness),
            SortKey::Tempo => a.tempo.total_cmp(&b.tempo),
            SortKey::Duration => a.duration_ms.cmp(&b.duration_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortDirection {
    Ascending,
    Descending,
}

/// The kind of a transient status message, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
    Success,
    Error,
}

/// A transient status message with a fixed visible lifetime.
///
/// Only one message is visible at a time; raising a new one supersedes any
/// pending message.
#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) kind: MessageKind,
    raised_at: Instant,
}

impl StatusMessage {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Success)
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            raised_at: Instant::now(),
        }
    }

    /// True once the message has outlived its 3-second display window.
    pub(crate) fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= STATUS_LIFETIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, title: &str) -> Song {
        Song {
            id: id.to_string(),
            title: title.to_string(),
            danceability: 0.5,
            energy: 0.5,
            acousticness: 0.5,
            tempo: 120.0,
            duration_ms: 200_000,
            duration_s: None,
            star_rating: None,
        }
    }

    #[test]
    fn page_count_is_ceiling_division() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 7), 14);

        for size in 1..=25u64 {
            for total in 0..=200u64 {
                let pages = page_count(total, size);
                assert!(pages * size >= total);
                assert!(pages == 0 || (pages - 1) * size < total);
            }
        }
    }

    #[test]
    fn sort_key_compares_titles_lexically() {
        let a = song("1", "Abbey Road");
        let b = song("2", "Zoo Station");
        assert_eq!(SortKey::Title.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Title.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn absent_rating_displays_as_zero() {
        assert_eq!(song("1", "x").rating(), 0);
    }

    #[test]
    fn fresh_message_is_not_expired() {
        let msg = StatusMessage::success("ok");
        assert!(!msg.is_expired());
    }

    #[test]
    fn message_expires_after_lifetime() {
        let mut msg = StatusMessage::error("boom");
        msg.raised_at = Instant::now() - Duration::from_millis(3001);
        assert!(msg.is_expired());
    }
}
