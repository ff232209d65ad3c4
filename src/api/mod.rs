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

//! Remote access layer for the playlist service.
//!
//! All interaction with the service goes through [`ApiClient`], a thin
//! wrapper over a blocking `reqwest` client with a fixed request timeout.
//! Every operation is a single round trip; failures are classified into
//! [`ApiError`] and propagate to the caller untouched, with no retries.
//!
//! The client is only ever driven from the task worker thread, so blocking
//! I/O here never stalls the UI.

mod error;

pub(crate) use error::ApiError;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use serde::Serialize;

use crate::model::{Song, SongPage};

use self::error::classify_status;

/// Bound on every round trip to the service.
const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Serialize)]
struct RatingRequest<'a> {
    song_id: &'a str,
    rating: u8,
}

pub(crate) struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the service at `base_url` (no trailing slash).
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches one page of the song collection.
    pub(crate) fn fetch_page(&self, page: u64, size: u64) -> Result<SongPage, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/songs", self.base_url))
            .query(&[("page", page), ("size", size)])
            .send()?;

        Self::decode(Self::check(response)?)
    }

    /// Looks up a single song by title. A miss is [`ApiError::NotFound`].
    pub(crate) fn search_by_title(&self, title: &str) -> Result<Song, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/songs/search", self.base_url))
            .query(&[("title", title)])
            .send()?;

        Self::decode(Self::check(response)?)
    }

    /// Updates the star rating of a song and returns the updated record.
    pub(crate) fn update_rating(&self, song_id: &str, rating: u8) -> Result<Song, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/songs/rating", self.base_url))
            .json(&RatingRequest { song_id, rating })
            .send()?;

        Self::decode(Self::check(response)?)
    }

    /// Fetches the full collection as an opaque CSV byte stream.
    pub(crate) fn export_csv(&self) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/export/csv", self.base_url))
            .send()?;

        let bytes = Self::check(response)?.bytes()?;
        Ok(bytes.to_vec())
    }

    fn check(response: Response) -> Result<Response, ApiError> {
        match classify_status(response.status().as_u16()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json().map_err(ApiError::from)
    }
}
