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

//! Application configuration.
//!
//! The configuration file holds the playlist service address and the page
//! size; the `PLAYDECK_API_URL` environment variable overrides the stored
//! address for one session.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "playdeck";

const API_URL_ENV: &str = "PLAYDECK_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8000";

const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub api_url: String,
    pub page_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn load_config() -> AppConfig {
    let mut config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();

    if let Ok(url) = std::env::var(API_URL_ENV) {
        config.api_url = url;
    }
    if config.page_size == 0 {
        config.page_size = DEFAULT_PAGE_SIZE;
    }

    config
}
