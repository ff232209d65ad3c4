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

//! Reusable interactive UI components.
//!
//! Components are render-only with respect to application data: they own
//! transient widget state (cursor position, text buffer) and raise intents
//! through events, never mutating the domain models directly.

mod charts;
mod rating;
mod search_bar;
mod song_table;

pub(crate) use charts::draw_charts;
pub(crate) use rating::rating_stars;
pub(crate) use search_bar::SearchBar;
pub(crate) use song_table::{SongTableState, column_widths, draw_song_table, song_row};
