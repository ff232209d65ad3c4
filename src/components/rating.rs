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

//! The five-star rating widget.

const MAX_STARS: u8 = 5;

/// Renders a rating as exactly five star symbols.
///
/// Stars at or below the rating are filled; ratings above five clamp to a
/// full row rather than widening the widget.
pub(crate) fn rating_stars(rating: u8) -> String {
    (1..=MAX_STARS)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}
