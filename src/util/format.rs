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

//! Display formatting for track attributes.
//!
//! Audio features are unit-interval floats shown to three decimal places,
//! tempo is shown to one decimal place, and durations are shown as
//! `minutes:seconds` with zero-padded seconds.

/// Formats a track duration in milliseconds as an `M:SS` string.
///
/// Seconds are truncated, not rounded, so `125000` formats as `2:05` and
/// `3999` as `0:03`.
pub(crate) fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Formats a unit-interval audio feature (danceability, energy,
/// acousticness) to three decimal places.
pub(crate) fn format_feature(value: f64) -> String {
    format!("{:.3}", value)
}

/// Formats a tempo in beats per minute to one decimal place.
pub(crate) fn format_tempo(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pads_seconds() {
        assert_eq!(format_duration(125000), "2:05");
        assert_eq!(format_duration(3000), "0:03");
    }

    #[test]
    fn duration_truncates_fractional_seconds() {
        assert_eq!(format_duration(3999), "0:03");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn duration_minutes_are_not_padded() {
        assert_eq!(format_duration(754000), "12:34");
    }

    #[test]
    fn feature_three_decimals() {
        assert_eq!(format_feature(0.5), "0.500");
        assert_eq!(format_feature(0.1234), "0.123");
    }

    #[test]
    fn tempo_one_decimal() {
        assert_eq!(format_tempo(120.0), "120.0");
        assert_eq!(format_tempo(97.46), "97.5");
    }
}
