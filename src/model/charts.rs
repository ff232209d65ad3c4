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

//! Histogram aggregation and the full-collection chart cache.
//!
//! Binning is half-open: a value lands in bucket `i` iff
//! `edges[i] <= value < edges[i+1]`. Values below the first edge or at or
//! above the last are excluded outright; there is no overflow bucket.
//! This boundary policy is intentional and relied upon by the charts.
//!
//! The cache holds up to [`CHART_FETCH_LIMIT`] songs fetched once on first
//! chart activation. Rating edits made afterwards are not reflected until
//! the application restarts; that staleness is accepted.

use crate::model::Song;

/// Upper bound on the one-shot full-collection fetch backing the charts.
pub(crate) const CHART_FETCH_LIMIT: u64 = 1000;

/// Bucket edges for the duration histogram, in seconds.
pub(crate) const DURATION_EDGES: [f64; 7] = [0.0, 120.0, 180.0, 240.0, 300.0, 360.0, 420.0];

/// Bucket edges for the acousticness histogram.
pub(crate) const ACOUSTICNESS_EDGES: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Bucket edges for the tempo histogram, in beats per minute.
pub(crate) const TEMPO_EDGES: [f64; 7] = [60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 300.0];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistogramBucket {
    pub(crate) label: String,
    pub(crate) count: u64,
}

/// Buckets `values` into the half-open intervals defined by `edges`.
///
/// `unit` is appended to each range label, e.g. `"0-120s"` or
/// `"60-90 BPM"`.
pub(crate) fn histogram<I>(values: I, edges: &[f64], unit: &str) -> Vec<HistogramBucket>
where
    I: IntoIterator<Item = f64>,
{
    let mut buckets: Vec<HistogramBucket> = edges
        .windows(2)
        .map(|pair| HistogramBucket {
            label: format!("{}-{}{}", pair[0], pair[1], unit),
            count: 0,
        })
        .collect();

    for value in values {
        for (i, pair) in edges.windows(2).enumerate() {
            if pair[0] <= value && value < pair[1] {
                buckets[i].count += 1;
                break;
            }
        }
    }

    buckets
}

/// The duration of a song in seconds for chart binning.
///
/// Prefers the service's precomputed seconds field when present.
pub(crate) fn duration_seconds(song: &Song) -> f64 {
    song.duration_s
        .unwrap_or_else(|| song.duration_ms as f64 / 1000.0)
}

/// All derived chart series for one snapshot of the collection.
pub(crate) struct ChartData {
    pub(crate) duration: Vec<HistogramBucket>,
    pub(crate) acousticness: Vec<HistogramBucket>,
    pub(crate) tempo: Vec<HistogramBucket>,
    /// Raw `(index, danceability)` points in insertion order, not binned.
    pub(crate) danceability: Vec<(f64, f64)>,
}

impl ChartData {
    pub(crate) fn from_songs(songs: &[Song]) -> Self {
        Self {
            duration: histogram(songs.iter().map(duration_seconds), &DURATION_EDGES, "s"),
            acousticness: histogram(
                songs.iter().map(|s| s.acousticness),
                &ACOUSTICNESS_EDGES,
                "",
            ),
            tempo: histogram(songs.iter().map(|s| s.tempo), &TEMPO_EDGES, " BPM"),
            danceability: songs
                .iter()
                .enumerate()
                .map(|(i, s)| (i as f64, s.danceability))
                .collect(),
        }
    }
}

/// The lazily fetched full-collection snapshot backing the charts view.
pub(crate) struct ChartCache {
    songs: Option<Vec<Song>>,
    pub(crate) loading: bool,
}

impl ChartCache {
    pub(crate) fn new() -> Self {
        Self {
            songs: None,
            loading: false,
        }
    }

    /// True when the first chart activation still needs to fetch data.
    pub(crate) fn needs_fetch(&self) -> bool {
        self.songs.is_none() && !self.loading
    }

    pub(crate) fn set_songs(&mut self, songs: Vec<Song>) {
        self.songs = Some(songs);
        self.loading = false;
    }

    pub(crate) fn songs(&self) -> Option<&[Song]> {
        self.songs.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with(acousticness: f64, tempo: f64, duration_ms: u64, duration_s: Option<f64>) -> Song {
        Song {
            id: "x".to_string(),
            title: "x".to_string(),
            danceability: 0.5,
            energy: 0.5,
            acousticness,
            tempo,
            duration_ms,
            duration_s,
            star_rating: None,
        }
    }

    #[test]
    fn values_land_in_half_open_buckets() {
        let buckets = histogram([0.0, 119.9, 120.0, 419.9], &DURATION_EDGES, "s");

        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[5].count, 1);
    }

    #[test]
    fn out_of_range_values_are_excluded() {
        // 420 sits exactly on the last edge and must not be counted.
        let buckets = histogram([-1.0, 420.0, 1000.0], &DURATION_EDGES, "s");
        let total: u64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn counts_never_exceed_input_size() {
        let values = vec![30.0, 65.0, 100.0, 150.0, 250.0, 305.0];
        let buckets = histogram(values.clone(), &TEMPO_EDGES, " BPM");
        let total: u64 = buckets.iter().map(|b| b.count).sum();
        assert!(total <= values.len() as u64);
        // 30 and 305 fall outside [60, 300).
        assert_eq!(total, 4);
    }

    #[test]
    fn full_coverage_edges_count_every_in_range_value() {
        let values = vec![0.0, 0.1, 0.25, 0.5, 0.75, 0.99];
        let buckets = histogram(values.clone(), &ACOUSTICNESS_EDGES, "");
        let total: u64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len() as u64);
    }

    #[test]
    fn exact_upper_edge_is_excluded() {
        let buckets = histogram([1.0], &ACOUSTICNESS_EDGES, "");
        let total: u64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn labels_carry_range_and_unit() {
        let buckets = histogram(std::iter::empty::<f64>(), &TEMPO_EDGES, " BPM");
        assert_eq!(buckets[0].label, "60-90 BPM");
        assert_eq!(buckets.last().unwrap().label, "210-300 BPM");

        let buckets = histogram(std::iter::empty::<f64>(), &ACOUSTICNESS_EDGES, "");
        assert_eq!(buckets[1].label, "0.2-0.4");
    }

    #[test]
    fn duration_prefers_precomputed_seconds() {
        let with_seconds = song_with(0.5, 120.0, 500_000, Some(125.0));
        assert_eq!(duration_seconds(&with_seconds), 125.0);

        let without = song_with(0.5, 120.0, 125_000, None);
        assert_eq!(duration_seconds(&without), 125.0);
    }

    #[test]
    fn danceability_points_keep_insertion_order() {
        let mut songs = vec![
            song_with(0.1, 100.0, 100_000, None),
            song_with(0.2, 110.0, 200_000, None),
        ];
        songs[0].danceability = 0.9;
        songs[1].danceability = 0.1;

        let data = ChartData::from_songs(&songs);
        assert_eq!(data.danceability, vec![(0.0, 0.9), (1.0, 0.1)]);
    }

    #[test]
    fn cache_fetches_once() {
        let mut cache = ChartCache::new();
        assert!(cache.needs_fetch());

        cache.loading = true;
        assert!(!cache.needs_fetch());

        cache.set_songs(vec![]);
        assert!(!cache.needs_fetch());
        assert!(cache.songs().is_some());
    }
}
