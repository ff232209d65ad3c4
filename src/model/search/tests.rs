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
        star_rating: Some(2),
    }
}

#[test]
fn successful_search_holds_the_result() {
    let mut search = Search::new();
    let seq = search.begin();

    assert!(search.complete(seq, Ok(song("1", "Yesterday"))));

    let result = search.result().expect("result should be present");
    assert_eq!(result.title, "Yesterday");
}

#[test]
fn missing_title_is_not_a_failure() {
    let mut search = Search::new();
    let seq = search.begin();

    search.complete(seq, Err(ApiError::NotFound));

    assert!(matches!(search.state, SearchState::NotFound));
    assert!(search.result().is_none());
}

#[test]
fn transport_failure_keeps_the_detail() {
    let mut search = Search::new();
    let seq = search.begin();

    search.complete(seq, Err(ApiError::Network("timed out".into())));

    match &search.state {
        SearchState::Failed(detail) => assert!(detail.contains("timed out")),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn stale_completion_is_discarded() {
    let mut search = Search::new();
    let first = search.begin();
    let second = search.begin();

    assert!(!search.complete(first, Ok(song("old", "Old"))));
    assert!(matches!(search.state, SearchState::Loading));

    assert!(search.complete(second, Ok(song("new", "New"))));
    assert_eq!(search.result().map(|s| s.id.as_str()), Some("new"));
}

#[test]
fn clear_discards_result_and_in_flight_search() {
    let mut search = Search::new();
    let seq = search.begin();
    search.clear();

    assert!(matches!(search.state, SearchState::Idle));
    // The in-flight response must not resurrect a cleared search.
    assert!(!search.complete(seq, Ok(song("1", "Ghost"))));
    assert!(search.result().is_none());
}

#[test]
fn patch_rating_updates_matching_result() {
    let mut search = Search::new();
    let seq = search.begin();
    search.complete(seq, Ok(song("1", "Yesterday")));

    search.patch_rating("1", 5);
    assert_eq!(search.result().map(|s| s.rating()), Some(5));

    search.patch_rating("other", 1);
    assert_eq!(search.result().map(|s| s.rating()), Some(5));
}
