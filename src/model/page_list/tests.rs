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

fn song(id: &str, title: &str, tempo: f64) -> Song {
    Song {
        id: id.to_string(),
        title: title.to_string(),
        danceability: 0.5,
        energy: 0.5,
        acousticness: 0.5,
        tempo,
        duration_ms: 200_000,
        duration_s: None,
        star_rating: Some(3),
    }
}

fn page(songs: Vec<Song>, total: u64, total_pages: u64) -> SongPage {
    SongPage {
        songs,
        total,
        page: 1,
        size: 10,
        total_pages,
    }
}

fn loaded(songs: Vec<Song>) -> PageList {
    let total = songs.len() as u64;
    let mut list = PageList::new(10);
    let seq = list.begin_load(1);
    list.complete_load(seq, Ok(page(songs, total, 1)));
    list
}

#[test]
fn successful_load_populates_rows() {
    let list = loaded(vec![song("1", "Alpha", 100.0), song("2", "Beta", 90.0)]);

    assert_eq!(list.state, PageListState::Loaded);
    assert_eq!(list.songs.len(), 2);
    assert_eq!(list.total, 2);
    assert_eq!(list.total_pages, 1);
    assert!(!list.has_previous());
    assert!(!list.has_next());
}

#[test]
fn failed_load_carries_prefixed_message() {
    let mut list = PageList::new(10);
    let seq = list.begin_load(1);
    list.complete_load(seq, Err(ApiError::Server { status: 500 }));

    match &list.state {
        PageListState::Error(msg) => {
            assert!(msg.starts_with("Failed to load songs: "));
            assert!(msg.contains("500"));
        }
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn stale_completion_is_discarded() {
    let mut list = PageList::new(10);
    let first = list.begin_load(2);
    let second = list.begin_load(3);

    // The slow response for page 2 lands after page 3 was requested.
    assert!(!list.complete_load(first, Ok(page(vec![song("old", "Old", 80.0)], 1, 1))));
    assert_eq!(list.state, PageListState::Loading);
    assert!(list.songs.is_empty());

    assert!(list.complete_load(second, Ok(page(vec![song("new", "New", 80.0)], 1, 1))));
    assert_eq!(list.songs[0].id, "new");
}

#[test]
fn new_page_resets_sort() {
    let mut list = loaded(vec![song("1", "B", 100.0), song("2", "A", 90.0)]);
    list.toggle_sort(SortKey::Title);
    assert!(list.sort.is_some());

    let seq = list.begin_load(2);
    list.complete_load(seq, Ok(page(vec![song("3", "C", 70.0)], 11, 2)));
    assert!(list.sort.is_none());
}

#[test]
fn first_toggle_sorts_ascending() {
    let mut list = loaded(vec![
        song("1", "Charlie", 100.0),
        song("2", "Alpha", 90.0),
        song("3", "Bravo", 95.0),
    ]);

    list.toggle_sort(SortKey::Title);

    let titles: Vec<&str> = list.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);
    assert_eq!(list.sort, Some((SortKey::Title, SortDirection::Ascending)));
}

#[test]
fn second_toggle_flips_to_descending() {
    let mut list = loaded(vec![
        song("1", "Charlie", 100.0),
        song("2", "Alpha", 90.0),
        song("3", "Bravo", 95.0),
    ]);

    list.toggle_sort(SortKey::Title);
    list.toggle_sort(SortKey::Title);

    let titles: Vec<&str> = list.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Charlie", "Bravo", "Alpha"]);
    assert_eq!(list.sort, Some((SortKey::Title, SortDirection::Descending)));
}

#[test]
fn switching_column_starts_ascending_again() {
    let mut list = loaded(vec![song("1", "B", 150.0), song("2", "A", 90.0)]);

    list.toggle_sort(SortKey::Title);
    list.toggle_sort(SortKey::Title);
    list.toggle_sort(SortKey::Tempo);

    assert_eq!(list.sort, Some((SortKey::Tempo, SortDirection::Ascending)));
    assert_eq!(list.songs[0].tempo, 90.0);
}

#[test]
fn ascending_sort_is_idempotent() {
    let mut list = loaded(vec![
        song("1", "Charlie", 100.0),
        song("2", "Alpha", 90.0),
        song("3", "Bravo", 95.0),
    ]);

    list.toggle_sort(SortKey::Title);
    let once: Vec<String> = list.songs.iter().map(|s| s.title.clone()).collect();

    // Re-applying ascending must not change the order.
    list.sort = None;
    list.toggle_sort(SortKey::Title);
    let twice: Vec<String> = list.songs.iter().map(|s| s.title.clone()).collect();

    assert_eq!(once, twice);
}

#[test]
fn equal_keys_keep_prior_order() {
    let mut list = loaded(vec![
        song("1", "Same", 100.0),
        song("2", "Same", 100.0),
        song("3", "Aardvark", 100.0),
    ]);

    list.toggle_sort(SortKey::Title);

    let ids: Vec<&str> = list.songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn sort_does_not_change_totals() {
    let mut list = PageList::new(10);
    let seq = list.begin_load(1);
    list.complete_load(
        seq,
        Ok(page(vec![song("1", "B", 100.0), song("2", "A", 90.0)], 42, 5)),
    );

    list.toggle_sort(SortKey::Title);

    assert_eq!(list.total, 42);
    assert_eq!(list.total_pages, 5);
}

#[test]
fn missing_page_count_is_derived_from_total() {
    let mut list = PageList::new(10);
    let seq = list.begin_load(1);
    list.complete_load(seq, Ok(page(vec![song("1", "A", 90.0)], 25, 0)));
    assert_eq!(list.total_pages, 3);
}

#[test]
fn patch_rating_touches_exactly_the_target() {
    let mut list = loaded(vec![
        song("1", "Alpha", 100.0),
        song("2", "Beta", 90.0),
        song("3", "Gamma", 95.0),
    ]);

    list.patch_rating("2", 5);

    assert_eq!(list.songs[0].rating(), 3);
    assert_eq!(list.songs[1].rating(), 5);
    assert_eq!(list.songs[2].rating(), 3);
}

#[test]
fn patch_rating_ignores_unknown_ids() {
    let mut list = loaded(vec![song("1", "Alpha", 100.0)]);
    list.patch_rating("nope", 1);
    assert_eq!(list.songs[0].rating(), 3);
}
