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

//! Keyboard input routing.
//!
//! Raw key events are offered to the search bar first (it consumes
//! everything while focused), then mapped to global intents: page
//! navigation, row selection, rating, sorting, export and the charts
//! toggle.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{App, MainView, events::AppEvent, model::SortKey, tasks::AppTask};

/// Maps keyboard input to application actions.
///
/// Page navigation is suppressed while a page fetch is in flight, matching
/// the region's loading gate; everything else stays responsive.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    if app.search_bar.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Page navigation
        KeyCode::Char('h') | KeyCode::Left => {
            if app.page_list.has_previous() && !app.page_list.is_loading() {
                app.request_page(app.page_list.page - 1)?;
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.page_list.has_next() && !app.page_list.is_loading() {
                app.request_page(app.page_list.page + 1)?;
            }
        }
        KeyCode::Char('g') => {
            if app.page_list.has_previous() && !app.page_list.is_loading() {
                app.request_page(1)?;
            }
        }
        KeyCode::Char('G') => {
            if app.page_list.has_next() && !app.page_list.is_loading() {
                app.request_page(app.page_list.total_pages)?;
            }
        }
        KeyCode::Char('r') => {
            if !app.page_list.is_loading() {
                app.request_page(app.page_list.page)?;
            }
        }

        // Row selection
        KeyCode::Char('j') | KeyCode::Down => app.song_table.goto_next(app.page_list.songs.len()),
        KeyCode::Char('k') | KeyCode::Up => app.song_table.goto_previous(app.page_list.songs.len()),

        // Rate the selected song: digit k gives k stars, never zero.
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(song) = app.selected_song() {
                let rating = c as u8 - b'0';
                app.task_tx.send(AppTask::RateSong {
                    song_id: song.id.clone(),
                    rating,
                })?;
            }
        }

        // Local sort toggles, one key per column
        KeyCode::Char('T') => app.page_list.toggle_sort(SortKey::Title),
        KeyCode::Char('D') => app.page_list.toggle_sort(SortKey::Danceability),
        KeyCode::Char('E') => app.page_list.toggle_sort(SortKey::Energy),
        KeyCode::Char('A') => app.page_list.toggle_sort(SortKey::Acousticness),
        KeyCode::Char('P') => app.page_list.toggle_sort(SortKey::Tempo),
        KeyCode::Char('U') => app.page_list.toggle_sort(SortKey::Duration),

        KeyCode::Char('e') => app.task_tx.send(AppTask::ExportCsv)?,

        KeyCode::Char('c') => toggle_charts(app)?,

        _ => {}
    }

    Ok(())
}

/// Flips between the songs view and the charts view.
///
/// The full-collection fetch backing the charts happens once, on the first
/// activation; later toggles reuse the cached snapshot.
fn toggle_charts(app: &mut App) -> Result<()> {
    match app.main_view {
        MainView::Songs => {
            app.main_view = MainView::Charts;
            if app.charts.needs_fetch() {
                app.charts.loading = true;
                app.task_tx.send(AppTask::FetchAllSongs)?;
            }
        }
        MainView::Charts => app.main_view = MainView::Songs,
    }

    Ok(())
}
