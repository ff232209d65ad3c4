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

//! Interactive song table widget and state management.
//!
//! The table shows the current page of the song list with a keyboard
//! cursor used to pick the row a rating key applies to. Persistent cursor
//! state lives in [`SongTableState`]; rendering is in the sibling module.

mod render;

use ratatui::widgets::TableState;

pub(crate) use render::{column_widths, draw_song_table, song_row};

pub(crate) struct SongTableState {
    pub(crate) table_state: TableState,
}

impl SongTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// The index of the row the cursor is on, clamped to the page.
    pub(crate) fn selected(&self, len: usize) -> Option<usize> {
        self.table_state.selected().filter(|&i| i < len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_around() {
        let mut state = SongTableState::new();
        state.goto_next(3);
        assert_eq!(state.selected(3), Some(0));
        state.goto_next(3);
        state.goto_next(3);
        state.goto_next(3);
        assert_eq!(state.selected(3), Some(0));

        state.goto_previous(3);
        assert_eq!(state.selected(3), Some(2));
    }

    #[test]
    fn empty_page_has_no_selection() {
        let mut state = SongTableState::new();
        state.goto_next(0);
        assert_eq!(state.selected(0), None);
    }

    #[test]
    fn stale_cursor_is_clamped_after_shorter_page() {
        let mut state = SongTableState::new();
        state.goto_next(10);
        state.goto_previous(10);
        state.goto_previous(10);
        assert_eq!(state.selected(10), Some(8));
        // A new two-row page arrived; the old cursor is out of range.
        assert_eq!(state.selected(2), None);
    }
}
