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

//! UI rendering logic for the song table.
//!
//! Handles column layout, the sort marker on the active column, fixed
//! numeric precision per attribute, and selection highlighting.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table, TableState},
};

use crate::{
    components::rating_stars,
    model::{Song, SortDirection, SortKey},
    theme::Theme,
    util::format::{format_duration, format_feature, format_tempo},
};

/// Column headers paired with the sort key each one toggles.
const COLUMNS: [(&str, Option<SortKey>); 7] = [
    ("Title", Some(SortKey::Title)),
    ("Dance", Some(SortKey::Danceability)),
    ("Energy", Some(SortKey::Energy)),
    ("Acoustic", Some(SortKey::Acousticness)),
    ("Tempo", Some(SortKey::Tempo)),
    ("Time", Some(SortKey::Duration)),
    ("Rating", None),
];

/// Builds one table row for a song, shared by the page table and the
/// search-result panel.
pub(crate) fn song_row<'a>(song: &'a Song, theme: &Theme) -> Row<'a> {
    Row::new(vec![
        Cell::from(Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
        Cell::from(
            Line::from(format_feature(song.danceability))
                .style(Style::default().fg(theme.table_feature_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(
            Line::from(format_feature(song.energy))
                .style(Style::default().fg(theme.table_feature_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(
            Line::from(format_feature(song.acousticness))
                .style(Style::default().fg(theme.table_feature_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(
            Line::from(format_tempo(song.tempo))
                .style(Style::default().fg(theme.table_tempo_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(
            Line::from(format_duration(song.duration_ms))
                .style(Style::default().fg(theme.table_time_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(
            Line::from(rating_stars(song.rating())).style(Style::default().fg(theme.rating_fg)),
        ),
    ])
}

/// Column width constraints shared by the page table and the search panel.
pub(crate) fn column_widths() -> [Constraint; 7] {
    [
        Constraint::Min(24),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(7),
    ]
}

/// Renders the paginated song table with sort markers and row highlight.
pub(crate) fn draw_song_table(
    f: &mut Frame,
    area: Rect,
    songs: &[Song],
    sort: Option<(SortKey, SortDirection)>,
    table_state: &mut TableState,
    theme: &Theme,
) {
    let header_cells = COLUMNS.map(|(name, key)| {
        let marker = match (key, sort) {
            (Some(key), Some((active, direction))) if key == active => match direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            },
            _ => "",
        };
        Cell::from(format!("{}{}", name, marker))
    });

    let rows = songs.iter().map(|song| song_row(song, theme));

    let table = Table::new(rows, column_widths())
        .header(
            Row::new(header_cells)
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

    f.render_stateful_widget(table, area, table_state);
}
