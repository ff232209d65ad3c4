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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Layout
//!
//! The screen is a vertical stack: header, main area (songs or charts),
//! status line, search bar. Within the songs view, a search-result panel
//! appears above the table when a result is held, and the pagination line
//! sits below it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
    App, MainView,
    components::{column_widths, draw_charts, draw_song_table, song_row},
    model::{MessageKind, Song, page_list::PageListState},
    theme::Theme,
};

/// Renders the user interface to the terminal frame.
///
/// Called after every processed event; translates the current [`App`]
/// state into widgets without mutating anything beyond widget scroll
/// state.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour)),
        area,
    );

    // Outer layout: header, main, status line, search bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app, &theme);

    match app.main_view {
        MainView::Songs => draw_songs_view(f, outer[1], app, &theme),
        MainView::Charts => draw_charts(f, outer[1], &app.charts, &theme),
    }

    draw_status_line(f, outer[2], app, &theme);

    app.search_bar.draw(f, outer[3], &theme);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Span::styled(
        " Playdeck ",
        Style::default().bold().fg(theme.accent_colour),
    );
    let totals = Span::styled(
        format!("Songs ({} total)", app.page_list.total),
        Style::default().fg(theme.dim_fg),
    );

    f.render_widget(Paragraph::new(Line::from(vec![title, totals])), area);
}

fn draw_songs_view(f: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let (result_area, table_area, pagination_area) = match app.search.result() {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);
            (Some(chunks[0]), chunks[1], chunks[2])
        }
        None => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);
            (None, chunks[0], chunks[1])
        }
    };

    if let (Some(result_area), Some(song)) = (result_area, app.search.result()) {
        draw_search_result(f, result_area, song, theme);
    }

    match &app.page_list.state {
        PageListState::Loading => {
            f.render_widget(
                Paragraph::new("Loading...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.dim_fg)),
                table_area,
            );
        }
        PageListState::Error(message) => {
            f.render_widget(
                Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.error_fg)),
                table_area,
            );
        }
        PageListState::Idle | PageListState::Loaded => {
            draw_song_table(
                f,
                table_area,
                &app.page_list.songs,
                app.page_list.sort,
                &mut app.song_table.table_state,
                theme,
            );
        }
    }

    draw_pagination(f, pagination_area, app, theme);
}

/// Renders the single-row search-result panel above the page table.
fn draw_search_result(f: &mut Frame, area: Rect, song: &Song, theme: &Theme) {
    let block = Block::default()
        .title("Search Result")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour));

    let table = Table::new([song_row(song, theme)], column_widths())
        .header(
            Row::new(["Title", "Dance", "Energy", "Acoustic", "Tempo", "Time", "Rating"])
                .style(Style::default().bold().fg(theme.accent_colour)),
        )
        .block(block);

    f.render_widget(table, area);
}

/// Renders the pagination line, dimming the direction hints at the bounds.
fn draw_pagination(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let list = &app.page_list;

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.dim_fg)
        }
    };

    let line = Line::from(vec![
        Span::styled("← Prev", arrow_style(list.has_previous())),
        Span::styled(
            format!("  Page {} of {}  ", list.page, list.total_pages),
            Style::default().fg(theme.table_time_fg),
        ),
        Span::styled("Next →", arrow_style(list.has_next())),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Renders the transient status message, or key hints when idle.
fn draw_status_line(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = match &app.status {
        Some(message) => {
            let style = match message.kind {
                MessageKind::Success => Style::default().fg(theme.success_fg),
                MessageKind::Error => Style::default().fg(theme.error_fg),
            };
            Line::from(Span::styled(message.text.as_str(), style))
        }
        None => Line::from(Span::styled(
            "h/l page  j/k select  1-5 rate  T/D/E/A/P/U sort  / search  e export  c charts  q quit",
            Style::default().fg(theme.dim_fg),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}
