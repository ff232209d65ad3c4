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

//! UI rendering for the charts view.
//!
//! The view is a 2x2 grid: danceability scatter, duration histogram,
//! acousticness histogram, tempo histogram. Bucket counts come from the
//! aggregation module untouched; this module only shapes them into
//! widgets.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::{
    model::charts::{ChartCache, ChartData, HistogramBucket},
    theme::Theme,
};

/// Renders the charts view from the cached collection snapshot.
///
/// Shows a loading placeholder until the one-shot fetch completes.
pub(crate) fn draw_charts(f: &mut Frame, area: Rect, cache: &ChartCache, theme: &Theme) {
    let Some(songs) = cache.songs() else {
        let text = if cache.loading {
            "Loading charts..."
        } else {
            "No chart data"
        };
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.dim_fg)),
            area,
        );
        return;
    };

    let data = ChartData::from_songs(songs);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_scatter(f, top[0], &data.danceability, theme);
    draw_histogram(f, top[1], "Duration", &data.duration, theme);
    draw_histogram(f, bottom[0], "Acousticness", &data.acousticness, theme);
    draw_histogram(f, bottom[1], "Tempo", &data.tempo, theme);
}

fn draw_scatter(f: &mut Frame, area: Rect, points: &[(f64, f64)], theme: &Theme) {
    let x_max = points.len().max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("danceability")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.chart_scatter))
            .data(points),
    ];

    let chart = Chart::new(datasets)
        .block(panel_block("Danceability", theme))
        .x_axis(
            Axis::default()
                .title("song")
                .style(Style::default().fg(theme.dim_fg))
                .bounds([0.0, x_max])
                .labels([Line::from("0"), Line::from(format!("{}", points.len()))]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.dim_fg))
                .bounds([0.0, 1.0])
                .labels([Line::from("0.0"), Line::from("0.5"), Line::from("1.0")]),
        );

    f.render_widget(chart, area);
}

fn draw_histogram(
    f: &mut Frame,
    area: Rect,
    title: &str,
    buckets: &[HistogramBucket],
    theme: &Theme,
) {
    let bars: Vec<Bar> = buckets
        .iter()
        .map(|bucket| {
            Bar::default()
                .value(bucket.count)
                .label(Line::from(bucket.label.clone()))
                .style(Style::default().fg(theme.chart_bar))
        })
        .collect();

    // Spread the bars across the panel width, keeping room for labels.
    let inner_width = area.width.saturating_sub(2).max(1);
    let bar_count = buckets.len().max(1) as u16;
    let bar_width = (inner_width / bar_count).saturating_sub(1).max(3);

    let chart = BarChart::default()
        .block(panel_block(title, theme))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
}
