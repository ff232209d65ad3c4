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

//! UI rendering for the search bar line.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::SearchBar, theme::Theme};

impl SearchBar {
    /// Draws the one-line search field, placing the terminal cursor at the
    /// edit position while focused.
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let prompt = "Search title: ";

        let line = if self.active() || !self.input.value().is_empty() {
            Line::from(vec![
                Span::styled(prompt, Style::default().fg(theme.accent_colour)),
                Span::raw(self.input.value()),
            ])
        } else {
            Line::from(Span::styled(
                "Press / to search by title",
                Style::default().fg(theme.dim_fg),
            ))
        };

        f.render_widget(Paragraph::new(line), area);

        if self.active() {
            let cursor_x = area.x + prompt.len() as u16 + self.input.visual_cursor() as u16;
            let max_x = area.right().saturating_sub(1);
            f.set_cursor_position(Position::new(cursor_x.min(max_x), area.y));
        }
    }
}
