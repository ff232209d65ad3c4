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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_feature_fg: Color,
    pub(crate) table_tempo_fg: Color,
    pub(crate) table_time_fg: Color,
    pub(crate) rating_fg: Color,

    pub(crate) success_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) dim_fg: Color,

    pub(crate) chart_bar: Color,
    pub(crate) chart_scatter: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 37),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_feature_fg: Color::Rgb(179, 157, 219),
            table_tempo_fg: Color::Rgb(144, 202, 249),
            table_time_fg: Color::Rgb(162, 161, 166),
            rating_fg: Color::Rgb(255, 215, 0),

            success_fg: Color::Rgb(129, 199, 132),
            error_fg: Color::Rgb(239, 83, 80),
            dim_fg: Color::Rgb(120, 120, 130),

            chart_bar: Color::Rgb(77, 182, 172),
            chart_scatter: Color::Rgb(100, 181, 246),
        }
    }
}
