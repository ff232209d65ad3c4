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

//! Title search input logic and state management.
//!
//! The search bar wraps a managed text input component. While focused it
//! consumes all key events; submitting raises a search event with the
//! current text (a blank submission clears the existing result upstream),
//! and Escape leaves the field without submitting.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct SearchBar {
    active: bool,
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a raw input event to the search bar.
    ///
    /// Returns `true` when the event was consumed: `/` focuses the field,
    /// and while focused every key is either edited into the buffer,
    /// submitted with Enter, or dismissed with Escape.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.active {
            match key_event.code {
                KeyCode::Esc => {
                    self.active = false;
                }

                KeyCode::Enter => {
                    let query = self.input.value().to_string();
                    event_tx.send(AppEvent::SearchSubmitted(query))?;
                    self.active = false;
                }

                _ => {
                    // Delegate all other key events to the managed input
                    // component.
                    self.input.handle_event(event);
                }
            }

            Ok(true)
        } else if key_event.code == KeyCode::Char('/') {
            self.active = true;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::sync::mpsc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn slash_focuses_the_field() {
        let (tx, _rx) = mpsc::channel();
        let mut bar = SearchBar::new();

        assert!(bar.handle_event(&key(KeyCode::Char('/')), &tx).unwrap());
        assert!(bar.active());
    }

    #[test]
    fn unfocused_bar_ignores_other_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut bar = SearchBar::new();

        assert!(!bar.handle_event(&key(KeyCode::Char('x')), &tx).unwrap());
        assert!(!bar.active());
    }

    #[test]
    fn enter_submits_the_buffer() {
        let (tx, rx) = mpsc::channel();
        let mut bar = SearchBar::new();

        bar.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();
        bar.handle_event(&key(KeyCode::Char('a')), &tx).unwrap();
        bar.handle_event(&key(KeyCode::Char('b')), &tx).unwrap();
        bar.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::SearchSubmitted(query)) => assert_eq!(query, "ab"),
            other => panic!("unexpected event {:?}", other),
        }
        assert!(!bar.active());
    }

    #[test]
    fn escape_leaves_without_submitting() {
        let (tx, rx) = mpsc::channel();
        let mut bar = SearchBar::new();

        bar.handle_event(&key(KeyCode::Char('/')), &tx).unwrap();
        bar.handle_event(&key(KeyCode::Esc), &tx).unwrap();

        assert!(rx.try_recv().is_err());
        assert!(!bar.active());
    }
}
