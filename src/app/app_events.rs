use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App {
    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let popup_open = !self.visible_suggestions().is_empty();

        match key.code {
            KeyCode::Esc if popup_open => self.popup_visible = false,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up if popup_open => self.select_previous(),
            KeyCode::Down if popup_open => self.select_next(),
            KeyCode::Tab if popup_open => self.accept_selected_suggestion(),
            // Never insert a tab into a title
            KeyCode::Tab | KeyCode::BackTab => {}
            KeyCode::Enter => self.request_recommendations(),
            _ => {
                if self.input.textarea.input(key) {
                    self.on_text_edited();
                }
            }
        }
    }

    fn on_text_edited(&mut self) {
        let text = self.input.text().to_string();
        self.suggestions.on_text_changed(&text);
        self.reset_selection();
        self.popup_visible = true;
        self.input.set_searching(false);
    }

    fn accept_selected_suggestion(&mut self) {
        let Some(choice) = self
            .selected
            .and_then(|i| self.suggestions.suggestions().get(i))
            .cloned()
        else {
            return;
        };

        self.suggestions.on_suggestion_accepted(&choice);
        self.input.set_text(self.suggestions.query());
        self.input.set_searching(false);
        self.selected = None;
    }

    fn select_next(&mut self) {
        let count = self.suggestions.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    fn select_previous(&mut self) {
        let count = self.suggestions.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
