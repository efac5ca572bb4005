use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

const FIELD_TITLE: &str = " Movie title ";
const FIELD_TITLE_SEARCHING: &str = " Movie title (searching...) ";
const PLACEHOLDER: &str = "e.g., The Dark Knight, Inception";

/// Single-line title field
pub struct InputState {
    pub textarea: TextArea<'static>,
    searching: bool,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(field_block(FIELD_TITLE));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);

        Self {
            textarea,
            searching: false,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the field contents and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        let block = self.textarea.block().cloned();
        let mut textarea = TextArea::new(vec![text.to_string()]);
        if let Some(block) = block {
            textarea.set_block(block);
        }
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    /// Show whether a title lookup is running in the field's border
    pub fn set_searching(&mut self, searching: bool) {
        let title = if searching {
            FIELD_TITLE_SEARCHING
        } else {
            FIELD_TITLE
        };
        self.textarea.set_block(field_block(title));
        self.searching = searching;
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn field_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray))
}
