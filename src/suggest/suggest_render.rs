//! Suggestion popup rendering
//!
//! Draws the current suggestion list just above the title input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

// Suggestion popup display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 60;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Render the suggestion popup above the input field
pub fn render_popup(app: &App, frame: &mut Frame, input_area: Rect) {
    let suggestions = app.visible_suggestions();
    if suggestions.is_empty() {
        return;
    }

    let selected = app.selected_suggestion_index().unwrap_or(0);

    // Keep the selection inside the visible window
    let first_visible = selected.saturating_sub(MAX_VISIBLE_SUGGESTIONS - 1);
    let visible: Vec<(usize, &String)> = suggestions
        .iter()
        .enumerate()
        .skip(first_visible)
        .take(MAX_VISIBLE_SUGGESTIONS)
        .collect();

    let popup_height = (visible.len() as u16) + POPUP_BORDER_HEIGHT;
    let max_text_width = suggestions
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;

    let popup_area = popup::above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);

    let items: Vec<ListItem> = visible
        .into_iter()
        .map(|(i, title)| {
            let line = if i == selected {
                Line::from(Span::styled(
                    format!("► {}", title),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", title),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
