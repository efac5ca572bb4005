//! Tests for suggestion popup rendering

use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use super::MAX_VISIBLE_SUGGESTIONS;
use crate::app::App;
use crate::test_utils::test_helpers::{ScriptedRecommender, ScriptedSource, pump_app, test_app};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 15;

fn render_suggestion_popup(app: &App) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let input_area = Rect::new(0, TEST_HEIGHT - 3, TEST_WIDTH, 3);
            super::render_popup(app, f, input_area);
        })
        .unwrap();
    terminal.backend().to_string()
}

async fn app_with_suggestions(titles: &[&str]) -> App {
    let source = ScriptedSource::new();
    source.reply("ma", titles);
    let mut app = test_app(&source, &ScriptedRecommender::new());
    app.suggestions.on_text_changed("ma");
    pump_app(&mut app, Duration::from_millis(1_000)).await;
    app
}

#[tokio::test]
async fn test_no_popup_without_suggestions() {
    let app = test_app(&ScriptedSource::new(), &ScriptedRecommender::new());
    let output = render_suggestion_popup(&app);
    assert!(!output.contains("Suggestions"));
}

#[tokio::test(start_paused = true)]
async fn test_popup_lists_titles_and_marks_selection() {
    let app = app_with_suggestions(&["The Matrix", "Mad Max"]).await;
    let output = render_suggestion_popup(&app);

    assert!(output.contains("Suggestions"));
    assert!(output.contains("► The Matrix"));
    assert!(output.contains("  Mad Max"));
}

#[tokio::test(start_paused = true)]
async fn test_popup_window_follows_selection() {
    let titles: Vec<String> = (1..=15).map(|i| format!("Movie {:02}", i)).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let mut app = app_with_suggestions(&title_refs).await;

    let output = render_suggestion_popup(&app);
    assert!(output.contains("Movie 01"));
    assert!(!output.contains(&format!("Movie {:02}", MAX_VISIBLE_SUGGESTIONS + 1)));

    // Up from the first row wraps to the last one
    app.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::empty()));
    let output = render_suggestion_popup(&app);
    assert!(output.contains("► Movie 15"));
    assert!(!output.contains("Movie 01"));
}
