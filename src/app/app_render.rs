use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::App;
use crate::recommend::RecommendView;
use crate::suggest::suggest_render;

const HEADER_TEXT: &str = "Movie Recommendation System";
const HELP_TEXT: &str = " Enter: recommend | Tab: accept | ↑/↓: select | Esc: close/quit ";
const PLACEHOLDER_TEXT: &str = "Enter a movie title to get personalized recommendations.";
const LOADING_TEXT: &str = "Searching for similar movies...";
const EMPTY_TEXT: &str =
    "No recommendations found. Try checking your spelling or a more popular title.";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Header, recommendations (most of the space), title field
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

        let header_area = layout[0];
        let results_area = layout[1];
        let input_area = layout[2];

        self.render_header(frame, header_area);
        self.render_recommendations(frame, results_area);
        frame.render_widget(&self.input.textarea, input_area);

        // Popup last so it draws over the recommendations pane
        suggest_render::render_popup(self, frame, input_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                HEADER_TEXT,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_recommendations(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Recommendations ")
            .border_style(Style::default().fg(Color::Cyan));

        let lines: Vec<Line> = match self.recommend.view() {
            RecommendView::Placeholder => vec![Line::styled(
                PLACEHOLDER_TEXT,
                Style::default().fg(Color::DarkGray),
            )],
            RecommendView::Loading => vec![Line::styled(
                LOADING_TEXT,
                Style::default().fg(Color::Yellow),
            )],
            RecommendView::Error(message) => vec![Line::from(vec![
                Span::styled(
                    "Error: ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.to_string(), Style::default().fg(Color::Red)),
            ])],
            RecommendView::Empty => vec![Line::styled(
                EMPTY_TEXT,
                Style::default().fg(Color::DarkGray),
            )],
            RecommendView::Results(results) => {
                let mut lines = vec![
                    Line::styled(
                        format!("Top {} Recommendations:", results.len()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                ];
                lines.extend(results.iter().enumerate().map(|(i, movie)| {
                    let mut spans = vec![
                        Span::raw(format!("{:>3}. ", i + 1)),
                        Span::styled(
                            movie.title.clone(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                    ];
                    if let Some(score) = movie.score {
                        spans.push(Span::styled(
                            format!("  (similarity: {:.3})", score),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    Line::from(spans)
                }));
                lines
            }
        };

        let content = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(content, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
