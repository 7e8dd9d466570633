mod question;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::viewer::ViewState;

const TITLE: &str = "Trivia";
const LOADING_TEXT: &str = "Loading…";
const REFRESH_HINT: &str = "n new random  ·  q quit";

/// Draw the whole screen from the current state.
///
/// `subtitle` is shown under the title; the viewer passes the API base URL.
pub fn render(frame: &mut Frame, state: &ViewState, subtitle: &str) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let error = state.error();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(if error.is_some() { 2 } else { 0 }),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], chunks[1], subtitle);

    if let Some(message) = error {
        render_error(frame, chunks[3], message);
    }

    match state.question() {
        Some(question) => question::render(frame, chunks[4], question),
        None => render_loading(frame, chunks[4], error.is_some()),
    }
}

fn render_header(frame: &mut Frame, title_area: Rect, subtitle_area: Rect, subtitle: &str) {
    let title = Paragraph::new(TITLE).fg(Color::Cyan).bold();
    frame.render_widget(title, title_area);

    let subtitle = Paragraph::new(subtitle).fg(Color::DarkGray);
    frame.render_widget(subtitle, subtitle_area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let widget = Paragraph::new(format!("Error: {}", message))
        .wrap(Wrap { trim: true })
        .fg(Color::Red);
    frame.render_widget(widget, area);
}

/// Loading line. After a failed first load the refresh hint goes under it,
/// since there is no card to carry it.
fn render_loading(frame: &mut Frame, area: Rect, show_hint: bool) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let widget = Paragraph::new(LOADING_TEXT).fg(Color::Yellow);
    frame.render_widget(widget, chunks[0]);

    if show_hint {
        render_controls(frame, chunks[2]);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(REFRESH_HINT)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::models::Question;

    fn sample() -> Question {
        Question {
            question: "Q1".to_string(),
            option_a: "A".to_string(),
            option_b: "B".to_string(),
            option_c: "C".to_string(),
            option_d: "D".to_string(),
        }
    }

    fn render_to_string(state: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, state, "http://localhost:8000"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen() {
        let screen = render_to_string(&ViewState::Loading);
        assert!(screen.contains("Trivia"));
        assert!(screen.contains("http://localhost:8000"));
        assert!(screen.contains(LOADING_TEXT));
        assert!(!screen.contains("Error:"));
        assert!(!screen.contains(REFRESH_HINT));
    }

    #[test]
    fn test_loaded_screen_lists_options_in_order() {
        let screen = render_to_string(&ViewState::Loaded(sample()));
        assert!(screen.contains("Q1"));
        assert!(!screen.contains("Error:"));
        assert!(!screen.contains(LOADING_TEXT));

        let positions: Vec<usize> = ["A. A", "B. B", "C. C", "D. D"]
            .iter()
            .map(|line| screen.find(line).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_error_without_question() {
        let state = ViewState::Error {
            message: "HTTP 500".to_string(),
            stale: None,
        };
        let screen = render_to_string(&state);
        assert!(screen.contains("Error: HTTP 500"));
        assert!(screen.contains(LOADING_TEXT));
        assert!(screen.contains(REFRESH_HINT));
    }

    #[test]
    fn test_long_option_wraps_inside_card() {
        let mut question = sample();
        question.option_d =
            "The Treaty of Westphalia signed in sixteen forty eight ENDMARK".to_string();
        let screen = render_to_string(&ViewState::Loaded(question));
        assert!(screen.contains("D. The Treaty of Westphalia"));
        assert!(screen.contains("ENDMARK"));
        assert!(screen.contains(REFRESH_HINT));
    }

    #[test]
    fn test_long_question_text_wraps() {
        let mut question = sample();
        question.question =
            "Which agreement ended the Thirty Years War in the Holy Roman Empire TAILWORD"
                .to_string();
        let screen = render_to_string(&ViewState::Loaded(question));
        assert!(screen.contains("TAILWORD"));
        assert!(screen.contains("A. A"));
    }

    #[test]
    fn test_error_alongside_stale_question() {
        let state = ViewState::Error {
            message: "network down".to_string(),
            stale: Some(sample()),
        };
        let screen = render_to_string(&state);
        assert!(screen.contains("Error: network down"));
        assert!(screen.contains("Q1"));
        assert!(screen.contains("D. D"));
        assert!(!screen.contains(LOADING_TEXT));
    }
}
