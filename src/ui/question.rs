use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Question;

use super::render_controls;

pub fn render(frame: &mut Frame, area: Rect, question: &Question) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Color::DarkGray)
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

    render_body(frame, chunks[0], question);
    render_controls(frame, chunks[1]);
}

/// Question text followed by the options. Long lines wrap inside the card.
fn render_body(frame: &mut Frame, area: Rect, question: &Question) {
    let mut lines: Vec<Line> = Vec::with_capacity(10);
    lines.push(Line::from(Span::styled(
        question.question.as_str(),
        Style::default().fg(Color::White).bold(),
    )));
    lines.push(Line::from(""));

    for (label, option) in question.labelled_options() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", label), Style::default().fg(Color::Cyan)),
            Span::styled(option, Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
