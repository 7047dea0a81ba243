use crate::game::Session;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Seconds at which the countdown turns red.
const LOW_TIME_SECONDS: u32 = 3;

fn help_line(answered: bool) -> Line<'static> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    if !answered {
        spans.extend([
            Span::styled("1-9", key),
            Span::from(" Answer  "),
            Span::styled("↑/↓", key),
            Span::from(" Highlight  "),
            Span::styled("Enter", key),
            Span::from(" Submit  "),
        ]);
    }
    spans.extend([
        Span::styled("Esc/m", key),
        Span::from(" Back to Menu  "),
        Span::styled("Ctrl+C", key),
        Span::from(" Exit App"),
    ]);
    Line::from(spans)
}

pub fn draw_no_questions(f: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            "No questions available",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Nothing in the bank matches this category and difficulty."),
        Line::from(""),
        help_line(true),
    ]);
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Loading"));
    f.render_widget(placeholder, area);
}

pub fn draw_quiz(f: &mut Frame, area: Rect, session: &Session, highlighted: usize) {
    let Some(question) = session.current_question() else {
        draw_no_questions(f, area);
        return;
    };
    let layout = calculate_quiz_chunks(area);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(layout.header_area);

    let progress = format!(
        "Question {} / {}",
        session.current_index + 1,
        session.total()
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, header_chunks[0]);

    let timer_color = if session.time_left <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Blue
    };
    let timer = Paragraph::new(format!("Time: {}s", session.time_left))
        .style(
            Style::default()
                .fg(timer_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(timer, header_chunks[1]);

    let ratio = (session.current_index + 1) as f64 / session.total() as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, layout.progress_area);

    let question_widget = Paragraph::new(question.question.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_widget, layout.question_area);

    let items: Vec<ListItem> = question
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let style = if session.answered {
                if i == question.correct_answer {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if session.selected_answer == Some(i) {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            } else if i == highlighted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if session.answered {
                if i == question.correct_answer {
                    "[✓]"
                } else if session.selected_answer == Some(i) {
                    "[✗]"
                } else {
                    "[ ]"
                }
            } else if i == highlighted {
                " > "
            } else {
                "   "
            };
            ListItem::new(format!("{} {}. {}", marker, i + 1, answer)).style(style)
        })
        .collect();
    let answers = List::new(items).block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(answers, layout.answers_area);

    let explanation = if session.answered {
        let verdict = match session.selected_answer {
            None => Span::styled(
                "Time's up! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Some(_) if question.is_correct(session.selected_answer) => Span::styled(
                "Correct! ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(_) => Span::styled(
                "Incorrect. ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        Text::from(Line::from(vec![
            verdict,
            Span::from(question.explanation.as_str()),
        ]))
    } else {
        Text::default()
    };
    let explanation_widget = Paragraph::new(explanation)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Explanation"),
        );
    f.render_widget(explanation_widget, layout.explanation_area);

    let help = Paragraph::new(help_line(session.answered))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
