use crate::game::Session;
use crate::models::{Grade, ResultSummary};
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, area: Rect, session: &Session, summary: &ResultSummary) {
    let layout = calculate_summary_chunks(area);

    let grade_color = match summary.grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Blue,
        Grade::KeepPracticing => Color::Yellow,
    };
    let score_text = vec![
        Line::from(Span::styled(
            format!("{} / {}", summary.score, summary.total),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Accuracy: {}%", summary.percentage)),
        Line::from(Span::styled(
            summary.grade.message(),
            Style::default().fg(grade_color),
        )),
    ];
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over!"));
    f.render_widget(score, layout.score_area);

    let width = layout.details_area.width.saturating_sub(4) as usize;
    let mut details = Text::default();
    for (i, outcome) in session.outcomes.iter().enumerate() {
        let (mark, color) = if outcome.is_correct {
            ("[✓] Correct", Color::Green)
        } else {
            ("[✗] Incorrect", Color::Red)
        };
        details.push_line(Line::from(Span::styled(
            truncate_string(&format!("Q{}: {}", i + 1, outcome.question), width),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let mut status = vec![Span::styled(mark, Style::default().fg(color))];
        if outcome.user_answer.is_none() {
            status.push(Span::from(" (time ran out)"));
        }
        status.push(Span::styled(
            format!("  {}s", outcome.time_spent),
            Style::default().fg(Color::DarkGray),
        ));
        details.push_line(Line::from(status));
        if !outcome.is_correct
            && let Some(answer) = session
                .question_at(i)
                .and_then(|q| q.answers.get(outcome.correct_answer))
        {
            details.push_line(Line::from(Span::styled(
                truncate_string(&format!("    Answer: {}", answer), width),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let details_widget = Paragraph::new(details)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Details"));
    f.render_widget(details_widget, layout.details_area);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("r/Enter", key),
        Span::from(" Play Again  "),
        Span::styled("m/Esc", key),
        Span::from(" Main Menu  "),
        Span::styled("q", key),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
