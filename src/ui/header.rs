use crate::game::Game;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_header(f: &mut Frame, area: Rect, game: &Game) {
    let settings = game.settings();
    let lines = vec![
        Line::from(Span::styled(
            "Quiz Challenge",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "State: {}  |  Settings: {} / {} / {} questions",
            game.phase(),
            settings.category,
            settings.difficulty,
            settings.count
        )),
        Line::from(Span::styled(
            format!("Available questions: {}", game.available_questions()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}
