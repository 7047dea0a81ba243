use crate::config::GameConfig;
use crate::input::MenuField;
use crate::models::Settings;
use crate::stats::PlayStats;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::layout::calculate_menu_chunks;

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn field_item(label: &str, value: String, focused: bool) -> ListItem<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if focused { "> " } else { "  " };
    ListItem::new(format!("{}{:<12} < {} >", marker, label, value)).style(style)
}

fn draw_stat(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let stat = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(title.to_string()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(stat, area);
}

pub fn draw_menu(
    f: &mut Frame,
    area: Rect,
    settings: Settings,
    config: &GameConfig,
    focused: MenuField,
    stats: &PlayStats,
) {
    let layout = calculate_menu_chunks(area);

    let items = vec![
        field_item(
            "Category",
            settings.category.label().to_string(),
            focused == MenuField::Category,
        ),
        field_item(
            "Difficulty",
            format!(
                "{} ({}s)",
                settings.difficulty.label(),
                config.time_budget(settings.difficulty)
            ),
            focused == MenuField::Difficulty,
        ),
        field_item(
            "Questions",
            settings.count.to_string(),
            focused == MenuField::Count,
        ),
    ];
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Game Settings"),
    );
    f.render_widget(list, layout.settings_area);

    let stat_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout.stats_area);

    let best = stats
        .best_percentage
        .map_or_else(|| "-".to_string(), |p| format!("{}%", p));
    let grade = stats
        .average_grade()
        .map_or_else(|| "-".to_string(), |g| g.to_string());
    draw_stat(f, stat_chunks[0], "Best Score", best, Color::Blue);
    draw_stat(
        f,
        stat_chunks[1],
        "Games Played",
        stats.games_played.to_string(),
        Color::Yellow,
    );
    draw_stat(f, stat_chunks[2], "Average Grade", grade, Color::Green);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Field  "),
        key_span("←/→"),
        Span::from(" Change  "),
        key_span("Enter"),
        Span::from(" Start Game  "),
        key_span("Esc/q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
