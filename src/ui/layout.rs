use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
}

pub struct MenuLayout {
    pub settings_area: Rect,
    pub stats_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub question_area: Rect,
    pub answers_area: Rect,
    pub explanation_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub score_area: Rect,
    pub details_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(5), Constraint::Min(10)])
        .split(area);

    AppLayout {
        header_area: chunks[0],
        body_area: chunks[1],
    }
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        settings_area: chunks[0],
        stats_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        question_area: chunks[2],
        answers_area: chunks[3],
        explanation_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        score_area: chunks[0],
        details_area: chunks[1],
        help_area: chunks[2],
    }
}
