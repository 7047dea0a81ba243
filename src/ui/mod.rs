pub mod layout;
mod header;
mod menu;
mod quiz;
mod summary;

pub use header::draw_header;
pub use layout::{calculate_app_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_no_questions, draw_quiz};
pub use summary::draw_summary;

use crate::controller::Controller;
use crate::input::UiState;
use crate::models::GamePhase;
use ratatui::Frame;

/// Renders the whole screen from controller state. Never mutates it.
pub fn draw(f: &mut Frame, controller: &Controller, ui: &UiState) {
    let layout = calculate_app_chunks(f.area());
    let game = controller.game();

    draw_header(f, layout.header_area, game);

    match (game.phase(), game.session()) {
        (GamePhase::Menu, _) => draw_menu(
            f,
            layout.body_area,
            game.settings(),
            game.config(),
            ui.menu_field,
            controller.stats(),
        ),
        (GamePhase::Playing, Some(session)) => draw_quiz(
            f,
            layout.body_area,
            session,
            ui.highlighted_answer(session.current_index),
        ),
        (GamePhase::Result, Some(session)) => match game.result_summary() {
            Some(summary) => draw_summary(f, layout.body_area, session, &summary),
            None => draw_no_questions(f, layout.body_area),
        },
        (_, None) => draw_no_questions(f, layout.body_area),
    }
}
