use crate::controller::Controller;
use crate::models::GamePhase;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Continue,
    Quit,
}

/// Setup-screen field that arrow keys currently edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuField {
    #[default]
    Category,
    Difficulty,
    Count,
}

impl MenuField {
    pub fn next(self) -> Self {
        match self {
            MenuField::Category => MenuField::Difficulty,
            MenuField::Difficulty => MenuField::Count,
            MenuField::Count => MenuField::Count,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            MenuField::Category => MenuField::Category,
            MenuField::Difficulty => MenuField::Category,
            MenuField::Count => MenuField::Difficulty,
        }
    }
}

/// Cursor state owned by the terminal front end, not by the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_field: MenuField,
    highlight: (usize, usize),
}

impl UiState {
    /// Highlighted answer for the question at `question_index`.
    pub fn highlighted_answer(&self, question_index: usize) -> usize {
        let (index, answer) = self.highlight;
        if index == question_index { answer } else { 0 }
    }

    fn move_highlight(&mut self, question_index: usize, answer_count: usize, forward: bool) {
        if answer_count == 0 {
            return;
        }
        let current = self.highlighted_answer(question_index);
        let next = if forward {
            (current + 1).min(answer_count - 1)
        } else {
            current.saturating_sub(1)
        };
        self.highlight = (question_index, next);
    }
}

pub fn handle_key(controller: &mut Controller, ui: &mut UiState, key: KeyEvent) -> InputAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    match controller.game().phase() {
        GamePhase::Menu => handle_menu_input(controller, ui, key.code),
        GamePhase::Playing => handle_playing_input(controller, ui, key.code),
        GamePhase::Result => handle_result_input(controller, ui, key.code),
    }
}

fn handle_menu_input(controller: &mut Controller, ui: &mut UiState, code: KeyCode) -> InputAction {
    let mut settings = controller.game().settings();
    match code {
        KeyCode::Esc | KeyCode::Char('q') => return InputAction::Quit,
        KeyCode::Up => ui.menu_field = ui.menu_field.prev(),
        KeyCode::Down | KeyCode::Tab => ui.menu_field = ui.menu_field.next(),
        KeyCode::Left | KeyCode::Right => {
            let forward = code == KeyCode::Right;
            match ui.menu_field {
                MenuField::Category => {
                    settings.category = if forward {
                        settings.category.next()
                    } else {
                        settings.category.prev()
                    };
                }
                MenuField::Difficulty => {
                    settings.difficulty = if forward {
                        settings.difficulty.next()
                    } else {
                        settings.difficulty.prev()
                    };
                }
                MenuField::Count => {
                    settings.count = if forward {
                        settings.next_count()
                    } else {
                        settings.prev_count()
                    };
                }
            }
            controller.set_settings(settings);
        }
        KeyCode::Enter => {
            ui.highlight = (0, 0);
            controller.start(settings);
        }
        _ => {}
    }
    InputAction::Continue
}

fn handle_playing_input(
    controller: &mut Controller,
    ui: &mut UiState,
    code: KeyCode,
) -> InputAction {
    let Some(session) = controller.game().session() else {
        return InputAction::Continue;
    };
    let index = session.current_index;
    let answer_count = session
        .current_question()
        .map_or(0, |question| question.answers.len());
    let answered = session.answered;

    match code {
        KeyCode::Esc | KeyCode::Char('m') => {
            ui.menu_field = MenuField::default();
            controller.go_home();
        }
        KeyCode::Up if !answered => ui.move_highlight(index, answer_count, false),
        KeyCode::Down if !answered => ui.move_highlight(index, answer_count, true),
        KeyCode::Enter if !answered && answer_count > 0 => {
            controller.select_answer(Some(ui.highlighted_answer(index)));
        }
        KeyCode::Char(c) if !answered => {
            if let Some(digit) = c.to_digit(10)
                && digit >= 1
                && (digit as usize) <= answer_count
            {
                let answer = digit as usize - 1;
                ui.highlight = (index, answer);
                controller.select_answer(Some(answer));
            }
        }
        _ => {}
    }
    InputAction::Continue
}

fn handle_result_input(
    controller: &mut Controller,
    ui: &mut UiState,
    code: KeyCode,
) -> InputAction {
    match code {
        KeyCode::Char('q') => return InputAction::Quit,
        KeyCode::Char('r') | KeyCode::Enter => {
            ui.highlight = (0, 0);
            controller.restart();
        }
        KeyCode::Char('m') | KeyCode::Esc => {
            ui.menu_field = MenuField::default();
            controller.go_home();
        }
        _ => {}
    }
    InputAction::Continue
}
