use crate::bank::QuestionBank;
use crate::config::GameConfig;
use crate::controller::Controller;
use crate::input::{MenuField, UiState};
use crate::models::{Category, Difficulty, GamePhase, Settings};
use crate::timer::TimerEvent;
use crate::ui::draw;
use ratatui::{backend::TestBackend, Terminal};

/// Draws one frame and returns the screen as text, one line per row.
fn render(controller: &Controller, ui: &UiState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw(f, controller, ui)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for row in buffer.content().chunks(buffer.area.width as usize) {
        for cell in row {
            screen.push_str(cell.symbol());
        }
        screen.push('\n');
    }
    screen
}

fn controller() -> Controller {
    Controller::with_channel(QuestionBank::builtin(), GameConfig::default()).0
}

fn easy_general() -> Settings {
    Settings {
        category: Category::General,
        difficulty: Difficulty::Easy,
        count: 5,
    }
}

#[test]
fn test_menu_screen() {
    let controller = controller();
    let screen = render(&controller, &UiState::default());

    assert!(screen.contains("Quiz Challenge"));
    assert!(screen.contains("State: menu"));
    assert!(screen.contains("general / normal / 10 questions"));
    assert!(screen.contains("Available questions: 2"));
    assert!(screen.contains("Game Settings"));
    assert!(screen.contains("> Category"));
    assert!(screen.contains("General Knowledge"));
    assert!(screen.contains("Normal (10s)"));
    assert!(screen.contains("Games Played"));
    assert!(screen.contains("Start Game"));
}

#[test]
fn test_menu_focus_follows_field() {
    let controller = controller();
    let mut ui = UiState::default();
    ui.menu_field = MenuField::Count;
    let screen = render(&controller, &ui);
    assert!(screen.contains("> Questions"));
    assert!(!screen.contains("> Category"));
}

#[tokio::test]
async fn test_playing_screen_before_answer() {
    let mut controller = controller();
    controller.start(easy_general());
    let screen = render(&controller, &UiState::default());

    assert!(screen.contains("State: playing"));
    assert!(screen.contains("Question 1 / 2"));
    assert!(screen.contains("Time: 15s"));
    assert!(screen.contains("What is the capital of Japan?"));
    assert!(screen.contains(" >  1. Osaka"));
    assert!(screen.contains("2. Tokyo"));
    assert!(!screen.contains("Correct!"));
    assert!(!screen.contains("Edo was renamed"));
}

#[tokio::test]
async fn test_playing_screen_reveals_explanation() {
    let mut controller = controller();
    controller.start(easy_general());
    controller.select_answer(Some(0));
    let screen = render(&controller, &UiState::default());

    assert!(screen.contains("[✗] 1. Osaka"));
    assert!(screen.contains("[✓] 2. Tokyo"));
    assert!(screen.contains("Incorrect."));
    assert!(screen.contains("Edo was renamed Tokyo in 1868."));
    assert!(!screen.contains("Submit"));
}

#[tokio::test]
async fn test_playing_screen_timeout_verdict() {
    let mut controller = controller();
    controller.start(Settings {
        category: Category::Tech,
        difficulty: Difficulty::Hard,
        count: 5,
    });
    let epoch = controller.game().epoch();
    for _ in 0..7 {
        controller.handle_timer_event(TimerEvent::Tick { epoch });
    }
    let screen = render(&controller, &UiState::default());
    assert!(screen.contains("Time: 0s"));
    assert!(screen.contains("Time's up!"));
    assert!(screen.contains("[✓] 3. Secure"));
}

#[tokio::test]
async fn test_empty_session_shows_placeholder() {
    let bank = QuestionBank {
        general: vec![],
        tech: vec![],
    };
    let (mut controller, _rx) = Controller::with_channel(bank, GameConfig::default());
    controller.start(Settings::default());
    let screen = render(&controller, &UiState::default());

    assert!(screen.contains("No questions available"));
    assert!(screen.contains("Available questions: 0"));
    assert!(!screen.contains("Question 1"));
}

#[tokio::test]
async fn test_result_screen() {
    let mut controller = controller();
    controller.start(easy_general());
    controller.select_answer(Some(1));
    controller.handle_timer_event(TimerEvent::AdvanceDue {
        epoch: controller.game().epoch(),
    });
    controller.select_answer(Some(0));
    controller.handle_timer_event(TimerEvent::AdvanceDue {
        epoch: controller.game().epoch(),
    });
    assert_eq!(controller.game().phase(), GamePhase::Result);

    let screen = render(&controller, &UiState::default());
    assert!(screen.contains("State: result"));
    assert!(screen.contains("Game Over!"));
    assert!(screen.contains("1 / 2"));
    assert!(screen.contains("Accuracy: 50%"));
    assert!(screen.contains("Keep practicing"));
    assert!(screen.contains("Q1: What is the capital of Japan?"));
    assert!(screen.contains("[✓] Correct"));
    assert!(screen.contains("[✗] Incorrect"));
    assert!(screen.contains("Answer: Everest"));
    assert!(screen.contains("Play Again"));
}

#[tokio::test]
async fn test_menu_shows_stats_after_a_game() {
    let mut controller = controller();
    controller.start(easy_general());
    controller.select_answer(Some(1));
    controller.handle_timer_event(TimerEvent::AdvanceDue {
        epoch: controller.game().epoch(),
    });
    controller.select_answer(Some(2));
    controller.handle_timer_event(TimerEvent::AdvanceDue {
        epoch: controller.game().epoch(),
    });
    controller.go_home();

    let screen = render(&controller, &UiState::default());
    assert!(screen.contains("100%"));
    assert!(screen.contains("Best Score"));
}
