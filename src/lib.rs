pub mod bank;
pub mod config;
pub mod controller;
pub mod game;
pub mod input;
pub mod logger;
pub mod models;
pub mod selector;
pub mod stats;
pub mod timer;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use bank::{BankError, QuestionBank};
pub use config::{ConfigError, GameConfig};
pub use controller::Controller;
pub use game::{Effect, Epoch, Game, Session};
pub use input::{handle_key, InputAction, MenuField, UiState};
pub use models::{
    AnswerOutcome, Category, Difficulty, GamePhase, Grade, Question, ResultSummary, Settings,
};
pub use selector::select;
pub use stats::PlayStats;
pub use timer::{Scheduler, TimerEvent};
pub use ui::draw;
pub use utils::truncate_string;
