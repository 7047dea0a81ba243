//! Game flow state machine.
//!
//! `Game` owns the phase, the settings and the running [`Session`]. Every
//! operation is a plain transition over that state and returns the timer
//! [`Effect`]s the caller has to carry out. Nothing here touches a clock.
//!
//! Each step of a session (a question waiting for an answer, a resolved
//! question waiting for its reveal delay) is identified by an [`Epoch`].
//! Timer messages carry the epoch they were scheduled for and are dropped
//! when it no longer matches.

use crate::bank::QuestionBank;
use crate::config::GameConfig;
use crate::logger;
use crate::models::{AnswerOutcome, GamePhase, Question, ResultSummary, Settings};
use crate::selector::select;

pub type Epoch = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartCountdown { epoch: Epoch },
    CancelCountdown,
    ScheduleAdvance { epoch: Epoch },
    CancelAdvance,
}

/// State of one playthrough.
#[derive(Debug, Clone)]
pub struct Session {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: usize,
    pub selected_answer: Option<usize>,
    pub answered: bool,
    pub time_left: u32,
    pub time_budget: u32,
    pub outcomes: Vec<AnswerOutcome>,
}

impl Session {
    fn new(questions: Vec<Question>, time_budget: u32) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            answered: false,
            time_left: time_budget,
            time_budget,
            outcomes: Vec::new(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Question the outcome at `index` refers to.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[derive(Debug)]
pub struct Game {
    bank: QuestionBank,
    config: GameConfig,
    phase: GamePhase,
    settings: Settings,
    session: Option<Session>,
    epoch: Epoch,
}

impl Game {
    pub fn new(bank: QuestionBank, config: GameConfig) -> Self {
        Self {
            bank,
            config,
            phase: GamePhase::Menu,
            settings: Settings::default(),
            session: None,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            GamePhase::Playing => self.session.as_ref()?.current_question(),
            _ => None,
        }
    }

    /// Questions the current settings would produce.
    pub fn available_questions(&self) -> usize {
        select(
            &self.bank,
            self.settings.category,
            self.settings.difficulty,
            self.settings.count,
        )
        .len()
    }

    pub fn result_summary(&self) -> Option<ResultSummary> {
        match (self.phase, &self.session) {
            (GamePhase::Result, Some(session)) => {
                Some(ResultSummary::new(session.score, session.total()))
            }
            _ => None,
        }
    }

    /// Settings are only editable on the menu.
    pub fn set_settings(&mut self, settings: Settings) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.settings = settings;
        true
    }

    pub fn start(&mut self, settings: Settings) -> Vec<Effect> {
        if self.phase == GamePhase::Playing {
            logger::log("Ignoring start while a game is running");
            return Vec::new();
        }

        self.settings = settings;
        let questions = select(
            &self.bank,
            settings.category,
            settings.difficulty,
            settings.count,
        );
        let budget = self.config.time_budget(settings.difficulty);
        let has_questions = !questions.is_empty();

        self.epoch += 1;
        self.session = Some(Session::new(questions, budget));
        self.phase = GamePhase::Playing;

        logger::log(&format!(
            "Game started: {} / {} / {} ({} questions, {}s each)",
            settings.category,
            settings.difficulty,
            settings.count,
            self.session.as_ref().map_or(0, Session::total),
            budget
        ));

        let mut effects = vec![Effect::CancelCountdown, Effect::CancelAdvance];
        if has_questions {
            effects.push(Effect::StartCountdown { epoch: self.epoch });
        }
        effects
    }

    /// Play again with the settings of the finished game.
    pub fn restart(&mut self) -> Vec<Effect> {
        if self.phase != GamePhase::Result {
            return Vec::new();
        }
        self.start(self.settings)
    }

    /// Resolves the current question. `None` means the player ran out of time.
    pub fn select_answer(&mut self, answer: Option<usize>) -> Vec<Effect> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.answered {
            logger::log("Ignoring answer for an already resolved question");
            return Vec::new();
        }
        let Some(question) = session.questions.get(session.current_index) else {
            return Vec::new();
        };
        if let Some(index) = answer
            && index >= question.answers.len()
        {
            return Vec::new();
        }

        let is_correct = question.is_correct(answer);
        let outcome = AnswerOutcome {
            question: question.question.clone(),
            user_answer: answer,
            correct_answer: question.correct_answer,
            is_correct,
            time_spent: session.time_budget.saturating_sub(session.time_left),
        };

        session.answered = true;
        session.selected_answer = answer;
        if is_correct {
            session.score += 1;
        }
        session.outcomes.push(outcome);

        logger::log(&format!(
            "Question {} resolved: answer {:?}, correct {}, score {}",
            session.current_index + 1,
            answer,
            is_correct,
            session.score
        ));

        self.epoch += 1;
        vec![
            Effect::CancelCountdown,
            Effect::ScheduleAdvance { epoch: self.epoch },
        ]
    }

    /// One countdown tick. Reaching zero resolves the question unanswered.
    pub fn tick(&mut self, epoch: Epoch) -> Vec<Effect> {
        if epoch != self.epoch || self.phase != GamePhase::Playing {
            logger::log(&format!("Dropping stale tick for epoch {}", epoch));
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if session.answered || session.current_question().is_none() {
            return Vec::new();
        }

        session.time_left = session.time_left.saturating_sub(1);
        if session.time_left == 0 {
            logger::log("Time is up");
            return self.select_answer(None);
        }
        Vec::new()
    }

    /// Moves past a resolved question once its reveal delay is over.
    pub fn advance(&mut self, epoch: Epoch) -> Vec<Effect> {
        if epoch != self.epoch || self.phase != GamePhase::Playing {
            logger::log(&format!("Dropping stale advance for epoch {}", epoch));
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if !session.answered {
            return Vec::new();
        }

        self.epoch += 1;
        if session.current_index + 1 >= session.total() {
            session.current_index = 0;
            self.phase = GamePhase::Result;
            logger::log(&format!(
                "Game finished: {} / {}",
                session.score,
                session.total()
            ));
            return vec![Effect::CancelCountdown];
        }

        session.current_index += 1;
        session.answered = false;
        session.selected_answer = None;
        session.time_left = session.time_budget;
        vec![
            Effect::CancelCountdown,
            Effect::StartCountdown { epoch: self.epoch },
        ]
    }

    pub fn go_home(&mut self) -> Vec<Effect> {
        self.epoch += 1;
        self.session = None;
        self.settings = Settings::default();
        self.phase = GamePhase::Menu;
        logger::log("Returned to menu");
        vec![Effect::CancelCountdown, Effect::CancelAdvance]
    }
}
