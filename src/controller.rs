use crate::bank::QuestionBank;
use crate::config::GameConfig;
use crate::game::{Effect, Game};
use crate::logger;
use crate::models::{GamePhase, Settings};
use crate::stats::PlayStats;
use crate::timer::{Scheduler, TimerEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Binds the game state machine to real timers.
///
/// Every operation runs the matching `Game` transition and hands the
/// resulting effects to the scheduler, so timer tasks are always cancelled
/// before new ones are started.
#[derive(Debug)]
pub struct Controller {
    game: Game,
    scheduler: Scheduler,
    stats: PlayStats,
}

impl Controller {
    pub fn new(game: Game, scheduler: Scheduler) -> Self {
        Self {
            game,
            scheduler,
            stats: PlayStats::default(),
        }
    }

    /// Controller plus the receiving end its timers report to.
    pub fn with_channel(
        bank: QuestionBank,
        config: GameConfig,
    ) -> (Self, UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(tx, config.tick_interval, config.reveal_delay);
        (Self::new(Game::new(bank, config), scheduler), rx)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn stats(&self) -> &PlayStats {
        &self.stats
    }

    pub fn is_countdown_active(&self) -> bool {
        self.scheduler.is_countdown_active()
    }

    pub fn has_pending_advance(&self) -> bool {
        self.scheduler.has_pending_advance()
    }

    pub fn set_settings(&mut self, settings: Settings) -> bool {
        self.game.set_settings(settings)
    }

    pub fn start(&mut self, settings: Settings) {
        let effects = self.game.start(settings);
        self.apply(&effects);
    }

    pub fn restart(&mut self) {
        let effects = self.game.restart();
        self.apply(&effects);
    }

    pub fn select_answer(&mut self, answer: Option<usize>) {
        let effects = self.game.select_answer(answer);
        self.apply(&effects);
    }

    pub fn go_home(&mut self) {
        let effects = self.game.go_home();
        self.apply(&effects);
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) {
        let before = self.game.phase();
        let effects = match event {
            TimerEvent::Tick { epoch } => self.game.tick(epoch),
            TimerEvent::AdvanceDue { epoch } => self.game.advance(epoch),
        };
        self.apply(&effects);

        if before == GamePhase::Playing
            && self.game.phase() == GamePhase::Result
            && let Some(summary) = self.game.result_summary()
        {
            self.stats.record(&summary);
            logger::log(&format!(
                "Recorded result {}% ({} games this run)",
                summary.percentage, self.stats.games_played
            ));
        }
    }

    fn apply(&mut self, effects: &[Effect]) {
        self.scheduler.apply(effects);
    }
}
