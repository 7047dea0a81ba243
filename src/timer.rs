use crate::game::{Effect, Epoch};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Messages timer tasks deliver to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { epoch: Epoch },
    AdvanceDue { epoch: Epoch },
}

/// Owns the countdown task and the reveal-delay task. At most one of each is
/// alive; starting either one aborts its predecessor first.
#[derive(Debug)]
pub struct Scheduler {
    tx: UnboundedSender<TimerEvent>,
    tick_interval: Duration,
    reveal_delay: Duration,
    countdown: Option<JoinHandle<()>>,
    reveal: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(
        tx: UnboundedSender<TimerEvent>,
        tick_interval: Duration,
        reveal_delay: Duration,
    ) -> Self {
        Self {
            tx,
            tick_interval,
            reveal_delay,
            countdown: None,
            reveal: None,
        }
    }

    pub fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::StartCountdown { epoch } => self.start_countdown(epoch),
                Effect::CancelCountdown => self.cancel_countdown(),
                Effect::ScheduleAdvance { epoch } => self.schedule_advance(epoch),
                Effect::CancelAdvance => self.cancel_advance(),
            }
        }
    }

    pub fn start_countdown(&mut self, epoch: Epoch) {
        self.cancel_countdown();
        let tx = self.tx.clone();
        let period = self.tick_interval;
        self.countdown = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TimerEvent::Tick { epoch }).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }

    pub fn schedule_advance(&mut self, epoch: Epoch) {
        self.cancel_advance();
        let tx = self.tx.clone();
        let delay = self.reveal_delay;
        self.reveal = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(TimerEvent::AdvanceDue { epoch });
        }));
    }

    pub fn cancel_advance(&mut self) {
        if let Some(handle) = self.reveal.take() {
            handle.abort();
        }
    }

    pub fn is_countdown_active(&self) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn has_pending_advance(&self) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_countdown();
        self.cancel_advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn scheduler() -> (Scheduler, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Scheduler::new(tx, Duration::from_secs(1), Duration::from_secs(2)),
            rx,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_every_interval() {
        let (mut scheduler, mut rx) = scheduler();
        let started = Instant::now();
        scheduler.start_countdown(3);

        for n in 1..=3 {
            assert_eq!(rx.recv().await, Some(TimerEvent::Tick { epoch: 3 }));
            assert_eq!(started.elapsed(), Duration::from_secs(n));
        }
        assert!(scheduler.is_countdown_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restarting_countdown_replaces_old_one() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.start_countdown(1);
        scheduler.start_countdown(2);

        time::sleep(Duration::from_millis(3500)).await;
        let mut ticks = Vec::new();
        while let Ok(event) = rx.try_recv() {
            ticks.push(event);
        }
        assert_eq!(ticks, vec![TimerEvent::Tick { epoch: 2 }; 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_fires_once_after_delay() {
        let (mut scheduler, mut rx) = scheduler();
        let started = Instant::now();
        scheduler.schedule_advance(7);
        assert!(scheduler.has_pending_advance());

        assert_eq!(rx.recv().await, Some(TimerEvent::AdvanceDue { epoch: 7 }));
        assert_eq!(started.elapsed(), Duration::from_secs(2));

        time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timers_never_fire() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.apply(&[
            Effect::StartCountdown { epoch: 1 },
            Effect::ScheduleAdvance { epoch: 1 },
        ]);
        scheduler.apply(&[Effect::CancelCountdown, Effect::CancelAdvance]);

        assert!(!scheduler.is_countdown_active());
        assert!(!scheduler.has_pending_advance());

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
