use std::time::{Duration, Instant};

use crate::game::{Game, GameStatus, TickOutcome};
use crate::input::{Arbitration, GameInput, InputArbiter};
use crate::scheduler::Scheduler;
use crate::score::HighScoreStore;

/// Couples a game with its tick scheduler and input arbiter.
///
/// The tick loop runs exactly while the game is playing: it is started when
/// an input moves the game into `Playing` and stopped on the same call that
/// leaves it.
#[derive(Debug)]
pub struct Session<S, T> {
    game: Game<S>,
    scheduler: T,
    arbiter: InputArbiter,
}

impl<S: HighScoreStore, T: Scheduler> Session<S, T> {
    #[must_use]
    pub fn new(game: Game<S>, scheduler: T) -> Self {
        Self {
            game,
            scheduler,
            arbiter: InputArbiter::default(),
        }
    }

    /// Routes one input event through the arbiter.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Arbitration {
        let outcome = self.arbiter.apply(&mut self.game, input);
        match outcome {
            Arbitration::Rejected(direction) => log::debug!("rejected reversal to {direction:?}"),
            Arbitration::Started => log::debug!("started by {input:?}"),
            Arbitration::Steered(_) | Arbitration::Ignored => {}
        }
        self.sync_loop(now);
        outcome
    }

    /// Runs every tick that is due at `now` and returns how many ran.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.scheduler.due_ticks(now);
        let mut ran = 0;

        for _ in 0..due {
            let outcome = self.game.tick();
            if outcome == TickOutcome::Skipped {
                break;
            }
            ran += 1;
            if matches!(outcome, TickOutcome::Died(_)) {
                break;
            }
        }

        self.sync_loop(now);
        ran
    }

    fn sync_loop(&mut self, now: Instant) {
        let playing = self.game.status() == GameStatus::Playing;
        if playing && !self.scheduler.is_running() {
            let interval = Duration::from_millis(self.game.config().tick_interval_ms);
            self.scheduler.start_loop(interval, now);
        } else if !playing && self.scheduler.is_running() {
            self.scheduler.stop_loop();
        }
    }
}

impl<S, T> Session<S, T> {
    #[must_use]
    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    #[must_use]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}
