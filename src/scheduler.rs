use std::time::{Duration, Instant};

/// Upper bound on ticks reported by one poll after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 3;

/// Periodic tick source.
///
/// The owner polls [`Scheduler::due_ticks`] from its event loop and runs
/// that many ticks; nothing fires on its own.
pub trait Scheduler {
    /// Starts (or restarts) the loop with a fixed interval.
    fn start_loop(&mut self, interval: Duration, now: Instant);

    /// Stops the loop; no further ticks are reported until restarted.
    fn stop_loop(&mut self);

    fn is_running(&self) -> bool;

    /// Ticks that became due since the last poll.
    fn due_ticks(&mut self, now: Instant) -> u32;
}

/// Wall-clock scheduler over [`Instant`].
#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    running: Option<Running>,
}

#[derive(Debug, Clone, Copy)]
struct Running {
    interval: Duration,
    next_due: Instant,
}

impl IntervalScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the next tick, if running.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.running
            .map(|running| running.next_due.saturating_duration_since(now))
    }
}

impl Scheduler for IntervalScheduler {
    fn start_loop(&mut self, interval: Duration, now: Instant) {
        self.running = Some(Running {
            interval,
            next_due: now + interval,
        });
    }

    fn stop_loop(&mut self) {
        self.running = None;
    }

    fn is_running(&self) -> bool {
        self.running.is_some()
    }

    fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(running) = self.running.as_mut() else {
            return 0;
        };

        let mut due = 0;
        while running.next_due <= now {
            due += 1;
            running.next_due += running.interval;
            if due == MAX_CATCH_UP_TICKS {
                // Drop the backlog instead of replaying it.
                if running.next_due <= now {
                    running.next_due = now + running.interval;
                }
                break;
            }
        }
        due
    }
}

/// Scheduler driven by hand; reports exactly the ticks queued with
/// [`ManualScheduler::fire`].
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    running: bool,
    queued: u32,
    starts: u32,
    stops: u32,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `ticks` timer firings; dropped when the loop is stopped.
    pub fn fire(&mut self, ticks: u32) {
        if self.running {
            self.queued += ticks;
        }
    }

    /// Number of `start_loop` calls so far.
    #[must_use]
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// Number of `stop_loop` calls so far.
    #[must_use]
    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl Scheduler for ManualScheduler {
    fn start_loop(&mut self, _interval: Duration, _now: Instant) {
        self.running = true;
        self.queued = 0;
        self.starts += 1;
    }

    fn stop_loop(&mut self) {
        self.running = false;
        self.queued = 0;
        self.stops += 1;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn due_ticks(&mut self, _now: Instant) -> u32 {
        std::mem::take(&mut self.queued)
    }
}
