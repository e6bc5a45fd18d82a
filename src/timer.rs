use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const BLINK_INTERVAL: Duration = Duration::from_millis(400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Counting,
    Blinking,
}

/// What the countdown widget should show for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerDisplay {
    Idle,
    Remaining(u32),
    Expired { on: bool },
}

/// Countdown for one open question. Counting decrements once per second;
/// reaching zero enters a blinking alert that toggles every 400ms until
/// `reset`. All pending work is the single `deadline`, so a reset can never
/// leave a stale tick behind.
pub struct QuestionTimer {
    phase: Phase,
    countdown_secs: u32,
    remaining: u32,
    blink_on: bool,
    deadline: Option<Instant>,
}

impl QuestionTimer {
    pub fn new(countdown_secs: u32) -> Self {
        Self {
            phase: Phase::Idle,
            countdown_secs,
            remaining: countdown_secs,
            blink_on: false,
            deadline: None,
        }
    }

    /// No-op unless idle; a running or blinking timer keeps its state.
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Counting;
        self.remaining = self.countdown_secs;
        self.deadline = Some(now + TICK_INTERVAL);
    }

    /// Advances past every deadline that `now` has reached. Each new deadline
    /// is derived from the previous one, not from `now`, so the cadence does
    /// not drift and a stalled event loop catches up in one call.
    pub fn on_tick(&mut self, now: Instant) {
        while let Some(due) = self.deadline {
            if now < due {
                break;
            }
            match self.phase {
                Phase::Counting => {
                    self.remaining = self.remaining.saturating_sub(1);
                    if self.remaining == 0 {
                        self.phase = Phase::Blinking;
                        self.blink_on = true;
                        self.deadline = Some(due + BLINK_INTERVAL);
                    } else {
                        self.deadline = Some(due + TICK_INTERVAL);
                    }
                }
                Phase::Blinking => {
                    self.blink_on = !self.blink_on;
                    self.deadline = Some(due + BLINK_INTERVAL);
                }
                Phase::Idle => {
                    self.deadline = None;
                }
            }
        }
    }

    /// Unconditionally cancels any pending deadline and returns to idle.
    /// Safe to call when already idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining = self.countdown_secs;
        self.blink_on = false;
        self.deadline = None;
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn display(&self) -> TimerDisplay {
        match self.phase {
            Phase::Idle => TimerDisplay::Idle,
            Phase::Counting => TimerDisplay::Remaining(self.remaining),
            Phase::Blinking => TimerDisplay::Expired { on: self.blink_on },
        }
    }
}
