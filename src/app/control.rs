use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Idle,
    Playing,
    GameOver,
}

// combines the tick timer with session state management
pub struct Control {
    tick_interval: Duration,
    last_update: Instant,

    // amount of time which ticks have not yet been
    // accounted for (will be included next time this
    // is done), in units of ticks
    remainder: f64,

    // number of ticks that still need to be
    // performed to catch up with the current time
    missed_updates: Option<usize>,
    max_catch_up: usize,

    state: State,
    game_over_at: Option<Instant>,
}

impl Control {
    pub fn new(tick_interval: Duration, max_catch_up: usize) -> Self {
        Self {
            tick_interval,
            last_update: Instant::now(),
            remainder: 0.,
            missed_updates: None,
            max_catch_up: max_catch_up.max(1),
            state: State::Idle,
            game_over_at: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Start the timer from scratch, the first tick is due
    /// one interval after `now`
    pub fn play(&mut self, tick_interval: Duration, now: Instant) {
        self.tick_interval = tick_interval;
        self.state = State::Playing;
        self.last_update = now;
        self.remainder = 0.;
        self.missed_updates = None;
        self.game_over_at = None;
    }

    /// Cancels every pending tick
    pub fn stop(&mut self) {
        self.state = State::Idle;
        self.missed_updates = None;
        self.game_over_at = None;
    }

    pub fn game_over(&mut self, now: Instant) {
        self.state = State::GameOver;
        self.missed_updates = None;
        self.game_over_at = Some(now);
    }

    pub fn since_game_over(&self, now: Instant) -> Option<Duration> {
        self.game_over_at.map(|at| now.saturating_duration_since(at))
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self, now: Instant) -> bool {
        if self.state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // calculate how many ticks should have occurred
                // since the last call to can_update
                let elapsed = now.saturating_duration_since(self.last_update);
                let ticks = elapsed.as_secs_f64() / self.tick_interval.as_secs_f64() + self.remainder;
                let missed_updates = ticks as usize;

                if missed_updates > 0 {
                    self.remainder = ticks % 1.;
                    self.last_update = now;

                    // after a long stall don't replay every tick
                    let missed_updates = missed_updates.min(self.max_catch_up);
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }
}
