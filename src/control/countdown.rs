use std::time::Duration;

use crate::config::CountdownConfig;
use crate::utils::timer::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownEvent {
    Tick { remaining: u32 },
    /// `overrun` is the part of the step left over after the last unit.
    Complete { overrun: Duration },
}

/// Counts down a fixed number of units while active and signals completion
/// once. The ticker only exists between activation and completion or
/// deactivation.
pub struct CountdownController {
    units: u32,
    unit: Duration,
    remaining: u32,
    ticker: Option<Ticker>,
}

impl CountdownController {
    pub fn new(config: &CountdownConfig) -> Self {
        CountdownController {
            units: config.units,
            unit: config.unit(),
            remaining: config.units,
            ticker: None,
        }
    }

    /// Starts counting from the full duration. Returns `false` if already running.
    pub fn activate(&mut self) -> bool {
        if self.ticker.is_some() {
            return false;
        }
        self.remaining = self.units;
        self.ticker = Some(Ticker::start("countdown", self.unit));
        log::info!("Countdown started: T-{}", self.remaining);
        true
    }

    pub fn deactivate(&mut self) {
        if self.ticker.take().is_some() {
            log::info!("Countdown halted at T-{}", self.remaining);
        }
        self.remaining = self.units;
    }

    pub fn advance(&mut self, elapsed: Duration) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        let Some(ticker) = self.ticker.as_mut() else {
            return events;
        };

        let fired = ticker.advance(elapsed);
        for spent in 1..=fired {
            self.remaining = self.remaining.saturating_sub(1);
            events.push(CountdownEvent::Tick {
                remaining: self.remaining,
            });
            if self.remaining == 0 {
                let overrun = ticker.pending() + self.unit * (fired - spent);
                self.ticker = None;
                events.push(CountdownEvent::Complete { overrun });
                log::info!("Countdown complete: ignition");
                break;
            }
        }
        events
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    /// Fraction of the countdown still to go, used to draw the countdown ring.
    pub fn progress(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.units)
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        let total = self.unit.mul_f64(f64::from(self.remaining)).as_secs();
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
