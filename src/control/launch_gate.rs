use std::time::Duration;

use crate::config::LaunchGateConfig;
use crate::utils::timer::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Press arrived while launched or counting down.
    Ignored,
    /// First press: waiting for confirmation.
    Armed,
    /// Confirmed within the window.
    Fire,
}

/// Two-press launch trigger. The first press arms it and opens a
/// confirmation window; a second press inside that window fires.
pub struct LaunchGate {
    window: Duration,
    confirm_timer: Option<Ticker>,
}

impl LaunchGate {
    pub fn new(config: &LaunchGateConfig) -> Self {
        LaunchGate {
            window: config.confirm_window(),
            confirm_timer: None,
        }
    }

    pub fn press(&mut self, launched: bool, counting_down: bool) -> GateOutcome {
        if launched || counting_down {
            log::debug!("Launch press ignored (launched: {launched}, counting down: {counting_down})");
            return GateOutcome::Ignored;
        }

        match self.confirm_timer.take() {
            Some(_) => {
                log::info!("Launch confirmed");
                GateOutcome::Fire
            }
            None => {
                self.confirm_timer = Some(Ticker::start("launch confirmation", self.window));
                log::info!("Launch armed, awaiting confirmation");
                GateOutcome::Armed
            }
        }
    }

    /// Returns `true` when the confirmation window ran out during this step.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let expired = self
            .confirm_timer
            .as_mut()
            .is_some_and(|timer| timer.advance(elapsed) > 0);
        if expired {
            self.confirm_timer = None;
            log::info!("Launch confirmation window expired");
        }
        expired
    }

    pub fn disarm(&mut self) {
        self.confirm_timer = None;
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm_timer.is_some()
    }

    /// Time left to confirm, if armed.
    pub fn time_to_expiry(&self) -> Option<Duration> {
        self.confirm_timer
            .as_ref()
            .map(|timer| timer.period().saturating_sub(timer.pending()))
    }
}
