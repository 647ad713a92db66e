use std::time::{Duration, Instant};

/// Handle for a running periodic timer.
///
/// Owners keep it in an `Option` and cancel by taking it out; the handle
/// logs its own release when dropped, so every started timer is released
/// exactly once whichever way its owner lets go of it.
#[derive(Debug)]
pub struct Ticker {
    label: &'static str,
    period: Duration,
    carry: Duration,
}

impl Ticker {
    pub fn start(label: &'static str, period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "timer period must be non-zero");
        log::debug!("{} timer started (period {:?})", label, period);
        Ticker {
            label,
            period,
            carry: Duration::ZERO,
        }
    }

    /// Feeds elapsed host time in and returns how many whole periods fired.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry = self.carry.saturating_add(elapsed);
        let fired = self.carry.as_nanos() / self.period.as_nanos();
        let fired = u32::try_from(fired).unwrap_or(u32::MAX);
        self.carry -= self.period * fired;
        fired
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time accumulated towards the next firing.
    pub fn pending(&self) -> Duration {
        self.carry
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        log::debug!("{} timer released", self.label);
    }
}

/// Source of elapsed time for whoever drives the simulation.
pub trait Clock {
    /// Time passed since the previous call.
    fn elapsed(&mut self) -> Duration;
}

/// Deterministic clock that reports a fixed step on every call.
pub struct SteppedClock {
    step: Duration,
}

impl SteppedClock {
    pub fn new(step: Duration) -> Self {
        SteppedClock { step }
    }
}

impl Clock for SteppedClock {
    fn elapsed(&mut self) -> Duration {
        self.step
    }
}

/// Real-time clock: sleeps one frame, then reports the measured gap.
pub struct WallClock {
    frame: Duration,
    last: Instant,
}

impl WallClock {
    pub fn new(frame: Duration) -> Self {
        WallClock {
            frame,
            last: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn elapsed(&mut self) -> Duration {
        std::thread::sleep(self.frame);
        let now = Instant::now();
        let gap = now.duration_since(self.last);
        self.last = now;
        gap
    }
}
