use std::time::Duration;

use crate::config::FlightConfig;
use crate::constants::MAX_THRUST;
use crate::control::mission::{MissionPhase, MissionState};
use crate::utils::timer::Ticker;

/// Operator settings the flight tick reads. Taken from the live state at
/// the start of every tick, never from a value captured at launch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightInputs {
    pub thrust: f64,
    pub engine_main: bool,
}

impl FlightInputs {
    pub fn from_state(state: &MissionState) -> Self {
        FlightInputs {
            thrust: state.thrust,
            engine_main: state.systems.engine_main,
        }
    }
}

/// One flight step.
///
/// A tick is powered when the tank held fuel going into it and the main
/// engine is on; the tick that burns the last of the fuel is the final
/// powered one. Altitude integrates the velocity from before this tick's
/// velocity change, and the phase is recomputed from the new altitude.
pub fn advance_tick(
    state: &MissionState,
    inputs: FlightInputs,
    flight: &FlightConfig,
) -> MissionState {
    let thrust = inputs.thrust.clamp(0.0, MAX_THRUST);
    let powered = state.has_fuel() && inputs.engine_main;

    let mut next = *state;
    next.fuel = (state.fuel - thrust / flight.thrust_fuel_divisor).max(0.0);
    next.oxygen = (state.oxygen - flight.oxygen_rate).max(0.0);
    next.altitude = state.altitude + state.velocity / flight.altitude_divisor;
    next.velocity = if powered {
        (state.velocity + thrust / flight.thrust_accel_divisor).min(flight.max_velocity)
    } else {
        (state.velocity - flight.coast_deceleration).max(0.0)
    };
    next.phase = state.phase.advance_for_altitude(next.altitude, flight);
    next
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightEvent {
    PhaseChanged { from: MissionPhase, to: MissionPhase },
    FuelDepleted,
    OxygenDepleted,
}

/// The running flight simulation: a periodic ticker plus the tick count.
pub struct FlightLoop {
    ticker: Ticker,
    ticks: u64,
}

impl FlightLoop {
    pub fn start(flight: &FlightConfig) -> Self {
        log::info!("Flight loop engaged");
        FlightLoop {
            ticker: Ticker::start("flight", flight.tick_period()),
            ticks: 0,
        }
    }

    pub fn advance(
        &mut self,
        state: &mut MissionState,
        elapsed: Duration,
        flight: &FlightConfig,
    ) -> Vec<FlightEvent> {
        let mut events = Vec::new();
        for _ in 0..self.ticker.advance(elapsed) {
            let next = advance_tick(state, FlightInputs::from_state(state), flight);
            self.ticks += 1;

            if next.phase != state.phase {
                log::info!(
                    "Phase change at tick {}: {} -> {} (altitude {:.1} km)",
                    self.ticks,
                    state.phase,
                    next.phase,
                    next.altitude
                );
                events.push(FlightEvent::PhaseChanged {
                    from: state.phase,
                    to: next.phase,
                });
            }
            if state.has_fuel() && !next.has_fuel() {
                log::warn!("Fuel depleted at tick {}", self.ticks);
                events.push(FlightEvent::FuelDepleted);
            }
            if state.oxygen > 0.0 && next.oxygen <= 0.0 {
                log::warn!("Oxygen depleted at tick {}", self.ticks);
                events.push(FlightEvent::OxygenDepleted);
            }

            *state = next;
        }
        events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Mission time elapsed since the loop started, in whole ticks.
    pub fn mission_time(&self) -> Duration {
        u32::try_from(self.ticks)
            .ok()
            .and_then(|ticks| self.ticker.period().checked_mul(ticks))
            .unwrap_or(Duration::MAX)
    }
}
