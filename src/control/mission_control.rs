use std::time::Duration;

use crate::config::SimConfig;
use crate::constants::{MAX_ANGLE, MAX_THRUST};
use crate::control::countdown::{CountdownController, CountdownEvent};
use crate::control::flight::{FlightEvent, FlightLoop};
use crate::control::launch_gate::{GateOutcome, LaunchGate};
use crate::control::mission::{MissionPhase, MissionState};
use crate::control::systems::Subsystem;
use crate::errors::SimulationError;
use crate::telemetry_system::comms::CommsLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionEvent {
    ConfirmationArmed,
    ConfirmationExpired,
    CountdownStarted,
    CountdownTick(u32),
    CountdownComplete,
    PhaseChanged { from: MissionPhase, to: MissionPhase },
    FuelDepleted,
    OxygenDepleted,
    MissionReset,
}

impl From<FlightEvent> for MissionEvent {
    fn from(event: FlightEvent) -> Self {
        match event {
            FlightEvent::PhaseChanged { from, to } => MissionEvent::PhaseChanged { from, to },
            FlightEvent::FuelDepleted => MissionEvent::FuelDepleted,
            FlightEvent::OxygenDepleted => MissionEvent::OxygenDepleted,
        }
    }
}

/// Owns the mission state and every timer that mutates it. The host feeds
/// elapsed time into [`MissionControl::advance`] and forwards operator
/// input to the action methods; disallowed actions are ignored.
pub struct MissionControl {
    config: SimConfig,
    state: MissionState,
    countdown: CountdownController,
    gate: LaunchGate,
    flight: Option<FlightLoop>,
    comms: CommsLog,
}

impl MissionControl {
    pub fn new(config: SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SimConfig) -> Self {
        MissionControl {
            state: MissionState::new(&config.operator),
            countdown: CountdownController::new(&config.countdown),
            gate: LaunchGate::new(&config.launch_gate),
            flight: None,
            comms: CommsLog::new(),
            config,
        }
    }

    /// Launch button press. A confirmed press starts the countdown.
    pub fn launch(&mut self) -> (GateOutcome, Vec<MissionEvent>) {
        let outcome = self
            .gate
            .press(self.is_launched(), self.is_counting_down());
        let events = match outcome {
            GateOutcome::Ignored => Vec::new(),
            GateOutcome::Armed => vec![MissionEvent::ConfirmationArmed],
            GateOutcome::Fire => {
                self.countdown.activate();
                vec![MissionEvent::CountdownStarted]
            }
        };
        (outcome, events)
    }

    pub fn set_thrust(&mut self, thrust: f64) -> bool {
        if !self.thrust_adjustable() || !thrust.is_finite() {
            log::debug!("Thrust change to {thrust} rejected");
            return false;
        }
        self.state.thrust = thrust.clamp(0.0, MAX_THRUST);
        true
    }

    pub fn set_angle(&mut self, angle: f64) -> bool {
        if !self.angle_adjustable() || !angle.is_finite() {
            log::debug!("Angle change to {angle} rejected");
            return false;
        }
        self.state.angle = angle.clamp(0.0, MAX_ANGLE);
        true
    }

    pub fn toggle_system(&mut self, system: Subsystem) -> bool {
        if !self.is_launched() {
            log::debug!("Toggle of {system} rejected before launch");
            return false;
        }
        let fuel = self.state.fuel;
        let toggled = self.state.systems.toggle(system, fuel);
        if toggled {
            log::info!(
                "{} switched {}",
                system,
                if self.state.systems.is_enabled(system) { "on" } else { "off" }
            );
        } else {
            log::debug!("{system} cannot be switched on with an empty tank");
        }
        toggled
    }

    pub fn send_message(&mut self, text: &str) -> bool {
        self.comms
            .send(text, self.is_launched(), self.state.systems.comms)
    }

    /// Abort: cancel every timer and restore the initial state.
    pub fn reset(&mut self) -> Vec<MissionEvent> {
        self.countdown.deactivate();
        self.gate.disarm();
        if self.flight.take().is_some() {
            log::info!("Flight loop stopped");
        }
        self.comms.clear();
        self.state = MissionState::new(&self.config.operator);
        log::info!("Mission reset");
        vec![MissionEvent::MissionReset]
    }

    pub fn advance(&mut self, elapsed: Duration) -> Vec<MissionEvent> {
        let mut events = Vec::new();
        // A loop ignited during this step is fed only the countdown overrun.
        let flying = self.flight.is_some();

        if self.gate.advance(elapsed) {
            events.push(MissionEvent::ConfirmationExpired);
        }

        for event in self.countdown.advance(elapsed) {
            match event {
                CountdownEvent::Tick { remaining } => {
                    events.push(MissionEvent::CountdownTick(remaining));
                }
                CountdownEvent::Complete { overrun } => {
                    events.push(MissionEvent::CountdownComplete);
                    events.extend(self.ignite(overrun));
                }
            }
        }

        if let Some(flight) = self.flight.as_mut().filter(|_| flying) {
            events.extend(
                flight
                    .advance(&mut self.state, elapsed, &self.config.flight)
                    .into_iter()
                    .map(MissionEvent::from),
            );
        }
        events
    }

    // Starts the flight loop at most once per run, already `overrun` into its
    // first tick period.
    fn ignite(&mut self, overrun: Duration) -> Vec<MissionEvent> {
        if self.flight.is_some() {
            return Vec::new();
        }
        let from = self.state.phase;
        self.state.phase = MissionPhase::Launch;
        log::info!("Liftoff");

        let mut events = vec![MissionEvent::PhaseChanged {
            from,
            to: MissionPhase::Launch,
        }];
        let mut flight = FlightLoop::start(&self.config.flight);
        events.extend(
            flight
                .advance(&mut self.state, overrun, &self.config.flight)
                .into_iter()
                .map(MissionEvent::from),
        );
        self.flight = Some(flight);
        events
    }

    pub fn state(&self) -> &MissionState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn countdown(&self) -> &CountdownController {
        &self.countdown
    }

    pub fn gate(&self) -> &LaunchGate {
        &self.gate
    }

    pub fn comms(&self) -> &CommsLog {
        &self.comms
    }

    pub fn is_launched(&self) -> bool {
        self.state.is_launched()
    }

    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn thrust_adjustable(&self) -> bool {
        self.is_launched() && self.state.has_fuel() && self.state.phase != MissionPhase::Orbit
    }

    pub fn angle_adjustable(&self) -> bool {
        self.is_launched() && self.state.has_fuel()
    }

    /// Flight ticks run since liftoff.
    pub fn flight_ticks(&self) -> u64 {
        self.flight.as_ref().map_or(0, FlightLoop::ticks)
    }

    pub fn mission_time(&self) -> Duration {
        self.flight
            .as_ref()
            .map_or(Duration::ZERO, FlightLoop::mission_time)
    }

    /// Number of live timer handles across the countdown, the launch gate
    /// and the flight loop.
    pub fn active_timers(&self) -> usize {
        usize::from(self.countdown.is_active())
            + usize::from(self.gate.is_confirming())
            + usize::from(self.flight.is_some())
    }
}

impl Default for MissionControl {
    fn default() -> Self {
        Self::with_valid_config(SimConfig::default())
    }
}
