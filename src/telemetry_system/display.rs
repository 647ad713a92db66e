//! Read-only views a renderer draws from. Nothing here mutates the mission.

use crate::constants::{FULL_TANK, LOW_RESOURCE_THRESHOLD};
use crate::control::mission::MissionPhase;
use crate::control::mission_control::MissionControl;
use crate::telemetry_system::telemetry::Telemetry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeLevel {
    Nominal,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceGauge {
    pub label: &'static str,
    /// Fill percentage, always within 0..=100.
    pub fill: f64,
    pub level: GaugeLevel,
}

impl ResourceGauge {
    pub fn new(label: &'static str, value: f64) -> Self {
        let fill = value.clamp(0.0, FULL_TANK);
        ResourceGauge {
            label,
            fill,
            level: if fill < LOW_RESOURCE_THRESHOLD {
                GaugeLevel::Low
            } else {
                GaugeLevel::Nominal
            },
        }
    }

    pub fn readout(&self) -> String {
        format!("{}%", self.fill.floor())
    }
}

/// Craft marker on the Earth-Moon strip, as percentages of its width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryMarker {
    pub craft_position: f64,
    pub path_width: f64,
}

pub fn trajectory_marker(phase: MissionPhase) -> Option<TrajectoryMarker> {
    match phase {
        MissionPhase::Orbit => Some(TrajectoryMarker {
            craft_position: 20.0,
            path_width: 10.0,
        }),
        MissionPhase::MoonApproach => Some(TrajectoryMarker {
            craft_position: 60.0,
            path_width: 50.0,
        }),
        _ => None,
    }
}

pub fn status_text(phase: MissionPhase) -> &'static str {
    match phase {
        MissionPhase::PreLaunch => "Preparing for launch",
        MissionPhase::Launch => "First stage ascent",
        MissionPhase::Orbit => "Entering Earth orbit",
        MissionPhase::MoonApproach => "Trans-lunar trajectory",
        MissionPhase::Landing => "Lunar landing",
    }
}

pub fn phase_badge(phase: MissionPhase) -> String {
    phase.name().to_uppercase()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchButtonState {
    Ready,
    Confirming,
    CountingDown,
    Launched,
}

impl LaunchButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchButtonState::Ready => "LAUNCH ROCKET",
            LaunchButtonState::Confirming => "CONFIRM LAUNCH",
            LaunchButtonState::CountingDown => "COUNTDOWN IN PROGRESS",
            LaunchButtonState::Launched => "LAUNCHED",
        }
    }
}

/// Which inputs are live right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlAvailability {
    pub thrust: bool,
    pub angle: bool,
    pub systems: bool,
    pub engine_main: bool,
    pub message_input: bool,
    pub abort: bool,
    pub launch_button: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySnapshot {
    pub phase_badge: String,
    pub status: &'static str,
    pub altitude: String,
    pub velocity: String,
    pub fuel: ResourceGauge,
    pub oxygen: ResourceGauge,
    pub countdown_clock: String,
    pub countdown_progress: f64,
    pub trajectory: Option<TrajectoryMarker>,
    pub launch_button: LaunchButtonState,
    pub controls: ControlAvailability,
}

impl MissionControl {
    pub fn launch_button_state(&self) -> LaunchButtonState {
        if self.is_launched() {
            LaunchButtonState::Launched
        } else if self.is_counting_down() {
            LaunchButtonState::CountingDown
        } else if self.gate().is_confirming() {
            LaunchButtonState::Confirming
        } else {
            LaunchButtonState::Ready
        }
    }

    pub fn control_availability(&self) -> ControlAvailability {
        let launched = self.is_launched();
        let state = self.state();
        ControlAvailability {
            thrust: self.thrust_adjustable(),
            angle: self.angle_adjustable(),
            systems: launched,
            engine_main: launched && state.has_fuel(),
            message_input: launched && state.systems.comms,
            abort: launched,
            launch_button: !launched && !self.is_counting_down(),
        }
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        let state = self.state();
        DisplaySnapshot {
            phase_badge: phase_badge(state.phase),
            status: status_text(state.phase),
            altitude: Telemetry::format_altitude(state.altitude),
            velocity: Telemetry::format_velocity(state.velocity),
            fuel: ResourceGauge::new("Fuel", state.fuel),
            oxygen: ResourceGauge::new("Oxygen", state.oxygen),
            countdown_clock: self.countdown().clock(),
            countdown_progress: self.countdown().progress(),
            trajectory: trajectory_marker(state.phase),
            launch_button: self.launch_button_state(),
            controls: self.control_availability(),
        }
    }
}
