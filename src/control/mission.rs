use std::fmt;

use crate::config::{FlightConfig, OperatorConfig};
use crate::constants::FULL_TANK;
use crate::control::systems::SubsystemSet;

/// Mission phases in flight order. The derived ordering is the progression
/// order, so `a < b` means `b` comes later in the flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissionPhase {
    PreLaunch,
    Launch,
    Orbit,
    MoonApproach,
    Landing,
}

impl MissionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            MissionPhase::PreLaunch => "pre-launch",
            MissionPhase::Launch => "launch",
            MissionPhase::Orbit => "orbit",
            MissionPhase::MoonApproach => "moon-approach",
            MissionPhase::Landing => "landing",
        }
    }

    /// Next phase for the given altitude, moving at most one step forward.
    /// Pre-launch and landing are never altitude driven.
    pub fn advance_for_altitude(self, altitude: f64, flight: &FlightConfig) -> MissionPhase {
        match self {
            MissionPhase::Launch if altitude > flight.orbit_altitude => MissionPhase::Orbit,
            MissionPhase::Orbit if altitude > flight.moon_approach_altitude => {
                MissionPhase::MoonApproach
            }
            phase => phase,
        }
    }
}

impl fmt::Display for MissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissionState {
    pub phase: MissionPhase,
    pub thrust: f64,
    pub angle: f64,
    pub fuel: f64,
    pub oxygen: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub systems: SubsystemSet,
}

impl MissionState {
    pub fn new(operator: &OperatorConfig) -> Self {
        MissionState {
            phase: MissionPhase::PreLaunch,
            thrust: operator.thrust,
            angle: operator.angle,
            fuel: FULL_TANK,
            oxygen: FULL_TANK,
            altitude: 0.0,
            velocity: 0.0,
            systems: SubsystemSet::all_on(),
        }
    }

    pub fn is_launched(&self) -> bool {
        self.phase > MissionPhase::PreLaunch
    }

    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }
}

impl Default for MissionState {
    fn default() -> Self {
        MissionState::new(&OperatorConfig::default())
    }
}
