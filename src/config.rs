//! Simulation parameters, loadable from a TOML file.
//!
//! Every table and key is optional; anything left out keeps the stock value
//! from [`crate::constants`]. A minimal file might look like:
//!
//! ```toml
//! [countdown]
//! units = 5
//!
//! [flight]
//! tick_secs = 0.25
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::errors::SimulationError;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub countdown: CountdownConfig,
    pub launch_gate: LaunchGateConfig,
    pub flight: FlightConfig,
    pub operator: OperatorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountdownConfig {
    /// Number of units counted down before ignition.
    pub units: u32,
    pub unit_secs: f64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        CountdownConfig {
            units: COUNTDOWN_UNITS,
            unit_secs: COUNTDOWN_UNIT_SECS,
        }
    }
}

impl CountdownConfig {
    pub fn unit(&self) -> Duration {
        Duration::from_secs_f64(self.unit_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchGateConfig {
    pub confirm_window_secs: f64,
}

impl Default for LaunchGateConfig {
    fn default() -> Self {
        LaunchGateConfig {
            confirm_window_secs: CONFIRM_WINDOW_SECS,
        }
    }
}

impl LaunchGateConfig {
    pub fn confirm_window(&self) -> Duration {
        Duration::from_secs_f64(self.confirm_window_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightConfig {
    pub tick_secs: f64,
    pub oxygen_rate: f64,
    pub thrust_fuel_divisor: f64,
    pub thrust_accel_divisor: f64,
    pub coast_deceleration: f64,
    pub altitude_divisor: f64,
    pub max_velocity: f64,
    pub orbit_altitude: f64,
    pub moon_approach_altitude: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        FlightConfig {
            tick_secs: FLIGHT_TICK_SECS,
            oxygen_rate: OXYGEN_RATE,
            thrust_fuel_divisor: THRUST_FUEL_DIVISOR,
            thrust_accel_divisor: THRUST_ACCEL_DIVISOR,
            coast_deceleration: COAST_DECELERATION,
            altitude_divisor: ALTITUDE_DIVISOR,
            max_velocity: MAX_VELOCITY,
            orbit_altitude: ORBIT_ALTITUDE,
            moon_approach_altitude: MOON_APPROACH_ALTITUDE,
        }
    }
}

impl FlightConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(self.tick_secs)
    }
}

/// Settings the operator starts every run with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperatorConfig {
    pub thrust: f64,
    pub angle: f64,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        OperatorConfig {
            thrust: DEFAULT_THRUST,
            angle: DEFAULT_ANGLE,
        }
    }
}

impl SimConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.countdown.units == 0 {
            return Err(invalid("countdown.units must be at least 1"));
        }
        period("countdown.unit_secs", self.countdown.unit_secs)?;
        period(
            "launch_gate.confirm_window_secs",
            self.launch_gate.confirm_window_secs,
        )?;

        let flight = &self.flight;
        period("flight.tick_secs", flight.tick_secs)?;
        positive("flight.thrust_fuel_divisor", flight.thrust_fuel_divisor)?;
        positive("flight.thrust_accel_divisor", flight.thrust_accel_divisor)?;
        positive("flight.altitude_divisor", flight.altitude_divisor)?;
        positive("flight.max_velocity", flight.max_velocity)?;
        non_negative("flight.oxygen_rate", flight.oxygen_rate)?;
        non_negative("flight.coast_deceleration", flight.coast_deceleration)?;
        non_negative("flight.orbit_altitude", flight.orbit_altitude)?;
        if flight.moon_approach_altitude <= flight.orbit_altitude {
            return Err(invalid(
                "flight.moon_approach_altitude must be above flight.orbit_altitude",
            ));
        }

        if !(0.0..=MAX_THRUST).contains(&self.operator.thrust) {
            return Err(invalid("operator.thrust must be within 0..=100"));
        }
        if !(0.0..=MAX_ANGLE).contains(&self.operator.angle) {
            return Err(invalid("operator.angle must be within 0..=180"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> SimulationError {
    SimulationError::InvalidConfig(message.to_string())
}

fn positive(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

// Timer periods must survive the trip into a `Duration` without rounding to
// zero or overflowing.
fn period(name: &str, secs: f64) -> Result<Duration, SimulationError> {
    match Duration::try_from_secs_f64(secs) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => Err(SimulationError::InvalidConfig(format!(
            "{name} must be a positive number of seconds of at least 1ns, got {secs}"
        ))),
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidConfig(format!(
            "{name} must not be negative, got {value}"
        )))
    }
}
