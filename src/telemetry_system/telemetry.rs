use std::time::Duration;

use crate::control::mission::{MissionPhase, MissionState};
use crate::control::mission_control::{MissionControl, MissionEvent};

pub struct Telemetry {
    pub log: Vec<String>,
    max_velocity: f64,
    max_altitude: f64,
    min_fuel: f64,
    min_oxygen: f64,
    phase_times: Vec<(MissionPhase, f64)>,
    event_log: Vec<(MissionEvent, f64)>,
    mission_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_velocity: 0.0,
            max_altitude: 0.0,
            min_fuel: f64::MAX,
            min_oxygen: f64::MAX,
            phase_times: Vec::new(),
            event_log: Vec::new(),
            mission_time: 0.0,
        }
    }

    /// Mission clock readout: `12.50s`, `1m 15.00s`, `1h 2m 5.00s`.
    pub fn format_time(seconds: f64) -> String {
        let seconds = seconds.max(0.0);
        let hours = (seconds / 3600.0).floor() as u64;
        let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
        let rest = seconds % 60.0;
        match (hours, minutes) {
            (0, 0) => format!("{rest:.2}s"),
            (0, m) => format!("{m}m {rest:.2}s"),
            (h, m) => format!("{h}h {m}m {rest:.2}s"),
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        format!("{} km", altitude.max(0.0).floor())
    }

    pub fn format_velocity(velocity: f64) -> String {
        if velocity < 1000.0 {
            format!("{} m/s", velocity.max(0.0).floor())
        } else {
            format!("{:.1} km/s", velocity / 1000.0)
        }
    }

    pub fn collect_data(&mut self, control: &MissionControl, delta_time: Duration) {
        self.mission_time += delta_time.as_secs_f64();
        self.collect_state(control.state());
    }

    pub fn collect_state(&mut self, state: &MissionState) {
        if state.velocity > self.max_velocity {
            self.max_velocity = state.velocity;
        }
        if state.altitude > self.max_altitude {
            self.max_altitude = state.altitude;
        }
        if state.fuel < self.min_fuel {
            self.min_fuel = state.fuel;
        }
        if state.oxygen < self.min_oxygen {
            self.min_oxygen = state.oxygen;
        }

        let data = format!(
            "Time: {}\n\
                 Phase: {}\n\
                 Altitude: {}\n\
                 Velocity: {} ({:.2} m/s)\n\
                 Thrust: {:.0}% | Angle: {:.0}°\n\
                 Fuel: {:.2}% | Oxygen: {:.2}%\n",
            Self::format_time(self.mission_time),
            state.phase,
            Self::format_altitude(state.altitude),
            Self::format_velocity(state.velocity),
            state.velocity,
            state.thrust,
            state.angle,
            state.fuel,
            state.oxygen,
        );
        self.log.push(data);

        // Track phase transitions
        if let Some((last_phase, _)) = self.phase_times.last() {
            if *last_phase != state.phase {
                self.phase_times.push((state.phase, self.mission_time));
            }
        } else {
            self.phase_times.push((state.phase, self.mission_time));
        }
    }

    pub fn record_events(&mut self, events: &[MissionEvent]) {
        for event in events {
            if !matches!(event, MissionEvent::CountdownTick(_)) {
                self.event_log.push((*event, self.mission_time));
            }
        }
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn min_fuel(&self) -> f64 {
        self.min_fuel
    }

    pub fn min_oxygen(&self) -> f64 {
        self.min_oxygen
    }

    pub fn phase_times(&self) -> &[(MissionPhase, f64)] {
        &self.phase_times
    }

    pub fn events(&self) -> &[(MissionEvent, f64)] {
        &self.event_log
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");
        self.display_summary();
    }

    pub fn display_summary(&self) {
        println!("\n--- Mission Summary ---");
        println!("Max Velocity: {}", Self::format_velocity(self.max_velocity));
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        if !self.log.is_empty() {
            println!("Min Fuel: {:.2}%", self.min_fuel);
            println!("Min Oxygen: {:.2}%", self.min_oxygen);
        }

        println!("\n--- Phase Transitions ---");
        for (phase, time) in &self.phase_times {
            println!("Phase {} reached at: {}", phase, Self::format_time(*time));
        }

        println!("\n--- Events ---");
        for (event, time) in &self.event_log {
            println!("{:>10}  {:?}", Self::format_time(*time), event);
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}
