pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod logger;
pub mod telemetry_system;
pub mod utils;

pub use config::SimConfig;
pub use constants::*;
pub use control::countdown::CountdownController;
pub use control::flight::{advance_tick, FlightInputs};
pub use control::launch_gate::{GateOutcome, LaunchGate};
pub use control::mission::{MissionPhase, MissionState};
pub use control::mission_control::{MissionControl, MissionEvent};
pub use control::systems::{Subsystem, SubsystemSet};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::comms::{transcript, CommsMessage, Speaker};
pub use telemetry_system::display::DisplaySnapshot;
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::timer::{Clock, SteppedClock, WallClock};
