pub mod comms;
pub mod display;
pub mod telemetry;
