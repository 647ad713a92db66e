// Operator Defaults
pub const DEFAULT_THRUST: f64 = 85.0; // %
pub const DEFAULT_ANGLE: f64 = 90.0; // degrees
pub const MAX_THRUST: f64 = 100.0; // %
pub const MAX_ANGLE: f64 = 180.0; // degrees

// Consumables
pub const FULL_TANK: f64 = 100.0; // %
pub const OXYGEN_RATE: f64 = 0.05; // % per tick
pub const THRUST_FUEL_DIVISOR: f64 = 100.0; // fuel burned per tick = thrust / divisor
pub const LOW_RESOURCE_THRESHOLD: f64 = 20.0; // % below which a gauge reads low

// Flight Dynamics
pub const MAX_VELOCITY: f64 = 28_000.0; // m/s
pub const THRUST_ACCEL_DIVISOR: f64 = 50.0; // velocity gained per tick = thrust / divisor
pub const COAST_DECELERATION: f64 = 10.0; // m/s per unpowered tick
pub const ALTITUDE_DIVISOR: f64 = 10.0; // altitude gained per tick = velocity / divisor

// Phase Thresholds
pub const ORBIT_ALTITUDE: f64 = 200.0; // km
pub const MOON_APPROACH_ALTITUDE: f64 = 500.0; // km

// Timing
pub const COUNTDOWN_UNITS: u32 = 10;
pub const COUNTDOWN_UNIT_SECS: f64 = 1.0; // s
pub const CONFIRM_WINDOW_SECS: f64 = 3.0; // s
pub const FLIGHT_TICK_SECS: f64 = 0.5; // s
pub const FRAME_MS: u64 = 100; // ms, host frame of the CLI driver
