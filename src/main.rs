use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use launch_simulation::errors::SimulationError;
use launch_simulation::*;
use log::LevelFilter;

/// Runs one launch headlessly: confirm, count down, fly, report.
#[derive(Parser, Debug)]
#[command(name = "launch-sim", version, about)]
struct Cli {
    /// TOML file overriding the stock simulation parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine thrust (%) to set at liftoff
    #[arg(long)]
    thrust: Option<f64>,

    /// Pitch angle (degrees) to set at liftoff
    #[arg(long)]
    angle: Option<f64>,

    /// Mission seconds to fly after liftoff
    #[arg(long, default_value_t = 120.0)]
    duration: f64,

    /// Host frame length in milliseconds
    #[arg(long, default_value_t = FRAME_MS)]
    frame_ms: u64,

    /// Pace frames against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Subsystem to switch off at liftoff (repeatable)
    #[arg(long = "disable", value_name = "SUBSYSTEM")]
    disable: Vec<Subsystem>,

    /// Message to radio to Houston after liftoff
    #[arg(long)]
    message: Option<String>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Print every telemetry sample, not just the summary
    #[arg(long)]
    telemetry: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(cli.log_level)?;

    let mission_length = Duration::try_from_secs_f64(cli.duration).map_err(|_| {
        SimulationError::InvalidConfig(format!(
            "duration must be a non-negative number of seconds, got {}",
            cli.duration
        ))
    })?;

    let config = match &cli.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    let mut control = MissionControl::new(config)?;

    let frame = Duration::from_millis(cli.frame_ms.max(1));
    let mut clock: Box<dyn Clock> = if cli.realtime {
        Box::new(WallClock::new(frame))
    } else {
        Box::new(SteppedClock::new(frame))
    };
    let mut telemetry = Telemetry::new();

    control.launch();
    let (outcome, events) = control.launch();
    telemetry.record_events(&events);
    if outcome != GateOutcome::Fire {
        return Err("launch was not confirmed".into());
    }

    while !control.is_launched() {
        let events = control.advance(clock.elapsed());
        for event in &events {
            if let MissionEvent::CountdownTick(remaining) = event {
                log::info!("T-{}", remaining);
            }
        }
        telemetry.record_events(&events);
    }

    apply_operator_settings(&mut control, &cli);

    while control.mission_time() < mission_length {
        let delta_time = clock.elapsed();
        let events = control.advance(delta_time);
        telemetry.collect_data(&control, delta_time);
        telemetry.record_events(&events);
    }

    if cli.telemetry {
        telemetry.display_data();
    } else {
        telemetry.display_summary();
    }

    let snapshot = control.snapshot();
    println!("\n--- Final Status ---");
    println!("{} ({})", snapshot.phase_badge, snapshot.status);
    println!("Altitude: {}", snapshot.altitude);
    println!("Velocity: {}", snapshot.velocity);
    println!(
        "{}: {} {:?} | {}: {} {:?}",
        snapshot.fuel.label,
        snapshot.fuel.readout(),
        snapshot.fuel.level,
        snapshot.oxygen.label,
        snapshot.oxygen.readout(),
        snapshot.oxygen.level
    );

    println!("\n--- Comms ---");
    for line in transcript(control.is_launched(), control.state().phase) {
        println!("{}", line);
    }
    for sent in control.comms().outbox() {
        println!("[{}]: {}", Speaker::Crew, sent);
    }

    Ok(())
}

fn apply_operator_settings(control: &mut MissionControl, cli: &Cli) {
    if let Some(thrust) = cli.thrust {
        if !control.set_thrust(thrust) {
            log::warn!("Thrust {} was not accepted", thrust);
        }
    }
    if let Some(angle) = cli.angle {
        if !control.set_angle(angle) {
            log::warn!("Angle {} was not accepted", angle);
        }
    }
    for system in &cli.disable {
        if control.state().systems.is_enabled(*system) {
            control.toggle_system(*system);
        }
    }
    if let Some(message) = &cli.message {
        if !control.send_message(message) {
            log::warn!("Message could not be sent");
        }
    }
}
