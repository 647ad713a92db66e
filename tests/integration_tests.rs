use std::io::Write;
use std::time::Duration;

use approx::assert_abs_diff_eq;
use launch_simulation::{
    errors::SimulationError, GateOutcome, MissionControl, MissionEvent, MissionPhase,
    MissionState, SimConfig, Subsystem, MAX_VELOCITY,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SECOND: Duration = Duration::from_secs(1);
const FLIGHT_TICK: Duration = Duration::from_millis(500);

// Helper function to bring a mission through confirmation and countdown
fn launch_mission(control: &mut MissionControl) {
    assert_eq!(control.launch().0, GateOutcome::Armed);
    assert_eq!(control.launch().0, GateOutcome::Fire);
    for _ in 0..10 {
        control.advance(SECOND);
    }
    assert!(control.is_launched(), "Countdown should have launched the mission");
}

fn assert_within_bounds(state: &MissionState) {
    assert!(
        (0.0..=100.0).contains(&state.fuel),
        "fuel out of range: {}",
        state.fuel
    );
    assert!(
        (0.0..=100.0).contains(&state.oxygen),
        "oxygen out of range: {}",
        state.oxygen
    );
    assert!(
        (0.0..=MAX_VELOCITY).contains(&state.velocity),
        "velocity out of range: {}",
        state.velocity
    );
    assert!(state.altitude >= 0.0, "altitude negative: {}", state.altitude);
}

#[test]
fn test_countdown_fires_once_and_enters_launch() {
    let mut control = MissionControl::default();
    control.launch();
    control.launch();

    let mut events = Vec::new();
    for tick in 1..=10 {
        events.extend(control.advance(SECOND));
        if tick < 10 {
            assert_eq!(control.state().phase, MissionPhase::PreLaunch);
        }
    }

    let completions = events
        .iter()
        .filter(|e| **e == MissionEvent::CountdownComplete)
        .count();
    assert_eq!(completions, 1, "Completion must fire exactly once");
    assert_eq!(control.state().phase, MissionPhase::Launch);

    // Keep going: no further completions.
    let later = control.advance(SECOND * 30);
    assert!(!later.contains(&MissionEvent::CountdownComplete));
}

#[test]
fn test_gate_fires_on_confirmation_within_window() {
    let mut control = MissionControl::default();
    control.launch();
    control.advance(Duration::from_millis(2_500));

    let (outcome, events) = control.launch();
    assert_eq!(outcome, GateOutcome::Fire);
    assert_eq!(events, vec![MissionEvent::CountdownStarted]);
    assert!(control.is_counting_down());
}

#[test]
fn test_gate_reverts_without_confirmation() {
    let mut control = MissionControl::default();
    control.launch();

    let events = control.advance(SECOND * 3);
    assert!(events.contains(&MissionEvent::ConfirmationExpired));
    assert!(!control.is_counting_down());

    // Ten more seconds of silence: still nothing launched.
    control.advance(SECOND * 10);
    assert!(!control.is_launched());
    assert_eq!(control.launch().0, GateOutcome::Armed);
}

#[test]
fn test_full_thrust_gains_two_per_tick() {
    let mut control = MissionControl::default();
    launch_mission(&mut control);
    assert!(control.set_thrust(100.0));

    let mut previous = control.state().velocity;
    for _ in 0..60 {
        control.advance(FLIGHT_TICK);
        let velocity = control.state().velocity;
        assert_abs_diff_eq!(velocity - previous, 2.0, epsilon = 1e-9);
        previous = velocity;
    }
}

#[test]
fn test_fuel_runs_out_after_118_ticks_then_coasts_to_rest() {
    let mut control = MissionControl::default();
    launch_mission(&mut control);

    let mut velocities = vec![control.state().velocity];
    for tick in 1..=200 {
        let events = control.advance(FLIGHT_TICK);
        let state = *control.state();
        velocities.push(state.velocity);

        if tick < 118 {
            assert!(state.fuel > 0.0, "fuel ran out early at tick {tick}");
        }
        if tick == 118 {
            assert_eq!(state.fuel, 0.0);
            assert!(events.contains(&MissionEvent::FuelDepleted));
        }
        assert_within_bounds(&state);
    }

    // Powered through the depletion tick.
    assert_abs_diff_eq!(velocities[118], 118.0 * 1.7, epsilon = 1e-6);

    // From tick 119 on, minus 10 per tick until resting at zero.
    for tick in 119..=200 {
        let before = velocities[tick - 1];
        let after = velocities[tick];
        if before >= 10.0 {
            assert_abs_diff_eq!(before - after, 10.0, epsilon = 1e-6);
        } else {
            assert_eq!(after, 0.0);
        }
    }
    assert_eq!(control.state().velocity, 0.0);
}

#[test]
fn test_orbit_reached_on_the_crossing_tick() {
    let mut control = MissionControl::default();
    launch_mission(&mut control);

    let mut crossed = false;
    for _ in 0..200 {
        let before = *control.state();
        control.advance(FLIGHT_TICK);
        let after = *control.state();

        if before.altitude <= 200.0 && after.altitude > 200.0 {
            assert_eq!(before.phase, MissionPhase::Launch);
            assert_eq!(after.phase, MissionPhase::Orbit);
            crossed = true;
        }
        if before.altitude <= 500.0 && after.altitude > 500.0 {
            assert_eq!(after.phase, MissionPhase::MoonApproach);
        }
        if after.altitude <= 200.0 {
            assert_eq!(after.phase, MissionPhase::Launch);
        }
    }
    assert!(crossed, "Default ascent should reach orbit within 200 ticks");
    assert_eq!(control.state().phase, MissionPhase::MoonApproach);
}

#[test]
fn test_engine_shutdown_stops_acceleration() {
    let mut control = MissionControl::default();
    launch_mission(&mut control);
    for _ in 0..20 {
        control.advance(FLIGHT_TICK);
    }
    let cruising = control.state().velocity;
    assert!(control.toggle_system(Subsystem::EngineMain));

    control.advance(FLIGHT_TICK);
    assert_abs_diff_eq!(control.state().velocity, cruising - 10.0, epsilon = 1e-9);

    // Fuel still burns while the engine is off.
    assert!(control.state().fuel < 100.0 - 20.0 * 0.85);
}

#[test]
fn test_reset_restores_initial_state_at_any_depth() {
    for depth in [0u32, 1, 7, 118, 400] {
        let mut control = MissionControl::default();
        launch_mission(&mut control);
        control.set_thrust(100.0);
        control.set_angle(12.0);
        control.toggle_system(Subsystem::Navigation);
        for _ in 0..depth {
            control.advance(FLIGHT_TICK);
        }

        control.reset();
        assert_eq!(*control.state(), MissionState::default(), "depth {depth}");
        assert_eq!(control.active_timers(), 0);
        assert_eq!(control.flight_ticks(), 0);
    }
}

#[test]
fn test_repeated_launch_reset_cycles_leave_no_timers() {
    let mut control = MissionControl::default();
    for _ in 0..25 {
        launch_mission(&mut control);
        assert_eq!(control.active_timers(), 1);
        control.advance(SECOND * 5);
        control.reset();
        assert_eq!(control.active_timers(), 0);
    }

    // A fresh run after many cycles behaves like the first one.
    launch_mission(&mut control);
    control.advance(FLIGHT_TICK);
    assert_eq!(control.flight_ticks(), 1);
    assert_abs_diff_eq!(control.state().velocity, 1.7, epsilon = 1e-9);
}

#[test]
fn test_random_operator_input_keeps_invariants() {
    let systems = Subsystem::ALL;

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut control = MissionControl::default();
        let mut last_phase = control.state().phase;

        for _ in 0..2_000 {
            match rng.gen_range(0..10) {
                0 => {
                    control.launch();
                }
                1 => {
                    control.set_thrust(rng.gen_range(-20.0..=120.0));
                }
                2 => {
                    control.set_angle(rng.gen_range(-20.0..=200.0));
                }
                3 => {
                    control.toggle_system(systems[rng.gen_range(0..systems.len())]);
                }
                4 if rng.gen_bool(0.02) => {
                    control.reset();
                    last_phase = control.state().phase;
                }
                _ => {
                    control.advance(Duration::from_millis(rng.gen_range(0..=1_500)));
                }
            }

            let state = *control.state();
            assert_within_bounds(&state);
            assert!(state.phase >= last_phase, "phase went backwards (seed {seed})");
            assert_ne!(state.phase, MissionPhase::Landing);
            assert!((0.0..=100.0).contains(&state.thrust));
            assert!((0.0..=180.0).contains(&state.angle));
            assert!(control.active_timers() <= 2);
            last_phase = state.phase;
        }
    }
}

#[test]
fn test_comms_follow_mission() {
    let mut control = MissionControl::default();
    assert!(!control.send_message("anyone there?"));

    launch_mission(&mut control);
    assert!(control.send_message("Liftoff, feeling good"));
    control.toggle_system(Subsystem::Comms);
    assert!(!control.send_message("radio check"));

    assert_eq!(control.comms().outbox().len(), 1);
}

#[test]
fn test_config_file_changes_timing() -> Result<(), SimulationError> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[countdown]\nunits = 3\n\n[flight]\ntick_secs = 0.25")?;

    let config = SimConfig::from_file(file.path())?;
    let mut control = MissionControl::new(config)?;
    control.launch();
    control.launch();
    control.advance(SECOND * 3);
    assert!(control.is_launched());

    control.advance(SECOND);
    assert_eq!(control.flight_ticks(), 4);
    Ok(())
}
