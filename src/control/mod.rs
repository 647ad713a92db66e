pub mod countdown;
pub mod flight;
pub mod launch_gate;
pub mod mission;
pub mod mission_control;
pub mod systems;
