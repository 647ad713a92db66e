use std::fmt;
use std::str::FromStr;

use crate::errors::SimulationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Navigation,
    Comms,
    LifeSupportPrimary,
    LifeSupportBackup,
    EngineMain,
}

impl Subsystem {
    pub const ALL: [Subsystem; 5] = [
        Subsystem::Navigation,
        Subsystem::Comms,
        Subsystem::LifeSupportPrimary,
        Subsystem::LifeSupportBackup,
        Subsystem::EngineMain,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subsystem::Navigation => "navigation",
            Subsystem::Comms => "comms",
            Subsystem::LifeSupportPrimary => "life-support-primary",
            Subsystem::LifeSupportBackup => "life-support-backup",
            Subsystem::EngineMain => "engine-main",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subsystem {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Subsystem::ALL
            .into_iter()
            .find(|system| system.name() == wanted)
            .ok_or_else(|| SimulationError::UnknownSubsystem(s.to_string()))
    }
}

/// On/off flags for the ship's subsystems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubsystemSet {
    pub navigation: bool,
    pub comms: bool,
    pub life_support_primary: bool,
    pub life_support_backup: bool,
    pub engine_main: bool,
}

impl SubsystemSet {
    pub fn all_on() -> Self {
        SubsystemSet {
            navigation: true,
            comms: true,
            life_support_primary: true,
            life_support_backup: true,
            engine_main: true,
        }
    }

    pub fn is_enabled(&self, system: Subsystem) -> bool {
        match system {
            Subsystem::Navigation => self.navigation,
            Subsystem::Comms => self.comms,
            Subsystem::LifeSupportPrimary => self.life_support_primary,
            Subsystem::LifeSupportBackup => self.life_support_backup,
            Subsystem::EngineMain => self.engine_main,
        }
    }

    fn flag_mut(&mut self, system: Subsystem) -> &mut bool {
        match system {
            Subsystem::Navigation => &mut self.navigation,
            Subsystem::Comms => &mut self.comms,
            Subsystem::LifeSupportPrimary => &mut self.life_support_primary,
            Subsystem::LifeSupportBackup => &mut self.life_support_backup,
            Subsystem::EngineMain => &mut self.engine_main,
        }
    }

    /// Flips a flag. The main engine cannot be switched on with an empty
    /// tank; that case leaves the set untouched and returns `false`.
    pub fn toggle(&mut self, system: Subsystem, fuel: f64) -> bool {
        let flag = self.flag_mut(system);
        if system == Subsystem::EngineMain && !*flag && fuel <= 0.0 {
            return false;
        }
        *flag = !*flag;
        true
    }
}

impl Default for SubsystemSet {
    fn default() -> Self {
        SubsystemSet::all_on()
    }
}
