use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Console backend for the `log` facade: coloured level tag plus UTC time.
pub struct MissionLogger;

static LOGGER: MissionLogger = MissionLogger;

impl MissionLogger {
    fn tag(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m[ERROR]",
            Level::Warn => "\x1b[35m[WARN] ",
            Level::Info => "\x1b[32m[INFO] ",
            Level::Debug => "\x1b[36m[DEBUG]",
            Level::Trace => "\x1b[33m[TRACE]",
        }
    }
}

impl Log for MissionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!(
            "{}[{}]\x1b[0m {}",
            Self::tag(record.level()),
            Utc::now().format("%H:%M:%S"),
            record.args()
        );
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
