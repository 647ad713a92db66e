use std::fmt;

use crate::control::mission::MissionPhase;

pub const CREW_CALLSIGN: &str = "Apollo 11";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Houston,
    Crew,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Houston => f.write_str("Houston"),
            Speaker::Crew => f.write_str(CREW_CALLSIGN),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommsMessage {
    pub speaker: Speaker,
    pub text: &'static str,
}

impl CommsMessage {
    const fn new(speaker: Speaker, text: &'static str) -> Self {
        CommsMessage { speaker, text }
    }
}

impl fmt::Display for CommsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.speaker, self.text)
    }
}

const HAIL: CommsMessage = CommsMessage::new(Speaker::Houston, "Apollo 11, do you read? Over.");

const LAUNCH_LINES: [CommsMessage; 2] = [
    CommsMessage::new(Speaker::Crew, "Houston, reading you loud and clear."),
    CommsMessage::new(
        Speaker::Houston,
        "Launch confirmed, all systems nominal.",
    ),
];

const ORBIT_LINES: [CommsMessage; 2] = [
    CommsMessage::new(Speaker::Crew, "Houston, we are in orbit. Parameters stable."),
    CommsMessage::new(
        Speaker::Houston,
        "Copy, beautiful insertion. Stand by for injection burn.",
    ),
];

const MOON_APPROACH_LINES: [CommsMessage; 2] = [
    CommsMessage::new(Speaker::Crew, "Houston, we are on our way to the Moon. All systems go."),
    CommsMessage::new(
        Speaker::Houston,
        "Excellent, Apollo. Estimated arrival in 3 days 4 hours.",
    ),
];

/// Mission-control chatter for the current point in the flight.
pub fn transcript(launched: bool, phase: MissionPhase) -> Vec<CommsMessage> {
    let mut lines = vec![HAIL];
    if !launched {
        return lines;
    }
    lines.extend(LAUNCH_LINES);
    match phase {
        MissionPhase::Orbit => lines.extend(ORBIT_LINES),
        MissionPhase::MoonApproach => lines.extend(MOON_APPROACH_LINES),
        _ => {}
    }
    lines
}

/// Messages the crew sent to Houston during the current run.
#[derive(Debug, Default)]
pub struct CommsLog {
    outbox: Vec<String>,
}

impl CommsLog {
    pub fn new() -> Self {
        CommsLog { outbox: Vec::new() }
    }

    /// Queues a message. Needs a launched ship, working comms and some text.
    pub fn send(&mut self, text: &str, launched: bool, comms_enabled: bool) -> bool {
        let text = text.trim();
        if !launched || !comms_enabled || text.is_empty() {
            log::debug!("Message not sent (launched: {launched}, comms: {comms_enabled})");
            return false;
        }
        log::info!("[{}]: {}", Speaker::Crew, text);
        self.outbox.push(text.to_string());
        true
    }

    pub fn outbox(&self) -> &[String] {
        &self.outbox
    }

    pub fn clear(&mut self) {
        self.outbox.clear();
    }
}
