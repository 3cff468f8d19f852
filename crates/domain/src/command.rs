//! Pump actuator commands.

use std::fmt;
use std::str::FromStr;

/// Command sent to the pump actuator.
///
/// The wire form is the plain text `ON` / `OFF`, parsed back
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpCommand {
    On,
    Off,
}

impl PumpCommand {
    /// Wire representation published on the actuator topic.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for PumpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string was neither `ON` nor `OFF`.
#[derive(Debug, thiserror::Error)]
#[error("not a pump command: {0:?}")]
pub struct ParsePumpCommandError(String);

impl FromStr for PumpCommand {
    type Err = ParsePumpCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            _ => Err(ParsePumpCommandError(s.to_string())),
        }
    }
}
