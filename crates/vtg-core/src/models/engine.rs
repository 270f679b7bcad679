//! Engine control models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// Engine action requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EngineCommand {
    Start,
    Stop,
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EngineCommand::Start => "START",
            EngineCommand::Stop => "STOP",
        };
        f.write_str(s)
    }
}

impl FromStr for EngineCommand {
    type Err = AdapterError;

    /// Parse an action token. Tokens are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START" => Ok(EngineCommand::Start),
            "STOP" => Ok(EngineCommand::Stop),
            _ => Err(AdapterError::InvalidCommand(format!(
                "{} is not a valid command, expected START or STOP",
                s
            ))),
        }
    }
}

/// Outcome of an engine command, in the normalized vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Success,
    Error,
}

/// Result of an engine command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCommandResult {
    pub status: CommandStatus,
}

impl EngineCommandResult {
    pub fn success() -> Self {
        Self {
            status: CommandStatus::Success,
        }
    }

    pub fn error() -> Self {
        Self {
            status: CommandStatus::Error,
        }
    }
}
