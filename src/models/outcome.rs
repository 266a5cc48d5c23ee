//! Outcome model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of one game round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Tài (high total)
    #[serde(rename = "Tài")]
    High,
    /// Xỉu (low total)
    #[serde(rename = "Xỉu")]
    Low,
}

impl Outcome {
    /// Label used by the upstream feed and in responses
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::High => "Tài",
            Outcome::Low => "Xỉu",
        }
    }

    /// 1.0 for High, 0.0 for Low
    pub fn as_indicator(&self) -> f64 {
        match self {
            Outcome::High => 1.0,
            Outcome::Low => 0.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label outside {Tài, Xỉu}
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome label: {0:?}")]
pub struct UnknownOutcome(pub String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tài" => Ok(Outcome::High),
            "Xỉu" => Ok(Outcome::Low),
            other => Err(UnknownOutcome(other.to_string())),
        }
    }
}
