//! Model constants
//!
//! Các hằng số của mô hình: cố định, không tự điều chỉnh theo dữ liệu.

use serde::{Deserialize, Serialize};

/// Blend weights of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub frequency: f64,
    pub ema: f64,
    pub markov: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            frequency: 0.4,
            ema: 0.3,
            markov: 0.3,
        }
    }
}

impl BlendWeights {
    pub fn total(&self) -> f64 {
        self.frequency + self.ema + self.markov
    }
}

/// Model Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Number of most recent sessions analysed
    pub window_size: usize,

    /// EMA smoothing constant (0.0 - 1.0)
    pub ema_lambda: f64,

    /// Confidence floor for any non-empty history (0.0 - 1.0)
    pub baseline_confidence: f64,

    /// Scores at or above this predict High
    pub decision_threshold: f64,

    /// Confidence reported for an empty history (0.0 - 1.0)
    pub empty_confidence: f64,

    pub weights: BlendWeights,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            window_size: 30,
            ema_lambda: 0.25,
            baseline_confidence: 0.9,
            decision_threshold: 0.5,
            empty_confidence: 0.5,
            weights: BlendWeights::default(),
        }
    }
}
