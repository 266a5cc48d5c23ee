//! Tài/Xỉu Predictor
//!
//! Pure scoring over the most recent sessions:
//!
//! ```text
//! history ──► window (last N) ──┬─► frequency ──┐
//!                               ├─► EMA ────────┼─► composite score ──► outcome + confidence
//!                               └─► Markov ─────┘
//! ```
//!
//! Confidence is floored at the model's baseline (90%) for any non-empty
//! history and only approaches 100% as the score saturates. It is a fixed
//! property of the model, not a statistical interval.

pub mod config;
pub mod signals;

use serde::Serialize;

use crate::models::Outcome;
pub use config::{BlendWeights, ModelConfig};
use signals::{ema_high, frequency_high, markov_high};

/// Prediction for the next session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub outcome: Outcome,

    /// Confidence (0.0 - 1.0)
    pub confidence: f64,
}

impl Prediction {
    /// Percentage with one decimal, e.g. "91.3%"
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// Intermediate values of one scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub window_len: usize,
    pub frequency: f64,
    pub ema: f64,
    pub markov: f64,
    pub score: f64,
}

/// Predict with the default model constants
pub fn predict(history: &[Outcome]) -> Prediction {
    predict_with(&ModelConfig::default(), history)
}

pub fn predict_with(config: &ModelConfig, history: &[Outcome]) -> Prediction {
    explain(config, history).0
}

/// Prediction together with the score components behind it
pub fn explain(config: &ModelConfig, history: &[Outcome]) -> (Prediction, Option<ScoreBreakdown>) {
    let breakdown = score(config, history);
    let prediction = match &breakdown {
        Some(b) => Prediction {
            outcome: decide(config, b.score),
            confidence: confidence(config, b.score),
        },
        None => Prediction {
            outcome: Outcome::High,
            confidence: config.empty_confidence,
        },
    };
    (prediction, breakdown)
}

/// Last `window_size` elements of the history
pub fn window<'a>(config: &ModelConfig, history: &'a [Outcome]) -> &'a [Outcome] {
    let start = history.len().saturating_sub(config.window_size);
    &history[start..]
}

/// Composite High score, `None` for an empty history
pub fn score(config: &ModelConfig, history: &[Outcome]) -> Option<ScoreBreakdown> {
    let window = window(config, history);
    if window.is_empty() {
        return None;
    }

    let frequency = frequency_high(window);
    let ema = ema_high(window, config.ema_lambda);
    let markov = markov_high(window);

    let w = &config.weights;
    let score = w.frequency * frequency + w.ema * ema + w.markov * markov;

    Some(ScoreBreakdown {
        window_len: window.len(),
        frequency,
        ema,
        markov,
        score,
    })
}

/// Ties go to High
pub fn decide(config: &ModelConfig, score: f64) -> Outcome {
    if score >= config.decision_threshold {
        Outcome::High
    } else {
        Outcome::Low
    }
}

/// Distance from the decision threshold, mapped onto [baseline, 1]
pub fn confidence(config: &ModelConfig, score: f64) -> f64 {
    let gap = (score - config.decision_threshold).abs() * 2.0;
    config.baseline_confidence + (1.0 - config.baseline_confidence) * gap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome::{High as H, Low as L};

    /// Every H/L sequence of the given length
    fn all_histories(len: usize) -> Vec<Vec<Outcome>> {
        (0..1u32 << len)
            .map(|bits| {
                (0..len)
                    .map(|i| if bits & (1 << i) != 0 { H } else { L })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_history_defaults() {
        let p = predict(&[]);
        assert_eq!(p.outcome, H);
        assert_eq!(p.confidence_label(), "50.0%");
    }

    #[test]
    fn test_explain_empty_has_no_breakdown() {
        let (p, breakdown) = explain(&ModelConfig::default(), &[]);
        assert!(breakdown.is_none());
        assert_eq!(p, predict(&[]));
    }

    #[test]
    fn test_worked_trace() {
        let history = [H, H, L, H, L, H];
        let b = score(&ModelConfig::default(), &history).unwrap();

        assert_eq!(b.window_len, 6);
        assert!((b.frequency - 4.0 / 6.0).abs() < 1e-12);
        assert_eq!(b.ema, 0.70703125);
        assert!((b.markov - 1.0 / 3.0).abs() < 1e-12);

        let expected = 0.4 * (4.0 / 6.0) + 0.3 * 0.70703125 + 0.3 * (1.0 / 3.0);
        assert!((b.score - expected).abs() < 1e-12);

        let p = predict(&history);
        assert_eq!(p.outcome, H);
        assert!((p.confidence - 0.915755208).abs() < 1e-6);
        assert_eq!(p.confidence_label(), "91.6%");
    }

    #[test]
    fn test_single_outcomes() {
        // High: 0.4 * 1 + 0.3 * 1 + 0.3 * 0 = 0.7
        let high = predict(&[H]);
        assert_eq!(high.outcome, H);
        assert_eq!(high.confidence_label(), "94.0%");

        // Low: score 0
        let low = predict(&[L]);
        assert_eq!(low.outcome, L);
        assert_eq!(low.confidence_label(), "100.0%");
    }

    #[test]
    fn test_low_streak_predicts_low() {
        let p = predict(&[L; 12]);
        assert_eq!(p.outcome, L);
    }

    #[test]
    fn test_purity() {
        let history: Vec<Outcome> = (0..45).map(|i| if i % 3 == 0 { L } else { H }).collect();
        let first = predict(&history);
        let second = predict(&history.clone());
        assert_eq!(first, second);
        assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
    }

    #[test]
    fn test_only_last_window_counts() {
        let mut history: Vec<Outcome> = vec![L; 25];
        history.extend((0..30).map(|i| if i % 4 == 0 { L } else { H }));

        assert!(history.len() > 30);
        let tail = &history[history.len() - 30..];
        assert_eq!(predict(&history), predict(tail));
        assert_eq!(window(&ModelConfig::default(), &history), tail);
    }

    #[test]
    fn test_short_history_uses_everything() {
        let history = [H, L, L];
        assert_eq!(window(&ModelConfig::default(), &history), &history[..]);
    }

    #[test]
    fn test_confidence_floor_and_ceiling() {
        for len in 1..=10 {
            for history in all_histories(len) {
                let p = predict(&history);
                assert!(p.confidence >= 0.9, "{:?} -> {}", history, p.confidence);
                assert!(p.confidence <= 1.0 + 1e-12, "{:?} -> {}", history, p.confidence);
            }
        }
    }

    #[test]
    fn test_tie_favors_high() {
        let config = ModelConfig::default();
        assert_eq!(decide(&config, 0.5), H);
        assert_eq!(decide(&config, 0.4999), L);

        // frequency-only blend over [H, L] scores exactly 0.5
        let frequency_only = ModelConfig {
            weights: BlendWeights { frequency: 1.0, ema: 0.0, markov: 0.0 },
            ..ModelConfig::default()
        };
        let p = predict_with(&frequency_only, &[H, L]);
        assert_eq!(p.outcome, H);
        assert_eq!(p.confidence_label(), "90.0%");
    }

    #[test]
    fn test_confidence_measured_from_threshold() {
        let config = ModelConfig {
            decision_threshold: 0.6,
            ..ModelConfig::default()
        };
        assert_eq!(confidence(&config, 0.6), 0.9);
        assert!((confidence(&config, 0.85) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_scales_with_gap() {
        let config = ModelConfig::default();
        assert_eq!(confidence(&config, 0.5), 0.9);
        assert!((confidence(&config, 1.0) - 1.0).abs() < 1e-12);
        assert!((confidence(&config, 0.0) - 1.0).abs() < 1e-12);
        assert!((confidence(&config, 0.75) - 0.95).abs() < 1e-12);
    }
}
