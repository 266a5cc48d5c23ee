//! Window statistics feeding the composite score
//!
//! All functions expect a non-empty window.

use crate::models::Outcome;

/// Share of High outcomes in the window
pub fn frequency_high(window: &[Outcome]) -> f64 {
    let highs = window.iter().filter(|o| **o == Outcome::High).count();
    highs as f64 / window.len() as f64
}

/// Exponential moving average of the High indicator, seeded with the first element
pub fn ema_high(window: &[Outcome], lambda: f64) -> f64 {
    let mut iter = window.iter();
    let mut ema = iter.next().map(Outcome::as_indicator).unwrap_or(0.0);

    for outcome in iter {
        ema = ema * (1.0 - lambda) + outcome.as_indicator() * lambda;
    }

    ema
}

/// First-order transition counts between consecutive outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transitions {
    pub high_to_high: u32,
    pub high_to_low: u32,
    pub low_to_high: u32,
    pub low_to_low: u32,
}

impl Transitions {
    pub fn count(window: &[Outcome]) -> Self {
        let mut t = Self::default();

        for pair in window.windows(2) {
            match (pair[0], pair[1]) {
                (Outcome::High, Outcome::High) => t.high_to_high += 1,
                (Outcome::High, Outcome::Low) => t.high_to_low += 1,
                (Outcome::Low, Outcome::High) => t.low_to_high += 1,
                (Outcome::Low, Outcome::Low) => t.low_to_low += 1,
            }
        }

        t
    }

    /// Transitions leaving High, floored at 1
    pub fn from_high(&self) -> u32 {
        (self.high_to_high + self.high_to_low).max(1)
    }

    /// Transitions leaving Low, floored at 1
    pub fn from_low(&self) -> u32 {
        (self.low_to_high + self.low_to_low).max(1)
    }

    /// Empirical P(next = High | current)
    pub fn p_high_given(&self, current: Outcome) -> f64 {
        match current {
            Outcome::High => self.high_to_high as f64 / self.from_high() as f64,
            Outcome::Low => self.low_to_high as f64 / self.from_low() as f64,
        }
    }
}

/// Markov estimate of the next outcome being High, conditioned on the last one
pub fn markov_high(window: &[Outcome]) -> f64 {
    match window.last() {
        Some(last) => Transitions::count(window).p_high_given(*last),
        None => 0.0,
    }
}
