//! Pair compatibility scoring, power-balance classification, and the fixed
//! life-event outcome table.
//!
//! The scoring side is a closed-form weighted sum over five attributes per
//! partner; the outcome table is a constant generator. Both are pure, so every
//! evaluation is an independent stateless call.

pub mod domain;
mod engine;
pub mod outcomes;
pub mod router;
mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    Dominance, DomainError, IncomeBracket, Occupation, PartnerProfile, ProfileParams, StrategyMode,
};
pub use engine::EQUAL_POWER_THRESHOLD;
pub use outcomes::{LifeEvent, OutcomeTotals};
pub use weights::{WeightVector, LONG_TERM_WEIGHTS, SHORT_TERM_WEIGHTS};

use engine::{decide_dominance, round2, score_side};
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies one strategy's weight vector to a pair.
pub struct ScoreEngine {
    mode: StrategyMode,
}

impl ScoreEngine {
    pub fn new(mode: StrategyMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> StrategyMode {
        self.mode
    }

    pub fn evaluate(&self, you: &PartnerProfile, partner: &PartnerProfile) -> ScoreResult {
        self.evaluate_detailed(you, partner).result
    }

    /// Full evaluation including the per-factor contribution trail for each side.
    pub fn evaluate_detailed(
        &self,
        you: &PartnerProfile,
        partner: &PartnerProfile,
    ) -> EvaluationBreakdown {
        let weights = self.mode.weights();
        let (your_components, your_score) = score_side(you, partner, weights);
        let (partner_components, partner_score) = score_side(partner, you, weights);

        let compatibility = round2((your_score + partner_score) / 2.0);
        let power_balance = round2((your_score - partner_score).abs());
        let dominant = decide_dominance(your_score, partner_score, power_balance);

        EvaluationBreakdown {
            result: ScoreResult {
                compatibility,
                power_balance,
                dominant,
            },
            your_score: round2(your_score),
            partner_score: round2(partner_score),
            your_components,
            partner_components,
        }
    }
}

/// Convenience wrapper matching the bare function contract.
pub fn evaluate(
    you: &PartnerProfile,
    partner: &PartnerProfile,
    mode: StrategyMode,
) -> ScoreResult {
    ScoreEngine::new(mode).evaluate(you, partner)
}

/// Headline numbers for one evaluation, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub compatibility: f64,
    pub power_balance: f64,
    pub dominant: Dominance,
}

/// Scored factor labels, mirroring the five form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    AgeGap,
    Income,
    Occupation,
    EmotionalStability,
    ValueAlignment,
}

impl ScoreFactor {
    pub fn label(self) -> &'static str {
        match self {
            ScoreFactor::AgeGap => "age gap",
            ScoreFactor::Income => "income",
            ScoreFactor::Occupation => "occupation",
            ScoreFactor::EmotionalStability => "emotional stability",
            ScoreFactor::ValueAlignment => "value alignment",
        }
    }
}

/// Discrete contribution to one side's raw score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub contribution: f64,
    pub notes: String,
}

/// Evaluation output carrying the headline result and both contribution trails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationBreakdown {
    pub result: ScoreResult,
    pub your_score: f64,
    pub partner_score: f64,
    pub your_components: Vec<ScoreComponent>,
    pub partner_components: Vec<ScoreComponent>,
}
