use super::domain::{Dominance, PartnerProfile};
use super::weights::WeightVector;
use super::{ScoreComponent, ScoreFactor};

/// Raw-score gap below which neither side is considered dominant.
pub const EQUAL_POWER_THRESHOLD: f64 = 3.0;

/// Base the symmetric age term counts down from; matches the top of the age domain.
const AGE_TERM_BASE: f64 = 60.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted score of `person` paired against `other`, with the per-factor trail.
///
/// The age term depends only on the absolute gap, so it contributes the same
/// amount to both sides of an evaluation; the remaining four terms are read off
/// `person` alone.
pub(crate) fn score_side(
    person: &PartnerProfile,
    other: &PartnerProfile,
    weights: &WeightVector,
) -> (Vec<ScoreComponent>, f64) {
    let age_gap = person.age.abs_diff(other.age);
    let age_term = (AGE_TERM_BASE - f64::from(age_gap)) * weights.age;
    let income_term = f64::from(person.income.score()) * weights.income;
    let occupation_term = f64::from(person.occupation.score()) * weights.occupation;
    let emotional_term = f64::from(person.emotional_stability) * weights.emotional;
    let values_term = f64::from(person.value_alignment) * weights.values;

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::AgeGap,
            contribution: age_term,
            notes: format!("age gap {age_gap} years"),
        },
        ScoreComponent {
            factor: ScoreFactor::Income,
            contribution: income_term,
            notes: format!(
                "bracket {} scores {}",
                person.income.label(),
                person.income.score()
            ),
        },
        ScoreComponent {
            factor: ScoreFactor::Occupation,
            contribution: occupation_term,
            notes: format!(
                "{} scores {}",
                person.occupation.label(),
                person.occupation.score()
            ),
        },
        ScoreComponent {
            factor: ScoreFactor::EmotionalStability,
            contribution: emotional_term,
            notes: format!("self-assessed {}", person.emotional_stability),
        },
        ScoreComponent {
            factor: ScoreFactor::ValueAlignment,
            contribution: values_term,
            notes: format!("self-assessed {}", person.value_alignment),
        },
    ];

    let total = age_term + income_term + occupation_term + emotional_term + values_term;
    (components, total)
}

pub(crate) fn decide_dominance(your_score: f64, partner_score: f64, power_balance: f64) -> Dominance {
    if power_balance < EQUAL_POWER_THRESHOLD {
        Dominance::Equal
    } else if your_score > partner_score {
        Dominance::You
    } else {
        Dominance::Partner
    }
}
