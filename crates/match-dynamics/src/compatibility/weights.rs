use super::domain::{IncomeBracket, Occupation, StrategyMode};

/// Coefficients applied to the five scored factors under one strategy horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub age: f64,
    pub income: f64,
    pub occupation: f64,
    pub emotional: f64,
    pub values: f64,
}

/// Short-horizon play: resource signaling dominates, stability counts less.
pub const SHORT_TERM_WEIGHTS: WeightVector = WeightVector {
    age: 0.3,
    income: 2.0,
    occupation: 1.5,
    emotional: 1.0,
    values: 1.0,
};

/// Long-horizon play: stability and shared values carry the score.
pub const LONG_TERM_WEIGHTS: WeightVector = WeightVector {
    age: 0.1,
    income: 1.2,
    occupation: 1.2,
    emotional: 2.5,
    values: 2.5,
};

impl StrategyMode {
    pub fn weights(self) -> &'static WeightVector {
        match self {
            StrategyMode::ShortTerm => &SHORT_TERM_WEIGHTS,
            StrategyMode::LongTerm => &LONG_TERM_WEIGHTS,
        }
    }
}

impl IncomeBracket {
    /// Bracket score; total over the enum so a new bracket cannot ship unscored.
    pub const fn score(self) -> u8 {
        match self {
            IncomeBracket::Under1000 => 1,
            IncomeBracket::From1000To3000 => 2,
            IncomeBracket::From3000To10000 => 3,
            IncomeBracket::Over10000 => 4,
        }
    }
}

impl Occupation {
    pub const fn score(self) -> u8 {
        match self {
            Occupation::Engineering => 3,
            Occupation::Medicine => 4,
            Occupation::Tech => 4,
            Occupation::Academia => 2,
            Occupation::Other => 2,
        }
    }
}
