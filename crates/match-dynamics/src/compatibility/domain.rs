use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age bounds accepted for either partner.
pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 18..=60;
/// Bounds for the 0-10 self-assessment sliders.
pub const SLIDER_RANGE: std::ops::RangeInclusive<u8> = 0..=10;

/// Monthly income bracket declared for a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "<1000")]
    Under1000,
    #[serde(rename = "1000-3000")]
    From1000To3000,
    #[serde(rename = "3000-10000")]
    From3000To10000,
    #[serde(rename = ">10000")]
    Over10000,
}

impl IncomeBracket {
    pub fn label(self) -> &'static str {
        match self {
            IncomeBracket::Under1000 => "<1000",
            IncomeBracket::From1000To3000 => "1000-3000",
            IncomeBracket::From3000To10000 => "3000-10000",
            IncomeBracket::Over10000 => ">10000",
        }
    }
}

impl FromStr for IncomeBracket {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "<1000" => Ok(IncomeBracket::Under1000),
            "1000-3000" => Ok(IncomeBracket::From1000To3000),
            "3000-10000" => Ok(IncomeBracket::From3000To10000),
            ">10000" => Ok(IncomeBracket::Over10000),
            other => Err(DomainError::UnknownIncomeBracket(other.to_string())),
        }
    }
}

/// Occupation category declared for a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    Engineering,
    Medicine,
    Tech,
    Academia,
    Other,
}

impl Occupation {
    pub fn label(self) -> &'static str {
        match self {
            Occupation::Engineering => "Engineering",
            Occupation::Medicine => "Medicine",
            Occupation::Tech => "Tech",
            Occupation::Academia => "Academia",
            Occupation::Other => "Other",
        }
    }
}

impl FromStr for Occupation {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "Engineering" => Ok(Occupation::Engineering),
            "Medicine" => Ok(Occupation::Medicine),
            "Tech" => Ok(Occupation::Tech),
            "Academia" => Ok(Occupation::Academia),
            "Other" => Ok(Occupation::Other),
            other => Err(DomainError::UnknownOccupation(other.to_string())),
        }
    }
}

/// Which relationship horizon the active weight vector models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyMode {
    ShortTerm,
    LongTerm,
}

impl StrategyMode {
    pub fn label(self) -> &'static str {
        match self {
            StrategyMode::ShortTerm => "short-term",
            StrategyMode::LongTerm => "long-term",
        }
    }
}

impl FromStr for StrategyMode {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "short" | "short-term" | "short_term" => Ok(StrategyMode::ShortTerm),
            "long" | "long-term" | "long_term" => Ok(StrategyMode::LongTerm),
            other => Err(DomainError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Raw, unvalidated attribute set as collected by a front-end form or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileParams {
    pub age: u8,
    pub income: IncomeBracket,
    pub occupation: Occupation,
    pub emotional_stability: u8,
    pub value_alignment: u8,
}

/// Validated attribute set for one side of the pairing.
///
/// Construction goes through [`PartnerProfile::new`] so every value is known to
/// sit inside its declared domain; the scoring engine can then treat profiles
/// as total inputs and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct PartnerProfile {
    pub age: u8,
    pub income: IncomeBracket,
    pub occupation: Occupation,
    pub emotional_stability: u8,
    pub value_alignment: u8,
}

impl PartnerProfile {
    pub fn new(params: ProfileParams) -> Result<Self, DomainError> {
        if !AGE_RANGE.contains(&params.age) {
            return Err(DomainError::AgeOutOfRange { value: params.age });
        }
        if !SLIDER_RANGE.contains(&params.emotional_stability) {
            return Err(DomainError::StabilityOutOfRange {
                value: params.emotional_stability,
            });
        }
        if !SLIDER_RANGE.contains(&params.value_alignment) {
            return Err(DomainError::AlignmentOutOfRange {
                value: params.value_alignment,
            });
        }

        Ok(Self {
            age: params.age,
            income: params.income,
            occupation: params.occupation,
            emotional_stability: params.emotional_stability,
            value_alignment: params.value_alignment,
        })
    }
}

impl TryFrom<ProfileParams> for PartnerProfile {
    type Error = DomainError;

    fn try_from(params: ProfileParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

/// Outcome of comparing the two raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dominance {
    You,
    Partner,
    Equal,
}

impl Dominance {
    pub fn label(self) -> &'static str {
        match self {
            Dominance::You => "You",
            Dominance::Partner => "Partner",
            Dominance::Equal => "Equal",
        }
    }
}

impl fmt::Display for Dominance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attribute outside its declared domain, rejected at the intake boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("age {value} outside accepted range 18-60")]
    AgeOutOfRange { value: u8 },
    #[error("emotional stability {value} outside accepted range 0-10")]
    StabilityOutOfRange { value: u8 },
    #[error("value alignment {value} outside accepted range 0-10")]
    AlignmentOutOfRange { value: u8 },
    #[error("unknown income bracket '{0}'")]
    UnknownIncomeBracket(String),
    #[error("unknown occupation '{0}'")]
    UnknownOccupation(String),
    #[error("unknown strategy '{0}' (expected short-term or long-term)")]
    UnknownStrategy(String),
}
