use crate::compatibility::domain::{
    IncomeBracket, Occupation, PartnerProfile, ProfileParams,
};

pub(super) fn profile(
    age: u8,
    income: IncomeBracket,
    occupation: Occupation,
    emotional_stability: u8,
    value_alignment: u8,
) -> PartnerProfile {
    PartnerProfile::new(ProfileParams {
        age,
        income,
        occupation,
        emotional_stability,
        value_alignment,
    })
    .expect("fixture profile within domain")
}

/// The younger engineer from the reference scenario.
pub(super) fn you() -> PartnerProfile {
    profile(25, IncomeBracket::Under1000, Occupation::Engineering, 7, 8)
}

/// The older engineer from the reference scenario.
pub(super) fn partner() -> PartnerProfile {
    profile(37, IncomeBracket::Under1000, Occupation::Engineering, 6, 8)
}
