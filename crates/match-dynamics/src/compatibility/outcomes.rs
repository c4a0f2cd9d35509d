use serde::Serialize;

/// One hypothetical future event and the fixed score delta for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeEvent {
    pub name: &'static str,
    pub self_delta: i32,
    pub partner_delta: i32,
}

/// Column sums over the life-event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeTotals {
    pub self_total: i32,
    pub partner_total: i32,
}

// Display order is the order the original form listed the scenarios in.
const LIFE_EVENTS: [LifeEvent; 5] = [
    LifeEvent {
        name: "Career Growth",
        self_delta: 3,
        partner_delta: 2,
    },
    LifeEvent {
        name: "Emotional Burnout",
        self_delta: -2,
        partner_delta: -3,
    },
    LifeEvent {
        name: "Relocation Willingness",
        self_delta: 2,
        partner_delta: 1,
    },
    LifeEvent {
        name: "Children / Parenthood",
        self_delta: 4,
        partner_delta: 4,
    },
    LifeEvent {
        name: "Health Events",
        self_delta: -3,
        partner_delta: -2,
    },
];

/// Fixed event sequence, realized fresh on each call.
pub fn events() -> Vec<LifeEvent> {
    LIFE_EVENTS.to_vec()
}

/// Totals are summed from the table rather than stored, so an edited table
/// cannot drift out of sync with its aggregates.
pub fn totals() -> OutcomeTotals {
    LIFE_EVENTS
        .iter()
        .fold(OutcomeTotals { self_total: 0, partner_total: 0 }, |acc, event| OutcomeTotals {
            self_total: acc.self_total + event.self_delta,
            partner_total: acc.partner_total + event.partner_delta,
        })
}
