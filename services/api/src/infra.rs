use match_dynamics::compatibility::{IncomeBracket, Occupation, ProfileParams, StrategyMode};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) default_strategy: StrategyMode,
}

/// Sample pair used by the demo command and route tests.
pub(crate) fn reference_pair() -> (ProfileParams, ProfileParams) {
    (
        ProfileParams {
            age: 25,
            income: IncomeBracket::Under1000,
            occupation: Occupation::Engineering,
            emotional_stability: 7,
            value_alignment: 8,
        },
        ProfileParams {
            age: 37,
            income: IncomeBracket::Under1000,
            occupation: Occupation::Engineering,
            emotional_stability: 6,
            value_alignment: 8,
        },
    )
}
