use crate::infra::reference_pair;
use clap::Args;
use match_dynamics::compatibility::{
    outcomes, EvaluationBreakdown, IncomeBracket, Occupation, PartnerProfile, ProfileParams,
    ScoreEngine, StrategyMode,
};
use match_dynamics::config::AppConfig;
use match_dynamics::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Your age (18-60)
    #[arg(long)]
    pub(crate) your_age: u8,
    /// Your monthly income bracket: <1000, 1000-3000, 3000-10000, >10000
    #[arg(long)]
    pub(crate) your_income: IncomeBracket,
    /// Your occupation: Engineering, Medicine, Tech, Academia, Other
    #[arg(long)]
    pub(crate) your_occupation: Occupation,
    /// Your emotional stability (0-10)
    #[arg(long)]
    pub(crate) your_stability: u8,
    /// Your value alignment (0-10)
    #[arg(long)]
    pub(crate) your_values: u8,
    /// Partner age (18-60)
    #[arg(long)]
    pub(crate) partner_age: u8,
    /// Partner monthly income bracket
    #[arg(long)]
    pub(crate) partner_income: IncomeBracket,
    /// Partner occupation
    #[arg(long)]
    pub(crate) partner_occupation: Occupation,
    /// Partner emotional stability (0-10)
    #[arg(long)]
    pub(crate) partner_stability: u8,
    /// Partner value alignment (0-10)
    #[arg(long)]
    pub(crate) partner_values: u8,
    /// Strategy horizon (defaults to MATCH_DEFAULT_STRATEGY)
    #[arg(long)]
    pub(crate) strategy: Option<StrategyMode>,
    /// Emit the full breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Restrict the walk-through to one strategy horizon
    #[arg(long)]
    pub(crate) strategy: Option<StrategyMode>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let strategy = args.strategy.unwrap_or(config.defaults.strategy);

    let you = PartnerProfile::new(ProfileParams {
        age: args.your_age,
        income: args.your_income,
        occupation: args.your_occupation,
        emotional_stability: args.your_stability,
        value_alignment: args.your_values,
    })?;
    let partner = PartnerProfile::new(ProfileParams {
        age: args.partner_age,
        income: args.partner_income,
        occupation: args.partner_occupation,
        emotional_stability: args.partner_stability,
        value_alignment: args.partner_values,
    })?;

    let breakdown = ScoreEngine::new(strategy).evaluate_detailed(&you, &partner);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&breakdown).map_err(std::io::Error::from)?
        );
    } else {
        render_breakdown(strategy, &breakdown);
    }

    Ok(())
}

pub(crate) fn run_outcomes() -> Result<(), AppError> {
    render_outcome_table();
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (you_params, partner_params) = reference_pair();
    let you = PartnerProfile::new(you_params)?;
    let partner = PartnerProfile::new(partner_params)?;

    println!("Compatibility scoring demo");
    println!(
        "- You: age {}, income {}, {}, stability {}, values {}",
        you.age,
        you.income.label(),
        you.occupation.label(),
        you.emotional_stability,
        you.value_alignment
    );
    println!(
        "- Partner: age {}, income {}, {}, stability {}, values {}",
        partner.age,
        partner.income.label(),
        partner.occupation.label(),
        partner.emotional_stability,
        partner.value_alignment
    );

    let horizons: Vec<StrategyMode> = match args.strategy {
        Some(strategy) => vec![strategy],
        None => vec![StrategyMode::ShortTerm, StrategyMode::LongTerm],
    };

    for strategy in horizons {
        let breakdown = ScoreEngine::new(strategy).evaluate_detailed(&you, &partner);
        println!();
        render_breakdown(strategy, &breakdown);
    }

    println!();
    render_outcome_table();
    Ok(())
}

fn render_breakdown(strategy: StrategyMode, breakdown: &EvaluationBreakdown) {
    println!("Compatibility report ({} strategy)", strategy.label());
    println!("- Compatibility score: {:.2}", breakdown.result.compatibility);
    println!("- Power balance: {:.2}", breakdown.result.power_balance);
    println!("- Dominant partner: {}", breakdown.result.dominant);
    println!("- Your raw score: {:.2}", breakdown.your_score);
    for component in &breakdown.your_components {
        println!(
            "  - {}: {:.2} ({})",
            component.factor.label(),
            component.contribution,
            component.notes
        );
    }
    println!("- Partner raw score: {:.2}", breakdown.partner_score);
    for component in &breakdown.partner_components {
        println!(
            "  - {}: {:.2} ({})",
            component.factor.label(),
            component.contribution,
            component.notes
        );
    }
}

fn render_outcome_table() {
    println!("Probable life events");
    for event in outcomes::events() {
        println!(
            "- {}: you {:+}, partner {:+}",
            event.name, event.self_delta, event.partner_delta
        );
    }

    let totals = outcomes::totals();
    println!("Long-term outcome totals: you {:+}, partner {:+}", totals.self_total, totals.partner_total);
}
