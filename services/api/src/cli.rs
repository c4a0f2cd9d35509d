use crate::demo::{run_demo, run_outcomes, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use match_dynamics::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Match Dynamics",
    about = "Evaluate pair compatibility and power balance from the command line or as a service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate one pair of profiles and print the scores
    Score(ScoreArgs),
    /// Print the fixed life-event outcome table and its totals
    Outcomes,
    /// Run a scripted walk-through of both strategy horizons
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Outcomes => run_outcomes(),
        Command::Demo(args) => run_demo(args),
    }
}
