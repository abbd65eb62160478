use crate::commands::{run_analyze, run_company, AnalyzeArgs, CompanyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jobguard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "JobGuard",
    about = "Screen job postings for fraud signals and look up company reputation",
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
    /// Score a job posting read from a file or stdin
    Analyze(AnalyzeArgs),
    /// Look up reputation metrics for a company name or company page URL
    Company(CompanyArgs),
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
        Command::Analyze(args) => run_analyze(args),
        Command::Company(args) => run_company(args),
    }
}
