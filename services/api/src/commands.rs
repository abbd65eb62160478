use crate::infra::build_company_lookup;
use clap::Args;
use jobguard::analysis::analyze_posting;
use jobguard::config::AppConfig;
use jobguard::error::AppError;
use jobguard::telemetry;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Read the posting from this file instead of stdin
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CompanyArgs {
    /// Company name or company page URL
    pub(crate) input: String,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    load_command_config()?;

    let text = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let assessment = analyze_posting(Some(&text))?;
    print_json(&assessment)
}

pub(crate) fn run_company(args: CompanyArgs) -> Result<(), AppError> {
    let config = load_command_config()?;
    let lookup = build_company_lookup(&config.company)?;
    let stats = lookup.lookup(&args.input)?;
    print_json(&stats)
}

fn load_command_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
