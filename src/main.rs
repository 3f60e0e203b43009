//! `churn-checkr`: score a credit card customer for churn risk.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Load the trained classifier once ([`model::logistic::LogisticPipeline`]).
//! 4. Collect raw inputs from flags or a profile file ([`input`]).
//! 5. Derive features, predict, and bucket the risk ([`assessment::assess`]).
//! 6. Render the requested report ([`report`]).
//! 7. Exit `0`, or `1` when `--fail-on` is set and the tier reaches it.

mod assessment;
mod cli;
mod config;
mod features;
mod input;
mod model;
mod models;
mod report;
mod risk;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use assessment::assess;
use cli::Cli;
use config::{load_config, OutputFormat};
use model::logistic::LogisticPipeline;
use models::RiskCategory;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.about {
        report::terminal::render_about();
        return Ok(());
    }

    let workdir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = load_config(&workdir, cli.config.as_deref())?;

    let model_path = cli.model.clone().unwrap_or_else(|| config.model.path.clone());
    let classifier = LogisticPipeline::load(&model_path)
        .with_context(|| format!("failed to load model {}", model_path.display()))?;

    let raw = match &cli.input {
        Some(path) => input::load_profile(path)?,
        None => {
            let raw = cli.raw_inputs();
            raw.validate()?;
            raw
        }
    };

    let result = assess(&classifier, &raw)?;
    info!(
        label = %result.label,
        probability = result.churn_probability,
        category = %result.risk.category,
        "assessment complete"
    );

    let format = cli.report.map(OutputFormat::from).unwrap_or(config.report.format);
    match format {
        OutputFormat::Terminal => report::terminal::render(&result, cli.verbose, cli.quiet)?,
        OutputFormat::Json => report::json::render(&result)?,
    }

    let fail_on: Option<RiskCategory> = cli.fail_on.map(Into::into).or(config.report.fail_on);
    if fail_on.is_some_and(|tier| result.risk.category >= tier) {
        std::process::exit(1);
    }

    Ok(())
}
