use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;
use crate::models::{RawInputs, RiskCategory};

#[derive(Parser, Debug)]
#[command(
    name = "churn-checkr",
    about = "Score a credit card customer for churn risk",
    version
)]
pub struct Cli {
    /// How long the customer has had the account (months)
    #[arg(long, default_value_t = 36, value_parser = clap::value_parser!(u32).range(0..=60))]
    pub months_on_book: u32,

    /// Number of products held with the bank (cards, loans, ...)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=6))]
    pub relationship_count: u32,

    /// Months inactive in the last 12 months
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(0..=12))]
    pub months_inactive: u32,

    /// Contacts with customer service in the last 12 months
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=6))]
    pub contacts: u32,

    /// Credit limit ($, 1000-50000)
    #[arg(long, default_value_t = 10_000.0)]
    pub credit_limit: f64,

    /// Current balance ($, 0-50000)
    #[arg(long, default_value_t = 4_000.0)]
    pub balance: f64,

    /// Spending this quarter ($, 0-10000)
    #[arg(long, default_value_t = 2_000.0)]
    pub spend_this_quarter: f64,

    /// Spending last quarter ($, 0-10000)
    #[arg(long, default_value_t = 1_500.0)]
    pub spend_last_quarter: f64,

    /// Transactions this quarter
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub txns_this_quarter: u32,

    /// Transactions last quarter
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub txns_last_quarter: u32,

    /// Customer profile file (.toml or .json); replaces the per-field flags
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Trained model artifact [default: from config, else ./model.json]
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Config file [default: ./.churn-checkr/config.toml, fallback ~/.config/churn-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format [default: from config, else terminal]
    #[arg(long, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,

    /// Exit with code 1 when the risk tier is at or above this one
    #[arg(long, value_name = "TIER")]
    pub fail_on: Option<TierArg>,

    /// Also show the derived feature table
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Describe what the tool is for and exit
    #[arg(long)]
    pub about: bool,
}

impl Cli {
    /// Raw inputs assembled from the per-field flags.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            months_on_book: self.months_on_book,
            total_relationship_count: self.relationship_count,
            months_inactive: self.months_inactive,
            contacts_count: self.contacts,
            credit_limit: self.credit_limit,
            current_balance: self.balance,
            spending_this_quarter: self.spend_this_quarter,
            spending_last_quarter: self.spend_last_quarter,
            transactions_this_quarter: self.txns_this_quarter,
            transactions_last_quarter: self.txns_last_quarter,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(arg: ReportFormat) -> Self {
        match arg {
            ReportFormat::Terminal => OutputFormat::Terminal,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TierArg {
    Low,
    Average,
    High,
    Critical,
}

impl From<TierArg> for RiskCategory {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Low => RiskCategory::Low,
            TierArg::Average => RiskCategory::Average,
            TierArg::High => RiskCategory::High,
            TierArg::Critical => RiskCategory::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_match_form_defaults() {
        let cli = Cli::try_parse_from(["churn-checkr"]).unwrap();
        assert_eq!(cli.raw_inputs(), RawInputs::default());
        assert!(cli.report.is_none());
        assert!(cli.fail_on.is_none());
    }

    #[test]
    fn test_flags_map_to_fields() {
        let cli = Cli::try_parse_from([
            "churn-checkr",
            "--months-on-book",
            "12",
            "--spend-last-quarter",
            "0",
            "--txns-last-quarter",
            "0",
            "--fail-on",
            "high",
            "--report",
            "json",
        ])
        .unwrap();
        let raw = cli.raw_inputs();
        assert_eq!(raw.months_on_book, 12);
        assert_eq!(raw.spending_last_quarter, 0.0);
        assert_eq!(raw.transactions_last_quarter, 0);
        assert_eq!(cli.fail_on.map(RiskCategory::from), Some(RiskCategory::High));
        assert!(matches!(cli.report, Some(ReportFormat::Json)));
    }

    #[test]
    fn test_integer_ranges_enforced() {
        assert!(Cli::try_parse_from(["churn-checkr", "--months-on-book", "61"]).is_err());
        assert!(Cli::try_parse_from(["churn-checkr", "--relationship-count", "0"]).is_err());
        assert!(Cli::try_parse_from(["churn-checkr", "--contacts", "7"]).is_err());
        assert!(Cli::try_parse_from(["churn-checkr", "--txns-this-quarter", "101"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
