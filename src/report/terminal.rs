use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::{ChurnLabel, PredictionResult, RiskColor};

/// Render a colored terminal report.
pub fn render(result: &PredictionResult, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}", summary_line(result));
        return Ok(());
    }

    println!(
        "\n {} v{}\n",
        "churn-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );

    match result.label {
        ChurnLabel::Churn => println!(
            " {} Churn likely (confidence: {:.2})\n",
            "✗".red().bold(),
            result.confidence
        ),
        ChurnLabel::Stay => println!(
            " {} Customer likely to stay (confidence: {:.2})\n",
            "✓".green().bold(),
            result.confidence
        ),
    }

    let risk = &result.risk;
    let heading = format!("Risk Category: {}", risk.category);
    println!(" ┌────────────────────────────────────────────────────────────┐");
    println!(" │  {:<56}  │", paint(&heading, risk.color).bold());
    for line in wrap(risk.description, 56) {
        println!(" │  {:<56}  │", line);
    }
    println!(
        " │  {:<56}  │",
        format!("Churn probability : {}", percent(result.churn_probability))
    );
    println!(" └────────────────────────────────────────────────────────────┘\n");

    if verbose {
        println!(" {} Derived features:\n", "[FEATURES]".cyan().bold());
        render_features(result);
        println!();
    }

    Ok(())
}

/// One-line form used by `--quiet`.
pub fn summary_line(result: &PredictionResult) -> String {
    format!(
        "{}  label: {}  confidence: {:.2}  churn probability: {}",
        paint(&result.risk.category.to_string(), result.risk.color),
        result.label,
        result.confidence,
        percent(result.churn_probability),
    )
}

/// Product overview shown by `--about`.
pub fn render_about() {
    println!("\n {}\n", "Credit Card Churn Prediction".bold());

    println!(" {}", "Who it's made for:".yellow().bold());
    println!("  - Financial institutions: banks and credit card companies looking to reduce customer churn");
    println!("  - Business analysts: managers who need to identify churn risk in customers\n");

    println!(" {}", "Key features:".yellow().bold());
    println!("  - Analyzes credit data to determine likelihood of account closure with confidence scores");
    println!("  - Classifies customers into Low, Average, High, or Critical risk categories");
    println!("  - Provides recommendations based on risk level\n");

    println!(" {}", "How to use:".yellow().bold());
    println!("  Pass the customer's details as flags (see --help) or as a profile file with --input,");
    println!("  and get an instant risk assessment with a recommendation.\n");
}

fn render_features(result: &PredictionResult) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Feature").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    for (name, value) in result.features.named() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format_value(value)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

fn paint(text: &str, color: RiskColor) -> ColoredString {
    match color {
        RiskColor::Green => text.green(),
        RiskColor::Orange => text.truecolor(255, 165, 0),
        RiskColor::Yellow => text.yellow(),
        RiskColor::Red => text.red(),
    }
}

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Whole numbers print without decimals, ratios with four.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Greedy word wrap for the risk box.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
