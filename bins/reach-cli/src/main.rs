//! reach-cli — Command-line front end for the reach estimator.
//!
//! Reads an investment and a calculation mode (from flags, or interactively
//! when a flag is omitted) and prints the maximum number of views the
//! advertisement reaches.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use reach_core::{ReachSeries, reach_series};
use rust_decimal::Decimal;

const INVESTMENT_PROMPT: &str = "Digite o valor que será investido: ";
const MODE_PROMPT: &str = "Deseja que o cálculo seja proporcional ou truncado? (p|t): ";

/// Advertising reach estimator.
#[derive(Parser)]
#[command(name = "reach-cli")]
#[command(version, about = "Estimate the maximum views an advertisement reaches.")]
struct Cli {
    /// Amount invested, in reais (e.g. 100 or 82.24). Prompted for when omitted.
    #[arg(short, long)]
    investment: Option<String>,

    /// Calculation mode: `p` for proportional, anything else for truncated.
    /// Prompted for when omitted.
    #[arg(short, long)]
    mode: Option<String>,

    /// Also print the views of every generation.
    #[arg(short, long)]
    breakdown: bool,

    /// Print the full reach series as JSON instead of the summary.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let investment_text = match cli.investment {
        Some(text) => text,
        None => prompt(&mut input, INVESTMENT_PROMPT)?,
    };
    let investment = parse_investment(&investment_text)?;

    let mode_text = match cli.mode {
        Some(text) => text,
        None => prompt(&mut input, MODE_PROMPT)?,
    };
    let proportional = parse_mode(&mode_text);

    tracing::info!(%investment, proportional, "estimating reach");
    let series = reach_series(investment, proportional).context("Failed to estimate reach")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&series).context("Failed to serialize series")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", summary_line(&series));
    if cli.breakdown {
        for line in breakdown_lines(&series) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Print `message` and read one line of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}").context("Failed to write prompt")?;
    stdout.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line)
}

/// Parse an investment amount in reais.
fn parse_investment(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        bail!("Investment is required");
    }
    let investment: Decimal = trimmed
        .parse()
        .with_context(|| format!("Invalid investment amount: {trimmed:?}"))?;
    if investment.is_sign_negative() && !investment.is_zero() {
        bail!("Investment must not be negative: {investment}");
    }
    Ok(investment)
}

/// `p` selects proportional mode; anything else selects truncated.
fn parse_mode(text: &str) -> bool {
    text.trim() == "p"
}

fn summary_line(series: &ReachSeries) -> String {
    format!(
        "Seu investimento foi de R$ {}. O máximo de visualizações é {}",
        series.investment().normalize(),
        series.total().normalize()
    )
}

fn breakdown_lines(series: &ReachSeries) -> Vec<String> {
    series
        .generations()
        .iter()
        .enumerate()
        .map(|(generation, views)| format!("geração {generation}: {}", views.normalize()))
        .collect()
}
