//! Commission Calculator CLI
//!
//! Computes the progressive band commission on a revenue figure and prints
//! the total with a per-band breakdown.
//!
//! ```text
//! commission 25000
//! commission 12000 --bands bands.json --json
//! ```

use anyhow::Context;
use clap::Parser;
use commission_engine_core_rs::format::render_table;
use commission_engine_core_rs::{BandSchedule, CommissionResult, CommissionSession, ZeroRevenuePolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "commission", version, about = "Progressive band commission calculator")]
struct Args {
    /// Revenue to calculate commission on
    #[arg(allow_hyphen_values = true)]
    revenue: String,

    /// JSON band schedule (defaults to the reference table)
    #[arg(long, value_name = "FILE")]
    bands: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Reject a revenue of zero
    #[arg(long)]
    require_positive: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy = zero_revenue_policy(args.require_positive);

    let mut session = match &args.bands {
        Some(path) => CommissionSession::from_json_file(path, policy)
            .with_context(|| format!("loading band schedule from {}", path.display()))?,
        None => CommissionSession::new(BandSchedule::reference(), policy),
    };

    let fingerprint = session.schedule().fingerprint()?;
    tracing::debug!(
        %fingerprint,
        bands = session.schedule().len(),
        "using band schedule"
    );

    let outcome = session
        .calculate(&args.revenue)
        .context("calculating commission")?;

    print!("{}", render_output(&outcome.result, args.json)?);

    Ok(())
}

/// Map the `--require-positive` flag to a zero-revenue policy
fn zero_revenue_policy(require_positive: bool) -> ZeroRevenuePolicy {
    if require_positive {
        ZeroRevenuePolicy::Reject
    } else {
        ZeroRevenuePolicy::Allow
    }
}

/// Pretty JSON or the text table, always newline-terminated
fn render_output(result: &CommissionResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(result)?))
    } else {
        Ok(render_table(result))
    }
}
