//! Band Allocator
//!
//! Partitions a revenue figure across an ordered band table and computes the
//! commission accrued in each band.
//!
//! # Allocation Flow
//!
//! ```text
//! remaining = revenue
//! for band in bands (ascending):
//!     allocated   = min(remaining, band.width)
//!     commission  = allocated * band.rate
//!     push result, total += commission
//!     remaining  -= allocated
//!     stop once remaining <= 0
//! ```
//!
//! # Critical Invariants
//!
//! - **Ordering**: breakdown follows band order, no band appears twice
//! - **Conservation**: `total_commission` equals the ordered sum of amounts
//! - **Early exit**: a band is appended before the exhaustion check, so a
//!   zero revenue still yields one zero-amount entry
//! - **Purity**: no shared state, identical inputs give identical outputs

use crate::format::range_label;
use crate::input::{validate_revenue, ZeroRevenuePolicy};
use crate::models::{Band, BandResult, CommissionResult};
use crate::schedule::ScheduleError;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while calculating commission
#[derive(Debug, Error, PartialEq)]
pub enum CommissionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Allocate revenue across bands
///
/// Bands must be contiguous, ascending, with the unbounded band last.
/// [`BandSchedule`](crate::schedule::BandSchedule) guarantees this; a raw
/// slice is trusted as given.
///
/// # Arguments
///
/// * `revenue` - Finite revenue value, `>= 0`
/// * `bands` - Ordered band table
///
/// # Returns
///
/// - `Ok(CommissionResult)` with the total and per-band breakdown
/// - `Err(CommissionError::InvalidInput)` if revenue is negative or not finite
///
/// # Example
///
/// ```rust
/// use commission_engine_core_rs::{allocate, Band};
///
/// let bands = vec![
///     Band::new(0.0, 5_000.0, 0.0),
///     Band::new(5_000.0, 10_000.0, 0.1),
///     Band::unbounded(10_000.0, 0.15),
/// ];
///
/// let result = allocate(7_000.0, &bands).unwrap();
/// assert_eq!(result.total_commission, 200.0);
/// assert_eq!(result.breakdown.len(), 2);
/// ```
pub fn allocate(revenue: f64, bands: &[Band]) -> Result<CommissionResult, CommissionError> {
    let revenue = validate_revenue(revenue, ZeroRevenuePolicy::Allow)?;

    let mut remaining = revenue;
    let mut total_commission = 0.0;
    let mut breakdown = Vec::with_capacity(bands.len());

    for band in bands {
        let allocated = remaining.min(band.width());
        let amount = allocated * band.rate;

        breakdown.push(BandResult {
            label: range_label(band),
            rate: band.rate,
            allocated,
            amount,
        });

        total_commission += amount;
        remaining -= allocated;

        if remaining <= 0.0 {
            break;
        }
    }

    debug!(
        revenue,
        total_commission,
        bands_reached = breakdown.len(),
        "allocated revenue across bands"
    );

    Ok(CommissionResult {
        total_commission,
        breakdown,
    })
}
