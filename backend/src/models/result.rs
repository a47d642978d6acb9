//! Commission result types
//!
//! Produced fresh by every allocation and owned by the caller.

use serde::{Deserialize, Serialize};

/// Commission contributed by a single band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandResult {
    /// Display label for the band's range (e.g. `£5000 - £10000`)
    pub label: String,

    /// Rate applied to the band (fraction)
    pub rate: f64,

    /// Revenue placed in the band
    pub allocated: f64,

    /// Commission accrued in the band (`allocated * rate`)
    pub amount: f64,
}

/// Total commission plus the per-band breakdown
///
/// `total_commission` is accumulated in breakdown order, so it is exactly
/// the ordered sum of `breakdown[i].amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionResult {
    pub total_commission: f64,
    pub breakdown: Vec<BandResult>,
}

impl CommissionResult {
    /// Sum of the breakdown amounts, in order
    pub fn breakdown_total(&self) -> f64 {
        self.breakdown.iter().fold(0.0, |acc, band| acc + band.amount)
    }

    /// Total revenue placed across all reached bands
    pub fn allocated_total(&self) -> f64 {
        self.breakdown.iter().fold(0.0, |acc, band| acc + band.allocated)
    }
}
