//! Band model
//!
//! A band is a contiguous revenue interval with a commission rate.
//! The terminal band of a schedule has no upper edge and absorbs all
//! revenue above the highest finite threshold.

use serde::{Deserialize, Serialize};

/// A single commission band
///
/// `upper_bound == None` marks the unbounded band. Rates are fractions
/// (`0.1` is 10%).
///
/// # Example
/// ```
/// use commission_engine_core_rs::Band;
///
/// let band = Band::new(5_000.0, 10_000.0, 0.1);
/// assert_eq!(band.width(), 5_000.0);
///
/// let top = Band::unbounded(20_000.0, 0.25);
/// assert!(top.is_unbounded());
/// assert_eq!(top.width(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Inclusive lower edge of the band
    pub lower_bound: f64,

    /// Upper edge of the band (`None` = unbounded)
    #[serde(default)]
    pub upper_bound: Option<f64>,

    /// Commission rate applied to revenue inside the band (0.0..=1.0)
    pub rate: f64,
}

impl Band {
    /// Create a bounded band
    pub fn new(lower_bound: f64, upper_bound: f64, rate: f64) -> Self {
        Self {
            lower_bound,
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// Create the terminal band with no upper edge
    pub fn unbounded(lower_bound: f64, rate: f64) -> Self {
        Self {
            lower_bound,
            upper_bound: None,
            rate,
        }
    }

    /// Amount of revenue the band can hold
    ///
    /// Infinite for the unbounded band.
    pub fn width(&self) -> f64 {
        match self.upper_bound {
            Some(upper) => upper - self.lower_bound,
            None => f64::INFINITY,
        }
    }

    /// Check if this is the unbounded band
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}
