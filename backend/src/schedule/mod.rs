//! Band Schedule
//!
//! A validated, ordered band table. Schedules are injected into the
//! allocator rather than hard-coded, so the same engine serves any
//! commission policy.
//!
//! # Structural Invariants
//!
//! 1. At least one band
//! 2. The first band starts at 0
//! 3. Every band has `lower_bound < upper_bound`
//! 4. Bands are contiguous: `bands[i].upper_bound == bands[i + 1].lower_bound`
//! 5. Exactly one unbounded band, and it is the last
//! 6. Rates are finite fractions in `0.0..=1.0`
//!
//! Non-decreasing rates are a domain convention and are not enforced.
//!
//! # Configuration Format
//!
//! Either a bare array or an object with a `bands` key:
//!
//! ```json
//! { "bands": [
//!     { "lower_bound": 0, "upper_bound": 5000, "rate": 0.0 },
//!     { "lower_bound": 5000, "upper_bound": null, "rate": 0.1 }
//! ] }
//! ```

use crate::allocator::{allocate, CommissionError};
use crate::models::{Band, CommissionResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while building or loading a schedule
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Band schedule must contain at least one band")]
    Empty,

    #[error("First band must start at 0, starts at {lower}")]
    NonZeroStart { lower: f64 },

    #[error("Band {index} has a non-finite bound")]
    NonFiniteBound { index: usize },

    #[error("Band {index} has lower bound {lower} not below upper bound {upper}")]
    InvertedBand { index: usize, lower: f64, upper: f64 },

    #[error("Band {index} has invalid rate {rate} (expected 0.0..=1.0)")]
    InvalidRate { index: usize, rate: f64 },

    #[error("Band {index} starts at {found}, expected {expected} (bands must be contiguous)")]
    Gap {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("Unbounded band at position {index} is not the last band")]
    UnboundedNotLast { index: usize },

    #[error("Last band must be unbounded")]
    MissingUnbounded,

    #[error("Failed to parse band schedule: {0}")]
    Parse(String),

    #[error("Failed to read band schedule: {0}")]
    Io(String),
}

/// Validated band table
///
/// # Example
/// ```
/// use commission_engine_core_rs::{Band, BandSchedule};
///
/// let schedule = BandSchedule::new(vec![
///     Band::new(0.0, 1_000.0, 0.0),
///     Band::unbounded(1_000.0, 0.2),
/// ]).unwrap();
///
/// let result = schedule.allocate(1_500.0).unwrap();
/// assert_eq!(result.total_commission, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Band>", into = "Vec<Band>")]
pub struct BandSchedule {
    bands: Vec<Band>,
}

/// On-disk layouts accepted by [`BandSchedule::from_json_str`]
#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleDocument {
    Bare(Vec<Band>),
    Wrapped { bands: Vec<Band> },
}

impl BandSchedule {
    /// Build a schedule, checking every structural invariant
    pub fn new(bands: Vec<Band>) -> Result<Self, ScheduleError> {
        validate_bands(&bands)?;
        Ok(Self { bands })
    }

    /// The reference five-band table
    ///
    /// | Range          | Rate |
    /// |----------------|------|
    /// | 0 - 5000       | 0%   |
    /// | 5000 - 10000   | 10%  |
    /// | 10000 - 15000  | 15%  |
    /// | 15000 - 20000  | 20%  |
    /// | 20000+         | 25%  |
    pub fn reference() -> Self {
        Self {
            bands: vec![
                Band::new(0.0, 5_000.0, 0.0),
                Band::new(5_000.0, 10_000.0, 0.1),
                Band::new(10_000.0, 15_000.0, 0.15),
                Band::new(15_000.0, 20_000.0, 0.2),
                Band::unbounded(20_000.0, 0.25),
            ],
        }
    }

    /// Parse and validate a schedule from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let document: ScheduleDocument =
            serde_json::from_str(json).map_err(|e| ScheduleError::Parse(e.to_string()))?;

        let bands = match document {
            ScheduleDocument::Bare(bands) => bands,
            ScheduleDocument::Wrapped { bands } => bands,
        };

        Self::new(bands)
    }

    /// Read, parse and validate a schedule file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::Io(format!("{}: {}", path.display(), e)))?;

        let schedule = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            bands = schedule.len(),
            "loaded band schedule"
        );
        Ok(schedule)
    }

    /// Bands in ascending order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Always false for a validated schedule
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Allocate revenue across this schedule
    pub fn allocate(&self, revenue: f64) -> Result<CommissionResult, CommissionError> {
        allocate(revenue, &self.bands)
    }

    /// Deterministic SHA-256 fingerprint of the schedule
    ///
    /// Identical tables always give the same digest, so callers can tag a
    /// result with the schedule that produced it.
    pub fn fingerprint(&self) -> Result<String, ScheduleError> {
        compute_schedule_hash(&self.bands)
    }
}

impl Default for BandSchedule {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<Band>> for BandSchedule {
    type Error = ScheduleError;

    fn try_from(bands: Vec<Band>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<BandSchedule> for Vec<Band> {
    fn from(schedule: BandSchedule) -> Self {
        schedule.bands
    }
}

/// Check the structural invariants of a band table
fn validate_bands(bands: &[Band]) -> Result<(), ScheduleError> {
    let last_index = match bands.len() {
        0 => return Err(ScheduleError::Empty),
        n => n - 1,
    };

    for (index, band) in bands.iter().enumerate() {
        if !band.lower_bound.is_finite() {
            return Err(ScheduleError::NonFiniteBound { index });
        }

        match band.upper_bound {
            Some(upper) if !upper.is_finite() => {
                return Err(ScheduleError::NonFiniteBound { index });
            }
            Some(upper) if upper <= band.lower_bound => {
                return Err(ScheduleError::InvertedBand {
                    index,
                    lower: band.lower_bound,
                    upper,
                });
            }
            None if index != last_index => {
                return Err(ScheduleError::UnboundedNotLast { index });
            }
            _ => {}
        }

        if !band.rate.is_finite() || !(0.0..=1.0).contains(&band.rate) {
            return Err(ScheduleError::InvalidRate {
                index,
                rate: band.rate,
            });
        }

        if index == 0 {
            if band.lower_bound != 0.0 {
                return Err(ScheduleError::NonZeroStart {
                    lower: band.lower_bound,
                });
            }
        } else if let Some(expected) = bands[index - 1].upper_bound {
            if band.lower_bound != expected {
                return Err(ScheduleError::Gap {
                    index,
                    expected,
                    found: band.lower_bound,
                });
            }
        }
    }

    if !bands[last_index].is_unbounded() {
        return Err(ScheduleError::MissingUnbounded);
    }

    Ok(())
}

/// SHA-256 over the serialized band list
fn compute_schedule_hash(bands: &[Band]) -> Result<String, ScheduleError> {
    let bytes = serde_json::to_vec(bands)
        .map_err(|e| ScheduleError::Parse(format!("Schedule serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
