//! Commission Engine Core - Rust Engine
//!
//! Progressive band commission calculation with a per-band breakdown.
//!
//! # Architecture
//!
//! - **models**: Domain types (Band, BandResult, CommissionResult)
//! - **schedule**: Validated band tables, JSON loading, fingerprints
//! - **allocator**: The band allocation algorithm
//! - **input**: Revenue parsing and zero-revenue policy
//! - **format**: Currency, percentage and range-label rendering
//! - **session**: Latest-request-wins calculation state
//!
//! # Critical Invariants
//!
//! 1. `total_commission` equals the ordered sum of breakdown amounts
//! 2. Allocation is pure: same revenue + same bands → same result
//! 3. Negative or non-finite revenue never reaches the algorithm

// Module declarations
pub mod allocator;
pub mod format;
pub mod input;
pub mod models;
pub mod schedule;
pub mod session;

// Re-exports for convenience
pub use allocator::{allocate, CommissionError};
pub use input::{parse_revenue, ZeroRevenuePolicy};
pub use models::{Band, BandResult, CommissionResult};
pub use schedule::{BandSchedule, ScheduleError};
pub use session::{CalculationOutcome, CalculationRequest, CommissionSession};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn commission_engine_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::calculator::PyCommissionCalculator>()?;
    Ok(())
}
