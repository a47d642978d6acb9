//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::{Band, CommissionResult};
use crate::schedule::BandSchedule;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if:
/// - Field is missing
/// - Type conversion fails
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field from a Python dict.
///
/// A missing key and an explicit `None` both give `None`.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert a list of band dicts to a validated schedule
///
/// Each dict needs `lower_bound` and `rate`; `upper_bound` is optional
/// (missing or `None` = unbounded).
///
/// # Errors
///
/// Returns PyValueError if a field is missing, a conversion fails, or the
/// bands break a schedule invariant.
pub fn parse_band_schedule(py_bands: &Bound<'_, PyList>) -> PyResult<BandSchedule> {
    let mut bands = Vec::with_capacity(py_bands.len());

    for item in py_bands.iter() {
        let dict = item.downcast::<PyDict>()?;
        bands.push(Band {
            lower_bound: extract_required(dict, "lower_bound")?,
            upper_bound: extract_optional(dict, "upper_bound")?,
            rate: extract_required(dict, "rate")?,
        });
    }

    BandSchedule::new(bands).map_err(|e| PyValueError::new_err(e.to_string()))
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert CommissionResult to a Python dict
///
/// ```python
/// {
///     "total_commission": 200.0,
///     "breakdown": [
///         {"label": "£0 - £5000", "rate": 0.0, "allocated": 5000.0, "amount": 0.0},
///         ...
///     ],
/// }
/// ```
pub fn commission_result_to_py(py: Python<'_>, result: &CommissionResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("total_commission", result.total_commission)?;

    let breakdown = PyList::empty_bound(py);
    for band in &result.breakdown {
        let row = PyDict::new_bound(py);
        row.set_item("label", &band.label)?;
        row.set_item("rate", band.rate)?;
        row.set_item("allocated", band.allocated)?;
        row.set_item("amount", band.amount)?;
        breakdown.append(row)?;
    }
    dict.set_item("breakdown", breakdown)?;

    Ok(dict.into())
}
