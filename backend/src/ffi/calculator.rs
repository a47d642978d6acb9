//! PyO3 wrapper for the band allocator

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{commission_result_to_py, parse_band_schedule};
use crate::schedule::BandSchedule;

/// Python wrapper around a validated band schedule
///
/// # Example (from Python)
///
/// ```python
/// from commission_engine_core_rs import CommissionCalculator
///
/// calc = CommissionCalculator()  # reference bands
/// result = calc.calculate(12000)
/// print(result["total_commission"])  # 800.0
///
/// custom = CommissionCalculator([
///     {"lower_bound": 0, "upper_bound": 1000, "rate": 0.0},
///     {"lower_bound": 1000, "upper_bound": None, "rate": 0.2},
/// ])
/// ```
#[pyclass(name = "CommissionCalculator")]
pub struct PyCommissionCalculator {
    schedule: BandSchedule,
}

#[pymethods]
impl PyCommissionCalculator {
    /// Create a calculator from a list of band dicts, or the reference
    /// table when omitted
    ///
    /// # Errors
    ///
    /// Raises ValueError if the bands are malformed.
    #[new]
    #[pyo3(signature = (bands=None))]
    fn new(bands: Option<&Bound<'_, PyList>>) -> PyResult<Self> {
        let schedule = match bands {
            Some(list) => parse_band_schedule(list)?,
            None => BandSchedule::reference(),
        };
        Ok(Self { schedule })
    }

    /// Allocate revenue and return the result as a dict
    ///
    /// Raises ValueError for negative or non-finite revenue.
    fn calculate(&self, py: Python<'_>, revenue: f64) -> PyResult<Py<PyDict>> {
        let result = self
            .schedule
            .allocate(revenue)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        commission_result_to_py(py, &result)
    }

    /// SHA-256 fingerprint of the band schedule
    fn fingerprint(&self) -> PyResult<String> {
        self.schedule
            .fingerprint()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Number of bands in the schedule
    fn __len__(&self) -> usize {
        self.schedule.len()
    }
}
