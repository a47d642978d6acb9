//! Calculation session
//!
//! Holds the caller-side state around the allocator: the schedule in use,
//! the latest request, and the last accepted result.
//!
//! Only the most recent request may publish a result. A request that is
//! overtaken by a newer one, or by a reset, completes without touching the
//! session, so a slow stale calculation can never overwrite a newer one.
//!
//! # Example
//!
//! ```
//! use commission_engine_core_rs::session::CommissionSession;
//!
//! let mut session = CommissionSession::default();
//!
//! let first = session.begin("7000").unwrap();
//! let second = session.begin("12000").unwrap();
//!
//! // The first request was superseded and is discarded
//! assert!(session.complete(&first).unwrap().is_none());
//!
//! let outcome = session.complete(&second).unwrap().unwrap();
//! assert_eq!(outcome.result.total_commission, 800.0);
//! ```

use crate::allocator::CommissionError;
use crate::input::{parse_revenue, ZeroRevenuePolicy};
use crate::models::CommissionResult;
use crate::schedule::BandSchedule;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// A calculation that has been accepted for processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    id: Uuid,
    revenue: f64,
}

impl CalculationRequest {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }
}

/// A published result and the request that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub request_id: Uuid,
    pub revenue: f64,
    pub result: CommissionResult,
}

/// Latest-request-wins calculation state
#[derive(Debug, Clone)]
pub struct CommissionSession {
    schedule: BandSchedule,
    policy: ZeroRevenuePolicy,
    /// Request currently allowed to publish, if any
    pending: Option<Uuid>,
    current: Option<CalculationOutcome>,
}

impl CommissionSession {
    /// Create a session over a schedule and zero-revenue policy
    pub fn new(schedule: BandSchedule, policy: ZeroRevenuePolicy) -> Self {
        Self {
            schedule,
            policy,
            pending: None,
            current: None,
        }
    }

    /// Create a session over a schedule read from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CommissionError::Schedule` if the file cannot be read,
    /// parsed, or validated.
    pub fn from_json_file(
        path: impl AsRef<Path>,
        policy: ZeroRevenuePolicy,
    ) -> Result<Self, CommissionError> {
        let schedule = BandSchedule::from_json_file(path)?;
        Ok(Self::new(schedule, policy))
    }

    /// Validate input and register a new request
    ///
    /// The new request supersedes any request still in flight. Invalid
    /// input is rejected without changing the session.
    pub fn begin(&mut self, revenue_text: &str) -> Result<CalculationRequest, CommissionError> {
        let revenue = parse_revenue(revenue_text, self.policy)?;

        let request = CalculationRequest {
            id: Uuid::new_v4(),
            revenue,
        };

        if let Some(previous) = self.pending.replace(request.id) {
            debug!(%previous, superseded_by = %request.id, "request superseded");
        }

        Ok(request)
    }

    /// Run a request and publish its result if it is still the latest
    ///
    /// # Returns
    ///
    /// - `Ok(Some(outcome))` if the result was published
    /// - `Ok(None)` if the request was superseded or reset; nothing changes
    pub fn complete(
        &mut self,
        request: &CalculationRequest,
    ) -> Result<Option<&CalculationOutcome>, CommissionError> {
        if self.pending != Some(request.id) {
            debug!(request_id = %request.id, "discarding stale result");
            return Ok(None);
        }

        let outcome = self.run(request);
        self.pending = None;

        Ok(Some(&*self.current.insert(outcome?)))
    }

    /// Begin and complete a request in one step
    pub fn calculate(&mut self, revenue_text: &str) -> Result<&CalculationOutcome, CommissionError> {
        let request = self.begin(revenue_text)?;
        let outcome = self.run(&request);
        self.pending = None;

        Ok(&*self.current.insert(outcome?))
    }

    /// Clear the published result and abandon any request in flight
    pub fn reset(&mut self) {
        self.pending = None;
        self.current = None;
    }

    /// True while a request is waiting to complete
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Last published result
    pub fn current(&self) -> Option<&CalculationOutcome> {
        self.current.as_ref()
    }

    pub fn schedule(&self) -> &BandSchedule {
        &self.schedule
    }

    pub fn policy(&self) -> ZeroRevenuePolicy {
        self.policy
    }

    fn run(&self, request: &CalculationRequest) -> Result<CalculationOutcome, CommissionError> {
        let result = self.schedule.allocate(request.revenue)?;
        Ok(CalculationOutcome {
            request_id: request.id,
            revenue: request.revenue,
            result,
        })
    }
}

impl Default for CommissionSession {
    fn default() -> Self {
        Self::new(BandSchedule::reference(), ZeroRevenuePolicy::default())
    }
}
