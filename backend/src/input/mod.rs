//! Revenue input validation
//!
//! Turns caller-supplied revenue (text from a form or a raw number) into a
//! value the allocator accepts. Whether zero is a valid revenue is a policy
//! decision left to the caller.

use crate::allocator::CommissionError;
use serde::{Deserialize, Serialize};

/// How a zero revenue is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroRevenuePolicy {
    /// Zero is valid and yields a zero commission
    #[default]
    Allow,
    /// Only strictly positive revenue is accepted
    Reject,
}

/// Check a numeric revenue against the input contract
///
/// # Errors
///
/// Returns `CommissionError::InvalidInput` if the value is NaN, infinite,
/// negative, or zero under [`ZeroRevenuePolicy::Reject`].
pub fn validate_revenue(revenue: f64, policy: ZeroRevenuePolicy) -> Result<f64, CommissionError> {
    if !revenue.is_finite() {
        return Err(CommissionError::InvalidInput(format!(
            "revenue must be a finite number, got {}",
            revenue
        )));
    }

    if revenue < 0.0 {
        return Err(CommissionError::InvalidInput(format!(
            "revenue must not be negative, got {}",
            revenue
        )));
    }

    if revenue == 0.0 && policy == ZeroRevenuePolicy::Reject {
        return Err(CommissionError::InvalidInput(
            "revenue must be greater than 0".to_string(),
        ));
    }

    // Normalise -0.0
    Ok(revenue.abs())
}

/// Parse revenue from user-entered text
///
/// Surrounding whitespace is ignored.
///
/// # Example
/// ```
/// use commission_engine_core_rs::input::{parse_revenue, ZeroRevenuePolicy};
///
/// assert_eq!(parse_revenue(" 12000 ", ZeroRevenuePolicy::Allow).unwrap(), 12_000.0);
/// assert!(parse_revenue("abc", ZeroRevenuePolicy::Allow).is_err());
/// assert!(parse_revenue("0", ZeroRevenuePolicy::Reject).is_err());
/// ```
pub fn parse_revenue(text: &str, policy: ZeroRevenuePolicy) -> Result<f64, CommissionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CommissionError::InvalidInput(
            "revenue is required".to_string(),
        ));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        CommissionError::InvalidInput(format!("'{}' is not a number", trimmed))
    })?;

    validate_revenue(value, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(parse_revenue("", ZeroRevenuePolicy::Allow).is_err());
        assert!(parse_revenue("   ", ZeroRevenuePolicy::Allow).is_err());
        assert!(parse_revenue("abc", ZeroRevenuePolicy::Allow).is_err());
        assert!(parse_revenue("12,000", ZeroRevenuePolicy::Allow).is_err());
    }

    #[test]
    fn test_rejects_non_finite_text() {
        assert!(parse_revenue("NaN", ZeroRevenuePolicy::Allow).is_err());
        assert!(parse_revenue("inf", ZeroRevenuePolicy::Allow).is_err());
    }

    #[test]
    fn test_rejects_negative() {
        let err = parse_revenue("-5", ZeroRevenuePolicy::Allow).unwrap_err();
        assert_eq!(
            err,
            CommissionError::InvalidInput("revenue must not be negative, got -5".to_string())
        );
    }

    #[test]
    fn test_zero_follows_policy() {
        assert_eq!(parse_revenue("0", ZeroRevenuePolicy::Allow).unwrap(), 0.0);
        assert!(parse_revenue("0", ZeroRevenuePolicy::Reject).is_err());
    }

    #[test]
    fn test_negative_zero_normalised() {
        let value = validate_revenue(-0.0, ZeroRevenuePolicy::Allow).unwrap();
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_default_policy_allows_zero() {
        assert_eq!(ZeroRevenuePolicy::default(), ZeroRevenuePolicy::Allow);
    }
}
