//! Contract cost amount

use thiserror::Error;

/// Strictly positive, finite contract cost
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct CostAmount(f64);

impl CostAmount {
    pub fn new(value: f64) -> Result<Self, CostAmountError> {
        if !value.is_finite() {
            return Err(CostAmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(CostAmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostAmountError {
    #[error("cost amount must be positive, got {0}")]
    NotPositive(f64),
    #[error("cost amount must be a finite number")]
    NotFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert_eq!(CostAmount::new(120.0).unwrap().value(), 120.0);
        assert!(CostAmount::new(0.01).is_ok());
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(matches!(CostAmount::new(0.0), Err(CostAmountError::NotPositive(_))));
        assert!(matches!(CostAmount::new(-5.0), Err(CostAmountError::NotPositive(_))));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(matches!(CostAmount::new(f64::NAN), Err(CostAmountError::NotFinite)));
        assert!(matches!(CostAmount::new(f64::INFINITY), Err(CostAmountError::NotFinite)));
    }
}
