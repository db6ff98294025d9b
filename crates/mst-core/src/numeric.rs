use crate::error::{WeightError, WeightResult};

/// Edge weight type used throughout the system.
pub type Weight = f64;

/// One tolerance for comparing accumulated weights.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Weight,
    pub rel: Weight,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Weight, b: Weight, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Check that a weight is usable as an edge cost.
///
/// Returns the weight with `-0.0` folded to `0.0`, so equal weights
/// always have equal bit patterns.
pub fn check_weight(value: Weight) -> WeightResult<Weight> {
    if !value.is_finite() {
        return Err(WeightError::NonFinite { value });
    }
    if value < 0.0 {
        return Err(WeightError::Negative { value });
    }
    Ok(value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn check_weight_rejects_nan_and_negative() {
        let err = check_weight(Weight::NAN).unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
        assert_eq!(
            check_weight(-1.5),
            Err(WeightError::Negative { value: -1.5 })
        );
        assert!(check_weight(Weight::INFINITY).is_err());
    }

    #[test]
    fn check_weight_folds_negative_zero() {
        let w = check_weight(-0.0).unwrap();
        assert_eq!(w.to_bits(), 0.0_f64.to_bits());
    }
}
