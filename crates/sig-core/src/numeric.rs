use crate::SigError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

/// Full circle in radians. Angular frequency is `TWO_PI * freq / sample_rate`.
pub const TWO_PI: Real = 2.0 * std::f64::consts::PI;

/// One tolerance pair for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Approximate equality under combined absolute/relative tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities at an API boundary.
///
/// Divergence *inside* a running filter is not an error (poles at or past
/// 1.0 are allowed to blow up); this guard is only for inputs that must be
/// finite at construction time.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SigError::NonFinite { what, value: v })
    }
}
