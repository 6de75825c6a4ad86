//! DC blocking filter (single-pole high-pass).

use crate::block::SampleBlock;
use crate::error::{DspError, DspResult};
use sig_core::{Real, TWO_PI, ensure_finite};

/// Single-pole DC blocker, after Julius O. Smith's design.
///
/// Recurrence per sample `s`:
///
/// ```text
/// y[n] = s - x[n-1] + r * y[n-1]
/// ```
///
/// A smaller `r` tracks wandering DC levels faster at the cost of more
/// low-frequency attenuation. Stability requires `r` in `(0, 1)`; that is
/// the caller's responsibility — a pole at or above 1.0 is accepted and
/// simply diverges.
///
/// # Example
///
/// ```
/// use sig_dsp::{DcBlocker, SampleBlock};
///
/// let mut dc = DcBlocker::default();
/// // A constant input settles toward zero output.
/// let mut y = 0.0;
/// for _ in 0..10_000 {
///     y = dc.process(1.0);
/// }
/// assert!(y.abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DcBlocker {
    /// Pole (feedback coefficient).
    r: Real,
    /// Delayed input sample.
    x: Real,
    /// Previous output sample.
    y: Real,
}

impl DcBlocker {
    /// Default pole used when none is given.
    pub const DEFAULT_POLE: Real = 0.98;

    /// Create a DC blocker with pole `r`.
    pub fn new(r: Real) -> Self {
        Self { r, x: 0.0, y: 0.0 }
    }

    /// Create a DC blocker from a cutoff frequency and sample rate.
    ///
    /// Uses the first-order approximation `r = 1 - 2π·cutoff/sps`.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is non-finite or if
    /// `sample_rate` is not positive.
    pub fn from_cutoff(cutoff: Real, sample_rate: Real) -> DspResult<Self> {
        ensure_finite(cutoff, "cutoff")?;
        ensure_finite(sample_rate, "sample_rate")?;
        if sample_rate <= 0.0 {
            return Err(DspError::InvalidArg {
                what: "sample_rate must be positive",
            });
        }
        Ok(Self::new(1.0 - TWO_PI * cutoff / sample_rate))
    }

    /// The pole this blocker was built with.
    pub fn pole(&self) -> Real {
        self.r
    }
}

impl Default for DcBlocker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POLE)
    }
}

impl SampleBlock for DcBlocker {
    fn process(&mut self, sample: Real) -> Real {
        // Must read the delayed x and y from the previous call before
        // either is overwritten.
        self.y = sample - self.x + self.r * self.y;
        self.x = sample;
        self.y
    }

    fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }
}
