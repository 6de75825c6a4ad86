//! Leaky integrator (accumulate-and-scale stage).

use crate::block::SampleBlock;
use sig_core::Real;

/// Accumulate-and-scale integrator.
///
/// Per sample: `acc += s; output = acc * g`. There is no internal decay
/// term — the accumulator grows with the raw input sum, and any "leak" in
/// a pipeline comes from upstream DC blocking. Preserved exactly as
/// observed in the reference behavior.
///
/// # Example
///
/// ```
/// use sig_dsp::{LeakyIntegrator, SampleBlock};
///
/// let mut integ = LeakyIntegrator::new(0.1);
/// assert_eq!(integ.process(1.0), 0.1);
/// assert_eq!(integ.process(2.0), (1.0 + 2.0) * 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LeakyIntegrator {
    /// Output gain.
    gain: Real,
    /// Running input sum.
    acc: Real,
}

impl LeakyIntegrator {
    /// Default output gain.
    pub const DEFAULT_GAIN: Real = 0.1;

    /// Create an integrator with output gain `gain`.
    pub fn new(gain: Real) -> Self {
        Self { gain, acc: 0.0 }
    }

    /// The gain this integrator was built with.
    pub fn gain(&self) -> Real {
        self.gain
    }
}

impl Default for LeakyIntegrator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GAIN)
    }
}

impl SampleBlock for LeakyIntegrator {
    fn process(&mut self, sample: Real) -> Real {
        self.acc += sample;
        self.acc * self.gain
    }

    fn reset(&mut self) {
        self.acc = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_are_scaled_prefix_sums() {
        let g = 0.1;
        let mut integ = LeakyIntegrator::new(g);
        let a = 1.5;
        let b = -0.5;
        let c = 2.0;
        assert_eq!(integ.process(a), a * g);
        assert_eq!(integ.process(b), (a + b) * g);
        assert_eq!(integ.process(c), (a + b + c) * g);
    }

    #[test]
    fn default_gain() {
        let integ = LeakyIntegrator::default();
        assert_eq!(integ.gain(), 0.1);
    }

    #[test]
    fn reset_clears_accumulator() {
        let mut integ = LeakyIntegrator::new(0.5);
        integ.process(4.0);
        integ.reset();
        assert_eq!(integ.process(4.0), 2.0);
    }
}
