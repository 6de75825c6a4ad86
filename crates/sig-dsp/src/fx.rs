//! Utility filter stages.
//!
//! Small building blocks that pair with the DC blocker and integrator when
//! assembling longer chains: a one-pole low-pass, an envelope follower,
//! plain gain, hard clip, and a first-difference stage.

use crate::block::SampleBlock;
use crate::error::{DspError, DspResult};
use sig_core::{Real, TWO_PI, ensure_finite};

/// Basic one-pole low-pass filter (6 dB/oct).
///
/// `y += a * (s - y)` where `a` is the smoothing coefficient. `a = 1`
/// passes the input through; small `a` tracks slowly.
#[derive(Debug, Clone, PartialEq)]
pub struct OnePoleLowPass {
    /// Smoothing coefficient.
    a: Real,
    /// Current value.
    y: Real,
}

impl OnePoleLowPass {
    /// Create a low-pass with an explicit coefficient.
    pub fn new(a: Real) -> Self {
        Self { a, y: 0.0 }
    }

    /// Create a low-pass from a cutoff frequency and sample rate.
    ///
    /// Uses `a = 1 - e^(-2π·cutoff/sps)`.
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
        Ok(Self::new(1.0 - (-TWO_PI * cutoff / sample_rate).exp()))
    }
}

impl SampleBlock for OnePoleLowPass {
    fn process(&mut self, sample: Real) -> Real {
        self.y += self.a * (sample - self.y);
        self.y
    }

    fn reset(&mut self) {
        self.y = 0.0;
    }
}

/// Envelope follower with gradual decay.
///
/// Follows peaks instantly; when the input falls below the current
/// envelope, the envelope decays toward it by the fraction `d` per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeFollower {
    /// Decay fraction per sample.
    d: Real,
    /// Current envelope value.
    y: Real,
}

impl EnvelopeFollower {
    /// Default decay fraction.
    pub const DEFAULT_DECAY: Real = 0.001;

    /// Create an envelope follower with decay `d`.
    pub fn new(d: Real) -> Self {
        Self { d, y: 0.0 }
    }

    /// The current envelope value without consuming a sample.
    pub fn value(&self) -> Real {
        self.y
    }
}

impl Default for EnvelopeFollower {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DECAY)
    }
}

impl SampleBlock for EnvelopeFollower {
    fn process(&mut self, sample: Real) -> Real {
        if sample > self.y {
            self.y = sample;
        } else {
            self.y -= (self.y - sample) * self.d;
        }
        self.y
    }

    fn reset(&mut self) {
        self.y = 0.0;
    }
}

/// Simple gain (amplifier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    /// Multiplier.
    pub g: Real,
}

impl Gain {
    pub fn new(g: Real) -> Self {
        Self { g }
    }
}

impl SampleBlock for Gain {
    fn process(&mut self, sample: Real) -> Real {
        sample * self.g
    }

    fn reset(&mut self) {}
}

/// Hard clip to the range `-m..=m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    /// Maximum magnitude.
    pub m: Real,
}

impl Clip {
    pub fn new(m: Real) -> Self {
        Self { m }
    }
}

impl Default for Clip {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SampleBlock for Clip {
    fn process(&mut self, sample: Real) -> Real {
        sample.clamp(-self.m, self.m)
    }

    fn reset(&mut self) {}
}

/// First difference: the discrete time derivative of the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Differentiator {
    /// Delayed input sample.
    x: Real,
}

impl Differentiator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SampleBlock for Differentiator {
    fn process(&mut self, sample: Real) -> Real {
        let out = sample - self.x;
        self.x = sample;
        out
    }

    fn reset(&mut self) {
        self.x = 0.0;
    }
}
