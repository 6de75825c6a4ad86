//! Two-tone test signal synthesizer.

use crate::error::{DspError, DspResult};
use sig_core::{Real, TWO_PI, ensure_finite};

/// Level of the fundamental tone in the mix.
const FUNDAMENTAL_LEVEL: Real = 0.45;
/// Level of the second-harmonic tone in the mix.
const OCTAVE_LEVEL: Real = 0.55;

/// Two-tone sine synthesizer: a fundamental plus its octave.
///
/// Produces `sin(2π·f·n/sps) * 0.45 + sin(2π·2f·n/sps) * 0.55` for sample
/// index `n`. The synthesizer is pure — it holds no signal state, so any
/// portion of the sequence can be re-derived from the index alone.
///
/// # Example
///
/// ```
/// use sig_dsp::TwoToneSynth;
///
/// let synth = TwoToneSynth::new(16_000.0, 200.0).unwrap();
/// assert_eq!(synth.sample(0), 0.0);
/// assert!(synth.sample(10) != 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TwoToneSynth {
    /// Sample rate in samples per second.
    sample_rate: Real,
    /// Fundamental tone frequency in Hz.
    freq: Real,
}

impl TwoToneSynth {
    /// Create a new synthesizer.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Samples per second (must be finite and positive)
    /// * `freq` - Fundamental frequency in Hz (must be finite)
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is non-finite or if
    /// `sample_rate` is not positive.
    pub fn new(sample_rate: Real, freq: Real) -> DspResult<Self> {
        ensure_finite(sample_rate, "sample_rate")?;
        ensure_finite(freq, "freq")?;
        if sample_rate <= 0.0 {
            return Err(DspError::InvalidArg {
                what: "sample_rate must be positive",
            });
        }
        Ok(Self { sample_rate, freq })
    }

    /// Compute the sample at index `n`.
    pub fn sample(&self, n: usize) -> Real {
        let phase = TWO_PI * self.freq * n as Real / self.sample_rate;
        phase.sin() * FUNDAMENTAL_LEVEL + (2.0 * phase).sin() * OCTAVE_LEVEL
    }

    /// Render the first `count` samples as a sequence.
    pub fn render(&self, count: usize) -> Vec<Real> {
        (0..count).map(|n| self.sample(n)).collect()
    }
}
