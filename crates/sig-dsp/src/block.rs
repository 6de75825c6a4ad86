//! The per-sample processing seam shared by every filter stage.

use sig_core::Real;

/// A stateful single-input/single-output sample transform.
///
/// This generalizes the callable-object pattern: each stage exposes one
/// `process` operation that consumes a sample, mutates internal state, and
/// returns the output sample. Driver loops own their blocks exclusively,
/// so no interior mutability or locking is involved.
pub trait SampleBlock {
    /// Process one sample, advancing internal state.
    fn process(&mut self, sample: Real) -> Real;

    /// Return the block to its initial (zeroed) state.
    ///
    /// Coefficients are retained; only the signal memory is cleared.
    fn reset(&mut self);

    /// Process a buffer in place, sample by sample in index order.
    fn process_buffer(&mut self, samples: &mut [Real]) {
        for s in samples {
            *s = self.process(*s);
        }
    }
}
