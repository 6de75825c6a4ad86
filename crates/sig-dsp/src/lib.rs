//! Per-sample DSP blocks for sigflow.
//!
//! This crate provides the stateful scalar transforms that the simulation
//! drivers chain together:
//! - Two-tone test synthesizer (pure, restartable)
//! - DC blocker (single-pole high-pass)
//! - Leaky integrator (accumulate-and-scale)
//! - Utility stages: one-pole low-pass, envelope follower, gain, clip,
//!   differentiator
//!
//! # Design Principles
//!
//! - **One sample in, one sample out**: every block implements
//!   [`SampleBlock`] and is driven one sample at a time
//! - **Exclusive ownership**: a block is owned and mutated by exactly one
//!   driver loop for the duration of a run; there is no shared state
//! - **Divergence is not an error**: unstable coefficients produce large
//!   or infinite outputs, never panics or `Err` values

pub mod block;
pub mod dc_blocker;
pub mod error;
pub mod fx;
pub mod integrator;
pub mod synth;

pub use block::SampleBlock;
pub use dc_blocker::DcBlocker;
pub use error::{DspError, DspResult};
pub use fx::{Clip, Differentiator, EnvelopeFollower, Gain, OnePoleLowPass};
pub use integrator::LeakyIntegrator;
pub use synth::TwoToneSynth;
