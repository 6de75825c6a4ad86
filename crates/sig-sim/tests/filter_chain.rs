//! Integration test: two-tone synth -> DC blocker -> leaky integrator.
//!
//! Exercises the default scenario end to end:
//! - Sequence lengths match the requested sample count
//! - First output sample is exactly zero (zero-phase sine through zeroed
//!   filter state)
//! - The processed signal carries no DC offset

use sig_dsp::{DcBlocker, LeakyIntegrator, SampleBlock, TwoToneSynth};
use sig_sim::{FilterChainConfig, run_filter_chain};

#[test]
fn default_run_produces_500_samples() {
    let record = run_filter_chain(&FilterChainConfig::default()).unwrap();
    assert_eq!(record.input.len(), 500);
    assert_eq!(record.output.len(), 500);
}

#[test]
fn first_sample_is_exactly_zero() {
    let record = run_filter_chain(&FilterChainConfig::default()).unwrap();
    // synth(0) = 0, and the DC blocker and integrator both start zeroed,
    // so the first processed sample is 0 * gain = 0 exactly.
    assert_eq!(record.input[0], 0.0);
    assert_eq!(record.output[0], 0.0);
}

#[test]
fn matches_manual_chain() {
    let config = FilterChainConfig::default();
    let record = run_filter_chain(&config).unwrap();

    let synth = TwoToneSynth::new(config.sample_rate, config.tone_freq).unwrap();
    let mut dc = DcBlocker::new(config.dc_pole);
    let mut integ = LeakyIntegrator::new(config.integrator_gain);

    for n in 0..config.samples {
        let s = synth.sample(n);
        assert_eq!(record.input[n], s);
        assert_eq!(record.output[n], integ.process(dc.process(s)));
    }
}

#[test]
fn processed_signal_stays_bounded() {
    // DC blocking ahead of the integrator keeps the accumulator from
    // drifting: over a long run the integrated output remains a bounded
    // oscillation instead of a ramp.
    let config = FilterChainConfig {
        samples: 16_000,
        ..FilterChainConfig::default()
    };
    let record = run_filter_chain(&config).unwrap();

    let peak = record.output.iter().fold(0.0_f64, |m, &v| m.max(v.abs()));
    assert!(peak.is_finite());
    assert!(peak < 5.0, "integrated output drifted to {peak}");
}

#[test]
fn output_is_deterministic_across_runs() {
    let config = FilterChainConfig::default();
    let a = run_filter_chain(&config).unwrap();
    let b = run_filter_chain(&config).unwrap();
    assert_eq!(a, b);
}
