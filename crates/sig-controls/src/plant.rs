//! First-order plant model.

use serde::{Deserialize, Serialize};
use sig_core::Real;

/// Fixed lossy transfer applied to the plant output.
const OUTPUT_LOSS: Real = 0.7;

/// First-order lag standing in for a physical process.
///
/// Per step with input `u`:
///
/// ```text
/// y      = y*a + u*(1 - a)
/// output = y * 0.7
/// ```
///
/// The pole `a` should lie in `[0, 1]` for a physically meaningful lag;
/// this is the caller's responsibility and is not validated. At `a = 0`
/// the state follows the input exactly (pass-through scaled by the loss);
/// at `a = 1` the state is frozen and the input is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstOrderPlant {
    /// Pole (filter coefficient) of the lag.
    pub pole: Real,
}

impl FirstOrderPlant {
    /// Default pole.
    pub const DEFAULT_POLE: Real = 0.95;

    /// Create a plant with pole `a`.
    pub fn new(pole: Real) -> Self {
        Self { pole }
    }

    /// Advance the plant one step with input `u`.
    ///
    /// # Returns
    ///
    /// Updated state and the lossy output `y * 0.7`.
    pub fn step(&self, state: &PlantState, u: Real) -> (PlantState, Real) {
        let y = state.y * self.pole + u * (1.0 - self.pole);
        (PlantState { y }, y * OUTPUT_LOSS)
    }
}

impl Default for FirstOrderPlant {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POLE)
    }
}

/// Plant state (the internal filtered value).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlantState {
    /// Internal first-order state.
    pub y: Real,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pole_is_lossy_pass_through() {
        let plant = FirstOrderPlant::new(0.0);
        let mut state = PlantState::default();
        for u in [1.0, -2.0, 0.5, 4.0] {
            let (next, out) = plant.step(&state, u);
            assert_eq!(out, u * 0.7);
            state = next;
        }
    }

    #[test]
    fn unit_pole_freezes_state() {
        let plant = FirstOrderPlant::new(1.0);
        let state = PlantState { y: 0.25 };
        let (next, out) = plant.step(&state, 100.0);
        assert_eq!(next.y, 0.25);
        assert_eq!(out, 0.25 * 0.7);
    }

    #[test]
    fn step_response_approaches_lossy_input() {
        let plant = FirstOrderPlant::default();
        let mut state = PlantState::default();
        let mut out = 0.0;
        for _ in 0..1_000 {
            let (next, o) = plant.step(&state, 1.0);
            state = next;
            out = o;
        }
        // Steady state: y -> 1.0, output -> 0.7.
        assert!((out - 0.7).abs() < 1e-6);
    }

    #[test]
    fn single_step_matches_recurrence() {
        let plant = FirstOrderPlant::new(0.95);
        let (state, out) = plant.step(&PlantState::default(), 1.0);
        assert!((state.y - 0.05).abs() < 1e-15);
        assert!((out - 0.05 * 0.7).abs() < 1e-15);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn state_stays_between_input_and_previous(
            a in 0.0_f64..=1.0_f64,
            y0 in -10.0_f64..10.0_f64,
            u in -10.0_f64..10.0_f64,
        ) {
            let plant = FirstOrderPlant::new(a);
            let (next, _) = plant.step(&PlantState { y: y0 }, u);
            let lo = y0.min(u) - 1e-12;
            let hi = y0.max(u) + 1e-12;
            prop_assert!(next.y >= lo && next.y <= hi);
        }
    }
}
