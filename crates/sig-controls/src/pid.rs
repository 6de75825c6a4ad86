//! PID controller.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};
use sig_core::{Real, ensure_finite};

/// PID controller configuration.
///
/// No-frills proportional-integral-derivative controller with a fixed
/// timestep. The integral accumulates without a windup limit and the
/// output is not clamped; both are characteristic behavior to keep, so a
/// persistent error produces an unbounded (possibly infinite) output
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidController {
    /// Proportional gain.
    pub kp: Real,
    /// Integral gain.
    pub ki: Real,
    /// Derivative gain.
    pub kd: Real,
    /// Fixed timestep (seconds). Must be positive.
    pub dt: Real,
}

impl PidController {
    /// Create a new PID controller.
    ///
    /// # Arguments
    ///
    /// * `kp` - Proportional gain
    /// * `ki` - Integral gain
    /// * `kd` - Derivative gain
    /// * `dt` - Fixed timestep in seconds (must be positive; the
    ///   derivative term divides by it)
    ///
    /// # Errors
    ///
    /// Returns an error if any gain is non-finite or if `dt` is not
    /// finite and positive.
    pub fn new(kp: Real, ki: Real, kd: Real, dt: Real) -> ControlResult<Self> {
        ensure_finite(kp, "kp")?;
        ensure_finite(ki, "ki")?;
        ensure_finite(kd, "kd")?;
        ensure_finite(dt, "dt")?;
        if dt <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "dt must be positive",
            });
        }
        Ok(Self { kp, ki, kd, dt })
    }

    /// Compute controller output given setpoint and measured value.
    ///
    /// ```text
    /// error      = sp - pv
    /// integral  += error * dt
    /// derivative = (error - prev_error) / dt
    /// output     = kp*error + ki*integral + kd*derivative
    /// ```
    ///
    /// # Returns
    ///
    /// Updated state and output value.
    pub fn update(&self, state: &PidState, setpoint: Real, measured: Real) -> (PidState, Real) {
        let error = setpoint - measured;

        let p_term = self.kp * error;

        let integral = state.integral + error * self.dt;
        let i_term = self.ki * integral;

        let derivative = (error - state.prev_error) / self.dt;
        let d_term = self.kd * derivative;

        let new_state = PidState {
            integral,
            prev_error: error,
        };

        (new_state, p_term + i_term + d_term)
    }
}

impl Default for PidController {
    fn default() -> Self {
        Self {
            kp: 0.05,
            ki: 0.5,
            kd: 0.001,
            dt: 0.001,
        }
    }
}

/// PID controller state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PidState {
    /// Integral accumulator.
    pub integral: Real,
    /// Error from the previous update, for the derivative term.
    pub prev_error: Real,
}
