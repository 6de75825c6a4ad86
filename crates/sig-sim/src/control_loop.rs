//! Closed-loop driver: PID controller and first-order plant.

use crate::error::SimResult;
use serde::{Deserialize, Serialize};
use sig_controls::{FirstOrderPlant, PidController, PidState, PlantState};

/// Options for a control loop run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLoopConfig {
    /// Number of steps to simulate.
    pub steps: usize,
    /// Setpoint the loop drives the plant toward.
    pub setpoint: f64,
    /// Controller gains and timestep.
    pub pid: PidController,
    /// Pole shared by the loop plant and the reference plant.
    pub plant_pole: f64,
}

impl Default for ControlLoopConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            setpoint: 1.0,
            pid: PidController::default(),
            plant_pole: FirstOrderPlant::DEFAULT_POLE,
        }
    }
}

/// Record of a control loop run: all three sequences have length
/// `config.steps` and are indexed by step starting at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLoopRecord {
    /// Accumulated controller command fed to the loop plant.
    pub command: Vec<f64>,
    /// Output of the closed-loop plant.
    pub plant_output: Vec<f64>,
    /// Output of the open-loop reference plant fed the setpoint directly.
    pub reference_output: Vec<f64>,
}

/// Run the closed-loop simulation.
///
/// Per step:
/// 1. the reference plant is fed the constant setpoint (comparison trace),
/// 2. the loop plant is fed the current command,
/// 3. the PID correction for the resulting measurement is added to the
///    command, which is then recorded.
///
/// # Errors
///
/// Returns an error if the configured PID timestep is not positive.
pub fn run_control_loop(config: &ControlLoopConfig) -> SimResult<ControlLoopRecord> {
    tracing::debug!(
        steps = config.steps,
        setpoint = config.setpoint,
        plant_pole = config.plant_pole,
        "running control loop"
    );

    // Re-validate the timestep: configs may arrive from a scenario file
    // rather than `PidController::new`.
    let pid = PidController::new(config.pid.kp, config.pid.ki, config.pid.kd, config.pid.dt)?;
    let plant = FirstOrderPlant::new(config.plant_pole);

    let mut pid_state = PidState::default();
    let mut loop_state = PlantState::default();
    let mut ref_state = PlantState::default();
    let mut command = 0.0;

    let mut commands = Vec::with_capacity(config.steps);
    let mut plant_output = Vec::with_capacity(config.steps);
    let mut reference_output = Vec::with_capacity(config.steps);

    for _ in 0..config.steps {
        let (next_ref, ref_out) = plant.step(&ref_state, config.setpoint);
        ref_state = next_ref;
        reference_output.push(ref_out);

        let (next_loop, measured) = plant.step(&loop_state, command);
        loop_state = next_loop;
        plant_output.push(measured);

        let (next_pid, correction) = pid.update(&pid_state, config.setpoint, measured);
        pid_state = next_pid;
        command += correction;
        commands.push(command);
    }

    Ok(ControlLoopRecord {
        command: commands,
        plant_output,
        reference_output,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn record_lengths_match_request(
            steps in 0_usize..300,
            setpoint in -5.0_f64..5.0_f64,
            plant_pole in 0.0_f64..1.0_f64,
        ) {
            let config = ControlLoopConfig {
                steps,
                setpoint,
                plant_pole,
                ..ControlLoopConfig::default()
            };
            let record = run_control_loop(&config).unwrap();
            prop_assert_eq!(record.command.len(), steps);
            prop_assert_eq!(record.plant_output.len(), steps);
            prop_assert_eq!(record.reference_output.len(), steps);
        }
    }
}
