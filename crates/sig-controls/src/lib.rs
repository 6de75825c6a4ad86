//! Control primitives for sigflow.
//!
//! Provides the closed-loop building blocks:
//! - **PID controller**: proportional-integral-derivative correction from
//!   setpoint/measurement error, fixed timestep, deliberately unguarded
//!   integral (no windup limit, no output clamp)
//! - **First-order plant**: single-pole lag with a fixed lossy output
//!   attenuation, standing in for a physical process
//!
//! # Design Principles
//!
//! - **Config/state split**: controller and plant parameters are immutable
//!   configs; per-run state lives in explicit state structs owned by the
//!   driving loop
//! - **Divergence is not an error**: persistent error winds the integral
//!   up without bound; the output is reported as-is

pub mod error;
pub mod pid;
pub mod plant;

pub use error::{ControlError, ControlResult};
pub use pid::{PidController, PidState};
pub use plant::{FirstOrderPlant, PlantState};
