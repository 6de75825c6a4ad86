//! Pipeline drivers for sigflow.
//!
//! Provides:
//! - Filter chain: two-tone synth -> DC blocker -> leaky integrator
//! - Control loop: PID driving a first-order plant toward a setpoint,
//!   with an open-loop reference plant for comparison
//!
//! Both drivers are strictly single-threaded and synchronous: step `t+1`
//! depends on state mutated at step `t`, so samples are produced in index
//! order and the loops cannot be parallelized. Each run owns its component
//! instances and discards them at the end; there is no state shared across
//! runs.

pub mod control_loop;
pub mod error;
pub mod filter_chain;

pub use control_loop::{ControlLoopConfig, ControlLoopRecord, run_control_loop};
pub use error::{SimError, SimResult};
pub use filter_chain::{FilterChainConfig, FilterChainRecord, run_filter_chain};
