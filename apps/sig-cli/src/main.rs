use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use sig_sim::{
    ControlLoopConfig, ControlLoopRecord, FilterChainConfig, FilterChainRecord, SimError,
    run_control_loop, run_filter_chain,
};

#[derive(Parser)]
#[command(name = "sig-cli")]
#[command(about = "Sigflow CLI - scalar DSP and control loop pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the filter chain: two-tone synth -> DC blocker -> integrator
    FilterChain {
        /// Sample rate in samples per second
        #[arg(long, default_value_t = 16_000.0)]
        sample_rate: f64,
        /// Fundamental tone frequency in Hz
        #[arg(long, default_value_t = 200.0)]
        tone_freq: f64,
        /// Number of samples to produce
        #[arg(long, default_value_t = 500)]
        samples: usize,
        /// DC blocker pole
        #[arg(long, default_value_t = 0.98)]
        dc_pole: f64,
        /// Integrator output gain
        #[arg(long, default_value_t = 0.1)]
        integrator_gain: f64,
        /// YAML scenario file (replaces all flags above)
        #[arg(long, conflicts_with_all = [
            "sample_rate", "tone_freq", "samples", "dc_pole", "integrator_gain",
        ])]
        scenario: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the closed-loop PID/plant simulation
    ControlLoop {
        /// Number of steps to simulate
        #[arg(long, default_value_t = 1000)]
        steps: usize,
        /// Setpoint to drive the plant toward
        #[arg(long, default_value_t = 1.0)]
        setpoint: f64,
        /// Proportional gain
        #[arg(long, default_value_t = 0.05)]
        kp: f64,
        /// Integral gain
        #[arg(long, default_value_t = 0.5)]
        ki: f64,
        /// Derivative gain
        #[arg(long, default_value_t = 0.001)]
        kd: f64,
        /// Controller timestep in seconds
        #[arg(long, default_value_t = 0.001)]
        dt: f64,
        /// Plant pole
        #[arg(long, default_value_t = 0.95)]
        plant_pole: f64,
        /// YAML scenario file (replaces all flags above)
        #[arg(long, conflicts_with_all = [
            "steps", "setpoint", "kp", "ki", "kd", "dt", "plant_pole",
        ])]
        scenario: Option<PathBuf>,
        /// Export format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One row per step, comma-separated
    Csv,
    /// Pretty-printed record object
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Scenario file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Controller error: {0}")]
    Control(#[from] sig_controls::ControlError),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::FilterChain {
            sample_rate,
            tone_freq,
            samples,
            dc_pole,
            integrator_gain,
            scenario,
            format,
            output,
        } => {
            let config = match scenario {
                Some(path) => load_scenario(&path)?,
                None => FilterChainConfig {
                    sample_rate,
                    tone_freq,
                    samples,
                    dc_pole,
                    integrator_gain,
                },
            };
            let record = run_filter_chain(&config)?;
            export_filter_chain(&record, format, output.as_deref())
        }
        Commands::ControlLoop {
            steps,
            setpoint,
            kp,
            ki,
            kd,
            dt,
            plant_pole,
            scenario,
            format,
            output,
        } => {
            let config = match scenario {
                Some(path) => load_scenario(&path)?,
                None => ControlLoopConfig {
                    steps,
                    setpoint,
                    pid: sig_controls::PidController::new(kp, ki, kd, dt)?,
                    plant_pole,
                },
            };
            let record = run_control_loop(&config)?;
            export_control_loop(&record, format, output.as_deref())
        }
    }
}

fn load_scenario<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

fn export_filter_chain(
    record: &FilterChainRecord,
    format: Format,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(record)?,
        Format::Csv => {
            let mut csv = String::from("n,input,output\n");
            for (n, (i, o)) in record.input.iter().zip(&record.output).enumerate() {
                csv.push_str(&format!("{n},{i},{o}\n"));
            }
            csv
        }
    };
    write_output(&text, output)
}

fn export_control_loop(
    record: &ControlLoopRecord,
    format: Format,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(record)?,
        Format::Csv => {
            let mut csv = String::from("step,command,plant_output,reference_output\n");
            for t in 0..record.command.len() {
                csv.push_str(&format!(
                    "{},{},{},{}\n",
                    t, record.command[t], record.plant_output[t], record.reference_output[t]
                ));
            }
            csv
        }
    };
    write_output(&text, output)
}

fn write_output(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}
