//! rlcsim - RC / RLC transient simulator
//!
//! Simulates the response of a small network to a driving waveform and
//! writes `(t, Vin, Vout)` as CSV.
//!
//! # Usage
//!
//! ```bash
//! rlcsim --topology B -r 1k --r2 2.2k -c 100n --source triangular --frequency 500 \
//!        --method heun -n 20000 --t-max 10m -o diode.csv
//! RUST_LOG=debug rlcsim --config run.yaml -o -
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rlc_transient::{
    error::{Result, SimError},
    output::write_csv,
    units::parse_quantity,
    Method, SimulationConfig, SourceKind, Topology,
};

/// Transient simulator for RC, RC-diode and RLC circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML run configuration; command line options override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Circuit topology (A, B, C or D)
    #[arg(long)]
    topology: Option<Topology>,

    /// Resistance R in ohms
    #[arg(short = 'r', long, value_parser = parse_quantity)]
    resistance: Option<f64>,

    /// Second resistance R2 of the diode circuit, in ohms
    #[arg(long, value_parser = parse_quantity)]
    r2: Option<f64>,

    /// Capacitance C in farads
    #[arg(short = 'c', long, value_parser = parse_quantity)]
    capacitance: Option<f64>,

    /// Inductance L in henries
    #[arg(short = 'l', long, value_parser = parse_quantity)]
    inductance: Option<f64>,

    /// Source waveform (1-5 or sinusoidal, step, triangular, square, rectangular)
    #[arg(long)]
    source: Option<SourceKind>,

    /// Source amplitude in volts
    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true)]
    amplitude: Option<f64>,

    /// Source frequency in hertz
    #[arg(long, value_parser = parse_quantity)]
    frequency: Option<f64>,

    /// Source DC offset in volts
    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true)]
    offset: Option<f64>,

    /// High fraction of the period for square and rectangular sources
    #[arg(long)]
    duty_cycle: Option<f64>,

    /// Switching time of the step source, in seconds
    #[arg(long, value_parser = parse_quantity)]
    start_time: Option<f64>,

    /// Integration method (1-4 or euler, euler2, rk4, heun)
    #[arg(long)]
    method: Option<Method>,

    /// Number of time steps
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Simulated duration in seconds
    #[arg(long, value_parser = parse_quantity)]
    t_max: Option<f64>,

    /// Output CSV file, or '-' for stdout
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "resultats/simulations/circuit_output.csv"
    )]
    output: PathBuf,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    /// Overlay the command line values on a configuration.
    fn apply(&self, mut config: SimulationConfig) -> SimulationConfig {
        let circuit = &mut config.circuit;
        if let Some(topology) = self.topology {
            circuit.topology = topology;
        }
        if let Some(r) = self.resistance {
            circuit.resistance = r;
        }
        if let Some(r2) = self.r2 {
            circuit.resistance2 = r2;
        }
        if let Some(c) = self.capacitance {
            circuit.capacitance = c;
        }
        if let Some(l) = self.inductance {
            circuit.inductance = l;
        }

        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(amplitude) = self.amplitude {
            config.source.amplitude = amplitude;
        }
        if let Some(frequency) = self.frequency {
            config.source.frequency = frequency;
            config.circuit.frequency = frequency;
        }
        if let Some(offset) = self.offset {
            config.source.offset = offset;
        }
        if let Some(duty_cycle) = self.duty_cycle {
            config.source.duty_cycle = duty_cycle;
        }
        if let Some(start_time) = self.start_time {
            config.source.start_time = start_time;
        }

        if let Some(method) = self.method {
            config.method = method;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(t_max) = self.t_max {
            config.t_max = t_max;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let base = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    let config = args.apply(base);

    if args.dump_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let mut simulator = config.build()?;
    let records = simulator.run();

    let target = args.output.display().to_string();
    if target == "-" {
        let stdout = io::stdout();
        write_csv(&records, &mut stdout.lock()).map_err(|e| SimError::output(&target, e))?;
    } else {
        if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SimError::output(&target, e))?;
        }
        let file = File::create(&args.output).map_err(|e| SimError::output(&target, e))?;
        write_csv(&records, &mut BufWriter::new(file))
            .map_err(|e| SimError::output(&target, e))?;
    }

    info!(
        points = records.len(),
        t_end = records.last().map_or(0.0, |r| r.time),
        output = %target,
        "simulation written"
    );
    Ok(())
}
