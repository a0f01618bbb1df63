//! # RLC Transient
//!
//! A fixed-step transient simulator for small RC, RC-diode and RLC networks.
//!
//! This library provides:
//! - State-space models of four network topologies (first and second order)
//! - Five driving waveforms (sine, step, triangle, square, rectangular)
//! - Explicit fixed-step integrators (Euler, Heun, RK4) for 1- and 2-state systems
//! - A simulation driver producing `(t, Vin, Vout)` records
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit models and their differential equations
//! - [`source`] - Driving voltage waveforms
//! - [`solver`] - Integrators, circuit/source binding and the simulation loop
//! - [`config`] - Run configuration (YAML with the `config` feature)
//! - [`output`] - CSV serialisation of results
//! - [`units`] - Engineering-notation values (`4.7u`, `10k`)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! rlcsim --topology C -r 47 -c 1u -l 1m --source square --frequency 1000 \
//!        --method rk4 -n 50000 --t-max 5e-3 -o out.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use rlc_transient::{CircuitModel, Method, SignalSource, Simulator, TimingGrid};
//!
//! let circuit = CircuitModel::rc_low_pass(1000.0, 1e-6, 50.0);
//! let source = SignalSource::step(5.0, 0.0, 0.0);
//! let grid = TimingGrid::new(1000, 10e-3).unwrap();
//!
//! let records = Simulator::new(circuit, source, Method::Rk4, grid).run();
//! assert_eq!(records.len(), 1001);
//! ```
//!
//! ## Simulation Method
//!
//! For each grid point `t = i * dt`, `i = 0..=n`:
//!
//! 1. Sample the source `ve(t)` for the record
//! 2. Advance the state from `t` to `t + dt` with the selected integrator
//! 3. Snap state values below 1e-12 in magnitude to zero
//! 4. Record `(t, ve(t), x1)`

pub mod circuit;
pub mod config;
pub mod error;
pub mod output;
pub mod solver;
pub mod source;
pub mod units;

// Re-export main types for convenience
pub use circuit::{CircuitModel, CircuitParams, Order, Topology};
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use solver::{Method, Record, SimulationState, Simulator, TimingGrid};
pub use source::{SignalSource, SourceKind, SourceParams};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmTransientSim;

/// Default number of time steps
pub const DEFAULT_STEPS: usize = 20_000;

/// Default simulated duration in seconds
pub const DEFAULT_T_MAX: f64 = 500e-9;

/// Forward threshold of the ideal diode in topology B (volts)
pub const DIODE_THRESHOLD_VOLTAGE: f64 = 0.6;

/// State values smaller than this in magnitude are recorded as 0
pub const SNAP_THRESHOLD: f64 = 1e-12;
