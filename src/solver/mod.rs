//! Time-domain solver.
//!
//! This module provides the numerical engine of the simulator.
//!
//! ## Fixed-step integration
//!
//! A circuit is described by a state-space model
//!
//! ```text
//! dx/dt = f(t, x, ve(t))
//! ```
//!
//! where `x` holds one or two state variables and `ve` is the driving
//! source. The [`Binder`] closes over a circuit and a source to produce
//! `f` as a plain closure of `(t, x)`, and one of the integrators in
//! [`integrators`] advances `x` by `dt`:
//!
//! | Method | Order 1 | Order 2 | Evaluations per step |
//! |--------|---------|---------|----------------------|
//! | Euler | [`euler1`] | [`euler2`] | 1 |
//! | Heun | [`heun_order1`] | [`heun`] | 2 |
//! | RK4 | [`rk4_order1`] | [`rk4`] | 4 |
//!
//! The [`Simulator`] owns the time grid and the state, picks the integrator
//! matching the circuit order and records `(t, ve, x1)` at every grid point.

mod binder;
pub mod integrators;
mod method;
mod simulator;

pub use binder::Binder;
pub use integrators::{euler1, euler2, heun, heun_order1, rk4, rk4_order1};
pub use method::{Integrator, Method};
pub use simulator::{Record, SimulationState, Simulator, TimingGrid};
