//! The polymorphic circuit model consumed by the integrators.

use super::networks::{ParallelRlc, RcDiode, RcLowPass, SeriesRlc};
use super::types::{CircuitParams, Order, Topology};
use super::validate::validate_params;
use crate::error::Result;

/// One of the four supported networks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Network {
    RcLowPass(RcLowPass),
    RcDiode(RcDiode),
    SeriesRlc(SeriesRlc),
    ParallelRlc(ParallelRlc),
}

impl Network {
    /// Topology tag of this network.
    pub fn topology(&self) -> Topology {
        match self {
            Network::RcLowPass(_) => Topology::RcLowPass,
            Network::RcDiode(_) => Topology::RcDiode,
            Network::SeriesRlc(_) => Topology::SeriesRlc,
            Network::ParallelRlc(_) => Topology::ParallelRlc,
        }
    }
}

/// A circuit ready for simulation.
///
/// Component values are fixed at construction. The model holds no state
/// variables: the simulator passes the present state into [`deriv1`] or
/// [`deriv2`] on every evaluation.
///
/// [`deriv1`]: CircuitModel::deriv1
/// [`deriv2`]: CircuitModel::deriv2
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitModel {
    network: Network,
    /// Nominal driving frequency in Hz (informational)
    frequency: f64,
    time_constant: f64,
}

impl CircuitModel {
    fn from_network(network: Network, frequency: f64) -> Self {
        let time_constant = match &network {
            Network::RcLowPass(n) => n.time_constant(),
            Network::RcDiode(n) => n.time_constant(),
            Network::SeriesRlc(n) => n.time_constant(),
            Network::ParallelRlc(n) => n.time_constant(),
        };
        Self {
            network,
            frequency,
            time_constant,
        }
    }

    /// Create an RC low-pass circuit (topology A).
    pub fn rc_low_pass(resistance: f64, capacitance: f64, frequency: f64) -> Self {
        Self::from_network(
            Network::RcLowPass(RcLowPass::new(resistance, capacitance)),
            frequency,
        )
    }

    /// Create an RC-diode circuit (topology B).
    pub fn rc_diode(resistance: f64, resistance2: f64, capacitance: f64, frequency: f64) -> Self {
        Self::from_network(
            Network::RcDiode(RcDiode::new(resistance, resistance2, capacitance)),
            frequency,
        )
    }

    /// Create a series RLC circuit (topology C).
    pub fn series_rlc(resistance: f64, capacitance: f64, inductance: f64, frequency: f64) -> Self {
        Self::from_network(
            Network::SeriesRlc(SeriesRlc::new(resistance, inductance, capacitance)),
            frequency,
        )
    }

    /// Create a parallel RLC circuit (topology D).
    pub fn parallel_rlc(resistance: f64, capacitance: f64, inductance: f64, frequency: f64) -> Self {
        Self::from_network(
            Network::ParallelRlc(ParallelRlc::new(resistance, inductance, capacitance)),
            frequency,
        )
    }

    /// Validate parameters and build the circuit they describe.
    pub fn from_params(params: &CircuitParams) -> Result<Self> {
        validate_params(params)?;

        let p = params;
        Ok(match p.topology {
            Topology::RcLowPass => Self::rc_low_pass(p.resistance, p.capacitance, p.frequency),
            Topology::RcDiode => {
                Self::rc_diode(p.resistance, p.resistance2, p.capacitance, p.frequency)
            }
            Topology::SeriesRlc => {
                Self::series_rlc(p.resistance, p.capacitance, p.inductance, p.frequency)
            }
            Topology::ParallelRlc => {
                Self::parallel_rlc(p.resistance, p.capacitance, p.inductance, p.frequency)
            }
        })
    }

    /// The underlying network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Topology tag.
    pub fn topology(&self) -> Topology {
        self.network.topology()
    }

    /// Number of state variables.
    pub fn order(&self) -> Order {
        self.topology().order()
    }

    /// Nominal driving frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Characteristic time scale of the network (informational).
    ///
    /// R*C for A, C*(R || R2) for B, and the envelope decay time of the
    /// underdamped response for C (2L/R) and D (2RC).
    pub fn time_constant(&self) -> f64 {
        self.time_constant
    }

    /// Undamped natural frequency in Hz, for second-order networks.
    pub fn natural_frequency(&self) -> Option<f64> {
        match &self.network {
            Network::SeriesRlc(n) => n.natural_frequency(),
            Network::ParallelRlc(n) => n.natural_frequency(),
            _ => None,
        }
    }

    /// Derivative of the single state of a first-order circuit.
    ///
    /// Returns 0 for second-order circuits.
    pub fn deriv1(&self, _t: f64, x: f64, ve: f64) -> f64 {
        match &self.network {
            Network::RcLowPass(n) => n.derivative(x, ve),
            Network::RcDiode(n) => n.derivative(x, ve),
            _ => 0.0,
        }
    }

    /// Derivatives of both states of a second-order circuit.
    ///
    /// Returns (0, 0) for first-order circuits.
    pub fn deriv2(&self, _t: f64, x1: f64, x2: f64, ve: f64) -> (f64, f64) {
        match &self.network {
            Network::SeriesRlc(n) => n.derivatives(x1, x2, ve),
            Network::ParallelRlc(n) => n.derivatives(x1, x2, ve),
            _ => (0.0, 0.0),
        }
    }
}
