//! Core types for circuit selection and parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// The four supported network topologies.
///
/// Letters follow the historical menu of the simulator (A-D) and are what
/// [`fmt::Display`] prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// A: RC low-pass filter
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "A", alias = "a", alias = "rc"))]
    RcLowPass,
    /// B: RC network charged through an ideal diode, discharged through R2
    #[cfg_attr(feature = "serde", serde(rename = "B", alias = "b", alias = "rc-diode"))]
    RcDiode,
    /// C: series RLC
    #[cfg_attr(feature = "serde", serde(rename = "C", alias = "c", alias = "rlc-series"))]
    SeriesRlc,
    /// D: parallel RLC
    #[cfg_attr(feature = "serde", serde(rename = "D", alias = "d", alias = "rlc-parallel"))]
    ParallelRlc,
}

impl Topology {
    /// Menu letter of the topology.
    pub fn letter(&self) -> char {
        match self {
            Topology::RcLowPass => 'A',
            Topology::RcDiode => 'B',
            Topology::SeriesRlc => 'C',
            Topology::ParallelRlc => 'D',
        }
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Topology::RcLowPass => "RC low-pass",
            Topology::RcDiode => "RC with diode",
            Topology::SeriesRlc => "series RLC",
            Topology::ParallelRlc => "parallel RLC",
        }
    }

    /// Number of state variables of this topology.
    pub fn order(&self) -> Order {
        match self {
            Topology::RcLowPass | Topology::RcDiode => Order::First,
            Topology::SeriesRlc | Topology::ParallelRlc => Order::Second,
        }
    }

    /// Whether this topology uses an inductance.
    pub fn uses_inductance(&self) -> bool {
        self.order() == Order::Second
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Topology {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "rc" | "lowpass" | "low-pass" => Ok(Self::RcLowPass),
            "b" | "rcd" | "rc-diode" | "diode" => Ok(Self::RcDiode),
            "c" | "rlc-series" | "series" => Ok(Self::SeriesRlc),
            "d" | "rlc-parallel" | "parallel" => Ok(Self::ParallelRlc),
            _ => Err(SimError::UnknownTopology {
                value: s.to_string(),
            }),
        }
    }
}

/// Number of independent state variables of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// One state variable (the output voltage)
    First,
    /// Two state variables (capacitor voltage and inductor current)
    Second,
}

impl Order {
    /// Order as a number (1 or 2).
    pub fn as_usize(&self) -> usize {
        match self {
            Order::First => 1,
            Order::Second => 2,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Plain numeric description of a circuit, as supplied by the CLI or a
/// configuration file.
///
/// Fields not used by the selected topology are ignored: `inductance` only
/// matters for C and D, `resistance2` only for B.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CircuitParams {
    /// Selected topology
    pub topology: Topology,
    /// Resistance R (R1 for topology B), in ohms
    pub resistance: f64,
    /// Discharge resistance R2 of topology B, in ohms
    pub resistance2: f64,
    /// Capacitance, in farads
    pub capacitance: f64,
    /// Inductance, in henrys
    pub inductance: f64,
    /// Nominal driving frequency in Hz (informational)
    pub frequency: f64,
}

impl Default for CircuitParams {
    fn default() -> Self {
        Self {
            topology: Topology::default(),
            resistance: 1000.0,
            resistance2: 1000.0,
            capacitance: 1e-6,
            inductance: 1e-3,
            frequency: 50.0,
        }
    }
}

impl CircuitParams {
    /// Create default parameters for the given topology.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    /// Set the resistance (R1 for topology B).
    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Set the discharge resistance of topology B.
    pub fn with_resistance2(mut self, resistance2: f64) -> Self {
        self.resistance2 = resistance2;
        self
    }

    /// Set the capacitance.
    pub fn with_capacitance(mut self, capacitance: f64) -> Self {
        self.capacitance = capacitance;
        self
    }

    /// Set the inductance.
    pub fn with_inductance(mut self, inductance: f64) -> Self {
        self.inductance = inductance;
        self
    }

    /// Set the nominal driving frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }
}
