//! Run configuration.
//!
//! [`SimulationConfig`] gathers every input of a run as plain numbers and
//! selections. Its [`Default`] is the stock run: topology A with
//! R = 1 kOhm and C = 1 uF, driven by a 5 V / 50 Hz sine, integrated with
//! Euler over 20000 steps of a 500 ns window.
//!
//! With the `config` feature the configuration (de)serialises from YAML.
//! Every field is optional in the file:
//!
//! ```yaml
//! circuit:
//!   topology: C
//!   resistance: 47
//!   capacitance: 1.0e-6
//!   inductance: 1.0e-3
//! source:
//!   kind: square
//!   amplitude: 5
//!   frequency: 1000
//!   duty_cycle: 0.25
//! method: rk4
//! steps: 50000
//! t_max: 5.0e-3
//! ```

use crate::circuit::{CircuitModel, CircuitParams};
use crate::error::Result;
use crate::solver::{Method, Simulator, TimingGrid};
use crate::source::{SignalSource, SourceParams};
use crate::{DEFAULT_STEPS, DEFAULT_T_MAX};

/// Complete description of one simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Circuit topology and component values
    pub circuit: CircuitParams,
    /// Driving source
    pub source: SourceParams,
    /// Integration method
    pub method: Method,
    /// Number of time steps
    pub steps: usize,
    /// Simulated duration in seconds
    pub t_max: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            circuit: CircuitParams::default(),
            source: SourceParams::default(),
            method: Method::default(),
            steps: DEFAULT_STEPS,
            t_max: DEFAULT_T_MAX,
        }
    }
}

impl SimulationConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the circuit parameters.
    pub fn with_circuit(mut self, circuit: CircuitParams) -> Self {
        self.circuit = circuit;
        self
    }

    /// Set the source parameters.
    pub fn with_source(mut self, source: SourceParams) -> Self {
        self.source = source;
        self
    }

    /// Set the integration method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the time grid.
    pub fn with_grid(mut self, steps: usize, t_max: f64) -> Self {
        self.steps = steps;
        self.t_max = t_max;
        self
    }

    /// Validate the configuration and build a simulator from it.
    pub fn build(&self) -> Result<Simulator> {
        let grid = TimingGrid::new(self.steps, self.t_max)?;
        let circuit = CircuitModel::from_params(&self.circuit)?;
        let source = SignalSource::from_params(&self.source)?;
        Ok(Simulator::new(circuit, source, self.method, grid))
    }
}

#[cfg(feature = "config")]
impl SimulationConfig {
    /// Parse a YAML configuration. An empty document yields the defaults.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input).map_err(|e| crate::error::SimError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Read a YAML configuration file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| crate::error::SimError::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;
        Self::from_yaml_str(&content)
    }

    /// Serialise the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| crate::error::SimError::ConfigError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Topology;
    use crate::solver::Integrator;
    use crate::source::SourceKind;

    #[test]
    fn test_default_builds() {
        let sim = SimulationConfig::default().build().unwrap();
        assert_eq!(sim.circuit().topology(), Topology::RcLowPass);
        assert_eq!(sim.source().kind(), SourceKind::Sinusoidal);
        assert_eq!(sim.integrator(), Integrator::Euler1);
        assert_eq!(sim.grid().steps(), 20000);
    }

    #[test]
    fn test_build_rejects_zero_steps() {
        let config = SimulationConfig::new().with_grid(0, 1e-3);
        assert!(config.build().is_err());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new()
            .with_circuit(CircuitParams::new(Topology::SeriesRlc))
            .with_source(SourceParams::new(SourceKind::Step).with_amplitude(1.0))
            .with_method(Method::Heun)
            .with_grid(1000, 1e-3);
        let sim = config.build().unwrap();
        assert_eq!(sim.integrator(), Integrator::Heun);
        assert_eq!(sim.source().ve(0.0), 1.0);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_partial() {
        let yaml = r#"
circuit:
  topology: D
  resistance: 220
source:
  kind: rect
  duty_cycle: 0.25
method: heun
steps: 100
"#;
        let config = SimulationConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.circuit.topology, Topology::ParallelRlc);
        assert_eq!(config.circuit.resistance, 220.0);
        assert_eq!(config.circuit.capacitance, 1e-6);
        assert_eq!(config.source.kind, SourceKind::Rectangular);
        assert_eq!(config.source.duty_cycle, 0.25);
        assert_eq!(config.source.amplitude, 5.0);
        assert_eq!(config.method, Method::Heun);
        assert_eq!(config.steps, 100);
        assert_eq!(config.t_max, DEFAULT_T_MAX);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_empty_is_default() {
        assert_eq!(
            SimulationConfig::from_yaml_str("  \n").unwrap(),
            SimulationConfig::default()
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_roundtrip_default() {
        let config = SimulationConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SimulationConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_rejects_unknown_topology() {
        let err = SimulationConfig::from_yaml_str("circuit:\n  topology: Z\n").unwrap_err();
        assert!(matches!(err, crate::error::SimError::ConfigError { .. }));
    }
}
