//! Error types for the transient simulator.
//!
//! This module provides a unified error type [`SimError`] covering invalid
//! configuration, unparsable selections and I/O failures. Degenerate
//! physical parameters (a zero capacitance, say) are deliberately not
//! represented here: the circuit models turn them into zero derivatives.

use thiserror::Error;

/// Result type alias using [`SimError`].
pub type Result<T> = std::result::Result<T, SimError>;

/// Unified error type for all simulator operations.
#[derive(Error, Debug)]
pub enum SimError {
    // ============ Configuration Errors ============
    /// Invalid simulation (timing grid) parameter
    #[error("Invalid simulation parameter: {message}")]
    InvalidSimulationParam { message: String },

    /// Invalid component or source parameter value
    #[error("Invalid parameter '{param}' for {component}: {message}")]
    InvalidParameter {
        component: String,
        param: String,
        message: String,
    },

    /// Unknown circuit topology selection
    #[error("Unknown circuit topology '{value}' (expected A, B, C or D)")]
    UnknownTopology { value: String },

    /// Unknown source selection
    #[error("Unknown source kind '{value}' (expected 1-5 or sine, step, triangle, square, rect)")]
    UnknownSourceKind { value: String },

    /// Unknown integration method selection
    #[error("Unknown integration method '{value}' (expected 1-4 or euler, euler2, rk4, heun)")]
    UnknownMethod { value: String },

    /// Malformed configuration file
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    // ============ I/O Errors ============
    /// Error reading a configuration file
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing simulation results
    #[error("Failed to write output '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SimError {
    /// Create an invalid simulation parameter error
    pub fn simulation_param(message: impl Into<String>) -> Self {
        Self::InvalidSimulationParam {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        component: impl Into<String>,
        param: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            component: component.into(),
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an output error for the given path
    pub fn output(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::simulation_param("step count must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid simulation parameter: step count must be greater than zero"
        );

        let err = SimError::invalid_parameter("circuit A", "resistance", "must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'resistance' for circuit A: must be finite"
        );
    }
}
