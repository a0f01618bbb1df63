//! Circuit parameter validation.

use tracing::warn;

use crate::error::{Result, SimError};

use super::{CircuitParams, Topology};

/// Validate circuit parameters before building a model.
///
/// Checks:
/// - Every component value used by the topology is finite and non-negative
/// - The informational frequency is finite and non-negative
///
/// Zero-valued components are accepted: they describe a degenerate network
/// whose derivatives are zero. A warning is logged for each of them.
pub fn validate_params(params: &CircuitParams) -> Result<()> {
    let component = format!("circuit {}", params.topology);

    let mut used = vec![
        ("resistance", params.resistance),
        ("capacitance", params.capacitance),
    ];
    if params.topology == Topology::RcDiode {
        used.push(("resistance2", params.resistance2));
    }
    if params.topology.uses_inductance() {
        used.push(("inductance", params.inductance));
    }

    for (name, value) in used {
        check_non_negative(&component, name, value)?;
        if value == 0.0 {
            warn!(
                circuit = %params.topology,
                param = name,
                "zero component value, derivatives will be held at zero"
            );
        }
    }

    check_non_negative(&component, "frequency", params.frequency)?;

    Ok(())
}

/// Reject NaN, infinite and negative values.
pub(crate) fn check_non_negative(component: &str, param: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimError::invalid_parameter(component, param, "must be finite"));
    }
    if value < 0.0 {
        return Err(SimError::invalid_parameter(
            component,
            param,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        for topology in [
            Topology::RcLowPass,
            Topology::RcDiode,
            Topology::SeriesRlc,
            Topology::ParallelRlc,
        ] {
            assert!(validate_params(&CircuitParams::new(topology)).is_ok());
        }
    }

    #[test]
    fn test_zero_values_are_accepted() {
        let params = CircuitParams::new(Topology::ParallelRlc)
            .with_resistance(0.0)
            .with_capacitance(0.0)
            .with_inductance(0.0);
        assert!(validate_params(&params).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = CircuitParams::new(Topology::RcLowPass).with_capacitance(f64::NAN);
        let err = validate_params(&params).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { ref param, .. } if param == "capacitance"));
    }

    #[test]
    fn test_unused_fields_ignored() {
        // Inductance is irrelevant for topology A
        let params = CircuitParams::new(Topology::RcLowPass).with_inductance(-1.0);
        assert!(validate_params(&params).is_ok());

        // R2 only matters for topology B
        let params = CircuitParams::new(Topology::RcDiode).with_resistance2(-5.0);
        assert!(validate_params(&params).is_err());
    }
}
