//! Coupling of a circuit and a source into derivative callables.
//!
//! The integrators only know about closures of time and state. A
//! [`Binder`] closes over a circuit and a source so that each callable
//! evaluates the source at the requested time and delegates to the
//! circuit equations.

use crate::circuit::CircuitModel;
use crate::source::SignalSource;

/// Borrowed pairing of a circuit with its driving source.
///
/// The binder owns neither; both must outlive every callable it produces.
#[derive(Debug, Clone, Copy)]
pub struct Binder<'a> {
    circuit: &'a CircuitModel,
    source: &'a SignalSource,
}

impl<'a> Binder<'a> {
    /// Bind a circuit to a source.
    pub fn new(circuit: &'a CircuitModel, source: &'a SignalSource) -> Self {
        Self { circuit, source }
    }

    /// The bound circuit.
    pub fn circuit(&self) -> &'a CircuitModel {
        self.circuit
    }

    /// The bound source.
    pub fn source(&self) -> &'a SignalSource {
        self.source
    }

    /// `f(t, x) -> dx/dt` for a first-order circuit.
    pub fn first_order(&self) -> impl Fn(f64, f64) -> f64 + 'a {
        let (circuit, source) = (self.circuit, self.source);
        move |t, x| circuit.deriv1(t, x, source.ve(t))
    }

    /// `f(t, x1, x2) -> (dx1/dt, dx2/dt)` for a second-order circuit.
    ///
    /// Both components come from a single evaluation of the circuit
    /// equations.
    pub fn second_order(&self) -> impl Fn(f64, f64, f64) -> (f64, f64) + 'a {
        let (circuit, source) = (self.circuit, self.source);
        move |t, x1, x2| circuit.deriv2(t, x1, x2, source.ve(t))
    }

    /// `f(t, x1, x2) -> dx1/dt` alone, for callers that integrate each
    /// component with its own callable.
    pub fn second_order_x1(&self) -> impl Fn(f64, f64, f64) -> f64 + 'a {
        let paired = self.second_order();
        move |t, x1, x2| paired(t, x1, x2).0
    }

    /// `f(t, x1, x2) -> dx2/dt` alone.
    pub fn second_order_x2(&self) -> impl Fn(f64, f64, f64) -> f64 + 'a {
        let paired = self.second_order();
        move |t, x1, x2| paired(t, x1, x2).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_order_evaluates_source_at_t() {
        let circuit = CircuitModel::rc_low_pass(1000.0, 1e-6, 50.0);
        let source = SignalSource::step(2.0, 1e-3, 0.0);
        let f = Binder::new(&circuit, &source).first_order();

        // Before the step the source is 0: pure discharge
        assert_relative_eq!(f(0.5e-3, 1.0), -1000.0);
        // After the step: (2 - 1) / RC
        assert_relative_eq!(f(2e-3, 1.0), 1000.0);
        // Negative time: source is 0
        assert_relative_eq!(f(-1.0, 0.5), -500.0);
    }

    #[test]
    fn test_diode_circuit_uses_own_r2() {
        let circuit = CircuitModel::rc_diode(1000.0, 4000.0, 1e-6, 50.0);
        let source = SignalSource::step(0.5, 0.0, 0.0);
        let f = Binder::new(&circuit, &source).first_order();
        // 0.5 V is below the diode threshold: discharge through R2 only
        assert_relative_eq!(f(1.0, 2.0), -500.0);
    }

    #[test]
    fn test_split_callables_match_paired() {
        let circuit = CircuitModel::series_rlc(47.0, 2.2e-6, 4.7e-3, 50.0);
        let source = SignalSource::sinusoidal(5.0, 1000.0, 0.3);
        let binder = Binder::new(&circuit, &source);
        let paired = binder.second_order();
        let f_a = binder.second_order_x1();
        let f_b = binder.second_order_x2();

        for i in 0..50 {
            let t = i as f64 * 3.7e-5;
            let (x1, x2) = (0.1 * i as f64, -0.002 * i as f64);
            let (d1, d2) = paired(t, x1, x2);
            assert_eq!(f_a(t, x1, x2).to_bits(), d1.to_bits());
            assert_eq!(f_b(t, x1, x2).to_bits(), d2.to_bits());
        }
    }
}
