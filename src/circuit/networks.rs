//! State-space equations of the supported networks.
//!
//! Each network is a pure function provider: it holds its component values
//! and evaluates state derivatives for a given state and source voltage.
//! The state itself lives in the simulator.
//!
//! Whenever an equation would divide by a zero component product the
//! derivatives are forced to zero, which freezes the state instead of
//! producing infinities.

use std::f64::consts::PI;

use crate::DIODE_THRESHOLD_VOLTAGE;

/// RC low-pass filter (topology A).
///
/// ```text
/// dvs/dt = (ve - vs) / (R*C)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcLowPass {
    pub resistance: f64,
    pub capacitance: f64,
}

impl RcLowPass {
    /// Create a new RC low-pass network.
    pub fn new(resistance: f64, capacitance: f64) -> Self {
        Self {
            resistance,
            capacitance,
        }
    }

    /// Derivative of the output voltage.
    pub fn derivative(&self, vs: f64, ve: f64) -> f64 {
        let rc = self.resistance * self.capacitance;
        if rc == 0.0 {
            return 0.0;
        }
        (ve - vs) / rc
    }

    /// Time constant R*C.
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }
}

/// RC network with an ideal diode (topology B).
///
/// While the source exceeds the diode threshold the capacitor charges
/// through R and discharges through R2 at the same time; otherwise the
/// diode blocks and the capacitor only discharges through R2:
///
/// ```text
/// ve > vbe:  dvs/dt = -(1/(R*C) + 1/(R2*C)) * vs + (ve - vbe) / (R*C)
/// else:      dvs/dt = -vs / (R2*C)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcDiode {
    pub resistance: f64,
    pub resistance2: f64,
    pub capacitance: f64,
}

impl RcDiode {
    /// Create a new RC-diode network.
    pub fn new(resistance: f64, resistance2: f64, capacitance: f64) -> Self {
        Self {
            resistance,
            resistance2,
            capacitance,
        }
    }

    /// Derivative of the output voltage.
    pub fn derivative(&self, vs: f64, ve: f64) -> f64 {
        let rc = self.resistance * self.capacitance;
        let r2c = self.resistance2 * self.capacitance;
        if rc == 0.0 || r2c == 0.0 {
            return 0.0;
        }

        if ve > DIODE_THRESHOLD_VOLTAGE {
            -(1.0 / rc + 1.0 / r2c) * vs + (ve - DIODE_THRESHOLD_VOLTAGE) / rc
        } else {
            -vs / r2c
        }
    }

    /// Time constant of the charging path, C * (R || R2).
    pub fn time_constant(&self) -> f64 {
        let sum = self.resistance + self.resistance2;
        if sum == 0.0 {
            return 0.0;
        }
        self.capacitance * self.resistance * self.resistance2 / sum
    }
}

/// Series RLC (topology C). State is (capacitor voltage, loop current).
///
/// ```text
/// dvc/dt = i / C
/// di/dt  = (ve - R*i - vc) / L
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRlc {
    pub resistance: f64,
    pub inductance: f64,
    pub capacitance: f64,
}

impl SeriesRlc {
    /// Create a new series RLC network.
    pub fn new(resistance: f64, inductance: f64, capacitance: f64) -> Self {
        Self {
            resistance,
            inductance,
            capacitance,
        }
    }

    /// Derivatives of (vc, i).
    pub fn derivatives(&self, vc: f64, i: f64, ve: f64) -> (f64, f64) {
        if self.capacitance == 0.0 || self.inductance == 0.0 {
            return (0.0, 0.0);
        }
        let dvc = i / self.capacitance;
        let di = (ve - self.resistance * i - vc) / self.inductance;
        (dvc, di)
    }

    /// Envelope decay time 2L/R of the underdamped response.
    pub fn time_constant(&self) -> f64 {
        if self.resistance == 0.0 {
            return 0.0;
        }
        2.0 * self.inductance / self.resistance
    }

    /// Undamped natural frequency in Hz.
    pub fn natural_frequency(&self) -> Option<f64> {
        natural_frequency(self.inductance, self.capacitance)
    }
}

/// Parallel RLC (topology D). State is (capacitor voltage, inductor current).
///
/// ```text
/// dvc/dt = (i - vc/R) / C
/// di/dt  = (ve - vc) / L
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelRlc {
    pub resistance: f64,
    pub inductance: f64,
    pub capacitance: f64,
}

impl ParallelRlc {
    /// Create a new parallel RLC network.
    pub fn new(resistance: f64, inductance: f64, capacitance: f64) -> Self {
        Self {
            resistance,
            inductance,
            capacitance,
        }
    }

    /// Derivatives of (vc, i).
    pub fn derivatives(&self, vc: f64, i: f64, ve: f64) -> (f64, f64) {
        if self.capacitance == 0.0 || self.inductance == 0.0 || self.resistance == 0.0 {
            return (0.0, 0.0);
        }
        let dvc = (i - vc / self.resistance) / self.capacitance;
        let di = (ve - vc) / self.inductance;
        (dvc, di)
    }

    /// Envelope decay time 2RC of the underdamped response.
    pub fn time_constant(&self) -> f64 {
        2.0 * self.resistance * self.capacitance
    }

    /// Undamped natural frequency in Hz.
    pub fn natural_frequency(&self) -> Option<f64> {
        natural_frequency(self.inductance, self.capacitance)
    }
}

fn natural_frequency(inductance: f64, capacitance: f64) -> Option<f64> {
    let lc = inductance * capacitance;
    if lc > 0.0 {
        Some(1.0 / (2.0 * PI * lc.sqrt()))
    } else {
        None
    }
}
